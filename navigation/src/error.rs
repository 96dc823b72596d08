//! Error type shared by route table construction, session storage, and the
//! auth phase machine.

use crate::phase::AuthPhase;

/// Error returned by fallible navigation operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// A path pattern could not be parsed.
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },
    /// Two leaf routes resolve the same concrete URLs.
    #[error("duplicate route path `{path}` (already declared as `{existing}`)")]
    DuplicatePath { path: String, existing: String },
    /// An absolute child path does not extend its parent's path.
    #[error("route `{path}` is not nested under its parent `{parent}`")]
    NestedPathMismatch { path: String, parent: String },
    /// An index route declared children.
    #[error("index route under `{parent}` cannot declare children")]
    IndexWithChildren { parent: String },
    /// A pathless layout route declared no children.
    #[error("layout route under `{parent}` must declare children")]
    EmptyLayout { parent: String },
    /// The auth phase machine received an event it cannot handle.
    #[error("cannot {event} while {from}")]
    InvalidTransition { from: AuthPhase, event: &'static str },
    /// A percent-encoded value contained invalid escapes or bytes.
    #[error("malformed percent-encoding in `{0}`")]
    MalformedEncoding(String),
    /// The session store rejected a write.
    #[error("session storage unavailable: {0}")]
    Storage(String),
}
