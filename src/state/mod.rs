//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only the session is shared across pages; each page owns the data it
//! fetches.

pub mod session;
