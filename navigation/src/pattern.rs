//! URL path patterns with `:name` positional parameters.
//!
//! Patterns are normalized on parse: empty segments are dropped, so
//! `/ship//:id/` and `/ship/:id` are the same pattern. Concrete paths are
//! normalized the same way before matching.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::percent_decode_str;

use crate::error::NavigationError;

/// Parameters captured from a concrete path, keyed by parameter name.
pub type Params = BTreeMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed path pattern such as `/ship/:id/operation`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// The root pattern `/`.
    #[must_use]
    pub fn root() -> Self {
        Self { segments: Vec::new() }
    }

    /// Parse a pattern. A leading `/` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::InvalidPattern`] for empty or repeated
    /// parameter names and for segments containing `?` or `#`.
    pub fn parse(raw: &str) -> Result<Self, NavigationError> {
        let invalid = |reason| NavigationError::InvalidPattern { pattern: raw.to_owned(), reason };
        let mut segments = Vec::new();
        for part in raw.split('/').filter(|s| !s.is_empty()) {
            if part.contains(['?', '#']) {
                return Err(invalid("query or fragment characters in path"));
            }
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                    return Err(invalid("parameter names must be non-empty identifiers"));
                }
                if segments.iter().any(|s| matches!(s, Segment::Param(n) if n == name)) {
                    return Err(invalid("repeated parameter name"));
                }
                segments.push(Segment::Param(name.to_owned()));
            } else {
                segments.push(Segment::Static(part.to_owned()));
            }
        }
        Ok(Self { segments })
    }

    /// Concatenate `child` onto this pattern.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::InvalidPattern`] if the joined pattern
    /// repeats a parameter name.
    pub fn join(&self, child: &PathPattern) -> Result<Self, NavigationError> {
        let joined = Self { segments: self.segments.iter().chain(&child.segments).cloned().collect() };
        // Re-parse to apply the parameter-name checks to the combined pattern.
        Self::parse(&joined.to_string())
    }

    /// Whether this pattern begins with every segment of `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &PathPattern) -> bool {
        self.segments.len() >= prefix.segments.len()
            && self.segments.iter().zip(&prefix.segments).all(|(a, b)| a == b)
    }

    /// Whether two patterns match exactly the same set of concrete paths.
    #[must_use]
    pub fn same_shape(&self, other: &PathPattern) -> bool {
        self.segments.len() == other.segments.len()
            && self.segments.iter().zip(&other.segments).all(|pair| match pair {
                (Segment::Static(a), Segment::Static(b)) => a == b,
                (Segment::Param(_), Segment::Param(_)) => true,
                _ => false,
            })
    }

    /// Number of literal segments; used to rank overlapping matches.
    #[must_use]
    pub fn static_count(&self) -> usize {
        self.segments.iter().filter(|s| matches!(s, Segment::Static(_))).count()
    }

    /// Match a concrete path (no query string) and capture its parameters.
    ///
    /// Parameter values are percent-decoded; a value that does not decode to
    /// UTF-8 makes the path not match.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = Params::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = percent_decode_str(part).decode_utf8().ok()?;
                    params.insert(name.clone(), value.into_owned());
                }
            }
        }
        Some(params)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            match segment {
                Segment::Static(s) => write!(f, "/{s}")?,
                Segment::Param(name) => write!(f, "/:{name}")?,
            }
        }
        Ok(())
    }
}
