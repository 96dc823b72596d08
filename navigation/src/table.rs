//! Flattened, validated route table.
//!
//! ARCHITECTURE
//! ============
//! The route tree is flattened once at construction: each leaf becomes an
//! entry holding its full pattern, effective access, nesting depth, and the
//! chain of layout targets above it. Matching is a linear scan; the table is
//! a few dozen entries at most.
//!
//! Tie-break for overlapping leaves: more literal segments, then deeper
//! nesting, then non-index, then first declared.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::error::NavigationError;
use crate::pattern::{Params, PathPattern};
use crate::route::{Access, Route, RoutePath, RouteSpec};

struct Entry<T> {
    pattern: PathPattern,
    access: Access,
    depth: usize,
    index: bool,
    layouts: Vec<usize>,
    target: T,
}

impl<T> Entry<T> {
    fn rank(&self) -> (usize, usize, bool) {
        (self.pattern.static_count(), self.depth, !self.index)
    }
}

/// A leaf selected for a concrete path.
#[derive(Debug)]
pub struct RouteMatch<'t, T> {
    /// The leaf's render target.
    pub target: &'t T,
    /// Layout targets wrapping the leaf, outermost first.
    pub layouts: Vec<&'t T>,
    /// Parameters captured from the path.
    pub params: Params,
    /// Effective access of the leaf.
    pub access: Access,
    /// Full pattern of the leaf.
    pub pattern: &'t PathPattern,
}

/// Static route table built from a route tree.
pub struct RouteTable<T> {
    layouts: Vec<T>,
    entries: Vec<Entry<T>>,
}

impl<T> RouteTable<T> {
    /// Flatten and validate a route tree.
    ///
    /// # Errors
    ///
    /// Returns a [`NavigationError`] for unparsable patterns, duplicate leaf
    /// paths, absolute child paths outside their parent, index routes with
    /// children, and layouts without children.
    pub fn new(routes: impl IntoIterator<Item = Route<T>>) -> Result<Self, NavigationError> {
        let mut table = Self { layouts: Vec::new(), entries: Vec::new() };
        let root = PathPattern::root();
        for route in routes {
            table.insert(route, &root, Access::Public, 0, &[])?;
        }
        Ok(table)
    }

    fn insert(
        &mut self,
        route: Route<T>,
        prefix: &PathPattern,
        parent_access: Access,
        depth: usize,
        chain: &[usize],
    ) -> Result<(), NavigationError> {
        let access = route.access().inherit(parent_access);
        let RouteSpec { path, target, children } = route.into_spec();

        let (pattern, index) = match path {
            RoutePath::Index => {
                if !children.is_empty() {
                    return Err(NavigationError::IndexWithChildren { parent: prefix.to_string() });
                }
                (prefix.clone(), true)
            }
            RoutePath::Layout => {
                if children.is_empty() {
                    return Err(NavigationError::EmptyLayout { parent: prefix.to_string() });
                }
                (prefix.clone(), false)
            }
            RoutePath::Path(raw) => {
                let own = PathPattern::parse(&raw)?;
                if raw.starts_with('/') {
                    if !own.starts_with(prefix) {
                        return Err(NavigationError::NestedPathMismatch {
                            path: own.to_string(),
                            parent: prefix.to_string(),
                        });
                    }
                    (own, false)
                } else {
                    (prefix.join(&own)?, false)
                }
            }
        };

        if children.is_empty() {
            if let Some(existing) = self.entries.iter().find(|e| e.pattern.same_shape(&pattern)) {
                return Err(NavigationError::DuplicatePath {
                    path: pattern.to_string(),
                    existing: existing.pattern.to_string(),
                });
            }
            self.entries.push(Entry { pattern, access, depth, index, layouts: chain.to_vec(), target });
            return Ok(());
        }

        self.layouts.push(target);
        let mut chain = chain.to_vec();
        chain.push(self.layouts.len() - 1);
        for child in children {
            self.insert(child, &pattern, access, depth + 1, &chain)?;
        }
        Ok(())
    }

    /// Find the leaf for a concrete path (query string already removed).
    #[must_use]
    pub fn find(&self, path: &str) -> Option<RouteMatch<'_, T>> {
        let mut best: Option<(&Entry<T>, Params)> = None;
        for entry in &self.entries {
            let Some(params) = entry.pattern.matches(path) else {
                continue;
            };
            if best.as_ref().map_or(true, |(current, _)| entry.rank() > current.rank()) {
                best = Some((entry, params));
            }
        }
        best.map(|(entry, params)| RouteMatch {
            target: &entry.target,
            layouts: entry.layouts.iter().map(|&i| &self.layouts[i]).collect(),
            params,
            access: entry.access,
            pattern: &entry.pattern,
        })
    }

    /// Leaf patterns with their effective access, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&PathPattern, Access)> {
        self.entries.iter().map(|e| (&e.pattern, e.access))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
