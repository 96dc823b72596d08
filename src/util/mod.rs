//! Browser and router helpers shared by pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps `window.location` and route-parameter access out of page code.

pub mod location;
