//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layouts wrap the page the guard renders; `loader` covers the startup
//! session check and pending redirects; `record_table` renders loosely-typed
//! API rows.

pub mod default_layout;
pub mod loader;
pub mod main_layout;
pub mod record_table;
