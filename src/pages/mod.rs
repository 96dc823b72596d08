//! Page-level route components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module maps to one [`crate::routes::Page`] target. Pages assume the
//! guard already admitted them; they only read route parameters, call the
//! fleet API, and navigate.

pub mod dashboard;
pub mod forgot_password;
pub mod logout;
pub mod logsheet;
pub mod records;
pub mod ship;
pub mod ship_operation;
pub mod sign_in;
