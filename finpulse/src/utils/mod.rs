//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`validation`]**: Form-level checks for the login and add-expense forms
//!
//! ## Related Modules
//!
//! - [`lib_utils::validation`]: Primitive string/number checks
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
