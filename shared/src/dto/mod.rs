//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the session controller and the
//! rendering layer, and persisted to durable key-value storage.
//!
//! ## Module Organization
//!
//! - [`auth`] - Logged-in user profile
//! - [`expense`] - Expense ledger records and the add-expense form payload
//! - [`deals`] - Shopping search result items
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example: persisted user profile
//!
//! ```text
//! finpulse-user = {"name":"Asha","email":"asha@example.com"}
//! ```

pub mod auth;
pub mod deals;
pub mod expense;

pub use auth::*;
pub use deals::*;
pub use expense::*;
