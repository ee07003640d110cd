//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the FinPulse session controller
//! and the rendering layer that embeds it. The same types are written to
//! durable key-value storage where persistence applies.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::auth`]**: User profile
//!   - **[`dto::expense`]**: Expense records and form payloads
//!   - **[`dto::deals`]**: Shopping search items
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case**
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::auth::UserProfile;
//!
//! let user = UserProfile::new("Asha", "asha@example.com");
//! let stored = serde_json::to_string(&user).unwrap();
//! let restored: UserProfile = serde_json::from_str(&stored).unwrap();
//! assert_eq!(user, restored);
//! ```

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
