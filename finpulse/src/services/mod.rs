//! # Services
//!
//! Integrations with the outside world. The controller's only external
//! collaborator with state is durable key-value storage.
//!
//! - **[`storage`]**: [`KeyValueStore`](crate::core::service::KeyValueStore)
//!   backends and typed session/theme accessors

pub mod storage;

pub use storage::{FileStore, MemoryStore, StorageRead};
