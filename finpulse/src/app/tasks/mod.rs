//! # Async Tasks
//!
//! Background work scheduled by the controller. Tasks hold only weak
//! references to state and report through the event channel.

pub mod splash;
