//! # Discord Adapter
//!
//! Bridges serenity's gateway interactions to the poll router.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod convert;
pub mod platform;

pub use convert::{describe, inbound_interaction};
pub use platform::SerenityPlatform;
