//! # Core Module
//!
//! Configuration, Discord text limits and embed builders shared by the bot.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add poll embed builders
//! - 1.0.0: Initial creation with config and response modules

pub mod config;
pub mod embeds;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use response::{
    truncate_chars, truncate_for_field, truncate_for_message, truncate_with_ellipsis, FIELD_LIMIT,
    MESSAGE_LIMIT, MODAL_TITLE_LIMIT,
};
