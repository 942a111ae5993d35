//! # Command System
//!
//! Slash command (/) definitions and registration for Discord interactions.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod slash;

// Re-export commonly used items from submodules
pub use slash::{
    create_slash_commands, get_channel_option, get_string_option, register_global_commands,
    register_guild_commands,
};
