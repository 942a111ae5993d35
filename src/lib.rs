// Core layer - shared types and configuration
pub mod core;

// Features layer - poll flow, store and router
pub mod features;

// Discord adapter - serenity interactions and platform client
pub mod discord;

// UI components
pub mod message_components;

// Application layer
pub mod commands;

// Liveness HTTP endpoint
pub mod health;

// Re-export core config for convenience
pub use core::Config;

// Re-export feature items
pub use features::polls::{InMemoryPollStore, InteractionRouter, PollStore};
