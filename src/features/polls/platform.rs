//! Chat platform client seen by the poll router
//!
//! One implementation wraps a single in-flight interaction, so every reply
//! method answers that interaction.

use anyhow::Result;
use async_trait::async_trait;

use super::poll::{AnswerForm, PollAnnouncement};

#[async_trait]
pub trait PollPlatform: Send + Sync {
    /// Whether the bot may post messages in `channel_id`
    async fn can_send_in(&self, channel_id: u64) -> Result<bool>;

    /// Public reply carrying the poll message and its vote button
    async fn reply_poll(&self, announcement: &PollAnnouncement) -> Result<()>;

    /// Reply visible only to the user who triggered the interaction
    async fn reply_ephemeral(&self, content: &str) -> Result<()>;

    /// Open the answer form in response to a button click
    async fn show_answer_form(&self, form: &AnswerForm) -> Result<()>;

    async fn send_to_channel(&self, channel_id: u64, content: &str) -> Result<()>;
}
