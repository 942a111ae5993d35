//! # Feature: Custom Polls
//!
//! `/custompoll` posts a question with a vote button; the button opens a short
//! answer form, and submitted answers are forwarded to a results channel.
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Poll duration honoured as expiry, periodic purge of expired polls
//! - 1.1.0: Single configurable flow for per-poll and default results channels
//! - 1.0.0: Initial release

pub mod custom_id;
pub mod interaction;
pub mod platform;
pub mod poll;
pub mod router;
pub mod store;

pub use custom_id::{CustomIdError, PollCustomId};
pub use interaction::{ButtonClick, CommandInvocation, InboundInteraction, ModalSubmission};
pub use platform::PollPlatform;
pub use poll::{AnswerForm, AnswerReport, Poll, PollAnnouncement, PollDuration, PollId, Submitter};
pub use router::{InteractionRouter, ANSWER_INPUT_ID, POLL_COMMAND};
pub use store::{InMemoryPollStore, PollStore};
