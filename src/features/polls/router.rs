//! # Poll Interaction Router
//!
//! Drives the three-step poll flow: `/custompoll` posts a poll, its button
//! opens an answer form, and the submitted form is forwarded to the poll's
//! results channel. Each inbound interaction reaches at most one handler;
//! anything that is not part of a poll is ignored.
//!
//! - **Version**: 1.3.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.3.0: Stateless channel buttons, poll stored only once it is posted
//! - 1.2.0: Unified results channel (per-poll option or process default)
//! - 1.1.0: Stale-poll replies and fail-closed permission checks
//! - 1.0.0: Initial command, button and modal handling

use anyhow::Result;
use chrono::Utc;
use log::{error, info, warn};
use std::sync::Arc;

use super::custom_id::{CustomIdError, PollCustomId};
use super::interaction::{ButtonClick, CommandInvocation, InboundInteraction, ModalSubmission};
use super::platform::PollPlatform;
use super::poll::{AnswerForm, AnswerReport, Poll, PollAnnouncement, PollDuration, PollId};
use super::store::PollStore;
use crate::core::{truncate_for_field, truncate_with_ellipsis, FIELD_LIMIT, MODAL_TITLE_LIMIT};

pub const POLL_COMMAND: &str = "custompoll";
pub const ANSWER_INPUT_ID: &str = "pollAnswer";

pub const VOTE_BUTTON_LABEL: &str = "Vote on this Poll";
pub const ANSWER_INPUT_LABEL: &str = "Your Answer";
pub const STALE_POLL_MESSAGE: &str = "This poll is no longer active.";
pub const DELIVERY_FAILED_MESSAGE: &str =
    "Something went wrong while submitting your vote. Please try again later.";
const UNKNOWN_POLL_QUESTION: &str = "Unknown Poll";
const DEFAULT_POLL_TITLE: &str = "Custom Poll";
const CHANNEL_FORM_TITLE: &str = "Share your answer";

pub struct InteractionRouter {
    store: Arc<dyn PollStore>,
    default_results_channel: Option<u64>,
}

impl InteractionRouter {
    pub fn new(store: Arc<dyn PollStore>, default_results_channel: Option<u64>) -> Self {
        Self {
            store,
            default_results_channel,
        }
    }

    pub fn store(&self) -> &Arc<dyn PollStore> {
        &self.store
    }

    /// Route one interaction to its handler
    pub async fn route(
        &self,
        platform: &dyn PollPlatform,
        interaction: InboundInteraction,
    ) -> Result<()> {
        match interaction {
            InboundInteraction::Command(command) if command.name == POLL_COMMAND => {
                self.create_poll(platform, command).await
            }
            InboundInteraction::Button(click) => match PollCustomId::decode(&click.custom_id) {
                Ok(PollCustomId::VoteButton { poll_id }) => {
                    self.open_answer_form(platform, poll_id, &click).await
                }
                Ok(PollCustomId::ChannelButton { results_channel }) => {
                    platform
                        .show_answer_form(&channel_answer_form(&click, results_channel))
                        .await
                }
                Ok(PollCustomId::AnswerModal { .. }) | Err(CustomIdError::UnknownRole(_)) => Ok(()),
                Err(e) => {
                    warn!("Malformed poll button {:?}: {e}", click.custom_id);
                    platform.reply_ephemeral(STALE_POLL_MESSAGE).await
                }
            },
            InboundInteraction::ModalSubmit(submission) => {
                match PollCustomId::decode(&submission.custom_id) {
                    Ok(PollCustomId::AnswerModal {
                        poll_id,
                        results_channel,
                    }) => {
                        self.submit_answer(platform, poll_id, results_channel, &submission)
                            .await
                    }
                    Ok(PollCustomId::VoteButton { .. } | PollCustomId::ChannelButton { .. })
                    | Err(CustomIdError::UnknownRole(_)) => Ok(()),
                    Err(e) => {
                        error!("Malformed answer form {:?}: {e}", submission.custom_id);
                        platform.reply_ephemeral(DELIVERY_FAILED_MESSAGE).await
                    }
                }
            }
            InboundInteraction::Command(_) | InboundInteraction::Other => Ok(()),
        }
    }

    /// Handle /custompoll: validate, register the poll and post it publicly
    async fn create_poll(
        &self,
        platform: &dyn PollPlatform,
        command: CommandInvocation,
    ) -> Result<()> {
        let Some(question) = non_blank(command.question) else {
            return platform
                .reply_ephemeral("Please provide a question for the poll.")
                .await;
        };

        let duration = match command
            .duration
            .as_deref()
            .map(str::parse::<PollDuration>)
            .transpose()
        {
            Ok(duration) => duration,
            Err(e) => {
                warn!("Rejecting /{POLL_COMMAND} from {}: {e}", command.user.tag);
                return platform
                    .reply_ephemeral("Unknown poll duration. Choose 1h, 1d or 1w.")
                    .await;
            }
        };

        let Some(results_channel) = command.results_channel.or(self.default_results_channel)
        else {
            return platform
                .reply_ephemeral(
                    "No results channel was given and no default results channel is configured.",
                )
                .await;
        };

        let permitted = match platform.can_send_in(results_channel).await {
            Ok(permitted) => permitted,
            Err(e) => {
                warn!("Permission check for channel {results_channel} failed: {e:#}");
                false
            }
        };
        if !permitted {
            return platform
                .reply_ephemeral(&format!(
                    "I do not have permission to send messages in the specified results channel <#{results_channel}>."
                ))
                .await;
        }

        let poll = Poll::new(
            PollId(command.interaction_id),
            non_blank(command.title),
            question,
            duration,
            results_channel,
            Utc::now(),
        );
        let announcement = announcement_for(&poll);
        let poll_id = poll.id;

        // A poll whose message never got posted has no button to click
        platform.reply_poll(&announcement).await?;
        self.store.put(poll);
        info!(
            "Poll {poll_id} created by {} (results -> {results_channel})",
            command.user.tag
        );
        Ok(())
    }

    /// Handle the vote button: show the answer form for a still-open poll
    async fn open_answer_form(
        &self,
        platform: &dyn PollPlatform,
        poll_id: PollId,
        click: &ButtonClick,
    ) -> Result<()> {
        let Some(poll) = self.store.get(poll_id) else {
            info!(
                "{} clicked vote on inactive poll {poll_id} (message {})",
                click.user.tag, click.message_id
            );
            return platform.reply_ephemeral(STALE_POLL_MESSAGE).await;
        };

        platform.show_answer_form(&answer_form_for(&poll)).await
    }

    /// Handle the answer form: forward the answer to the results channel
    async fn submit_answer(
        &self,
        platform: &dyn PollPlatform,
        poll_id: PollId,
        token_channel: Option<u64>,
        submission: &ModalSubmission,
    ) -> Result<()> {
        let poll = self.store.get(poll_id);
        let results_channel = token_channel
            .or_else(|| poll.as_ref().map(|p| p.results_channel))
            .or(self.default_results_channel);

        let Some(results_channel) = results_channel else {
            error!("No results channel could be resolved for poll {poll_id}");
            return platform.reply_ephemeral(DELIVERY_FAILED_MESSAGE).await;
        };

        let Some(answer) = submission.value(ANSWER_INPUT_ID).filter(|a| !a.trim().is_empty())
        else {
            return platform
                .reply_ephemeral("Your answer was empty, so nothing was submitted.")
                .await;
        };

        let report = AnswerReport {
            title: poll.as_ref().and_then(|p| p.title.clone()),
            question: poll
                .map(|p| p.question)
                .unwrap_or_else(|| UNKNOWN_POLL_QUESTION.to_string()),
            answer: truncate_for_field(answer),
            user_id: submission.user.id,
            user_tag: submission.user.tag.clone(),
        };

        match platform
            .send_to_channel(results_channel, &report.render())
            .await
        {
            Ok(()) => {
                info!(
                    "Answer from {} for poll {poll_id} delivered to channel {results_channel}",
                    submission.user.tag
                );
                platform
                    .reply_ephemeral(&format!(
                        "Your vote has been submitted! It was sent to <#{results_channel}>."
                    ))
                    .await
            }
            Err(e) => {
                error!(
                    "Failed to deliver answer for poll {poll_id} to channel {results_channel}: {e:#}"
                );
                platform.reply_ephemeral(DELIVERY_FAILED_MESSAGE).await
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Public message for a freshly created poll
pub fn announcement_for(poll: &Poll) -> PollAnnouncement {
    PollAnnouncement {
        content: format!("**Poll:** {}", poll.question),
        title: poll
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_POLL_TITLE.to_string()),
        question: poll.question.clone(),
        results_channel: poll.results_channel,
        duration: poll.duration,
        expires_at: poll.expires_at,
        button_custom_id: PollCustomId::VoteButton { poll_id: poll.id }.encode(),
        button_label: VOTE_BUTTON_LABEL.to_string(),
    }
}

/// Answer form opened from a poll's vote button
pub fn answer_form_for(poll: &Poll) -> AnswerForm {
    AnswerForm {
        custom_id: PollCustomId::AnswerModal {
            poll_id: poll.id,
            results_channel: Some(poll.results_channel),
        }
        .encode(),
        title: truncate_with_ellipsis(&format!("Poll: {}", poll.question), MODAL_TITLE_LIMIT),
        input_custom_id: ANSWER_INPUT_ID.to_string(),
        input_label: ANSWER_INPUT_LABEL.to_string(),
        max_length: FIELD_LIMIT as u64,
    }
}

/// Answer form for a stateless channel button. No poll is looked up: the
/// clicked message stands in for the poll id and the channel rides along.
fn channel_answer_form(click: &ButtonClick, results_channel: u64) -> AnswerForm {
    let title = match click.message_title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => format!("Poll: {title}"),
        _ => CHANNEL_FORM_TITLE.to_string(),
    };
    AnswerForm {
        custom_id: PollCustomId::AnswerModal {
            poll_id: PollId(click.message_id),
            results_channel: Some(results_channel),
        }
        .encode(),
        title: truncate_with_ellipsis(&title, MODAL_TITLE_LIMIT),
        input_custom_id: ANSWER_INPUT_ID.to_string(),
        input_label: ANSWER_INPUT_LABEL.to_string(),
        max_length: FIELD_LIMIT as u64,
    }
}
