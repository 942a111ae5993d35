//! # Poll Correlation Tokens
//!
//! Structured custom ids that link a button click or modal submission back to
//! the poll that produced it. Every field is a Discord snowflake, so the `_`
//! delimiter can never appear inside a field value.
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.2.0: Vote buttons move to `voteButton_`; `pollButton_<channelId>` keeps its stateless meaning
//! - 1.1.0: Accept legacy `start_poll_` / `poll_modal_` ids from earlier deployments
//! - 1.0.0: Tagged token replacing positional string splitting

use std::fmt;
use thiserror::Error;

use super::poll::PollId;

/// Button ID prefixes for routing
pub const VOTE_BUTTON_PREFIX: &str = "voteButton";
pub const CHANNEL_BUTTON_PREFIX: &str = "pollButton";
pub const ANSWER_MODAL_PREFIX: &str = "opinionModal";
const LEGACY_BUTTON_PREFIX: &str = "start_poll";
const LEGACY_MODAL_PREFIX: &str = "poll_modal";

const DELIMITER: char = '_';

/// Discord custom_id length limit
pub const CUSTOM_ID_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomIdError {
    /// The id belongs to some other component; callers should ignore it
    #[error("custom id {0:?} has no poll role prefix")]
    UnknownRole(String),
    #[error("custom id is missing the {0} field")]
    MissingField(&'static str),
    #[error("custom id has unexpected trailing data {0:?}")]
    UnexpectedField(String),
    #[error("custom id field {field} is not a valid snowflake: {value:?}")]
    InvalidField { field: &'static str, value: String },
}

/// Role-tagged correlation token carried in component custom ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollCustomId {
    /// The "Vote on this Poll" button under a poll message
    VoteButton { poll_id: PollId },
    /// Stateless button naming only the results channel. Still posted by
    /// earlier deployments, so it works without any registry entry.
    ChannelButton { results_channel: u64 },
    /// The answer form opened from either button. For channel buttons the
    /// poll id is the poll message's id, which never matches a registered poll.
    AnswerModal {
        poll_id: PollId,
        results_channel: Option<u64>,
    },
}

impl PollCustomId {
    pub fn encode(&self) -> String {
        let encoded = self.to_string();
        debug_assert!(encoded.len() <= CUSTOM_ID_LIMIT);
        encoded
    }

    pub fn decode(custom_id: &str) -> Result<Self, CustomIdError> {
        // Legacy prefixes contain the delimiter themselves, so match them first
        if let Some(rest) = strip_role(custom_id, LEGACY_BUTTON_PREFIX) {
            let mut fields = Fields::new(rest);
            let poll_id = PollId(fields.required("poll id")?);
            fields.finish()?;
            return Ok(Self::VoteButton { poll_id });
        }
        if let Some(rest) = strip_role(custom_id, LEGACY_MODAL_PREFIX) {
            let mut fields = Fields::new(rest);
            let poll_id = PollId(fields.required("poll id")?);
            fields.finish()?;
            return Ok(Self::AnswerModal {
                poll_id,
                results_channel: None,
            });
        }

        if let Some(rest) = strip_role(custom_id, VOTE_BUTTON_PREFIX) {
            let mut fields = Fields::new(rest);
            let poll_id = PollId(fields.required("poll id")?);
            fields.finish()?;
            Ok(Self::VoteButton { poll_id })
        } else if let Some(rest) = strip_role(custom_id, CHANNEL_BUTTON_PREFIX) {
            let mut fields = Fields::new(rest);
            let results_channel = fields.required("results channel")?;
            fields.finish()?;
            Ok(Self::ChannelButton { results_channel })
        } else if let Some(rest) = strip_role(custom_id, ANSWER_MODAL_PREFIX) {
            let mut fields = Fields::new(rest);
            let poll_id = PollId(fields.required("poll id")?);
            let results_channel = fields.optional("results channel")?;
            fields.finish()?;
            Ok(Self::AnswerModal {
                poll_id,
                results_channel,
            })
        } else {
            Err(CustomIdError::UnknownRole(custom_id.to_string()))
        }
    }
}

impl fmt::Display for PollCustomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VoteButton { poll_id } => {
                write!(f, "{VOTE_BUTTON_PREFIX}{DELIMITER}{poll_id}")
            }
            Self::ChannelButton { results_channel } => {
                write!(f, "{CHANNEL_BUTTON_PREFIX}{DELIMITER}{results_channel}")
            }
            Self::AnswerModal {
                poll_id,
                results_channel: Some(channel),
            } => write!(
                f,
                "{ANSWER_MODAL_PREFIX}{DELIMITER}{poll_id}{DELIMITER}{channel}"
            ),
            Self::AnswerModal {
                poll_id,
                results_channel: None,
            } => write!(f, "{ANSWER_MODAL_PREFIX}{DELIMITER}{poll_id}"),
        }
    }
}

/// Strip `role` plus the delimiter, requiring an exact role match
fn strip_role<'a>(custom_id: &'a str, role: &str) -> Option<&'a str> {
    custom_id.strip_prefix(role)?.strip_prefix(DELIMITER)
}

struct Fields<'a> {
    parts: std::str::Split<'a, char>,
}

impl<'a> Fields<'a> {
    fn new(rest: &'a str) -> Self {
        Self {
            parts: rest.split(DELIMITER),
        }
    }

    fn required(&mut self, field: &'static str) -> Result<u64, CustomIdError> {
        self.optional(field)?
            .ok_or(CustomIdError::MissingField(field))
    }

    fn optional(&mut self, field: &'static str) -> Result<Option<u64>, CustomIdError> {
        match self.parts.next() {
            None => Ok(None),
            Some(value) => parse_snowflake(field, value).map(Some),
        }
    }

    fn finish(mut self) -> Result<(), CustomIdError> {
        match self.parts.next() {
            None => Ok(()),
            Some(extra) => Err(CustomIdError::UnexpectedField(extra.to_string())),
        }
    }
}

fn parse_snowflake(field: &'static str, value: &str) -> Result<u64, CustomIdError> {
    let invalid = || CustomIdError::InvalidField {
        field,
        value: value.to_string(),
    };
    // u64::from_str accepts a leading '+', snowflakes never carry one
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match value.parse::<u64>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(id) => Ok(id),
    }
}
