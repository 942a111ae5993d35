//! Poll data model

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;

use crate::core::truncate_for_message;

/// Poll identifier: the id of the `/custompoll` interaction that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PollId(pub u64);

impl fmt::Display for PollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Advertised poll lifetime, chosen from the command's `duration` option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollDuration {
    OneHour,
    OneDay,
    OneWeek,
}

impl PollDuration {
    pub const ALL: [PollDuration; 3] = [Self::OneHour, Self::OneDay, Self::OneWeek];

    /// Option value as sent by Discord (`1h`, `1d`, `1w`)
    pub fn value(self) -> &'static str {
        match self {
            Self::OneHour => "1h",
            Self::OneDay => "1d",
            Self::OneWeek => "1w",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::OneHour => "1 Hour",
            Self::OneDay => "1 Day",
            Self::OneWeek => "1 Week",
        }
    }

    pub fn as_chrono(self) -> Duration {
        match self {
            Self::OneHour => Duration::hours(1),
            Self::OneDay => Duration::days(1),
            Self::OneWeek => Duration::weeks(1),
        }
    }
}

impl FromStr for PollDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.value() == s)
            .ok_or_else(|| format!("unknown poll duration: {s}"))
    }
}

/// An open poll. Immutable once created; only its presence in the store changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Poll {
    pub id: PollId,
    pub title: Option<String>,
    pub question: String,
    pub duration: Option<PollDuration>,
    pub results_channel: u64,
    pub created_at: DateTime<Utc>,
    /// `None` means the poll stays open for the lifetime of the process
    pub expires_at: Option<DateTime<Utc>>,
}

impl Poll {
    pub fn new(
        id: PollId,
        title: Option<String>,
        question: String,
        duration: Option<PollDuration>,
        results_channel: u64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            question,
            duration,
            results_channel,
            created_at,
            expires_at: duration.map(|d| created_at + d.as_chrono()),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Everything the platform needs to render the public poll message
#[derive(Debug, Clone, PartialEq)]
pub struct PollAnnouncement {
    pub content: String,
    pub title: String,
    pub question: String,
    pub results_channel: u64,
    pub duration: Option<PollDuration>,
    pub expires_at: Option<DateTime<Utc>>,
    pub button_custom_id: String,
    pub button_label: String,
}

/// The short text form shown when someone clicks the vote button
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerForm {
    pub custom_id: String,
    pub title: String,
    pub input_custom_id: String,
    pub input_label: String,
    pub max_length: u64,
}

/// A submitted answer, formatted for the results channel
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerReport {
    pub title: Option<String>,
    pub question: String,
    pub answer: String,
    pub user_id: u64,
    pub user_tag: String,
}

impl AnswerReport {
    pub fn render(&self) -> String {
        let mut message = String::from("**Poll Answer Received:**\n");
        if let Some(title) = &self.title {
            message.push_str(&format!("**Title:** {title}\n"));
        }
        message.push_str(&format!(
            "**Question:** {}\n**Answer:** {}\n**User:** {} (<@{}>)",
            self.question, self.answer, self.user_tag, self.user_id
        ));
        truncate_for_message(&message)
    }
}

/// Identity of the user who triggered an interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitter {
    pub id: u64,
    pub tag: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_parse_and_labels() {
        assert_eq!("1h".parse::<PollDuration>(), Ok(PollDuration::OneHour));
        assert_eq!("1d".parse::<PollDuration>(), Ok(PollDuration::OneDay));
        assert_eq!("1w".parse::<PollDuration>(), Ok(PollDuration::OneWeek));
        assert!("2h".parse::<PollDuration>().is_err());
        assert_eq!(PollDuration::OneWeek.label(), "1 Week");
    }

    #[test]
    fn test_answer_report_render() {
        let report = AnswerReport {
            title: None,
            question: "Pizza or pasta?".to_string(),
            answer: "Pasta".to_string(),
            user_id: 42,
            user_tag: "alice#0001".to_string(),
        };
        assert_eq!(
            report.render(),
            "**Poll Answer Received:**\n**Question:** Pizza or pasta?\n**Answer:** Pasta\n**User:** alice#0001 (<@42>)"
        );
    }

    #[test]
    fn test_answer_report_render_with_title() {
        let report = AnswerReport {
            title: Some("Lunch".to_string()),
            question: "Pizza or pasta?".to_string(),
            answer: "Pizza".to_string(),
            user_id: 2,
            user_tag: "bob#0002".to_string(),
        };
        assert!(report
            .render()
            .starts_with("**Poll Answer Received:**\n**Title:** Lunch\n**Question:**"));
    }

    #[test]
    fn test_poll_without_duration_never_expires() {
        let created = Utc::now() - Duration::weeks(52);
        let poll = Poll::new(PollId(1), None, "Q?".into(), None, 10, created);

        assert!(poll.expires_at.is_none());
        assert!(!poll.is_expired(Utc::now()));
    }

    #[test]
    fn test_poll_expires_after_duration() {
        let created = Utc::now();
        let poll = Poll::new(
            PollId(1),
            None,
            "Q?".into(),
            Some(PollDuration::OneHour),
            10,
            created,
        );

        assert_eq!(poll.expires_at, Some(created + Duration::hours(1)));
        assert!(!poll.is_expired(created + Duration::minutes(59)));
        assert!(poll.is_expired(created + Duration::hours(1)));
    }
}
