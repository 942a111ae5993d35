//! Poll embed builders for Discord responses
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Poll announcement embed

use serenity::builder::CreateEmbed;

use crate::core::truncate_for_field;
use crate::features::polls::PollAnnouncement;

/// Accent colour for poll announcements
pub const POLL_COLOR: u32 = 0x0099FF;

/// Build the embed shown under a poll's `**Poll:**` line.
///
/// Closing time uses Discord's relative timestamp markup, which only renders in
/// descriptions and field values, not footers.
pub fn poll_embed(announcement: &PollAnnouncement) -> CreateEmbed {
    let mut embed = CreateEmbed::default();
    embed.color(POLL_COLOR);
    embed.title(&announcement.title);
    embed.description(format!(
        "**Question:** {}\n\n*Click the button below to share your answer.*",
        truncate_for_field(&announcement.question)
    ));
    embed.field(
        "Answers Sent To",
        format!("<#{}>", announcement.results_channel),
        false,
    );
    if let Some(expires_at) = announcement.expires_at {
        embed.field("Closes", format!("<t:{}:R>", expires_at.timestamp()), true);
    }
    match announcement.duration {
        Some(duration) => embed.footer(|f| f.text(format!("Duration: {}", duration.label()))),
        None => embed.footer(|f| f.text("Open until further notice")),
    };
    embed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::polls::router::announcement_for;
    use crate::features::polls::{Poll, PollDuration, PollId};
    use chrono::Utc;

    fn announcement(duration: Option<PollDuration>) -> PollAnnouncement {
        announcement_for(&Poll::new(
            PollId(1),
            Some("Lunch".to_string()),
            "Pizza or pasta?".to_string(),
            duration,
            900,
            Utc::now(),
        ))
    }

    #[test]
    fn test_poll_embed_with_duration() {
        let embed = poll_embed(&announcement(Some(PollDuration::OneHour)));
        assert_eq!(embed.0.get("title").and_then(|v| v.as_str()), Some("Lunch"));
        let fields = embed.0.get("fields").and_then(|v| v.as_array()).unwrap();
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_poll_embed_without_duration() {
        let embed = poll_embed(&announcement(None));
        let fields = embed.0.get("fields").and_then(|v| v.as_array()).unwrap();
        assert_eq!(fields.len(), 1);
        assert!(embed.0.contains_key("footer"));
    }
}
