//! # Poll Message Components
//!
//! Serenity builders for the vote button and the answer form.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use serenity::builder::CreateComponents;
use serenity::model::application::component::{ButtonStyle, InputTextStyle};

use crate::features::polls::{AnswerForm, PollAnnouncement};

/// Single action row holding the poll's vote button
pub fn create_vote_button(announcement: &PollAnnouncement) -> CreateComponents {
    CreateComponents::default()
        .create_action_row(|row| {
            row.create_button(|button| {
                button
                    .custom_id(&announcement.button_custom_id)
                    .label(&announcement.button_label)
                    .style(ButtonStyle::Primary)
            })
        })
        .to_owned()
}

/// Input rows for the answer form modal
pub fn create_answer_inputs(form: &AnswerForm) -> CreateComponents {
    CreateComponents::default()
        .create_action_row(|row| {
            row.create_input_text(|input| {
                input
                    .custom_id(&form.input_custom_id)
                    .label(&form.input_label)
                    .style(InputTextStyle::Short)
                    .placeholder("Type your answer...")
                    .required(true)
                    .min_length(1)
                    .max_length(form.max_length)
            })
        })
        .to_owned()
}
