//! Poll slash command: /custompoll

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;
use serenity::model::channel::ChannelType;

use crate::features::polls::{PollDuration, POLL_COMMAND};

/// Creates poll commands
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_custompoll_command()]
}

/// Creates the custompoll command
fn create_custompoll_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name(POLL_COMMAND)
        .description("Creates a custom poll with an answer form.")
        .create_option(|option| {
            option
                .name("question")
                .description("The question for the poll.")
                .kind(CommandOptionType::String)
                .required(true)
                .max_length(200)
        })
        .create_option(|option| {
            option
                .name("title")
                .description("The title for the poll embed.")
                .kind(CommandOptionType::String)
                .required(false)
                .max_length(100)
        })
        .create_option(|option| {
            option
                .name("duration")
                .description("How long the poll accepts answers.")
                .kind(CommandOptionType::String)
                .required(false);
            for duration in PollDuration::ALL {
                option.add_string_choice(duration.label(), duration.value());
            }
            option
        })
        .create_option(|option| {
            option
                .name("results_channel")
                .description("The channel to send the poll answers to.")
                .kind(CommandOptionType::Channel)
                .channel_types(&[ChannelType::Text])
                .required(false)
        })
        .to_owned()
}
