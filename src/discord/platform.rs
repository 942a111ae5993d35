//! Serenity-backed [`PollPlatform`] for a single in-flight interaction

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use serenity::builder::CreateInteractionResponse;
use serenity::model::application::interaction::{Interaction, InteractionResponseType};
use serenity::model::id::ChannelId;
use serenity::prelude::Context;

use crate::core::embeds::poll_embed;
use crate::features::polls::{AnswerForm, PollAnnouncement, PollPlatform};
use crate::message_components::{create_answer_inputs, create_vote_button};

pub struct SerenityPlatform<'a> {
    ctx: &'a Context,
    interaction: &'a Interaction,
}

impl<'a> SerenityPlatform<'a> {
    pub fn new(ctx: &'a Context, interaction: &'a Interaction) -> Self {
        Self { ctx, interaction }
    }

    /// Send the initial response to whichever interaction kind we wrap
    async fn respond<F>(&self, f: F) -> Result<()>
    where
        F: for<'b> FnOnce(
                &'b mut CreateInteractionResponse<'static>,
            ) -> &'b mut CreateInteractionResponse<'static>
            + Send,
    {
        match self.interaction {
            Interaction::ApplicationCommand(command) => {
                command.create_interaction_response(&self.ctx.http, f).await?
            }
            Interaction::MessageComponent(component) => {
                component.create_interaction_response(&self.ctx.http, f).await?
            }
            Interaction::ModalSubmit(modal) => {
                modal.create_interaction_response(&self.ctx.http, f).await?
            }
            _ => bail!("interaction kind does not accept responses"),
        }
        Ok(())
    }
}

#[async_trait]
impl<'a> PollPlatform for SerenityPlatform<'a> {
    async fn can_send_in(&self, channel_id: u64) -> Result<bool> {
        let channel = self
            .ctx
            .cache
            .guild_channel(ChannelId(channel_id))
            .ok_or_else(|| anyhow!("channel {channel_id} is not in the cache"))?;
        let bot_id = self.ctx.cache.current_user_id();
        let permissions = channel.permissions_for_user(&self.ctx.cache, bot_id)?;

        Ok(permissions.view_channel() && permissions.send_messages())
    }

    async fn reply_poll(&self, announcement: &PollAnnouncement) -> Result<()> {
        let content = announcement.content.clone();
        let embed = poll_embed(announcement);
        let components = create_vote_button(announcement);

        self.respond(move |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| {
                    message
                        .content(content)
                        .add_embed(embed)
                        .set_components(components)
                })
        })
        .await
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<()> {
        let content = content.to_string();

        self.respond(move |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|message| message.content(content).ephemeral(true))
        })
        .await
    }

    async fn show_answer_form(&self, form: &AnswerForm) -> Result<()> {
        if matches!(self.interaction, Interaction::ModalSubmit(_)) {
            bail!("a modal cannot be opened in response to a modal submission");
        }
        let custom_id = form.custom_id.clone();
        let title = form.title.clone();
        let components = create_answer_inputs(form);

        self.respond(move |response| {
            response
                .kind(InteractionResponseType::Modal)
                .interaction_response_data(|modal| {
                    modal
                        .custom_id(custom_id)
                        .title(title)
                        .set_components(components)
                })
        })
        .await
    }

    async fn send_to_channel(&self, channel_id: u64, content: &str) -> Result<()> {
        ChannelId(channel_id)
            .send_message(&self.ctx.http, |message| {
                // Answers are free text; never let them ping anyone
                message
                    .content(content)
                    .allowed_mentions(|mentions| mentions.empty_parse())
            })
            .await?;
        Ok(())
    }
}
