//! Serenity interaction -> platform-neutral poll interaction

use serenity::model::application::component::{ActionRowComponent, ComponentType};
use serenity::model::application::interaction::Interaction;
use serenity::model::user::User;

use crate::commands::{get_channel_option, get_string_option};
use crate::features::polls::{
    ButtonClick, CommandInvocation, InboundInteraction, ModalSubmission, Submitter,
};

fn submitter(user: &User) -> Submitter {
    Submitter {
        id: user.id.0,
        tag: user.tag(),
    }
}

/// Extract the fields the poll router needs from a gateway interaction
pub fn inbound_interaction(interaction: &Interaction) -> InboundInteraction {
    match interaction {
        Interaction::ApplicationCommand(command) => {
            let options = &command.data.options;
            InboundInteraction::Command(CommandInvocation {
                interaction_id: command.id.0,
                name: command.data.name.clone(),
                title: get_string_option(options, "title"),
                question: get_string_option(options, "question"),
                duration: get_string_option(options, "duration"),
                results_channel: get_channel_option(options, "results_channel"),
                user: submitter(&command.user),
            })
        }
        Interaction::MessageComponent(component)
            if component.data.component_type == ComponentType::Button =>
        {
            InboundInteraction::Button(ButtonClick {
                custom_id: component.data.custom_id.clone(),
                message_id: component.message.id.0,
                message_title: component
                    .message
                    .embeds
                    .first()
                    .and_then(|embed| embed.title.clone()),
                user: submitter(&component.user),
            })
        }
        Interaction::ModalSubmit(modal) => {
            let fields = modal
                .data
                .components
                .iter()
                .flat_map(|row| row.components.iter())
                .filter_map(|component| match component {
                    ActionRowComponent::InputText(input) => {
                        Some((input.custom_id.clone(), input.value.clone()))
                    }
                    _ => None,
                })
                .collect();

            InboundInteraction::ModalSubmit(ModalSubmission {
                custom_id: modal.data.custom_id.clone(),
                fields,
                user: submitter(&modal.user),
            })
        }
        _ => InboundInteraction::Other,
    }
}

/// Short label for logging which kind of interaction arrived
pub fn describe(interaction: &InboundInteraction) -> String {
    match interaction {
        InboundInteraction::Command(c) => format!("command /{} from {}", c.name, c.user.tag),
        InboundInteraction::Button(b) => format!("button {} from {}", b.custom_id, b.user.tag),
        InboundInteraction::ModalSubmit(m) => {
            format!("modal {} from {}", m.custom_id, m.user.tag)
        }
        InboundInteraction::Other => "unhandled interaction".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let click = InboundInteraction::Button(ButtonClick {
            custom_id: "voteButton_1".to_string(),
            message_id: 2,
            message_title: None,
            user: Submitter {
                id: 3,
                tag: "carol#0003".to_string(),
            },
        });
        assert_eq!(describe(&click), "button voteButton_1 from carol#0003");
        assert_eq!(describe(&InboundInteraction::Other), "unhandled interaction");
    }
}
