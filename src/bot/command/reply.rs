//! Ephemeral interaction replies.

use serenity::all::{
    CommandInteraction, Context, CreateActionRow, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse,
};

use crate::model::audit::Notification;
use crate::service::notifier::build_embed;

/// Content of a reply to an interaction, always shown only to the invoking user.
#[derive(Default)]
pub struct Reply {
    content: Option<String>,
    embeds: Vec<CreateEmbed>,
    components: Vec<CreateActionRow>,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn embed(notification: &Notification) -> Self {
        Self {
            embeds: vec![build_embed(notification)],
            ..Default::default()
        }
    }

    pub fn components(mut self, components: Vec<CreateActionRow>) -> Self {
        self.components = components;
        self
    }

    fn into_message(self) -> CreateInteractionResponseMessage {
        let mut message = CreateInteractionResponseMessage::new()
            .embeds(self.embeds)
            .components(self.components);
        if let Some(content) = self.content {
            message = message.content(content);
        }
        message
    }

    /// A new ephemeral message answering the interaction.
    pub fn into_response(self) -> CreateInteractionResponse {
        CreateInteractionResponse::Message(self.into_message().ephemeral(true))
    }

    /// Replaces the message the component was attached to.
    pub fn into_update(self) -> CreateInteractionResponse {
        CreateInteractionResponse::UpdateMessage(self.into_message())
    }

    fn into_edit(self) -> EditInteractionResponse {
        let mut edit = EditInteractionResponse::new()
            .embeds(self.embeds)
            .components(self.components);
        if let Some(content) = self.content {
            edit = edit.content(content);
        }
        edit
    }
}

/// Sends the reply, editing the deferred response when the command was deferred.
pub async fn send(
    ctx: &Context,
    interaction: &CommandInteraction,
    reply: Reply,
    deferred: bool,
) -> Result<(), serenity::Error> {
    if deferred {
        interaction.edit_response(&ctx.http, reply.into_edit()).await?;
    } else {
        interaction
            .create_response(&ctx.http, reply.into_response())
            .await?;
    }

    Ok(())
}
