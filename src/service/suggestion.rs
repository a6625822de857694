//! User suggestions and the suggestion blacklist.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::data::BlacklistRepository;
use crate::error::{auth::AuthError, notify::NotifyError, AppError};
use crate::model::audit::Notification;
use crate::service::customisation::CustomisationService;
use crate::service::notifier::Notifier;

/// Custom id prefix of the "Blacklist User" button; the suffix is the author's id.
pub const BLACKLIST_BUTTON_PREFIX: &str = "blacklist:";

const CHANNEL_NOT_FOUND: &str = "Failed to send suggestion. Support channel not found.";

/// A suggestion submitted through `/suggest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub title: String,
    pub body: String,
    pub details: Option<String>,
}

pub struct SuggestionService<'a, N: Notifier> {
    db: &'a DatabaseConnection,
    notifier: &'a N,
    channel_id: Option<u64>,
}

impl<'a, N: Notifier> SuggestionService<'a, N> {
    /// # Arguments
    /// - `channel_id` - Support channel suggestions are posted to, if configured
    pub fn new(db: &'a DatabaseConnection, notifier: &'a N, channel_id: Option<u64>) -> Self {
        Self {
            db,
            notifier,
            channel_id,
        }
    }

    /// Posts a suggestion to the support channel with a button to blacklist its author.
    ///
    /// # Arguments
    /// - `author_id` - Submitting user
    /// - `author_name` - Username shown in the footer
    /// - `guild_id` - Guild whose embed colour is used, if any
    /// - `suggestion` - Submitted text
    ///
    /// # Returns
    /// - `Ok(())` - Suggestion posted
    /// - `Err(AppError::AuthErr(Blacklisted))` - Author is blacklisted
    /// - `Err(AppError::NotFound)` - No support channel configured or reachable
    /// - `Err(AppError)` - Database or platform failure
    pub async fn submit(
        &self,
        author_id: u64,
        author_name: &str,
        guild_id: Option<u64>,
        suggestion: &Suggestion,
    ) -> Result<(), AppError> {
        if BlacklistRepository::new(self.db)
            .is_blacklisted(author_id)
            .await?
        {
            return Err(AuthError::Blacklisted.into());
        }

        let Some(channel_id) = self.channel_id else {
            return Err(AppError::NotFound(CHANNEL_NOT_FOUND.to_string()));
        };

        let colour = match guild_id {
            Some(guild_id) => CustomisationService::new(self.db).embed_colour(guild_id).await,
            None => crate::model::setting::DEFAULT_EMBED_COLOUR,
        };

        let details = suggestion
            .details
            .as_deref()
            .filter(|details| !details.trim().is_empty())
            .unwrap_or("None provided");

        let notification = Notification::new(format!("```{}```", suggestion.body), colour)
            .title(format!("Suggestion: {}", suggestion.title))
            .field("Additional Information", format!("```{}```", details), false)
            .footer(format!(
                "Submitted by {} on {}",
                author_name,
                Utc::now().format("%d/%m/%Y")
            ))
            .button(format!("{}{}", BLACKLIST_BUTTON_PREFIX, author_id), "Blacklist User");

        match self.notifier.send(channel_id, &notification).await {
            Ok(()) => {
                tracing::info!("Posted suggestion from user {}", author_id);
                Ok(())
            }
            Err(NotifyError::ChannelUnavailable(_)) => {
                Err(AppError::NotFound(CHANNEL_NOT_FOUND.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Bars a user from submitting suggestions. Already blacklisted users are left as is.
    pub async fn blacklist(&self, user_id: u64) -> Result<(), AppError> {
        BlacklistRepository::new(self.db).add(user_id).await?;
        tracing::info!("Blacklisted user {} from suggestions", user_id);

        Ok(())
    }
}

/// Extracts the author id from a "Blacklist User" button's custom id.
pub fn parse_blacklist_button(custom_id: &str) -> Option<u64> {
    custom_id
        .strip_prefix(BLACKLIST_BUTTON_PREFIX)?
        .parse()
        .ok()
}
