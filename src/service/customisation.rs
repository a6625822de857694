//! Embed colour, presence and avatar customisation.

use sea_orm::{DatabaseConnection, TransactionTrait};
use url::Url;

use crate::data::SettingRepository;
use crate::error::AppError;
use crate::model::setting::{ActivityKind, EmbedColour, SettingType, GLOBAL_SCOPE};

pub struct CustomisationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomisationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a guild's embed colour.
    ///
    /// # Returns
    /// - `Ok(EmbedColour)` - The stored colour
    /// - `Err(AppError::BadRequest)` - Not a hexadecimal colour; nothing is written
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn set_embed_colour(
        &self,
        guild_id: u64,
        input: &str,
    ) -> Result<EmbedColour, AppError> {
        let colour = EmbedColour::parse(input)?;

        SettingRepository::new(self.db)
            .upsert(guild_id, SettingType::EmbedColour, colour.hex())
            .await?;

        Ok(colour)
    }

    /// The guild's embed colour, or the default when unset or unreadable.
    pub async fn embed_colour(&self, guild_id: u64) -> u32 {
        match SettingRepository::new(self.db)
            .get(guild_id, SettingType::EmbedColour)
            .await
        {
            Ok(stored) => EmbedColour::value_or_default(stored.as_deref()),
            Err(e) => {
                tracing::error!("Failed to read embed colour for guild {}: {}", guild_id, e);
                EmbedColour::value_or_default(None)
            }
        }
    }

    /// Validates and stores the bot's presence.
    ///
    /// # Arguments
    /// - `activity_type` - `playing`, `listening` or `watching`, any case
    /// - `bio` - Presence text
    ///
    /// # Returns
    /// - `Ok(ActivityKind)` - The parsed kind, ready to apply
    /// - `Err(AppError::BadRequest)` - Unknown activity kind; nothing is written
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn set_presence(
        &self,
        activity_type: &str,
        bio: &str,
    ) -> Result<ActivityKind, AppError> {
        let kind = activity_type.parse::<ActivityKind>()?;

        // Both values change together or not at all
        let txn = self.db.begin().await?;
        let repo = SettingRepository::new(&txn);
        repo.upsert(GLOBAL_SCOPE, SettingType::ActivityType, kind.as_str())
            .await?;
        repo.upsert(GLOBAL_SCOPE, SettingType::Bio, bio).await?;
        txn.commit().await?;

        Ok(kind)
    }

    /// The stored presence to re-apply on startup.
    ///
    /// # Returns
    /// - `Ok(Some((kind, bio)))` - Both values stored and the kind is valid
    /// - `Ok(None)` - Nothing stored, or the stored kind is not recognised
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn stored_presence(&self) -> Result<Option<(ActivityKind, String)>, AppError> {
        let repo = SettingRepository::new(self.db);
        let activity_type = repo.get(GLOBAL_SCOPE, SettingType::ActivityType).await?;
        let bio = repo.get(GLOBAL_SCOPE, SettingType::Bio).await?;

        let (Some(activity_type), Some(bio)) = (activity_type, bio) else {
            return Ok(None);
        };

        match activity_type.parse::<ActivityKind>() {
            Ok(kind) => Ok(Some((kind, bio))),
            Err(_) => {
                tracing::warn!("Ignoring stored activity type '{}'", activity_type);
                Ok(None)
            }
        }
    }
}

/// Checks that an avatar URL is an absolute http(s) URL.
///
/// # Returns
/// - `Ok(Url)` - Parsed URL
/// - `Err(AppError::BadRequest)` - Unparseable URL or another scheme
pub fn parse_avatar_url(input: &str) -> Result<Url, AppError> {
    let invalid = || {
        AppError::BadRequest("`Error: Please provide a valid http(s) image URL.`".to_string())
    };

    let url = Url::parse(input.trim()).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(invalid()),
    }
}

/// Downloads new avatar image bytes.
///
/// # Returns
/// - `Ok(Vec<u8>)` - Response body
/// - `Err(AppError::BadRequest)` - Invalid URL or non-success response
/// - `Err(AppError::ReqwestErr)` - Connection or body read failure
pub async fn download_avatar(client: &reqwest::Client, input: &str) -> Result<Vec<u8>, AppError> {
    let url = parse_avatar_url(input)?;

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(AppError::BadRequest(format!(
            "`Error: Could not download the image ({})`",
            response.status()
        )));
    }

    Ok(response.bytes().await?.to_vec())
}
