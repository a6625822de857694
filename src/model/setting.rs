use std::fmt;
use std::str::FromStr;

use serenity::all::ActivityData;

use crate::error::AppError;
use crate::util::parse::parse_stored_id;

/// Guild id used for settings that apply to the bot as a whole.
pub const GLOBAL_SCOPE: u64 = 0;

/// Embed colour used when a guild has not chosen one.
pub const DEFAULT_EMBED_COLOUR: u32 = 0xC4A7EC;

/// Keys of the generic settings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingType {
    EmbedColour,
    ActivityType,
    Bio,
}

impl SettingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmbedColour => "embed_color",
            Self::ActivityType => "activity_type",
            Self::Bio => "bio",
        }
    }
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored `(guild, type) -> value` setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub guild_id: u64,
    pub setting_type: String,
    pub value: String,
}

impl Setting {
    pub fn from_entity(entity: entity::customisation::Model) -> Result<Self, sea_orm::DbErr> {
        Ok(Self {
            guild_id: parse_stored_id(&entity.guild_id)?,
            setting_type: entity.setting_type,
            value: entity.value,
        })
    }
}

/// An embed colour chosen by a guild.
///
/// Keeps the hex digits as the user entered them (minus any leading `#`) so the
/// confirmation echoes their input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedColour {
    hex: String,
    value: u32,
}

impl EmbedColour {
    /// Parses a colour such as `#C4A7EC` or `c4a7ec`.
    ///
    /// # Returns
    /// - `Ok(EmbedColour)` - A base-16 value no larger than `0xFFFFFF`
    /// - `Err(AppError::BadRequest)` - Anything else
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let invalid = || {
            AppError::BadRequest(
                "`Error: Invalid color format! Please provide a valid hexadecimal color value.`"
                    .to_string(),
            )
        };

        if hex.is_empty() || hex.len() > 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;

        Ok(Self {
            hex: hex.to_string(),
            value,
        })
    }

    /// Reads a stored colour, falling back to the default for missing or corrupt values.
    pub fn value_or_default(stored: Option<&str>) -> u32 {
        stored
            .and_then(|value| Self::parse(value).ok())
            .map(|colour| colour.value)
            .unwrap_or(DEFAULT_EMBED_COLOUR)
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

/// Presence activity kinds the owner may choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Playing,
    Listening,
    Watching,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [Self::Playing, Self::Listening, Self::Watching];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Listening => "listening",
            Self::Watching => "watching",
        }
    }

    /// Builds the gateway presence for this kind with the given text.
    pub fn activity(&self, text: &str) -> ActivityData {
        match self {
            Self::Playing => ActivityData::playing(text),
            Self::Listening => ActivityData::listening(text),
            Self::Watching => ActivityData::watching(text),
        }
    }
}

impl FromStr for ActivityKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| {
                AppError::BadRequest(
                    "`Error: Invalid activity type! Choose from playing, listening, or watching.`"
                        .to_string(),
                )
            })
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
