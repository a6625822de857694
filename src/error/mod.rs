//! Error types and user-facing reply mapping.
//!
//! `AppError` is the top-level error type returned by services and command handlers.
//! It wraps domain-specific errors and maps every variant to the text shown to the
//! invoking user through [`AppError::user_message`]. Backend failures are logged with
//! full detail and replaced by a generic message.

pub mod auth;
pub mod config;
pub mod internal;
pub mod notify;

use thiserror::Error;

use crate::error::{
    auth::AuthError, config::ConfigError, internal::InternalError, notify::NotifyError,
};

/// Generic reply for failures that should not leak implementation details.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "`Error: Something went wrong while running this command. Please try again later.`";

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic error conversion. Domain-specific errors
/// like `AuthError` carry their own user-facing message, while the message variants
/// (`NotFound`, `BadRequest`) are shown verbatim.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Permission gate denial.
    ///
    /// Shown to the user through `AuthError::user_message()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    ///
    /// Raised when downloading a new avatar fails.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Failure while delivering a notification embed.
    #[error(transparent)]
    NotifyErr(#[from] NotifyError),

    /// Unexpected internal failure such as a timestamp Discord cannot represent.
    ///
    /// Malformed stored ids are reported by repositories as `DbErr::Custom` instead.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid user input.
    ///
    /// # Fields
    /// - Message describing what was invalid about the input
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with custom message.
    ///
    /// The message is logged but a generic message is shown to the user.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the message shown to the invoking user.
    ///
    /// Validation, permission and not-found errors are shown as-is. Every other
    /// variant is logged at error level and replaced by [`GENERIC_FAILURE_MESSAGE`].
    ///
    /// # Returns
    /// - User-facing message text
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthErr(err) => err.user_message().to_string(),
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            err => {
                tracing::error!("{}", err);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}
