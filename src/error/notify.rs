use thiserror::Error;

/// Failures while delivering a notification to a channel.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The destination channel no longer exists or the bot cannot access it.
    #[error("Channel {0} is unavailable")]
    ChannelUnavailable(u64),

    /// Any other Discord API failure.
    #[error(transparent)]
    Discord(Box<serenity::Error>),
}

impl From<serenity::Error> for NotifyError {
    fn from(err: serenity::Error) -> Self {
        NotifyError::Discord(Box::new(err))
    }
}
