use thiserror::Error;

/// Error taxonomy for the triage engine and its message source adapters.
///
/// Every failure surfaced by this crate falls into one of three buckets:
/// a caller-supplied parameter was malformed, the requested channel does not
/// exist, or the message backend could not be reached. None of these are
/// retried by the engine itself; retry policy belongs to the adapter.
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    #[error("Message source unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for TriageError {
    fn from(error: reqwest::Error) -> Self {
        TriageError::Unavailable(error.to_string())
    }
}
