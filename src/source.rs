use async_trait::async_trait;

use crate::core::models::ChannelMessage;
use crate::errors::TriageError;

/// The one boundary this crate depends on: ordered recent-message retrieval
/// for a channel.
///
/// Implementations must return messages strictly ordered most-recent-first,
/// with no duplicate ids within one call, and may return fewer than `limit`
/// messages when the channel history is shorter. The engine treats the call
/// as the single blocking point of a request; timeouts and cancellation, if
/// any, are the adapter's concern.
///
/// # Errors
///
/// `ChannelNotFound` when the channel id does not resolve, `Unavailable`
/// when the backend cannot be reached.
#[async_trait]
pub trait MessageSource: Send + Sync {
    async fn fetch_recent(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> Result<Vec<ChannelMessage>, TriageError>;
}
