//! The retrieval pipeline and statistics aggregator.
//!
//! Everything here is a pure pipeline over data freshly fetched for that
//! call: the engine holds no mutable state, so concurrent invocations are
//! independent and safe.

pub mod depth;

use tracing::info;

use crate::classify::{Intent, classify};
use crate::core::config::EngineConfig;
use crate::core::models::{ChannelStats, ClassifiedMessage, IntentTally};
use crate::errors::TriageError;
use crate::source::MessageSource;

/// Messages matching a filter or search, plus the size of the window that
/// was scanned to find them. The scanned count feeds the "no messages found"
/// report sentence.
#[derive(Debug)]
pub struct RetrievalOutcome {
    /// Matches in the source's most-recent-first order, truncated to the
    /// caller's limit.
    pub matches: Vec<ClassifiedMessage>,
    /// How many messages were fetched and examined.
    pub scanned: usize,
}

/// Classification and aggregation over a [`MessageSource`].
///
/// All defaults and heuristics come from the injected [`EngineConfig`];
/// there is no hidden global state resolved at call time.
pub struct TriageEngine<S: MessageSource> {
    source: S,
    config: EngineConfig,
}

impl<S: MessageSource> TriageEngine<S> {
    pub fn new(source: S, config: EngineConfig) -> Self {
        Self { source, config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fetch a day-span window of recent messages and keep those classified
    /// as `intent`, truncated to `limit`, preserving most-recent-first order.
    ///
    /// An empty match list is a valid, non-error result.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty channel id or a non-positive limit;
    /// `ChannelNotFound` / `Unavailable` from the message source.
    pub async fn filter_by_intent(
        &self,
        channel_id: &str,
        intent: Intent,
        days: u32,
        limit: usize,
    ) -> Result<RetrievalOutcome, TriageError> {
        validate_channel_id(channel_id)?;
        validate_limit(limit)?;

        let fetch_depth = depth::estimate_depth(days, self.config.messages_per_day);
        info!(channel_id, %intent, days, limit, fetch_depth, "filtering messages by intent");

        let messages = self.source.fetch_recent(channel_id, fetch_depth).await?;
        let scanned = messages.len();

        let matches: Vec<ClassifiedMessage> = messages
            .into_iter()
            .map(|message| {
                let intent = classify(&message.content);
                ClassifiedMessage { message, intent }
            })
            .filter(|cm| cm.intent == intent)
            .take(limit)
            .collect();

        Ok(RetrievalOutcome { matches, scanned })
    }

    /// Scan a fixed window of recent messages for any of the whitespace-
    /// separated keywords in `query` (logical OR over keywords, case-folded
    /// substring match), truncated to `limit`.
    ///
    /// The window size is a constant from the config; this operation does
    /// not accept a time span.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty channel id, an empty query, or a
    /// non-positive limit; `ChannelNotFound` / `Unavailable` from the source.
    pub async fn search_by_content(
        &self,
        channel_id: &str,
        query: &str,
        limit: usize,
    ) -> Result<RetrievalOutcome, TriageError> {
        validate_channel_id(channel_id)?;
        validate_limit(limit)?;
        if query.trim().is_empty() {
            return Err(TriageError::InvalidArgument(
                "query cannot be empty".to_string(),
            ));
        }

        let keywords: Vec<String> = query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        info!(channel_id, query, limit, "searching messages by content");

        let messages = self
            .source
            .fetch_recent(channel_id, self.config.search_window)
            .await?;
        let scanned = messages.len();

        let matches: Vec<ClassifiedMessage> = messages
            .into_iter()
            .filter(|message| {
                let content = message.content.to_lowercase();
                keywords.iter().any(|kw| content.contains(kw.as_str()))
            })
            .map(|message| {
                let intent = classify(&message.content);
                ClassifiedMessage { message, intent }
            })
            .take(limit)
            .collect();

        Ok(RetrievalOutcome { matches, scanned })
    }

    /// Classify a day-span window of recent messages and tally counts and
    /// percentages per intent.
    ///
    /// The result enumerates all six intents even at count zero; an empty
    /// window yields `0.0` for every percentage rather than a division
    /// fault.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty channel id; `ChannelNotFound` /
    /// `Unavailable` from the source.
    pub async fn analyze(&self, channel_id: &str, days: u32) -> Result<ChannelStats, TriageError> {
        validate_channel_id(channel_id)?;

        let fetch_depth = depth::estimate_depth(days, self.config.messages_per_day);
        info!(channel_id, days, fetch_depth, "analyzing channel stats");

        let messages = self.source.fetch_recent(channel_id, fetch_depth).await?;
        let total = messages.len();

        let mut counts = [0usize; Intent::ALL.len()];
        for message in &messages {
            let intent = classify(&message.content);
            let slot = Intent::ALL
                .iter()
                .position(|i| *i == intent)
                .unwrap_or(Intent::ALL.len() - 1);
            counts[slot] += 1;
        }

        let tallies = Intent::ALL
            .iter()
            .zip(counts)
            .map(|(&intent, count)| IntentTally {
                intent,
                count,
                percentage: if total == 0 {
                    0.0
                } else {
                    count as f64 * 100.0 / total as f64
                },
            })
            .collect();

        Ok(ChannelStats {
            timespan_days: days.max(1),
            total,
            tallies,
        })
    }
}

fn validate_channel_id(channel_id: &str) -> Result<(), TriageError> {
    if channel_id.trim().is_empty() {
        return Err(TriageError::InvalidArgument(
            "channelId cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_limit(limit: usize) -> Result<(), TriageError> {
    if limit == 0 {
        return Err(TriageError::InvalidArgument(
            "limit must be a positive integer".to_string(),
        ));
    }
    Ok(())
}
