use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::Intent;

/// A single message as returned by a [`MessageSource`](crate::source::MessageSource).
///
/// Read-only to this crate: sources return messages most-recent-first with
/// ids unique within one retrieval call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelMessage {
    pub id: String,
    /// Author display name, non-empty.
    pub author: String,
    pub created_at: DateTime<Utc>,
    /// Raw displayable text; may be empty.
    pub content: String,
}

/// A message paired with its computed intent.
///
/// Transient per request; nothing in this crate holds one beyond the call
/// that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedMessage {
    pub message: ChannelMessage,
    pub intent: Intent,
}

/// Count and share of one intent within an analyzed window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentTally {
    pub intent: Intent,
    pub count: usize,
    /// Percentage of the window total; `0.0` when the window is empty.
    pub percentage: f64,
}

/// Aggregate statistics over a fetched message window.
///
/// Always enumerates all six intents, zero-count buckets included. Computed
/// fresh on every request; never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelStats {
    /// The day span the caller asked for. An estimate of coverage, not an
    /// exact boundary; see [`EngineConfig`](crate::core::config::EngineConfig).
    pub timespan_days: u32,
    pub total: usize,
    pub tallies: Vec<IntentTally>,
}
