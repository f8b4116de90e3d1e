//! The exposed operations: plain string/number parameters in, one formatted
//! report string out.
//!
//! This is the surface a tool-invocation layer calls. Required parameters
//! are validated non-empty; optional parameters arrive as raw strings and
//! are parsed here, with defaults taken from the engine's
//! [`EngineConfig`](crate::core::config::EngineConfig). All three operations
//! are read-only and idempotent; none mutate the message source.

use crate::classify::Intent;
use crate::engine::TriageEngine;
use crate::errors::TriageError;
use crate::format;
use crate::source::MessageSource;

fn parse_u32(name: &str, raw: &str) -> Result<u32, TriageError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|e| TriageError::InvalidArgument(format!("{name} must be a number: {e}")))
}

fn parse_limit(raw: Option<&str>, default: usize) -> Result<usize, TriageError> {
    match raw {
        None => Ok(default),
        Some(s) if s.trim().is_empty() => Ok(default),
        Some(s) => {
            let parsed = parse_u32("limit", s)?;
            if parsed == 0 {
                return Err(TriageError::InvalidArgument(
                    "limit must be a positive integer".to_string(),
                ));
            }
            Ok(parsed as usize)
        }
    }
}

fn parse_timespan(raw: Option<&str>, default: u32) -> Result<u32, TriageError> {
    match raw {
        None => Ok(default),
        Some(s) if s.trim().is_empty() => Ok(default),
        Some(s) => parse_u32("timespanDays", s),
    }
}

fn require(name: &str, value: &str) -> Result<(), TriageError> {
    if value.trim().is_empty() {
        return Err(TriageError::InvalidArgument(format!(
            "{name} cannot be empty"
        )));
    }
    Ok(())
}

/// Read messages from a channel filtered by intent.
///
/// `timespan_days` defaults to the configured day span (30), `limit` to the
/// configured result cap (50). The day span is converted to a fetch depth by
/// the traffic heuristic and is therefore an estimate.
///
/// # Errors
///
/// `InvalidArgument` for a missing channel id, an unrecognized intent label,
/// or an unparseable numeric parameter; `ChannelNotFound` / `Unavailable`
/// from the message source.
pub async fn read_messages_by_intent<S: MessageSource>(
    engine: &TriageEngine<S>,
    channel_id: &str,
    intent: &str,
    timespan_days: Option<&str>,
    limit: Option<&str>,
) -> Result<String, TriageError> {
    require("channelId", channel_id)?;
    require("intent", intent)?;

    let intent: Intent = intent.parse()?;
    let days = parse_timespan(timespan_days, engine.config().default_timespan_days)?;
    let limit = parse_limit(limit, engine.config().default_limit)?;

    let outcome = engine.filter_by_intent(channel_id, intent, days, limit).await?;
    Ok(format::format_intent_report(
        intent,
        &outcome.matches,
        outcome.scanned,
    ))
}

/// Search recent messages by content keywords.
///
/// The query is split on whitespace and a message matches if it contains any
/// one keyword (case-insensitive). Scans a fixed window of recent messages;
/// no time span parameter.
///
/// # Errors
///
/// `InvalidArgument` for a missing channel id or query, or an unparseable
/// limit; `ChannelNotFound` / `Unavailable` from the message source.
pub async fn search_messages_by_content<S: MessageSource>(
    engine: &TriageEngine<S>,
    channel_id: &str,
    query: &str,
    limit: Option<&str>,
) -> Result<String, TriageError> {
    require("channelId", channel_id)?;
    require("query", query)?;

    let limit = parse_limit(limit, engine.config().default_limit)?;

    let outcome = engine.search_by_content(channel_id, query, limit).await?;
    Ok(format::format_search_report(query, &outcome.matches))
}

/// Analyze message statistics for a channel over an estimated day span.
///
/// # Errors
///
/// `InvalidArgument` for a missing channel id or an unparseable
/// `timespan_days`; `ChannelNotFound` / `Unavailable` from the message
/// source.
pub async fn analyze_channel_stats<S: MessageSource>(
    engine: &TriageEngine<S>,
    channel_id: &str,
    timespan_days: Option<&str>,
) -> Result<String, TriageError> {
    require("channelId", channel_id)?;

    let days = parse_timespan(timespan_days, engine.config().default_timespan_days)?;

    let stats = engine.analyze(channel_id, days).await?;
    Ok(format::format_stats_report(&stats))
}
