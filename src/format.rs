//! Report rendering for classified messages and channel statistics.
//!
//! Presentation only: nothing here classifies or reorders. The ordering of
//! message lines is whatever the pipeline produced (most-recent-first).

use crate::classify::Intent;
use crate::core::models::{ChannelStats, ClassifiedMessage};

/// Plural display label used in the statistics report.
fn stats_label(intent: Intent) -> &'static str {
    match intent {
        Intent::Question => "Questions",
        Intent::Answer => "Answers",
        Intent::ProjectShowcase => "Project Showcases",
        Intent::BugReport => "Bug Reports",
        Intent::Feedback => "Feedback",
        Intent::General => "General",
    }
}

/// Render one message as a single report line with id, intent, author,
/// timestamp, and raw content.
#[must_use]
pub fn format_message_line(cm: &ClassifiedMessage) -> String {
    format!(
        "- (ID: {}) [Intent: {}] **[{}]** `{}`: ```{}```",
        cm.message.id,
        cm.intent,
        cm.message.author,
        cm.message.created_at.to_rfc3339(),
        cm.message.content
    )
}

fn format_message_lines(messages: &[ClassifiedMessage]) -> String {
    messages
        .iter()
        .map(format_message_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the result of an intent-filtered retrieval, including the
/// "nothing found" sentence with the scanned-window size.
#[must_use]
pub fn format_intent_report(intent: Intent, matches: &[ClassifiedMessage], scanned: usize) -> String {
    if matches.is_empty() {
        return format!(
            "No messages found with intent '{intent}' in channel (searched {scanned} messages)"
        );
    }
    format!(
        "**Retrieved {} messages with intent '{}':** \n{}",
        matches.len(),
        intent,
        format_message_lines(matches)
    )
}

/// Render the result of a keyword search.
#[must_use]
pub fn format_search_report(query: &str, matches: &[ClassifiedMessage]) -> String {
    if matches.is_empty() {
        return format!("No messages found matching '{query}' in channel");
    }
    format!(
        "**Found {} messages matching '{}':** \n{}",
        matches.len(),
        query,
        format_message_lines(matches)
    )
}

/// Render channel statistics: a header with the day-span estimate and
/// message total, then one line per intent with count and percentage to one
/// decimal place.
#[must_use]
pub fn format_stats_report(stats: &ChannelStats) -> String {
    let mut out = format!(
        "**Channel Statistics (last {} days, {} messages):**",
        stats.timespan_days, stats.total
    );
    for tally in &stats.tallies {
        out.push_str(&format!(
            "\n- {}: {} ({:.1}%)",
            stats_label(tally.intent),
            tally.count,
            tally.percentage
        ));
    }
    out
}
