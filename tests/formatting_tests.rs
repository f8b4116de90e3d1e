use channel_triage::Intent;
use channel_triage::core::models::{ChannelMessage, ChannelStats, ClassifiedMessage, IntentTally};
use channel_triage::format::{
    format_intent_report, format_message_line, format_search_report, format_stats_report,
};
use chrono::{TimeZone, Utc};

/// Tests for the report rendering logic. These pin the output shapes so
/// refactoring does not silently change what callers display.

fn classified(id: &str, author: &str, content: &str, intent: Intent) -> ClassifiedMessage {
    ClassifiedMessage {
        message: ChannelMessage {
            id: id.to_string(),
            author: author.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            content: content.to_string(),
        },
        intent,
    }
}

#[test]
fn test_message_line_format() {
    let cm = classified("123", "alice", "the build is broken", Intent::BugReport);

    let line = format_message_line(&cm);

    assert_eq!(
        line,
        "- (ID: 123) [Intent: bug_report] **[alice]** `2024-06-01T12:00:00+00:00`: ```the build is broken```"
    );
}

#[test]
fn test_intent_report_with_matches() {
    let matches = vec![
        classified("1", "alice", "how?", Intent::Question),
        classified("2", "bob", "wie geht das", Intent::Question),
    ];

    let report = format_intent_report(Intent::Question, &matches, 40);

    assert!(report.starts_with("**Retrieved 2 messages with intent 'question':**"));
    assert!(report.contains("(ID: 1)"));
    assert!(report.contains("(ID: 2)"));
    // One line per message.
    assert_eq!(report.lines().count(), 3);
}

#[test]
fn test_intent_report_empty_mentions_scanned_count() {
    let report = format_intent_report(Intent::Feedback, &[], 123);

    assert_eq!(
        report,
        "No messages found with intent 'feedback' in channel (searched 123 messages)"
    );
}

#[test]
fn test_search_report_with_matches() {
    let matches = vec![classified("9", "carol", "python rocks", Intent::General)];

    let report = format_search_report("python", &matches);

    assert!(report.starts_with("**Found 1 messages matching 'python':**"));
    assert!(report.contains("(ID: 9)"));
}

#[test]
fn test_search_report_empty() {
    let report = format_search_report("zig", &[]);

    assert_eq!(report, "No messages found matching 'zig' in channel");
}

#[test]
fn test_stats_report_header_and_lines() {
    let stats = ChannelStats {
        timespan_days: 7,
        total: 8,
        tallies: Intent::ALL
            .iter()
            .map(|&intent| IntentTally {
                intent,
                count: if intent == Intent::Question { 3 } else { 1 },
                percentage: if intent == Intent::Question { 37.5 } else { 12.5 },
            })
            .collect(),
    };

    let report = format_stats_report(&stats);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "**Channel Statistics (last 7 days, 8 messages):**");
    assert_eq!(lines[1], "- Questions: 3 (37.5%)");
    assert_eq!(lines[2], "- Answers: 1 (12.5%)");
    assert_eq!(lines[3], "- Project Showcases: 1 (12.5%)");
    assert_eq!(lines[4], "- Bug Reports: 1 (12.5%)");
    assert_eq!(lines[5], "- Feedback: 1 (12.5%)");
    assert_eq!(lines[6], "- General: 1 (12.5%)");
}

#[test]
fn test_stats_report_rounds_to_one_decimal() {
    let stats = ChannelStats {
        timespan_days: 30,
        total: 3,
        tallies: vec![IntentTally {
            intent: Intent::General,
            count: 1,
            percentage: 100.0 / 3.0,
        }],
    };

    let report = format_stats_report(&stats);

    assert!(report.contains("- General: 1 (33.3%)"));
}
