use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use channel_triage::core::config::EngineConfig;
use channel_triage::core::models::ChannelMessage;
use channel_triage::engine::TriageEngine;
use channel_triage::errors::TriageError;
use channel_triage::source::MessageSource;
use channel_triage::tools;
use chrono::{Duration, TimeZone, Utc};

/// In-memory source recording requested fetch depths, so the tests can
/// verify how string parameters and defaults translate into fetch windows.
struct StubSource {
    messages: Vec<ChannelMessage>,
    requested: Arc<Mutex<Vec<u32>>>,
}

#[async_trait]
impl MessageSource for StubSource {
    async fn fetch_recent(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> Result<Vec<ChannelMessage>, TriageError> {
        if channel_id == "missing" {
            return Err(TriageError::ChannelNotFound(channel_id.to_string()));
        }
        self.requested.lock().unwrap().push(limit);
        Ok(self
            .messages
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

fn msg(index: i64, content: &str) -> ChannelMessage {
    ChannelMessage {
        id: format!("m{index}"),
        author: "tester".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap() - Duration::minutes(index),
        content: content.to_string(),
    }
}

fn engine(messages: Vec<ChannelMessage>) -> (TriageEngine<StubSource>, Arc<Mutex<Vec<u32>>>) {
    let requested = Arc::new(Mutex::new(Vec::new()));
    let source = StubSource {
        messages,
        requested: Arc::clone(&requested),
    };
    (TriageEngine::new(source, EngineConfig::default()), requested)
}

#[tokio::test]
async fn read_messages_by_intent_renders_matches() {
    let (engine, _) = engine(vec![
        msg(0, "I get an error: NullPointerException"),
        msg(1, "hello"),
    ]);

    let report = tools::read_messages_by_intent(&engine, "c1", "bug_report", None, None)
        .await
        .unwrap();

    assert!(report.starts_with("**Retrieved 1 messages with intent 'bug_report':**"));
    assert!(report.contains("(ID: m0)"));
}

#[tokio::test]
async fn read_messages_by_intent_reports_empty_with_scanned_count() {
    let (engine, _) = engine(vec![msg(0, "hello"), msg(1, "hi")]);

    let report = tools::read_messages_by_intent(&engine, "c1", "feedback", None, None)
        .await
        .unwrap();

    assert_eq!(
        report,
        "No messages found with intent 'feedback' in channel (searched 2 messages)"
    );
}

#[tokio::test]
async fn read_messages_by_intent_applies_defaults() {
    let (engine, requested) = engine(Vec::new());

    tools::read_messages_by_intent(&engine, "c1", "general", None, None)
        .await
        .unwrap();

    // Default 30 days * 100 messages/day.
    assert_eq!(*requested.lock().unwrap(), vec![3000]);
}

#[tokio::test]
async fn read_messages_by_intent_parses_overrides() {
    let (engine, requested) = engine(Vec::new());

    tools::read_messages_by_intent(&engine, "c1", "general", Some("7"), Some("5"))
        .await
        .unwrap();

    assert_eq!(*requested.lock().unwrap(), vec![700]);
}

#[tokio::test]
async fn read_messages_by_intent_accepts_mixed_case_labels() {
    let (engine, _) = engine(vec![msg(0, "Check out my project: https://github.com/x/y")]);

    let report = tools::read_messages_by_intent(&engine, "c1", "Project_Showcase", None, None)
        .await
        .unwrap();

    assert!(report.contains("project_showcase"));
    assert!(report.contains("(ID: m0)"));
}

#[tokio::test]
async fn read_messages_by_intent_validates_parameters() {
    let (engine, _) = engine(Vec::new());

    for result in [
        tools::read_messages_by_intent(&engine, "", "general", None, None).await,
        tools::read_messages_by_intent(&engine, "c1", "", None, None).await,
        tools::read_messages_by_intent(&engine, "c1", "rant", None, None).await,
        tools::read_messages_by_intent(&engine, "c1", "general", Some("soon"), None).await,
        tools::read_messages_by_intent(&engine, "c1", "general", Some("-3"), None).await,
        tools::read_messages_by_intent(&engine, "c1", "general", None, Some("many")).await,
        tools::read_messages_by_intent(&engine, "c1", "general", None, Some("0")).await,
    ] {
        assert!(matches!(result, Err(TriageError::InvalidArgument(_))));
    }
}

#[tokio::test]
async fn read_messages_by_intent_propagates_not_found() {
    let (engine, _) = engine(Vec::new());

    let err = tools::read_messages_by_intent(&engine, "missing", "general", None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, TriageError::ChannelNotFound(_)));
}

#[tokio::test]
async fn search_messages_by_content_matches_any_keyword() {
    let (engine, requested) = engine(vec![
        msg(0, "I love Python programming"),
        msg(1, "nothing relevant"),
    ]);

    let report = tools::search_messages_by_content(&engine, "c1", "Python async error", None)
        .await
        .unwrap();

    assert!(report.starts_with("**Found 1 messages matching 'Python async error':**"));
    assert!(report.contains("(ID: m0)"));
    // Content search scans a fixed window, independent of any day span.
    assert_eq!(*requested.lock().unwrap(), vec![500]);
}

#[tokio::test]
async fn search_messages_by_content_reports_empty() {
    let (engine, _) = engine(vec![msg(0, "hello")]);

    let report = tools::search_messages_by_content(&engine, "c1", "zig", None)
        .await
        .unwrap();

    assert_eq!(report, "No messages found matching 'zig' in channel");
}

#[tokio::test]
async fn search_messages_by_content_validates_parameters() {
    let (engine, _) = engine(Vec::new());

    for result in [
        tools::search_messages_by_content(&engine, "", "python", None).await,
        tools::search_messages_by_content(&engine, "c1", "", None).await,
        tools::search_messages_by_content(&engine, "c1", "python", Some("0")).await,
        tools::search_messages_by_content(&engine, "c1", "python", Some("lots")).await,
    ] {
        assert!(matches!(result, Err(TriageError::InvalidArgument(_))));
    }
}

#[tokio::test]
async fn analyze_channel_stats_renders_all_six_lines() {
    let (engine, _) = engine(vec![
        msg(0, "why?"),
        msg(1, "the solution is simple"),
        msg(2, "hello"),
        msg(3, "hello again"),
    ]);

    let report = tools::analyze_channel_stats(&engine, "c1", None)
        .await
        .unwrap();

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "**Channel Statistics (last 30 days, 4 messages):**");
    assert_eq!(lines.len(), 7);
    assert!(lines.contains(&"- Questions: 1 (25.0%)"));
    assert!(lines.contains(&"- Answers: 1 (25.0%)"));
    assert!(lines.contains(&"- Project Showcases: 0 (0.0%)"));
    assert!(lines.contains(&"- Bug Reports: 0 (0.0%)"));
    assert!(lines.contains(&"- Feedback: 0 (0.0%)"));
    assert!(lines.contains(&"- General: 2 (50.0%)"));
}

#[tokio::test]
async fn analyze_channel_stats_handles_empty_channel() {
    let (engine, _) = engine(Vec::new());

    let report = tools::analyze_channel_stats(&engine, "c1", Some("14"))
        .await
        .unwrap();

    assert!(report.starts_with("**Channel Statistics (last 14 days, 0 messages):**"));
    // No division fault: every bucket renders 0.0%.
    assert_eq!(report.matches("(0.0%)").count(), 6);
}

#[tokio::test]
async fn analyze_channel_stats_validates_parameters() {
    let (engine, _) = engine(Vec::new());

    for result in [
        tools::analyze_channel_stats(&engine, "", None).await,
        tools::analyze_channel_stats(&engine, "c1", Some("whenever")).await,
    ] {
        assert!(matches!(result, Err(TriageError::InvalidArgument(_))));
    }
}
