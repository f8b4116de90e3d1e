/// Channel Triage - classifies chat messages into conversational intents and
/// aggregates them, without depending on a hosted language model.
///
/// The crate implements a deterministic, rule-based pipeline over a channel's
/// recent message history:
/// 1. A classifier maps each message to exactly one of six intents
///    (question, answer, project showcase, bug report, feedback, general).
/// 2. A retrieval pipeline filters a fetched window by intent or searches it
///    by keywords.
/// 3. A stats aggregator tallies per-intent counts and percentages.
///
/// # Architecture
///
/// The system uses:
/// - A `MessageSource` trait as the only external boundary, with a Discord
///   REST adapter included
/// - Tokio for the async runtime, tokio-retry for backend retry policy
/// - thiserror for the `InvalidArgument` / `ChannelNotFound` / `Unavailable`
///   error taxonomy
/// - tracing for structured logging
///
/// Everything is stateless: each operation re-fetches and re-classifies, so
/// concurrent invocations are independent.
///
/// # Example
///
/// ```no_run
/// use channel_triage::core::config::{AppConfig, EngineConfig};
/// use channel_triage::discord::DiscordClient;
/// use channel_triage::engine::TriageEngine;
/// use channel_triage::tools;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     channel_triage::setup_logging();
///
///     let app = AppConfig::from_env()?;
///     let source = DiscordClient::new(app.discord_bot_token);
///     let engine = TriageEngine::new(source, EngineConfig::default());
///
///     let report = tools::read_messages_by_intent(
///         &engine,
///         "1134691231455789123",
///         "bug_report",
///         Some("7"),
///         None,
///     )
///     .await?;
///     println!("{report}");
///
///     let stats = tools::analyze_channel_stats(&engine, "1134691231455789123", None).await?;
///     println!("{stats}");
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod classify;
pub mod core;
pub mod discord;
pub mod engine;
pub mod errors;
pub mod format;
pub mod source;
pub mod tools;

// Re-export the types most callers need.
pub use classify::{Intent, classify};
pub use engine::TriageEngine;
pub use errors::TriageError;
pub use source::MessageSource;

/// Configure structured logging with JSON format.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for log
/// aggregation. Call once at process start, before invoking any operation.
///
/// # Example
///
/// ```
/// channel_triage::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
