use std::env;

/// Tunables for the retrieval pipeline, injected at engine construction.
///
/// The `messages_per_day` heuristic translates a "look back N days" request
/// into a concrete fetch count, because message sources only offer "fetch N
/// most recent". It has no basis in actual channel traffic; treat any
/// day-span output as an estimate, not an exact time boundary.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Estimated messages per day used to convert a day span into a fetch depth.
    pub messages_per_day: u32,
    /// Day span applied when a caller omits `timespan_days`.
    pub default_timespan_days: u32,
    /// Result cap applied when a caller omits `limit`.
    pub default_limit: usize,
    /// Fixed window of recent messages scanned by content search.
    pub search_window: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            messages_per_day: 100,
            default_timespan_days: 30,
            default_limit: 50,
            search_window: 500,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub discord_bot_token: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            discord_bot_token: env::var("DISCORD_BOT_TOKEN")
                .map_err(|e| format!("DISCORD_BOT_TOKEN: {}", e))?,
        })
    }
}
