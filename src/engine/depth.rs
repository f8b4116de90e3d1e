/// Translate a "look back N days" request into a message-count fetch depth.
///
/// Message sources only offer "fetch N most recent", not time-range queries,
/// so the day span is converted with a per-day traffic heuristic
/// (`messages_per_day`, 100 by default via
/// [`EngineConfig`](crate::core::config::EngineConfig)). The actual elapsed
/// time covered depends on real channel traffic density; the result is an
/// estimate, not an exact boundary. Non-positive day spans are clamped to 1.
#[must_use]
pub fn estimate_depth(days: u32, messages_per_day: u32) -> u32 {
    days.max(1).saturating_mul(messages_per_day)
}
