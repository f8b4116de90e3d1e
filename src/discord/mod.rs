//! Discord REST adapter for the [`MessageSource`](crate::source::MessageSource) seam.

pub mod client;

pub use client::DiscordClient;
