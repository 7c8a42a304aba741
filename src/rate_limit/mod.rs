//! Optional client-side rate limiting.
//!
//! DexScreener publishes per-minute quotas and answers `429 Too Many
//! Requests` beyond them. [`DexScreenerClient`](crate::rest::DexScreenerClient)
//! itself never waits; wrap it in a [`RateLimitedClient`] to pace calls.
//!
//! ## Quotas
//!
//! - **Profiles, boosts, orders**: 60 requests per minute
//! - **Pairs, tokens, search**: 300 requests per minute

mod client;
mod window;

pub use client::RateLimitedClient;
pub use window::SlidingWindow;

use std::time::Duration;

/// Rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Whether to enable rate limiting.
    pub enabled: bool,
    /// Window the request counts apply to.
    pub window: Duration,
    /// Requests per window for profile, boost and order endpoints.
    pub profile_requests: u32,
    /// Requests per window for pair, token and search endpoints.
    pub pair_requests: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window: Duration::from_secs(60),
            profile_requests: limits::PROFILE_REQUESTS_PER_MINUTE,
            pair_requests: limits::PAIR_REQUESTS_PER_MINUTE,
        }
    }
}

/// Published DexScreener quotas.
pub mod limits {
    /// Token profile, boost and order endpoints.
    pub const PROFILE_REQUESTS_PER_MINUTE: u32 = 60;
    /// Pair, token and search endpoints.
    pub const PAIR_REQUESTS_PER_MINUTE: u32 = 300;
}
