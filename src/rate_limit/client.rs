//! Rate-limited REST client wrapper.
//!
//! Provides a wrapper around any [`DexScreenerApi`] implementation that paces
//! requests to the API's published per-minute quotas.
//!
//! # Example
//!
//! ```rust,no_run
//! use dexscreener_api_client::rest::{DexScreenerApi, DexScreenerClient};
//! use dexscreener_api_client::rate_limit::{RateLimitConfig, RateLimitedClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RateLimitedClient::new(DexScreenerClient::new(), RateLimitConfig::default());
//!
//!     // Waits instead of tripping the API's 60 requests/minute quota
//!     for _ in 0..100 {
//!         let profiles = client.get_token_profiles().await?;
//!         println!("{} profiles", profiles.len());
//!     }
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::DexScreenerError;
use crate::rate_limit::{RateLimitConfig, SlidingWindow};
use crate::rest::DexScreenerApi;
use crate::types::{TokenBoosted, TokenOrder, TokenPair, TokenPairs, TokenProfile};

/// A rate-limited wrapper around any [`DexScreenerApi`] implementation.
///
/// Profile, boost and order endpoints share one window; pair, token and
/// search endpoints share another. Calls over quota sleep until a permit
/// frees up.
pub struct RateLimitedClient<C> {
    inner: C,
    config: RateLimitConfig,
    /// Profile, boost and order endpoints
    profile_limiter: Arc<Mutex<SlidingWindow>>,
    /// Pair, token and search endpoints
    pair_limiter: Arc<Mutex<SlidingWindow>>,
}

impl<C> RateLimitedClient<C> {
    /// Create a new rate-limited client wrapper.
    pub fn new(inner: C, config: RateLimitConfig) -> Self {
        Self {
            inner,
            profile_limiter: Arc::new(Mutex::new(SlidingWindow::new(
                config.window,
                config.profile_requests.max(1),
            ))),
            pair_limiter: Arc::new(Mutex::new(SlidingWindow::new(
                config.window,
                config.pair_requests.max(1),
            ))),
            config,
        }
    }

    /// Get a reference to the inner client.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Get the current configuration.
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Enable or disable rate limiting.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    async fn wait_profile(&self) {
        self.wait(&self.profile_limiter, "profile").await;
    }

    async fn wait_pair(&self) {
        self.wait(&self.pair_limiter, "pair").await;
    }

    async fn wait(&self, limiter: &Mutex<SlidingWindow>, name: &str) {
        if !self.config.enabled {
            return;
        }

        loop {
            let mut window = limiter.lock().await;
            match window.try_acquire() {
                Ok(()) => return,
                Err(wait_time) => {
                    drop(window);
                    tracing::debug!("{} rate limit reached, waiting {:?}", name, wait_time);
                    tokio::time::sleep(wait_time).await;
                }
            }
        }
    }
}

impl<C: Clone> Clone for RateLimitedClient<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            config: self.config.clone(),
            profile_limiter: self.profile_limiter.clone(),
            pair_limiter: self.pair_limiter.clone(),
        }
    }
}

impl<C: DexScreenerApi> DexScreenerApi for RateLimitedClient<C> {
    async fn get_token_profiles(&self) -> Result<Vec<TokenProfile>, DexScreenerError> {
        self.wait_profile().await;
        self.inner.get_token_profiles().await
    }

    async fn get_latest_boosted_tokens(&self) -> Result<Vec<TokenBoosted>, DexScreenerError> {
        self.wait_profile().await;
        self.inner.get_latest_boosted_tokens().await
    }

    async fn get_most_active_boosted_tokens(
        &self,
    ) -> Result<Vec<TokenBoosted>, DexScreenerError> {
        self.wait_profile().await;
        self.inner.get_most_active_boosted_tokens().await
    }

    async fn get_token_orders(
        &self,
        chain_id: &str,
        token_address: &str,
    ) -> Result<Vec<TokenOrder>, DexScreenerError> {
        self.wait_profile().await;
        self.inner.get_token_orders(chain_id, token_address).await
    }

    async fn get_token_pairs_by_chain(
        &self,
        chain_id: &str,
        pair_id: &str,
    ) -> Result<TokenPairs, DexScreenerError> {
        self.wait_pair().await;
        self.inner.get_token_pairs_by_chain(chain_id, pair_id).await
    }

    async fn get_token_pairs(&self, token_address: &str) -> Result<TokenPairs, DexScreenerError> {
        self.wait_pair().await;
        self.inner.get_token_pairs(token_address).await
    }

    async fn search_pairs(&self, query: &str) -> Result<TokenPairs, DexScreenerError> {
        self.wait_pair().await;
        self.inner.search_pairs(query).await
    }

    async fn get_token_pools(
        &self,
        chain_id: &str,
        token_address: &str,
    ) -> Result<Vec<TokenPair>, DexScreenerError> {
        self.wait_pair().await;
        self.inner.get_token_pools(chain_id, token_address).await
    }

    async fn get_tokens(
        &self,
        chain_id: &str,
        token_addresses: &[&str],
    ) -> Result<Vec<TokenPair>, DexScreenerError> {
        self.wait_pair().await;
        self.inner.get_tokens(chain_id, token_addresses).await
    }
}
