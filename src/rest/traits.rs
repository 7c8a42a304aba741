//! Trait definition for the DexScreener REST API client.
//!
//! [`DexScreenerApi`] abstracts every endpoint so callers can swap in a mock
//! or wrap the client in a decorator such as
//! [`RateLimitedClient`](crate::rate_limit::RateLimitedClient).
//!
//! # Example
//!
//! ```rust,no_run
//! use dexscreener_api_client::rest::{DexScreenerApi, DexScreenerClient};
//! use dexscreener_api_client::DexScreenerError;
//!
//! async fn print_top_boosts<C: DexScreenerApi>(client: &C) -> Result<(), DexScreenerError> {
//!     for token in client.get_most_active_boosted_tokens().await? {
//!         println!("{} boosted {}", token.token_address, token.total_amount);
//!     }
//!     Ok(())
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), DexScreenerError> {
//!     print_top_boosts(&DexScreenerClient::new()).await
//! }
//! ```

use std::future::Future;

use crate::error::DexScreenerError;
use crate::types::{TokenBoosted, TokenOrder, TokenPair, TokenPairs, TokenProfile};

/// Trait defining all DexScreener REST API operations.
pub trait DexScreenerApi: Send + Sync {
    /// Get the latest token profiles.
    fn get_token_profiles(
        &self,
    ) -> impl Future<Output = Result<Vec<TokenProfile>, DexScreenerError>> + Send;

    /// Get the most recently boosted tokens.
    fn get_latest_boosted_tokens(
        &self,
    ) -> impl Future<Output = Result<Vec<TokenBoosted>, DexScreenerError>> + Send;

    /// Get the tokens with the most active boosts.
    fn get_most_active_boosted_tokens(
        &self,
    ) -> impl Future<Output = Result<Vec<TokenBoosted>, DexScreenerError>> + Send;

    /// Get paid orders for a token.
    fn get_token_orders(
        &self,
        chain_id: &str,
        token_address: &str,
    ) -> impl Future<Output = Result<Vec<TokenOrder>, DexScreenerError>> + Send;

    /// Get a pair by chain and pair address.
    fn get_token_pairs_by_chain(
        &self,
        chain_id: &str,
        pair_id: &str,
    ) -> impl Future<Output = Result<TokenPairs, DexScreenerError>> + Send;

    /// Get the pairs of a token.
    fn get_token_pairs(
        &self,
        token_address: &str,
    ) -> impl Future<Output = Result<TokenPairs, DexScreenerError>> + Send;

    /// Search pairs.
    fn search_pairs(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<TokenPairs, DexScreenerError>> + Send;

    /// Get every pool of a token on one chain.
    fn get_token_pools(
        &self,
        chain_id: &str,
        token_address: &str,
    ) -> impl Future<Output = Result<Vec<TokenPair>, DexScreenerError>> + Send;

    /// Get the most liquid pool of each token.
    fn get_tokens(
        &self,
        chain_id: &str,
        token_addresses: &[&str],
    ) -> impl Future<Output = Result<Vec<TokenPair>, DexScreenerError>> + Send;
}
