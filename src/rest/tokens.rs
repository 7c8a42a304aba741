//! Token profile, boost and order endpoints.

use crate::error::DexScreenerError;
use crate::rest::DexScreenerClient;
use crate::rest::endpoints;
use crate::types::{TokenBoosted, TokenOrder, TokenProfile};

impl DexScreenerClient {
    /// Get the latest token profiles.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use dexscreener_api_client::rest::DexScreenerClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = DexScreenerClient::new();
    ///     for profile in client.get_token_profiles().await? {
    ///         println!("{} {}", profile.chain_id, profile.token_address);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_token_profiles(&self) -> Result<Vec<TokenProfile>, DexScreenerError> {
        self.get(endpoints::TOKEN_PROFILES_LATEST, &[]).await
    }

    /// Get the most recently boosted tokens.
    pub async fn get_latest_boosted_tokens(&self) -> Result<Vec<TokenBoosted>, DexScreenerError> {
        self.get(endpoints::TOKEN_BOOSTS_LATEST, &[]).await
    }

    /// Get the tokens with the most active boosts.
    pub async fn get_most_active_boosted_tokens(
        &self,
    ) -> Result<Vec<TokenBoosted>, DexScreenerError> {
        self.get(endpoints::TOKEN_BOOSTS_TOP, &[]).await
    }

    /// Get paid orders for a token.
    ///
    /// # Arguments
    ///
    /// * `chain_id` - Chain identifier (e.g., "solana")
    /// * `token_address` - Token contract or mint address
    pub async fn get_token_orders(
        &self,
        chain_id: &str,
        token_address: &str,
    ) -> Result<Vec<TokenOrder>, DexScreenerError> {
        self.get(endpoints::ORDERS, &[chain_id, token_address]).await
    }
}
