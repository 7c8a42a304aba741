//! Pair lookup and search endpoints.

use crate::error::DexScreenerError;
use crate::rest::DexScreenerClient;
use crate::rest::endpoints::{self, MAX_TOKENS_PER_REQUEST};
use crate::types::{TokenPair, TokenPairs};

impl DexScreenerClient {
    /// Get a pair by chain and pair address.
    ///
    /// The result carries the pair in [`TokenPairs::pair`]; it is `None`
    /// when the API does not know the pair.
    ///
    /// # Arguments
    ///
    /// * `chain_id` - Chain identifier (e.g., "base")
    /// * `pair_id` - Pair (pool) address
    pub async fn get_token_pairs_by_chain(
        &self,
        chain_id: &str,
        pair_id: &str,
    ) -> Result<TokenPairs, DexScreenerError> {
        self.get(endpoints::PAIRS, &[chain_id, pair_id]).await
    }

    /// Get the pairs of a token across all chains.
    ///
    /// The result carries the pairs in [`TokenPairs::pairs`].
    pub async fn get_token_pairs(&self, token_address: &str) -> Result<TokenPairs, DexScreenerError> {
        self.get(endpoints::TOKEN_PAIRS, &[token_address]).await
    }

    /// Search pairs by token name, symbol or address.
    ///
    /// The query is URL-encoded, so text like `"SOL/USDC"` is sent intact.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use dexscreener_api_client::rest::DexScreenerClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = DexScreenerClient::new();
    ///     let result = client.search_pairs("SOL/USDC").await?;
    ///     println!("{} pairs", result.iter().count());
    ///     Ok(())
    /// }
    /// ```
    pub async fn search_pairs(&self, query: &str) -> Result<TokenPairs, DexScreenerError> {
        #[derive(serde::Serialize)]
        struct Params<'a> {
            q: &'a str,
        }
        self.get_with_params(endpoints::SEARCH, &Params { q: query })
            .await
    }

    /// Get every pool of a token on one chain.
    pub async fn get_token_pools(
        &self,
        chain_id: &str,
        token_address: &str,
    ) -> Result<Vec<TokenPair>, DexScreenerError> {
        self.get(endpoints::TOKEN_POOLS, &[chain_id, token_address])
            .await
    }

    /// Get the most liquid pool of each token, for up to 30 tokens at once.
    ///
    /// An empty slice returns an empty list without calling the API.
    /// More than [`MAX_TOKENS_PER_REQUEST`] addresses is rejected.
    pub async fn get_tokens(
        &self,
        chain_id: &str,
        token_addresses: &[&str],
    ) -> Result<Vec<TokenPair>, DexScreenerError> {
        if token_addresses.is_empty() {
            return Ok(Vec::new());
        }
        if token_addresses.len() > MAX_TOKENS_PER_REQUEST {
            return Err(DexScreenerError::InvalidRequest(format!(
                "too many token addresses: {} (max {})",
                token_addresses.len(),
                MAX_TOKENS_PER_REQUEST
            )));
        }

        let joined = token_addresses.join(",");
        self.get(endpoints::TOKENS, &[chain_id, joined.as_str()]).await
    }
}
