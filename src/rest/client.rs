//! DexScreener REST API client implementation.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use url::Url;

use crate::error::{ApiError, DexScreenerError};
use crate::rest::endpoints::DEXSCREENER_BASE_URL;
use crate::rest::traits::DexScreenerApi;
use crate::types::{TokenBoosted, TokenOrder, TokenPair, TokenPairs, TokenProfile};

/// The DexScreener REST API client.
///
/// Every endpoint method issues exactly one GET request and decodes the
/// JSON body. Failures are returned as-is; nothing is retried unless
/// [`DexScreenerClientBuilder::max_retries`] was set.
///
/// # Example
///
/// ```rust,no_run
/// use dexscreener_api_client::rest::DexScreenerClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = DexScreenerClient::new();
///
///     let pairs = client.search_pairs("SOL/USDC").await?;
///     for pair in pairs.iter() {
///         println!("{} on {}: {:?}", pair.pair_address, pair.dex_id, pair.price_usd);
///     }
///
///     Ok(())
/// }
/// ```
///
/// Point the client somewhere else, e.g. a mock server:
///
/// ```rust
/// use dexscreener_api_client::rest::DexScreenerClient;
///
/// let client = DexScreenerClient::builder()
///     .base_url("http://localhost:8080")
///     .build();
/// assert_eq!(client.base_url(), "http://localhost:8080");
/// ```
#[derive(Clone)]
pub struct DexScreenerClient {
    http_client: ClientWithMiddleware,
    base_url: String,
}

impl DexScreenerClient {
    /// Create a new client against the public API with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> DexScreenerClientBuilder {
        DexScreenerClientBuilder::new()
    }

    /// The base URL requests are sent to, exactly as configured.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an endpoint followed by path segments.
    ///
    /// Each segment is percent-encoded as a single path segment, so
    /// identifiers cannot inject extra path components or a query.
    pub(crate) fn endpoint_url(
        &self,
        endpoint: &str,
        segments: &[&str],
    ) -> Result<Url, DexScreenerError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint))?;
        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| DexScreenerError::InvalidBaseUrl(self.base_url.clone()))?
                .pop_if_empty()
                .extend(segments);
        }
        Ok(url)
    }

    /// Make a GET request to an endpoint with trailing path segments.
    pub(crate) async fn get<T>(&self, endpoint: &str, segments: &[&str]) -> Result<T, DexScreenerError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint, segments)?;
        self.execute(url).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<T, DexScreenerError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let mut url = self.endpoint_url(endpoint, &[])?;
        let query_string = serde_urlencoded::to_string(params)?;
        if !query_string.is_empty() {
            url.set_query(Some(&query_string));
        }
        self.execute(url).await
    }

    async fn execute<T>(&self, url: Url) -> Result<T, DexScreenerError>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!("GET {}", url);
        let response = self.http_client.get(url).send().await?;
        self.parse_response(response).await
    }

    /// Parse a response from the DexScreener API.
    ///
    /// Anything but 200 OK is an [`ApiError`] carrying the body text. A
    /// failure to read that body is ignored so the status error wins.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, DexScreenerError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("DexScreener request failed with {}: {}", status, body);
            return Err(DexScreenerError::Api(ApiError::new(status, body)));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("Failed to decode DexScreener response: {}", e);
            DexScreenerError::Json(e)
        })
    }
}

impl Default for DexScreenerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DexScreenerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DexScreenerClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for [`DexScreenerClient`].
///
/// Setters are applied in call order; calling one twice keeps the last value.
pub struct DexScreenerClientBuilder {
    base_url: String,
    http_client: Option<reqwest::Client>,
    user_agent: Option<String>,
    max_retries: u32,
}

impl DexScreenerClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEXSCREENER_BASE_URL.to_string(),
            http_client: None,
            user_agent: None,
            max_retries: 0,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    ///
    /// The value is used verbatim.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Use a preconfigured HTTP client, e.g. one with timeouts or a proxy.
    ///
    /// The custom user agent is not applied to a client supplied this way.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the maximum number of retries for transient failures.
    ///
    /// Defaults to 0: every call is a single attempt.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    pub fn build(self) -> DexScreenerClient {
        let reqwest_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut headers = HeaderMap::new();
                let user_agent = self.user_agent.unwrap_or_else(|| {
                    format!("dexscreener-api-client/{}", env!("CARGO_PKG_VERSION"))
                });
                let header_value = HeaderValue::from_str(&user_agent)
                    .unwrap_or_else(|_| HeaderValue::from_static("dexscreener-api-client"));
                headers.insert(USER_AGENT, header_value);

                reqwest::Client::builder()
                    .default_headers(headers)
                    .build()
                    .unwrap_or_else(|_| reqwest::Client::new())
            }
        };

        let mut builder = ClientBuilder::new(reqwest_client).with(TracingMiddleware::default());
        if self.max_retries > 0 {
            let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.max_retries);
            builder = builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        DexScreenerClient {
            http_client: builder.build(),
            base_url: self.base_url,
        }
    }
}

impl Default for DexScreenerClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// DexScreenerApi trait implementation.

impl DexScreenerApi for DexScreenerClient {
    async fn get_token_profiles(&self) -> Result<Vec<TokenProfile>, DexScreenerError> {
        DexScreenerClient::get_token_profiles(self).await
    }

    async fn get_latest_boosted_tokens(&self) -> Result<Vec<TokenBoosted>, DexScreenerError> {
        DexScreenerClient::get_latest_boosted_tokens(self).await
    }

    async fn get_most_active_boosted_tokens(
        &self,
    ) -> Result<Vec<TokenBoosted>, DexScreenerError> {
        DexScreenerClient::get_most_active_boosted_tokens(self).await
    }

    async fn get_token_orders(
        &self,
        chain_id: &str,
        token_address: &str,
    ) -> Result<Vec<TokenOrder>, DexScreenerError> {
        DexScreenerClient::get_token_orders(self, chain_id, token_address).await
    }

    async fn get_token_pairs_by_chain(
        &self,
        chain_id: &str,
        pair_id: &str,
    ) -> Result<TokenPairs, DexScreenerError> {
        DexScreenerClient::get_token_pairs_by_chain(self, chain_id, pair_id).await
    }

    async fn get_token_pairs(&self, token_address: &str) -> Result<TokenPairs, DexScreenerError> {
        DexScreenerClient::get_token_pairs(self, token_address).await
    }

    async fn search_pairs(&self, query: &str) -> Result<TokenPairs, DexScreenerError> {
        DexScreenerClient::search_pairs(self, query).await
    }

    async fn get_token_pools(
        &self,
        chain_id: &str,
        token_address: &str,
    ) -> Result<Vec<TokenPair>, DexScreenerError> {
        DexScreenerClient::get_token_pools(self, chain_id, token_address).await
    }

    async fn get_tokens(
        &self,
        chain_id: &str,
        token_addresses: &[&str],
    ) -> Result<Vec<TokenPair>, DexScreenerError> {
        DexScreenerClient::get_tokens(self, chain_id, token_addresses).await
    }
}
