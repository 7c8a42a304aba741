//! DexScreener REST API endpoint constants.

/// Base URL for the DexScreener REST API.
pub const DEXSCREENER_BASE_URL: &str = "https://api.dexscreener.com";

/// Maximum number of token addresses accepted by [`TOKENS`] in one call.
pub const MAX_TOKENS_PER_REQUEST: usize = 30;

/// Latest token profiles.
pub const TOKEN_PROFILES_LATEST: &str = "/token-profiles/latest/v1";
/// Latest boosted tokens.
pub const TOKEN_BOOSTS_LATEST: &str = "/token-boosts/latest/v1";
/// Tokens with the most active boosts.
pub const TOKEN_BOOSTS_TOP: &str = "/token-boosts/top/v1";
/// Paid orders, followed by `/{chainId}/{tokenAddress}`.
pub const ORDERS: &str = "/orders/v1";
/// Pair by chain and address, followed by `/{chainId}/{pairId}`.
pub const PAIRS: &str = "/latest/dex/pairs";
/// Pairs of a token, followed by `/{tokenAddress}`.
pub const TOKEN_PAIRS: &str = "/latest/dex/tokens";
/// Pair search, takes the `q` query parameter.
pub const SEARCH: &str = "/latest/dex/search";
/// All pools of a token, followed by `/{chainId}/{tokenAddress}`.
pub const TOKEN_POOLS: &str = "/token-pairs/v1";
/// Best pool per token, followed by `/{chainId}/{addr1,addr2,...}`.
pub const TOKENS: &str = "/tokens/v1";
