//! Trading pair types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, TimestampMilliSeconds, serde_as};
use time::OffsetDateTime;

/// Identity of one side of a pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairToken {
    pub address: String,
    pub name: String,
    pub symbol: String,
}

/// Pool liquidity, in USD and in units of each token.
#[serde_as]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Liquidity {
    #[serde(default)]
    pub usd: Option<f64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub base: f64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub quote: f64,
}

/// A website listed in a pair's info block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Website {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub url: String,
}

/// A social handle listed in a pair's info block.
///
/// The API has used both `platform`/`handle` and `type`/`url` for the
/// same data; both spellings decode into this struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Social {
    #[serde(alias = "type")]
    pub platform: String,
    #[serde(alias = "url")]
    pub handle: String,
}

/// Informational metadata of a pair.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub websites: Vec<Website>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub socials: Vec<Social>,
}

/// Active boosts on a pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boosts {
    #[serde(default)]
    pub active: u64,
}

/// A value sampled over the API's rolling windows.
///
/// Windows the API omits decode as `T::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeframes<T> {
    /// Last 5 minutes
    pub m5: T,
    /// Last hour
    pub h1: T,
    /// Last 6 hours
    pub h6: T,
    /// Last 24 hours
    pub h24: T,
}

/// Buy and sell transaction counts within one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxnCount {
    pub buys: u64,
    pub sells: u64,
}

impl TxnCount {
    /// Total number of transactions in the window.
    pub fn total(&self) -> u64 {
        self.buys + self.sells
    }
}

/// A tradeable base/quote combination on a DEX.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Schema version, present on some payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    /// Chain identifier.
    pub chain_id: String,
    /// DEX identifier (e.g. "raydium").
    pub dex_id: String,
    /// DexScreener page for the pair.
    #[serde(default)]
    pub url: String,
    /// Pool address.
    pub pair_address: String,
    /// Pool labels (e.g. "v3", "CLMM").
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Vec<String>,
    /// Base token identity.
    pub base_token: PairToken,
    /// Quote token identity.
    pub quote_token: PairToken,
    /// Price of the base token in quote token units, as sent.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub price_native: String,
    /// Price of the base token in USD, as sent.
    #[serde(default)]
    pub price_usd: Option<String>,
    /// Transaction counts per window.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub txns: Timeframes<TxnCount>,
    /// USD volume per window.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub volume: Timeframes<f64>,
    /// Price change percentage per window.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub price_change: Timeframes<f64>,
    /// Pool liquidity.
    #[serde(default)]
    pub liquidity: Option<Liquidity>,
    /// Fully diluted valuation in USD.
    #[serde(default)]
    pub fdv: Option<f64>,
    /// Market capitalization in USD.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Pool creation time (milliseconds on the wire).
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub pair_created_at: Option<OffsetDateTime>,
    /// Image, website and social metadata.
    #[serde(default)]
    pub info: Option<PairInfo>,
    /// Active boosts.
    #[serde(default)]
    pub boosts: Option<Boosts>,
}

impl TokenPair {
    /// Native price as a [`Decimal`].
    ///
    /// `None` when the price is missing or cannot be represented exactly.
    pub fn price_native_decimal(&self) -> Option<Decimal> {
        parse_price(&self.price_native)
    }

    /// USD price as a [`Decimal`].
    ///
    /// `None` when the price is missing or cannot be represented exactly.
    pub fn price_usd_decimal(&self) -> Option<Decimal> {
        self.price_usd.as_deref().and_then(parse_price)
    }
}

// Rejects values out of range or with more than 28 decimal places.
fn parse_price(raw: &str) -> Option<Decimal> {
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str_exact(raw).ok()
}

/// Response envelope for pair lookups and search.
///
/// Lookups by chain and pair address fill `pair`; lookups by token address
/// and search fill `pairs`. Check which one is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairs {
    #[serde(default)]
    pub schema_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair: Option<TokenPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pairs: Option<Vec<TokenPair>>,
}

impl TokenPairs {
    /// Iterate every pair in the envelope, the single pair first.
    pub fn iter(&self) -> impl Iterator<Item = &TokenPair> {
        self.pair
            .iter()
            .chain(self.pairs.iter().flat_map(|pairs| pairs.iter()))
    }

    /// Check if the envelope carries no pairs at all.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Consume the envelope into a flat list of pairs.
    pub fn into_vec(self) -> Vec<TokenPair> {
        self.pair
            .into_iter()
            .chain(self.pairs.unwrap_or_default())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample_pair_json() -> serde_json::Value {
        serde_json::json!({
            "chainId": "solana",
            "dexId": "raydium",
            "url": "https://dexscreener.com/solana/pool",
            "pairAddress": "pool",
            "labels": ["CLMM"],
            "baseToken": { "address": "So11", "name": "Wrapped SOL", "symbol": "SOL" },
            "quoteToken": { "address": "EPjF", "name": "USD Coin", "symbol": "USDC" },
            "priceNative": "142.35",
            "priceUsd": "142.35",
            "txns": {
                "m5": { "buys": 10, "sells": 8 },
                "h1": { "buys": 120, "sells": 95 },
                "h6": { "buys": 700, "sells": 650 },
                "h24": { "buys": 3000, "sells": 2900 }
            },
            "volume": { "h24": 1500000.5, "h6": 400000.0, "h1": 60000.0, "m5": 5000.25 },
            "priceChange": { "m5": 0.1, "h1": -0.5, "h6": 1.2, "h24": -3.4 },
            "liquidity": { "usd": 2500000.0, "base": 9000.0, "quote": 1200000.0 },
            "fdv": 70000000000.0,
            "marketCap": 68000000000.0,
            "pairCreatedAt": 1700000000000i64,
            "info": {
                "imageUrl": "https://cdn.example.com/sol.png",
                "websites": [{ "label": "Website", "url": "https://solana.com" }],
                "socials": [{ "type": "twitter", "url": "https://x.com/solana" }]
            },
            "boosts": { "active": 3 }
        })
    }

    #[test]
    fn test_pair_decoding() {
        let pair: TokenPair = serde_json::from_value(sample_pair_json()).unwrap();

        assert_eq!(pair.chain_id, "solana");
        assert_eq!(pair.dex_id, "raydium");
        assert_eq!(pair.labels, vec!["CLMM".to_string()]);
        assert_eq!(pair.base_token.symbol, "SOL");
        assert_eq!(pair.quote_token.symbol, "USDC");
        assert_eq!(pair.price_native, "142.35");
        assert_eq!(pair.price_usd.as_deref(), Some("142.35"));
        assert_eq!(pair.price_native_decimal(), Some(Decimal::new(14235, 2)));
        assert_eq!(pair.price_usd_decimal(), Some(Decimal::new(14235, 2)));
        assert_eq!(pair.txns.h1, TxnCount { buys: 120, sells: 95 });
        assert_eq!(pair.txns.m5.total(), 18);
        assert_eq!(pair.volume.m5, 5000.25);
        assert_eq!(pair.price_change.h24, -3.4);
        assert_eq!(pair.liquidity.unwrap().usd, Some(2500000.0));
        assert_eq!(pair.market_cap, Some(68000000000.0));
        assert_eq!(pair.pair_created_at, Some(datetime!(2023-11-14 22:13:20 UTC)));
        assert_eq!(pair.boosts, Some(Boosts { active: 3 }));

        let info = pair.info.unwrap();
        assert_eq!(info.websites[0].url, "https://solana.com");
        assert_eq!(info.socials[0].platform, "twitter");
        assert_eq!(info.socials[0].handle, "https://x.com/solana");
    }

    #[test]
    fn test_pair_round_trip() {
        let pair: TokenPair = serde_json::from_value(sample_pair_json()).unwrap();
        let encoded = serde_json::to_value(&pair).unwrap();
        let decoded: TokenPair = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, pair);
    }

    #[test]
    fn test_minimal_pair_defaults() {
        let json = serde_json::json!({
            "chainId": "base",
            "dexId": "uniswap",
            "pairAddress": "0xpool",
            "baseToken": { "address": "0xa", "name": "A", "symbol": "A" },
            "quoteToken": { "address": "0xb", "name": "B", "symbol": "B" },
            "priceNative": "0.001",
            "labels": null,
            "volume": { "h24": 12.5 }
        });
        let pair: TokenPair = serde_json::from_value(json).unwrap();

        assert!(pair.labels.is_empty());
        assert!(pair.price_usd.is_none());
        assert!(pair.price_usd_decimal().is_none());
        assert!(pair.liquidity.is_none());
        assert!(pair.pair_created_at.is_none());
        assert_eq!(pair.volume.h24, 12.5);
        assert_eq!(pair.volume.m5, 0.0);
        assert_eq!(pair.txns, Timeframes::default());
    }

    #[test]
    fn test_extreme_prices_keep_the_envelope() {
        let mut huge = sample_pair_json();
        huge["priceNative"] = serde_json::json!("123456789012345678901234567890");
        let mut tiny = sample_pair_json();
        tiny["priceUsd"] = serde_json::json!("0.000000000000000000000000000000001234");

        let json = serde_json::json!({
            "schemaVersion": "1.0.0",
            "pairs": [huge, tiny, sample_pair_json()]
        });
        let pairs = serde_json::from_value::<TokenPairs>(json).unwrap().into_vec();
        assert_eq!(pairs.len(), 3);

        assert_eq!(pairs[0].price_native, "123456789012345678901234567890");
        assert!(pairs[0].price_native_decimal().is_none());

        assert_eq!(
            pairs[1].price_usd.as_deref(),
            Some("0.000000000000000000000000000000001234")
        );
        assert!(pairs[1].price_usd_decimal().is_none());

        assert_eq!(pairs[2].price_native_decimal(), Some(Decimal::new(14235, 2)));
    }

    #[test]
    fn test_null_liquidity_amounts() {
        let json = serde_json::json!({ "usd": null, "base": null, "quote": 12.5 });
        let liquidity: Liquidity = serde_json::from_value(json).unwrap();
        assert_eq!(liquidity.usd, None);
        assert_eq!(liquidity.base, 0.0);
        assert_eq!(liquidity.quote, 12.5);
    }

    #[test]
    fn test_pairs_envelope() {
        let json = serde_json::json!({
            "schemaVersion": "1.0.0",
            "pairs": [sample_pair_json(), sample_pair_json()]
        });
        let pairs: TokenPairs = serde_json::from_value(json).unwrap();

        assert_eq!(pairs.schema_version, "1.0.0");
        assert!(pairs.pair.is_none());
        assert_eq!(pairs.iter().count(), 2);
        assert!(!pairs.is_empty());
        assert_eq!(pairs.into_vec().len(), 2);
    }

    #[test]
    fn test_empty_envelope() {
        let pairs: TokenPairs =
            serde_json::from_str(r#"{"schemaVersion": "1.0.0", "pairs": null}"#).unwrap();
        assert!(pairs.pair.is_none());
        assert!(pairs.pairs.is_none());
        assert!(pairs.is_empty());
    }
}
