//! Token profile, boost and order types.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use time::OffsetDateTime;

/// A labeled external link attached to a token profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenLink {
    /// Link kind (e.g. "twitter", "telegram"). Absent for plain websites.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Target URL.
    pub url: String,
}

/// Descriptive metadata for a token.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenProfile {
    /// DexScreener page for the token.
    pub url: String,
    /// Chain identifier (e.g. "solana").
    pub chain_id: String,
    /// Token contract or mint address.
    pub token_address: String,
    /// Icon image URL.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub icon: String,
    /// Header image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// External links.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub links: Vec<TokenLink>,
}

/// A token profile with a paid promotional boost applied.
///
/// Profile fields are reachable directly through `Deref`:
///
/// ```rust
/// use dexscreener_api_client::types::TokenBoosted;
///
/// let boosted: TokenBoosted = serde_json::from_str(r#"{
///     "url": "https://dexscreener.com/solana/abc",
///     "chainId": "solana",
///     "tokenAddress": "abc",
///     "amount": 10,
///     "totalAmount": 50
/// }"#).unwrap();
///
/// assert_eq!(boosted.chain_id, "solana");
/// assert_eq!(boosted.total_amount, 50);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBoosted {
    /// The boosted token's profile.
    #[serde(flatten)]
    pub profile: TokenProfile,
    /// Boost amount of this promotion.
    #[serde(default)]
    pub amount: u64,
    /// Total boost amount accumulated by the token.
    #[serde(default)]
    pub total_amount: u64,
}

impl Deref for TokenBoosted {
    type Target = TokenProfile;

    fn deref(&self) -> &Self::Target {
        &self.profile
    }
}

/// Kind of paid order placed for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderType {
    /// Enhanced token info listing
    TokenProfile,
    /// Community takeover claim
    CommunityTakeover,
    /// Token advertisement
    TokenAd,
    /// Trending bar advertisement
    TrendingBarAd,
    /// Any order type not known to this library
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderType::TokenProfile => "tokenProfile",
            OrderType::CommunityTakeover => "communityTakeover",
            OrderType::TokenAd => "tokenAd",
            OrderType::TrendingBarAd => "trendingBarAd",
            OrderType::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Review status of a token order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Payment received, under review
    Processing,
    /// Order was cancelled
    Cancelled,
    /// Review paused
    OnHold,
    /// Order approved
    Approved,
    /// Order rejected
    Rejected,
    /// Any status not known to this library
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::OnHold => "on-hold",
            OrderStatus::Approved => "approved",
            OrderStatus::Rejected => "rejected",
            OrderStatus::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// A paid order for a token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenOrder {
    /// Order kind.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Review status.
    pub status: OrderStatus,
    /// Payment time in milliseconds since the Unix epoch.
    pub payment_timestamp: u64,
}

impl TokenOrder {
    /// Payment time as a UTC datetime, or `None` if out of range.
    pub fn paid_at(&self) -> Option<OffsetDateTime> {
        let nanos = i128::from(self.payment_timestamp) * 1_000_000;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
    }
}
