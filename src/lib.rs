//! # DexScreener Client
//!
//! An async Rust client library for the DexScreener market data REST API.
//!
//! ## Features
//!
//! - Token profiles, boosted tokens and token orders
//! - Pair lookup by chain and address, by token, and free-text search
//! - Strong typing for all response types
//! - Prices kept as sent, with `rust_decimal` accessors
//! - Optional client-side rate limiting
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dexscreener_api_client::rest::DexScreenerClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DexScreenerClient::new();
//!     let pairs = client.get_token_pairs("So11111111111111111111111111111111111111112").await?;
//!     println!("Pairs: {:?}", pairs.pairs.map(|p| p.len()));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod rate_limit;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::DexScreenerError;
pub use rest::{DexScreenerApi, DexScreenerClient};
pub use types::{TokenBoosted, TokenOrder, TokenPair, TokenPairs, TokenProfile};

/// Result type alias using DexScreenerError
pub type Result<T> = std::result::Result<T, DexScreenerError>;
