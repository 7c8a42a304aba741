//! DexScreener REST API client.
//!
//! Provides access to the public DexScreener endpoints. No authentication is
//! required.
//!
//! # Trait-based API
//!
//! The [`DexScreenerApi`] trait abstracts all REST operations, enabling:
//! - Mock implementations for testing
//! - Decorators such as [`RateLimitedClient`](crate::rate_limit::RateLimitedClient)

mod client;
pub mod endpoints;
mod pairs;
mod tokens;
mod traits;

pub use client::{DexScreenerClient, DexScreenerClientBuilder};
pub use endpoints::{DEXSCREENER_BASE_URL, MAX_TOKENS_PER_REQUEST};
pub use traits::DexScreenerApi;
