//! Example: Polling DexScreener within its published quotas.
//!
//! Run with: cargo run --example rate_limited

use dexscreener_api_client::rate_limit::{RateLimitConfig, RateLimitedClient};
use dexscreener_api_client::rest::{DexScreenerApi, DexScreenerClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("dexscreener_api_client=debug")
        .init();

    let client = RateLimitedClient::new(DexScreenerClient::new(), RateLimitConfig::default());

    for round in 0..3 {
        let latest = client.get_latest_boosted_tokens().await?;
        println!("round {}: {} boosted tokens", round, latest.len());

        if let Some(token) = latest.first() {
            let orders = client
                .get_token_orders(&token.chain_id, &token.token_address)
                .await?;
            for order in orders {
                println!(
                    "  {} {} paid at {:?}",
                    order.order_type,
                    order.status,
                    order.paid_at()
                );
            }
        }
    }

    Ok(())
}
