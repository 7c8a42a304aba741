//! Example: Fetching market data from DexScreener.
//!
//! Run with: cargo run --example public_data

use dexscreener_api_client::DexScreenerError;
use dexscreener_api_client::rest::DexScreenerClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = DexScreenerClient::new();

    println!("=== Latest Token Profiles ===");
    let profiles = client.get_token_profiles().await?;
    for profile in profiles.iter().take(5) {
        println!(
            "{} {} ({} links)",
            profile.chain_id,
            profile.token_address,
            profile.links.len()
        );
    }

    println!("\n=== Top Boosted Tokens ===");
    let boosted = client.get_most_active_boosted_tokens().await?;
    for token in boosted.iter().take(5) {
        println!(
            "{} {}: amount={}, total={}",
            token.chain_id, token.token_address, token.amount, token.total_amount
        );
    }

    println!("\n=== Search: SOL/USDC ===");
    let result = client.search_pairs("SOL/USDC").await?;
    for pair in result.iter().take(5) {
        println!(
            "{}/{} on {} ({}): price_usd={:?}, vol24h={:.0}, buys/sells 1h={}/{}",
            pair.base_token.symbol,
            pair.quote_token.symbol,
            pair.dex_id,
            pair.chain_id,
            pair.price_usd,
            pair.volume.h24,
            pair.txns.h1.buys,
            pair.txns.h1.sells
        );
    }

    println!("\n=== Unknown Pair ===");
    match client.get_token_pairs_by_chain("solana", "not-a-pair").await {
        Ok(pairs) => println!("pair present: {}", pairs.pair.is_some()),
        Err(DexScreenerError::Api(err)) => println!("API error: {}", err),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
