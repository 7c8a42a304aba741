use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dexscreener_api_client::error::DexScreenerError;
use dexscreener_api_client::rest::DexScreenerClient;

fn build_client(server: &MockServer) -> DexScreenerClient {
    DexScreenerClient::builder().base_url(server.uri()).build()
}

fn pair_json(pair_address: &str) -> serde_json::Value {
    serde_json::json!({
        "chainId": "base",
        "dexId": "uniswap",
        "url": format!("https://dexscreener.com/base/{pair_address}"),
        "pairAddress": pair_address,
        "labels": ["v3"],
        "baseToken": {
            "address": "0x4F9Fd6Be4a90f2620860d680c0d4d5Fb53d1A825",
            "name": "aixbt",
            "symbol": "AIXBT"
        },
        "quoteToken": {
            "address": "0x4200000000000000000000000000000000000006",
            "name": "Wrapped Ether",
            "symbol": "WETH"
        },
        "priceNative": "0.0001523",
        "priceUsd": "0.5012",
        "txns": {
            "m5": { "buys": 4, "sells": 2 },
            "h1": { "buys": 60, "sells": 41 },
            "h6": { "buys": 400, "sells": 380 },
            "h24": { "buys": 2100, "sells": 1950 }
        },
        "volume": { "h24": 3200000.0, "h6": 900000.0, "h1": 120000.0, "m5": 4000.0 },
        "priceChange": { "m5": 0.2, "h1": 1.1, "h6": -2.5, "h24": 12.75 },
        "liquidity": { "usd": 8100000.0, "base": 8000000.0, "quote": 1200.5 },
        "fdv": 501200000.0,
        "marketCap": 430000000.0,
        "pairCreatedAt": 1_730_000_000_000i64,
        "info": {
            "imageUrl": "https://dd.dexscreener.com/ds-data/tokens/base/aixbt.png",
            "websites": [{ "label": "Website", "url": "https://aixbt.tech" }],
            "socials": [{ "platform": "twitter", "handle": "aixbt_agent" }]
        },
        "boosts": { "active": 2 }
    })
}

#[tokio::test]
async fn test_get_token_pairs_by_chain() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "schemaVersion": "1.0.0",
        "pair": pair_json("0xf1fdc83c3a336bdbdc9fb06e318b08eaddc82ff4")
    });

    Mock::given(method("GET"))
        .and(path("/latest/dex/pairs/base/0xf1fdc83c3a336bdbdc9fb06e318b08eaddc82ff4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let pairs = client
        .get_token_pairs_by_chain("base", "0xf1fdc83c3a336bdbdc9fb06e318b08eaddc82ff4")
        .await
        .unwrap();

    assert_eq!(pairs.schema_version, "1.0.0");
    assert!(pairs.pairs.is_none());
    let pair = pairs.pair.unwrap();
    assert_eq!(pair.pair_address, "0xf1fdc83c3a336bdbdc9fb06e318b08eaddc82ff4");
    assert_eq!(pair.base_token.symbol, "AIXBT");
    assert_eq!(pair.txns.h24.buys, 2100);
    assert_eq!(pair.price_change.h24, 12.75);
    assert_eq!(pair.liquidity.unwrap().quote, 1200.5);
    assert_eq!(pair.boosts.unwrap().active, 2);
    assert_eq!(pair.info.unwrap().socials[0].handle, "aixbt_agent");
}

#[tokio::test]
async fn test_get_token_pairs() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "schemaVersion": "1.0.0",
        "pairs": [pair_json("0xpool1"), pair_json("0xpool2")]
    });

    Mock::given(method("GET"))
        .and(path("/latest/dex/tokens/0x4F9Fd6Be4a90f2620860d680c0d4d5Fb53d1A825"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let pairs = client
        .get_token_pairs("0x4F9Fd6Be4a90f2620860d680c0d4d5Fb53d1A825")
        .await
        .unwrap();

    assert!(pairs.pair.is_none());
    let list = pairs.pairs.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].pair_address, "0xpool2");
}

#[tokio::test]
async fn test_search_pairs() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "schemaVersion": "1.0.0",
        "pairs": [pair_json("0xpool")]
    });

    Mock::given(method("GET"))
        .and(path("/latest/dex/search"))
        .and(query_param("q", "SOL/USDC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let pairs = client.search_pairs("SOL/USDC").await.unwrap();
    assert_eq!(pairs.iter().count(), 1);
}

#[tokio::test]
async fn test_search_query_is_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/latest/dex/search"))
        .and(query_param("q", "pepe & friends"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "schemaVersion": "1.0.0", "pairs": [] })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let pairs = client.search_pairs("pepe & friends").await.unwrap();
    assert!(pairs.is_empty());
}

#[tokio::test]
async fn test_path_segments_are_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/latest/dex/tokens/foo%2Fbar"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "schemaVersion": "1.0.0", "pairs": null })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let pairs = client.get_token_pairs("foo/bar").await.unwrap();
    assert!(pairs.is_empty());
}

#[tokio::test]
async fn test_get_token_pools() {
    let server = MockServer::start().await;
    let response = serde_json::json!([pair_json("0xpool1"), pair_json("0xpool2")]);

    Mock::given(method("GET"))
        .and(path("/token-pairs/v1/base/0x4F9Fd6Be4a90f2620860d680c0d4d5Fb53d1A825"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let pools = client
        .get_token_pools("base", "0x4F9Fd6Be4a90f2620860d680c0d4d5Fb53d1A825")
        .await
        .unwrap();
    assert_eq!(pools.len(), 2);
    assert_eq!(pools[0].dex_id, "uniswap");
}

#[tokio::test]
async fn test_get_tokens_batch() {
    let server = MockServer::start().await;
    let response = serde_json::json!([pair_json("0xpool1")]);

    Mock::given(method("GET"))
        .and(path("/tokens/v1/base/0xaaa,0xbbb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let pairs = client.get_tokens("base", &["0xaaa", "0xbbb"]).await.unwrap();
    assert_eq!(pairs.len(), 1);
}

#[tokio::test]
async fn test_get_tokens_empty_and_oversized() {
    let server = MockServer::start().await;
    let client = build_client(&server);

    let none = client.get_tokens("solana", &[]).await.unwrap();
    assert!(none.is_empty());

    let addresses: Vec<String> = (0..31).map(|i| format!("mint{i}")).collect();
    let refs: Vec<&str> = addresses.iter().map(String::as_str).collect();
    let err = client.get_tokens("solana", &refs).await.unwrap_err();
    assert!(matches!(err, DexScreenerError::InvalidRequest(_)));

    assert!(server.received_requests().await.unwrap().is_empty());
}
