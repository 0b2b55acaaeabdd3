//! DEX Screener market data client
//!
//! Looks up the market cap of each sign's trading pair. Lookups run
//! concurrently and never fail the request: a missing pair address counts
//! as zero, and any other problem (network error, bad status, unexpected
//! body, timeout) counts as zero and is handed back for logging.

use std::time::Duration;

use futures::future::join_all;
use serde::Deserialize;

use crate::catalog::AGGREGATE_KEY;
use crate::config::Config;
use crate::error::{FrameError, Result};
use crate::types::{MarketSnapshot, Standing};

/// Leader name used when there is nothing to rank
pub const NO_LEADER: &str = "N/A";

/// DEX Screener client
pub struct MarketClient {
    api_url: String,
    timeout: Duration,
    http: reqwest::Client,
}

/// `GET /latest/dex/pairs/{chain}/{pair}` response, reduced to what we read
#[derive(Debug, Deserialize)]
struct PairResponse {
    #[serde(default)]
    pair: Option<Pair>,
}

#[derive(Debug, Deserialize)]
struct Pair {
    #[serde(rename = "marketCap", default)]
    market_cap: Option<f64>,
}

impl MarketClient {
    pub fn new(config: &Config) -> Self {
        Self {
            api_url: config.market_api_url.clone(),
            timeout: Duration::from_millis(config.fetch_timeout_ms),
            http: reqwest::Client::new(),
        }
    }

    /// Market cap in USD for one pair address. An empty address is zero
    /// without touching the network.
    pub async fn fetch_market_cap(&self, pair_address: &str) -> Result<f64> {
        if pair_address.is_empty() {
            return Ok(0.0);
        }

        let url = format!("{}/{pair_address}", self.api_url);
        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FrameError::MarketData(format!("HTTP {status} for {pair_address}")));
        }

        let body = response.text().await?;
        parse_market_cap(&body)
    }

    /// Fetch every sign's market cap at once. Completes when all lookups
    /// have settled; output order matches `pairs`. A failed lookup counts
    /// as zero and is kept in `failures` for the caller to report.
    pub async fn fetch_all(&self, pairs: &[(String, String)]) -> MarketFetch {
        let results = join_all(pairs.iter().map(|(sign, pair)| async move {
            (sign.clone(), self.fetch_market_cap(pair).await)
        }))
        .await;

        let mut fetch = MarketFetch::default();
        for (sign, result) in results {
            match result {
                Ok(cap) => fetch.snapshot.push((sign, cap)),
                Err(e) => {
                    fetch.snapshot.push((sign.clone(), 0.0));
                    fetch.failures.push((sign, e));
                }
            }
        }
        fetch
    }
}

/// Outcome of a fan-out: the snapshot to rank, plus the lookups that were
/// zeroed because they failed
#[derive(Debug, Default)]
pub struct MarketFetch {
    pub snapshot: MarketSnapshot,
    pub failures: Vec<(String, FrameError)>,
}

/// Extract `pair.marketCap` from a DEX Screener response body
fn parse_market_cap(body: &str) -> Result<f64> {
    let response: PairResponse = serde_json::from_str(body)?;
    response
        .pair
        .and_then(|p| p.market_cap)
        .ok_or_else(|| FrameError::MarketData("response has no pair.marketCap".into()))
}

/// Rank signs by market cap, highest first. The aggregate token is left out.
/// Equal caps keep their snapshot order.
pub fn rank(snapshot: &MarketSnapshot) -> Vec<Standing> {
    let mut standings: Vec<Standing> = snapshot
        .iter()
        .filter(|(sign, _)| sign != AGGREGATE_KEY)
        .map(|(sign, cap)| Standing {
            sign: sign.clone(),
            market_cap: *cap,
        })
        .collect();

    // sort_by is stable
    standings.sort_by(|a, b| b.market_cap.total_cmp(&a.market_cap));
    standings
}

/// Top of the ranking, or ("N/A", 0) when nothing was ranked
pub fn leader(standings: &[Standing]) -> Standing {
    standings.first().cloned().unwrap_or_else(|| Standing {
        sign: NO_LEADER.to_string(),
        market_cap: 0.0,
    })
}
