//! Configuration management for the frame worker
//!
//! Everything comes from Worker environment variables and is optional.
//! The result is an immutable `Config` handed to every route through the
//! router's data slot.

use serde_json::Value;
use worker::Env;

use crate::catalog::{AGGREGATE_KEY, SIGNS};
use crate::error::{FrameError, Result};

/// Fallback collect link when no per-sign prefix is configured
pub const DEFAULT_COLLECT_URL: &str = "https://zora.co/@starfolio";

const DEFAULT_FRAME_IMAGE_URL: &str =
    "https://cdn.jsdelivr.net/gh/farcaster/todo/image-placeholder.png";
const DEFAULT_BASE_URL: &str = "https://star-race-frame.vercel.app";
const DEFAULT_MARKET_API_URL: &str = "https://api.dexscreener.com/latest/dex/pairs/base";
const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5_000;

/// Overall Starfolio pair, the only one listed on DEX Screener so far
const STARFOLIO_PAIR: &str = "0x4b1b272ff22ea03dbb6d5f0f8c3820b4e70eab76f2937c91c3ac0d6aebed9056";

/// Frame worker configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment (production, staging, development)
    pub environment: String,

    /// Absolute origin used for terrain button targets
    pub base_url: String,

    /// Image shown by the leaderboard and picker frames
    pub frame_image_url: String,

    /// Per-sign collect link prefix; the sign key is appended
    pub collect_url_prefix: Option<String>,

    /// Sign -> DEX Screener pair address, in catalog order.
    /// Empty addresses are never fetched.
    pub sign_pairs: Vec<(String, String)>,

    /// Pair lookup endpoint; the pair address is appended as a path segment
    pub market_api_url: String,

    /// Upper bound for a single market data lookup
    pub fetch_timeout_ms: u64,

    /// Problems found while loading; logged by `from_env`
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "production".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            frame_image_url: DEFAULT_FRAME_IMAGE_URL.to_string(),
            collect_url_prefix: None,
            sign_pairs: default_sign_pairs(),
            market_api_url: DEFAULT_MARKET_API_URL.to_string(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from Cloudflare environment variables
    pub fn from_env(env: &Env) -> Self {
        let config = Self::from_vars(|name| env.var(name).ok().map(|v| v.to_string()));

        for warning in &config.warnings {
            worker::console_warn!("{}", warning);
        }

        config
    }

    /// Build configuration from any variable lookup. Malformed values are
    /// recorded in `warnings` and replaced by defaults.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = non_empty(var("ENVIRONMENT")) {
            config.environment = v;
        }
        if let Some(v) = non_empty(var("BASE_URL")) {
            config.base_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = non_empty(var("FRAME_IMAGE_URL")) {
            config.frame_image_url = v;
        }
        config.collect_url_prefix = non_empty(var("COLLECT_URL_PREFIX"));
        if let Some(v) = non_empty(var("MARKET_API_URL")) {
            config.market_api_url = v.trim_end_matches('/').to_string();
        }

        if let Some(raw) = non_empty(var("FETCH_TIMEOUT_MS")) {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.fetch_timeout_ms = ms,
                _ => config
                    .warnings
                    .push(format!("Ignoring FETCH_TIMEOUT_MS={raw:?}: expected a positive integer")),
            }
        }

        if let Some(raw) = var("SIGN_PAIRS") {
            if let Err(e) = merge_sign_pairs(&mut config.sign_pairs, &raw) {
                config
                    .warnings
                    .push(format!("Failed to parse SIGN_PAIRS: {e}"));
            }
        }

        config
    }

    /// Collect link for a sign key (or the "N/A" sentinel)
    pub fn collect_url(&self, sign: &str) -> String {
        match &self.collect_url_prefix {
            Some(prefix) if !sign.is_empty() && sign != crate::market::NO_LEADER => {
                format!("{prefix}{sign}")
            }
            Some(prefix) => prefix.clone(),
            None => DEFAULT_COLLECT_URL.to_string(),
        }
    }
}

/// Every sign with an empty pair address, plus the aggregate token
fn default_sign_pairs() -> Vec<(String, String)> {
    SIGNS
        .iter()
        .map(|s| (s.key.to_string(), String::new()))
        .chain(std::iter::once((
            AGGREGATE_KEY.to_string(),
            STARFOLIO_PAIR.to_string(),
        )))
        .collect()
}

/// Merge a JSON object of sign -> pair address over `pairs`.
///
/// Known keys keep their position; unknown keys are appended. Non-string
/// values count as "no pair". Nothing is modified if the payload is invalid.
fn merge_sign_pairs(pairs: &mut Vec<(String, String)>, raw: &str) -> Result<()> {
    let overrides = match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => map,
        other => {
            return Err(FrameError::Config(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )));
        }
    };

    for (key, value) in overrides {
        let address = value.as_str().unwrap_or_default().to_string();
        match pairs.iter_mut().find(|(sign, _)| *sign == key) {
            Some(entry) => entry.1 = address,
            None => pairs.push((key, address)),
        }
    }

    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
