//! Star Race leaderboard frame
//!
//! Ranks the zodiac coins by live market cap. The frame shows the leader;
//! the full ranking goes into the page body for anyone opening it in a
//! browser.

use crate::catalog::capitalize;
use crate::config::Config;
use crate::error::Result;
use crate::frame::Frame;
use crate::market::{self, MarketClient};
use crate::types::{Button, MarketSnapshot};

/// Fetch fresh market caps and render the leaderboard
pub async fn render(config: &Config) -> Result<Frame> {
    let client = MarketClient::new(config);
    let fetch = client.fetch_all(&config.sign_pairs).await;
    for (sign, e) in &fetch.failures {
        worker::console_warn!("Market cap lookup failed for {}: {}", sign, e);
    }
    leaderboard_frame(config, &fetch.snapshot)
}

/// Leaderboard for an already fetched snapshot
pub fn leaderboard_frame(config: &Config, snapshot: &MarketSnapshot) -> Result<Frame> {
    let standings = market::rank(snapshot);
    let leader = market::leader(&standings);
    let leader_name = capitalize(&leader.sign);

    let rankings = standings
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            format!(
                "{}. {} – ${}",
                idx + 1,
                capitalize(&s.sign),
                format_usd(s.market_cap)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let frame = Frame::new(
        format!("{leader_name} is leading the Star Race!"),
        format!(
            "Market Cap: ${}\nClick refresh for latest stats.",
            format_usd(leader.market_cap)
        ),
        &config.frame_image_url,
        vec![
            Button::post_self("Refresh Rankings"),
            Button::link(
                format!("Collect {leader_name}"),
                config.collect_url(&leader.sign),
            ),
        ],
    )?;

    Ok(frame.with_body(rankings))
}

/// Format a dollar amount the way en-US locales print numbers:
/// thousands separators, at most three decimals, no trailing zeros.
/// Halves round away from zero.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let (int_part, frac_part) = round_to_thousandths(value.abs());
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && (grouped != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Integer digits and exactly three fraction digits of a non-negative value,
/// rounded half away from zero on its exact decimal expansion.
fn round_to_thousandths(value: f64) -> (String, String) {
    // Every finite f64 has at most 1074 fraction digits, so this is exact
    let exact = format!("{value:.1100}");
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac = frac.as_bytes();

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac.iter().copied().chain(std::iter::repeat(b'0')).take(3))
        .collect();

    if frac.get(3).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 3;
    let frac_part = String::from_utf8_lossy(&digits[split..]).into_owned();
    let int_part = String::from_utf8_lossy(&digits[..split]).into_owned();
    (int_part, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SIGNS;
    use crate::types::ButtonAction;

    fn zero_snapshot(config: &Config) -> MarketSnapshot {
        config
            .sign_pairs
            .iter()
            .map(|(sign, _)| (sign.clone(), 0.0))
            .collect()
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "0");
        assert_eq!(format_usd(999.0), "999");
        assert_eq!(format_usd(1_000.0), "1,000");
        assert_eq!(format_usd(1_234_567.891), "1,234,567.891");
        assert_eq!(format_usd(1_234.5), "1,234.5");
        assert_eq!(format_usd(0.123_456), "0.123");
        assert_eq!(format_usd(-12_345.0), "-12,345");
        assert_eq!(format_usd(-0.0001), "0");
        assert_eq!(format_usd(f64::NAN), "0");
    }

    #[test]
    fn test_format_usd_rounds_halves_away_from_zero() {
        assert_eq!(format_usd(1.0625), "1.063");
        assert_eq!(format_usd(1_234.5625), "1,234.563");
        assert_eq!(format_usd(-1.0625), "-1.063");
        // Decided on the exact binary value, not its shortest decimal form
        assert_eq!(format_usd(0.0005), "0.001");
        assert_eq!(format_usd(2.0005), "2.001");
        assert_eq!(format_usd(999.9995), "1,000");
    }

    #[test]
    fn test_all_zero_leader_is_first_sign() {
        let config = Config::default();
        let frame = leaderboard_frame(&config, &zero_snapshot(&config)).unwrap();
        let html = frame.render();

        assert!(html.contains(r#"content="Aries is leading the Star Race!""#));
        assert!(html.contains("Market Cap: $0\nClick refresh for latest stats."));
        assert_eq!(frame.buttons()[1].label, "Collect Aries");
        assert_eq!(frame.render(), html);
    }

    #[test]
    fn test_leader_and_rankings() {
        let config = Config {
            collect_url_prefix: Some("https://zora.co/coin/".to_string()),
            ..Config::default()
        };
        let mut snapshot = zero_snapshot(&config);
        for (sign, cap) in &mut snapshot {
            match sign.as_str() {
                "leo" => *cap = 2_500_000.0,
                "pisces" => *cap = 1_000.5,
                "starfolio" => *cap = 90_000_000.0,
                _ => {}
            }
        }

        let frame = leaderboard_frame(&config, &snapshot).unwrap();
        let buttons = frame.buttons();
        assert_eq!(buttons[0].label, "Refresh Rankings");
        assert_eq!(buttons[0].action, ButtonAction::Post);
        assert_eq!(buttons[0].target, None);
        assert_eq!(buttons[1].label, "Collect Leo");
        assert_eq!(buttons[1].action, ButtonAction::Link);
        assert_eq!(buttons[1].target.as_deref(), Some("https://zora.co/coin/leo"));

        let html = frame.render();
        assert!(html.contains("Leo is leading the Star Race!"));
        assert!(html.contains("Market Cap: $2,500,000"));
        assert!(html.contains("1. Leo – $2,500,000\n2. Pisces – $1,000.5\n3. Aries – $0"));
        assert!(!html.contains("Starfolio"));
        assert_eq!(html.matches(" – $").count(), SIGNS.len());
    }

    #[test]
    fn test_empty_snapshot_uses_sentinel() {
        let config = Config::default();
        let frame = leaderboard_frame(&config, &Vec::new()).unwrap();

        assert!(frame.render().contains("N/A is leading the Star Race!"));
        assert_eq!(frame.buttons()[1].label, "Collect N/A");
        assert_eq!(
            frame.buttons()[1].target.as_deref(),
            Some(crate::config::DEFAULT_COLLECT_URL)
        );
    }
}
