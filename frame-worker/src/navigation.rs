//! Frame navigation state
//!
//! Frames keep no server-side session. Whatever a button should lead to is
//! written into its target URL (`?sign=`, `?page=`, `?seed=`) and read back
//! here on the next request. Decoding never fails: unknown or malformed
//! values fall back to a valid state.

use worker::Url;

use crate::catalog::{self, Sign};

/// Route of the zodiac picker; picker targets are relative to it
pub const PICKER_PATH: &str = "/api/zodiac";

/// Route of the terrain frame
pub const TERRAIN_PATH: &str = "/api/frameforms";

/// What the picker should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    /// A single sign with its caption
    Detail(&'static Sign),
    /// One page of sign buttons, 1-based and always in range
    List { page: usize },
}

impl PickerState {
    /// Decode from raw `sign` and `page` parameter values
    pub fn decode(sign: Option<&str>, page: Option<&str>) -> Self {
        if let Some(sign) = sign.and_then(catalog::find_sign) {
            return PickerState::Detail(sign);
        }

        PickerState::List {
            page: clamp_page(page, catalog::page_count()),
        }
    }

    pub fn from_url(url: &Url) -> Self {
        let sign = query_param(url, "sign");
        let page = query_param(url, "page");
        Self::decode(sign.as_deref(), page.as_deref())
    }
}

/// Clamp a raw page parameter into `1..=page_count`.
///
/// Missing or non-numeric input means page 1; numbers are read like a
/// leading-integer parse, so "2abc" is page 2.
pub fn clamp_page(raw: Option<&str>, page_count: usize) -> usize {
    let last = i64::try_from(page_count.max(1)).unwrap_or(i64::MAX);
    let page = raw.and_then(parse_leading_int).unwrap_or(1).clamp(1, last);
    usize::try_from(page).unwrap_or(1)
}

/// Parse an optionally signed run of leading digits. Overflow saturates.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = &digits[..digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len())];
    if digits.is_empty() {
        return None;
    }

    let value = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -value } else { value })
}

/// Target that opens the detail view for a sign
pub fn sign_target(key: &str) -> String {
    format!("{PICKER_PATH}?sign={key}")
}

/// Target that opens a picker page
pub fn page_target(page: usize) -> String {
    format!("{PICKER_PATH}?page={page}")
}

/// What the terrain frame should draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerrainState {
    /// No seed yet; one is drawn at random
    Fresh,
    Seeded(String),
}

impl TerrainState {
    pub fn decode(seed: Option<&str>) -> Self {
        match seed {
            Some(s) if !s.is_empty() => TerrainState::Seeded(s.to_string()),
            _ => TerrainState::Fresh,
        }
    }

    pub fn from_url(url: &Url) -> Self {
        Self::decode(query_param(url, "seed").as_deref())
    }
}

/// Absolute terrain target; `None` resets to a fresh terrain
pub fn terrain_target(base_url: &str, seed: Option<&str>) -> String {
    match seed {
        Some(seed) => format!("{base_url}{TERRAIN_PATH}?seed={seed}"),
        None => format!("{base_url}{TERRAIN_PATH}"),
    }
}

/// First value of a query parameter
fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker(query: &str) -> PickerState {
        let url = Url::parse(&format!("https://frames.example{PICKER_PATH}{query}")).unwrap();
        PickerState::from_url(&url)
    }

    #[test]
    fn test_known_sign_is_detail() {
        match picker("?sign=aries") {
            PickerState::Detail(sign) => assert_eq!(sign.key, "aries"),
            other @ PickerState::List { .. } => panic!("expected detail, got {other:?}"),
        }
        // sign wins over page
        assert!(matches!(picker("?page=3&sign=leo"), PickerState::Detail(s) if s.key == "leo"));
    }

    #[test]
    fn test_unknown_sign_falls_through_to_list() {
        assert_eq!(picker("?sign=ophiuchus"), PickerState::List { page: 1 });
        assert_eq!(picker("?sign=ARIES&page=2"), PickerState::List { page: 2 });
        assert_eq!(picker("?sign=&page=3"), PickerState::List { page: 3 });
        assert_eq!(picker("?sign=starfolio"), PickerState::List { page: 1 });
    }

    #[test]
    fn test_page_is_clamped() {
        assert_eq!(picker(""), PickerState::List { page: 1 });
        assert_eq!(picker("?page=0"), PickerState::List { page: 1 });
        assert_eq!(picker("?page=-7"), PickerState::List { page: 1 });
        assert_eq!(picker("?page=5"), PickerState::List { page: 4 });
        assert_eq!(picker("?page=99999999999999999999999"), PickerState::List { page: 4 });
        assert_eq!(picker("?page=abc"), PickerState::List { page: 1 });
        assert_eq!(picker("?page="), PickerState::List { page: 1 });
        assert_eq!(picker("?page=2abc"), PickerState::List { page: 2 });
        assert_eq!(picker("?page=%203"), PickerState::List { page: 3 });
    }

    #[test]
    fn test_first_parameter_wins() {
        assert_eq!(picker("?page=2&page=3"), PickerState::List { page: 2 });
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("+4x"), Some(4));
        assert_eq!(parse_leading_int("-1"), Some(-1));
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("x4"), None);
    }

    #[test]
    fn test_targets() {
        assert_eq!(sign_target("leo"), "/api/zodiac?sign=leo");
        assert_eq!(page_target(1), "/api/zodiac?page=1");
        assert_eq!(
            terrain_target("https://f.example", Some("abc123")),
            "https://f.example/api/frameforms?seed=abc123"
        );
        assert_eq!(terrain_target("https://f.example", None), "https://f.example/api/frameforms");
    }

    #[test]
    fn test_terrain_state() {
        assert_eq!(TerrainState::decode(None), TerrainState::Fresh);
        assert_eq!(TerrainState::decode(Some("")), TerrainState::Fresh);
        assert_eq!(
            TerrainState::decode(Some("k3y")),
            TerrainState::Seeded("k3y".to_string())
        );
    }
}
