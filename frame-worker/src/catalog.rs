//! Static zodiac tables
//!
//! The sign list, captions and page partition are data, not code: every
//! handler reads them from here so the picker and the leaderboard cannot
//! drift apart.
//!
//! Collect links are not stored here. They come from configuration
//! (`Config::collect_url`): `COLLECT_URL_PREFIX` plus the sign key when the
//! prefix is set, otherwise the Starfolio profile.

/// Aggregate Starfolio token. Tracked by the fetcher, never ranked or picked.
pub const AGGREGATE_KEY: &str = "starfolio";

/// Signs shown together on one picker page. The fourth frame button is
/// reserved for navigation.
pub const PAGE_SIZE: usize = 3;

/// A selectable zodiac sign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sign {
    pub key: &'static str,
    pub caption: &'static str,
}

impl Sign {
    /// Button/title label, e.g. "Aries"
    pub fn display_name(&self) -> String {
        capitalize(self.key)
    }
}

/// All twelve signs in calendar order. Page layout and leaderboard tie-breaks
/// both follow this order.
pub const SIGNS: [Sign; 12] = [
    Sign {
        key: "aries",
        caption: "Aries apes into every new mint like they're slaying a boss, then asks 'When Lambo?' 30 minutes later.",
    },
    Sign {
        key: "taurus",
        caption: "Taurus hodlers treat bear markets like a buffet—accumulation season never ends for these stubborn bulls.",
    },
    Sign {
        key: "gemini",
        caption: "Gemini holders represent duality of holding forever and buying more.",
    },
    Sign {
        key: "cancer",
        caption: "Cancer stashes their bags like a crab; sideways markets are their natural habitat and they love it.",
    },
    Sign {
        key: "leo",
        caption: "Leo calls their bag the king of NFTs and expects everyone else to bow to their floor price.",
    },
    Sign {
        key: "virgo",
        caption: "Virgo holders annotate their wallet activity with spreadsheets; analysis paralysis but make it crypto.",
    },
    Sign {
        key: "libra",
        caption: "Libra can’t decide between staking and farming, so they do both and call it a balanced portfolio.",
    },
    Sign {
        key: "scorpio",
        caption: "Scorpio investors buy your bags in silence and sell in revenge; trust them at your own risk.",
    },
    Sign {
        key: "sagittarius",
        caption: "Sagittarius sets off on every airdrop quest like a cosmic crusade—no risk too far, no wallet too degen.",
    },
    Sign {
        key: "capricorn",
        caption: "Capricorns treat yield farming like a 9‑to‑9 job—always grinding, even when the market’s asleep.",
    },
    Sign {
        key: "aquarius",
        caption: "Aquarius invents new chains in their mind and shills them before the whitepaper even exists.",
    },
    Sign {
        key: "pisces",
        caption: "Pisces believe in cosmic charts and RSI alignment; if Mercury’s in retrograde, they blame the red candles.",
    },
];

/// Look up a sign by its lower-case key. The aggregate key is not a sign.
pub fn find_sign(key: &str) -> Option<&'static Sign> {
    SIGNS.iter().find(|s| s.key == key)
}

/// Number of picker pages
pub fn page_count() -> usize {
    SIGNS.len().div_ceil(PAGE_SIZE)
}

/// Signs on a 1-based page. Out-of-range pages are empty; callers clamp first.
pub fn page(index: usize) -> &'static [Sign] {
    SIGNS
        .chunks(PAGE_SIZE)
        .nth(index.wrapping_sub(1))
        .unwrap_or(&[])
}

/// Uppercase the first character: "aries" -> "Aries", "N/A" stays "N/A"
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_partition_signs() {
        assert_eq!(page_count(), 4);

        let mut seen: Vec<&str> = Vec::new();
        for index in 1..=page_count() {
            let signs = page(index);
            assert!(!signs.is_empty() && signs.len() <= PAGE_SIZE);
            seen.extend(signs.iter().map(|s| s.key));
        }

        let all: Vec<&str> = SIGNS.iter().map(|s| s.key).collect();
        assert_eq!(seen, all);
    }

    #[test]
    fn test_page_out_of_range_is_empty() {
        assert!(page(0).is_empty());
        assert!(page(page_count() + 1).is_empty());
    }

    #[test]
    fn test_find_sign() {
        assert_eq!(find_sign("leo").map(|s| s.key), Some("leo"));
        assert!(find_sign("Leo").is_none());
        assert!(find_sign(AGGREGATE_KEY).is_none());
        assert!(find_sign("").is_none());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("sagittarius"), "Sagittarius");
        assert_eq!(capitalize("N/A"), "N/A");
        assert_eq!(capitalize(""), "");
        assert_eq!(SIGNS[0].display_name(), "Aries");
    }
}
