//! Common types for the frame handlers
//!
//! All shared data structures used across modules.

/// What a frame button does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// POST back to the frame server (target or the frame's own URL)
    Post,
    /// Open an external URL in the client
    Link,
}

impl ButtonAction {
    /// Protocol value for `fc:frame:button:N:action`
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonAction::Post => "post",
            ButtonAction::Link => "link",
        }
    }
}

impl std::fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A frame button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
    pub target: Option<String>,
}

impl Button {
    /// Button that posts to `target`
    pub fn post(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Post,
            target: Some(target.into()),
        }
    }

    /// Button that posts back to the URL the frame was served from
    pub fn post_self(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Post,
            target: None,
        }
    }

    /// Button that opens an external link
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Link,
            target: Some(url.into()),
        }
    }
}

/// Market cap per sign for one request, in fetch order
pub type MarketSnapshot = Vec<(String, f64)>;

/// One row of the leaderboard
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub sign: String,
    pub market_cap: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_constructors() {
        let next = Button::post("Next", "/api/zodiac?page=2");
        assert_eq!(next.action, ButtonAction::Post);
        assert_eq!(next.target.as_deref(), Some("/api/zodiac?page=2"));

        assert_eq!(Button::post_self("Refresh").target, None);
        assert_eq!(Button::link("Collect", "https://zora.co").action.to_string(), "link");
    }
}
