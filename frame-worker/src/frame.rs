//! Farcaster frame documents
//!
//! A frame is a plain HTML page whose `<head>` carries Open Graph and
//! `fc:frame:*` meta tags. Clients read the tags, draw the image and up to
//! four buttons, and never run anything from the body.
//!
//! All interpolated text is HTML-escaped.

use std::fmt::Write;

use crate::error::{FrameError, Result};
use crate::types::Button;

/// Protocol limit on buttons per frame
pub const MAX_BUTTONS: usize = 4;

/// Frame spec version announced in `fc:frame`
const FRAME_VERSION: &str = "vNext";

/// A renderable frame document
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    title: String,
    description: String,
    image: String,
    buttons: Vec<Button>,
    body: Option<String>,
}

impl Frame {
    /// Create a frame; fails if more than four buttons are supplied
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        buttons: Vec<Button>,
    ) -> Result<Self> {
        if buttons.len() > MAX_BUTTONS {
            return Err(FrameError::TooManyButtons(buttons.len()));
        }

        Ok(Self {
            title: title.into(),
            description: description.into(),
            image: image.into(),
            buttons,
            body: None,
        })
    }

    /// Preformatted text shown when the page is opened in a browser
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Serialize to HTML
    pub fn render(&self) -> String {
        let mut meta = String::new();
        push_meta(&mut meta, "property", "og:title", &self.title);
        push_meta(&mut meta, "property", "og:description", &self.description);
        push_meta(&mut meta, "name", "fc:frame", FRAME_VERSION);
        push_meta(&mut meta, "name", "fc:frame:image", &self.image);

        for (idx, button) in self.buttons.iter().enumerate() {
            let num = idx + 1;
            push_meta(&mut meta, "name", &format!("fc:frame:button:{num}"), &button.label);
            push_meta(
                &mut meta,
                "name",
                &format!("fc:frame:button:{num}:action"),
                button.action.as_str(),
            );
            if let Some(target) = &button.target {
                push_meta(&mut meta, "name", &format!("fc:frame:button:{num}:target"), target);
            }
        }

        let body = match &self.body {
            Some(text) => format!(
                r#"<pre style="white-space: pre-wrap; margin: 0;">{}</pre>"#,
                escape(text)
            ),
            None => String::new(),
        };

        format!(
            r#"<!DOCTYPE html><html><head><meta charset="utf-8" />
{meta}</head><body style="font-family: sans-serif; margin: 0; padding: 1rem;">{body}</body></html>"#
        )
    }
}

fn push_meta(out: &mut String, attr: &str, key: &str, content: &str) {
    // Writing to a String cannot fail
    let _ = writeln!(out, r#"<meta {attr}="{key}" content="{}" />"#, escape(content));
}

/// Escape text for use in HTML attribute values and element content
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
