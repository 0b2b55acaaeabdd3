//! Zodiac picker frame
//!
//! Pages through the signs three at a time. Picking a sign shows its
//! caption and a link to collect its coin.

use crate::catalog::{self, Sign};
use crate::config::Config;
use crate::error::Result;
use crate::frame::Frame;
use crate::navigation::{PickerState, page_target, sign_target};
use crate::types::Button;

const LIST_TITLE: &str = "Pick your zodiac sign";
const LIST_DESCRIPTION: &str = "Select a sign to see its CT‑style fortune.";

/// Build the frame for a decoded picker state
pub fn render(config: &Config, state: PickerState) -> Result<Frame> {
    match state {
        PickerState::Detail(sign) => detail_frame(config, sign),
        PickerState::List { page } => list_frame(config, page),
    }
}

fn detail_frame(config: &Config, sign: &Sign) -> Result<Frame> {
    let name = sign.display_name();

    Frame::new(
        format!("{name}'s Cosmic Vibe"),
        sign.caption,
        &config.frame_image_url,
        vec![
            Button::post("Pick Another", page_target(1)),
            Button::link(format!("Collect {name}"), config.collect_url(sign.key)),
        ],
    )
}

fn list_frame(config: &Config, page: usize) -> Result<Frame> {
    let mut buttons: Vec<Button> = catalog::page(page)
        .iter()
        .map(|sign| Button::post(sign.display_name(), sign_target(sign.key)))
        .collect();

    if page < catalog::page_count() {
        buttons.push(Button::post("Next", page_target(page + 1)));
    } else {
        buttons.push(Button::post("Start Over", page_target(1)));
    }

    Frame::new(LIST_TITLE, LIST_DESCRIPTION, &config.frame_image_url, buttons)
}
