//! FrameForms - generative terrain art frame
//!
//! Every seed draws a 10x10 height grid and paints it as an SVG. "Next
//! Terrain" carries a brand-new random seed, "Reset" drops the seed so the
//! next request starts fresh.
//!
//! # Architecture
//! - `rng.rs`: seed hashing and the mulberry32 generator
//! - `grid.rs`: grid generation and height bands
//! - `svg.rs`: SVG painting and the data URI

mod grid;
mod rng;
mod svg;

pub use grid::{GRID_SIZE, Grid, TERRAIN, Terrain, classify, generate};
pub use rng::{Mulberry32, random_seed};

use crate::config::Config;
use crate::error::Result;
use crate::frame::Frame;
use crate::navigation::{TerrainState, terrain_target};
use crate::types::Button;

const TITLE: &str = "FrameForms Terrain";

/// Resolve the state to a concrete seed and render it
pub fn render(config: &Config, state: TerrainState) -> Result<Frame> {
    let seed = match state {
        TerrainState::Seeded(seed) => seed,
        TerrainState::Fresh => random_seed(),
    };
    terrain_frame(config, &seed, &random_seed())
}

/// Frame for `seed`, with "Next Terrain" pointing at `next_seed`
pub fn terrain_frame(config: &Config, seed: &str, next_seed: &str) -> Result<Frame> {
    let image = svg::data_uri(&svg::render_svg(&generate(seed)));

    Frame::new(
        TITLE,
        format!("Seed: {seed}"),
        image,
        vec![
            Button::post("Next Terrain", terrain_target(&config.base_url, Some(next_seed))),
            Button::post("Reset", terrain_target(&config.base_url, None)),
        ],
    )
}
