//! SVG rendering of terrain grids
//!
//! Frames only accept an image URL, so the SVG travels as a base64 data URI.

use std::fmt::Write;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

use super::grid::{GRID_SIZE, Grid, classify};

/// Pixel size of one cell
const CELL_SIZE: usize = 20;

/// Glyph colour, dark enough for every band
const GLYPH_FILL: &str = "#1c2833";

/// One coloured square per cell with its glyph centred on top
pub fn render_svg(grid: &Grid) -> String {
    let side = GRID_SIZE * CELL_SIZE;
    let mut rects = String::new();
    let mut texts = String::new();

    for (y, row) in grid.iter().enumerate() {
        for (x, height) in row.iter().enumerate() {
            let terrain = classify(*height);
            let cx = x * CELL_SIZE;
            let cy = y * CELL_SIZE;
            // Writing to a String cannot fail
            let _ = write!(
                rects,
                r#"<rect x="{cx}" y="{cy}" width="{CELL_SIZE}" height="{CELL_SIZE}" fill="{}" />"#,
                terrain.color
            );
            let _ = write!(
                texts,
                r#"<text x="{}" y="{}" font-family="monospace" font-size="14" fill="{GLYPH_FILL}" text-anchor="middle">{}</text>"#,
                cx + CELL_SIZE / 2,
                cy + CELL_SIZE * 7 / 10,
                terrain.glyph
            );
        }
    }

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{side}" height="{side}" viewBox="0 0 {side} {side}">{rects}{texts}</svg>"#
    )
}

/// `data:` URI carrying the SVG
pub fn data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", BASE64.encode(svg))
}
