//! Height grids and their legend

use super::rng::Mulberry32;

/// Cells per side
pub const GRID_SIZE: usize = 10;

/// Row-major heights in [0, 1)
pub type Grid = [[f64; GRID_SIZE]; GRID_SIZE];

/// How a height band is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Terrain {
    /// Inclusive upper bound of the band
    pub max: f64,
    pub glyph: char,
    pub color: &'static str,
}

/// Height bands, lowest first
pub const TERRAIN: [Terrain; 5] = [
    // lowlands
    Terrain { max: 0.2, glyph: '.', color: "#95a5a6" },
    // water
    Terrain { max: 0.4, glyph: '~', color: "#5dade2" },
    // hills
    Terrain { max: 0.6, glyph: '^', color: "#58d68d" },
    // mountains
    Terrain { max: 0.8, glyph: '#', color: "#f4d03f" },
    // peaks
    Terrain { max: 1.0, glyph: '@', color: "#e74c3c" },
];

/// Draw a grid for `seed`. One value per cell, row by row.
pub fn generate(seed: &str) -> Grid {
    let mut rng = Mulberry32::from_seed_str(seed);
    let mut grid = [[0.0; GRID_SIZE]; GRID_SIZE];
    for row in &mut grid {
        for cell in row.iter_mut() {
            *cell = rng.next_f64();
        }
    }
    grid
}

/// First band whose bound is at or above `height`; the top band catches
/// anything past the table.
pub fn classify(height: f64) -> &'static Terrain {
    TERRAIN
        .iter()
        .find(|t| height <= t.max)
        .unwrap_or(&TERRAIN[TERRAIN.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph_row(grid: &Grid, y: usize) -> String {
        grid[y].iter().map(|h| classify(*h).glyph).collect()
    }

    #[test]
    fn test_generate_is_reproducible() {
        let a = generate("starrace");
        let b = generate("starrace");
        assert_eq!(a, b);
        assert!(a.iter().flatten().all(|h| (0.0..1.0).contains(h)));
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(generate("starrace"), generate("starracf"));
        assert_ne!(generate(""), generate(" "));
    }

    #[test]
    fn test_known_first_row() {
        let grid = generate("starrace");
        assert_eq!(grid[0][0], 0.375_135_050_620_883_7);
        assert_eq!(glyph_row(&grid, 0), "~.#^~.##^^");
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0.0).glyph, '.');
        assert_eq!(classify(0.2).glyph, '.');
        assert_eq!(classify(0.200_001).glyph, '~');
        assert_eq!(classify(0.6).glyph, '^');
        assert_eq!(classify(0.99).glyph, '@');
        assert_eq!(classify(1.0).glyph, '@');
        assert_eq!(classify(7.0).glyph, '@');
    }
}
