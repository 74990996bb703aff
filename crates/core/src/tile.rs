//! Static floor tiles.

use crate::projection::{project, Camera};
use crate::types::{GridPos, Rgb, ScreenPos, TileSize};

/// A single floor cell. Position and color are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pos: GridPos,
    color: Rgb,
}

impl Tile {
    pub fn new(x: u16, y: u16, color: Rgb) -> Self {
        Self {
            pos: GridPos::new(x as f32, y as f32),
            color,
        }
    }

    pub fn pos(&self) -> GridPos {
        self.pos
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Top-left of the tile's diamond bounding box on the surface.
    pub fn screen_pos(&self, tile: TileSize, camera: &Camera) -> ScreenPos {
        project(self.pos, tile, camera)
    }
}

/// Build an `n x n` grid in column-major order (x outer, y inner).
pub fn generate_tiles(grid_size: u16, color: Rgb) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(grid_size as usize * grid_size as usize);
    for x in 0..grid_size {
        for y in 0..grid_size {
            tiles.push(Tile::new(x, y, color));
        }
    }
    tiles
}
