//! Isometric projection between grid and screen space.
//!
//! The transform is linear and stateless:
//!
//! ```text
//! screen_x = (x - y) * (tile_width  / 2) + cx
//! screen_y = (x + y) * (tile_height / 2) + cy
//! ```
//!
//! The returned screen position is the top-left corner of the diamond's
//! bounding box; the diamond's top vertex sits half a tile width to the right.

use crate::types::{GridPos, ScreenPos, TileSize};

/// Constant translation applied after projection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub offset: ScreenPos,
}

impl Camera {
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            offset: ScreenPos::new(x, y),
        }
    }

    /// Offset that centers an `n x n` diamond grid on a surface.
    ///
    /// The grid spans `n * tile.width` horizontally, centered on the column
    /// where `x == y`, and `n * tile.height` vertically from the top vertex of
    /// tile (0, 0) to the bottom vertex of tile (n-1, n-1).
    pub fn centered(surface_w: u16, surface_h: u16, tile: TileSize, grid_size: u16) -> Self {
        let cx = (surface_w as f32 - tile.width) / 2.0;
        let cy = (surface_h as f32 - grid_size as f32 * tile.height) / 2.0;
        Self::new(cx, cy)
    }
}

/// Project a grid position onto the surface.
pub fn project(pos: GridPos, tile: TileSize, camera: &Camera) -> ScreenPos {
    ScreenPos::new(
        (pos.x - pos.y) * tile.half_width() + camera.offset.x,
        (pos.x + pos.y) * tile.half_height() + camera.offset.y,
    )
}

/// Exact inverse of [`project`].
pub fn unproject(screen: ScreenPos, tile: TileSize, camera: &Camera) -> GridPos {
    let u = (screen.x - camera.offset.x) / tile.half_width();
    let v = (screen.y - camera.offset.y) / tile.half_height();
    GridPos::new((u + v) / 2.0, (v - u) / 2.0)
}

/// The integer tile whose diamond covers `screen`, if it is on a grid of
/// `grid_size` tiles per side.
pub fn tile_at(
    screen: ScreenPos,
    tile: TileSize,
    camera: &Camera,
    grid_size: u16,
) -> Option<(u16, u16)> {
    // Shift from the diamond's top vertex to its center so flooring picks
    // the tile whose diamond contains the point.
    let anchor = ScreenPos::new(screen.x - tile.half_width(), screen.y - tile.half_height());
    let g = unproject(anchor, tile, camera);
    let (gx, gy) = ((g.x + 0.5).floor(), (g.y + 0.5).floor());
    let n = grid_size as f32;
    if gx < 0.0 || gy < 0.0 || gx >= n || gy >= n {
        return None;
    }
    Some((gx as u16, gy as u16))
}
