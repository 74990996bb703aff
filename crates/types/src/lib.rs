//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid and Surface Dimensions
//!
//! - **Grid**: 10x10 tiles, indexed (0, 0) to (9, 9)
//! - **Surface**: 160x96 pixels, shown as 160 columns by 48 rows of half-block cells
//! - **Tile**: 16x8 pixel diamond (2:1 isometric ratio)
//! - **Player start**: grid (5, 5)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval (~60 FPS) |
//! | `ANIMATION_FRAME_MS` | 200 | Time per animation frame |
//! | `ANIMATION_FRAMES` | 4 | Frames in the walk cycle |
//! | `KEY_FIRST_REPEAT_TIMEOUT_MS` | 700 | Auto-release before the first key repeat arrives |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Auto-release once a key is repeating |
//!
//! # Examples
//!
//! ```
//! use iso_rpg_types::{Direction, GridPos, MoveIntent, GRID_SIZE};
//!
//! let intent = MoveIntent::from_held(false, false, false, true);
//! assert_eq!(intent, MoveIntent::new(1.0, 0.0));
//!
//! assert_eq!(Direction::Up.as_str(), "up");
//! assert_eq!(GridPos::new(5.0, 5.0).x, 5.0);
//! assert_eq!(GRID_SIZE, 10);
//! ```

use std::ops::{Add, Sub};

/// Tiles per side of the square grid
pub const GRID_SIZE: u16 = 10;

/// Raster surface width in pixels
pub const SURFACE_WIDTH: u16 = 160;

/// Raster surface height in pixels (two pixels per terminal row)
pub const SURFACE_HEIGHT: u16 = 96;

/// Tile diamond width in pixels
pub const TILE_WIDTH: f32 = 16.0;

/// Tile diamond height in pixels
pub const TILE_HEIGHT: f32 = 8.0;

/// Player displacement per update, in grid units
pub const PLAYER_SPEED: f32 = 0.2;

/// Player spawn position
pub const PLAYER_START: GridPos = GridPos::new(5.0, 5.0);

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Target frame rate
pub const TARGET_FPS: u32 = 60;

/// Milliseconds each animation frame is shown
pub const ANIMATION_FRAME_MS: u32 = 200;

/// Number of frames in the walk cycle
pub const ANIMATION_FRAMES: u8 = 4;

/// Held-key auto-release timeout when the terminal does not report releases
/// and the key is already auto-repeating
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Auto-release timeout between a key's first press and its first repeat.
/// Covers the OS key-repeat delay (typically 250-660ms).
pub const KEY_FIRST_REPEAT_TIMEOUT_MS: u32 = 700;

pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const BROWN: Rgb = Rgb::new(139, 69, 19);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);

/// Background fill of the surface
pub const BACKGROUND_COLOR: Rgb = WHITE;

/// Diamond outline color
pub const OUTLINE_COLOR: Rgb = BLACK;

/// Floor tile fill
pub const TILE_COLOR: Rgb = BROWN;

/// Player body fill
pub const PLAYER_BODY_COLOR: Rgb = GREEN;

/// Player head fill
pub const PLAYER_HEAD_COLOR: Rgb = BLUE;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Logical position in tile units.
///
/// Tiles sit on integer coordinates; the player moves continuously between them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridPos {
    pub x: f32,
    pub y: f32,
}

impl GridPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for GridPos {
    type Output = GridPos;

    fn add(self, rhs: GridPos) -> GridPos {
        GridPos::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for GridPos {
    type Output = GridPos;

    fn sub(self, rhs: GridPos) -> GridPos {
        GridPos::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Position on the raster surface, in pixels.
///
/// Always derived from a [`GridPos`] and a camera offset; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPos {
    pub x: f32,
    pub y: f32,
}

impl ScreenPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for ScreenPos {
    type Output = ScreenPos;

    fn add(self, rhs: ScreenPos) -> ScreenPos {
        ScreenPos::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for ScreenPos {
    type Output = ScreenPos;

    fn sub(self, rhs: ScreenPos) -> ScreenPos {
        ScreenPos::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Bounding box of one tile diamond, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSize {
    pub width: f32,
    pub height: f32,
}

impl TileSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self::new(TILE_WIDTH, TILE_HEIGHT)
    }
}

/// The four cardinal directions, used both for held movement keys and for
/// the way the player is facing.
///
/// "Up" and "down" are grid-relative (decreasing/increasing y), which on
/// screen reads as up-right and down-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Stable slot index, for per-direction arrays.
    pub fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Movement request for one update: two signed axis values in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveIntent {
    pub dx: f32,
    pub dy: f32,
}

impl MoveIntent {
    pub const NONE: MoveIntent = MoveIntent { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f32, dy: f32) -> Self {
        Self {
            dx: dx.clamp(-1.0, 1.0),
            dy: dy.clamp(-1.0, 1.0),
        }
    }

    /// Build an intent from the four held directions. Opposing keys cancel.
    pub fn from_held(up: bool, down: bool, left: bool, right: bool) -> Self {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Self::new(axis(left, right), axis(up, down))
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    pub fn is_diagonal(&self) -> bool {
        self.dx != 0.0 && self.dy != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_fits_the_whole_grid() {
        let n = GRID_SIZE as f32;
        // An n x n diamond grid spans n tile widths and n tile heights.
        assert!(n * TILE_WIDTH <= SURFACE_WIDTH as f32);
        assert!(n * TILE_HEIGHT <= SURFACE_HEIGHT as f32);
        assert_eq!(SURFACE_HEIGHT % 2, 0, "half-block rendering needs an even height");
    }

    #[test]
    fn opposing_keys_cancel() {
        assert!(MoveIntent::from_held(true, true, false, false).is_zero());
        assert!(MoveIntent::from_held(false, false, true, true).is_zero());
        assert_eq!(
            MoveIntent::from_held(true, true, true, false),
            MoveIntent::new(-1.0, 0.0)
        );
    }

    #[test]
    fn intent_is_clamped_to_unit_axes() {
        let intent = MoveIntent::new(3.0, -7.5);
        assert_eq!(intent, MoveIntent::new(1.0, -1.0));
        assert!(intent.is_diagonal());
    }

    #[test]
    fn direction_indices_are_distinct() {
        let mut seen = [false; 4];
        for d in Direction::ALL {
            assert!(!seen[d.index()]);
            seen[d.index()] = true;
        }
    }
}
