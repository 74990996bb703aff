//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead paints the scene onto a fixed-size
//! pixel [`Canvas`], packs it into half-block cells of a [`FrameBuffer`], and
//! flushes that to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Provide a rendering pipeline that feels closer to a game renderer
//! - Square-ish pixels: one terminal cell is one pixel wide and two pixels tall

pub mod canvas;
pub mod fb;
pub mod renderer;
pub mod scene_view;

pub use iso_rpg_core as core;
pub use iso_rpg_types as types;

pub use canvas::{diamond, Canvas, HALF_BLOCK};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene_view::{draw_scene, SceneView, Viewport};
