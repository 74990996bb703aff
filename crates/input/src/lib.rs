//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events onto movement directions and quit signals, and keeps
//! track of which directions are held (including on terminals without
//! key-release events).

pub mod held;
pub mod map;

pub use iso_rpg_types as types;

pub use held::HeldKeys;
pub use map::{direction_for_key, should_quit};
