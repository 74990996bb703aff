//! Isometric tile-grid demo (workspace facade crate).
//!
//! This package exposes `iso_rpg::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub mod logging;

pub use iso_rpg_core as core;
pub use iso_rpg_input as input;
pub use iso_rpg_term as term;
pub use iso_rpg_types as types;
