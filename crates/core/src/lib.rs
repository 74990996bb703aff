//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the isometric projection, the floor tiles, the player
//! actor and the per-frame update step. It has **zero dependencies** on the
//! terminal, input devices or timers, making it:
//!
//! - **Deterministic**: the same intents and frame times always produce the same world
//! - **Testable**: projection, movement and animation are unit-tested without rendering
//! - **Portable**: any frontend that can draw a filled polygon can present it
//!
//! # Module Structure
//!
//! - [`projection`]: grid ↔ screen transform and the constant [`Camera`] offset
//! - [`tile`]: static floor tiles
//! - [`actor`]: player movement, facing and the [`Animation`] frame counter
//! - [`world`]: the controller state and its [`World::update`] step
//!
//! # Example
//!
//! ```
//! use iso_rpg_core::World;
//! use iso_rpg_types::{Direction, MoveIntent};
//!
//! let mut world = World::default();
//! world.update(MoveIntent::new(1.0, 0.0), 16);
//!
//! let pos = world.actor().pos();
//! assert!((pos.x - 5.2).abs() < 1e-5);
//! assert_eq!(pos.y, 5.0);
//! assert_eq!(world.actor().facing(), Direction::Right);
//! ```
//!
//! # Timing
//!
//! Movement is per update (a fixed distance each frame, not scaled by time).
//! Animation is time-based: pass the frame's elapsed milliseconds to
//! [`World::update`].

pub mod actor;
pub mod projection;
pub mod tile;
pub mod world;

pub use iso_rpg_types as types;

pub use actor::{displacement, facing_for, Actor, Animation};
pub use projection::{project, tile_at, unproject, Camera};
pub use tile::{generate_tiles, Tile};
pub use world::{RunState, SceneSnapshot, World, WorldConfig};
