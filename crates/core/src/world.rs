//! World module - owns the tiles, the actor, and the camera
//!
//! The controller loop drives a [`World`] once per frame with the movement
//! intent read from the keyboard and the elapsed frame time. Screen positions
//! are never stored here; renderers derive them from [`World::camera`].

use log::debug;

use crate::actor::{Actor, Animation};
use crate::projection::{tile_at, Camera};
use crate::tile::{generate_tiles, Tile};
use crate::types::*;

/// Tunables for building a world.
///
/// `Default` mirrors the compile-time constants; the `with_*` builders exist so
/// tests and benches can try other sizes and speeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    pub grid_size: u16,
    pub surface_width: u16,
    pub surface_height: u16,
    pub tile: TileSize,
    pub player_speed: f32,
    pub player_start: GridPos,
    pub animation_frames: u8,
    pub animation_frame_ms: u32,
    pub tile_color: Rgb,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            tile: TileSize::default(),
            player_speed: PLAYER_SPEED,
            player_start: PLAYER_START,
            animation_frames: ANIMATION_FRAMES,
            animation_frame_ms: ANIMATION_FRAME_MS,
            tile_color: TILE_COLOR,
        }
    }
}

impl WorldConfig {
    pub fn with_grid_size(mut self, grid_size: u16) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_surface(mut self, width: u16, height: u16) -> Self {
        self.surface_width = width;
        self.surface_height = height;
        self
    }

    pub fn with_tile(mut self, tile: TileSize) -> Self {
        self.tile = tile;
        self
    }

    pub fn with_player_speed(mut self, speed: f32) -> Self {
        self.player_speed = speed;
        self
    }

    pub fn with_player_start(mut self, start: GridPos) -> Self {
        self.player_start = start;
        self
    }

    pub fn with_animation(mut self, frames: u8, frame_ms: u32) -> Self {
        self.animation_frames = frames;
        self.animation_frame_ms = frame_ms;
        self
    }
}

/// Controller lifecycle. There is no way back from `Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// Copy of the actor state, for status lines and logging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSnapshot {
    pub pos: GridPos,
    pub facing: Direction,
    pub frame: u8,
    /// Tile under the actor's feet, if it is standing on the grid.
    pub tile: Option<(u16, u16)>,
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct World {
    config: WorldConfig,
    tiles: Vec<Tile>,
    actor: Actor,
    camera: Camera,
    state: RunState,
    frame_count: u64,
}

impl World {
    pub fn new(config: WorldConfig) -> Self {
        let camera = Camera::centered(
            config.surface_width,
            config.surface_height,
            config.tile,
            config.grid_size,
        );
        let actor = Actor::new(config.player_start).with_animation(Animation::new(
            config.animation_frames,
            config.animation_frame_ms,
        ));

        Self {
            tiles: generate_tiles(config.grid_size, config.tile_color),
            actor,
            camera,
            state: RunState::Running,
            frame_count: 0,
            config,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Tiles in draw order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn tile_size(&self) -> TileSize {
        self.config.tile
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Number of completed updates.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Transition to `Stopped`. Idempotent.
    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            debug!("world stopped after {} frames", self.frame_count);
        }
        self.state = RunState::Stopped;
    }

    /// Advance one frame: movement, then animation.
    ///
    /// Does nothing once stopped.
    pub fn update(&mut self, intent: MoveIntent, elapsed_ms: u32) {
        if !self.is_running() {
            return;
        }

        let facing_before = self.actor.facing();
        self.actor.begin_update();
        if self.actor.apply_move(intent, self.config.player_speed) {
            let facing = self.actor.facing();
            if facing != facing_before {
                debug!("actor now facing {}", facing.as_str());
            }
        }
        self.actor.animate(elapsed_ms);
        self.frame_count += 1;
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        let screen = self.actor.screen_pos(self.config.tile, &self.camera);
        let tile_size = self.config.tile;
        let center = ScreenPos::new(
            screen.x + tile_size.half_width(),
            screen.y + tile_size.half_height(),
        );
        let tile = tile_at(center, tile_size, &self.camera, self.config.grid_size);

        SceneSnapshot {
            pos: self.actor.pos(),
            facing: self.actor.facing(),
            frame: self.actor.frame(),
            tile,
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_has_full_grid_and_centered_player() {
        let world = World::default();
        assert_eq!(world.tiles().len(), 100);
        assert_eq!(world.actor().pos(), GridPos::new(5.0, 5.0));
        assert_eq!(world.actor().facing(), Direction::Down);
        assert!(world.is_running());
    }

    #[test]
    fn stop_is_terminal() {
        let mut world = World::default();
        world.stop();
        assert_eq!(world.state(), RunState::Stopped);
        world.update(MoveIntent::new(1.0, 0.0), 16);
        assert_eq!(world.actor().pos(), GridPos::new(5.0, 5.0));
        assert_eq!(world.frame_count(), 0);
        world.stop();
        assert!(!world.is_running());
    }

    #[test]
    fn snapshot_reports_tile_under_actor() {
        let world = World::default();
        let snap = world.snapshot();
        assert_eq!(snap.tile, Some((5, 5)));
        assert_eq!(snap.frame, 0);
        assert_eq!(snap.facing, Direction::Down);
    }

    #[test]
    fn snapshot_reports_no_tile_off_grid() {
        let world = World::new(WorldConfig::default().with_player_start(GridPos::new(-2.0, 3.0)));
        assert_eq!(world.snapshot().tile, None);
    }

    #[test]
    fn config_builders_apply() {
        let world = World::new(
            WorldConfig::default()
                .with_grid_size(4)
                .with_player_speed(1.0)
                .with_animation(2, 50),
        );
        assert_eq!(world.tiles().len(), 16);
        let mut world = world;
        world.update(MoveIntent::new(0.0, -1.0), 50);
        assert_eq!(world.actor().pos(), GridPos::new(5.0, 4.0));
        assert_eq!(world.actor().frame(), 1);
        world.update(MoveIntent::NONE, 50);
        assert_eq!(world.actor().frame(), 0);
    }
}
