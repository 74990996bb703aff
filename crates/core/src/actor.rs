//! Player actor: continuous grid position, facing, and walk animation.

use std::f32::consts::FRAC_1_SQRT_2;

use crate::projection::{project, Camera};
use crate::types::{
    Direction, GridPos, MoveIntent, ScreenPos, TileSize, ANIMATION_FRAMES, ANIMATION_FRAME_MS,
    PLAYER_START,
};

/// Frame counter for the walk cycle.
///
/// Elapsed time accumulates until it reaches the frame duration; the frame
/// then advances by one (wrapping) and the accumulator restarts from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    frame: u8,
    frame_count: u8,
    accumulator_ms: u32,
    frame_ms: u32,
}

impl Animation {
    pub fn new(frame_count: u8, frame_ms: u32) -> Self {
        Self {
            frame: 0,
            frame_count: frame_count.max(1),
            accumulator_ms: 0,
            frame_ms,
        }
    }

    pub fn frame(&self) -> u8 {
        self.frame
    }

    pub fn accumulator_ms(&self) -> u32 {
        self.accumulator_ms
    }

    /// Advance by `elapsed_ms`. Returns true when the frame changed.
    ///
    /// At most one frame is advanced per call; time past the threshold is
    /// discarded.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        if self.accumulator_ms < self.frame_ms {
            return false;
        }
        self.frame = (self.frame + 1) % self.frame_count;
        self.accumulator_ms = 0;
        true
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(ANIMATION_FRAMES, ANIMATION_FRAME_MS)
    }
}

/// Displacement for one update.
///
/// Each axis moves `speed * axis`; when both axes are nonzero they are
/// scaled by 1/√2 so diagonal speed matches axis-aligned speed.
pub fn displacement(intent: MoveIntent, speed: f32) -> GridPos {
    let mut dx = intent.dx * speed;
    let mut dy = intent.dy * speed;
    if intent.is_diagonal() {
        dx *= FRAC_1_SQRT_2;
        dy *= FRAC_1_SQRT_2;
    }
    GridPos::new(dx, dy)
}

/// Facing for a displacement. The dominant axis wins; equal magnitudes
/// resolve to the vertical axis.
pub fn facing_for(dx: f32, dy: f32) -> Direction {
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// The player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pos: GridPos,
    facing: Direction,
    moving: bool,
    animation: Animation,
}

impl Actor {
    pub fn new(pos: GridPos) -> Self {
        Self {
            pos,
            facing: Direction::Down,
            moving: false,
            animation: Animation::default(),
        }
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    pub fn pos(&self) -> GridPos {
        self.pos
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// True only for the update in which a nonzero intent was applied.
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn frame(&self) -> u8 {
        self.animation.frame()
    }

    /// Top-left of the actor's diamond bounding box on the surface.
    pub fn screen_pos(&self, tile: TileSize, camera: &Camera) -> ScreenPos {
        project(self.pos, tile, camera)
    }

    /// Apply one update's movement. Returns false (and changes nothing) for
    /// a zero intent.
    pub fn apply_move(&mut self, intent: MoveIntent, speed: f32) -> bool {
        if intent.is_zero() {
            return false;
        }
        let delta = displacement(intent, speed);
        self.pos = self.pos + delta;
        self.facing = facing_for(delta.x, delta.y);
        self.moving = true;
        true
    }

    /// Clear the per-update `moving` pulse. Call before [`Actor::apply_move`].
    pub fn begin_update(&mut self) {
        self.moving = false;
    }

    pub fn animate(&mut self, elapsed_ms: u32) -> bool {
        self.animation.advance(elapsed_ms)
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new(PLAYER_START)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PLAYER_SPEED;

    fn norm(p: GridPos) -> f32 {
        (p.x * p.x + p.y * p.y).sqrt()
    }

    #[test]
    fn animation_cycles_through_four_frames() {
        let mut anim = Animation::new(4, 200);
        let mut seen = Vec::new();
        for _ in 0..5 {
            assert!(anim.advance(200));
            seen.push(anim.frame());
        }
        assert_eq!(seen, vec![1, 2, 3, 0, 1]);
    }

    #[test]
    fn animation_waits_for_threshold() {
        let mut anim = Animation::new(4, 200);
        assert!(!anim.advance(199));
        assert_eq!(anim.frame(), 0);
        assert_eq!(anim.accumulator_ms(), 199);
        assert!(anim.advance(1));
        assert_eq!(anim.frame(), 1);
        assert_eq!(anim.accumulator_ms(), 0);
    }

    #[test]
    fn animation_drops_overshoot() {
        let mut anim = Animation::new(4, 200);
        assert!(anim.advance(1000));
        assert_eq!(anim.frame(), 1);
        assert_eq!(anim.accumulator_ms(), 0);
    }

    #[test]
    fn diagonal_displacement_is_normalized() {
        let straight = displacement(MoveIntent::new(1.0, 0.0), PLAYER_SPEED);
        let diagonal = displacement(MoveIntent::new(1.0, 1.0), PLAYER_SPEED);
        assert!((norm(straight) - norm(diagonal)).abs() < 1e-5);
    }

    #[test]
    fn facing_prefers_dominant_axis() {
        assert_eq!(facing_for(0.2, 0.0), Direction::Right);
        assert_eq!(facing_for(-0.2, 0.1), Direction::Left);
        assert_eq!(facing_for(0.1, -0.2), Direction::Up);
        assert_eq!(facing_for(0.0, 0.2), Direction::Down);
    }

    #[test]
    fn facing_tie_resolves_vertically() {
        assert_eq!(facing_for(1.0, 1.0), Direction::Down);
        assert_eq!(facing_for(1.0, -1.0), Direction::Up);
        assert_eq!(facing_for(-1.0, 1.0), Direction::Down);
    }

    #[test]
    fn zero_intent_changes_nothing() {
        let mut actor = Actor::default();
        let before = actor;
        assert!(!actor.apply_move(MoveIntent::NONE, PLAYER_SPEED));
        assert_eq!(actor, before);
    }

    #[test]
    fn moving_flag_is_cleared_each_update() {
        let mut actor = Actor::default();
        actor.begin_update();
        actor.apply_move(MoveIntent::new(0.0, 1.0), PLAYER_SPEED);
        assert!(actor.is_moving());
        actor.begin_update();
        assert!(!actor.is_moving());
    }
}
