//! SceneView: maps a `core::World` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Drawing happens in two stages. The world is painted onto a fixed-size
//! [`Canvas`] (background, every tile, then the actor), and the canvas is
//! then packed into half-block cells and placed inside the viewport.

use std::fmt::Write as _;

use crate::canvas::{diamond, Canvas};
use crate::core::{SceneSnapshot, World};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{
    ScreenPos, BACKGROUND_COLOR, OUTLINE_COLOR, PLAYER_BODY_COLOR, PLAYER_HEAD_COLOR,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Paint the world onto `canvas`: background, tiles in order, then the actor.
///
/// Screen positions are projected here from the current grid positions and
/// the world camera; nothing is cached between frames.
pub fn draw_scene(world: &World, canvas: &mut Canvas) {
    canvas.clear(BACKGROUND_COLOR);

    let tile_size = world.tile_size();
    let camera = world.camera();

    for tile in world.tiles() {
        let origin = tile.screen_pos(tile_size, camera);
        let pts = diamond(origin, tile_size.width, tile_size.height);
        canvas.fill_polygon(&pts, tile.color());
        canvas.stroke_polygon(&pts, OUTLINE_COLOR);
    }

    let actor = world.actor();
    let origin = actor.screen_pos(tile_size, camera);

    let body = diamond(origin, tile_size.width, tile_size.height);
    canvas.fill_polygon(&body, PLAYER_BODY_COLOR);
    canvas.stroke_polygon(&body, OUTLINE_COLOR);

    // Head: a diamond of radius width/4 centered on the body's top vertex,
    // bobbing up a pixel on odd walk frames.
    let head_r = tile_size.width / 4.0;
    let bob = if actor.frame() % 2 == 1 { 1.0 } else { 0.0 };
    let head_origin = ScreenPos::new(
        origin.x + tile_size.width / 2.0 - head_r,
        origin.y - head_r - bob,
    );
    let head = diamond(head_origin, head_r * 2.0, head_r * 2.0);
    canvas.fill_polygon(&head, PLAYER_HEAD_COLOR);
    canvas.stroke_polygon(&head, OUTLINE_COLOR);
}

/// A lightweight terminal presenter for the isometric scene.
pub struct SceneView {
    canvas: Canvas,
    show_status: bool,
    status: String,
}

impl SceneView {
    pub fn new(surface_width: u16, surface_height: u16) -> Self {
        Self {
            canvas: Canvas::new(surface_width, surface_height),
            show_status: true,
            status: String::with_capacity(128),
        }
    }

    /// View sized for the world's configured surface.
    pub fn for_world(world: &World) -> Self {
        let cfg = world.config();
        Self::new(cfg.surface_width, cfg.surface_height)
    }

    pub fn with_status(mut self, show_status: bool) -> Self {
        self.show_status = show_status;
        self
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Terminal rows the surface occupies.
    pub fn surface_rows(&self) -> u16 {
        self.canvas.height().div_ceil(2)
    }

    /// Render the world into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&mut self, world: &World, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        draw_scene(world, &mut self.canvas);

        let rows = self.surface_rows() as i32;
        let cols = self.canvas.width() as i32;
        let wants_status = self.show_status && viewport.height as i32 > rows;
        let block_h = rows + wants_status as i32;

        // Centered when it fits; otherwise the top-left corner stays visible.
        let start_x = ((viewport.width as i32 - cols) / 2).max(0);
        let start_y = ((viewport.height as i32 - block_h) / 2).max(0);

        self.canvas.blit_half_blocks(fb, start_x, start_y);

        if wants_status {
            let snap = world.snapshot();
            self.draw_status(fb, &snap, start_x as u16, (start_y + rows) as u16);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, world: &World, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(world, viewport, &mut fb);
        fb
    }

    fn draw_status(&mut self, fb: &mut FrameBuffer, snap: &SceneSnapshot, x: u16, y: u16) {
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            bold: false,
            ..label
        };
        let hint = CellStyle { dim: true, ..value };

        self.status.clear();
        let _ = write!(self.status, "({:.2}, {:.2})", snap.pos.x, snap.pos.y);

        let mut cx = fb.put_str(x, y, "POS ", label);
        cx = fb.put_str(cx, y, &self.status, value);

        self.status.clear();
        match snap.tile {
            Some((tx, ty)) => {
                let _ = write!(self.status, "{},{}", tx, ty);
            }
            None => self.status.push('-'),
        }
        cx = fb.put_str(cx, y, "  TILE ", label);
        cx = fb.put_str(cx, y, &self.status, value);

        cx = fb.put_str(cx, y, "  FACING ", label);
        cx = fb.put_str(cx, y, snap.facing.as_str(), value);

        self.status.clear();
        let _ = write!(self.status, "{}", snap.frame);
        cx = fb.put_str(cx, y, "  FRAME ", label);
        cx = fb.put_str(cx, y, &self.status, value);

        fb.put_str(cx, y, "  wasd/arrows move, esc quits", hint);
    }
}

impl Default for SceneView {
    fn default() -> Self {
        Self::new(crate::types::SURFACE_WIDTH, crate::types::SURFACE_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MoveIntent, TILE_COLOR};

    #[test]
    fn tiles_are_drawn_on_white_background() {
        let world = World::default();
        let mut canvas = Canvas::new(160, 96);
        draw_scene(&world, &mut canvas);

        assert_eq!(canvas.get(0, 0), Some(BACKGROUND_COLOR));
        // Tile (0, 0): box origin (72, 8), center (80, 12).
        assert_eq!(canvas.get(80, 12), Some(TILE_COLOR));
        // Tile (9, 0): box origin (144, 44), center (152, 48).
        assert_eq!(canvas.get(152, 48), Some(TILE_COLOR));
    }

    #[test]
    fn actor_is_drawn_over_tiles() {
        let world = World::default();
        let mut canvas = Canvas::new(160, 96);
        draw_scene(&world, &mut canvas);

        // Actor at (5, 5): box origin (72, 48). Lower body interior.
        assert_eq!(canvas.get(80, 54), Some(PLAYER_BODY_COLOR));
        // Head sits on the body's top vertex.
        assert_eq!(canvas.get(80, 47), Some(PLAYER_HEAD_COLOR));
    }

    #[test]
    fn head_bobs_up_on_odd_frames() {
        let mut world = World::default();
        let mut canvas = Canvas::new(160, 96);
        draw_scene(&world, &mut canvas);

        // Head box origin (76, 44): top vertex outline at (80, 44), tile above.
        assert_eq!(canvas.get(80, 44), Some(OUTLINE_COLOR));
        assert_eq!(canvas.get(80, 43), Some(TILE_COLOR));

        world.update(MoveIntent::NONE, 200);
        assert_eq!(world.actor().frame(), 1);
        draw_scene(&world, &mut canvas);

        assert_eq!(canvas.get(80, 43), Some(OUTLINE_COLOR));
        assert_eq!(canvas.get(80, 44), Some(PLAYER_HEAD_COLOR));

        world.update(MoveIntent::NONE, 200);
        assert_eq!(world.actor().frame(), 2);
        draw_scene(&world, &mut canvas);
        assert_eq!(canvas.get(80, 44), Some(OUTLINE_COLOR));
    }

    #[test]
    fn actor_moves_on_screen_after_update() {
        let mut world = World::default();
        for _ in 0..5 {
            world.update(MoveIntent::new(1.0, 0.0), 16);
        }
        let mut canvas = Canvas::new(160, 96);
        draw_scene(&world, &mut canvas);

        // One grid unit right is (+8, +4) on screen.
        assert_eq!(canvas.get(88, 58), Some(PLAYER_BODY_COLOR));
    }
}
