//! Isometric grid runner (default binary).
//!
//! Owns the world and drives it at a fixed frame rate: drain input events,
//! turn held keys into a movement intent, update, render, sleep.
//! Rendering uses crossterm and a half-block framebuffer (no widget toolkit).

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, error, info};

use iso_rpg::core::World;
use iso_rpg::input::{should_quit, HeldKeys};
use iso_rpg::logging;
use iso_rpg::term::{FrameBuffer, SceneView, TerminalRenderer, Viewport};
use iso_rpg::types::{TARGET_FPS, TICK_MS};

fn main() -> Result<()> {
    if let Some(path) = logging::init() {
        info!("logging to {}", path.display());
    }

    let mut term = TerminalRenderer::new();
    if let Err(e) = term.enter() {
        let _ = term.exit();
        return Err(e.context("failed to initialize the terminal"));
    }

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => info!("exited cleanly"),
        Err(e) => error!("exited with error: {:#}", e),
    }
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut world = World::default();
    let mut view = SceneView::for_world(&world);
    let mut held = HeldKeys::new().with_release_events(term.key_release_events());
    let mut fb = FrameBuffer::new(0, 0);

    let frame_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();

    let cfg = world.config();
    info!(
        "started: surface {}x{} px, grid {}x{}, {} fps, key release events: {}",
        cfg.surface_width,
        cfg.surface_height,
        cfg.grid_size,
        cfg.grid_size,
        TARGET_FPS,
        term.key_release_events()
    );

    while world.is_running() {
        let frame_start = Instant::now();

        // Drain queued events without blocking.
        while event::poll(Duration::ZERO).context("polling terminal events")? {
            match event::read().context("reading terminal event")? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            info!("quit requested ({:?})", key.code);
                            world.stop();
                            break;
                        }
                        held.handle_key_press(key.code, frame_start);
                    }
                    KeyEventKind::Release => held.handle_key_release(key.code),
                },
                Event::Resize(w, h) => {
                    debug!("terminal resized to {}x{}", w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }
        if !world.is_running() {
            break;
        }

        held.expire(frame_start);
        let elapsed_ms = frame_start
            .duration_since(last_frame)
            .as_millis()
            .min(u32::MAX as u128) as u32;
        last_frame = frame_start;

        world.update(held.intent(), elapsed_ms);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&world, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if let Some(rest) = frame_duration.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    Ok(())
}
