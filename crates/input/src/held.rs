//! Held-direction tracker for terminal environments.
//!
//! The movement model wants "which keys are down right now". Terminals that
//! speak the kitty keyboard protocol report releases; the rest only send
//! repeated presses while a key is held. For those, a direction is treated as
//! released once no press has been seen for a while. Before the first
//! auto-repeat the wait is `first_repeat_timeout_ms` (it has to outlast the
//! OS repeat delay); once the key is repeating it drops to
//! `release_timeout_ms`.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::map::direction_for_key;
use crate::types::{Direction, MoveIntent, KEY_FIRST_REPEAT_TIMEOUT_MS, KEY_RELEASE_TIMEOUT_MS};

#[derive(Debug, Clone, Copy)]
struct Hold {
    last_seen: Instant,
    repeating: bool,
}

/// Tracks which movement directions are currently held.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    holds: [Option<Hold>; 4],
    release_timeout_ms: u32,
    first_repeat_timeout_ms: u32,
    reports_release: bool,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            holds: [None; 4],
            release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
            first_repeat_timeout_ms: KEY_FIRST_REPEAT_TIMEOUT_MS,
            reports_release: false,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn with_first_repeat_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.first_repeat_timeout_ms = timeout_ms;
        self
    }

    /// Trust release events and disable the timeouts.
    pub fn with_release_events(mut self, reports_release: bool) -> Self {
        self.reports_release = reports_release;
        self
    }

    /// Record a press (or auto-repeat). Returns the direction if the key is a
    /// movement key.
    ///
    /// A press for a direction that is already held counts as a repeat.
    pub fn handle_key_press(&mut self, code: KeyCode, now: Instant) -> Option<Direction> {
        let dir = direction_for_key(code)?;
        let slot = &mut self.holds[dir.index()];
        *slot = Some(Hold {
            last_seen: now,
            repeating: slot.is_some(),
        });
        Some(dir)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(dir) = direction_for_key(code) {
            self.holds[dir.index()] = None;
        }
    }

    /// Drop directions whose last press is older than their timeout.
    ///
    /// No-op when the terminal reports releases.
    pub fn expire(&mut self, now: Instant) {
        if self.reports_release {
            return;
        }
        let repeat = Duration::from_millis(self.release_timeout_ms as u64);
        let first = Duration::from_millis(self.first_repeat_timeout_ms as u64);
        for slot in self.holds.iter_mut() {
            if let Some(hold) = *slot {
                let timeout = if hold.repeating { repeat } else { first };
                if now.saturating_duration_since(hold.last_seen) > timeout {
                    *slot = None;
                }
            }
        }
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.holds[dir.index()].is_some()
    }

    /// Movement intent from the currently held directions.
    pub fn intent(&self) -> MoveIntent {
        MoveIntent::from_held(
            self.is_held(Direction::Up),
            self.is_held(Direction::Down),
            self.is_held(Direction::Left),
            self.is_held(Direction::Right),
        )
    }

    pub fn reset(&mut self) {
        self.holds = [None; 4];
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
