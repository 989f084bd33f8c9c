//! InputBridge: adapts crossterm key events into game callbacks.
//!
//! Both strategies run on the loop thread, so callback mutations of game
//! state are serialized with the draw path by construction. Delivery happens
//! at one defined point in the frame cycle, after present.

use std::time::{Duration, Instant};

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::engine::{Game, LoopCtl};

/// How key events reach the game. Chosen at loop construction, not
/// switchable mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Drain every queued key event each frame and forward presses and
    /// releases verbatim, in order.
    #[default]
    EventPush,
    /// One non-blocking read per frame: at most one key press is delivered,
    /// releases are discarded, and with no key pending the press callback is
    /// simply not called.
    PollPull,
}

/// Queued events handled per frame. Anything beyond this waits for the next
/// frame in the platform queue.
const EVENT_BATCH: usize = 32;

pub struct InputBridge {
    mode: InputMode,
}

impl InputBridge {
    pub fn new(mode: InputMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Deliver pending input and wait out the rest of `budget`.
    ///
    /// Never blocks past `budget`, so input delivery cannot stall the frame
    /// loop. Delivery halts early once a callback stops the loop.
    pub fn pump(&mut self, budget: Duration, game: &mut impl Game, ctl: &mut LoopCtl) -> Result<()> {
        let deadline = Instant::now() + budget;
        match self.mode {
            InputMode::PollPull => {
                if event::poll(Duration::ZERO)? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind == KeyEventKind::Press {
                            game.on_key_press(key.code, ctl);
                        }
                    }
                }
                sleep_until(deadline);
            }
            InputMode::EventPush => {
                // Gather within the budget, then deliver as one batch so
                // callbacks run at a single point in the frame cycle.
                let mut batch: ArrayVec<KeyEvent, EVENT_BATCH> = ArrayVec::new();
                loop {
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    if remaining.is_zero() || batch.is_full() || !event::poll(remaining)? {
                        break;
                    }
                    if let Event::Key(key) = event::read()? {
                        let _ = batch.try_push(key);
                    }
                }
                for key in batch {
                    match key.kind {
                        KeyEventKind::Press => game.on_key_press(key.code, ctl),
                        KeyEventKind::Release => game.on_key_release(key.code),
                        // Terminal auto-repeat; repeats surface as fresh
                        // presses on most terminals anyway.
                        KeyEventKind::Repeat => {}
                    }
                    if !ctl.is_running() {
                        break;
                    }
                }
                sleep_until(deadline);
            }
        }
        Ok(())
    }
}

fn sleep_until(deadline: Instant) {
    let now = Instant::now();
    if now < deadline {
        std::thread::sleep(deadline - now);
    }
}
