//! The frame loop: sequences update, draw, present, and input delivery under
//! a fixed frame budget.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::canvas::Canvas;
use crate::engine::game::Game;
use crate::input::{InputBridge, InputMode};
use crate::term::{changed_runs, PresentSink, TermPresenter, TerminalSession};

/// Default frame rate when the game never sets one.
pub const DEFAULT_FPS: f32 = 1.0;

const MIN_FPS: f32 = 0.001;

/// When a frame must be physically repainted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedrawPolicy {
    /// Clear and repaint the whole frame every time.
    Always,
    /// Repaint only the cells that changed since the previous frame.
    #[default]
    OnChange,
}

/// Mutable loop state handed to game hooks.
///
/// A fresh `LoopCtl` can be constructed directly when unit-testing hooks;
/// during a run the loop owns the authoritative one.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopCtl {
    running: bool,
    fps: f32,
}

impl LoopCtl {
    pub fn new() -> Self {
        Self {
            running: false,
            fps: DEFAULT_FPS,
        }
    }

    /// End the run. Safe to call from any hook; the current frame performs
    /// no further draw or present work after the hook returns.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Change the frame rate. Takes effect from the current frame's sleep
    /// onward. Non-positive values are clamped.
    pub fn set_fps(&mut self, fps: f32) {
        self.fps = if fps > MIN_FPS { fps } else { MIN_FPS };
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// The time budget of one frame, `1 / fps`.
    pub fn frame_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps))
    }
}

impl Default for LoopCtl {
    fn default() -> Self {
        Self::new()
    }
}

/// What a frame's present step has to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Redraw {
    Full,
    Runs,
    Skip,
}

fn redraw_decision(policy: RedrawPolicy, needs_full: bool, has_changes: bool) -> Redraw {
    match policy {
        RedrawPolicy::Always => Redraw::Full,
        RedrawPolicy::OnChange if needs_full => Redraw::Full,
        RedrawPolicy::OnChange if has_changes => Redraw::Runs,
        RedrawPolicy::OnChange => Redraw::Skip,
    }
}

/// Drives a [`Game`] at a fixed frame rate against the terminal.
///
/// Owns the canvas, the previous frame's snapshot, and the running flag.
/// State machine is `Stopped -> Running -> Stopped`; a loop instance can be
/// run again after it stops.
pub struct FrameLoop {
    policy: RedrawPolicy,
    input: InputBridge,
    canvas: Canvas,
    prev: Canvas,
    ctl: LoopCtl,
}

impl FrameLoop {
    pub fn new(policy: RedrawPolicy, mode: InputMode) -> Self {
        Self {
            policy,
            input: InputBridge::new(mode),
            canvas: Canvas::new(0, 0),
            prev: Canvas::new(0, 0),
            ctl: LoopCtl::new(),
        }
    }

    /// Set the initial frame rate; games can still change it from hooks.
    pub fn with_fps(mut self, fps: f32) -> Self {
        self.ctl.set_fps(fps);
        self
    }

    /// Run `game` until a hook calls [`LoopCtl::stop`].
    ///
    /// Acquires the terminal session (raw mode, alternate screen) for the
    /// whole run; the session restores the terminal on every exit path,
    /// including panics out of game hooks.
    pub fn run(&mut self, game: &mut impl Game) -> Result<()> {
        let (w, h) =
            crossterm::terminal::size().context("cannot query terminal dimensions")?;
        self.canvas = Canvas::new(w, h);
        self.prev = Canvas::new(w, h);

        let mut session = TerminalSession::enter()?;
        let mut presenter = TermPresenter::new();

        self.ctl.running = true;
        game.load(&mut self.ctl);

        let mut needs_full = true;
        while self.ctl.running {
            let frame_start = Instant::now();

            // Track terminal resizes; a resize invalidates the snapshot.
            let (w, h) = crossterm::terminal::size()
                .unwrap_or((self.canvas.width(), self.canvas.height()));
            if w != self.canvas.width() || h != self.canvas.height() {
                self.canvas.resize(w, h);
                self.prev.resize(w, h);
                needs_full = true;
            }

            game.update(&mut self.ctl);
            if !self.ctl.running {
                break;
            }

            // Snapshot by swap: prev keeps the frame just shown, the working
            // canvas starts blank for the draw hook.
            std::mem::swap(&mut self.canvas, &mut self.prev);
            self.canvas.clear();
            game.draw(&mut self.canvas);
            if !self.ctl.running {
                break;
            }

            let runs = match self.policy {
                RedrawPolicy::OnChange if !needs_full => changed_runs(&self.prev, &self.canvas),
                _ => Vec::new(),
            };
            match redraw_decision(self.policy, needs_full, !runs.is_empty()) {
                Redraw::Full => presenter.present_full(&self.canvas)?,
                Redraw::Runs => presenter.present_runs(&self.canvas, &runs)?,
                Redraw::Skip => {}
            }
            needs_full = false;

            // Input delivery doubles as the frame sleep: the bridge waits
            // out whatever is left of the frame period.
            let budget = self
                .ctl
                .frame_period()
                .saturating_sub(frame_start.elapsed());
            self.input.pump(budget, game, &mut self.ctl)?;
        }

        session.exit()?;
        Ok(())
    }
}
