//! The hosted-application contract.

use crossterm::event::KeyCode;

use crate::canvas::Canvas;
use crate::engine::LoopCtl;

/// Implemented by the hosted game. Every hook defaults to a no-op, so a game
/// overrides only what it needs.
///
/// The engine never inspects game state; it only calls these hooks, in a
/// fixed per-frame order: `update`, `draw`, then input delivery. `load` runs
/// once before the first frame.
#[allow(unused_variables)]
pub trait Game {
    /// Called once, before the loop starts. Initialize state and pick a
    /// frame rate here.
    fn load(&mut self, ctl: &mut LoopCtl) {}

    /// Called once per frame, before drawing.
    fn update(&mut self, ctl: &mut LoopCtl) {}

    /// Called once per frame on a blank canvas; issue [`crate::raster`]
    /// calls here.
    fn draw(&mut self, canvas: &mut Canvas) {}

    /// Called for each delivered key press.
    fn on_key_press(&mut self, key: KeyCode, ctl: &mut LoopCtl) {}

    /// Called for each key release. Only [`crate::InputMode::EventPush`]
    /// delivers releases, and only on terminals that report them.
    fn on_key_release(&mut self, key: KeyCode) {}
}
