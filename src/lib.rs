//! gridframe: a minimal character-grid game framework for the terminal.
//!
//! Implement [`Game`], hand it to a [`FrameLoop`], and draw each frame with
//! the [`raster`] primitives. Raw mode, the alternate screen, and the
//! repaint strategy stay inside the crate.

pub mod canvas;
pub mod engine;
pub mod input;
pub mod raster;
pub mod term;

pub use canvas::Canvas;
pub use engine::{FrameLoop, Game, LoopCtl, RedrawPolicy};
pub use input::InputMode;
