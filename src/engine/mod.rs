//! Frame loop and the hosted-game contract.

pub mod frame_loop;
pub mod game;

pub use frame_loop::{FrameLoop, LoopCtl, RedrawPolicy, DEFAULT_FPS};
pub use game::Game;
