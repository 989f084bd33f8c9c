//! Terminal backend: session ownership and frame presentation.
//!
//! Everything process-global about the terminal (raw mode, alternate screen)
//! lives behind [`TerminalSession`]; [`TermPresenter`] only writes frames.

pub mod presenter;
pub mod session;

pub use presenter::{changed_runs, PresentSink, Run, TermPresenter};
pub use session::TerminalSession;
