//! Presenter: flushes a [`Canvas`] to the terminal, whole frames or only the
//! cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::canvas::{Canvas, BLANK};

/// A horizontal run of cells to repaint: `len` cells starting at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

/// Where presented frames go.
///
/// The frame loop talks to this trait; the real terminal implementation is
/// [`TermPresenter`], tests substitute a recording sink.
pub trait PresentSink {
    /// Repaint the whole frame ("simple" mode).
    fn present_full(&mut self, canvas: &Canvas) -> Result<()>;

    /// Repaint only the given runs, cursor-addressed ("addressed" mode).
    fn present_runs(&mut self, canvas: &Canvas, runs: &[Run]) -> Result<()>;
}

/// Writes frames to stdout via queued crossterm commands, one flush per
/// present.
pub struct TermPresenter {
    stdout: io::Stdout,
}

impl TermPresenter {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for TermPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentSink for TermPresenter {
    fn present_full(&mut self, canvas: &Canvas) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut line = String::with_capacity(canvas.width() as usize + 2);
        for (y, row) in canvas.rows().enumerate() {
            line.clear();
            if y > 0 {
                line.push_str("\r\n");
            }
            line.extend(row.iter());
            self.stdout.queue(Print(&line))?;
        }
        self.stdout.flush()?;
        Ok(())
    }

    fn present_runs(&mut self, canvas: &Canvas, runs: &[Run]) -> Result<()> {
        let mut text = String::new();
        for run in runs {
            self.stdout.queue(cursor::MoveTo(run.x, run.y))?;
            text.clear();
            for dx in 0..run.len {
                text.push(
                    canvas
                        .get(i32::from(run.x + dx), i32::from(run.y))
                        .unwrap_or(BLANK),
                );
            }
            self.stdout.queue(Print(&text))?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

/// Coalesce the cells differing between `prev` and `next` into per-row runs.
///
/// A dimension mismatch marks every row of `next` fully dirty; the loop
/// avoids that case by forcing a full repaint on resize.
pub fn changed_runs(prev: &Canvas, next: &Canvas) -> Vec<Run> {
    let mut runs = Vec::new();

    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            runs.push(Run {
                x: 0,
                y,
                len: next.width(),
            });
        }
        return runs;
    }

    let w = i32::from(next.width());
    for y in 0..i32::from(next.height()) {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            runs.push(Run {
                x: start as u16,
                y: y as u16,
                len: (x - start) as u16,
            });
        }
    }

    runs
}
