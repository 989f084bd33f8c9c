//! Character canvas: the in-memory grid holding one frame's visual state.

use std::io::Write;

use anyhow::Result;

/// The glyph an empty cell holds.
pub const BLANK: char = ' ';

/// 2D grid of single-character cells, row-major.
///
/// Writes are bounds-checked and out-of-range or unprintable writes are
/// silently dropped, so rasterization code never has to pre-clip. Structural
/// equality is derived because the on-change redraw policy compares whole
/// frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Write one glyph at `(x, y)`.
    ///
    /// Out-of-bounds coordinates and control characters are discarded without
    /// error; callers rely on this permissive contract.
    pub fn set(&mut self, x: i32, y: i32, glyph: char) {
        if glyph.is_control() {
            return;
        }
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = glyph;
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Reset every cell to [`BLANK`]. Idempotent.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Resize to the terminal's current dimensions.
    ///
    /// Keeps the underlying allocation when possible. Content is reset blank,
    /// the next frame redraws it anyway.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(len, BLANK);
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks((self.width as usize).max(1))
    }

    /// Dump the grid row-major into `sink`, one line per row, rows separated
    /// by `\n` with no trailing newline ("simple" sink mode).
    pub fn present(&self, sink: &mut impl Write) -> Result<()> {
        let mut line = String::with_capacity(self.width as usize + 1);
        for (y, row) in self.rows().enumerate() {
            line.clear();
            if y > 0 {
                line.push('\n');
            }
            line.extend(row.iter());
            sink.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}
