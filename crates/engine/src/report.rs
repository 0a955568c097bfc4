//! Text rendering of solutions. Rendering re-checks that no two placements
//! claim the same cell; a clash means the search itself is broken.

use std::io::{self, Write};

use tetrofit_core::Board;
use thiserror::Error;

use crate::sink::SolutionSink;
use crate::solution::{Placement, MAX_PIECES};

/// Glyph for the piece placed at each depth of the search.
pub const SLOT_GLYPHS: [char; MAX_PIECES] = ['.', '%', '=', '#', '@', '$', '*'];

/// Printed after every solution grid.
pub const SEPARATOR: &str = "--------";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("internal error: overlapping pieces at ({x}, {y}), slots {first} and {second}")]
    Overlap {
        x: u8,
        y: u8,
        first: usize,
        second: usize,
    },
    #[error("failed to write solution: {0}")]
    Io(#[from] io::Error),
}

impl ReportError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Overlap { .. } => 1,
            Self::Io(_) => 2,
        }
    }
}

/// Render `placements` as `height` lines of `width` glyphs, one glyph per
/// slot and a space for any uncovered cell.
pub fn render(board: &Board, placements: &[Placement]) -> Result<String, ReportError> {
    let mut out = String::with_capacity((board.width() as usize + 1) * board.height() as usize);
    for y in 0..board.height() {
        for x in 0..board.width() {
            let cell = board.cell(x, y);
            let mut owner = None;
            for (slot, placement) in placements.iter().enumerate() {
                if placement.mask & cell == 0 {
                    continue;
                }
                if let Some(first) = owner {
                    return Err(ReportError::Overlap {
                        x,
                        y,
                        first,
                        second: slot,
                    });
                }
                owner = Some(slot);
            }
            out.push(match owner {
                Some(slot) => SLOT_GLYPHS.get(slot).copied().unwrap_or('?'),
                None => ' ',
            });
        }
        out.push('\n');
    }
    Ok(out)
}

/// Writes every solution it receives:
///
/// ```text
/// Found solution #1:
/// ..%%
/// ..%%
/// --------
/// ```
pub struct SolutionReporter<W: Write> {
    out: W,
    board: Board,
    found: u64,
}

impl<W: Write> SolutionReporter<W> {
    pub fn new(out: W, board: Board) -> Self {
        Self {
            out,
            board,
            found: 0,
        }
    }

    /// Solutions written so far
    pub fn found(&self) -> u64 {
        self.found
    }

    pub fn flush(&mut self) -> Result<(), ReportError> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SolutionSink for SolutionReporter<W> {
    type Error = ReportError;

    fn accept(&mut self, placements: &[Placement]) -> Result<(), Self::Error> {
        let grid = render(&self.board, placements)?;
        self.found += 1;
        writeln!(self.out, "Found solution #{}:", self.found)?;
        self.out.write_all(grid.as_bytes())?;
        writeln!(self.out, "{SEPARATOR}")?;
        Ok(())
    }
}
