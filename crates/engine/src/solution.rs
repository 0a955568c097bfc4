//! Placements and complete tilings.

use smallvec::SmallVec;
use tetrofit_core::{Board, Mask, Piece};

/// Most pieces one search can place
pub const MAX_PIECES: usize = Piece::ALL.len();

/// A piece's orientation shifted to its board offset.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Placement {
    pub piece: Piece,
    pub mask: Mask,
}

/// Owned copy of one complete tiling, placements in the order they were made.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Solution {
    placements: SmallVec<[Placement; MAX_PIECES]>,
}

impl Solution {
    pub fn new(placements: &[Placement]) -> Self {
        Self {
            placements: SmallVec::from_slice(placements),
        }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Union of every placement mask
    pub fn coverage(&self) -> Mask {
        self.placements.iter().fold(0, |acc, p| acc | p.mask)
    }

    /// No two placements share a cell
    pub fn is_disjoint(&self) -> bool {
        let mut seen: Mask = 0;
        for placement in &self.placements {
            if placement.mask & seen != 0 {
                return false;
            }
            seen |= placement.mask;
        }
        true
    }

    /// Disjoint and covering every cell of `board`
    pub fn is_exact_cover(&self, board: &Board) -> bool {
        self.is_disjoint() && self.coverage() == board.full_mask()
    }
}

impl From<&[Placement]> for Solution {
    fn from(placements: &[Placement]) -> Self {
        Self::new(placements)
    }
}
