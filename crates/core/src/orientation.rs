//! Orientation generation - every distinct rotation/mirror of a piece,
//! encoded as a mask with the board's row stride so it can be shifted
//! straight onto the board.

use smallvec::SmallVec;
use tracing::debug;

use crate::board::{Board, Mask};
use crate::piece::{Piece, PieceShape};

/// 4 rotations x 2 mirror states
pub const MAX_ORIENTATIONS: usize = 8;

/// Row stride of the scratch frame used while rotating and mirroring.
/// Wide enough for any tetromino extent and equal to the standard board width.
const FRAME_STRIDE: u32 = 4;
const FRAME_ROW: Mask = (1 << FRAME_STRIDE) - 1;

/// One placement-ready form of a piece. `mask` has its top-left bounding box
/// corner at bit 0 and uses the board's row stride.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Orientation {
    pub mask: Mask,
    pub width: u8,
    pub height: u8,
}

impl Orientation {
    /// The mask moved so its bounding box starts at column `x`, row `y`.
    #[inline(always)]
    pub fn shifted(&self, board: &Board, x: u8, y: u8) -> Mask {
        self.mask << board.index(x, y)
    }

    /// Every (x, y) offset that keeps the bounding box on the board,
    /// row by row. Empty if the orientation is larger than the board.
    pub fn offsets(&self, board: &Board) -> impl Iterator<Item = (u8, u8)> {
        let fits = self.width <= board.width() && self.height <= board.height();
        let (x_max, y_max) = if fits {
            (board.width() - self.width, board.height() - self.height)
        } else {
            (0, 0)
        };
        (0..=y_max)
            .flat_map(move |y| (0..=x_max).map(move |x| (x, y)))
            .filter(move |_| fits)
    }

    /// `#`/space block of `height` lines, `width` columns each.
    pub fn render(&self, board: &Board) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(if self.mask & board.cell(x, y) != 0 { '#' } else { ' ' });
            }
            out.push('\n');
        }
        out
    }
}

/// Running shape while walking the symmetry group.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Frame {
    mask: Mask,
    width: u8,
    height: u8,
}

impl Frame {
    fn from_shape(shape: &PieceShape) -> Self {
        let mask = shape
            .cells()
            .fold(0, |acc, (x, y)| acc | Self::bit(x, y));
        Self {
            mask,
            width: shape.width,
            height: shape.height,
        }
    }

    #[inline(always)]
    fn bit(x: u8, y: u8) -> Mask {
        1 << (x as u32 + FRAME_STRIDE * y as u32)
    }

    #[inline(always)]
    fn is_set(&self, x: u8, y: u8) -> bool {
        self.mask & Self::bit(x, y) != 0
    }

    /// Swap row r with row height-1-r. Applying it twice is the identity.
    fn mirror(&mut self) {
        for row in 0..(self.height / 2) as u32 {
            let bot_shift = FRAME_STRIDE * row;
            let top_shift = FRAME_STRIDE * (self.height as u32 - 1 - row);
            let bot_mask = FRAME_ROW << bot_shift;
            let top_mask = FRAME_ROW << top_shift;
            let bot = (self.mask & bot_mask) >> bot_shift;
            let top = (self.mask & top_mask) >> top_shift;
            self.mask = (self.mask & !(bot_mask | top_mask)) | (top << bot_shift) | (bot << top_shift);
        }
    }

    /// Quarter turn: cell (x, y) moves to (height-1-y, x).
    fn rotate(&mut self) {
        let mut rotated = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_set(x, y) {
                    rotated |= Self::bit(self.height - 1 - y, x);
                }
            }
        }
        *self = Self {
            mask: rotated,
            width: self.height,
            height: self.width,
        };
    }

    /// Re-encode with the board stride; `None` when it cannot fit the board.
    fn to_orientation(self, board: &Board) -> Option<Orientation> {
        if self.width > board.width() || self.height > board.height() {
            return None;
        }
        let mut mask = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_set(x, y) {
                    mask |= board.cell(x, y);
                }
            }
        }
        Some(Orientation {
            mask,
            width: self.width,
            height: self.height,
        })
    }
}

/// The distinct orientations of one piece on one board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrientationSet {
    piece: Piece,
    orientations: SmallVec<[Orientation; MAX_ORIENTATIONS]>,
}

impl OrientationSet {
    /// Walk all 8 symmetries of the square and keep the distinct ones.
    /// Orientations whose bounding box exceeds the board are left out.
    pub fn generate(piece: Piece, board: &Board) -> Self {
        let mut orientations = SmallVec::<[Orientation; MAX_ORIENTATIONS]>::new();
        let mut frame = Frame::from_shape(&piece.shape());

        for _ in 0..4 {
            for _ in 0..2 {
                if let Some(candidate) = frame.to_orientation(board) {
                    if !orientations.contains(&candidate) {
                        debug!(
                            piece = %piece,
                            width = candidate.width,
                            height = candidate.height,
                            "orientation {}:\n{}",
                            orientations.len(),
                            candidate.render(board)
                        );
                        orientations.push(candidate);
                    }
                }
                frame.mirror();
            }
            frame.rotate();
        }

        debug!(piece = %piece, board = %board, count = orientations.len(), "orientations generated");
        Self {
            piece,
            orientations,
        }
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn len(&self) -> usize {
        self.orientations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orientations.is_empty()
    }

    pub fn as_slice(&self) -> &[Orientation] {
        &self.orientations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Orientation> {
        self.orientations.iter()
    }
}

impl<'a> IntoIterator for &'a OrientationSet {
    type Item = &'a Orientation;
    type IntoIter = std::slice::Iter<'a, Orientation>;

    fn into_iter(self) -> Self::IntoIter {
        self.orientations.iter()
    }
}
