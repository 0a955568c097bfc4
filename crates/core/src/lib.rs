//! Tetrofit core crate - piece catalog, board geometry and orientation masks.

mod board;
mod orientation;
mod piece;

pub use board::{Board, BoardError, Mask};
pub use orientation::{Orientation, OrientationSet, MAX_ORIENTATIONS};
pub use piece::{Piece, PieceShape};
