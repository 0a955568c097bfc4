use tetrofit_core::{Board, Piece};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no pieces to place")]
    NoPieces,
    #[error("piece {0} listed more than once")]
    DuplicatePiece(Piece),
    #[error("pieces cover {pieces} cells but the board has {board}")]
    AreaMismatch { pieces: u32, board: u32 },
}

/// What to tile and with which pieces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub board: Board,
    pub pieces: Vec<Piece>,
}

impl SearchConfig {
    /// All seven tetrominoes on the 4x7 board.
    pub fn standard() -> Self {
        Self {
            board: Board::STANDARD,
            pieces: Piece::ALL.to_vec(),
        }
    }

    /// Pieces are tried in the order given. Their total area must match the
    /// board exactly, otherwise no placement can ever cover it.
    pub fn new(board: Board, pieces: &[Piece]) -> Result<Self, ConfigError> {
        if pieces.is_empty() {
            return Err(ConfigError::NoPieces);
        }
        for (i, piece) in pieces.iter().enumerate() {
            if pieces[..i].contains(piece) {
                return Err(ConfigError::DuplicatePiece(*piece));
            }
        }
        let area: u32 = pieces.iter().map(|p| p.shape().area()).sum();
        if area != board.area() {
            return Err(ConfigError::AreaMismatch {
                pieces: area,
                board: board.area(),
            });
        }
        Ok(Self {
            board,
            pieces: pieces.to_vec(),
        })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::standard()
    }
}
