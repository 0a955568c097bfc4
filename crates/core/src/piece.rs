//! Piece types and canonical shape definitions for the seven tetrominoes.

/// Canonical definition of a piece: rows of `#` (filled) and ` ` (empty).
/// Row 0 is the top row.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PieceShape {
    pub rows: &'static [&'static str],
    pub width: u8,
    pub height: u8,
}

impl PieceShape {
    /// Is the cell at column `x`, row `y` filled?
    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        self.rows
            .get(y as usize)
            .and_then(|row| row.as_bytes().get(x as usize))
            .is_some_and(|&cell| cell != b' ')
    }

    /// Iterate the (x, y) coordinates of every filled cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.is_filled(x, y))
    }

    pub fn area(&self) -> u32 {
        self.cells().count() as u32
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub enum Piece {
    I,
    O,
    S,
    Z,
    L,
    J,
    T,
}

impl Piece {
    /// Catalog order. The search tries pieces in this order.
    pub const ALL: [Piece; 7] = [
        Piece::I,
        Piece::O,
        Piece::S,
        Piece::Z,
        Piece::L,
        Piece::J,
        Piece::T,
    ];

    /// Cells covered by every tetromino.
    pub const AREA: u32 = 4;

    pub const fn shape(self) -> PieceShape {
        match self {
            Piece::I => PieceShape {
                rows: &["####"],
                width: 4,
                height: 1,
            },
            Piece::O => PieceShape {
                rows: &["##", "##"],
                width: 2,
                height: 2,
            },
            Piece::S => PieceShape {
                rows: &["## ", " ##"],
                width: 3,
                height: 2,
            },
            Piece::Z => PieceShape {
                rows: &[" ##", "## "],
                width: 3,
                height: 2,
            },
            Piece::L => PieceShape {
                rows: &["###", "#  "],
                width: 3,
                height: 2,
            },
            Piece::J => PieceShape {
                rows: &["###", "  #"],
                width: 3,
                height: 2,
            },
            Piece::T => PieceShape {
                rows: &[" # ", "###"],
                width: 3,
                height: 2,
            },
        }
    }

    /// Position in [`Piece::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> char {
        match self {
            Piece::I => 'I',
            Piece::O => 'O',
            Piece::S => 'S',
            Piece::Z => 'Z',
            Piece::L => 'L',
            Piece::J => 'J',
            Piece::T => 'T',
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pieces() {
        assert_eq!(Piece::ALL.len(), 7);
        for (i, piece) in Piece::ALL.iter().enumerate() {
            assert_eq!(piece.index(), i);
        }
    }

    #[test]
    fn test_every_shape_is_a_tetromino() {
        for piece in Piece::ALL {
            assert_eq!(piece.shape().area(), Piece::AREA, "piece {piece}");
        }
    }

    #[test]
    fn test_shape_rows_match_dimensions() {
        for piece in Piece::ALL {
            let shape = piece.shape();
            assert_eq!(shape.rows.len(), shape.height as usize);
            for row in shape.rows {
                assert_eq!(row.len(), shape.width as usize, "piece {piece}");
            }
        }
    }

    #[test]
    fn test_t_cells() {
        let cells: Vec<_> = Piece::T.shape().cells().collect();
        assert_eq!(cells, vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_out_of_range_cell_is_empty() {
        let shape = Piece::O.shape();
        assert!(shape.is_filled(1, 1));
        assert!(!shape.is_filled(2, 0));
        assert!(!shape.is_filled(0, 2));
    }
}
