//! board geometry - the whole board fits in one u64
//! bit index = x + width * y, set bit = occupied

use thiserror::Error;

/// Occupancy bitmask over a [`Board`].
pub type Mask = u64;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("board {width}x{height} has no cells")]
    Empty { width: u8, height: u8 },
    #[error("board {width}x{height} has more than {} cells", Mask::BITS)]
    TooLarge { width: u8, height: u8 },
}

/// Rectangular board of `width` columns and `height` rows.
/// Row 0 is the top row when rendered.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    width: u8,
    height: u8,
}

impl Board {
    /// 4x7: exactly the area of the seven tetrominoes.
    pub const STANDARD: Board = Board {
        width: 4,
        height: 7,
    };

    pub fn new(width: u8, height: u8) -> Result<Self, BoardError> {
        let area = width as u32 * height as u32;
        if area == 0 {
            return Err(BoardError::Empty { width, height });
        }
        if area > Mask::BITS {
            return Err(BoardError::TooLarge { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline(always)]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline(always)]
    pub fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Bit index of cell (x, y)
    #[inline(always)]
    pub fn index(&self, x: u8, y: u8) -> u32 {
        x as u32 + self.width as u32 * y as u32
    }

    /// Single-bit mask for cell (x, y)
    #[inline(always)]
    pub fn cell(&self, x: u8, y: u8) -> Mask {
        1 << self.index(x, y)
    }

    /// Every cell set - the "fully covered" target.
    pub fn full_mask(&self) -> Mask {
        let area = self.area();
        if area == Mask::BITS {
            Mask::MAX
        } else {
            (1 << area) - 1
        }
    }

    /// All (x, y) cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Render a mask as `height` lines of `#` and spaces.
    pub fn render_mask(&self, mask: Mask) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(if mask & self.cell(x, y) != 0 { '#' } else { ' ' });
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
