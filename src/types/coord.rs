//! Hexagonal and double-height offset coordinates.
//!
//! Puzzles are stored on an axial hex basis `(i, j)`: `i` steps "forward"
//! (down-right on screen) and `j` steps "down" (down-left). Text files use a
//! staggered rectangular layout instead, where each hex row spans two text
//! lines and only every other text column is populated:
//!
//! ```text
//!  rect (col, row)             text lines
//!  0,0     2,0     4,0           # # #
//!      1,0     3,0              # . $ #
//!  0,1     2,1     4,1           # @ #
//!      1,1     3,1                # #
//! ```
//!
//! Moving one text column left or right changes the hex row on screen, so
//! the rectangular form is only used while reading or drawing text grids.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// An axial hex coordinate.
///
/// Ordered back-to-front for drawing: by `i + j`, ties broken by `i`.
/// Serialized as a two-element array `[i, j]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct HexCoord {
    i: i32,
    j: i32,
}

impl HexCoord {
    pub const ORIGIN: HexCoord = HexCoord { i: 0, j: 0 };

    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    pub fn i(&self) -> i32 {
        self.i
    }

    pub fn j(&self) -> i32 {
        self.j
    }

    pub fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }

    /// Translate so that `pivot` becomes the origin.
    pub fn centered_at(self, pivot: HexCoord) -> HexCoord {
        HexCoord::new(self.i - pivot.i, self.j - pivot.j)
    }

    /// The six cells sharing an edge with this one.
    pub fn neighbors(self) -> [HexCoord; 6] {
        let HexCoord { i, j } = self;
        [
            HexCoord::new(i - 1, j - 1),
            HexCoord::new(i - 1, j),
            HexCoord::new(i, j - 1),
            HexCoord::new(i, j + 1),
            HexCoord::new(i + 1, j),
            HexCoord::new(i + 1, j + 1),
        ]
    }
}

impl Ord for HexCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.i + self.j, self.i).cmp(&(other.i + other.j, other.i))
    }
}

impl PartialOrd for HexCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<[i32; 2]> for HexCoord {
    fn from([i, j]: [i32; 2]) -> Self {
        Self { i, j }
    }
}

impl From<HexCoord> for [i32; 2] {
    fn from(coord: HexCoord) -> Self {
        [coord.i, coord.j]
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// A position in a double-height offset text grid.
///
/// `col` is the text column; `row` is the hex row, i.e. a pair of text lines.
/// Even columns sit on the upper line of the pair, odd columns on the lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectCoord {
    pub col: u32,
    pub row: u32,
}

impl RectCoord {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Convert to the equivalent hex coordinate; both systems share (0, 0).
    ///
    /// Every two columns contribute `+i, -j`, an odd column one more `+i`,
    /// and every row `+i, +j`.
    pub fn to_hex(self) -> HexCoord {
        let half = (self.col >> 1) as i32;
        let odd = (self.col & 1) as i32;
        let row = self.row as i32;
        HexCoord::new(half + odd + row, row - half)
    }

    /// Inverse of [`RectCoord::to_hex`], translated by an origin.
    ///
    /// Returns `None` when the translated cell falls left of or above the
    /// rectangular origin.
    pub fn from_hex(hex: HexCoord, origin_col: i32, origin_row: i32) -> Option<RectCoord> {
        let col = hex.i() - hex.j();
        let row = hex.j() + col.div_euclid(2) + origin_row;
        let col = col + origin_col;

        Some(RectCoord {
            col: u32::try_from(col).ok()?,
            row: u32::try_from(row).ok()?,
        })
    }

    /// Logical text line this cell is drawn on.
    pub fn text_line(self) -> u32 {
        2 * self.row + (self.col & 1)
    }
}
