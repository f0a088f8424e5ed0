//! Grid coordinates and their flat-index encoding.

use core::fmt;

/// Immutable 2D board coordinate. `x` grows along a row, `y` along a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `true` iff both coordinates match.
    pub fn equals(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Flat index `y * width + x`. No bounds validation.
    pub fn linearize(&self, width: i32) -> i32 {
        self.y * width + self.x
    }

    /// Inverse of [`Position::linearize`] for the same `width`.
    ///
    /// `width` must be positive.
    pub fn delinearize(index: i32, width: i32) -> Self {
        Self {
            x: index.rem_euclid(width),
            y: index.div_euclid(width),
        }
    }

    /// Position shifted by (`dx`, `dy`).
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
