//! Board dimensions and the per-cell shot record.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::GameError;
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_CELLS};
use crate::position::Position;

/// Width and height of a rectangular board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSize {
    pub width: i32,
    pub height: i32,
}

impl BoardSize {
    /// Unchecked dimensions. Use [`BoardSize::try_new`] for runtime input.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Dimensions that are positive and at most `MAX_BOARD_CELLS` in area.
    pub fn try_new(width: i32, height: i32) -> Result<Self, GameError> {
        let board = Self::new(width, height);
        board.validate()?;
        Ok(board)
    }

    /// Check the dimensions [`BoardSize::try_new`] would accept.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GameError::InvalidBoardSize);
        }
        match self.checked_area() {
            Some(n) if n <= MAX_BOARD_CELLS => Ok(()),
            _ => Err(GameError::InvalidBoardSize),
        }
    }

    fn checked_area(&self) -> Option<usize> {
        let w = usize::try_from(self.width.max(0)).ok()?;
        let h = usize::try_from(self.height.max(0)).ok()?;
        w.checked_mul(h)
    }

    /// `true` if `pos` lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Number of cells, saturating at `usize::MAX`.
    pub fn area(&self) -> usize {
        self.checked_area().unwrap_or(usize::MAX)
    }

    /// Flat index of an on-board `pos`.
    pub fn index_of(&self, pos: Position) -> Result<usize, GameError> {
        if !self.contains(pos) {
            return Err(GameError::OutOfBounds);
        }
        pos.y
            .checked_mul(self.width)
            .and_then(|row| row.checked_add(pos.x))
            .and_then(|index| usize::try_from(index).ok())
            .ok_or(GameError::OutOfBounds)
    }

    /// Position stored at flat `index`.
    pub fn position_of(&self, index: usize) -> Result<Position, GameError> {
        if index >= self.area() {
            return Err(GameError::OutOfBounds);
        }
        let index = i32::try_from(index).map_err(|_| GameError::OutOfBounds)?;
        Ok(Position::delinearize(index, self.width))
    }

    /// Every cell in index order.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let width = self.width;
        let end = i32::try_from(self.area()).unwrap_or(i32::MAX);
        (0..end).map(move |i| Position::delinearize(i, width))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

/// Cells already fired upon, stored flat by linearized index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "RawShotGrid"))]
pub struct ShotGrid {
    size: BoardSize,
    cells: Vec<bool>,
}

/// Unvalidated wire form of a [`ShotGrid`].
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawShotGrid {
    size: BoardSize,
    cells: Vec<bool>,
}

#[cfg(feature = "std")]
impl TryFrom<RawShotGrid> for ShotGrid {
    type Error = GameError;

    fn try_from(raw: RawShotGrid) -> Result<Self, Self::Error> {
        raw.size.validate()?;
        if raw.cells.len() != raw.size.area() {
            return Err(GameError::CorruptShotGrid);
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl ShotGrid {
    /// Empty record for a board accepted by [`BoardSize::validate`].
    pub fn new(size: BoardSize) -> Result<Self, GameError> {
        size.validate()?;
        Ok(Self::empty(size))
    }

    /// Caller guarantees `size` has been validated.
    pub(crate) fn empty(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![false; size.area()],
        }
    }

    /// Whether `pos` has been shot at. Off-board cells are never shot.
    pub fn is_shot(&self, pos: Position) -> bool {
        self.size
            .index_of(pos)
            .ok()
            .and_then(|i| self.cells.get(i).copied())
            .unwrap_or(false)
    }

    /// Record a shot at `pos`.
    pub fn mark(&mut self, pos: Position) -> Result<(), GameError> {
        let idx = self.size.index_of(pos)?;
        let cell = self.cells.get_mut(idx).ok_or(GameError::CorruptShotGrid)?;
        if *cell {
            return Err(GameError::AlreadyShot);
        }
        *cell = true;
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Cells not yet shot, in index order.
    pub fn remaining(&self) -> Vec<Position> {
        self.size.cells().filter(|&p| !self.is_shot(p)).collect()
    }
}
