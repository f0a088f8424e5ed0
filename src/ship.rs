//! Ship definitions, occupied coordinates and hit tracking.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::GameError;
use crate::position::Position;

/// Direction a ship extends from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells step +1 in `x`.
    #[default]
    Row,
    /// Cells step +1 in `y`.
    Column,
}

impl Orientation {
    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Row => Orientation::Column,
            Orientation::Column => Orientation::Row,
        }
    }

    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Row => (1, 0),
            Orientation::Column => (0, 1),
        }
    }
}

/// Kind of ship: name and number of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipDef {
    name: &'static str,
    size: usize,
}

impl ShipDef {
    /// Create a new ship definition.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or larger than `i32::MAX`. Use
    /// [`ShipDef::try_new`] for runtime input.
    pub const fn new(name: &'static str, size: usize) -> Self {
        assert!(size > 0, "ship size must be at least one cell");
        assert!(size <= i32::MAX as usize, "ship size exceeds the coordinate range");
        Self { name, size }
    }

    /// Fallible variant of [`ShipDef::new`]. Sizes must lie in
    /// `1..=i32::MAX` so every cell offset is a valid coordinate step.
    pub fn try_new(name: &'static str, size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::ZeroSizedShip);
        }
        if i32::try_from(size).is_err() {
            return Err(GameError::ShipTooLarge);
        }
        Ok(Self { name, size })
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's size in cells.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Cells a ship of `size` would occupy from `origin`.
///
/// Board edges and other ships are not considered; the placement layer must
/// reject coordinates that fall outside the board or overlap. At most
/// `i32::MAX` cells are generated.
pub fn compute_coordinates(origin: Position, size: usize, orientation: Orientation) -> Vec<Position> {
    let (dx, dy) = orientation.step();
    let steps = i32::try_from(size).unwrap_or(i32::MAX);
    (0..steps)
        .map(|d| origin.offset(dx * d, dy * d))
        .collect()
}

/// A placeable, orientable, damageable ship.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    def: ShipDef,
    orientation: Orientation,
    origin: Option<Position>,
    placed: bool,
    hit_mask: Vec<bool>,
    destroyed: bool,
}

impl Ship {
    /// Unplaced ship with no hits, oriented along a row.
    pub fn new(def: ShipDef) -> Self {
        Self {
            def,
            orientation: Orientation::default(),
            origin: None,
            placed: false,
            hit_mask: vec![false; def.size()],
            destroyed: false,
        }
    }

    pub fn def(&self) -> ShipDef {
        self.def
    }

    pub fn name(&self) -> &'static str {
        self.def.name()
    }

    pub fn size(&self) -> usize {
        self.def.size()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Anchor cell, `None` while unplaced.
    pub fn origin(&self) -> Option<Position> {
        self.origin
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Per-cell hit flags, indexed like [`Ship::coordinates`].
    pub fn hit_mask(&self) -> &[bool] {
        &self.hit_mask
    }

    pub fn hits_taken(&self) -> usize {
        self.hit_mask.iter().filter(|&&h| h).count()
    }

    /// Toggle between `Row` and `Column`.
    pub fn swap_orientation(&mut self) {
        self.orientation = self.orientation.flipped();
    }

    /// Anchor the ship at `origin`. Bounds and overlap are the caller's
    /// concern.
    pub fn place(&mut self, origin: Position, orientation: Orientation) {
        self.origin = Some(origin);
        self.orientation = orientation;
        self.placed = true;
    }

    /// Lift the ship off the board. Hit state is kept.
    pub fn unplace(&mut self) {
        self.origin = None;
        self.placed = false;
    }

    /// Occupied cells, or `None` if the ship has not been placed.
    pub fn coordinates(&self) -> Option<Vec<Position>> {
        self.origin
            .map(|origin| compute_coordinates(origin, self.size(), self.orientation))
    }

    /// `true` if `pos` is one of the ship's cells.
    pub fn occupies(&self, pos: Position) -> bool {
        self.coordinates()
            .map(|coords| coords.contains(&pos))
            .unwrap_or(false)
    }

    /// Mark the cell at `pos` as hit. Returns `false` (and changes nothing)
    /// when the ship does not occupy `pos`.
    pub fn register_hit(&mut self, pos: Position) -> bool {
        let matched = self
            .coordinates()
            .and_then(|coords| coords.iter().position(|p| p.equals(&pos)));
        if let Some(idx) = matched {
            self.hit_mask[idx] = true;
        }
        if self.health() == 0.0 {
            self.destroyed = true;
        }
        matched.is_some()
    }

    /// Fraction of cells not yet hit, in `[0, 1]`.
    pub fn health(&self) -> f64 {
        let intact = self.size() - self.hits_taken();
        intact as f64 / self.size() as f64
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {:?}, orientation: {:?}, hits: {}/{}, destroyed: {} }}",
            self.name(),
            self.origin,
            self.orientation,
            self.hits_taken(),
            self.size(),
            self.destroyed,
        )
    }
}
