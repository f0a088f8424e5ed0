//! A player's fleet and the placement rules applied to it.

use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::board::BoardSize;
use crate::common::{GameError, ShotOutcome};
use crate::config::FLEET;
use crate::counter::Counter;
use crate::position::Position;
use crate::random::choice;
use crate::ship::{compute_coordinates, Orientation, Ship, ShipDef};

/// Ordered collection of ships owned by one player.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Fleet {
    ships: Vec<Ship>,
}

/// Build the standard fleet: carrier, battleship, cruiser, submarine and
/// destroyer, all unplaced.
pub fn create_ships() -> Fleet {
    Fleet::from_defs(&FLEET)
}

impl Fleet {
    /// Fleet of fresh ships, one per definition, in order.
    pub fn from_defs(defs: &[ShipDef]) -> Self {
        Self {
            ships: defs.iter().copied().map(Ship::new).collect(),
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index)
    }

    pub fn ship_mut(&mut self, index: usize) -> Option<&mut Ship> {
        self.ships.get_mut(index)
    }

    /// First ship with the given name.
    pub fn find(&self, name: &str) -> Option<&Ship> {
        self.ships.iter().find(|s| s.name() == name)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    /// `true` when every ship is destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.ships.iter().all(Ship::is_destroyed)
    }

    /// Number of ships still afloat.
    pub fn remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_destroyed()).count()
    }

    /// Index of the placed ship occupying `pos`.
    pub fn ship_at(&self, pos: Position) -> Option<usize> {
        self.ships.iter().position(|s| s.occupies(pos))
    }

    /// Resolve a shot at `pos` against the fleet.
    pub fn register_hit(&mut self, pos: Position) -> ShotOutcome {
        let Some(ship) = self.ships.iter_mut().find(|s| s.occupies(pos)) else {
            return ShotOutcome::Miss;
        };
        ship.register_hit(pos);
        if ship.is_destroyed() {
            ShotOutcome::Sunk(ship.name())
        } else {
            ShotOutcome::Hit
        }
    }

    /// Validate placing ship `index` at `origin`: every cell must be on the
    /// board and free of other placed ships. The ship's own current cells do
    /// not count, so a placed ship may be moved.
    pub fn check_placement(
        &self,
        index: usize,
        origin: Position,
        orientation: Orientation,
        board: BoardSize,
    ) -> Result<(), GameError> {
        let ship = self.ships.get(index).ok_or(GameError::InvalidIndex)?;
        let cells = compute_coordinates(origin, ship.size(), orientation);
        if !cells.iter().all(|&c| board.contains(c)) {
            return Err(GameError::OutOfBounds);
        }
        let overlaps = self
            .ships
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .any(|(_, other)| cells.iter().any(|&c| other.occupies(c)));
        if overlaps {
            return Err(GameError::Overlaps);
        }
        Ok(())
    }

    /// Validate and then place ship `index`.
    pub fn place(
        &mut self,
        index: usize,
        origin: Position,
        orientation: Orientation,
        board: BoardSize,
    ) -> Result<(), GameError> {
        self.check_placement(index, origin, orientation, board)?;
        let ship = &mut self.ships[index];
        ship.place(origin, orientation);
        debug!("placed {} at {} ({:?})", ship.name(), origin, orientation);
        Ok(())
    }

    /// `true` if any cell is claimed by more than one placed ship.
    pub fn has_overlap(&self) -> bool {
        let counter: Counter<Position> = self
            .ships
            .iter()
            .filter_map(Ship::coordinates)
            .flatten()
            .collect();
        counter.max_count().map(|n| n > 1).unwrap_or(false)
    }

    /// Uniformly pick one of every valid placement for ship `index`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        index: usize,
        board: BoardSize,
    ) -> Result<(Position, Orientation), GameError> {
        if index >= self.ships.len() {
            return Err(GameError::InvalidIndex);
        }
        let candidates: Vec<(Position, Orientation)> = board
            .cells()
            .flat_map(|p| [(p, Orientation::Row), (p, Orientation::Column)])
            .filter(|&(p, o)| self.check_placement(index, p, o, board).is_ok())
            .collect();
        choice(rng, &candidates)
            .copied()
            .map_err(|_| GameError::UnableToPlaceShip)
    }

    /// Place every ship not yet on the board at a random valid spot.
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        board: BoardSize,
    ) -> Result<(), GameError> {
        for index in 0..self.ships.len() {
            if self.ships[index].is_placed() {
                continue;
            }
            let (origin, orientation) = self.random_placement(rng, index, board)?;
            self.place(index, origin, orientation, board)?;
        }
        Ok(())
    }
}

impl Default for Fleet {
    fn default() -> Self {
        create_ships()
    }
}
