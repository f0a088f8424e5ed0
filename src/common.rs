//! Common types for the rules core: errors and shot outcomes.

use crate::game::Stage;

/// Result of a shot resolved against a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    /// No ship occupies the target cell.
    Miss,
    /// A ship was hit but is still afloat.
    Hit,
    /// The shot destroyed a ship, carrying its name.
    Sunk(&'static str),
}

impl ShotOutcome {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by collaborator operations (placement, firing, utilities).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// `choice` or `Counter::max_count` called on empty input.
    EmptyInput,
    /// Ship index is out of range for the fleet.
    InvalidIndex,
    /// A coordinate falls outside the board.
    OutOfBounds,
    /// Ship placement overlaps another placed ship.
    Overlaps,
    /// No valid placement exists for the ship.
    UnableToPlaceShip,
    /// Ship definitions must occupy at least one cell.
    ZeroSizedShip,
    /// Ship size does not fit an `i32` coordinate step.
    ShipTooLarge,
    /// Board dimensions are non-positive or exceed `MAX_BOARD_CELLS`.
    InvalidBoardSize,
    /// Stored shot cells do not match the board area.
    CorruptShotGrid,
    /// The target cell was already shot at.
    AlreadyShot,
    /// Operation is not valid in the current stage.
    WrongStage { expected: Stage, actual: Stage },
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::EmptyInput => write!(f, "Input sequence is empty"),
            GameError::InvalidIndex => write!(f, "Ship index is out of range"),
            GameError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            GameError::Overlaps => write!(f, "Ship placement overlaps with another ship"),
            GameError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            GameError::ZeroSizedShip => write!(f, "Ship size must be at least one cell"),
            GameError::ShipTooLarge => write!(f, "Ship size exceeds the coordinate range"),
            GameError::InvalidBoardSize => write!(f, "Board dimensions are invalid or too large"),
            GameError::CorruptShotGrid => write!(f, "Shot grid does not match its board size"),
            GameError::AlreadyShot => write!(f, "Cell was already shot at"),
            GameError::WrongStage { expected, actual } => {
                write!(f, "Expected stage {:?}, game is in {:?}", expected, actual)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
