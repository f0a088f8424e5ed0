//! Commonly used types and utilities for ease of import.

pub use crate::{
    create_ships, Fleet, GameError, GameState, Orientation, Player, Position, Session, Ship,
    ShotOutcome, Stage,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
