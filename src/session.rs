//! A single match: both fleets, the stage/turn state and shot history.
//!
//! `Session` is the orchestrating owner of all mutable game data. Placement
//! requests are validated against the board, and shots are resolved against
//! the opponent's fleet, with the state machine advanced as fleets fill up or
//! go down. Observers registered with [`Session::subscribe`] are notified after
//! every mutation.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, info};
use rand::Rng;

use crate::board::{BoardSize, ShotGrid};
use crate::common::{GameError, ShotOutcome};
use crate::fleet::{create_ships, Fleet};
use crate::game::{GameState, Player, Stage};
use crate::position::Position;
use crate::ship::Orientation;

/// Callbacks fired by a [`Session`] after it changes.
pub trait Observer {
    /// Stage, turn or winner may have changed.
    fn on_state_change(&mut self, _state: &GameState) {}

    /// `shooter` fired at `target` with the given outcome.
    fn on_shot(&mut self, _shooter: Player, _target: Position, _outcome: ShotOutcome) {}

    /// The session was reset to a fresh game.
    fn on_reset(&mut self) {}
}

/// Serializable copy of a session's state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSnapshot {
    pub state: GameState,
    pub board: BoardSize,
    /// Player one's fleet.
    pub ships: Fleet,
    /// Player two's fleet.
    pub enemy_ships: Fleet,
    /// Shots received by player one and player two respectively.
    pub shots: [ShotGrid; 2],
}

pub struct Session {
    board: BoardSize,
    state: GameState,
    fleets: [Fleet; 2],
    shots: [ShotGrid; 2],
    observers: Vec<Box<dyn Observer>>,
}

fn seat(player: Player) -> usize {
    match player {
        Player::One => 0,
        Player::Two => 1,
    }
}

impl Session {
    /// New match on the standard 10×10 board.
    pub fn new() -> Self {
        Self::build(BoardSize::default())
    }

    /// New match on a custom board. Rejects boards that fail
    /// [`BoardSize::validate`].
    pub fn with_board(board: BoardSize) -> Result<Self, GameError> {
        board.validate()?;
        Ok(Self::build(board))
    }

    fn build(board: BoardSize) -> Self {
        Self {
            board,
            state: GameState::new(),
            fleets: [create_ships(), create_ships()],
            shots: [ShotGrid::empty(board), ShotGrid::empty(board)],
            observers: Vec::new(),
        }
    }

    pub fn board(&self) -> BoardSize {
        self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Fleet owned by `player`.
    pub fn fleet(&self, player: Player) -> &Fleet {
        &self.fleets[seat(player)]
    }

    /// Rotate one of `player`'s ships during placement. A placed ship is
    /// re-validated in its new orientation and left untouched if it would
    /// leave the board or overlap another ship.
    pub fn swap_orientation(&mut self, player: Player, index: usize) -> Result<(), GameError> {
        self.require_stage(Stage::Initial)?;
        let board = self.board;
        let fleet = &mut self.fleets[seat(player)];
        let ship = fleet.ship(index).ok_or(GameError::InvalidIndex)?;
        let flipped = ship.orientation().flipped();
        match ship.origin() {
            Some(origin) => fleet.place(index, origin, flipped, board)?,
            None => {
                if let Some(ship) = fleet.ship_mut(index) {
                    ship.swap_orientation();
                }
            }
        }
        self.notify_state();
        Ok(())
    }

    /// Cells `player`'s board has been shot at.
    pub fn shots_received(&self, player: Player) -> &ShotGrid {
        &self.shots[seat(player)]
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    fn require_stage(&self, expected: Stage) -> Result<(), GameError> {
        let actual = self.state.stage();
        if actual != expected {
            return Err(GameError::WrongStage { expected, actual });
        }
        Ok(())
    }

    fn notify_state(&mut self) {
        let state = self.state;
        for observer in self.observers.iter_mut() {
            observer.on_state_change(&state);
        }
    }

    /// Enter battle once both fleets are on the board.
    fn start_battle_if_ready(&mut self) {
        if self.fleets.iter().all(Fleet::all_placed) {
            info!("all ships placed, battle begins");
            self.state.advance();
        }
        self.notify_state();
    }

    /// Place one of `player`'s ships, validating bounds and overlap.
    pub fn place_ship(
        &mut self,
        player: Player,
        index: usize,
        origin: Position,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.require_stage(Stage::Initial)?;
        let board = self.board;
        self.fleets[seat(player)].place(index, origin, orientation, board)?;
        self.start_battle_if_ready();
        Ok(())
    }

    /// Place all of `player`'s remaining ships at random.
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        player: Player,
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.require_stage(Stage::Initial)?;
        let board = self.board;
        self.fleets[seat(player)].place_randomly(rng, board)?;
        self.start_battle_if_ready();
        Ok(())
    }

    /// Fire the active player's shot at `pos` on the opponent's board.
    ///
    /// The turn passes to the opponent afterwards unless the shot destroyed
    /// the last ship, in which case the shooter wins and the game is over.
    pub fn fire(&mut self, pos: Position) -> Result<ShotOutcome, GameError> {
        self.require_stage(Stage::Battle)?;
        let shooter = self.state.active_player();
        let target = seat(shooter.other());
        self.shots[target].mark(pos)?;

        let outcome = self.fleets[target].register_hit(pos);
        self.state.record_shot();
        debug!("{:?} fired at {}: {:?}", shooter, pos, outcome);

        if self.fleets[target].all_destroyed() {
            info!("{:?} destroyed the last ship", shooter);
            self.state.declare_winner(shooter);
        } else {
            self.state.swap_turn();
        }

        for observer in self.observers.iter_mut() {
            observer.on_shot(shooter, pos, outcome);
        }
        self.notify_state();
        Ok(outcome)
    }

    /// Start over with fresh fleets in the placement stage.
    pub fn reset_state(&mut self) {
        self.fleets = [create_ships(), create_ships()];
        self.shots = [ShotGrid::empty(self.board), ShotGrid::empty(self.board)];
        self.state.reset();
        info!("session reset");
        for observer in self.observers.iter_mut() {
            observer.on_reset();
        }
        self.notify_state();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state,
            board: self.board,
            ships: self.fleets[0].clone(),
            enemy_ships: self.fleets[1].clone(),
            shots: self.shots.clone(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("board", &self.board)
            .field("state", &self.state)
            .field("fleets", &self.fleets)
            .field("observers", &self.observers.len())
            .finish()
    }
}
