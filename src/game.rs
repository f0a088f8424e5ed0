//! Stage and turn state machine.

use log::{debug, warn};

/// Coarse phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    /// Ships are being placed.
    #[default]
    Initial,
    /// Players take turns firing.
    Battle,
    /// One fleet has been destroyed.
    Over,
}

/// One of the two seats in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    /// The opposing player.
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Stage, turn and outcome of a match.
///
/// `winner` is only ever `Some` while `stage` is `Over`, and `stage` only
/// moves forward until [`GameState::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    stage: Stage,
    active_player: Player,
    shots_fired: u32,
    winner: Option<Player>,
}

impl GameState {
    /// Fresh state: placement stage, player one to move.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Initial -> Battle -> Over. Calling again once over changes nothing.
    pub fn advance(&mut self) {
        self.stage = match self.stage {
            Stage::Initial => Stage::Battle,
            Stage::Battle => Stage::Over,
            Stage::Over => {
                warn!("advance called on a finished game");
                Stage::Over
            }
        };
        debug!("stage is now {:?}", self.stage);
    }

    /// Hand the turn to the other player.
    pub fn swap_turn(&mut self) {
        self.active_player = self.active_player.other();
    }

    /// Record `player` as the winner and end the game.
    pub fn declare_winner(&mut self, player: Player) {
        if self.stage == Stage::Over {
            warn!("ignoring winner {:?}: game already over", player);
            return;
        }
        self.winner = Some(player);
        self.stage = Stage::Over;
        debug!("{:?} wins after {} shots", player, self.shots_fired);
    }

    pub fn record_shot(&mut self) {
        self.shots_fired += 1;
    }

    /// Back to the placement stage with everything cleared.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
