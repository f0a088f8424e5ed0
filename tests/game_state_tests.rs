use battleship_rules::{GameState, Player, Stage};

#[test]
fn advance_walks_through_stages() {
    let mut state = GameState::new();
    assert_eq!(state.stage(), Stage::Initial);
    state.advance();
    assert_eq!(state.stage(), Stage::Battle);
    state.advance();
    assert_eq!(state.stage(), Stage::Over);
    state.advance();
    assert_eq!(state.stage(), Stage::Over);
    assert_eq!(state.winner(), None);
}

#[test]
fn swap_turn_toggles_and_returns() {
    let mut state = GameState::new();
    assert_eq!(state.active_player(), Player::One);
    state.swap_turn();
    assert_eq!(state.active_player(), Player::Two);
    state.swap_turn();
    assert_eq!(state.active_player(), Player::One);
}

#[test]
fn winner_only_set_when_over() {
    let mut state = GameState::new();
    state.advance();
    assert_eq!(state.winner(), None);
    state.declare_winner(Player::Two);
    assert_eq!(state.stage(), Stage::Over);
    assert_eq!(state.winner(), Some(Player::Two));

    state.declare_winner(Player::One);
    assert_eq!(state.winner(), Some(Player::Two));
}

#[test]
fn reset_clears_everything() {
    let mut state = GameState::new();
    state.advance();
    state.record_shot();
    state.record_shot();
    state.swap_turn();
    state.declare_winner(Player::Two);
    assert_eq!(state.shots_fired(), 2);

    state.reset();
    assert_eq!(state, GameState::new());
    assert_eq!(state.stage(), Stage::Initial);
    assert_eq!(state.active_player(), Player::One);
    assert_eq!(state.shots_fired(), 0);
    assert_eq!(state.winner(), None);
}

#[test]
fn game_state_bincode_roundtrip() {
    let mut state = GameState::new();
    state.advance();
    state.record_shot();
    state.declare_winner(Player::One);
    let bytes = bincode::serialize(&state).unwrap();
    let decoded: GameState = bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, state);
}
