use blackjack_engine::engine::BlackjackGame;
use blackjack_engine::game::Phase;

#[test]
fn equal_states_share_a_key() {
    let mut a = BlackjackGame::new(1, Some(31));
    let mut b = BlackjackGame::new(1, Some(31));
    let sa = a.initial_state().expect("deal ok");
    let sb = b.initial_state().expect("deal ok");
    assert_eq!(sa.canonical_key(), sb.canonical_key());
}

#[test]
fn key_distinguishes_phase_and_bet_multiplier() {
    // the snapshot carries the engine scalars, so two states differing only
    // in phase or stake must never collide in a transposition table
    let mut game = BlackjackGame::new(1, Some(13));
    let state = game.initial_state().expect("deal ok");

    let mut in_play = state.clone();
    in_play.phase = Phase::InPlay;
    assert_ne!(state.canonical_key(), in_play.canonical_key());

    let mut doubled = state.clone();
    doubled.bet_multiplier = 2;
    assert_ne!(state.canonical_key(), doubled.canonical_key());

    let mut finished = state.clone();
    finished.done = true;
    assert_ne!(state.canonical_key(), finished.canonical_key());
}

#[test]
fn key_reflects_every_dealt_card() {
    let mut game = BlackjackGame::new(1, Some(55));
    let state = game.initial_state().expect("deal ok");
    let key = state.canonical_key();
    // 2 player cards + 1 dealer card with length prefixes, hole slot,
    // 13 x 4-byte shoe counts, phase, multiplier, done flag
    assert_eq!(key.len(), 1 + 2 + 1 + 1 + 1 + 52 + 3);
}
