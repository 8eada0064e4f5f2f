use blackjack_engine::cards::{Card, Face};
use blackjack_engine::engine::BlackjackGame;
use blackjack_engine::game::{GameState, Phase};
use blackjack_engine::hand::Hand;
use blackjack_engine::observation::{encode, Encoding};
use blackjack_engine::shoe::Shoe;

fn sample_state(phase: Phase) -> GameState {
    GameState {
        dealer_hand: Hand::from_faces(&[Face::King]),
        player_hand: Hand::from_faces(&[Face::Ten, Face::Nine]),
        shoe: Shoe::new(1),
        hole_card: Some(Card::new(Face::Five)),
        phase,
        bet_multiplier: 1,
        last_action: None,
        done: false,
    }
}

#[test]
fn coarse_encoding_fills_three_uniform_planes() {
    let state = sample_state(Phase::Opening);
    let obs = encode(Encoding::Coarse, &state);
    assert_eq!(obs.shape, (3, 3, 3));
    assert_eq!(obs.data.len(), 27);

    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(obs.at(0, row, col), 19.0, "player total plane");
            assert_eq!(obs.at(1, row, col), 10.0, "dealer up-card plane");
            assert_eq!(obs.at(2, row, col), -1.0, "phase plane");
        }
    }
}

#[test]
fn coarse_phase_plane_flips_after_first_decision() {
    let obs = encode(Encoding::Coarse, &sample_state(Phase::InPlay));
    assert_eq!(obs.at(2, 0, 0), 1.0);
}

#[test]
fn fine_encoding_broadcasts_histograms_across_rows() {
    let mut state = sample_state(Phase::Opening);
    state.player_hand = Hand::from_faces(&[Face::Ten, Face::Ten, Face::Ace]);
    let obs = encode(Encoding::Fine, &state);
    assert_eq!(obs.shape, (3, 13, 13));
    assert_eq!(obs.data.len(), 3 * 13 * 13);

    for row in 0..13 {
        // plane 0: player per-face counts in canonical rank order
        assert_eq!(obs.at(0, row, Face::Ten.index()), 2.0);
        assert_eq!(obs.at(0, row, Face::Ace.index()), 1.0);
        assert_eq!(obs.at(0, row, Face::Two.index()), 0.0);
        // plane 1: one-hot of the dealer up-card
        assert_eq!(obs.at(1, row, Face::King.index()), 1.0);
        assert_eq!(obs.at(1, row, Face::Queen.index()), 0.0);
        // plane 2: all zeros
        for col in 0..13 {
            assert_eq!(obs.at(2, row, col), 0.0);
        }
    }
}

#[test]
fn engine_uses_its_configured_encoding() {
    let mut coarse = BlackjackGame::new(1, Some(5));
    assert_eq!(coarse.encoding(), Encoding::Coarse);
    let state = coarse.initial_state().expect("deal ok");
    assert_eq!(coarse.observation(&state).shape, (3, 3, 3));

    let mut fine = BlackjackGame::new(1, Some(5)).with_encoding(Encoding::Fine);
    let state = fine.initial_state().expect("deal ok");
    assert_eq!(fine.observation(&state).shape, (3, 13, 13));
}
