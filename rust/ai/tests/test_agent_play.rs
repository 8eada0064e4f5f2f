use blackjack_ai::baseline::{BaselineAgent, RandomAgent};
use blackjack_ai::Agent;
use blackjack_engine::engine::BlackjackGame;
use blackjack_engine::game::{Action, Phase};
use blackjack_engine::rules::legal_moves;

fn play_out(agent: &mut dyn Agent, game: &mut BlackjackGame) -> f64 {
    let mut state = game.initial_state().expect("deal ok");
    let mut reward = 0.0;
    while !game.is_terminal(&state) {
        let action = agent.choose(&state);
        let (next, z) = game.step(&state, action).expect("agent picks legal actions");
        state = next;
        reward = z;
    }
    reward
}

#[test]
fn baseline_agent_finishes_every_hand_legally() {
    let mut agent = BaselineAgent::new();
    for seed in 0..50 {
        let mut game = BlackjackGame::new(1, Some(seed));
        let reward = play_out(&mut agent, &mut game);
        assert!(reward != 0.0, "every finished hand has a nonzero outcome");
    }
}

#[test]
fn random_agent_respects_the_legal_mask() {
    let mut agent = RandomAgent::new(Some(9));
    let mut game = BlackjackGame::new(1, Some(9));
    for _ in 0..50 {
        let mut state = game.initial_state().expect("deal ok");
        while !game.is_terminal(&state) {
            let action = agent.choose(&state);
            let mask = legal_moves(&state);
            assert_eq!(mask[action.index()], 1, "chosen action must be legal");
            if state.phase == Phase::InPlay {
                assert!(matches!(action, Action::Hit | Action::Stand));
            }
            let (next, _) = game.step(&state, action).expect("legal step");
            state = next;
        }
    }
}

#[test]
fn baseline_play_is_reproducible_with_a_fixed_seed() {
    let mut a1 = BaselineAgent::new();
    let mut a2 = BaselineAgent::new();
    let mut g1 = BlackjackGame::new(1, Some(314));
    let mut g2 = BlackjackGame::new(1, Some(314));
    assert_eq!(play_out(&mut a1, &mut g1), play_out(&mut a2, &mut g2));
}
