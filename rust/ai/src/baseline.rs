//! Baseline decision policies for blackjack gameplay.
//!
//! Provides a deterministic rule-based strategy and a seeded uniform-random
//! policy, both usable as rollout policies and simulation baselines.

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use blackjack_engine::game::{Action, GameState, Phase};
use blackjack_engine::rules::legal_moves;

use crate::Agent;

/// Deterministic threshold strategy, a cut-down table of basic strategy:
///
/// - at the opening decision, surrender hard 16 against a 10-value up-card
/// - at the opening decision, double hard 10 or 11 against an up-card of 9
///   or less
/// - otherwise hit below 17 and stand at 17 or above
///
/// Decisions depend only on the state, so simulations against it are fully
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct BaselineAgent;

impl BaselineAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for BaselineAgent {
    fn choose(&mut self, state: &GameState) -> Action {
        let total = state.player_hand.value();
        let soft = state.player_hand.is_soft();
        let up = state.dealer_hand.first().map(|c| c.value()).unwrap_or(0);

        if state.phase == Phase::Opening {
            if !soft && total == 16 && up >= 10 {
                return Action::Surrender;
            }
            if !soft && (total == 10 || total == 11) && up <= 9 {
                return Action::Double;
            }
        }
        if total < 17 {
            Action::Hit
        } else {
            Action::Stand
        }
    }

    fn name(&self) -> &str {
        "BaselineAgent"
    }
}

/// Picks uniformly among the actions enabled by the state's legal-move
/// mask, from its own seeded RNG.
#[derive(Debug)]
pub struct RandomAgent {
    rng: ChaCha20Rng,
}

const DEFAULT_SEED: u64 = 0x5EED_CA4D;

impl RandomAgent {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed.unwrap_or(DEFAULT_SEED)),
        }
    }
}

impl Agent for RandomAgent {
    fn choose(&mut self, state: &GameState) -> Action {
        let mask = legal_moves(state);
        let candidates: Vec<Action> = Action::all()
            .into_iter()
            .filter(|a| mask[a.index()] == 1)
            .collect();
        // Hit and Stand are always enabled, the candidate set is never empty
        *candidates.choose(&mut self.rng).unwrap_or(&Action::Stand)
    }

    fn name(&self) -> &str {
        "RandomAgent"
    }
}
