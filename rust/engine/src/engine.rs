use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::errors::GameError;
use crate::game::{Action, GameState, Phase, ACTION_COUNT};
use crate::observation::{encode, Encoding, Observation};
use crate::rules;
use crate::table::Table;

const DEFAULT_SEED: u64 = 0xB1AC_4A2C;

/// One hand of casino blackjack as a finite Markov decision process.
///
/// The engine owns only configuration (deck count, observation encoding) and
/// the seeded RNG that feeds card draws. Everything else lives inside the
/// [`GameState`] snapshots it produces, so a search agent can branch from
/// any state out of order and replay trajectories deterministically from a
/// seed.
///
/// # Examples
///
/// ```
/// use blackjack_engine::engine::BlackjackGame;
/// use blackjack_engine::game::Action;
///
/// let mut game = BlackjackGame::new(1, Some(42));
/// let state = game.initial_state().expect("fresh shoe");
///
/// // Standing always resolves the hand.
/// let (next, reward) = game.step(&state, Action::Stand).expect("stand is legal");
/// assert!(next.done);
/// assert!(reward != 0.0);
/// ```
#[derive(Debug)]
pub struct BlackjackGame {
    num_decks: u32,
    encoding: Encoding,
    rng: ChaCha20Rng,
}

impl BlackjackGame {
    pub fn new(num_decks: u32, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        Self {
            num_decks,
            encoding: Encoding::default(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Selects the observation encoding for this deployment.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn num_decks(&self) -> u32 {
        self.num_decks
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Deals a fresh hand: dealer up-card, player card, hole card, player
    /// card, in that order, from a full `52 * num_decks` shoe.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidDeckCount`] for a zero deck count. The four
    /// opening draws cannot exhaust a fresh shoe.
    pub fn initial_state(&mut self) -> Result<GameState, GameError> {
        if self.num_decks == 0 {
            return Err(GameError::InvalidDeckCount);
        }
        let mut table = Table::new(self.num_decks);
        table.deal_initial(&mut self.rng)?;
        Ok(GameState {
            dealer_hand: table.dealer_hand,
            player_hand: table.player_hand,
            shoe: table.shoe,
            hole_card: table.hole_card,
            phase: Phase::Opening,
            bet_multiplier: 1,
            last_action: None,
            done: false,
        })
    }

    /// Applies one player action and returns the successor state with its
    /// terminal value (0.0 while the hand is still live).
    ///
    /// The prior state is never mutated; a working [`Table`] is rebuilt from
    /// it, the action applied, and the result folded into a new snapshot.
    /// Terminality is the engine-set `done` flag on that snapshot, never
    /// inferred from the reward being nonzero.
    ///
    /// # Errors
    ///
    /// Illegal actions ([`GameError::IllegalAction`],
    /// [`GameError::HandAlreadyComplete`]) are rejected before any draw.
    pub fn step(&mut self, state: &GameState, action: Action) -> Result<(GameState, f64), GameError> {
        rules::validate_action(state, action)?;

        let mut table = Table::from_state(state);
        let mut phase = state.phase;
        let mut bet_multiplier = state.bet_multiplier;
        let mut done = false;

        match action {
            Action::Hit => {
                let card = table.shoe.draw(&mut self.rng)?;
                table.player_hand.push(card);
                if table.is_busted() {
                    done = true;
                } else {
                    phase = Phase::InPlay;
                }
            }
            Action::Stand => {
                done = true;
                table.dealer_play(&mut self.rng)?;
            }
            Action::Double => {
                bet_multiplier = 2;
                let card = table.shoe.draw(&mut self.rng)?;
                table.player_hand.push(card);
                table.dealer_play(&mut self.rng)?;
                done = true;
            }
            Action::Surrender => {
                done = true;
            }
        }

        let next = GameState {
            dealer_hand: table.dealer_hand,
            player_hand: table.player_hand,
            shoe: table.shoe,
            hole_card: table.hole_card,
            phase,
            bet_multiplier,
            last_action: Some(action),
            done,
        };
        let value = terminal_value(&next);
        Ok((next, value))
    }

    /// Step by raw action index, for callers that work over the flat action
    /// vector.
    pub fn step_index(
        &mut self,
        state: &GameState,
        index: usize,
    ) -> Result<(GameState, f64), GameError> {
        let action = Action::from_index(index)?;
        self.step(state, action)
    }

    pub fn is_terminal(&self, state: &GameState) -> bool {
        state.done
    }

    pub fn legal_moves(&self, state: &GameState) -> [u8; ACTION_COUNT] {
        rules::legal_moves(state)
    }

    pub fn action_size(&self, state: &GameState) -> usize {
        rules::action_size(state)
    }

    pub fn observation(&self, state: &GameState) -> Observation {
        encode(self.encoding, state)
    }

    /// Blackjack has no board symmetries; the expansion is the identity.
    pub fn symmetries(&self, state: &GameState, pi: &[f64]) -> Vec<(Observation, Vec<f64>)> {
        vec![(self.observation(state), pi.to_vec())]
    }

    pub fn render(&self, state: &GameState) -> String {
        Table::from_state(state).render()
    }
}

/// Signed outcome of a finished hand, 0.0 for a live one.
///
/// Rules are evaluated in order: surrender pays -0.5 regardless of the
/// multiplier; a player total within 21 that beats the dealer pays +m; a
/// player bust pays -m; a value tie where the player holds no more cards
/// than the dealer pays +m (the push tiebreak favours the player, preserved
/// deliberately); a dealer bust pays +m; anything else pays -m.
pub fn terminal_value(state: &GameState) -> f64 {
    if !state.done {
        return 0.0;
    }
    if state.last_action == Some(Action::Surrender) {
        return -0.5;
    }

    let player = state.player_hand.value();
    let dealer = state.dealer_hand.value();
    let m = f64::from(state.bet_multiplier);

    if player <= 21 && player > dealer {
        return m;
    }
    if player > 21 {
        return -m;
    }
    if player == dealer && state.player_hand.len() <= state.dealer_hand.len() {
        return m;
    }
    if dealer > 21 {
        return m;
    }
    -m
}
