use serde::{Deserialize, Serialize};

use crate::cards::{all_faces, Card};
use crate::errors::GameError;
use crate::hand::Hand;
use crate::shoe::Shoe;

/// Number of action slots in the fixed action vector.
pub const ACTION_COUNT: usize = 4;

/// Whether the player has made their first decision yet. Opening exposes the
/// full four-action set; once play has advanced only Hit and Stand remain.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Before the player's first decision (four legal actions)
    Opening,
    /// Any subsequent decision (two legal actions)
    InPlay,
}

impl Phase {
    /// Scalar used by the coarse observation encoding: -1 before the first
    /// decision, +1 after.
    pub fn as_scalar(self) -> f32 {
        match self {
            Phase::Opening => -1.0,
            Phase::InPlay => 1.0,
        }
    }
}

/// A player decision. Indices are fixed and form the engine's action space.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw one card (index 0)
    Hit,
    /// Stop drawing, let the dealer play (index 1)
    Stand,
    /// Double the bet, draw exactly one card, dealer plays (index 2, opening only)
    Double,
    /// Forfeit half the bet and end the hand (index 3, opening only)
    Surrender,
}

impl Action {
    pub fn index(self) -> usize {
        match self {
            Action::Hit => 0,
            Action::Stand => 1,
            Action::Double => 2,
            Action::Surrender => 3,
        }
    }

    pub fn from_index(index: usize) -> Result<Action, GameError> {
        match index {
            0 => Ok(Action::Hit),
            1 => Ok(Action::Stand),
            2 => Ok(Action::Double),
            3 => Ok(Action::Surrender),
            _ => Err(GameError::UnknownAction { index }),
        }
    }

    pub fn all() -> [Action; ACTION_COUNT] {
        [Action::Hit, Action::Stand, Action::Double, Action::Surrender]
    }
}

/// Canonical snapshot of one hand in progress. Everything a search agent
/// needs to branch from this point is in here — phase and bet multiplier
/// included — so states can be revisited out of order and each branch of a
/// tree search carries its own copy.
///
/// Invariant: `shoe` counts plus the cards in both hands and the hole slot
/// always reconstruct the full `52 * num_decks` multiset.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Dealer's visible hand (up-card first)
    pub dealer_hand: Hand,
    /// Player's hand in deal order
    pub player_hand: Hand,
    /// Remaining per-face counts
    pub shoe: Shoe,
    /// Dealer's face-down card; cleared when revealed into the dealer hand
    pub hole_card: Option<Card>,
    /// Gates the legal action set
    pub phase: Phase,
    /// 1 normally, 2 after a double down
    pub bet_multiplier: u32,
    /// The action that produced this state, if any
    pub last_action: Option<Action>,
    /// Engine-set ground truth for terminality
    pub done: bool,
}

impl GameState {
    /// Compact byte encoding of the snapshot for transposition tables and
    /// visited-state lookups. Layout: player hand (length-prefixed face
    /// indices), dealer hand likewise, hole slot (0 = empty, else face
    /// index + 1), 13 little-endian u32 shoe counts in rank order, phase,
    /// bet multiplier, done flag.
    pub fn canonical_key(&self) -> Vec<u8> {
        let mut key = Vec::with_capacity(64);
        key.push(self.player_hand.len() as u8);
        for card in self.player_hand.cards() {
            key.push(card.face.index() as u8);
        }
        key.push(self.dealer_hand.len() as u8);
        for card in self.dealer_hand.cards() {
            key.push(card.face.index() as u8);
        }
        key.push(match self.hole_card {
            Some(card) => card.face.index() as u8 + 1,
            None => 0,
        });
        for face in all_faces() {
            key.extend_from_slice(&self.shoe.count(face).to_le_bytes());
        }
        key.push(match self.phase {
            Phase::Opening => 0,
            Phase::InPlay => 1,
        });
        key.push(self.bet_multiplier as u8);
        key.push(u8::from(self.done));
        key
    }

    /// Cards dealt out of the shoe so far (both hands plus the hole slot).
    pub fn dealt_count(&self) -> usize {
        self.player_hand.len() + self.dealer_hand.len() + usize::from(self.hole_card.is_some())
    }
}
