use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{all_faces, Card, Face};
use crate::errors::GameError;

/// The multiset of undealt cards, tracked as a remaining count per face.
/// A fresh shoe holds `4 * num_decks` of each of the 13 faces.
///
/// The shoe never goes negative: [`Shoe::draw`] samples only among faces with
/// a positive count and [`Shoe::remove`] refuses depleted faces.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Shoe {
    counts: [u32; 13],
}

impl Shoe {
    pub fn new(num_decks: u32) -> Self {
        Self {
            counts: [4 * num_decks; 13],
        }
    }

    /// An all-zero shoe. Useful for building forced compositions in tests
    /// via [`Shoe::add`].
    pub fn empty() -> Self {
        Self { counts: [0; 13] }
    }

    pub fn count(&self, face: Face) -> u32 {
        self.counts[face.index()]
    }

    pub fn add(&mut self, face: Face, n: u32) {
        self.counts[face.index()] += n;
    }

    /// Total number of undealt cards across all faces.
    pub fn remaining(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Uniformly samples one face among those with a remaining count above
    /// zero, decrements it and returns the drawn card.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ShoeExhausted`] when every count is zero. A shoe
    /// sized for a single hand should never reach this; the guard exists so
    /// exhaustion fails loudly instead of yielding an invalid card.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, GameError> {
        let candidates: Vec<Face> = all_faces()
            .into_iter()
            .filter(|f| self.counts[f.index()] > 0)
            .collect();
        let face = *candidates.choose(rng).ok_or(GameError::ShoeExhausted)?;
        self.counts[face.index()] -= 1;
        Ok(Card::new(face))
    }

    /// Removes one card of a specific face. Used for dealing forced
    /// compositions (scenario setup, replays).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::FaceDepleted`] if that face has no cards left.
    pub fn remove(&mut self, face: Face) -> Result<Card, GameError> {
        if self.counts[face.index()] == 0 {
            return Err(GameError::FaceDepleted { face });
        }
        self.counts[face.index()] -= 1;
        Ok(Card::new(face))
    }
}
