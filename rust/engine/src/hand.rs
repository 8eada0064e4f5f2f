use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Face};

/// An ordered sequence of cards held by the player or the dealer.
/// Order matters only for display and the push tiebreak by card count,
/// never for valuation.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_faces(faces: &[Face]) -> Self {
        Self(faces.iter().map(|&f| Card::new(f)).collect())
    }

    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn first(&self) -> Option<Card> {
        self.0.first().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Blackjack value of the hand under the single-soft-ace rule.
    ///
    /// Non-ace values are summed first, then aces are resolved one at a time
    /// against the running total: the last remaining ace counts 11 only if
    /// the total so far is at most 10, every other ace counts 1. At most one
    /// ace is ever counted as 11, so `[A, A]` is 12 and `[A, A, 9]` is 21.
    /// `[A, A, A]` comes out 13 with every ace hard; this undercount of
    /// multi-ace soft totals is intentional (valuation compatibility with
    /// policies trained against it).
    pub fn value(&self) -> u32 {
        let mut value = 0u32;
        let mut aces = 0u32;
        for card in &self.0 {
            if card.face == Face::Ace {
                aces += 1;
            } else {
                value += card.value();
            }
        }
        while aces > 0 {
            if aces == 1 && value <= 10 {
                value += 11;
            } else {
                value += 1;
            }
            aces -= 1;
        }
        value
    }

    /// True when the hand value uses an ace as 11.
    pub fn is_soft(&self) -> bool {
        let hard: u32 = self
            .0
            .iter()
            .map(|c| if c.face == Face::Ace { 1 } else { c.value() })
            .sum();
        self.value() != hard
    }
}

impl fmt::Display for Hand {
    /// Renders as `[10, J, A]` in deal order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}
