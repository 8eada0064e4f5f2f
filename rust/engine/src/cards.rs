use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the face (rank) of a playing card from Two through Ace.
/// Suits are irrelevant to blackjack, so a face fully identifies a card.
/// Declaration order is the canonical rank order used by the observation
/// encoders (index 0 = Two .. index 12 = Ace).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Face {
    /// Face 2
    Two,
    /// Face 3
    Three,
    /// Face 4
    Four,
    /// Face 5
    Five,
    /// Face 6
    Six,
    /// Face 7
    Seven,
    /// Face 8
    Eight,
    /// Face 9
    Nine,
    /// Face 10
    Ten,
    /// Jack (counts 10)
    Jack,
    /// Queen (counts 10)
    Queen,
    /// King (counts 10)
    King,
    /// Ace (counts 11 or 1, see hand valuation)
    Ace,
}

impl Face {
    /// Blackjack value of the face: pip value for 2-10, 10 for court cards,
    /// 11 for an ace (the soft/hard resolution lives in hand valuation).
    pub fn value(self) -> u32 {
        match self {
            Face::Two => 2,
            Face::Three => 3,
            Face::Four => 4,
            Face::Five => 5,
            Face::Six => 6,
            Face::Seven => 7,
            Face::Eight => 8,
            Face::Nine => 9,
            Face::Ten | Face::Jack | Face::Queen | Face::King => 10,
            Face::Ace => 11,
        }
    }

    /// Index into the canonical 13-face rank order (Two = 0 .. Ace = 12).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Face::Two => "2",
            Face::Three => "3",
            Face::Four => "4",
            Face::Five => "5",
            Face::Six => "6",
            Face::Seven => "7",
            Face::Eight => "8",
            Face::Nine => "9",
            Face::Ten => "10",
            Face::Jack => "J",
            Face::Queen => "Q",
            Face::King => "K",
            Face::Ace => "A",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

pub fn all_faces() -> [Face; 13] {
    [
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
        Face::Seven,
        Face::Eight,
        Face::Nine,
        Face::Ten,
        Face::Jack,
        Face::Queen,
        Face::King,
        Face::Ace,
    ]
}

/// A single playing card. Equality is by face only; the numeric value is
/// derived, never stored.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The face of the card (Two through Ace)
    pub face: Face,
}

impl Card {
    pub fn new(face: Face) -> Self {
        Self { face }
    }

    pub fn value(self) -> u32 {
        self.face.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.face.symbol())
    }
}
