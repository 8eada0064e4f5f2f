use thiserror::Error;

use crate::cards::Face;
use crate::game::{Action, Phase};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Shoe exhausted: no face has a remaining count above zero")]
    ShoeExhausted,
    #[error("No {face} left in the shoe")]
    FaceDepleted { face: Face },
    #[error("Action {action:?} is not legal in phase {phase:?}")]
    IllegalAction { action: Action, phase: Phase },
    #[error("Action index {index} is outside the action set")]
    UnknownAction { index: usize },
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("Number of decks must be positive")]
    InvalidDeckCount,
}
