use crate::errors::GameError;
use crate::game::{Action, GameState, Phase, ACTION_COUNT};

/// Legal-move mask over the fixed four-slot action vector.
///
/// Hit and Stand are always enabled; Double and Surrender are masked out
/// once the phase has advanced past the first decision.
pub fn legal_moves(state: &GameState) -> [u8; ACTION_COUNT] {
    match state.phase {
        Phase::Opening => [1, 1, 1, 1],
        Phase::InPlay => [1, 1, 0, 0],
    }
}

/// Size of the action set exposed by this state: 4 at the opening decision,
/// 2 thereafter.
pub fn action_size(state: &GameState) -> usize {
    match state.phase {
        Phase::Opening => ACTION_COUNT,
        Phase::InPlay => 2,
    }
}

/// Validates an action against the state's phase and terminality before any
/// mutation happens. A rejected action leaves the state machine untouched.
///
/// # Errors
///
/// - [`GameError::HandAlreadyComplete`] when the state is terminal
/// - [`GameError::IllegalAction`] for Double or Surrender past the opening
pub fn validate_action(state: &GameState, action: Action) -> Result<Action, GameError> {
    if state.done {
        return Err(GameError::HandAlreadyComplete);
    }
    if legal_moves(state)[action.index()] == 0 {
        return Err(GameError::IllegalAction {
            action,
            phase: state.phase,
        });
    }
    Ok(action)
}
