//! # blackjack-ai: Decision Policies for the Blackjack MDP
//!
//! Provides ready-made decision policies on top of `blackjack-engine`.
//! Useful as rollout policies for tree search, as simulation baselines and
//! for exercising the engine in tests.
//!
//! ## Core Components
//!
//! - [`Agent`] - Trait defining the interface for decision-making
//! - [`baseline`] - Rule-based baseline and uniform-random policies
//! - [`create_agent`] - Factory function for creating agents by name
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_ai::create_agent;
//! use blackjack_engine::engine::BlackjackGame;
//!
//! let mut agent = create_agent("baseline");
//!
//! let mut game = BlackjackGame::new(1, Some(42));
//! let mut state = game.initial_state().expect("fresh shoe");
//! while !game.is_terminal(&state) {
//!     let action = agent.choose(&state);
//!     let (next, _reward) = game.step(&state, action).expect("agent picks legal actions");
//!     state = next;
//! }
//! ```
//!
//! ## Agent Types
//!
//! - `"baseline"` - deterministic threshold strategy
//! - `"random"` - uniform over the legal-action mask, seeded

use blackjack_engine::game::{Action, GameState};

pub mod baseline;

/// Trait defining the interface for decision policies over engine states.
///
/// Implementors pick one action from the state's legal set. `choose` takes
/// `&mut self` so stochastic agents can own their RNG.
pub trait Agent: Send {
    /// Pick the next action for the given state. Must return an action that
    /// is legal under the state's phase.
    fn choose(&mut self, state: &GameState) -> Action;

    /// Return the name/identifier of this agent implementation.
    fn name(&self) -> &str;
}

/// Factory function to create agents by type string.
///
/// # Supported Agent Types
///
/// - `"baseline"` - deterministic threshold strategy
/// - `"random"` - uniform over legal actions with a fixed default seed
///
/// # Example
///
/// ```rust
/// use blackjack_ai::create_agent;
///
/// let agent = create_agent("baseline");
/// assert_eq!(agent.name(), "BaselineAgent");
/// ```
///
/// # Panics
///
/// Panics if an unknown agent type is requested.
pub fn create_agent(agent_type: &str) -> Box<dyn Agent> {
    match agent_type {
        "baseline" => Box::new(baseline::BaselineAgent::new()),
        "random" => Box::new(baseline::RandomAgent::new(None)),
        _ => panic!("Unknown agent type: {}", agent_type),
    }
}
