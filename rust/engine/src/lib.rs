//! # blackjack-engine: Blackjack MDP Core
//!
//! Models a single hand of casino blackjack as a finite, fully-specified
//! Markov decision process for search and self-play agents. Every engine
//! operation is a value-to-value transformation over an immutable canonical
//! state snapshot, with reproducible RNG for deterministic replay of
//! rollouts.
//!
//! ## Core Modules
//!
//! - [`cards`] - Face and card value types (13-face closed vocabulary)
//! - [`shoe`] - Per-face remaining counts and uniform card sampling
//! - [`hand`] - Hand sequences and soft/hard ace valuation
//! - [`table`] - Per-call scaffolding: dealing, dealer auto-play, rendering
//! - [`game`] - Canonical state, phases and the fixed action space
//! - [`rules`] - Legal-move masks and action validation
//! - [`engine`] - The MDP surface: initial deal, step, terminal values
//! - [`observation`] - Fixed-shape tensor encodings of a state
//! - [`logger`] - Episode records and JSONL serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::engine::BlackjackGame;
//! use blackjack_engine::game::Action;
//!
//! let mut game = BlackjackGame::new(1, Some(42));
//! let state = game.initial_state().expect("fresh shoe");
//!
//! assert_eq!(game.action_size(&state), 4);
//! let (next, reward) = game.step(&state, Action::Surrender).expect("legal at opening");
//! assert!(next.done);
//! assert_eq!(reward, -0.5);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All draws flow through a seeded ChaCha20 RNG, so identical seeds and
//! action sequences reproduce identical states and rewards:
//!
//! ```rust
//! use blackjack_engine::engine::BlackjackGame;
//!
//! let mut a = BlackjackGame::new(1, Some(7));
//! let mut b = BlackjackGame::new(1, Some(7));
//! assert_eq!(a.initial_state().unwrap(), b.initial_state().unwrap());
//! ```

pub mod cards;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod observation;
pub mod rules;
pub mod shoe;
pub mod table;
