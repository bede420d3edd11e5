//! # twentyone-engine: Twenty-One Game Core
//!
//! The rules core of a terminal Twenty-One (Blackjack-style) game between a
//! human player and the house. Provides the card catalog, seeded deck
//! shuffling, hand scoring with ace reduction, decision policies, and the
//! round state machine. The crate performs no I/O; rendering and input live
//! in the CLI front end.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and catalog construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Hand ownership and scoring with greedy ace reduction
//! - [`participant`] - Player/House sides, decisions, and score visibility
//! - [`rules`] - House policy and winner resolution
//! - [`game`] - Round state machine (deal, turns, resolution, reset)
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use twentyone_engine::cards::{Card, Rank, Suit};
//! use twentyone_engine::hand::calculate_score;
//!
//! // Ace counts 11 until the hand would bust
//! let blackjack = [
//!     Card { suit: Suit::Spades, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//! ];
//! assert_eq!(calculate_score(&blackjack), 21);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All deals are reproducible using seeded RNG:
//!
//! ```rust
//! use twentyone_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! // deck1 and deck2 will have identical card order
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod participant;
pub mod rules;
