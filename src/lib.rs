//! # Wordle Minimax
//!
//! A Wordle solver that discovers a secret word using only color-code feedback.
//!
//! Each round the solver plays the guess that minimizes the total number of candidates left
//! across every possible secret. This is a greedy one-ply lookahead, not a full game-tree
//! search. Selector results are memoized per (guess history, candidate set) for the lifetime
//! of a [`Solver`] session.

pub mod cache;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod selector;
pub mod solver;
pub mod word;

pub use cache::{CacheStats, GuessCache, KeyMode};
pub use error::{Error, Result};
pub use feedback::{evaluate, Color, ColorCode};
pub use filter::{count_possible, is_consistent, possible};
pub use selector::{best_next_guess, guess_cost, score_guesses, GuessScore};
pub use solver::{BenchmarkReport, Recommendation, Round, SolveRecord, Solver};
pub use word::{Corpus, Word};

/// Opening guess used for self-play when none is given
pub const DEFAULT_OPENING: &str = "salet";
