//! Errors surfaced by the solver.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A guess was scored against a word of a different length
    #[error("guess '{guess}' and word '{word}' have different lengths")]
    LengthMismatch { guess: String, word: String },
    /// A corpus mixes words of different lengths
    #[error("line {line}: word '{word}' has length {found}, expected {expected}")]
    MixedLength {
        line: usize,
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("words must contain at least one letter")]
    EmptyWord,
    #[error("invalid color '{0}', expected one of g, y or b")]
    InvalidColor(char),
    #[error("color code '{code}' does not fit guess '{guess}'")]
    InvalidCode { guess: String, code: String },
    #[error("could not read word list '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no candidate answers remain")]
    NoCandidates,
    #[error("the guess corpus is empty")]
    EmptyGuessCorpus,
}
