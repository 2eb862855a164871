//! Feedback calculation for guesses.
//!
//! This module computes the per-letter color code (green/yellow/black) a game returns for a
//! guess against a known secret, and handles the textual `g`/`y`/`b` encoding of such codes.

use crate::error::{Error, Result};
use crate::word::Word;
use std::fmt;
use std::str::FromStr;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Correct letter in correct position
    Green,
    /// Letter occurs elsewhere in the secret
    Yellow,
    /// No remaining occurrence of the letter
    Black,
}

impl Color {
    pub fn to_char(self) -> char {
        match self {
            Color::Green => 'g',
            Color::Yellow => 'y',
            Color::Black => 'b',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'g' => Some(Color::Green),
            'y' => Some(Color::Yellow),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    pub fn to_emoji(self) -> char {
        match self {
            Color::Green => '🟩',
            Color::Yellow => '🟨',
            Color::Black => '⬛',
        }
    }
}

/// A complete color code, positionally aligned with the guess that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorCode(Box<[Color]>);

impl ColorCode {
    pub fn new(colors: impl Into<Box<[Color]>>) -> Self {
        Self(colors.into())
    }

    /// The code of a guess that matches the secret exactly
    pub fn solved(len: usize) -> Self {
        Self(vec![Color::Green; len].into())
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every position is green
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&c| c == Color::Green)
    }

    /// Parse a code like "ggybb".
    pub fn parse(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| Color::from_char(c).ok_or(Error::InvalidColor(c)))
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// Parse a code and check that it lines up with `guess`.
    pub fn parse_for(guess: &Word, s: &str) -> Result<Self> {
        let code = Self::parse(s)?;
        if code.len() != guess.len() {
            return Err(Error::InvalidCode {
                guess: guess.to_string(),
                code: s.to_string(),
            });
        }
        Ok(code)
    }

    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|c| c.to_emoji()).collect()
    }
}

impl FromStr for ColorCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c.to_char()))
    }
}

/// Score `guess` against `secret`.
///
/// Greens are assigned first and consume their secret letter. Each remaining guess letter is
/// then matched against the leftmost unconsumed occurrence in the secret, becoming yellow and
/// consuming it, or black if none is left. A letter occurring k times in the secret is thus
/// credited at most k times across the guess.
pub fn evaluate(secret: &Word, guess: &Word) -> Result<ColorCode> {
    let mut scorer = Scorer::default();
    let colors = scorer.score(secret, guess)?;
    Ok(ColorCode::new(colors))
}

/// Scratch space for scoring many pairs without allocating per call.
#[derive(Debug, Default)]
pub(crate) struct Scorer {
    remaining: Vec<Option<char>>,
    colors: Vec<Color>,
}

impl Scorer {
    pub(crate) fn score(&mut self, secret: &Word, guess: &Word) -> Result<&[Color]> {
        if secret.len() != guess.len() {
            return Err(Error::LengthMismatch {
                guess: guess.to_string(),
                word: secret.to_string(),
            });
        }

        let guess = guess.letters();
        self.remaining.clear();
        self.remaining.extend(secret.letters().iter().copied().map(Some));
        self.colors.clear();
        self.colors.resize(guess.len(), Color::Black);

        for (i, &letter) in guess.iter().enumerate() {
            if self.remaining[i] == Some(letter) {
                self.colors[i] = Color::Green;
                self.remaining[i] = None;
            }
        }

        for (i, &letter) in guess.iter().enumerate() {
            if self.colors[i] == Color::Green {
                continue;
            }
            if let Some(slot) = self.remaining.iter_mut().find(|slot| **slot == Some(letter)) {
                self.colors[i] = Color::Yellow;
                *slot = None;
            }
        }

        Ok(&self.colors)
    }
}

/// Longest code that [`pack`] can represent (3^40 < 2^64).
pub(crate) const MAX_PACKED_LEN: usize = 40;

/// Base-3 encoding of a code: black = 0, yellow = 1, green = 2, first position lowest.
pub(crate) fn pack(colors: &[Color]) -> u64 {
    debug_assert!(colors.len() <= MAX_PACKED_LEN);
    colors.iter().rev().fold(0, |acc, color| {
        let digit = match color {
            Color::Black => 0,
            Color::Yellow => 1,
            Color::Green => 2,
        };
        acc * 3 + digit
    })
}
