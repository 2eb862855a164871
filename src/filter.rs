//! Narrowing a candidate set with the feedback from a played guess.

use crate::feedback::{Color, ColorCode};
use crate::word::Word;

/// Whether `candidate` could be the secret, given that `played` was answered with `code`.
///
/// Runs three passes over a scratch copy of the candidate's letters. Greens must match and
/// are blanked out. Each yellow must not match in place and blanks the leftmost remaining
/// occurrence of its letter. Each black must not match in place and must find no remaining
/// occurrence. For every code [`evaluate`](crate::evaluate) can produce this accepts exactly
/// the candidates that would score `code`.
///
/// Words or codes whose lengths differ from `played` are never consistent.
pub fn is_consistent(played: &Word, code: &ColorCode, candidate: &Word) -> bool {
    let played = played.letters();
    let colors = code.colors();
    if played.len() != colors.len() || played.len() != candidate.len() {
        return false;
    }
    let mut scratch: Vec<Option<char>> = candidate.letters().iter().copied().map(Some).collect();

    for (i, (&letter, &color)) in played.iter().zip(colors).enumerate() {
        if color == Color::Green {
            if scratch[i] != Some(letter) {
                return false;
            }
            scratch[i] = None;
        }
    }

    for (i, (&letter, &color)) in played.iter().zip(colors).enumerate() {
        if color == Color::Yellow {
            // would have been green
            if candidate.letters()[i] == letter {
                return false;
            }
            match scratch.iter_mut().find(|slot| **slot == Some(letter)) {
                Some(slot) => *slot = None,
                None => return false,
            }
        }
    }

    for (i, (&letter, &color)) in played.iter().zip(colors).enumerate() {
        if color == Color::Black
            && (candidate.letters()[i] == letter || scratch.contains(&Some(letter)))
        {
            return false;
        }
    }

    true
}

/// Keep the words that are consistent with `guess` having scored `code`, in their original order.
pub fn possible(guess: &Word, code: &ColorCode, words: &[Word]) -> Vec<Word> {
    words
        .iter()
        .filter(|word| is_consistent(guess, code, word))
        .cloned()
        .collect()
}

/// Number of words [`possible`] would keep, without allocating.
pub fn count_possible(guess: &Word, code: &ColorCode, words: &[Word]) -> usize {
    words
        .iter()
        .filter(|word| is_consistent(guess, code, word))
        .count()
}
