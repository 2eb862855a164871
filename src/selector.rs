//! Choosing the next guess.
//!
//! Every playable guess is scored by how many candidates would survive it, summed over every
//! candidate secret. This is a greedy one-ply lookahead: it measures the immediate narrowing
//! of a single guess and never recurses into later rounds, so the result is not an optimal
//! decision tree.

use crate::error::{Error, Result};
use crate::feedback::{pack, Color, Scorer, MAX_PACKED_LEN};
use crate::word::Word;
use log::trace;
use rayon::prelude::*;
use std::collections::HashMap;
use std::hash::Hash;

/// How good a single guess is against the current candidates. Lower cost is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessScore {
    /// Sum over every candidate secret of the candidates left after playing the guess
    pub cost: usize,
    /// The guess is itself one of the candidates
    pub in_answers: bool,
}

impl GuessScore {
    /// Lower cost wins, then being a candidate wins.
    fn beats(&self, other: &GuessScore) -> bool {
        self.cost < other.cost || (self.cost == other.cost && self.in_answers && !other.in_answers)
    }
}

/// Score one guess against the candidate answers.
///
/// A candidate equal to the guess contributes 1. Any other candidate `a` contributes the
/// number of candidates consistent with `evaluate(a, guess)`. Those are exactly the
/// candidates sharing `a`'s code, so each code class of size n adds n².
pub fn guess_cost(guess: &Word, answers: &[Word]) -> Result<GuessScore> {
    if guess.len() <= MAX_PACKED_LEN {
        class_cost(guess, answers, pack)
    } else {
        class_cost(guess, answers, <[Color]>::to_vec)
    }
}

/// Count code classes keyed by `key`, reusing one scorer for every answer.
fn class_cost<K, F>(guess: &Word, answers: &[Word], key: F) -> Result<GuessScore>
where
    K: Hash + Eq,
    F: Fn(&[Color]) -> K,
{
    let mut scorer = Scorer::default();
    let mut classes: HashMap<K, usize> = HashMap::new();
    let mut in_answers = false;
    for answer in answers {
        if answer == guess {
            in_answers = true;
            continue;
        }
        *classes.entry(key(scorer.score(answer, guess)?)).or_default() += 1;
    }

    let cost = classes.values().map(|n| n * n).sum::<usize>() + usize::from(in_answers);
    Ok(GuessScore { cost, in_answers })
}

/// Score every guess, in corpus order. Guesses are scored in parallel.
pub fn score_guesses(guesses: &[Word], answers: &[Word]) -> Result<Vec<GuessScore>> {
    guesses
        .par_iter()
        .map(|guess| guess_cost(guess, answers))
        .collect()
}

/// Pick the guess with the smallest cost.
///
/// Ties go to a guess that is also a candidate answer, and after that to whichever guess comes
/// first in `guesses`.
pub fn best_next_guess<'a>(guesses: &'a [Word], answers: &[Word]) -> Result<&'a Word> {
    let scores = score_guesses(guesses, answers)?;

    let mut best: Option<(&Word, GuessScore)> = None;
    for (guess, score) in guesses.iter().zip(scores) {
        trace!("{} cost={} in_answers={}", guess, score.cost, score.in_answers);
        match best {
            Some((_, current)) if !score.beats(&current) => {}
            _ => best = Some((guess, score)),
        }
    }

    best.map(|(guess, _)| guess).ok_or(Error::EmptyGuessCorpus)
}
