//! The round-by-round solving loop.
//!
//! A [`Solver`] is one solving session over a guess corpus and an answer corpus. It owns its
//! [`GuessCache`], so separate sessions never share memoized guesses and a test can start from
//! a cold cache whenever it needs to.

use crate::cache::{CacheStats, GuessCache, KeyMode};
use crate::error::{Error, Result};
use crate::feedback::{evaluate, ColorCode};
use crate::filter::possible;
use crate::selector::best_next_guess;
use crate::word::{Corpus, Word};
use log::{debug, info};
use std::collections::BTreeMap;

/// One played guess and what came of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub code: ColorCode,
    /// Candidates still consistent after this round
    pub remaining: usize,
}

/// The next guess for a game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub guess: Word,
    pub candidates: Vec<Word>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRecord {
    pub secret: Word,
    pub guesses: Vec<Word>,
}

/// Aggregate results of solving every answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkReport {
    pub solved: usize,
    pub total_guesses: usize,
    /// Number of secrets solved in exactly n guesses, keyed by n
    pub distribution: BTreeMap<usize, usize>,
    /// The first secret that needed the most guesses
    pub worst: Option<(Word, usize)>,
}

impl BenchmarkReport {
    pub fn average(&self) -> f64 {
        if self.solved == 0 {
            return 0.0;
        }
        self.total_guesses as f64 / self.solved as f64
    }

    fn record(&mut self, record: &SolveRecord) {
        let count = record.guesses.len();
        self.solved += 1;
        self.total_guesses += count;
        *self.distribution.entry(count).or_default() += 1;
        if self.worst.as_ref().map_or(true, |(_, worst)| count > *worst) {
            self.worst = Some((record.secret.clone(), count));
        }
    }
}

#[derive(Debug, Clone)]
pub struct Solver<'a> {
    guesses: &'a Corpus,
    answers: &'a Corpus,
    cache: GuessCache,
}

impl<'a> Solver<'a> {
    pub fn new(guesses: &'a Corpus, answers: &'a Corpus) -> Result<Self> {
        Self::with_cache(guesses, answers, GuessCache::default())
    }

    pub fn with_key_mode(
        guesses: &'a Corpus,
        answers: &'a Corpus,
        mode: KeyMode,
    ) -> Result<Self> {
        Self::with_cache(guesses, answers, GuessCache::new(mode))
    }

    /// Start a session with an existing cache, e.g. one warmed by an earlier session over the
    /// same corpora.
    pub fn with_cache(
        guesses: &'a Corpus,
        answers: &'a Corpus,
        cache: GuessCache,
    ) -> Result<Self> {
        guesses.check_compatible(answers)?;
        if guesses.is_empty() {
            return Err(Error::EmptyGuessCorpus);
        }
        Ok(Self {
            guesses,
            answers,
            cache,
        })
    }

    pub fn guesses(&self) -> &Corpus {
        self.guesses
    }

    pub fn answers(&self) -> &Corpus {
        self.answers
    }

    pub fn cache(&self) -> &GuessCache {
        &self.cache
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn into_cache(self) -> GuessCache {
        self.cache
    }

    /// Played words must have the corpus word length.
    fn check_length(&self, guess: &Word) -> Result<()> {
        match self.guesses.words().first() {
            Some(sample) if sample.len() != guess.len() => Err(Error::LengthMismatch {
                guess: guess.to_string(),
                word: sample.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Play against a known secret, starting with `opening`. Returns every guess made, the
    /// last one being the secret.
    pub fn solve(&mut self, secret: &Word, opening: &Word) -> Result<Vec<Word>> {
        let rounds = self.solve_with_feedback(opening, |guess| evaluate(secret, guess))?;
        Ok(rounds.into_iter().map(|round| round.guess).collect())
    }

    /// Play until `get_feedback` reports an all-green code.
    ///
    /// The first round plays `opening`. Every later round asks the cache, and on a miss the
    /// selector, for the best guess against the candidates left so far.
    pub fn solve_with_feedback<F>(
        &mut self,
        opening: &Word,
        mut get_feedback: F,
    ) -> Result<Vec<Round>>
    where
        F: FnMut(&Word) -> Result<ColorCode>,
    {
        self.check_length(opening)?;
        let guesses = self.guesses.words();
        let mut history: Vec<Word> = Vec::new();
        let mut rounds = Vec::new();
        let mut remaining: Vec<Word> = self.answers.words().to_vec();

        loop {
            let guess = if !history.is_empty() {
                if remaining.is_empty() {
                    return Err(Error::NoCandidates);
                }
                let candidates = &remaining;
                self.cache.get_or_try_insert_with(&history, candidates, || {
                    best_next_guess(guesses, candidates).cloned()
                })?
            } else {
                opening.clone()
            };

            let code = get_feedback(&guess)?;
            if code.len() != guess.len() {
                return Err(Error::InvalidCode {
                    guess: guess.to_string(),
                    code: code.to_string(),
                });
            }

            let before = remaining.len();
            remaining = possible(&guess, &code, &remaining);
            debug!("{} -> {} ({} -> {} candidates)", guess, code, before, remaining.len());

            let solved = code.is_solved();
            history.push(guess.clone());
            rounds.push(Round {
                guess,
                code,
                remaining: remaining.len(),
            });
            if solved {
                return Ok(rounds);
            }
        }
    }

    /// Narrow the answers with feedback already received and pick the next guess.
    ///
    /// This never consults or fills the cache.
    pub fn recommend(&self, played: &[(Word, ColorCode)]) -> Result<Recommendation> {
        let mut candidates = self.answers.words().to_vec();
        for (guess, code) in played {
            self.check_length(guess)?;
            if code.len() != guess.len() {
                return Err(Error::InvalidCode {
                    guess: guess.to_string(),
                    code: code.to_string(),
                });
            }
            candidates = possible(guess, code, &candidates);
            debug!("{} {} leaves {} candidates", guess, code, candidates.len());
        }

        if candidates.is_empty() {
            return Err(Error::NoCandidates);
        }
        let guess = best_next_guess(self.guesses.words(), &candidates)?.clone();
        Ok(Recommendation { guess, candidates })
    }

    /// Solve every answer in corpus order with one shared cache, calling `on_solved` after
    /// each one with the running totals.
    pub fn benchmark<F>(&mut self, opening: &Word, mut on_solved: F) -> Result<BenchmarkReport>
    where
        F: FnMut(&SolveRecord, &BenchmarkReport),
    {
        let answers = self.answers;
        let mut report = BenchmarkReport::default();
        info!("solving {} answers starting with {}", answers.len(), opening);

        for secret in answers {
            let guesses = self.solve(secret, opening)?;
            let record = SolveRecord {
                secret: secret.clone(),
                guesses,
            };
            report.record(&record);
            on_solved(&record, &report);
        }

        let stats = self.cache.stats();
        info!(
            "average {:.4} guesses; cache {} entries, {} hits, {} misses",
            report.average(),
            stats.entries,
            stats.hits,
            stats.misses
        );
        Ok(report)
    }
}
