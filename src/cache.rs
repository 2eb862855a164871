//! Memoized next guesses.
//!
//! A [`GuessCache`] maps a (guess history, candidate set) pair to the guess the selector chose
//! for it. By default the pair is reduced to two 32-bit fingerprints: FNV-1a per word, folded
//! with XOR so any permutation of the same words collides. Two different sets can share a
//! fingerprint, in which case a wrong guess is silently reused. [`KeyMode::Exact`] keys on the
//! sorted words themselves instead and never confuses two sets.

use crate::error::Result;
use crate::word::Word;
use log::debug;
use std::collections::HashMap;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

fn fnv1a(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &b| {
        (hash ^ u32::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// Order-independent fingerprint of a set of words.
pub fn fingerprint(words: &[Word]) -> u32 {
    words
        .iter()
        .fold(0, |acc, word| acc ^ fnv1a(word.as_str().as_bytes()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMode {
    /// Weak combined hashes, may collide
    #[default]
    Fingerprint,
    /// Sorted copies of the history and candidates
    Exact,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CacheKey {
    Fingerprint { history: u32, candidates: u32 },
    Exact { history: Vec<Word>, candidates: Vec<Word> },
}

impl CacheKey {
    fn new(mode: KeyMode, history: &[Word], candidates: &[Word]) -> Self {
        match mode {
            KeyMode::Fingerprint => CacheKey::Fingerprint {
                history: fingerprint(history),
                candidates: fingerprint(candidates),
            },
            KeyMode::Exact => {
                let sorted = |words: &[Word]| {
                    let mut words = words.to_vec();
                    words.sort_unstable();
                    words
                };
                CacheKey::Exact {
                    history: sorted(history),
                    candidates: sorted(candidates),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Unbounded memo table for selector results. Never evicts.
#[derive(Debug, Clone, Default)]
pub struct GuessCache {
    mode: KeyMode,
    entries: HashMap<CacheKey, Word>,
    hits: u64,
    misses: u64,
}

impl GuessCache {
    pub fn new(mode: KeyMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    pub fn get(&mut self, history: &[Word], candidates: &[Word]) -> Option<Word> {
        let found = self
            .entries
            .get(&CacheKey::new(self.mode, history, candidates))
            .cloned();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    pub fn insert(&mut self, history: &[Word], candidates: &[Word], guess: Word) {
        let key = CacheKey::new(self.mode, history, candidates);
        self.entries.insert(key, guess);
    }

    /// Return the cached guess, or compute it with `select` and remember it.
    pub fn get_or_try_insert_with<F>(
        &mut self,
        history: &[Word],
        candidates: &[Word],
        select: F,
    ) -> Result<Word>
    where
        F: FnOnce() -> Result<Word>,
    {
        let key = CacheKey::new(self.mode, history, candidates);
        if let Some(guess) = self.entries.get(&key) {
            self.hits += 1;
            debug!("cache hit: {} ({} candidates)", guess, candidates.len());
            return Ok(guess.clone());
        }

        self.misses += 1;
        let guess = select()?;
        debug!("cache miss: selected {} ({} candidates)", guess, candidates.len());
        self.entries.insert(key, guess.clone());
        Ok(guess)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn fnv_reference_values() {
        assert_eq!(fnv1a(b""), 0x811c_9dc5);
        assert_eq!(fnv1a(b"a"), 0xe40c_292c);
        assert_eq!(fnv1a(b"foobar"), 0xbf9c_f968);
    }

    #[test]
    fn fingerprint_ignores_order() {
        let a = words(&["crane", "slate", "toast"]);
        let b = words(&["toast", "crane", "slate"]);
        assert_eq!(fingerprint(&a), fingerprint(&b));
        assert_ne!(fingerprint(&a), fingerprint(&a[..2]));
        assert_eq!(fingerprint(&[]), 0);
    }

    #[test]
    fn exact_keys_ignore_order() {
        let mut cache = GuessCache::new(KeyMode::Exact);
        let history = words(&["salet"]);
        cache.insert(&history, &words(&["crane", "toast"]), Word::new("crane").unwrap());
        assert_eq!(
            cache.get(&history, &words(&["toast", "crane"])),
            Some(Word::new("crane").unwrap())
        );
        assert_eq!(cache.get(&history, &words(&["toast"])), None);
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                entries: 1
            }
        );
    }

    #[test]
    fn get_or_insert_only_selects_once() {
        let mut cache = GuessCache::default();
        let history = words(&["salet"]);
        let candidates = words(&["crane", "toast"]);
        let mut calls = 0;
        for _ in 0..3 {
            let guess = cache
                .get_or_try_insert_with(&history, &candidates, || {
                    calls += 1;
                    Ok(Word::new("toast").unwrap())
                })
                .unwrap();
            assert_eq!(guess, "toast");
        }
        assert_eq!(calls, 1);
        assert_eq!(cache.stats().hits, 2);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
