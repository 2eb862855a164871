//! Words and word lists.
//!
//! A [`Word`] is an immutable, length-tagged sequence of letters. A [`Corpus`] is an ordered
//! list of unique words that all share one length, which is checked when the corpus is built
//! so that a length mismatch never reaches the evaluator.

use crate::error::{Error, Result};
use log::debug;
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Box<str>,
    letters: Box<[char]>,
}

impl Word {
    pub fn new(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::EmptyWord);
        }
        Ok(Self {
            text: text.into(),
            letters: text.chars().collect(),
        })
    }

    /// Number of letters (not bytes)
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        &*self.text == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        &*self.text == *other
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.text)
    }
}

/// An ordered list of unique words of a single length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<Word>,
}

impl Corpus {
    /// Build a corpus from already parsed words, keeping the first occurrence of duplicates.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Result<Self> {
        Self::build(words.into_iter().enumerate().map(|(idx, word)| (idx + 1, word)))
    }

    /// Parse one word per line. Surrounding whitespace is trimmed and blank lines are skipped.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let numbered = lines
            .into_iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let line = line.as_ref().trim();
                (!line.is_empty()).then(|| Word::new(line).map(|word| (idx + 1, word)))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::build(numbered)
    }

    fn build(numbered: impl IntoIterator<Item = (usize, Word)>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut words: Vec<Word> = Vec::new();
        for (line, word) in numbered {
            if let Some(first) = words.first() {
                if first.len() != word.len() {
                    return Err(Error::MixedLength {
                        line,
                        expected: first.len(),
                        found: word.len(),
                        word: word.to_string(),
                    });
                }
            }
            if seen.insert(word.clone()) {
                words.push(word);
            } else {
                debug!("dropping duplicate word '{}'", word);
            }
        }
        Ok(Self { words })
    }

    /// Read a word list from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        let reader = BufReader::new(File::open(path).map_err(io_err)?);
        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(io_err)?;
        let corpus = Self::from_lines(lines)?;
        debug!("loaded {} words from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// The shared word length, or `None` for an empty corpus.
    pub fn word_len(&self) -> Option<usize> {
        self.words.first().map(Word::len)
    }

    /// Fails if both corpora are non-empty and their word lengths differ.
    pub fn check_compatible(&self, other: &Corpus) -> Result<()> {
        match (self.words.first(), other.words.first()) {
            (Some(a), Some(b)) if a.len() != b.len() => Err(Error::LengthMismatch {
                guess: a.to_string(),
                word: b.to_string(),
            }),
            _ => Ok(()),
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
