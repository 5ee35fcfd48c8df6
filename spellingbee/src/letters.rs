use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Words shorter than this many characters never qualify unless a
/// query asks otherwise.
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// A set of letters.
///
/// A letter is a Unicode scalar value, so `"é"` is one letter whether or
/// not it would render as one glyph in its decomposed form. Letters are
/// compared exactly; no case folding is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Letters(HashSet<char>);

/// Split a string into its distinct letters.
///
/// `"aab"` and `"ab"` produce the same set.
pub fn letters_of(s: &str) -> Letters {
    s.chars().collect()
}

impl Letters {
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn is_subset(&self, other: &Letters) -> bool {
        self.0.is_subset(&other.0)
    }

    /// The letters of `self` that are not in `other`.
    pub fn difference(&self, other: &Letters) -> Letters {
        self.0.difference(&other.0).copied().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<char> for Letters {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Letters(iter.into_iter().collect())
    }
}

impl FromStr for Letters {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(letters_of(s))
    }
}

impl Display for Letters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut letters: Vec<char> = self.iter().collect();
        letters.sort_unstable();
        f.write_str(&letters.into_iter().collect::<String>())
    }
}

/// The rules of a single query: which letters a word may use, which it
/// must use, and how long it has to be.
#[derive(Debug, Clone)]
pub struct LetterBank {
    required: Letters,
    allowed: Letters,
    min_length: usize,
}

impl LetterBank {
    /// Fails with [`Error::MissingRequiredLetters`] when a required letter
    /// is not available, since no word could ever match.
    pub fn new(allowed: Letters, required: Letters, min_length: usize) -> Result<Self> {
        if !required.is_subset(&allowed) {
            return Err(Error::MissingRequiredLetters {
                missing: required.difference(&allowed),
                available: allowed,
            });
        }

        Ok(LetterBank {
            required,
            allowed,
            min_length,
        })
    }

    pub fn allowed(&self) -> &Letters {
        &self.allowed
    }

    pub fn required(&self) -> &Letters {
        &self.required
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Whether `word` is spelled only from allowed letters, is at least
    /// `min_length` letters long and contains every required letter.
    ///
    /// Letters may repeat any number of times.
    pub fn matches(&self, word: &str) -> bool {
        if !word.chars().all(|c| self.allowed.contains(c)) {
            return false;
        }

        if word.chars().count() < self.min_length {
            return false;
        }

        self.required.iter().all(|c| word.contains(c))
    }
}
