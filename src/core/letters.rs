//! Known and excluded letter sets

use super::error::{Field, ValidationError};
use rustc_hash::FxHashSet;
use std::fmt;

/// Most letters a known-letters list may hold
pub const MAX_KNOWN_LETTERS: usize = 5;

/// Most letters an excluded-letters list may hold
pub const MAX_EXCLUDED_LETTERS: usize = 26;

/// A set of distinct uppercase ASCII letters
///
/// Used both for letters known to be in the word and for letters known to be
/// absent from its unconfirmed positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSet {
    letters: FxHashSet<u8>,
}

impl LetterSet {
    /// The empty set (no constraint)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a known-letters list (0-5 unique letters)
    ///
    /// # Errors
    /// Returns `ValidationError` for non-letters, duplicates (ignoring case)
    /// or more than 5 letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::LetterSet;
    ///
    /// let known = LetterSet::known("ra").unwrap();
    /// assert!(known.contains(b'A'));
    /// assert!(known.contains(b'r'));
    ///
    /// assert!(LetterSet::known("aA").is_err());
    /// ```
    pub fn known(text: &str) -> Result<Self, ValidationError> {
        Self::parse(text, Field::KnownLetters, MAX_KNOWN_LETTERS)
    }

    /// Parse an excluded-letters list (0-26 unique letters)
    ///
    /// # Errors
    /// Returns `ValidationError` for non-letters or duplicates (ignoring case).
    pub fn excluded(text: &str) -> Result<Self, ValidationError> {
        Self::parse(text, Field::ExcludedLetters, MAX_EXCLUDED_LETTERS)
    }

    fn parse(text: &str, field: Field, max: usize) -> Result<Self, ValidationError> {
        let count = text.chars().count();
        if count > max {
            return Err(ValidationError::TooManyLetters { field, count, max });
        }

        let mut letters = FxHashSet::default();
        for ch in text.chars() {
            if !ch.is_ascii_alphabetic() {
                return Err(ValidationError::InvalidCharacter { field, ch });
            }
            let letter = ch.to_ascii_uppercase();
            if !letters.insert(letter as u8) {
                return Err(ValidationError::DuplicateLetter { field, letter });
            }
        }

        Ok(Self { letters })
    }

    /// Check membership, ignoring case
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter.to_ascii_uppercase())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Check that every letter of the set appears somewhere in `word`
    ///
    /// `word` must already be uppercase.
    #[must_use]
    pub fn all_present_in(&self, word: &[u8]) -> bool {
        self.letters.iter().all(|letter| word.contains(letter))
    }

    /// Letters in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.letters.iter().map(|&b| char::from(b)).collect();
        letters.sort_unstable();
        letters
    }
}

/// Renders as `A E R`, or `None` when empty
impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }
        for (i, letter) in self.sorted().into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
