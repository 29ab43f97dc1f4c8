//! Dictionary filtering command
//!
//! Validates the user's constraints, then scans the dictionary file for words
//! that fit them.

use crate::core::{Matcher, ValidationError};
use crate::wordlists::{Dictionary, DictionaryError};
use std::fmt;
use std::path::PathBuf;

/// Words shown per output line unless overridden
pub const DEFAULT_WORDS_PER_LINE: usize = 10;

/// Configuration for one filter run
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub word: String,
    pub known_letters: String,
    pub excluded_letters: String,
    pub dictionary: PathBuf,
}

impl FilterConfig {
    #[must_use]
    pub fn new(word: impl Into<String>, dictionary: impl Into<PathBuf>) -> Self {
        Self {
            word: word.into(),
            known_letters: String::new(),
            excluded_letters: String::new(),
            dictionary: dictionary.into(),
        }
    }

    #[must_use]
    pub fn with_known_letters(mut self, letters: impl Into<String>) -> Self {
        self.known_letters = letters.into();
        self
    }

    #[must_use]
    pub fn with_excluded_letters(mut self, letters: impl Into<String>) -> Self {
        self.excluded_letters = letters.into();
        self
    }

    /// Validate the three constraint inputs and build the matcher
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first malformed input.
    pub fn compile(&self) -> Result<Matcher, ValidationError> {
        Matcher::from_inputs(&self.word, &self.known_letters, &self.excluded_letters)
    }
}

/// Result of filtering a dictionary
#[derive(Debug, Clone)]
pub struct FilterResult {
    pub matcher: Matcher,
    pub words: Vec<String>,
}

impl FilterResult {
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }
}

/// Error type for a failed filter run
#[derive(Debug)]
pub enum FilterError {
    Validation(ValidationError),
    Dictionary(DictionaryError),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "{e}"),
            Self::Dictionary(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Dictionary(e) => Some(e),
        }
    }
}

impl From<ValidationError> for FilterError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DictionaryError> for FilterError {
    fn from(e: DictionaryError) -> Self {
        Self::Dictionary(e)
    }
}

/// Filter an opened dictionary with an already compiled matcher
///
/// # Errors
///
/// Returns `DictionaryError` if the dictionary cannot be read.
pub fn filter_dictionary(
    matcher: Matcher,
    dictionary: Dictionary,
) -> Result<FilterResult, DictionaryError> {
    let words = dictionary.scan(&matcher)?;
    Ok(FilterResult { matcher, words })
}

/// Validate the inputs and filter the dictionary
///
/// Validation runs before the dictionary is opened, and the dictionary is
/// opened before any of it is read.
///
/// # Errors
///
/// Returns an error if:
/// - Any of the word, known letters or excluded letters is malformed
/// - The dictionary file cannot be opened or read
pub fn run_filter(config: &FilterConfig) -> Result<FilterResult, FilterError> {
    let matcher = config.compile()?;
    let dictionary = Dictionary::open(&config.dictionary)?;
    Ok(filter_dictionary(matcher, dictionary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Field;

    #[test]
    fn config_builder() {
        let config = FilterConfig::new("a??le", "words.txt")
            .with_known_letters("p")
            .with_excluded_letters("xyz");
        assert_eq!(config.word, "a??le");
        assert_eq!(config.known_letters, "p");
        assert_eq!(config.excluded_letters, "xyz");
        assert_eq!(config.dictionary, PathBuf::from("words.txt"));
    }

    #[test]
    fn validation_runs_before_dictionary_is_opened() {
        let config = FilterConfig::new("able", "/nonexistent/words-12345.txt");
        let err = run_filter(&config).unwrap_err();
        assert!(matches!(
            err,
            FilterError::Validation(ValidationError::InvalidLength {
                field: Field::Word,
                len: 4
            })
        ));
    }

    #[test]
    fn duplicate_known_letters_rejected() {
        let config =
            FilterConfig::new("?????", "/nonexistent/words-12345.txt").with_known_letters("aA");
        assert!(matches!(
            run_filter(&config),
            Err(FilterError::Validation(ValidationError::DuplicateLetter { .. }))
        ));
    }

    #[test]
    fn missing_dictionary_reported() {
        let config = FilterConfig::new("?????", "/nonexistent/words-12345.txt");
        let err = run_filter(&config).unwrap_err();
        assert!(matches!(err, FilterError::Dictionary(_)));
        assert!(err.to_string().contains("/nonexistent/words-12345.txt"));
    }
}
