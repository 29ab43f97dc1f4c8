//! Validation errors for the three constraint inputs

use std::fmt;

/// The user input a [`ValidationError`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Word,
    KnownLetters,
    ExcludedLetters,
}

impl Field {
    /// The format rule for this field, shown with every error
    #[must_use]
    pub const fn rule(self) -> &'static str {
        match self {
            Self::Word => "Word must be 5 characters of either A-Z, a-z, ?, or ' '",
            Self::KnownLetters => "Known letters must be a unique list of A-Z or a-z characters",
            Self::ExcludedLetters => {
                "Excluded letters must be a unique list of A-Z or a-z characters"
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word => write!(f, "word"),
            Self::KnownLetters => write!(f, "known letters"),
            Self::ExcludedLetters => write!(f, "excluded letters"),
        }
    }
}

/// Error type for malformed pattern or letter inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Wrong number of characters (`len` counted in chars)
    InvalidLength { field: Field, len: usize },
    /// Too many letters for the field
    TooManyLetters { field: Field, count: usize, max: usize },
    /// A character outside the field's alphabet
    InvalidCharacter { field: Field, ch: char },
    /// The same letter given twice, ignoring case
    DuplicateLetter { field: Field, letter: char },
}

impl ValidationError {
    /// Which input failed
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::InvalidLength { field, .. }
            | Self::TooManyLetters { field, .. }
            | Self::InvalidCharacter { field, .. }
            | Self::DuplicateLetter { field, .. } => *field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = self.field().rule();
        match self {
            Self::InvalidLength { len, .. } => write!(f, "{rule} (got {len} characters)"),
            Self::TooManyLetters { count, max, .. } => {
                write!(f, "{rule} (got {count} letters, at most {max} allowed)")
            }
            Self::InvalidCharacter { ch, .. } => write!(f, "{rule} (invalid character {ch:?})"),
            Self::DuplicateLetter { letter, .. } => {
                write!(f, "{rule} ({letter} appears more than once)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
