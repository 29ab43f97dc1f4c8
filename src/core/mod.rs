//! Core domain types for the word filter
//!
//! Parsing and validation of the three user inputs, and the compiled
//! [`Matcher`] that the dictionary scanner applies to each line.

mod error;
mod letters;
mod matcher;
mod pattern;

pub use error::{Field, ValidationError};
pub use letters::{LetterSet, MAX_EXCLUDED_LETTERS, MAX_KNOWN_LETTERS};
pub use matcher::{Matcher, SlotRule};
pub use pattern::{Pattern, Slot, WORD_LENGTH};
