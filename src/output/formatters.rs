//! Per-letter classification of matched words
//!
//! Pure functions that decide how each letter of a result is highlighted,
//! kept apart from the terminal colouring in [`super::display`].

use crate::core::{LetterSet, Pattern};

/// Display category of one letter of a result word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    /// Same letter as the pattern's confirmed letter at this position
    Exact,
    /// A known letter that is not an exact positional match
    Known,
    /// Neither
    Plain,
}

/// Classify `letter` found at `position` of a result word, ignoring case
///
/// Positions past the end of the pattern are never exact.
#[must_use]
pub fn classify(
    letter: char,
    position: usize,
    pattern: &Pattern,
    known: &LetterSet,
) -> LetterClass {
    if !letter.is_ascii_alphabetic() {
        return LetterClass::Plain;
    }
    let letter = letter.to_ascii_uppercase() as u8;

    let exact = pattern
        .slots()
        .get(position)
        .and_then(|slot| slot.letter())
        .is_some_and(|fixed| fixed == letter);

    if exact {
        LetterClass::Exact
    } else if known.contains(letter) {
        LetterClass::Known
    } else {
        LetterClass::Plain
    }
}

/// Classify every letter of a word
///
/// Letters are returned uppercased alongside their class.
#[must_use]
pub fn classify_word(
    word: &str,
    pattern: &Pattern,
    known: &LetterSet,
) -> Vec<(char, LetterClass)> {
    word.chars()
        .enumerate()
        .map(|(i, ch)| (ch.to_ascii_uppercase(), classify(ch, i, pattern, known)))
        .collect()
}
