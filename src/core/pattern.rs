//! The partially known word template
//!
//! A pattern has exactly 5 slots. Each slot is either a confirmed letter or a
//! wildcard, written as `?` or a blank:
//! - `"A??LE"` → A, wildcard, wildcard, L, E
//! - `"  ig "` → wildcard, wildcard, I, G, wildcard

use super::error::{Field, ValidationError};
use std::fmt;

/// Number of letters in a Wordle word
pub const WORD_LENGTH: usize = 5;

/// One position of a [`Pattern`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Confirmed letter, stored as an uppercase ASCII byte
    Fixed(u8),
    /// Unknown letter
    Wildcard,
}

impl Slot {
    /// Parse a single pattern character
    ///
    /// Returns `None` for anything other than an ASCII letter, `?` or a blank.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'A'..='Z' | 'a'..='z' => Some(Self::Fixed((ch as u8).to_ascii_uppercase())),
            '?' | ' ' => Some(Self::Wildcard),
            _ => None,
        }
    }

    /// The confirmed letter, if any
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<u8> {
        match self {
            Self::Fixed(letter) => Some(letter),
            Self::Wildcard => None,
        }
    }
}

/// A validated 5-slot word template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: [Slot; WORD_LENGTH],
}

impl Pattern {
    /// Parse and validate a pattern string
    ///
    /// # Errors
    /// Returns `ValidationError` if:
    /// - The input is not exactly 5 characters long
    /// - Any character is not a letter, `?` or a blank
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Pattern, Slot};
    ///
    /// let pattern = Pattern::parse("a??le").unwrap();
    /// assert_eq!(pattern.slot(0), Slot::Fixed(b'A'));
    /// assert_eq!(pattern.slot(1), Slot::Wildcard);
    ///
    /// assert!(Pattern::parse("able").is_err());
    /// assert!(Pattern::parse("ab*le").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(ValidationError::InvalidLength {
                field: Field::Word,
                len,
            });
        }

        let mut slots = [Slot::Wildcard; WORD_LENGTH];
        for (slot, ch) in slots.iter_mut().zip(text.chars()) {
            *slot = Slot::from_char(ch).ok_or(ValidationError::InvalidCharacter {
                field: Field::Word,
                ch,
            })?;
        }

        Ok(Self { slots })
    }

    /// All slots in order
    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[Slot; WORD_LENGTH] {
        &self.slots
    }

    /// Get the slot at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn slot(&self, position: usize) -> Slot {
        self.slots[position]
    }
}

/// Renders as `A _ _ L E`
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match slot {
                Slot::Fixed(letter) => write!(f, "{}", char::from(*letter))?,
                Slot::Wildcard => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mixed_pattern() {
        let pattern = Pattern::parse("A??LE").unwrap();
        assert_eq!(
            pattern.slots(),
            &[
                Slot::Fixed(b'A'),
                Slot::Wildcard,
                Slot::Wildcard,
                Slot::Fixed(b'L'),
                Slot::Fixed(b'E'),
            ]
        );
    }

    #[test]
    fn parse_blank_and_question_mark_are_equivalent() {
        assert_eq!(Pattern::parse("a  le"), Pattern::parse("a??le"));
        assert_eq!(Pattern::parse("a ?le"), Pattern::parse("A? LE"));
    }

    #[test]
    fn parse_uppercase_normalized() {
        assert_eq!(Pattern::parse("crane"), Pattern::parse("CRANE"));
        assert_eq!(Pattern::parse("CrAnE").unwrap().slot(1), Slot::Fixed(b'R'));
    }

    #[test]
    fn parse_all_wildcards() {
        let pattern = Pattern::parse("?????").unwrap();
        assert!(pattern.slots().iter().all(|s| *s == Slot::Wildcard));
        assert_eq!(pattern.to_string(), "_ _ _ _ _");
    }

    #[test]
    fn parse_complete_pattern() {
        let pattern = Pattern::parse("crane").unwrap();
        assert!(pattern.slots().iter().all(|s| s.letter().is_some()));
        assert_eq!(pattern.to_string(), "C R A N E");
    }

    #[test]
    fn parse_invalid_length() {
        assert!(matches!(
            Pattern::parse("able"),
            Err(ValidationError::InvalidLength {
                field: Field::Word,
                len: 4
            })
        ));
        assert!(matches!(
            Pattern::parse("apples"),
            Err(ValidationError::InvalidLength { len: 6, .. })
        ));
        assert!(matches!(
            Pattern::parse(""),
            Err(ValidationError::InvalidLength { len: 0, .. })
        ));
    }

    #[test]
    fn parse_length_counts_characters_not_bytes() {
        // 5 chars, 6 bytes
        assert!(matches!(
            Pattern::parse("caf\u{e9}s"),
            Err(ValidationError::InvalidCharacter { ch: '\u{e9}', .. })
        ));
    }

    #[test]
    fn parse_invalid_characters() {
        assert!(matches!(
            Pattern::parse("cr4ne"),
            Err(ValidationError::InvalidCharacter { ch: '4', .. })
        ));
        assert!(Pattern::parse("cr*ne").is_err());
        assert!(Pattern::parse("cr_ne").is_err());
    }

    #[test]
    fn parse_rejects_other_whitespace() {
        assert_eq!(
            Pattern::parse("cr\tne"),
            Err(ValidationError::InvalidCharacter {
                field: Field::Word,
                ch: '\t'
            })
        );
        assert!(Pattern::parse("cr\nne").is_err());
    }

    #[test]
    fn slot_from_char() {
        assert_eq!(Slot::from_char('q'), Some(Slot::Fixed(b'Q')));
        assert_eq!(Slot::from_char('?'), Some(Slot::Wildcard));
        assert_eq!(Slot::from_char(' '), Some(Slot::Wildcard));
        assert_eq!(Slot::from_char('\t'), None);
        assert_eq!(Slot::from_char('-'), None);
    }
}
