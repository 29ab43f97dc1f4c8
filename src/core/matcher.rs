//! Compiled filtering rule
//!
//! A [`Matcher`] is built once from a pattern, the known letters and the
//! excluded letters, then applied read-only to every dictionary line.
//!
//! Rules per candidate (compared in uppercase):
//! 1. The candidate must be exactly 5 ASCII bytes long
//! 2. A fixed slot must hold that letter
//! 3. A wildcard slot must hold a letter that is not excluded
//! 4. Every known letter must appear somewhere in the candidate
//!
//! Exclusion only applies to wildcard slots, so a confirmed letter that is
//! also listed as excluded still matches in its fixed position.

use super::error::ValidationError;
use super::letters::LetterSet;
use super::pattern::{Pattern, Slot, WORD_LENGTH};
use log::debug;
use std::fmt;

/// Compiled test for one position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRule {
    /// Must equal this uppercase letter
    Exactly(u8),
    /// Any letter outside the excluded set
    AnyAllowed,
}

/// Immutable rule set derived from one pattern / known / excluded triple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    pattern: Pattern,
    rules: [SlotRule; WORD_LENGTH],
    required: LetterSet,
    excluded: LetterSet,
}

impl Matcher {
    /// Compile already validated inputs
    #[must_use]
    pub fn compile(pattern: &Pattern, known: &LetterSet, excluded: &LetterSet) -> Self {
        let slots = *pattern.slots();
        let rules = slots.map(|slot| match slot {
            Slot::Fixed(letter) => SlotRule::Exactly(letter),
            Slot::Wildcard => SlotRule::AnyAllowed,
        });

        let matcher = Self {
            pattern: *pattern,
            rules,
            required: known.clone(),
            excluded: excluded.clone(),
        };
        debug!("Compiled matcher: {matcher}");
        matcher
    }

    /// Validate the raw inputs and compile them
    ///
    /// Fields are checked in order (word, known letters, excluded letters) and
    /// the first failure is returned.
    ///
    /// # Errors
    /// Returns `ValidationError` describing the first invalid field.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Matcher;
    ///
    /// let matcher = Matcher::from_inputs("????s", "a", "e").unwrap();
    /// assert!(matcher.matches("crabs"));
    /// assert!(!matcher.matches("canoe"));
    /// ```
    pub fn from_inputs(word: &str, known: &str, excluded: &str) -> Result<Self, ValidationError> {
        let pattern = Pattern::parse(word)?;
        let known = LetterSet::known(known)?;
        let excluded = LetterSet::excluded(excluded)?;
        Ok(Self::compile(&pattern, &known, &excluded))
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &[SlotRule; WORD_LENGTH] {
        &self.rules
    }

    /// Letters that must appear anywhere in a match
    #[inline]
    #[must_use]
    pub const fn required(&self) -> &LetterSet {
        &self.required
    }

    /// Letters barred from wildcard slots
    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> &LetterSet {
        &self.excluded
    }

    /// Test a candidate, returning it uppercased when it matches
    #[must_use]
    pub fn accept(&self, candidate: &str) -> Option<String> {
        let upper = candidate.to_ascii_uppercase();
        self.matches_upper(upper.as_bytes()).then_some(upper)
    }

    /// Test a candidate, ignoring case
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.matches_upper(candidate.to_ascii_uppercase().as_bytes())
    }

    fn matches_upper(&self, word: &[u8]) -> bool {
        // Non-ASCII bytes fail every rule below, so byte length is enough here
        if word.len() != WORD_LENGTH {
            return false;
        }

        let positional = self
            .rules
            .iter()
            .zip(word)
            .all(|(rule, &ch)| self.rule_allows(*rule, ch));

        positional && self.required.all_present_in(word)
    }

    fn rule_allows(&self, rule: SlotRule, ch: u8) -> bool {
        match rule {
            SlotRule::Exactly(letter) => ch == letter,
            SlotRule::AnyAllowed => ch.is_ascii_uppercase() && !self.excluded.contains(ch),
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pattern [{}], known [{}], excluded [{}]",
            self.pattern, self.required, self.excluded
        )
    }
}
