//! Wordle Helper
//!
//! Filters a dictionary down to the words consistent with a partially solved
//! Wordle: a 5-letter pattern with wildcards, letters known to be in the word,
//! and letters known to be absent from its unconfirmed positions.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::Matcher;
//! use wordle_helper::wordlists::scan_all;
//!
//! let matcher = Matcher::from_inputs("????s", "a", "e").unwrap();
//! let dictionary = "canoe\ncrabs\nspams\ntacos\n";
//!
//! let words = scan_all(&matcher, dictionary.as_bytes()).unwrap();
//! assert_eq!(words, ["CRABS", "SPAMS", "TACOS"]);
//! ```

// Core domain types
pub mod core;

// Dictionary scanning
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
