//! Dictionary word sources
//!
//! A dictionary is plain text with one candidate word per line.

pub mod scanner;

pub use scanner::{Dictionary, DictionaryError, scan, scan_all, scan_file};
