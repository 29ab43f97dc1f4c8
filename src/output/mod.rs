//! Terminal output formatting
//!
//! Letter classification and colored printing of filter results.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_constraints, print_filter_result, render_word};
pub use formatters::{LetterClass, classify, classify_word};
