//! Command implementations

pub mod filter;

pub use filter::{
    DEFAULT_WORDS_PER_LINE, FilterConfig, FilterError, FilterResult, filter_dictionary,
    run_filter,
};
