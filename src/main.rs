//! Wordle Helper - CLI
//!
//! Lists the dictionary words that fit a partially solved Wordle, with
//! confirmed letters in green and known letters in yellow.

use anyhow::{Context, Result};
use clap::{Parser, builder::TypedValueParser};
use log::{LevelFilter, debug};
use std::path::PathBuf;
use wordle_helper::{
    commands::{DEFAULT_WORDS_PER_LINE, FilterConfig, filter_dictionary},
    output::{print_banner, print_constraints, print_filter_result},
    wordlists::Dictionary,
};

#[derive(Parser, Debug)]
#[command(
    name = "wordle_helper",
    about = "List the dictionary words that fit a partially solved Wordle",
    version
)]
struct Cli {
    /// The word to get help with: 5 letters, using ? or a blank for unknown letters
    #[arg(short, long)]
    word: String,

    /// Letters known to be in the word but not their position
    #[arg(short, long, default_value = "")]
    known_letters: String,

    /// Letters known NOT to be in the word
    #[arg(short, long, default_value = "")]
    excluded_letters: String,

    /// Path to the dictionary file containing words to check against
    #[arg(short, long)]
    dictionary_file: PathBuf,

    /// Number of words printed on each line
    #[arg(short = 'n', long, default_value_t = DEFAULT_WORDS_PER_LINE,
          value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    words_per_line: usize,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> FilterConfig {
        FilterConfig::new(&self.word, &self.dictionary_file)
            .with_known_letters(&self.known_letters)
            .with_excluded_letters(&self.excluded_letters)
    }

    const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins over -v
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }
    debug!("Command line options: {cli:?}");

    let config = cli.config();
    let matcher = config.compile()?;
    // Nothing is printed until every input, including the file, is usable
    let dictionary = Dictionary::open(&config.dictionary)?;

    print_banner();
    print_constraints(&matcher, dictionary.path());

    let result = filter_dictionary(matcher, dictionary).context("Failed to filter dictionary")?;
    print_filter_result(&result, cli.words_per_line);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_short_options() {
        let cli = Cli::try_parse_from([
            "wordle_helper", "-w", "a??le", "-k", "p", "-e", "xyz", "-d", "words.txt",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.word, "a??le");
        assert_eq!(config.known_letters, "p");
        assert_eq!(config.excluded_letters, "xyz");
        assert_eq!(config.dictionary, PathBuf::from("words.txt"));
        assert_eq!(cli.words_per_line, DEFAULT_WORDS_PER_LINE);
        assert_eq!(cli.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn letters_default_to_empty() {
        let cli = Cli::try_parse_from(["wordle_helper", "-w", "?????", "-d", "words.txt"]).unwrap();
        assert!(cli.known_letters.is_empty());
        assert!(cli.excluded_letters.is_empty());
    }

    #[test]
    fn word_and_dictionary_required() {
        assert!(Cli::try_parse_from(["wordle_helper", "-d", "words.txt"]).is_err());
        assert!(Cli::try_parse_from(["wordle_helper", "-w", "crane"]).is_err());
    }

    #[test]
    fn words_per_line_must_be_positive() {
        let args = ["wordle_helper", "-w", "crane", "-d", "words.txt", "-n"];
        assert!(Cli::try_parse_from(args.iter().chain(&["0"])).is_err());
        let cli = Cli::try_parse_from(args.iter().chain(&["4"])).unwrap();
        assert_eq!(cli.words_per_line, 4);
    }

    #[test]
    fn verbosity_levels() {
        let cli =
            Cli::try_parse_from(["wordle_helper", "-w", "crane", "-d", "w.txt", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::Debug);
    }
}
