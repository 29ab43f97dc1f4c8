//! Display functions for filter inputs and results

use super::formatters::{LetterClass, classify_word};
use crate::commands::FilterResult;
use crate::core::{LetterSet, Matcher, Pattern, Slot};
use colored::{ColoredString, Colorize};
use std::path::Path;

/// Print the program name and version
pub fn print_banner() {
    println!("{} {}\n", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

/// Print the constraints being applied and the dictionary in use
pub fn print_constraints(matcher: &Matcher, dictionary: &Path) {
    println!("            Word: {}", format_pattern(matcher.pattern()));
    println!(
        "   Known Letters: {}",
        format_letters(matcher.required(), |s| s.yellow())
    );
    println!(
        "Excluded Letters: {}",
        format_letters(matcher.excluded(), |s| s.bright_black())
    );
    println!("\n Dictionary File: {}", dictionary.display());
}

/// Print the matched words, colored per letter
pub fn print_filter_result(result: &FilterResult, words_per_line: usize) {
    println!("\n Potential Words: {}\n", result.count());

    let matcher = &result.matcher;
    for line in result.words.chunks(words_per_line.max(1)) {
        let rendered: Vec<String> = line
            .iter()
            .map(|word| render_word(word, matcher.pattern(), matcher.required()))
            .collect();
        println!("{}", rendered.join(" "));
    }
    println!();
}

/// Render one result word with exact / known letters highlighted
#[must_use]
pub fn render_word(word: &str, pattern: &Pattern, known: &LetterSet) -> String {
    classify_word(word, pattern, known)
        .into_iter()
        .map(|(ch, class)| paint(ch, class).to_string())
        .collect()
}

fn paint(ch: char, class: LetterClass) -> ColoredString {
    let text = ch.to_string();
    match class {
        LetterClass::Exact => text.green(),
        LetterClass::Known => text.yellow(),
        LetterClass::Plain => text.normal(),
    }
}

fn format_pattern(pattern: &Pattern) -> String {
    pattern
        .slots()
        .iter()
        .map(|slot| match slot {
            Slot::Fixed(letter) => char::from(*letter).to_string().green().to_string(),
            Slot::Wildcard => "_".white().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_letters(letters: &LetterSet, color: impl Fn(&str) -> ColoredString) -> String {
    if letters.is_empty() {
        return "None".to_string();
    }
    color(&letters.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain<T>(f: impl FnOnce() -> T) -> T {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn render_word_without_color_is_uppercase_text() {
        let pattern = Pattern::parse("????s").unwrap();
        let known = LetterSet::known("a").unwrap();
        assert_eq!(plain(|| render_word("tacos", &pattern, &known)), "TACOS");
    }

    #[test]
    fn format_pattern_without_color() {
        let pattern = Pattern::parse("a? le").unwrap();
        assert_eq!(plain(|| format_pattern(&pattern)), "A _ _ L E");
    }

    #[test]
    fn format_letters_none_when_empty() {
        assert_eq!(
            plain(|| format_letters(&LetterSet::empty(), |s| s.yellow())),
            "None"
        );
        let known = LetterSet::known("ra").unwrap();
        assert_eq!(plain(|| format_letters(&known, |s| s.yellow())), "A R");
    }
}
