//! Dictionary scanning
//!
//! Applies a compiled [`Matcher`] to a word source one line at a time,
//! keeping the lines that match in their original order.

use crate::core::Matcher;
use log::{info, trace};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Error type for an unreadable dictionary file
#[derive(Debug)]
pub struct DictionaryError {
    path: PathBuf,
    source: io::Error,
}

impl DictionaryError {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// The dictionary file that failed
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to read dictionary file {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// An opened dictionary file
///
/// Opening happens separately from scanning so a missing or unreadable file is
/// reported before anything else is done with it.
#[derive(Debug)]
pub struct Dictionary {
    path: PathBuf,
    reader: BufReader<File>,
}

impl Dictionary {
    /// Open a dictionary file for scanning
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DictionaryError::new(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Filter the whole file, consuming and closing it
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if a line cannot be read.
    pub fn scan(self, matcher: &Matcher) -> Result<Vec<String>, DictionaryError> {
        let Self { path, reader } = self;
        let words = scan_all(matcher, reader).map_err(|e| DictionaryError::new(&path, e))?;
        info!("Matched {} words from {}", words.len(), path.display());
        Ok(words)
    }
}

/// Lazily filter a line source
///
/// Yields each matching line uppercased, in source order. Lines are split on
/// `\n` with a trailing `\r` removed; bytes that are not valid UTF-8 are
/// replaced, so such lines are rejected rather than ending the scan. Read
/// errors are passed through as they occur; the source is never rewound.
///
/// # Examples
/// ```
/// use wordle_helper::core::Matcher;
/// use wordle_helper::wordlists::scanner::scan;
///
/// let matcher = Matcher::from_inputs("A??LE", "", "").unwrap();
/// let source = "apple\nangle\ntable\nable\n".as_bytes();
///
/// let words: Vec<String> = scan(&matcher, source).map(Result::unwrap).collect();
/// assert_eq!(words, ["APPLE", "ANGLE"]);
/// ```
pub fn scan<'m, R: BufRead + 'm>(
    matcher: &'m Matcher,
    source: R,
) -> impl Iterator<Item = io::Result<String>> + 'm {
    source.split(b'\n').filter_map(move |line| match line {
        Ok(mut line) => {
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            let line = String::from_utf8_lossy(&line);
            let accepted = matcher.accept(&line);
            if accepted.is_none() {
                trace!("Rejected {line:?}");
            }
            accepted.map(Ok)
        }
        Err(e) => Some(Err(e)),
    })
}

/// Filter a whole line source into a list
///
/// # Errors
///
/// Returns the first read error from `source`.
pub fn scan_all<R: BufRead>(matcher: &Matcher, source: R) -> io::Result<Vec<String>> {
    scan(matcher, source).collect()
}

/// Filter a dictionary file
///
/// The file is closed before returning, on success or failure.
///
/// # Errors
///
/// Returns `DictionaryError` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_helper::core::Matcher;
/// use wordle_helper::wordlists::scanner::scan_file;
///
/// let matcher = Matcher::from_inputs("?????", "ae", "").unwrap();
/// let words = scan_file(&matcher, "words.txt").unwrap();
/// println!("Found {} words", words.len());
/// ```
pub fn scan_file<P: AsRef<Path>>(
    matcher: &Matcher,
    path: P,
) -> Result<Vec<String>, DictionaryError> {
    Dictionary::open(path)?.scan(matcher)
}
