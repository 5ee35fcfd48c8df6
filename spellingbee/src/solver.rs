use std::collections::HashSet;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::letters::{letters_of, LetterBank, DEFAULT_MIN_LENGTH};
use crate::wordlist::{Wordlist, DEFAULT_WORDLIST};

/// Where to look for words and which of them are long enough.
#[derive(Debug, Clone)]
pub struct SolveOptions {
    pub wordlist: PathBuf,
    pub min_length: usize,
    pub show_progress: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        SolveOptions {
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            min_length: DEFAULT_MIN_LENGTH,
            show_progress: false,
        }
    }
}

/// Find every word in the configured wordlist spelled from `available`
/// that contains all of `required`.
///
/// The required letters are checked against the available ones before
/// the wordlist is opened, so an impossible query fails with
/// [`Error::MissingRequiredLetters`] even when the wordlist is missing.
pub fn solve(available: &str, required: &str, options: &SolveOptions) -> Result<HashSet<String>> {
    let letters = LetterBank::new(
        letters_of(available),
        letters_of(required),
        options.min_length,
    )?;

    SpellingBeeSolver::new(letters)
        .with_progress(options.show_progress)
        .solve_path(&options.wordlist)
}

/// Order words shortest first, then alphabetically.
pub fn sorted<I>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut words: Vec<String> = words.into_iter().collect();
    words.sort_by(|a, b| {
        a.chars()
            .count()
            .cmp(&b.chars().count())
            .then_with(|| a.cmp(b))
    });
    words
}

pub struct SpellingBeeSolver {
    letters: LetterBank,
    show_progress: bool,
}

impl SpellingBeeSolver {
    pub fn new(letters: LetterBank) -> Self {
        debug!(
            allowed = %letters.allowed(),
            required = %letters.required(),
            min_length = letters.min_length(),
            "created solver"
        );
        SpellingBeeSolver {
            letters,
            show_progress: false,
        }
    }

    /// Draw a progress bar over the wordlist bytes while scanning a file.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn letters(&self) -> &LetterBank {
        &self.letters
    }

    pub fn solve_words<I, S>(&self, words: I) -> HashSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|word| self.letters.matches(word.as_ref()))
            .map(|word| word.as_ref().to_owned())
            .collect()
    }

    /// Scan `reader` one line at a time, without its line terminator.
    pub fn solve_reader<R: BufRead>(&self, reader: R) -> std::io::Result<HashSet<String>> {
        let mut solutions = HashSet::new();
        let mut scanned: usize = 0;

        for line in reader.lines() {
            let word = line?;
            scanned += 1;
            if self.letters.matches(&word) {
                solutions.insert(word);
            } else {
                trace!(%word, "rejected");
            }
        }

        debug!(scanned, found = solutions.len(), "finished scanning");
        Ok(solutions)
    }

    pub fn solve_path<P: AsRef<Path>>(&self, path: P) -> Result<HashSet<String>> {
        let wordlist = Wordlist::open(path)?;
        let path = wordlist.path().to_owned();
        debug!(path = %path.display(), bytes = wordlist.size(), "scanning wordlist");

        let progress_bar = if self.show_progress {
            ProgressBar::new(wordlist.size())
        } else {
            ProgressBar::hidden()
        };

        let solutions = self
            .solve_reader(wordlist.into_reader(progress_bar.clone()))
            .map_err(|source| Error::WordlistUnreadable { path, source })?;
        progress_bar.finish_and_clear();

        Ok(solutions)
    }
}
