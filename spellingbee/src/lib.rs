//! Find every dictionary word that can be spelled from a set of letters.
//!
//! A query names the available letters, the letters every answer must
//! contain, and a minimum word length. The wordlist is streamed line by
//! line and the qualifying words are collected into a set.

mod error;
mod letters;
mod solver;
mod wordlist;

pub use error::{Error, Result};
pub use letters::{letters_of, LetterBank, Letters, DEFAULT_MIN_LENGTH};
pub use solver::{solve, sorted, SolveOptions, SpellingBeeSolver};
pub use wordlist::{Wordlist, DEFAULT_WORDLIST};
