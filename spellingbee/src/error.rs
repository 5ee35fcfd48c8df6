use std::path::PathBuf;

use thiserror::Error;

use crate::letters::Letters;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Required letters '{missing}' are not among the available letters '{available}'")]
    MissingRequiredLetters { missing: Letters, available: Letters },
    #[error("Wordlist not found: {}", .0.display())]
    WordlistNotFound(PathBuf),
    #[error("Wordlist is a directory, not a file: {}", .0.display())]
    WordlistIsDirectory(PathBuf),
    #[error("Failed to read wordlist {}: {source}", .path.display())]
    WordlistUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
