use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;

use crate::error::{Error, Result};

/// Used when no wordlist is configured.
pub const DEFAULT_WORDLIST: &str = "/usr/share/dict/words";

/// A newline delimited dictionary file, one word per line.
#[derive(Debug)]
pub struct Wordlist {
    path: PathBuf,
    file: File,
    size: u64,
}

impl Wordlist {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_owned();
        if !path.exists() {
            return Err(Error::WordlistNotFound(path));
        }
        if path.is_dir() {
            return Err(Error::WordlistIsDirectory(path));
        }

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(source) => return Err(Error::WordlistUnreadable { path, source }),
        };
        // only used to size the progress bar
        let size = file.metadata().map(|meta| meta.len()).unwrap_or_default();

        Ok(Wordlist { path, file, size })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Length of the file in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Stream the file in order, advancing `progress_bar` by the bytes read.
    ///
    /// The file is closed when the returned reader is dropped.
    pub fn into_reader(self, progress_bar: ProgressBar) -> impl BufRead {
        BufReader::new(progress_bar.wrap_read(self.file))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn tmpdir() -> tempfile::TempDir {
        tempfile::Builder::new()
            .prefix("spellingbee-test-")
            .tempdir()
            .expect("create a temp directory for test files")
    }

    #[rstest]
    fn test_open_missing(tmpdir: tempfile::TempDir) {
        let path = tmpdir.path().join("missing.txt");
        match Wordlist::open(&path) {
            Err(Error::WordlistNotFound(reported)) => assert_eq!(reported, path),
            other => panic!("expected WordlistNotFound, got {other:?}"),
        }
    }

    #[rstest]
    fn test_open_directory(tmpdir: tempfile::TempDir) {
        match Wordlist::open(tmpdir.path()) {
            Err(Error::WordlistIsDirectory(reported)) => assert_eq!(reported, tmpdir.path()),
            other => panic!("expected WordlistIsDirectory, got {other:?}"),
        }
    }

    #[rstest]
    fn test_error_messages_name_path(tmpdir: tempfile::TempDir) {
        let path = tmpdir.path().join("missing.txt");
        let message = Wordlist::open(&path).unwrap_err().to_string();
        assert!(message.contains("missing.txt"), "{message}");
    }

    #[rstest]
    fn test_reads_lines_in_order(tmpdir: tempfile::TempDir) {
        let path = tmpdir.path().join("words.txt");
        let mut file = File::create(&path).unwrap();
        write!(file, "flee\nfeel\r\nleef\n").unwrap();
        drop(file);

        let wordlist = Wordlist::open(&path).unwrap();
        assert_eq!(wordlist.path(), path);
        assert_eq!(wordlist.size(), 16);

        let lines: Vec<String> = wordlist
            .into_reader(ProgressBar::hidden())
            .lines()
            .collect::<std::io::Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["flee", "feel", "leef"]);
    }
}
