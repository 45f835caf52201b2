use std::path::{Path, PathBuf};

use crate::fs::File;
use crate::textfile::error::{EncodingError, TextFileError};
use crate::textfile::search::{self, CountItem, Matcher};

/// A handle to a text file on disk, identified by its path.
///
/// Nothing is opened when a TextFile is created. A missing file is only reported once an
/// operation needs to open it, as [`OpenError::MissingComponent`](crate::fs::OpenError).
///
/// # Examples
/// ```no_run
/// # use zen::textfile::{CountItem, TextFile};
/// let notes = TextFile::new("/tmp/notes.txt");
/// notes.write("first\nsecond\n", false)?;
/// notes.write("third\n", true)?;
///
/// assert_eq!(notes.read_last_line()?, "third");
/// assert_eq!(notes.count(CountItem::Lines)?, 3);
/// # Ok::<(), zen::textfile::TextFileError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextFile {
    path: PathBuf,
}

impl TextFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> TextFile {
        TextFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the entire file as a String.
    pub fn read(&self) -> Result<String, TextFileError> {
        let file = File::open(&self.path)?;
        let mut buf = Vec::new();
        let read = file.read_to_end(&mut buf);
        // Close errors take precedence over read errors.
        file.close()?;
        read?;

        log::debug!("read {} bytes from {}", buf.len(), self.path.display());

        String::from_utf8(buf).map_err(|err| {
            EncodingError { valid_up_to: err.utf8_error().valid_up_to() }.into()
        })
    }

    /// Returns the first line, or an empty String if the file is empty.
    pub fn read_first_line(&self) -> Result<String, TextFileError> {
        let content = self.read()?;
        Ok(search::lines(&content).next().unwrap_or_default().to_owned())
    }

    /// Returns the last line, or an empty String if the file is empty. A trailing newline
    /// terminates the last line rather than starting a new one.
    pub fn read_last_line(&self) -> Result<String, TextFileError> {
        let content = self.read()?;
        Ok(search::lines(&content).next_back().unwrap_or_default().to_owned())
    }

    /// Returns every line with its newline removed. Empty lines are kept.
    pub fn read_all_lines(&self) -> Result<Vec<String>, TextFileError> {
        let content = self.read()?;
        Ok(search::lines(&content).map(str::to_owned).collect())
    }

    /// Writes `content` to the file, creating it with mode `0o644` if it doesn't exist. When
    /// `append` is false, any previous contents are discarded first.
    pub fn write(&self, content: &str, append: bool) -> Result<(), TextFileError> {
        let file = File::options()
            .read(false)
            .write(true)
            .create(true)
            .append(append)
            .truncate(!append)
            .open(&self.path)?;

        let written = file.write_all(content.as_bytes());
        file.close()?;
        written?;

        log::debug!(
            "{} {} bytes to {}",
            if append { "appended" } else { "wrote" },
            content.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Truncates the file to zero length, creating it if it doesn't exist.
    pub fn clear(&self) -> Result<(), TextFileError> {
        self.write("", false)
    }

    /// Returns the byte offset within the file of the first match of `key`, or `None` if there
    /// is no match. Matches never span lines.
    ///
    /// Case insensitive matching only folds ASCII letters. With `whole_word`, a match must be
    /// bounded on each side by the edge of the line, ASCII whitespace or ASCII punctuation.
    pub fn find(
        &self,
        key: &str,
        case_sensitive: bool,
        whole_word: bool,
    ) -> Result<Option<usize>, TextFileError> {
        let content = self.read()?;
        let matcher = Matcher { key: key.as_bytes(), case_sensitive, whole_word };

        let mut offset = 0;
        for line in content.split_inclusive('\n') {
            if let Some(start) = matcher.find_in(line.strip_suffix('\n').unwrap_or(line)) {
                return Ok(Some(offset + start));
            }
            offset += line.len();
        }
        Ok(None)
    }

    /// Returns the number of lines containing at least one match of `key`, using the same
    /// matching rules as [`find`](TextFile::find).
    pub fn count_matches(
        &self,
        key: &str,
        case_sensitive: bool,
        whole_word: bool,
    ) -> Result<usize, TextFileError> {
        let content = self.read()?;
        let matcher = Matcher { key: key.as_bytes(), case_sensitive, whole_word };

        Ok(search::lines(&content)
            .filter(|line| matcher.find_in(line).is_some())
            .count())
    }

    /// Counts the given [`CountItem`] across the whole file.
    pub fn count(&self, item: CountItem) -> Result<usize, TextFileError> {
        Ok(search::count(&self.read()?, item))
    }
}
