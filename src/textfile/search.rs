/// The unit counted by [`TextFile::count`](super::TextFile::count).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountItem {
    /// Runs of non-whitespace characters.
    Words,
    /// Bytes on each line, excluding the newline.
    Characters,
    Lines,
    /// Lines with no content at all. A line holding only spaces is not empty.
    EmptyLines,
}

/// Splits `content` into lines without their trailing `'\n'`. A final newline doesn't start an
/// extra line.
pub(crate) fn lines(content: &str) -> impl DoubleEndedIterator<Item = &str> {
    content.split_terminator('\n')
}

pub(crate) fn count(content: &str, item: CountItem) -> usize {
    let lines = lines(content);
    match item {
        CountItem::Words => lines.map(|line| line.split_ascii_whitespace().count()).sum(),
        CountItem::Characters => lines.map(str::len).sum(),
        CountItem::Lines => lines.count(),
        CountItem::EmptyLines => lines.filter(|line| line.is_empty()).count(),
    }
}

/// Options for matching a key within a single line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Matcher<'a> {
    pub key: &'a [u8],
    pub case_sensitive: bool,
    pub whole_word: bool,
}

impl Matcher<'_> {
    /// Returns the byte offset of the first match within `line`. An empty key never matches.
    pub fn find_in(&self, line: &str) -> Option<usize> {
        let line = line.as_bytes();
        if self.key.is_empty() || self.key.len() > line.len() {
            return None;
        }

        line.windows(self.key.len())
            .enumerate()
            .find(|&(start, window)| self.bytes_match(window) && self.bounded(line, start))
            .map(|(start, _)| start)
    }

    fn bytes_match(&self, window: &[u8]) -> bool {
        if self.case_sensitive {
            window == self.key
        } else {
            window.eq_ignore_ascii_case(self.key)
        }
    }

    fn bounded(&self, line: &[u8], start: usize) -> bool {
        if !self.whole_word {
            return true;
        }

        let end = start + self.key.len();
        let before = start.checked_sub(1).map(|i| line[i]);
        let after = line.get(end).copied();

        before.is_none_or(is_boundary) && after.is_none_or(is_boundary)
    }
}

fn is_boundary(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte.is_ascii_punctuation()
}
