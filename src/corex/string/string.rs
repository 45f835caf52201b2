use std::borrow::Cow;
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Deref, Index, IndexMut, SubAssign};

use crate::corex::error::{CopyError, CopyLengthError, DestinationSizeError, IndexOutOfBounds};
use crate::util::result::Throw;

/// The capacity of an empty string.
pub const DEFAULT_CAP: usize = 32;

/// Every capacity is a multiple of this value.
pub const CAP_GRANULARITY: usize = 32;

/// An owned, null-terminated byte string that grows in steps of [`CAP_GRANULARITY`].
///
/// The buffer always holds the logical contents followed by a single `0` byte, so
/// [`as_bytes_with_nul`](DynamicString::as_bytes_with_nul) can be handed to anything expecting a
/// C string (as long as the contents contain no interior nul). The capacity is a function of the
/// length alone: after every mutation it is the smallest multiple of [`CAP_GRANULARITY`] that can
/// hold the contents and the terminator.
///
/// All operations are byte-wise. Case conversion and the predicates only consider ASCII.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The length of the string.
/// - `m`: The length of the second string or pattern.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `append` | `O(n+m)` |
/// | `concat` | `O(n+m)` |
/// | `find` | `O(n*m)` |
/// | `remove_first` | `O(n*m)` |
/// | `replace_first` | `O(n*m)` |
/// | `reverse` | `O(n)` |
/// | `clear` | `O(1)` |
///
/// \* Unless the push crosses a multiple of [`CAP_GRANULARITY`] and the buffer is reallocated.
///
/// # Examples
/// ```
/// # use zen::corex::DynamicString;
/// let mut string = DynamicString::from("Hello");
/// string += " World";
/// assert_eq!(string, "Hello World");
/// assert_eq!(string.len(), 11);
/// assert_eq!(string.capacity(), 32);
///
/// string.to_uppercase_in_place();
/// assert_eq!(string, "HELLO WORLD");
/// ```
pub struct DynamicString {
    pub(crate) buf: Box<[u8]>,
    pub(crate) len: usize,
}

impl DynamicString {
    /// Creates an empty string with a capacity of [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use zen::corex::DynamicString;
    /// let string = DynamicString::new();
    /// assert_eq!(string.len(), 0);
    /// assert_eq!(string.capacity(), 32);
    /// assert_eq!(string.as_bytes_with_nul(), &[0]);
    /// ```
    pub fn new() -> DynamicString {
        DynamicString {
            buf: Self::alloc(DEFAULT_CAP),
            len: 0,
        }
    }

    /// Creates a string holding a copy of `bytes`. An empty slice produces the same value as
    /// [`DynamicString::new`].
    ///
    /// # Examples
    /// ```
    /// # use zen::corex::DynamicString;
    /// let string = DynamicString::from_bytes(&[b'a'; 32]);
    /// assert_eq!(string.len(), 32);
    /// assert_eq!(string.capacity(), 64);
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> DynamicString {
        let mut string = DynamicString {
            buf: Box::default(),
            len: 0,
        };
        string.initialize(bytes);
        string
    }

    /// Returns the number of bytes in the string, excluding the terminator.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of bytes allocated for the string, including the terminator slot.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the string has a length of 0.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the logical contents of the string.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Returns the logical contents of the string followed by the terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    /// Returns the byte at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` isn't less than [`len`](DynamicString::len).
    ///
    /// # Examples
    /// ```
    /// # use zen::corex::DynamicString;
    /// let string = DynamicString::from("Hello");
    /// assert_eq!(string.at(1), Ok(b'e'));
    /// assert!(string.at(5).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<u8, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.buf[index])
    }

    /// Returns a mutable reference to the byte at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` isn't less than [`len`](DynamicString::len).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut u8, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self.buf[index])
    }

    /// Replaces the contents of self with a copy of `other`. Assigning an empty string clears
    /// self.
    pub fn assign(&mut self, other: &DynamicString) {
        self.initialize(other.as_bytes());
    }

    /// Creates a new string containing the contents of self followed by the contents of `other`.
    /// Neither operand is modified.
    ///
    /// # Examples
    /// ```
    /// # use zen::corex::DynamicString;
    /// let hello = DynamicString::from("Hello");
    /// let both = hello.concat(&DynamicString::from(", world"));
    /// assert_eq!(both, "Hello, world");
    /// assert_eq!(hello, "Hello");
    /// ```
    pub fn concat(&self, other: &DynamicString) -> DynamicString {
        let mut result = self.clone();
        result.append(other);
        result
    }

    /// Appends the contents of `other` to the end of self, reallocating if the new length
    /// requires a larger capacity.
    pub fn append(&mut self, other: &DynamicString) {
        self.append_bytes(other.as_bytes());
    }

    /// Appends `bytes` to the end of self. Appending nothing is a no-op.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }

        let start = self.len;
        let new_len = start + bytes.len();
        self.resize_storage(new_len);

        self.buf[start..new_len].copy_from_slice(bytes);
        self.terminate(new_len);
    }

    /// Pushes a single byte onto the end of the string.
    pub fn push(&mut self, byte: u8) {
        let new_len = self.len + 1;
        self.resize_storage(new_len);

        self.buf[self.len] = byte;
        self.terminate(new_len);
    }

    /// Removes the last byte of the string and returns it, or [`None`] if the string is empty.
    ///
    /// # Examples
    /// ```
    /// # use zen::corex::DynamicString;
    /// let mut string = DynamicString::from("ab");
    /// assert_eq!(string.pop(), Some(b'b'));
    /// assert_eq!(string.pop(), Some(b'a'));
    /// assert_eq!(string.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }

        let new_len = self.len - 1;
        let byte = self.buf[new_len];
        self.resize_storage(new_len);
        self.terminate(new_len);

        Some(byte)
    }

    /// Returns the index of the first occurrence of `needle`, or [`None`] if `needle` is empty,
    /// longer than self or doesn't occur.
    ///
    /// # Examples
    /// ```
    /// # use zen::corex::DynamicString;
    /// let string = DynamicString::from("abcabc");
    /// assert_eq!(string.find(&DynamicString::from("ca")), Some(2));
    /// assert_eq!(string.find(&DynamicString::from("cc")), None);
    /// assert_eq!(string.find(&DynamicString::new()), None);
    /// ```
    pub fn find(&self, needle: &DynamicString) -> Option<usize> {
        find_bytes(self.as_bytes(), needle.as_bytes())
    }

    /// Removes the first occurrence of `needle` from the string. Does nothing if `needle` is
    /// empty, longer than self or doesn't occur.
    ///
    /// Only one occurrence is removed per call, see [`remove_all`](DynamicString::remove_all).
    ///
    /// # Examples
    /// ```
    /// # use zen::corex::DynamicString;
    /// let mut string = DynamicString::from("aXbXc");
    /// string.remove_first(&DynamicString::from("X"));
    /// assert_eq!(string, "abXc");
    /// ```
    pub fn remove_first(&mut self, needle: &DynamicString) -> bool {
        self.remove_first_bytes(needle.as_bytes())
    }

    /// Removes every occurrence of `needle`, one at a time from the front, returning the number
    /// of occurrences removed.
    ///
    /// Removal can join the remaining bytes into a new occurrence, which is removed as well.
    pub fn remove_all(&mut self, needle: &DynamicString) -> usize {
        let mut removed = 0;
        while self.remove_first_bytes(needle.as_bytes()) {
            removed += 1;
        }
        removed
    }

    pub(crate) fn remove_first_bytes(&mut self, needle: &[u8]) -> bool {
        let Some(pos) = find_bytes(self.as_bytes(), needle) else {
            return false;
        };

        let new_len = self.len - needle.len();
        self.buf.copy_within(pos + needle.len()..self.len, pos);
        self.resize_storage(new_len);
        self.terminate(new_len);

        true
    }

    /// Replaces the first occurrence of `old` with `new`. Does nothing if `old` is empty or
    /// doesn't occur.
    ///
    /// # Examples
    /// ```
    /// # use zen::corex::DynamicString;
    /// let mut string = DynamicString::from("one two two");
    /// string.replace_first(&DynamicString::from("two"), &DynamicString::from("three"));
    /// assert_eq!(string, "one three two");
    /// ```
    pub fn replace_first(&mut self, old: &DynamicString, new: &DynamicString) -> bool {
        let (old, new) = (old.as_bytes(), new.as_bytes());
        let Some(pos) = find_bytes(self.as_bytes(), old) else {
            return false;
        };

        let old_len = self.len;
        let new_len = old_len - old.len() + new.len();

        // Grow before shifting the tail right, shrink after shifting it left.
        if new_len > old_len {
            self.resize_storage(new_len);
        }
        self.buf.copy_within(pos + old.len()..old_len, pos + new.len());
        self.buf[pos..pos + new.len()].copy_from_slice(new);
        if new_len < old_len {
            self.resize_storage(new_len);
        }

        self.terminate(new_len);
        true
    }

    /// Converts all ASCII uppercase letters to lowercase.
    pub fn to_lowercase_in_place(&mut self) {
        self.buf[..self.len].make_ascii_lowercase();
    }

    /// Converts all ASCII lowercase letters to uppercase.
    pub fn to_uppercase_in_place(&mut self) {
        self.buf[..self.len].make_ascii_uppercase();
    }

    /// Resets the string to the empty state, releasing any capacity above [`DEFAULT_CAP`].
    pub fn clear(&mut self) {
        self.resize_storage(0);
        self.terminate(0);
    }

    /// Reverses the order of the bytes in the string. The terminator stays at the end.
    ///
    /// # Examples
    /// ```
    /// # use zen::corex::DynamicString;
    /// let mut string = DynamicString::from("stressed");
    /// string.reverse();
    /// assert_eq!(string, "desserts");
    /// ```
    pub fn reverse(&mut self) {
        self.buf[..self.len].reverse();
    }

    /// Returns true if every byte is ASCII whitespace. Empty strings are blank.
    pub fn is_blank(&self) -> bool {
        self.as_bytes().iter().all(u8::is_ascii_whitespace)
    }

    /// Returns true if every byte is an ASCII digit. Empty strings pass.
    pub fn is_all_digits(&self) -> bool {
        self.as_bytes().iter().all(u8::is_ascii_digit)
    }

    /// Returns true if no byte is an ASCII digit.
    pub fn is_all_non_digits(&self) -> bool {
        !self.as_bytes().iter().any(u8::is_ascii_digit)
    }

    /// Copies the first `n` bytes of the string into the front of `dest`.
    ///
    /// # Errors
    /// Returns [`CopyError::Length`] if `n` exceeds the length of the string, or
    /// [`CopyError::Destination`] if `dest` is shorter than `n`. `dest` is untouched on error.
    pub fn copy_into(&self, dest: &mut [u8], n: usize) -> Result<(), CopyError> {
        if n > self.len {
            Err(CopyLengthError { requested: n, len: self.len })?
        }
        if n > dest.len() {
            Err(DestinationSizeError { requested: n, available: dest.len() })?
        }

        dest[..n].copy_from_slice(&self.buf[..n]);
        Ok(())
    }

    /// Returns an independently owned copy of the logical contents.
    pub fn to_owned_bytes(&self) -> Box<[u8]> {
        Box::from(self.as_bytes())
    }

    /// Returns a newly allocated copy of the contents, including the terminator. Each call
    /// allocates and the caller owns the result.
    pub fn to_raw_copy(&self) -> Box<[u8]> {
        Box::from(self.as_bytes_with_nul())
    }

    /// Interprets the contents as UTF-8, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Returns the capacity used for a string of `len` bytes.
    pub(crate) const fn cap_for(len: usize) -> usize {
        (len + 1).div_ceil(CAP_GRANULARITY) * CAP_GRANULARITY
    }

    fn alloc(cap: usize) -> Box<[u8]> {
        vec![0; cap].into_boxed_slice()
    }

    /// Replaces the contents with `bytes`, reusing the buffer if the capacity doesn't change.
    pub(crate) fn initialize(&mut self, bytes: &[u8]) {
        let cap = Self::cap_for(bytes.len());
        if cap != self.capacity() {
            self.buf = Self::alloc(cap);
        }

        self.buf[..bytes.len()].copy_from_slice(bytes);
        self.terminate(bytes.len());
    }

    /// Adjusts the capacity to match a length of `new_len`, keeping as much of the current
    /// contents as fits. Doesn't update `len` or write the terminator.
    fn resize_storage(&mut self, new_len: usize) {
        let cap = Self::cap_for(new_len);
        if cap == self.capacity() {
            return;
        }

        let kept = cmp::min(self.len, new_len);
        let mut buf = Self::alloc(cap);
        buf[..kept].copy_from_slice(&self.buf[..kept]);
        self.buf = buf;
    }

    fn terminate(&mut self, len: usize) {
        self.buf[len] = 0;
        self.len = len;
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

/// Returns the start of the first occurrence of `needle` within `haystack`.
fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

impl Default for DynamicString {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DynamicString {
    fn clone(&self) -> Self {
        DynamicString::from_bytes(self.as_bytes())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl Deref for DynamicString {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for DynamicString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Index<usize> for DynamicString {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        self.check_index(index).throw();
        &self.buf[index]
    }
}

impl IndexMut<usize> for DynamicString {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.check_index(index).throw();
        &mut self.buf[index]
    }
}

impl Add<&DynamicString> for &DynamicString {
    type Output = DynamicString;

    fn add(self, rhs: &DynamicString) -> Self::Output {
        self.concat(rhs)
    }
}

impl AddAssign<&DynamicString> for DynamicString {
    fn add_assign(&mut self, rhs: &DynamicString) {
        self.append(rhs);
    }
}

impl AddAssign<&str> for DynamicString {
    fn add_assign(&mut self, rhs: &str) {
        self.append_bytes(rhs.as_bytes());
    }
}

impl SubAssign<&DynamicString> for DynamicString {
    fn sub_assign(&mut self, rhs: &DynamicString) {
        self.remove_first(rhs);
    }
}

impl SubAssign<&str> for DynamicString {
    fn sub_assign(&mut self, rhs: &str) {
        self.remove_first_bytes(rhs.as_bytes());
    }
}

impl PartialEq for DynamicString {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for DynamicString {}

impl PartialEq<[u8]> for DynamicString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<str> for DynamicString {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for DynamicString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<String> for DynamicString {
    fn eq(&self, other: &String) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<DynamicString> for &str {
    fn eq(&self, other: &DynamicString) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Hash for DynamicString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Write for DynamicString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_bytes(s.as_bytes());
        Ok(())
    }
}

impl Extend<u8> for DynamicString {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.push(byte);
        }
    }
}

impl FromIterator<u8> for DynamicString {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut string = DynamicString::new();
        string.extend(iter);
        string
    }
}

impl Debug for DynamicString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicString")
            .field("contents", &self.to_string_lossy())
            .field("len", &self.len)
            .field("cap", &self.capacity())
            .finish()
    }
}

impl Display for DynamicString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}
