use std::io::{self, Write};
use std::mem::MaybeUninit;

use libc::{ECHO, ICANON, STDIN_FILENO, TCSANOW, VMIN, VTIME, c_int, termios};

use crate::terminal::error::{EndOfInputError, TerminalError};
use crate::util::syscall;

/// A source of keystrokes and lines for interactive prompts.
pub trait KeySource {
    /// Reads a single key without waiting for Enter. When `echo` is set, the key is shown by
    /// whatever is displaying the input.
    fn read_key(&mut self, echo: bool) -> Result<u8, TerminalError>;

    /// Reads a full line, without its line ending.
    fn read_line(&mut self) -> Result<String, TerminalError>;
}

/// Keys typed on the process's controlling terminal, read through standard input.
///
/// Keys and lines are both read unbuffered, a byte at a time, straight from the descriptor. Input
/// typed ahead of a [`read_line`](KeySource::read_line) is therefore still available to the next
/// [`read_key`](KeySource::read_key). Mixing this with [`io::stdin`] loses that guarantee, since
/// std buffers ahead.
#[derive(Debug, Default, Clone, Copy)]
pub struct Conio;

impl KeySource for Conio {
    fn read_key(&mut self, echo: bool) -> Result<u8, TerminalError> {
        io::stdout().flush()?;
        let _raw = RawMode::enable(echo)?;

        read_byte(STDIN_FILENO)?.ok_or_else(|| EndOfInputError.into())
    }

    fn read_line(&mut self) -> Result<String, TerminalError> {
        io::stdout().flush()?;
        read_line(STDIN_FILENO)
    }
}

/// Reads one byte from `fd`, returning `None` at the end of input.
pub(crate) fn read_byte(fd: c_int) -> Result<Option<u8>, TerminalError> {
    let mut byte = 0_u8;
    match unsafe { libc::read(fd, (&raw mut byte).cast(), 1) } {
        -1 => Err(TerminalError::interpret_raw_error(syscall::err_no())),
        0 => Ok(None),
        _ => Ok(Some(byte)),
    }
}

/// Reads from `fd` up to and including the next `'\n'`, consuming nothing beyond it. The line
/// ending is not returned.
pub(crate) fn read_line(fd: c_int) -> Result<String, TerminalError> {
    let mut line = Vec::new();
    loop {
        match read_byte(fd)? {
            Some(b'\n') => break,
            Some(byte) => line.push(byte),
            None if line.is_empty() => Err(EndOfInputError)?,
            None => break,
        }
    }

    let line = line.strip_suffix(b"\r").unwrap_or(&line);
    Ok(String::from_utf8_lossy(line).into_owned())
}

/// Keys replayed from a byte slice, consumed from the front. Running out of bytes is reported as
/// [`TerminalError::EndOfInput`].
impl<'a> KeySource for &'a [u8] {
    fn read_key(&mut self, _echo: bool) -> Result<u8, TerminalError> {
        let keys: &'a [u8] = *self;
        let (&key, rest) = keys.split_first().ok_or(EndOfInputError)?;
        *self = rest;
        Ok(key)
    }

    fn read_line(&mut self) -> Result<String, TerminalError> {
        let keys: &'a [u8] = *self;
        if keys.is_empty() {
            Err(EndOfInputError)?
        }

        let (line, rest) = match keys.iter().position(|&key| key == b'\n') {
            Some(end) => (&keys[..end], &keys[end + 1..]),
            None => (keys, &keys[keys.len()..]),
        };
        *self = rest;

        let line = line.strip_suffix(b"\r").unwrap_or(line);
        Ok(String::from_utf8_lossy(line).into_owned())
    }
}

/// A guard that keeps standard input in raw mode: canonical line editing is disabled, so keys
/// are delivered one at a time, and echo is turned off unless requested. The previous terminal
/// attributes are restored when the guard is dropped.
///
/// # Errors
/// [`enable`](RawMode::enable) fails with [`TerminalError::NotATerminal`] if standard input isn't
/// a terminal.
pub struct RawMode {
    original: termios,
}

impl RawMode {
    pub fn enable(echo: bool) -> Result<RawMode, TerminalError> {
        let mut original = MaybeUninit::<termios>::uninit();
        if unsafe { libc::tcgetattr(STDIN_FILENO, original.as_mut_ptr()) } == -1 {
            Err(TerminalError::interpret_raw_error(syscall::err_no()))?
        }
        // SAFETY: tcgetattr initializes original on success.
        let original = unsafe { original.assume_init() };

        let mut attrs = original;
        attrs.c_lflag &= !ICANON;
        if echo {
            attrs.c_lflag |= ECHO;
        } else {
            attrs.c_lflag &= !ECHO;
        }
        attrs.c_cc[VMIN] = 1;
        attrs.c_cc[VTIME] = 0;

        if unsafe { libc::tcsetattr(STDIN_FILENO, TCSANOW, &attrs) } == -1 {
            Err(TerminalError::interpret_raw_error(syscall::err_no()))?
        }

        log::trace!("entered raw mode (echo: {echo})");
        Ok(RawMode { original })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if unsafe { libc::tcsetattr(STDIN_FILENO, TCSANOW, &self.original) } == -1 {
            log::error!("failed to restore terminal attributes: {}", io::Error::last_os_error());
        } else {
            log::trace!("left raw mode");
        }
    }
}

/// Reads a single key from the terminal without echoing it.
pub fn getch() -> Result<u8, TerminalError> {
    Conio.read_key(false)
}

/// Reads a single key from the terminal, echoing it.
pub fn getche() -> Result<u8, TerminalError> {
    Conio.read_key(true)
}
