use std::io::Write;

use crate::corex::DynamicString;
use crate::terminal::conio::KeySource;
use crate::terminal::console::Console;
use crate::terminal::error::TerminalError;

const TAB: u8 = b'\t';
const LINE_FEED: u8 = b'\n';
const CARRIAGE_RETURN: u8 = b'\r';
const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7f;

/// Reads a line of input one key at a time, with optional echo, masking and length limit.
///
/// Input ends at Enter or Tab, or once [`input_limit`](ConsoleInput::input_limit) keys have been
/// accepted. Backspace removes the last accepted key. In password mode echoed keys are shown as
/// `*`.
///
/// # Examples
/// ```
/// # use zen::terminal::{Console, ConsoleInput};
/// let mut console = Console::new(&b"hunter2\n"[..], Vec::new());
/// let secret = ConsoleInput::new()
///     .with_password(true)
///     .read_with(&mut console, "Password: ")
///     .unwrap();
///
/// assert_eq!(secret, "hunter2");
/// assert_eq!(console.into_parts().1, b"Password: *******\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsoleInput {
    password: bool,
    echo: bool,
    input_limit: usize,
}

impl ConsoleInput {
    pub const DEFAULT_INPUT_LIMIT: usize = 100;

    /// Creates a ConsoleInput that echoes plainly and accepts up to 100 keys.
    pub const fn new() -> ConsoleInput {
        ConsoleInput {
            password: false,
            echo: true,
            input_limit: Self::DEFAULT_INPUT_LIMIT,
        }
    }

    pub const fn password(&self) -> bool {
        self.password
    }

    pub const fn echo(&self) -> bool {
        self.echo
    }

    pub const fn input_limit(&self) -> usize {
        self.input_limit
    }

    pub const fn set_password(&mut self, password: bool) -> &mut Self {
        self.password = password;
        self
    }

    pub const fn set_echo(&mut self, echo: bool) -> &mut Self {
        self.echo = echo;
        self
    }

    pub const fn set_input_limit(&mut self, input_limit: usize) -> &mut Self {
        self.input_limit = input_limit;
        self
    }

    pub const fn with_password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    pub const fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub const fn with_input_limit(mut self, input_limit: usize) -> Self {
        self.input_limit = input_limit;
        self
    }

    /// Prints `message` and reads a line from the terminal.
    pub fn read(&self, message: &str) -> Result<DynamicString, TerminalError> {
        self.read_with(&mut Console::stdio(), message)
    }

    /// Prints `message` and reads a line from the given console.
    pub fn read_with<K: KeySource, W: Write>(
        &self,
        console: &mut Console<K, W>,
        message: &str,
    ) -> Result<DynamicString, TerminalError> {
        let mut result = DynamicString::new();
        console.write_raw(message.as_bytes())?;
        console.flush()?;

        while result.len() < self.input_limit {
            match console.keys().read_key(false)? {
                LINE_FEED | CARRIAGE_RETURN | TAB => break,
                BACKSPACE | DELETE => {
                    if result.pop().is_some() && self.echo {
                        console.write_raw(b"\x08 \x08")?;
                    }
                },
                key => {
                    if self.echo {
                        let shown = if self.password { b'*' } else { key };
                        console.write_raw(&[shown])?;
                    }
                    result.push(key);
                },
            }
            console.flush()?;
        }

        console.write_raw(b"\n")?;
        console.flush()?;
        Ok(result)
    }
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a line from the terminal with the given options. See [`ConsoleInput`].
pub fn read(
    message: &str,
    input_limit: usize,
    echo: bool,
    password: bool,
) -> Result<DynamicString, TerminalError> {
    ConsoleInput::new()
        .with_input_limit(input_limit)
        .with_echo(echo)
        .with_password(password)
        .read(message)
}
