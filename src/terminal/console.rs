use std::fmt::Display;
use std::io::{self, Stdout, Write};

use crate::terminal::conio::{Conio, KeySource};
use crate::terminal::error::TerminalError;

const RESET: &str = "\u{1b}[0m";
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";
const CLEAR_LINE: &str = "\r\u{1b}[2K";

pub const DEFAULT_ENTER_MESSAGE: &str = "Press enter to continue!... ";
pub const DEFAULT_ANY_KEY_MESSAGE: &str = "Press any key to continue!... ";

/// The style a message is printed with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// Bold yellow.
    Warning,
    /// Bold red.
    Error,
    /// Bold green.
    Success,
    /// Bold blue.
    Information,
    /// The terminal's current style.
    #[default]
    Normal,
}

impl MessageType {
    /// The ANSI escape sequence that selects this style.
    pub const fn escape_code(self) -> &'static str {
        match self {
            MessageType::Warning => "\u{1b}[1;33m",
            MessageType::Error => "\u{1b}[1;31m",
            MessageType::Success => "\u{1b}[1;32m",
            MessageType::Information => "\u{1b}[1;34m",
            MessageType::Normal => "",
        }
    }
}

/// A reply to [`Console::sure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    Yes,
    No,
    Cancel,
}

/// A pairing of a [`KeySource`] and an output stream, on which prompts are performed.
///
/// Output is flushed at the end of every operation, so prompts are visible before input is
/// awaited.
///
/// # Examples
/// ```
/// # use zen::terminal::{Answer, Console};
/// let mut console = Console::new(&b"?N"[..], Vec::new());
/// assert_eq!(console.sure("Continue? ", true).unwrap(), Answer::No);
/// ```
#[derive(Debug)]
pub struct Console<K: KeySource, W: Write> {
    keys: K,
    out: W,
}

impl Console<Conio, Stdout> {
    /// A Console reading from the terminal and writing to standard output.
    pub fn stdio() -> Self {
        Console::new(Conio, io::stdout())
    }
}

impl<K: KeySource, W: Write> Console<K, W> {
    pub fn new(keys: K, out: W) -> Self {
        Console { keys, out }
    }

    pub fn into_parts(self) -> (K, W) {
        (self.keys, self.out)
    }

    pub fn keys(&mut self) -> &mut K {
        &mut self.keys
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub(crate) fn write_raw(&mut self, bytes: &[u8]) -> Result<(), TerminalError> {
        self.out.write_all(bytes)?;
        Ok(())
    }

    pub(crate) fn flush(&mut self) -> Result<(), TerminalError> {
        self.out.flush()?;
        Ok(())
    }

    /// Prints `input` in the given style, resetting the style afterwards.
    pub fn print<T: Display>(&mut self, input: T, kind: MessageType) -> Result<(), TerminalError> {
        write!(self.out, "{}{input}{RESET}", kind.escape_code())?;
        self.flush()
    }

    /// Like [`print`](Console::print), followed by a newline.
    pub fn println<T: Display>(&mut self, input: T, kind: MessageType) -> Result<(), TerminalError> {
        writeln!(self.out, "{}{input}{RESET}", kind.escape_code())?;
        self.flush()
    }

    /// Prints `ch` repeated `length` times, optionally followed by a newline.
    pub fn print_characters(
        &mut self,
        ch: char,
        length: usize,
        next_line: bool,
    ) -> Result<(), TerminalError> {
        for _ in 0..length {
            write!(self.out, "{ch}")?;
        }
        if next_line {
            writeln!(self.out)?;
        }
        self.flush()
    }

    /// Prints `message` and waits for a line of input, which is discarded.
    pub fn press_enter(&mut self, message: &str) -> Result<(), TerminalError> {
        self.write_raw(message.as_bytes())?;
        self.flush()?;
        self.keys.read_line()?;
        Ok(())
    }

    /// Prints `message` and waits for a single key.
    pub fn press_any_key(&mut self, message: &str) -> Result<(), TerminalError> {
        self.write_raw(message.as_bytes())?;
        self.flush()?;
        self.keys.read_key(false)?;
        writeln!(self.out)?;
        self.flush()
    }

    /// Erases the screen and moves the cursor to the top left corner.
    pub fn clear_screen(&mut self) -> Result<(), TerminalError> {
        self.write_raw(CLEAR_SCREEN.as_bytes())?;
        self.flush()
    }

    /// Scrolls previous output out of the way by printing `lines` newlines.
    pub fn clear_lines(&mut self, lines: usize) -> Result<(), TerminalError> {
        self.write_raw(&b"\n".repeat(lines))?;
        self.flush()
    }

    /// Erases the line the cursor is on and returns the cursor to its start.
    pub fn clear_line(&mut self) -> Result<(), TerminalError> {
        self.write_raw(CLEAR_LINE.as_bytes())?;
        self.flush()
    }

    /// Asks a yes or no question answered with a single `y` or `n` key, in either case.
    ///
    /// Any other key asks again if `repeat` is set, and otherwise gives [`Answer::Cancel`].
    pub fn sure(&mut self, message: &str, repeat: bool) -> Result<Answer, TerminalError> {
        loop {
            self.write_raw(message.as_bytes())?;
            self.flush()?;
            let key = self.keys.read_key(true)?;
            writeln!(self.out)?;
            self.flush()?;

            match key.to_ascii_lowercase() {
                b'y' => return Ok(Answer::Yes),
                b'n' => return Ok(Answer::No),
                _ if repeat => continue,
                _ => return Ok(Answer::Cancel),
            }
        }
    }

    /// Prints `message` followed by the options, as in `Pick one [red,green]: `, and reads a
    /// line. Returns the index of the option equal to that line.
    ///
    /// A line matching no option asks again if `repeat` is set, and otherwise gives `None`.
    pub fn ask<S: AsRef<str>>(
        &mut self,
        message: &str,
        options: &[S],
        repeat: bool,
    ) -> Result<Option<usize>, TerminalError> {
        let choices = options
            .iter()
            .map(|option| option.as_ref())
            .collect::<Vec<&str>>()
            .join(",");

        loop {
            write!(self.out, "{message} [{choices}]: ")?;
            self.flush()?;
            let answer = self.keys.read_line()?;

            if let Some(index) = options.iter().position(|option| option.as_ref() == answer) {
                return Ok(Some(index));
            }
            if !repeat {
                return Ok(None);
            }
        }
    }
}

/// Prints `input` to standard output in the given style.
pub fn print<T: Display>(input: T, kind: MessageType) -> Result<(), TerminalError> {
    Console::stdio().print(input, kind)
}

/// Prints `input` and a newline to standard output in the given style.
pub fn println<T: Display>(input: T, kind: MessageType) -> Result<(), TerminalError> {
    Console::stdio().println(input, kind)
}

pub fn print_characters(ch: char, length: usize, next_line: bool) -> Result<(), TerminalError> {
    Console::stdio().print_characters(ch, length, next_line)
}

pub fn press_enter(message: &str) -> Result<(), TerminalError> {
    Console::stdio().press_enter(message)
}

pub fn press_any_key(message: &str) -> Result<(), TerminalError> {
    Console::stdio().press_any_key(message)
}

pub fn clear_screen() -> Result<(), TerminalError> {
    Console::stdio().clear_screen()
}

pub fn clear_lines(lines: usize) -> Result<(), TerminalError> {
    Console::stdio().clear_lines(lines)
}

pub fn clear_line() -> Result<(), TerminalError> {
    Console::stdio().clear_line()
}

/// See [`Console::sure`].
pub fn sure(message: &str, repeat: bool) -> Result<Answer, TerminalError> {
    Console::stdio().sure(message, repeat)
}

/// See [`Console::ask`].
pub fn ask<S: AsRef<str>>(
    message: &str,
    options: &[S],
    repeat: bool,
) -> Result<Option<usize>, TerminalError> {
    Console::stdio().ask(message, options, repeat)
}
