use std::io;

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("standard input is not a terminal")]
pub struct NotATerminalError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("input interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("reached the end of input")]
pub struct EndOfInputError;

#[derive(Debug, Display, Error, From, IsVariant)]
pub enum TerminalError {
    NotATerminal(NotATerminalError),
    Interrupt(InterruptError),
    EndOfInput(EndOfInputError),
    IO(io::Error),
}

impl TerminalError {
    pub(crate) fn interpret_raw_error(err_no: libc::c_int) -> TerminalError {
        match err_no {
            libc::ENOTTY | libc::EBADF => NotATerminalError.into(),
            libc::EINTR => InterruptError.into(),
            e => io::Error::from_raw_os_error(e).into(),
        }
    }
}
