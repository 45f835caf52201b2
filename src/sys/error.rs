use std::io;

use derive_more::{Display, Error, From, IsVariant};

use crate::fs::{CloseError, OpenError, ReadError};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("invalid value {value:?} for field {key}")]
pub struct FieldError {
    pub key: &'static str,
    pub value: String,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("failed to format the local time")]
pub struct TimeError;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("{program} exited unsuccessfully ({status})")]
pub struct CommandError {
    pub program: &'static str,
    pub status: String,
}

#[derive(Debug, Display, Error, From, IsVariant)]
pub enum SysError {
    Open(OpenError),
    Read(ReadError),
    Close(CloseError),
    Field(FieldError),
    Time(TimeError),
    Command(CommandError),
    IO(io::Error),
}
