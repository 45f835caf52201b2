use derive_more::{Display, Error, From, IsVariant};

use crate::fs::{CloseError, OpenError, ReadError, WriteError};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("file contents are not valid UTF-8 after byte {valid_up_to}")]
pub struct EncodingError {
    pub valid_up_to: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum TextFileError {
    Open(OpenError),
    Read(ReadError),
    Write(WriteError),
    Close(CloseError),
    Encoding(EncodingError),
}
