use derive_more::{Display, Error, From, IsVariant};
use libc::{
    c_int, EACCES, EBADF, EDQUOT, EEXIST, EFAULT, EFBIG, EINTR, EIO, EISDIR, ELOOP, EMFILE,
    ENAMETOOLONG, ENFILE, ENOENT, ENOMEM, ENOSPC, ENOTDIR, EOVERFLOW, EPERM, EROFS, ETXTBSY,
};

use crate::fs::panic::{BadFdPanic, BadStackAddrPanic, Panic};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("available storage space exhausted")]
pub struct StorageExhaustedError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("out of memory")]
pub struct OOMError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("exceeded open file limit")]
pub struct FileCountError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("permission denied for the provided path")]
pub struct AccessError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("a component of the provided path does not exist")]
pub struct MissingComponentError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("a component of the provided path is not a directory")]
pub struct NonDirComponentError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("the provided path refers to a directory")]
pub struct IsDirectoryError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path contains too many symlinks")]
pub struct ExcessiveLinksError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("file system is read only")]
pub struct ReadOnlyFSError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("file is too large")]
pub struct OversizedFileError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path contains an interior nul byte")]
pub struct InvalidPathError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("a file already exists at the provided path")]
pub struct AlreadyExistsError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("file is busy, such as an executable that is running")]
pub struct BusyError;

/// An OS error that has no dedicated type, holding the raw errno value.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("OS error with code: {_0}")]
pub struct OtherError(#[error(not(source))] pub c_int);

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum OpenError {
    Access(AccessError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    IsDirectory(IsDirectoryError),
    PathLength(PathLengthError),
    ExcessiveLinks(ExcessiveLinksError),
    FileCount(FileCountError),
    OOM(OOMError),
    StorageExhausted(StorageExhaustedError),
    ReadOnlyFS(ReadOnlyFSError),
    OversizedFile(OversizedFileError),
    Interrupt(InterruptError),
    InvalidPath(InvalidPathError),
    AlreadyExists(AlreadyExistsError),
    Busy(BusyError),
    Other(OtherError),
}

impl OpenError {
    pub(crate) fn interpret_raw_error(err_no: c_int) -> OpenError {
        match err_no {
            EACCES | EPERM =>     AccessError.into(),
            ENOENT =>             MissingComponentError.into(),
            ENOTDIR =>            NonDirComponentError.into(),
            EISDIR =>             IsDirectoryError.into(),
            ENAMETOOLONG =>       PathLengthError.into(),
            ELOOP =>              ExcessiveLinksError.into(),
            EMFILE | ENFILE =>    FileCountError.into(),
            ENOMEM =>             OOMError.into(),
            ENOSPC | EDQUOT =>    StorageExhaustedError.into(),
            EROFS =>              ReadOnlyFSError.into(),
            EFBIG | EOVERFLOW =>  OversizedFileError.into(),
            EINTR =>              InterruptError.into(),
            EEXIST =>             AlreadyExistsError.into(),
            ETXTBSY =>            BusyError.into(),
            EFAULT =>             BadStackAddrPanic.panic(),
            e =>                  OtherError(e).into(),
        }
    }
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum ReadError {
    IO(IOError),
    IsDirectory(IsDirectoryError),
    OOM(OOMError),
    Other(OtherError),
}

impl ReadError {
    pub(crate) fn interpret_raw_error(err_no: c_int) -> ReadError {
        match err_no {
            EIO =>    IOError.into(),
            EISDIR => IsDirectoryError.into(),
            ENOMEM => OOMError.into(),
            EBADF =>  BadFdPanic.panic(),
            EFAULT => BadStackAddrPanic.panic(),
            e =>      OtherError(e).into(),
        }
    }
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum WriteError {
    IO(IOError),
    StorageExhausted(StorageExhaustedError),
    OversizedFile(OversizedFileError),
    Other(OtherError),
}

impl WriteError {
    pub(crate) fn interpret_raw_error(err_no: c_int) -> WriteError {
        match err_no {
            EIO =>             IOError.into(),
            ENOSPC | EDQUOT => StorageExhaustedError.into(),
            EFBIG =>           OversizedFileError.into(),
            EBADF =>           BadFdPanic.panic(),
            EFAULT =>          BadStackAddrPanic.panic(),
            e =>               OtherError(e).into(),
        }
    }
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum CloseError {
    Interrupt(InterruptError),
    IO(IOError),
    StorageExhausted(StorageExhaustedError),
    Other(OtherError),
}

impl CloseError {
    pub(crate) fn interpret_raw_error(err_no: c_int) -> CloseError {
        match err_no {
            EINTR =>           InterruptError.into(),
            EIO =>             IOError.into(),
            ENOSPC | EDQUOT => StorageExhaustedError.into(),
            EBADF =>           BadFdPanic.panic(),
            e =>               OtherError(e).into(),
        }
    }
}
