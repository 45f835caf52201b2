use std::path::Path;

use libc::EINTR;

use crate::fs::error::{CloseError, IOError, OpenError, ReadError, WriteError};
use crate::fs::{Fd, OpenOptions};
use crate::util::syscall;

const CHUNK_SIZE: usize = 4096;

/// An open file on disk. The underlying descriptor is closed when the File is dropped, although
/// [`close`](File::close) should be preferred when errors need to be observed.
///
/// Reads and writes interrupted by a signal are retried transparently.
#[derive(Debug)]
pub struct File {
    pub(crate) fd: Fd,
}

impl File {
    /// Opens an existing file for reading.
    pub fn open<P: AsRef<Path>>(file_path: P) -> Result<File, OpenError> {
        File::options().open(file_path)
    }

    /// Opens a file for writing, creating it with mode `0o644` if missing and emptying it
    /// otherwise.
    pub fn create<P: AsRef<Path>>(file_path: P) -> Result<File, OpenError> {
        File::options()
            .read(false)
            .write(true)
            .create(true)
            .truncate(true)
            .open(file_path)
    }

    pub fn options() -> OpenOptions {
        OpenOptions::new()
    }

    /// Reads up to `buf.len()` bytes, returning the number read. Zero indicates the end of the
    /// file.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, ReadError> {
        loop {
            match unsafe { libc::read(*self.fd, buf.as_mut_ptr().cast(), buf.len()) } {
                -1 => match syscall::err_no() {
                    EINTR => continue,
                    e => Err(ReadError::interpret_raw_error(e))?,
                },
                count => return Ok(count as usize),
            }
        }
    }

    /// Reads everything up to the end of the file into `buf`, returning the number of bytes
    /// appended.
    pub fn read_to_end(&self, buf: &mut Vec<u8>) -> Result<usize, ReadError> {
        let start = buf.len();
        let mut chunk = [0_u8; CHUNK_SIZE];

        loop {
            match self.read(&mut chunk)? {
                0 => break,
                count => buf.extend_from_slice(&chunk[..count]),
            }
        }

        Ok(buf.len() - start)
    }

    /// Writes up to `buf.len()` bytes, returning the number written.
    pub fn write(&self, buf: &[u8]) -> Result<usize, WriteError> {
        loop {
            match unsafe { libc::write(*self.fd, buf.as_ptr().cast(), buf.len()) } {
                -1 => match syscall::err_no() {
                    EINTR => continue,
                    e => Err(WriteError::interpret_raw_error(e))?,
                },
                count => return Ok(count as usize),
            }
        }
    }

    /// Writes the entirety of `buf`, issuing as many writes as needed.
    pub fn write_all(&self, mut buf: &[u8]) -> Result<(), WriteError> {
        while !buf.is_empty() {
            match self.write(buf)? {
                0 => Err(IOError)?,
                count => buf = &buf[count..],
            }
        }
        Ok(())
    }

    pub fn close(self) -> Result<(), CloseError> {
        self.fd.close()
    }
}
