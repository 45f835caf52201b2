use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::{O_APPEND, O_CLOEXEC, O_CREAT, O_EXCL, O_RDONLY, O_RDWR, O_TRUNC, O_WRONLY, c_int, c_uint};

use crate::fs::error::{InvalidPathError, OpenError};
use crate::fs::{Fd, File};
use crate::util::syscall;

/// A builder struct to help with opening files, using customizable options and logical defaults.
/// Available via [`File::options`] to avoid additional use statements.
///
/// By default, files are opened read only, without creating them, and new files are created with
/// mode `0o644`.
///
/// # Examples
/// ```no_run
/// # use zen::fs::File;
/// let log = File::options()
///     .append(true)
///     .create(true)
///     .open("/tmp/zen.log")?;
/// # Ok::<(), zen::fs::OpenError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenOptions {
    read: bool,
    write: bool,
    flags: c_int,
    mode: c_uint,
}

macro_rules! set_flag {
    ($self:ident, $value:expr, $flag:expr) => {
        if $value {
            $self.flags |= $flag;
        } else {
            $self.flags &= !$flag;
        }
    };
}

impl OpenOptions {
    pub const fn new() -> OpenOptions {
        OpenOptions {
            read: true,
            write: false,
            flags: O_CLOEXEC,
            mode: 0o644,
        }
    }

    pub const fn read(&mut self, value: bool) -> &mut Self {
        self.read = value;
        self
    }

    pub const fn write(&mut self, value: bool) -> &mut Self {
        self.write = value;
        self
    }

    /// Writes always go to the end of the file. Implies write access.
    pub const fn append(&mut self, value: bool) -> &mut Self {
        set_flag!(self, value, O_APPEND);
        self
    }

    /// Empties the file when it is opened. Implies write access.
    pub const fn truncate(&mut self, value: bool) -> &mut Self {
        set_flag!(self, value, O_TRUNC);
        self
    }

    /// Creates the file if it is missing.
    pub const fn create(&mut self, value: bool) -> &mut Self {
        set_flag!(self, value, O_CREAT);
        self
    }

    /// Creates the file, failing with [`OpenError::AlreadyExists`] if it already exists. Turning
    /// this off leaves [`create`](OpenOptions::create) untouched.
    pub const fn create_new(&mut self, value: bool) -> &mut Self {
        if value {
            self.flags |= O_CREAT;
        }
        set_flag!(self, value, O_EXCL);
        self
    }

    /// Sets the permission bits given to newly created files.
    pub const fn mode(&mut self, value: u32) -> &mut Self {
        self.mode = value;
        self
    }

    pub(crate) const fn flags(&self) -> c_int {
        let writes = self.write || self.flags & (O_APPEND | O_TRUNC) != 0;
        let access = match (self.read, writes) {
            (true, true) => O_RDWR,
            (false, true) => O_WRONLY,
            _ => O_RDONLY,
        };
        self.flags | access
    }

    pub fn open<P: AsRef<Path>>(&self, file_path: P) -> Result<File, OpenError> {
        let file_path = file_path.as_ref();
        let pathname = CString::new(file_path.as_os_str().as_bytes())
            .map_err(|_| InvalidPathError)?;

        log::trace!("opening {} with flags {:#o}", file_path.display(), self.flags());

        match unsafe { libc::open(pathname.as_ptr(), self.flags(), self.mode) } {
            -1 => Err(OpenError::interpret_raw_error(syscall::err_no())),
            fd => Ok(File { fd: Fd(fd) }),
        }
    }
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self::new()
    }
}
