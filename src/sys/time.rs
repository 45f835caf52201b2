use std::ffi::CStr;
use std::mem::MaybeUninit;
use std::ptr;

use crate::sys::error::{SysError, TimeError};

/// Which part of the local time [`time_date`] renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeFormat {
    /// `HH:MM:SS`
    Time,
    /// `YYYY/MM/DD`
    Date,
    /// `HH:MM:SS YYYY/MM/DD`
    Both,
}

impl TimeFormat {
    pub(crate) const fn pattern(self) -> &'static CStr {
        match self {
            TimeFormat::Time => c"%H:%M:%S",
            TimeFormat::Date => c"%Y/%m/%d",
            TimeFormat::Both => c"%H:%M:%S %Y/%m/%d",
        }
    }
}

/// Formats the current local time.
///
/// # Examples
/// ```
/// # use zen::sys::{time_date, TimeFormat};
/// let date = time_date(TimeFormat::Date).unwrap();
/// assert_eq!(date.len(), 10);
/// assert_eq!(&date[4..5], "/");
/// ```
pub fn time_date(format: TimeFormat) -> Result<String, SysError> {
    let now = unsafe { libc::time(ptr::null_mut()) };

    let mut local = MaybeUninit::<libc::tm>::uninit();
    if unsafe { libc::localtime_r(&now, local.as_mut_ptr()) }.is_null() {
        Err(TimeError)?
    }
    // SAFETY: localtime_r initializes local whenever it returns non-null.
    let local = unsafe { local.assume_init() };

    let mut buf = [0_u8; 32];
    let written = unsafe {
        libc::strftime(buf.as_mut_ptr().cast(), buf.len(), format.pattern().as_ptr(), &local)
    };
    if written == 0 {
        Err(TimeError)?
    }

    Ok(String::from_utf8_lossy(&buf[..written]).into_owned())
}
