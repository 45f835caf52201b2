use std::io;

use libc::c_int;

/// Returns the calling thread's `errno` value, as set by the last failed libc call.
pub fn err_no() -> c_int {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}
