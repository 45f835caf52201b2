use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::Deref;

use libc::c_int;

use crate::fs::error::CloseError;
use crate::util::syscall;

/// An owned file descriptor, closed when dropped.
pub(crate) struct Fd(pub c_int);

impl Fd {
    pub fn close(self) -> Result<(), CloseError> {
        let raw = self.0;
        // close invalidates the descriptor regardless of the outcome, so Drop mustn't run.
        mem::forget(self);

        log::trace!("closing file descriptor {raw}");
        if unsafe { libc::close(raw) } == -1 {
            Err(CloseError::interpret_raw_error(syscall::err_no()))?
        }
        Ok(())
    }
}

impl Deref for Fd {
    type Target = c_int;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        log::trace!("dropping file descriptor {}", self.0);
        // SAFETY: After this, the file descriptor is invalidated but we are dropping self so it
        // doesn't matter.
        if unsafe { libc::close(self.0) } == -1 {
            let err = CloseError::interpret_raw_error(syscall::err_no());
            log::error!("error while dropping file descriptor {}: {err}", self.0);
        }
    }
}

impl Debug for Fd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fd({})", self.0)
    }
}
