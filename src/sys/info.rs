use std::env;
use std::ffi::{CStr, c_char};
use std::mem::MaybeUninit;
use std::ptr;

use libc::ERANGE;

use crate::fs::panic::{Panic, UnexpectedErrorPanic};
use crate::sys::error::SysError;
use crate::util::syscall;

const PASSWD_BUF_FALLBACK: usize = 1024;

/// Identity of the running kernel, machine and user.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct SystemInfo {
    /// The operating system name, such as `Linux`.
    pub name: String,
    pub kernel_release: String,
    pub architecture: String,
    pub username: String,
    pub host_name: String,
    pub home_directory: String,
    /// The current working directory of the process.
    pub execute_path: String,
}

/// Collects [`SystemInfo`] from `uname(2)` and the password database.
///
/// If the current user has no passwd entry, the username and home directory are taken from the
/// `USER` and `HOME` environment variables instead, and are left empty if those are unset.
///
/// # Errors
/// Returns [`SysError::IO`] if the current working directory can't be determined.
pub fn read_system_info() -> Result<SystemInfo, SysError> {
    let mut uts = MaybeUninit::<libc::utsname>::uninit();
    if unsafe { libc::uname(uts.as_mut_ptr()) } == -1 {
        UnexpectedErrorPanic(syscall::err_no()).panic()
    }
    // SAFETY: uname initializes uts on success.
    let uts = unsafe { uts.assume_init() };

    let (username, home_directory) = match lookup_user() {
        Some(user) => user,
        None => {
            log::debug!("no passwd entry for the current user, falling back to the environment");
            (
                env::var("USER").unwrap_or_default(),
                env::var("HOME").unwrap_or_default(),
            )
        },
    };

    Ok(SystemInfo {
        name: field_to_string(&uts.sysname),
        kernel_release: field_to_string(&uts.release),
        architecture: field_to_string(&uts.machine),
        host_name: field_to_string(&uts.nodename),
        username,
        home_directory,
        execute_path: env::current_dir()?.to_string_lossy().into_owned(),
    })
}

fn field_to_string(field: &[c_char]) -> String {
    // SAFETY: uname nul terminates every field within its array.
    unsafe { CStr::from_ptr(field.as_ptr()) }.to_string_lossy().into_owned()
}

/// Looks up the name and home directory of the real user, growing the scratch buffer as
/// required by `getpwuid_r`.
fn lookup_user() -> Option<(String, String)> {
    let uid = unsafe { libc::getuid() };
    let mut len = match unsafe { libc::sysconf(libc::_SC_GETPW_R_SIZE_MAX) } {
        -1 => PASSWD_BUF_FALLBACK,
        size => size as usize,
    };

    loop {
        let mut buf = vec![0 as c_char; len];
        let mut passwd = MaybeUninit::<libc::passwd>::uninit();
        let mut result = ptr::null_mut();

        let status = unsafe {
            libc::getpwuid_r(uid, passwd.as_mut_ptr(), buf.as_mut_ptr(), buf.len(), &mut result)
        };

        match status {
            ERANGE => len *= 2,
            0 if !result.is_null() => {
                // SAFETY: getpwuid_r filled passwd, whose strings point into buf.
                let passwd = unsafe { passwd.assume_init() };
                let (name, dir) = unsafe {
                    (CStr::from_ptr(passwd.pw_name), CStr::from_ptr(passwd.pw_dir))
                };
                return Some((
                    name.to_string_lossy().into_owned(),
                    dir.to_string_lossy().into_owned(),
                ));
            },
            _ => return None,
        }
    }
}
