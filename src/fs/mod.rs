//! Thin, typed wrappers around Linux file descriptors.
//!
//! Every system call failure is interpreted into one of a small set of error enums. Codes without
//! a dedicated type are returned as [`OtherError`]. Only errors that can arise from a bug in this
//! crate (a corrupted descriptor or a bad pointer) panic instead of being returned.
#![cfg(target_os = "linux")]

mod error;
mod fd;
mod file;
mod options;
pub(crate) mod panic;
mod tests;

pub use error::*;
pub(crate) use fd::Fd;
pub use file::File;
pub use options::OpenOptions;
