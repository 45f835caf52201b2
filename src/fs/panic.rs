use std::error::Error;

use derive_more::{Display, Error};
use libc::c_int;

/// An error that can't be recovered from and indicates a bug in this crate or memory corruption.
pub trait Panic: Error {
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

#[derive(Debug, Display, Error)]
#[display("file descriptor corruption")]
pub struct BadFdPanic;
impl Panic for BadFdPanic {}

#[derive(Debug, Display, Error)]
#[display("pointer exceeded accessible address space")]
pub struct BadStackAddrPanic;
impl Panic for BadStackAddrPanic {}

#[derive(Debug, Display, Error)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedErrorPanic(#[error(not(source))] pub c_int);
impl Panic for UnexpectedErrorPanic {}
