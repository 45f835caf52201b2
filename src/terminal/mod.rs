//! Interactive console helpers: raw single-key input, masked line input, colored messages and
//! simple yes/no or multiple choice prompts.
//!
//! Everything here is built on a [`Console`], which pairs a [`KeySource`] with an output
//! [`Write`](std::io::Write)r. The free functions operate on the process's own terminal through
//! [`Console::stdio`], while tests and embedders can supply any other source and sink.
#![cfg(target_os = "linux")]

mod conio;
mod console;
mod error;
mod input;

pub use conio::*;
pub use console::*;
pub use error::*;
pub use input::*;
