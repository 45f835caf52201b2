//! Zen is a small utility library built around [`DynamicString`](corex::DynamicString), a growable,
//! null-terminated byte string, along with a handful of helpers for everyday programs: text files,
//! system queries and interactive terminal prompts.
//!
//! # Components
//! Each component sits behind a cargo feature of the same name, all of which are enabled by
//! default:
//! - [`corex`]: [`DynamicString`](corex::DynamicString) and the exact-size
//!   [`Array`](corex::Array).
//! - [`fs`]: thin, strongly typed wrappers around Linux file descriptors.
//! - [`textfile`]: line oriented reading, writing, searching and counting for text files.
//! - [`sys`]: kernel, user, CPU, memory and time information, plus clipboard and `xdg-open`
//!   helpers.
//! - [`terminal`]: raw key input, masked line input, colored output and simple prompts.
//!
//! # Error Handling
//! Fallible operations return [`Result`]s that are strongly typed, using enums for static dispatch
//! rather than dynamic, with structs (often ZSTs) that implement [`Error`](std::error::Error).
//! Indexing with `[]` is treated as infallible and panics with the same error message that the
//! equivalent `get` or `at` method would return.
//!
//! System calls report failure through errno. Codes that a call can legitimately produce are
//! mapped onto these error types, while codes that could only result from a bug (such as a bad
//! file descriptor) panic instead.
//!
//! # Dependencies
//! The [`fs`], [`sys`] and [`terminal`] modules rely on `libc` for their syscall wrappers and are
//! only available on Linux. Errors are derived with `derive_more`, and diagnostics are emitted
//! through the `log` facade; this crate never installs a logger itself.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "corex")]
pub mod corex;
#[cfg(feature = "fs")]
pub mod fs;
#[cfg(feature = "sys")]
pub mod sys;
#[cfg(feature = "terminal")]
pub mod terminal;
#[cfg(feature = "textfile")]
pub mod textfile;

pub(crate) mod util;
