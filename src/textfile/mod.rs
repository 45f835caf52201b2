//! Line oriented access to plain text files.
//!
//! A [`TextFile`] only remembers its path. Every operation opens the file, does its work and
//! closes the descriptor again before returning, so no handle outlives a call.
#![cfg(target_os = "linux")]

mod error;
mod search;
mod text_file;

pub use error::*;
pub use search::CountItem;
pub use text_file::TextFile;
