//! Queries about the running system: kernel and user identity, CPU and memory figures from
//! `/proc`, the local time, and a few desktop helpers that shell out to `xclip` and `xdg-open`.
//!
//! The `/proc` parsers are exposed separately ([`CpuInfo::parse`], [`MemoryInfo::parse`]) so
//! captured snapshots can be inspected without touching the live system.
#![cfg(target_os = "linux")]

mod cpu;
mod desktop;
mod error;
mod info;
mod memory;
mod proc;
mod time;

pub use cpu::*;
pub use desktop::*;
pub use error::*;
pub use info::*;
pub use memory::*;
pub use time::*;
