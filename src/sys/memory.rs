use crate::sys::error::{FieldError, SysError};
use crate::sys::proc;

const MEMORY_INFO_PATH: &str = "/proc/meminfo";

/// Memory figures from `/proc/meminfo`, all in bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryInfo {
    pub total: u64,
    pub free: u64,
    pub buffers: u64,
    pub cached: u64,
    pub swap_total: u64,
    pub swap_free: u64,
    pub swap_cached: u64,
}

type Accessor = fn(&mut MemoryInfo) -> &mut u64;

const FIELDS: [(&str, Accessor); 7] = [
    ("MemTotal", |info| &mut info.total),
    ("MemFree", |info| &mut info.free),
    ("Buffers", |info| &mut info.buffers),
    ("Cached", |info| &mut info.cached),
    ("SwapTotal", |info| &mut info.swap_total),
    ("SwapFree", |info| &mut info.swap_free),
    ("SwapCached", |info| &mut info.swap_cached),
];

impl MemoryInfo {
    /// Parses the contents of a `/proc/meminfo` file, converting the reported kibibytes into
    /// bytes. Keys are matched exactly, so `SwapCached` never overwrites `Cached`.
    ///
    /// # Errors
    /// Returns [`SysError::Field`] if a recognised value isn't a number or overflows when scaled.
    ///
    /// # Examples
    /// ```
    /// # use zen::sys::MemoryInfo;
    /// let info = MemoryInfo::parse("MemTotal:       16384 kB\nSwapCached:         4 kB\n").unwrap();
    /// assert_eq!(info.total, 16384 * 1024);
    /// assert_eq!(info.swap_cached, 4096);
    /// assert_eq!(info.cached, 0);
    /// ```
    pub fn parse(content: &str) -> Result<MemoryInfo, SysError> {
        let mut info = MemoryInfo::default();

        for (key, value) in content.lines().filter_map(proc::key_value) {
            if let Some((name, field)) = FIELDS.iter().find(|(name, _)| *name == key) {
                *field(&mut info) = kibibytes(name, value)?;
            }
        }

        Ok(info)
    }
}

fn kibibytes(key: &'static str, value: &str) -> Result<u64, FieldError> {
    let invalid = || FieldError { key, value: value.to_owned() };

    value
        .split_ascii_whitespace()
        .next()
        .and_then(|amount| amount.parse::<u64>().ok())
        .and_then(|amount| amount.checked_mul(1024))
        .ok_or_else(invalid)
}

/// Reads and parses `/proc/meminfo`.
pub fn read_memory_info() -> Result<MemoryInfo, SysError> {
    MemoryInfo::parse(&proc::read_file(MEMORY_INFO_PATH)?)
}
