use std::path::Path;

use crate::fs::File;
use crate::sys::error::{FieldError, SysError};

/// Reads a whole `/proc` style file. Contents are expected to be ASCII, anything else is
/// replaced rather than rejected.
pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, SysError> {
    let path = path.as_ref();
    log::debug!("scanning {}", path.display());

    let file = File::open(path)?;
    let mut buf = Vec::new();
    let read = file.read_to_end(&mut buf);
    file.close()?;
    read?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Splits `key : value` lines, trimming both sides. Blank lines yield `None`, as do lines without
/// a separator, which are logged and skipped.
pub(crate) fn key_value(line: &str) -> Option<(&str, &str)> {
    if line.trim().is_empty() {
        return None;
    }

    match line.split_once(':') {
        Some((key, value)) => Some((key.trim(), value.trim())),
        None => {
            log::warn!("skipping malformed line: {line:?}");
            None
        },
    }
}

pub(crate) fn parse_field<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, FieldError> {
    value.parse().map_err(|_| FieldError { key, value: value.to_owned() })
}
