use std::io::Write;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::sys::error::{CommandError, SysError};

const CLIPBOARD: &str = "xclip";
const OPENER: &str = "xdg-open";

fn check(program: &'static str, status: ExitStatus) -> Result<(), SysError> {
    if status.success() {
        Ok(())
    } else {
        Err(CommandError { program, status: status.to_string() }.into())
    }
}

/// Places `text` on the clipboard using `xclip`.
pub fn copy_text(text: &str) -> Result<(), SysError> {
    let mut child = Command::new(CLIPBOARD)
        .args(["-selection", "clipboard"])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    check(CLIPBOARD, child.wait()?)
}

/// Returns the clipboard contents using `xclip`, with one trailing newline removed.
pub fn paste_from_clipboard() -> Result<String, SysError> {
    let output = Command::new(CLIPBOARD)
        .args(["-selection", "clipboard", "-o"])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()?;
    check(CLIPBOARD, output.status)?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Opens `path` with the desktop's default application, returning whether `xdg-open`
/// succeeded.
pub fn open_file<P: AsRef<Path>>(path: P) -> bool {
    let status = Command::new(OPENER)
        .arg(path.as_ref())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) => status.success(),
        Err(err) => {
            log::warn!("failed to run {OPENER}: {err}");
            false
        },
    }
}
