#![cfg(test)]

use std::fs as std_fs;

use tempfile::TempDir;

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_create_write_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.txt");

    let file = File::create(&path).unwrap();
    file.write_all(b"hello\nworld\n").unwrap();
    file.close().unwrap();

    let file = File::open(&path).unwrap();
    let mut buf = Vec::new();
    assert_eq!(file.read_to_end(&mut buf).unwrap(), 12);
    assert_eq!(buf, b"hello\nworld\n");
}

#[test]
fn test_read_to_end_large() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("large.bin");
    let contents: Vec<u8> = (0..20_000_u32).map(|i| (i % 251) as u8).collect();
    std_fs::write(&path, &contents).unwrap();

    let file = File::open(&path).unwrap();
    let mut buf = b"prefix".to_vec();
    assert_eq!(file.read_to_end(&mut buf).unwrap(), contents.len());
    assert_eq!(&buf[..6], b"prefix");
    assert_eq!(&buf[6..], &contents[..]);
}

#[test]
fn test_append() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.txt");
    std_fs::write(&path, "a").unwrap();

    let file = File::options().append(true).open(&path).unwrap();
    file.write_all(b"b").unwrap();
    drop(file);

    assert_eq!(std_fs::read_to_string(&path).unwrap(), "ab");
}

#[test]
fn test_create_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new.txt");
    File::create(&path).unwrap();

    let mode = std_fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    // The process umask can only remove permissions.
    assert_eq!(mode & !0o644, 0);
    assert_ne!(mode & 0o600, 0);
}

#[test]
fn test_open_errors() {
    let dir = TempDir::new().unwrap();

    assert_eq!(
        File::open(dir.path().join("missing.txt")).unwrap_err(),
        OpenError::MissingComponent(MissingComponentError)
    );
    assert!(File::create(dir.path()).unwrap_err().is_is_directory());
    assert!(File::open("bad\0path").unwrap_err().is_invalid_path());

    let existing = dir.path().join("exists.txt");
    std_fs::write(&existing, "").unwrap();
    assert_eq!(
        File::options().create_new(true).write(true).open(&existing).unwrap_err(),
        OpenError::AlreadyExists(AlreadyExistsError)
    );
}

#[test]
fn test_open_running_executable() {
    let running = std::env::current_exe().unwrap();
    assert_eq!(
        File::options().write(true).open(&running).unwrap_err(),
        OpenError::Busy(BusyError),
        "a running executable can't be opened for writing"
    );
}

#[test]
fn test_unlisted_errors_are_returned() {
    use libc::{EAGAIN, EINVAL, ENXIO, EPIPE};

    assert_eq!(OpenError::interpret_raw_error(ENXIO), OpenError::Other(OtherError(ENXIO)));
    assert_eq!(OpenError::interpret_raw_error(EINVAL), OpenError::Other(OtherError(EINVAL)));
    assert_eq!(WriteError::interpret_raw_error(EPIPE), WriteError::Other(OtherError(EPIPE)));
    assert_eq!(WriteError::interpret_raw_error(EAGAIN), WriteError::Other(OtherError(EAGAIN)));
    assert_eq!(ReadError::interpret_raw_error(EAGAIN), ReadError::Other(OtherError(EAGAIN)));
    assert_eq!(CloseError::interpret_raw_error(EINVAL), CloseError::Other(OtherError(EINVAL)));

    assert_panics!({ OpenError::interpret_raw_error(libc::EFAULT) }, "pointer exceeded");
    assert_panics!({ WriteError::interpret_raw_error(libc::EBADF) }, "file descriptor corruption");
}

#[test]
fn test_read_directory() {
    let dir = TempDir::new().unwrap();
    let file = File::open(dir.path()).unwrap();
    let mut buf = [0_u8; 8];
    assert_eq!(file.read(&mut buf), Err(ReadError::IsDirectory(IsDirectoryError)));
}

#[test]
fn test_flags() {
    use libc::{O_APPEND, O_RDONLY, O_RDWR, O_WRONLY};

    let options = OpenOptions::new();
    assert_eq!(options.flags() & 0o3, O_RDONLY);

    let mut options = OpenOptions::new();
    options.write(true);
    assert_eq!(options.flags() & 0o3, O_RDWR);

    let mut options = OpenOptions::new();
    options.read(false).append(true);
    assert_eq!(options.flags() & 0o3, O_WRONLY);
    assert_ne!(options.flags() & O_APPEND, 0);

    options.append(false);
    assert_eq!(options.flags() & O_APPEND, 0);
}

#[test]
fn test_create_new_keeps_create() {
    use libc::{O_CREAT, O_EXCL};

    let mut options = OpenOptions::new();
    options.create(true).create_new(true);
    assert_ne!(options.flags() & O_EXCL, 0);

    options.create_new(false);
    assert_eq!(options.flags() & O_EXCL, 0);
    assert_ne!(options.flags() & O_CREAT, 0, "turning off create_new shouldn't undo create");
}
