//! Capability-scoped file helpers shared by the store and snapshot transfer.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::{self, Write};
use tracing::warn;

/// Suffix of the scratch file written before an atomic rename.
const SCRATCH_SUFFIX: &str = ".tmp";

/// Opens the parent directory of `path`, returning it with the file name.
///
/// # Errors
///
/// Returns an error if `path` has no file name or the parent directory
/// cannot be opened.
pub fn open_parent_dir(path: &Utf8Path) -> io::Result<(Dir, &str)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("path '{path}' must include a file name")))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Reads a whole file addressed by an ambient path.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_file(path: &Utf8Path) -> io::Result<Vec<u8>> {
    let (dir, file_name) = open_parent_dir(path)?;
    dir.read(file_name)
}

/// Atomically writes a whole file addressed by an ambient path.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be opened or the write
/// fails.
pub fn write_file(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    let (dir, file_name) = open_parent_dir(path)?;
    write_atomic(&dir, file_name, contents)
}

/// Writes `contents` to a scratch file and renames it over `file_name`.
///
/// Readers observe either the previous file or the complete new one. The
/// scratch file is removed again if any step fails.
pub(super) fn write_atomic(dir: &Dir, file_name: &str, contents: &[u8]) -> io::Result<()> {
    let scratch = Utf8PathBuf::from(format!("{file_name}{SCRATCH_SUFFIX}"));
    let result = write_scratch(dir, &scratch, contents)
        .and_then(|()| dir.rename(&scratch, dir, file_name));
    if result.is_err() {
        discard_scratch(dir, &scratch);
    }
    result
}

fn write_scratch(dir: &Dir, scratch: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    let mut file = dir.create(scratch)?;
    file.write_all(contents)?;
    file.sync_all()
}

fn discard_scratch(dir: &Dir, scratch: &Utf8Path) {
    match dir.remove_file(scratch) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => warn!(file = %scratch, error = %err, "could not remove scratch file"),
    }
}
