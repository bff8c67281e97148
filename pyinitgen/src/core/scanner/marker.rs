// src/core/scanner/marker.rs
use std::fs::{self, OpenOptions};
use std::io::{self, Write as _};
use std::path::Path;

pub const INIT_FILE_NAME: &str = "__init__.py";

#[cfg(unix)]
const INIT_FILE_MODE: u32 = 0o644;

/// Whether the listing of `dir` contains an `__init__.py`.
///
/// Any non-directory entry with that name counts, including a dangling
/// symlink. Presence is read from the listing alone, so a directory that can
/// be listed but not searched still reports its file. Content is never
/// inspected.
///
/// # Errors
///
/// Returns the I/O error if `dir` cannot be listed.
#[inline]
pub fn has_init_file(dir: &Path) -> io::Result<bool> {
    for entry in fs::read_dir(dir)? {
        let Ok(entry) = entry else {
            continue;
        };
        if entry.file_name() == INIT_FILE_NAME {
            return Ok(entry.file_type().map_or(true, |file_type| !file_type.is_dir()));
        }
    }
    Ok(false)
}

/// Creates `path` with `content` and sets its permissions.
///
/// The file must not exist yet; an existing file is never truncated.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be created, written,
/// or have its permissions set.
#[inline]
pub fn write_init_file(path: &Path, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(content.as_bytes())?;
    drop(file);

    set_init_file_permissions(path)
}

#[cfg(unix)]
fn set_init_file_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt as _;
    fs::set_permissions(path, fs::Permissions::from_mode(INIT_FILE_MODE))
}

#[cfg(not(unix))]
const fn set_init_file_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}
