//! Moving and copying directory trees
//!
//! `move_path` prefers a rename. Staging usually lives on the system temp
//! filesystem, so a rename into the destination can fail with
//! `CrossesDevices`; in that case the tree is copied and the source removed.

use std::fs;
use std::io;
use std::path::Path;

use tempfile::NamedTempFile;
use walkdir::WalkDir;

/// Mode given to published files; `tempfile` creates them owner-only.
#[cfg(unix)]
const PUBLISHED_FILE_MODE: u32 = 0o644;

/// Rename a completed temporary file to `path`, readable by everyone.
pub fn persist_published(temp: NamedTempFile, path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(temp.path(), fs::Permissions::from_mode(PUBLISHED_FILE_MODE))?;
    }
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Move a file or directory from `from` to `to`.
///
/// An existing file at `to` is replaced. An existing directory at `to` must
/// be removed by the caller first.
pub fn move_path(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            copy_tree(from, to)?;
            remove_path(from)
        }
        Err(e) => Err(e),
    }
}

/// Recursively copy `from` to `to`, returning the number of files copied.
///
/// Symlinks are followed; their targets are copied as regular content.
pub fn copy_tree(from: &Path, to: &Path) -> io::Result<usize> {
    if fs::metadata(from)?.is_file() {
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(from, to)?;
        return Ok(1);
    }

    let mut copied = 0;
    for entry in WalkDir::new(from).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(io::Error::other)?;
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Remove a file or directory tree. A missing path is not an error.
pub fn remove_path(path: &Path) -> io::Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
