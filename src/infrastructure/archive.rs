//! Deterministic tar.gz writer
//!
//! Entries are appended in sorted walk order with deterministic headers, and
//! the gzip header carries no timestamp, so identical trees produce
//! identical archives.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::{Compression, GzBuilder};
use sha2::{Digest, Sha256};
use tar::{Builder, HeaderMode};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use super::fs::persist_published;

/// What was written by [`write_archive`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    /// Archive entry names, in archive order
    pub entries: Vec<String>,
    /// `sha256:<hex>` digest of the archive file
    pub digest: String,
}

fn create_deterministic_tar<W: Write>(writer: W) -> Builder<GzEncoder<W>> {
    let encoder = GzBuilder::new()
        .mtime(0)
        .operating_system(255)
        .write(writer, Compression::best());

    let mut tar = Builder::new(encoder);
    tar.mode(HeaderMode::Deterministic);
    tar.follow_symlinks(true);
    tar
}

/// Archive every entry below `source_root` into `archive_path`.
///
/// The archive is written to a temporary file next to `archive_path` and
/// renamed into place once complete, with mode 0644 on unix. Entry names
/// keep the file system's bytes; `ArchiveSummary::entries` shows them
/// lossily.
pub fn write_archive(source_root: &Path, archive_path: &Path) -> io::Result<ArchiveSummary> {
    let parent = archive_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    let mut tar = create_deterministic_tar(BufWriter::new(temp.reopen()?));
    let mut entries = Vec::new();

    for entry in WalkDir::new(source_root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(source_root)
            .map_err(io::Error::other)?;

        if entry.file_type().is_dir() {
            tar.append_dir(relative, entry.path())?;
        } else {
            tar.append_path_with_name(entry.path(), relative)?;
        }
        entries.push(
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
        );
    }

    let mut writer = tar.into_inner()?.finish()?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    drop(writer);

    persist_published(temp, archive_path)?;
    let digest = digest_file(archive_path)?;

    Ok(ArchiveSummary {
        path: archive_path.to_path_buf(),
        entries,
        digest,
    })
}

/// `sha256:<hex>` digest of a file's content
pub fn digest_file(path: &Path) -> io::Result<String> {
    let mut hasher = Sha256::new();
    io::copy(&mut File::open(path)?, &mut hasher)?;
    Ok(format!("sha256:{:x}", hasher.finalize()))
}
