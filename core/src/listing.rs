//! # Directory Lister
//!
//! One-level directory listings plus the byte-level read/write pair
//! under a root. Listing is lazy everywhere: a call describes exactly
//! one level, and deeper levels are fetched by calling again with a
//! longer relative path. Entries come back directories-first, then by
//! name, so the same tree always lists the same way.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::fs::{self, File};
use tracing::warn;

use lanscout_common::error::DiscoveryError;
use lanscout_common::model::FileEntry;

#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryLister;

impl DirectoryLister {
    /// Immediate entries of `root/relative`.
    ///
    /// A missing path is an error; a child that cannot be statted
    /// (permission, broken link) is skipped with a warning.
    pub async fn list(
        &self,
        root: &Path,
        relative: &str,
    ) -> Result<Vec<FileEntry>, DiscoveryError> {
        let dir = join(root, relative);
        if !fs::try_exists(&dir).await? {
            return Err(DiscoveryError::PathNotFound(dir));
        }

        let mut entries = Vec::new();
        let mut reader = fs::read_dir(&dir).await?;
        while let Some(child) = reader.next_entry().await? {
            let name = child.file_name().to_string_lossy().into_owned();
            // stat through symlinks; a dangling link fails here and is skipped
            let meta = match fs::metadata(child.path()).await {
                Ok(meta) => meta,
                Err(e) => {
                    warn!("skipping unreadable entry {name}: {e}");
                    continue;
                }
            };
            let modified = meta
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

            entries.push(FileEntry {
                path: child_path(relative, &name),
                name,
                is_directory: meta.is_dir(),
                size: meta.len(),
                modified,
                children: None,
            });
        }

        entries.sort_by(|a, b| {
            b.is_directory
                .cmp(&a.is_directory)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(entries)
    }

    /// Opens `root/relative` for byte streaming.
    pub async fn open(&self, root: &Path, relative: &str) -> Result<File, DiscoveryError> {
        let target = join(root, relative);
        if !fs::try_exists(&target).await? {
            return Err(DiscoveryError::PathNotFound(target));
        }
        if fs::metadata(&target).await?.is_dir() {
            return Err(DiscoveryError::NotAFile(target));
        }
        Ok(File::open(&target).await?)
    }

    /// Writes `bytes` as `name` under `root/relative_dir`, creating
    /// the directory chain on the way. Concurrent writers to the same
    /// destination race last-write-wins; there is no locking.
    pub async fn save(
        &self,
        root: &Path,
        relative_dir: &str,
        name: &str,
        bytes: &[u8],
    ) -> Result<(), DiscoveryError> {
        let dir = join(root, relative_dir);
        fs::create_dir_all(&dir).await?;
        fs::write(dir.join(name), bytes).await?;
        Ok(())
    }
}

/// Joins a forward-slash relative path onto a root, segment by
/// segment, so it works against the native separator on any OS.
fn join(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|seg| !seg.is_empty())
        .fold(root.to_path_buf(), |path, seg| path.join(seg))
}

/// Relative path of a child, forward-slash normalized.
fn child_path(relative: &str, name: &str) -> String {
    let name = name.replace('\\', "/");
    if relative.is_empty() {
        name
    } else {
        format!("{}/{}", relative.trim_end_matches('/'), name)
    }
}
