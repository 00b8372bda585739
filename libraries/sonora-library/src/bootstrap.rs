//! First-run copy of bundled starter tracks into the storage directory

use crate::error::{LibraryError, Result};
use crate::scanner::{discover_audio_files, has_audio_files};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a bootstrap attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// False when the storage directory already had audio files
    pub ran: bool,

    /// Files copied into storage
    pub copied: Vec<PathBuf>,

    /// Bundled files whose destination name already existed
    pub skipped: usize,

    /// Files that could not be copied, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

impl BootstrapReport {
    /// Number of files copied
    pub fn copied_count(&self) -> usize {
        self.copied.len()
    }
}

/// Seed an empty storage directory with the bundled starter tracks
///
/// Only runs when `storage` contains no audio files. Each bundled audio
/// file is copied under its own name unless that name already exists.
/// Copy failures are logged and recorded in the report; they never stop
/// the remaining copies. Running it again is a no-op.
pub fn bootstrap_storage(bundled: &Path, storage: &Path, extensions: &[String]) -> BootstrapReport {
    let mut report = BootstrapReport::default();

    if has_audio_files(storage, extensions) {
        tracing::debug!(
            "Storage {} already has audio files, skipping bootstrap",
            storage.display()
        );
        return report;
    }

    if let Err(e) = ensure_storage_dir(storage) {
        tracing::error!("Bootstrap aborted: {}", e);
        report.failed.push((storage.to_path_buf(), e.to_string()));
        return report;
    }

    report.ran = true;

    for source in discover_audio_files(bundled, extensions) {
        let Some(file_name) = source.file_name() else {
            continue;
        };
        let dest = storage.join(file_name);

        if dest.exists() {
            report.skipped += 1;
            continue;
        }

        match copy_file(&source, &dest) {
            Ok(()) => {
                tracing::debug!("Copied {} into storage", source.display());
                report.copied.push(dest);
            }
            Err(e) => {
                tracing::warn!("Bootstrap copy failed: {}", e);
                report.failed.push((source, e.to_string()));
            }
        }
    }

    tracing::info!(
        "Bootstrap finished: {} copied, {} skipped, {} failed",
        report.copied.len(),
        report.skipped,
        report.failed.len()
    );

    report
}

fn ensure_storage_dir(storage: &Path) -> Result<()> {
    if storage.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(storage).map_err(|source| LibraryError::StorageUnavailable {
        path: storage.to_path_buf(),
        source,
    })
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to)
        .map(|_| ())
        .map_err(|source| LibraryError::CopyFailed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
}
