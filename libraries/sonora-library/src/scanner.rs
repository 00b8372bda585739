/// Audio file discovery in the storage directory
use std::path::{Path, PathBuf};

/// List the audio files directly inside `dir`
///
/// The storage layout is flat, so subdirectories are not descended into.
/// Results are sorted by file name to keep catalog order stable between
/// launches. A missing or unreadable directory yields no files.
pub fn discover_audio_files(dir: &Path, extensions: &[String]) -> Vec<PathBuf> {
    if !dir.is_dir() {
        tracing::debug!("Storage directory {} does not exist", dir.display());
        return Vec::new();
    }

    walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| is_audio_file(path, extensions))
        .collect()
}

/// Whether `dir` holds at least one audio file
pub fn has_audio_files(dir: &Path, extensions: &[String]) -> bool {
    !discover_audio_files(dir, extensions).is_empty()
}

/// Check if a file has one of the accepted extensions (case-insensitive)
pub fn is_audio_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.iter().any(|ext| ext.eq_ignore_ascii_case(e)))
}
