//! Module assembly
//!
//! Wires the player together once at startup: storage bootstrap,
//! metadata reader, catalog, audio engine, session and presenter.

use crate::config::AppConfig;
use sonora_library::{bootstrap_storage, BootstrapReport, LibraryCatalog, LibraryConfig};
use sonora_metadata::LoftyMetadataReader;
use sonora_playback::{AudioEngine, PlaybackObserver, PlaybackSession};
use std::sync::Arc;

/// Catalog over the configured storage directory
pub fn create_catalog(config: &LibraryConfig) -> LibraryCatalog<LoftyMetadataReader> {
    let reader = LoftyMetadataReader::with_max_artwork_size(config.max_artwork_bytes);
    LibraryCatalog::new(reader, config)
}

/// Copy the bundled starter tracks if a bundle is configured
pub fn bootstrap(config: &LibraryConfig) -> Option<BootstrapReport> {
    let bundled = config.bundled_dir.as_deref()?;
    Some(bootstrap_storage(
        bundled,
        &config.storage_dir,
        &config.extensions,
    ))
}

/// Build and start the playback session
///
/// The observer is registered before the catalog loads so it sees the
/// first track (or the empty-catalog notice).
pub fn create_module<E, O>(
    config: &AppConfig,
    engine: E,
    observer: &Arc<O>,
) -> anyhow::Result<PlaybackSession>
where
    E: AudioEngine + 'static,
    O: PlaybackObserver + 'static,
{
    bootstrap(&config.library);

    let mut session = PlaybackSession::builder()
        .catalog(create_catalog(&config.library))
        .engine(engine)
        .config(config.playback.clone())
        .build()?;

    session.add_observer(observer);
    session.start();

    tracing::info!(
        "Player ready: {} tracks, mode {}",
        session.catalog().len(),
        session.mode()
    );
    Ok(session)
}
