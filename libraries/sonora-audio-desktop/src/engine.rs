//! Desktop audio engine (rodio owner)
//!
//! Holds the output stream for the lifetime of the app and creates one
//! sink per prepared track.

use crate::decoder::RodioDecoder;
use crate::error::{DesktopAudioError, Result};
use crate::probe::probe_duration;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use sonora_playback::{AudioEngine, DecoderHandle, PlaybackError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

/// [`AudioEngine`] on the default output device
pub struct RodioEngine {
    // Must stay alive while any sink plays
    stream: OutputStream,
}

impl RodioEngine {
    /// Open the default output device
    ///
    /// # Errors
    /// Returns an error if no output device is available.
    pub fn open_default() -> Result<Self> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| DesktopAudioError::OutputUnavailable(e.to_string()))?;

        tracing::info!("Opened default audio output");
        Ok(Self { stream })
    }

    fn open(&self, path: &Path) -> Result<RodioDecoder> {
        let file = File::open(path)?;
        let decoder =
            Decoder::new(BufReader::new(file)).map_err(|e| DesktopAudioError::Decode(e.to_string()))?;

        let duration = decoder.total_duration().or_else(|| fallback_duration(path));

        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.append(decoder);

        Ok(RodioDecoder::new(sink, duration))
    }
}

impl AudioEngine for RodioEngine {
    fn prepare(&mut self, path: &Path) -> sonora_playback::Result<Box<dyn DecoderHandle>> {
        let decoder = self
            .open(path)
            .map_err(|e| PlaybackError::prepare_failed(path, e))?;

        tracing::debug!(
            "Prepared {} ({:?})",
            path.display(),
            decoder.duration()
        );
        Ok(Box::new(decoder))
    }
}

fn fallback_duration(path: &Path) -> Option<Duration> {
    match probe_duration(path) {
        Ok(duration) => duration,
        Err(e) => {
            tracing::debug!("No duration for {}: {}", path.display(), e);
            None
        }
    }
}
