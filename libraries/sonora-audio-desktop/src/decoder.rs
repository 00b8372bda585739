//! Decoder handle over a rodio sink

use rodio::Sink;
use sonora_playback::{DecoderHandle, PlaybackError};
use std::time::Duration;

/// One prepared track
///
/// Owns its own sink, so dropping the handle silences the track.
pub struct RodioDecoder {
    sink: Sink,
    duration: Option<Duration>,
}

impl RodioDecoder {
    pub(crate) fn new(sink: Sink, duration: Option<Duration>) -> Self {
        Self { sink, duration }
    }
}

impl DecoderHandle for RodioDecoder {
    fn play(&mut self) {
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn seek(&mut self, position: Duration) -> sonora_playback::Result<()> {
        let position = match self.duration {
            Some(duration) => position.min(duration),
            None => position,
        };
        self.sink
            .try_seek(position)
            .map_err(|e| PlaybackError::SeekFailed(e.to_string()))
    }

    fn current_time(&self) -> Duration {
        self.sink.get_pos()
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume.clamp(0.0, 1.0));
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }
}

impl Drop for RodioDecoder {
    fn drop(&mut self) {
        self.sink.stop();
    }
}
