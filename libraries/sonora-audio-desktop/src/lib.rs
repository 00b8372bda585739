//! Sonora Play - Desktop Audio
//!
//! [`AudioEngine`](sonora_playback::AudioEngine) for desktop platforms.
//!
//! - [`RodioEngine`]: opens the default output device once, one rodio
//!   `Sink` per prepared track
//! - [`probe_duration`]: Symphonia container probe used when the decoder
//!   can't report a length
//!
//! # Example
//!
//! ```rust,no_run
//! use sonora_audio_desktop::RodioEngine;
//! use sonora_playback::AudioEngine;
//! use std::path::Path;
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = RodioEngine::open_default()?;
//! let mut track = engine.prepare(Path::new("/music/song.flac"))?;
//! track.set_volume(0.8);
//! track.play();
//! # Ok(())
//! # }
//! ```

mod decoder;
mod engine;
mod error;
mod probe;

pub use decoder::RodioDecoder;
pub use engine::RodioEngine;
pub use error::{DesktopAudioError, Result};
pub use probe::probe_duration;
