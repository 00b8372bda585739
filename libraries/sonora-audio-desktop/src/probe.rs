//! Container duration probe (Symphonia)

use crate::error::Result;
use std::fs::File;
use std::path::Path;
use std::time::Duration;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;

/// Read the track length from the container headers
///
/// Returns `Ok(None)` when the container doesn't declare a frame count
/// (some VBR MP3s, live OGG streams).
///
/// # Errors
/// Returns an error if the file can't be opened or isn't a known format.
pub fn probe_duration(path: &Path) -> Result<Option<Duration>> {
    let file = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;

    let Some(track) = probed.format.default_track() else {
        return Ok(None);
    };

    let params = &track.codec_params;
    Ok(duration_from_params(params.time_base, params.n_frames))
}

fn duration_from_params(time_base: Option<TimeBase>, n_frames: Option<u64>) -> Option<Duration> {
    let time = time_base?.calc_time(n_frames?);
    Some(Duration::from_secs(time.seconds) + Duration::from_secs_f64(time.frac))
}
