#![allow(dead_code)]

use sonora_playback::{AudioEngine, DecoderHandle};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Engine that "plays" anything and records prepared file names
#[derive(Clone, Default)]
pub struct NullEngine {
    prepared: Arc<Mutex<Vec<String>>>,
}

impl NullEngine {
    pub fn prepared(&self) -> Vec<String> {
        self.prepared.lock().unwrap().clone()
    }
}

impl AudioEngine for NullEngine {
    fn prepare(&mut self, path: &Path) -> sonora_playback::Result<Box<dyn DecoderHandle>> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.prepared.lock().unwrap().push(name);
        Ok(Box::new(NullDecoder::default()))
    }
}

#[derive(Default)]
struct NullDecoder {
    position: Duration,
}

impl DecoderHandle for NullDecoder {
    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn seek(&mut self, position: Duration) -> sonora_playback::Result<()> {
        self.position = position;
        Ok(())
    }

    fn current_time(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Option<Duration> {
        Some(Duration::from_secs(240))
    }

    fn set_volume(&mut self, _volume: f32) {}

    fn is_finished(&self) -> bool {
        false
    }
}

/// Files that aren't real audio; the metadata reader falls back to file names
pub fn touch_files(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).expect("Failed to create test dir");
    for name in names {
        fs::write(dir.join(name), b"not really audio").expect("Failed to write test file");
    }
}
