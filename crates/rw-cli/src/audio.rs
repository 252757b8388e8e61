//! Audio backend that reports playback through the log instead of a device.

use rw_engine::{AudioBackend, AudioHandle};
use tracing::info;

/// Opens [`LoggingHandle`]s.
pub struct LoggingAudio;

impl AudioBackend for LoggingAudio {
    fn open(&self) -> Box<dyn AudioHandle> {
        Box::new(LoggingHandle)
    }
}

/// Logs every playback request at info level.
pub struct LoggingHandle;

impl AudioHandle for LoggingHandle {
    fn start(&mut self) {
        info!("ambient playback started");
    }

    fn play_effect(&mut self, asset_path: &str) {
        info!(asset = asset_path, "playing effect");
    }

    fn pause(&mut self) {
        info!("ambient playback paused");
    }
}
