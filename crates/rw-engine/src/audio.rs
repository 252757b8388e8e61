//! Audio playback port.
//!
//! The engine never touches a sound device. It asks an [`AudioBackend`] for a
//! handle when sound is switched on and drops the handle when sound is
//! switched off; the handle plays the ambient loop and one-shot effects.

/// Opens audio handles.
#[cfg_attr(test, mockall::automock)]
pub trait AudioBackend {
    /// Open a fresh handle. Called each time sound is switched on.
    fn open(&self) -> Box<dyn AudioHandle>;
}

/// A live audio handle.
#[cfg_attr(test, mockall::automock)]
pub trait AudioHandle {
    /// Start ambient playback.
    fn start(&mut self);

    /// Play a one-shot effect from the given asset path.
    fn play_effect(&mut self, asset_path: &str);

    /// Stop ambient playback. The handle is dropped right after.
    fn pause(&mut self);
}

/// A backend that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioBackend for SilentAudio {
    fn open(&self) -> Box<dyn AudioHandle> {
        Box::new(SilentAudio)
    }
}

impl AudioHandle for SilentAudio {
    fn start(&mut self) {}

    fn play_effect(&mut self, _asset_path: &str) {}

    fn pause(&mut self) {}
}
