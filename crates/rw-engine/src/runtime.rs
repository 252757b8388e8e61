//! The runtime that owns session state and audio.

use rw_core::{Items, Rooms};
use tracing::{debug, info};

use crate::audio::{AudioBackend, AudioHandle, SilentAudio};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::notification::Notification;
use crate::session::{Command, LoadContext};
use crate::snapshot::Snapshot;
use crate::state::SessionState;

/// A running game: the session state, its configuration, and the audio
/// handle that is open while sound is on.
///
/// Every entry point applies one command, replaces the state with the
/// result, brings the audio handle in line with `sound_enabled`, and plays
/// the notification's cue when sound is on. A rejected command changes
/// nothing.
pub struct Game {
    state: SessionState,
    config: EngineConfig,
    audio: Box<dyn AudioBackend>,
    handle: Option<Box<dyn AudioHandle>>,
}

impl Game {
    /// Start a new session waiting for rooms and items.
    pub fn new(config: EngineConfig, audio: Box<dyn AudioBackend>) -> Self {
        Self {
            state: SessionState::new(),
            config,
            audio,
            handle: None,
        }
    }

    /// Start a new session that never plays sound.
    pub fn silent(config: EngineConfig) -> Self {
        Self::new(config, Box::new(SilentAudio))
    }

    /// Current state, for rendering.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether an audio handle is currently open.
    pub fn audio_open(&self) -> bool {
        self.handle.is_some()
    }

    /// The room graph finished loading.
    pub fn on_rooms_loaded(&mut self, rooms: Rooms) -> EngineResult<Notification> {
        info!(rooms = rooms.len(), "rooms loaded");
        self.dispatch(Command::RoomsLoaded(rooms))
    }

    /// The item definitions finished loading.
    pub fn on_items_loaded(&mut self, items: Items) -> EngineResult<Notification> {
        info!(items = items.len(), "items loaded");
        self.dispatch(Command::ItemsLoaded(items))
    }

    /// A load failed. The session moves to the error state.
    pub fn on_load_error(
        &mut self,
        context: LoadContext,
        message: impl Into<String>,
    ) -> EngineResult<Notification> {
        self.dispatch(Command::LoadFailed {
            context,
            message: message.into(),
        })
    }

    /// Take the exit named `name`.
    pub fn select_direction(&mut self, name: &str) -> EngineResult<Notification> {
        self.dispatch(Command::SelectDirection(name.to_string()))
    }

    /// Examine the current room.
    pub fn examine_room(&mut self) -> EngineResult<Notification> {
        self.dispatch(Command::ExamineRoom)
    }

    /// Show the inventory.
    pub fn open_inventory(&mut self) -> EngineResult<Notification> {
        self.dispatch(Command::OpenInventory)
    }

    /// Return to the exits.
    pub fn close_inventory(&mut self) -> EngineResult<Notification> {
        self.dispatch(Command::CloseInventory)
    }

    /// Use the held item `key`.
    pub fn use_item(&mut self, key: &str) -> EngineResult<Notification> {
        self.dispatch(Command::UseItem(key.to_string()))
    }

    /// Flip sound on or off.
    pub fn toggle_sound(&mut self) -> EngineResult<Notification> {
        self.dispatch(Command::ToggleSound)
    }

    /// Copy the session out.
    pub fn export_snapshot(&self) -> Snapshot {
        info!(state = %self.state.name(), "exported snapshot");
        self.state.to_snapshot()
    }

    /// Replace the session with a saved one.
    pub fn import_snapshot(&mut self, snapshot: Snapshot) -> EngineResult<Notification> {
        self.dispatch(Command::ImportSnapshot(snapshot))
    }

    fn dispatch(&mut self, command: Command) -> EngineResult<Notification> {
        let transition = self.state.apply(command, &self.config)?;
        self.state = transition.state;
        self.sync_audio();

        let cue = transition
            .notification
            .sound_cue
            .as_ref()
            .filter(|cue| !self.config.cue_identifier(cue).is_empty());
        if let (Some(cue), Some(handle)) = (cue, self.handle.as_mut()) {
            let path = self.config.asset_path(cue);
            debug!(%path, "playing effect");
            handle.play_effect(&path);
        }

        Ok(transition.notification)
    }

    fn sync_audio(&mut self) {
        match (self.state.sound_enabled(), self.handle.take()) {
            (true, Some(handle)) => self.handle = Some(handle),
            (true, None) => {
                let mut handle = self.audio.open();
                handle.start();
                debug!("audio started");
                self.handle = Some(handle);
            }
            (false, Some(mut handle)) => {
                handle.pause();
                debug!("audio paused");
            }
            (false, None) => {}
        }
    }
}
