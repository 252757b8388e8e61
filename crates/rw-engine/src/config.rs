//! Configuration for a game session.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::notification::SoundCue;

/// Fixed texts and cue identifiers used by the state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Key of the room the player starts in.
    pub start_room_key: String,
    /// Sentinel stored as the last selected direction after rooms load.
    pub start_direction: String,
    /// Shown when the player picks a locked direction.
    pub locked_message: String,
    /// Shown when the player opens an empty inventory.
    pub empty_inventory_message: String,
    /// Cue identifier for a successful pickup.
    pub success_cue: String,
    /// Cue identifier for any refusal.
    pub failure_cue: String,
    /// Directory audio assets are served from.
    pub audio_dir: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start_room_key: "START".to_string(),
            start_direction: "start".to_string(),
            locked_message: "Seems I can't go this way yet...".to_string(),
            empty_inventory_message: "I'm not carrying anything".to_string(),
            success_cue: "success_chime".to_string(),
            failure_cue: "failure".to_string(),
            audio_dir: "/audio".to_string(),
        }
    }
}

impl EngineConfig {
    /// Read a config from JSON. Missing fields keep their defaults.
    pub fn from_json(input: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Set the starting room key.
    pub fn with_start_room(mut self, key: impl Into<String>) -> Self {
        self.start_room_key = key.into();
        self
    }

    /// Set the message for locked directions.
    pub fn with_locked_message(mut self, message: impl Into<String>) -> Self {
        self.locked_message = message.into();
        self
    }

    /// Set the message for opening an empty inventory.
    pub fn with_empty_inventory_message(mut self, message: impl Into<String>) -> Self {
        self.empty_inventory_message = message.into();
        self
    }

    /// Set the directory audio assets are served from.
    pub fn with_audio_dir(mut self, dir: impl Into<String>) -> Self {
        self.audio_dir = dir.into();
        self
    }

    /// Message announcing a newly picked up item.
    pub fn pickup_message(&self, item_name: &str) -> String {
        format!("{item_name} has been added to your inventory")
    }

    /// Identifier of a cue under this config.
    pub fn cue_identifier<'a>(&'a self, cue: &'a SoundCue) -> &'a str {
        match cue {
            SoundCue::Success => self.success_cue.as_str(),
            SoundCue::Failure => self.failure_cue.as_str(),
            SoundCue::Item(id) => id.as_str(),
        }
    }

    /// Path of the audio asset for a cue, e.g. `/audio/failure.wav`.
    pub fn asset_path(&self, cue: &SoundCue) -> String {
        format!(
            "{}/{}.wav",
            self.audio_dir.trim_end_matches('/'),
            self.cue_identifier(cue)
        )
    }
}
