use serde::{Deserialize, Serialize};

/// An object the player can pick up and use to unlock directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Identity of the item. Filled from the catalog key when omitted.
    #[serde(default)]
    pub key: String,
    /// Display name, e.g. "Key".
    pub name: String,
    /// Message shown when the item is used successfully.
    pub message_when_used: String,
    /// Message shown when the item cannot be used here.
    pub message_when_not_used: String,
    /// Identifier of the sound cue played on successful use.
    pub sound_when_used: String,
}

impl Item {
    /// Create an item with the given key and name and empty messages.
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            message_when_used: String::new(),
            message_when_not_used: String::new(),
            sound_when_used: String::new(),
        }
    }

    /// Set the messages for successful and unsuccessful use.
    pub fn with_messages(mut self, used: impl Into<String>, not_used: impl Into<String>) -> Self {
        self.message_when_used = used.into();
        self.message_when_not_used = not_used.into();
        self
    }

    /// Set the sound cue played on successful use.
    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound_when_used = sound.into();
        self
    }
}
