use serde::{Deserialize, Serialize};

/// A sound the presentation layer should play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Something was gained.
    Success,
    /// An action was refused.
    Failure,
    /// An item was used; carries the item's own cue identifier.
    Item(String),
}

/// What the player is told after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Text to display. May be empty.
    pub message: String,
    /// Sound to play, if any.
    pub sound_cue: Option<SoundCue>,
}

impl Notification {
    /// A notification without a sound.
    pub fn silent(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sound_cue: None,
        }
    }

    /// A notification with a sound.
    pub fn with_cue(message: impl Into<String>, cue: SoundCue) -> Self {
        Self {
            message: message.into(),
            sound_cue: Some(cue),
        }
    }

    /// A refusal: the message plus the failure cue.
    pub fn refusal(message: impl Into<String>) -> Self {
        Self::with_cue(message, SoundCue::Failure)
    }
}
