//! Session state machine for Roomwright.
//!
//! Given a world of rooms and items (see `rw-core`), this crate decides what
//! the player sees, what they may do, and how each command changes the
//! session. The resolver, unlock evaluator, and inventory engine are pure
//! functions; [`SessionState::apply`] turns a [`Command`] into the next state
//! plus a [`Notification`]; [`Game`] owns that state together with the audio
//! handle that plays the notification's sound cue.

/// Audio playback port.
pub mod audio;
/// Engine texts and sound cue configuration.
pub mod config;
/// Error types for the engine.
pub mod error;
/// Pickup and use of items.
pub mod inventory;
/// Messages and sound cues emitted after each command.
pub mod notification;
/// The runtime that owns session state and audio.
pub mod runtime;
/// Command dispatch for the session state machine.
pub mod session;
/// Snapshot export and import.
pub mod snapshot;
/// Session state values.
pub mod state;
/// Room description variant selection.
pub mod surroundings;
/// Direction unlock evaluation.
pub mod unlock;

pub use audio::{AudioBackend, AudioHandle, SilentAudio};
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use inventory::Inventory;
pub use notification::{Notification, SoundCue};
pub use runtime::Game;
pub use session::{Command, LoadContext, Transition};
pub use snapshot::Snapshot;
pub use state::{CurrentRoom, SessionData, SessionState, StateName};
