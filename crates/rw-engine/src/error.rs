//! Error types for the engine.

use thiserror::Error;

use crate::state::StateName;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that reject a command outright.
///
/// Refusals the player can recover from in play (a locked door, an item that
/// does nothing here) are not errors; they come back as notifications.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The command is not accepted in the session's current state.
    #[error("cannot {command} while {state}")]
    InvalidCommand {
        /// Name of the rejected command.
        command: &'static str,
        /// State the session was in.
        state: StateName,
    },

    /// The current room has no exit with this name.
    #[error("no direction named \"{0}\" here")]
    UnknownDirection(String),

    /// No item with this key exists in the world.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// The item exists but the player is not holding it.
    #[error("item not in inventory: {0}")]
    ItemNotHeld(String),

    /// A room referenced by the session is missing from the world.
    #[error("room not found: {0}")]
    RoomNotFound(String),

    /// Part of the world the command depends on has not been loaded.
    #[error("{0} have not been loaded")]
    NotLoaded(&'static str),

    /// A snapshot failed its consistency checks.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Engine configuration could not be read.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
