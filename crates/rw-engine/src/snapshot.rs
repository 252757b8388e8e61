//! Snapshot export and import.
//!
//! A snapshot is the whole session as plain data: the state name and the
//! session data, serialized with the same camelCase field names the world
//! files use. Import checks that the snapshot is consistent with itself; it
//! is not compared against any other copy of the world.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::state::{SessionData, SessionState, StateName};

/// A serializable copy of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// State name at export time.
    pub name: StateName,
    /// Session data at export time.
    pub data: SessionData,
}

impl Snapshot {
    /// Parse a snapshot from JSON.
    pub fn from_json(input: &str) -> EngineResult<Self> {
        serde_json::from_str(input).map_err(|e| EngineError::InvalidSnapshot(e.to_string()))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> EngineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EngineError::InvalidSnapshot(e.to_string()))
    }

    fn validate(&self) -> EngineResult<()> {
        let data = &self.data;

        if !data.inventory.is_disjoint() {
            return Err(invalid("an item is both held and used"));
        }

        if self.name.is_playing() {
            if data.rooms.is_none() {
                return Err(invalid(format!("{} without rooms", self.name)));
            }
            if data.items.is_none() {
                return Err(invalid(format!("{} without items", self.name)));
            }
            if data.current_room.is_none() {
                return Err(invalid(format!("{} without a current room", self.name)));
            }
        }

        match (&data.rooms, &data.current_room) {
            (Some(rooms), Some(here)) if !rooms.contains_key(here.key()) => Err(invalid(format!(
                "current room \"{}\" is not in rooms",
                here.key()
            ))),
            _ => Ok(()),
        }
    }
}

fn invalid(reason: impl Into<String>) -> EngineError {
    EngineError::InvalidSnapshot(reason.into())
}

impl SessionState {
    /// Copy the session out as a snapshot.
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            name: self.name,
            data: self.data.clone(),
        }
    }
}

impl TryFrom<Snapshot> for SessionState {
    type Error = EngineError;

    fn try_from(snapshot: Snapshot) -> EngineResult<Self> {
        snapshot.validate()?;
        info!(state = %snapshot.name, "restored session from snapshot");
        Ok(Self {
            name: snapshot.name,
            data: snapshot.data,
        })
    }
}
