//! Session state values.
//!
//! A [`SessionState`] is never mutated in place by the state machine: each
//! command produces a fresh value (see [`crate::session`]).

use std::fmt;

use rw_core::{Direction, Items, Room, Rooms};
use serde::{Deserialize, Serialize};

use crate::inventory::Inventory;
use crate::surroundings;
use crate::unlock;

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StateName {
    /// Waiting for rooms and items.
    InitialLoad,
    /// Showing the current room's exits.
    DisplayingDirections,
    /// Showing the inventory.
    DisplayingInventory,
    /// A load failed; terminal until a snapshot is imported.
    Error,
}

impl StateName {
    /// Whether the session is past loading and playable.
    pub fn is_playing(self) -> bool {
        matches!(self, Self::DisplayingDirections | Self::DisplayingInventory)
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InitialLoad => "INITIAL_LOAD",
            Self::DisplayingDirections => "DISPLAYING_DIRECTIONS",
            Self::DisplayingInventory => "DISPLAYING_INVENTORY",
            Self::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// A room as the player currently sees it.
///
/// Same shape as the world's [`Room`], with `surroundings` resolved to the
/// variant that applies and every direction's `is_unlocked` filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrentRoom {
    room: Room,
}

impl CurrentRoom {
    /// Build the view of `room` for the given inventory.
    pub fn materialize(room: &Room, inventory: &Inventory, items: &Items) -> Self {
        let surroundings = surroundings::resolve(room, inventory, items).to_string();
        let available_directions =
            unlock::annotate_all(&room.available_directions, inventory.items_used());
        Self {
            room: Room {
                surroundings,
                available_directions,
                ..room.clone()
            },
        }
    }

    /// Build the view of `room` right after an item was used on one of its
    /// exits.
    ///
    /// The used variant of the surroundings takes precedence over the
    /// picked-up variant; a room without one falls back to [`Self::materialize`].
    pub fn after_use(room: &Room, inventory: &Inventory, items: &Items) -> Self {
        let mut view = Self::materialize(room, inventory, items);
        if let Some(text) = &room.surroundings_when_item_used {
            view.room.surroundings = text.clone();
        }
        view
    }

    /// The underlying view.
    pub fn as_room(&self) -> &Room {
        &self.room
    }

    /// Key of the world room this view was built from.
    pub fn key(&self) -> &str {
        &self.room.key
    }

    /// Resolved surroundings text.
    pub fn surroundings(&self) -> &str {
        &self.room.surroundings
    }

    /// Annotated exits, in authored order.
    pub fn directions(&self) -> &[Direction] {
        &self.room.available_directions
    }

    /// Find an annotated exit by name.
    pub fn direction(&self, name: &str) -> Option<&Direction> {
        self.room.direction(name)
    }
}

/// Everything a session knows besides its state name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    /// World rooms, once loaded.
    #[serde(default)]
    pub rooms: Option<Rooms>,
    /// World items, once loaded.
    #[serde(default)]
    pub items: Option<Items>,
    /// The room the player is in, once rooms are loaded.
    #[serde(default)]
    pub current_room: Option<CurrentRoom>,
    /// Held and used items.
    #[serde(default)]
    pub inventory: Inventory,
    /// Free text shown to the player.
    #[serde(default)]
    pub message: String,
    /// Name of the last direction taken, suffixed with `" repeat"` when
    /// the same exit is taken twice in a row.
    #[serde(default)]
    pub last_selected_direction: String,
    /// Whether sound cues should be played.
    #[serde(default)]
    pub sound_enabled: bool,
}

/// A session's full state: its name plus its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) name: StateName,
    pub(crate) data: SessionData,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// A fresh session waiting for rooms and items.
    pub fn new() -> Self {
        Self {
            name: StateName::InitialLoad,
            data: SessionData::default(),
        }
    }

    /// Which screen the session is on.
    pub fn name(&self) -> StateName {
        self.name
    }

    /// The session's data.
    pub fn data(&self) -> &SessionData {
        &self.data
    }

    /// The room the player is in.
    pub fn current_room(&self) -> Option<&CurrentRoom> {
        self.data.current_room.as_ref()
    }

    /// The player's inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.data.inventory
    }

    /// The message currently shown.
    pub fn message(&self) -> &str {
        &self.data.message
    }

    /// Whether sound cues are enabled.
    pub fn sound_enabled(&self) -> bool {
        self.data.sound_enabled
    }

    pub(crate) fn with(&self, name: StateName, data: SessionData) -> Self {
        Self { name, data }
    }
}
