//! Command dispatch for the session state machine.
//!
//! [`SessionState::apply`] never mutates `self`; it returns the next state
//! and the notification for the presentation layer. Commands that are not
//! valid in the current state are rejected with an error and leave the
//! state untouched.

use std::fmt;

use rw_core::{Items, Rooms};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::inventory::{self, Inventory};
use crate::notification::Notification;
use crate::snapshot::Snapshot;
use crate::state::{CurrentRoom, SessionData, SessionState, StateName};

/// Which load a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadContext {
    /// The room graph.
    Rooms,
    /// The item definitions.
    Items,
}

impl fmt::Display for LoadContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rooms => f.write_str("rooms"),
            Self::Items => f.write_str("items"),
        }
    }
}

/// Everything that can happen to a session.
#[derive(Debug, Clone)]
pub enum Command {
    /// The room graph arrived.
    RoomsLoaded(Rooms),
    /// The item definitions arrived.
    ItemsLoaded(Items),
    /// A load failed.
    LoadFailed {
        /// Which load failed.
        context: LoadContext,
        /// Human-readable cause.
        message: String,
    },
    /// Take the exit with this name.
    SelectDirection(String),
    /// Examine the current room.
    ExamineRoom,
    /// Show the inventory.
    OpenInventory,
    /// Go back to the exits.
    CloseInventory,
    /// Use the held item with this key.
    UseItem(String),
    /// Turn sound on or off.
    ToggleSound,
    /// Replace the whole session with a saved one.
    ImportSnapshot(Snapshot),
}

impl Command {
    /// Short name for logs and errors.
    pub fn label(&self) -> &'static str {
        match self {
            Self::RoomsLoaded(_) => "load rooms",
            Self::ItemsLoaded(_) => "load items",
            Self::LoadFailed { .. } => "fail load",
            Self::SelectDirection(_) => "select direction",
            Self::ExamineRoom => "examine room",
            Self::OpenInventory => "open inventory",
            Self::CloseInventory => "close inventory",
            Self::UseItem(_) => "use item",
            Self::ToggleSound => "toggle sound",
            Self::ImportSnapshot(_) => "import snapshot",
        }
    }
}

/// The next state and what to tell the player about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the command.
    pub state: SessionState,
    /// Notification for the presentation layer.
    pub notification: Notification,
}

impl SessionState {
    /// Apply a command, producing the next state.
    pub fn apply(&self, command: Command, config: &EngineConfig) -> EngineResult<Transition> {
        let label = command.label();
        let result = match command {
            Command::RoomsLoaded(rooms) => self.rooms_loaded(rooms, config),
            Command::ItemsLoaded(items) => self.items_loaded(items),
            Command::LoadFailed { context, message } => Ok(self.load_failed(context, &message)),
            Command::SelectDirection(name) => self.select_direction(&name, config),
            Command::ExamineRoom => self.examine_room(config),
            Command::OpenInventory => self.open_inventory(config),
            Command::CloseInventory => self.close_inventory(),
            Command::UseItem(key) => self.use_item(&key),
            Command::ToggleSound => self.toggle_sound(),
            Command::ImportSnapshot(snapshot) => self.import_snapshot(snapshot),
        };

        match &result {
            Ok(transition) => debug!(
                command = label,
                from = %self.name,
                to = %transition.state.name,
                "applied command"
            ),
            Err(e) => warn!(command = label, state = %self.name, "rejected command: {e}"),
        }
        result
    }

    fn require(&self, command: &'static str, accepted: &[StateName]) -> EngineResult<()> {
        if accepted.contains(&self.name) {
            Ok(())
        } else {
            Err(EngineError::InvalidCommand {
                command,
                state: self.name,
            })
        }
    }

    fn settle(&self, name: StateName, data: SessionData, notification: Notification) -> Transition {
        Transition {
            state: self.with(name, data),
            notification,
        }
    }

    fn rooms(&self) -> EngineResult<&Rooms> {
        self.data.rooms.as_ref().ok_or(EngineError::NotLoaded("rooms"))
    }

    fn items(&self) -> EngineResult<&Items> {
        self.data.items.as_ref().ok_or(EngineError::NotLoaded("items"))
    }

    fn here(&self) -> EngineResult<&CurrentRoom> {
        self.data
            .current_room
            .as_ref()
            .ok_or(EngineError::NotLoaded("rooms"))
    }

    fn rooms_loaded(&self, rooms: Rooms, config: &EngineConfig) -> EngineResult<Transition> {
        self.require("load rooms", &[StateName::InitialLoad])?;

        let Some(start) = rooms.get(&config.start_room_key) else {
            return Ok(self.load_failed(
                LoadContext::Rooms,
                &format!("no room keyed \"{}\"", config.start_room_key),
            ));
        };

        let empty = Items::new();
        let items = self.data.items.as_ref().unwrap_or(&empty);
        let current_room = CurrentRoom::materialize(start, &self.data.inventory, items);

        let name = if self.data.items.is_some() {
            StateName::DisplayingDirections
        } else {
            StateName::InitialLoad
        };
        let data = SessionData {
            current_room: Some(current_room),
            message: String::new(),
            last_selected_direction: config.start_direction.clone(),
            rooms: Some(rooms),
            ..self.data.clone()
        };
        Ok(self.settle(name, data, Notification::silent("")))
    }

    fn items_loaded(&self, items: Items) -> EngineResult<Transition> {
        self.require("load items", &[StateName::InitialLoad])?;

        let name = if self.data.rooms.is_some() {
            StateName::DisplayingDirections
        } else {
            StateName::InitialLoad
        };
        let data = SessionData {
            items: Some(items),
            inventory: Inventory::new(),
            ..self.data.clone()
        };
        Ok(self.settle(name, data, Notification::silent("")))
    }

    fn load_failed(&self, context: LoadContext, cause: &str) -> Transition {
        let message = format!("Error fetching {context}: {cause}");
        warn!(%context, "load failed: {cause}");
        let data = SessionData {
            message: message.clone(),
            ..self.data.clone()
        };
        self.settle(StateName::Error, data, Notification::silent(message))
    }

    fn select_direction(&self, name: &str, config: &EngineConfig) -> EngineResult<Transition> {
        self.require("select a direction", &[StateName::DisplayingDirections])?;

        let here = self.here()?;
        let direction = here
            .direction(name)
            .ok_or_else(|| EngineError::UnknownDirection(name.to_string()))?;

        if !direction.is_unlocked {
            let next = if self.data.inventory.is_empty() {
                self.name
            } else {
                StateName::DisplayingInventory
            };
            let data = SessionData {
                message: config.locked_message.clone(),
                ..self.data.clone()
            };
            return Ok(self.settle(next, data, Notification::refusal(&config.locked_message)));
        }

        let target = self
            .rooms()?
            .get(&direction.target_room_key)
            .ok_or_else(|| EngineError::RoomNotFound(direction.target_room_key.clone()))?;
        let empty = Items::new();
        let items = self.data.items.as_ref().unwrap_or(&empty);
        let current_room = CurrentRoom::materialize(target, &self.data.inventory, items);

        let last_selected_direction = if self.data.last_selected_direction == name {
            format!("{name} repeat")
        } else {
            name.to_string()
        };

        let data = SessionData {
            current_room: Some(current_room),
            message: String::new(),
            last_selected_direction,
            ..self.data.clone()
        };
        Ok(self.settle(self.name, data, Notification::silent("")))
    }

    fn examine_room(&self, config: &EngineConfig) -> EngineResult<Transition> {
        self.require("examine the room", &[StateName::DisplayingDirections])?;

        let here = self.here()?;
        let room = self
            .rooms()?
            .get(here.key())
            .ok_or_else(|| EngineError::RoomNotFound(here.key().to_string()))?;
        let outcome = inventory::examine(room, &self.data.inventory, self.items()?, config);

        let mut data = SessionData {
            message: outcome.notification.message.clone(),
            ..self.data.clone()
        };
        if let Some(change) = outcome.change {
            data.inventory = change.inventory;
            data.current_room = Some(change.current_room);
        }
        Ok(self.settle(self.name, data, outcome.notification))
    }

    fn open_inventory(&self, config: &EngineConfig) -> EngineResult<Transition> {
        self.require(
            "open the inventory",
            &[StateName::DisplayingDirections, StateName::DisplayingInventory],
        )?;

        if self.data.inventory.is_empty() {
            let data = SessionData {
                message: config.empty_inventory_message.clone(),
                ..self.data.clone()
            };
            return Ok(self.settle(
                self.name,
                data,
                Notification::refusal(&config.empty_inventory_message),
            ));
        }

        let data = SessionData {
            message: String::new(),
            ..self.data.clone()
        };
        Ok(self.settle(StateName::DisplayingInventory, data, Notification::silent("")))
    }

    fn close_inventory(&self) -> EngineResult<Transition> {
        self.require("close the inventory", &[StateName::DisplayingInventory])?;

        let data = SessionData {
            message: String::new(),
            ..self.data.clone()
        };
        Ok(self.settle(StateName::DisplayingDirections, data, Notification::silent("")))
    }

    fn use_item(&self, key: &str) -> EngineResult<Transition> {
        self.require("use an item", &[StateName::DisplayingInventory])?;

        let items = self.items()?;
        let item = match self.data.inventory.held(key) {
            Some(item) => item,
            None if items.contains_key(key) => {
                return Err(EngineError::ItemNotHeld(key.to_string()));
            }
            None => return Err(EngineError::UnknownItem(key.to_string())),
        };

        let here = self.here()?;
        let room = self
            .rooms()?
            .get(here.key())
            .ok_or_else(|| EngineError::RoomNotFound(here.key().to_string()))?;
        let outcome = inventory::use_item(item, room, &self.data.inventory, items);

        let mut data = SessionData {
            message: outcome.notification.message.clone(),
            ..self.data.clone()
        };
        let name = match outcome.change {
            Some(change) => {
                data.inventory = change.inventory;
                data.current_room = Some(change.current_room);
                StateName::DisplayingDirections
            }
            None => self.name,
        };
        Ok(self.settle(name, data, outcome.notification))
    }

    fn toggle_sound(&self) -> EngineResult<Transition> {
        self.require(
            "toggle sound",
            &[
                StateName::InitialLoad,
                StateName::DisplayingDirections,
                StateName::DisplayingInventory,
            ],
        )?;

        let data = SessionData {
            sound_enabled: !self.data.sound_enabled,
            ..self.data.clone()
        };
        Ok(self.settle(self.name, data, Notification::silent("")))
    }

    fn import_snapshot(&self, snapshot: Snapshot) -> EngineResult<Transition> {
        let state = SessionState::try_from(snapshot)?;
        let notification = Notification::silent(state.data.message.clone());
        Ok(Transition {
            state,
            notification,
        })
    }
}
