//! Pickup and use of items.
//!
//! Items move one way: from the room into `items_held` on examine, and from
//! `items_held` into `items_used` when used on an exit that reacts to them.
//! A key is never in both lists at once.

use rw_core::{Item, Items, Room};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::notification::{Notification, SoundCue};
use crate::state::CurrentRoom;

/// The player's held and used items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    /// Held items, in pickup order.
    #[serde(default)]
    items_held: Vec<Item>,
    /// Keys of used items, in use order.
    #[serde(default)]
    items_used: Vec<String>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Held items, in pickup order.
    pub fn items_held(&self) -> &[Item] {
        &self.items_held
    }

    /// Keys of used items, in use order.
    pub fn items_used(&self) -> &[String] {
        &self.items_used
    }

    /// Whether nothing is held. Used items do not count.
    pub fn is_empty(&self) -> bool {
        self.items_held.is_empty()
    }

    /// The held item with this key.
    pub fn held(&self, key: &str) -> Option<&Item> {
        self.items_held.iter().find(|item| item.key == key)
    }

    /// Whether the item with this key is held.
    pub fn holds(&self, key: &str) -> bool {
        self.held(key).is_some()
    }

    /// Whether the item with this key has been used.
    pub fn has_used(&self, key: &str) -> bool {
        self.items_used.iter().any(|k| k == key)
    }

    /// Whether the item with this key was ever picked up (held or used).
    pub fn has_picked_up(&self, key: &str) -> bool {
        self.holds(key) || self.has_used(key)
    }

    /// Whether no key is both held and used.
    pub fn is_disjoint(&self) -> bool {
        !self.items_held.iter().any(|item| self.has_used(&item.key))
    }

    /// Copy with `item` appended to the held items.
    ///
    /// An item that was already picked up is not added twice.
    pub fn with_picked_up(&self, item: &Item) -> Self {
        let mut next = self.clone();
        if !self.has_picked_up(&item.key) {
            next.items_held.push(item.clone());
        }
        next
    }

    /// Copy with the held item `key` moved to the used items.
    ///
    /// Returns `None` when the item is not held.
    pub fn with_used(&self, key: &str) -> Option<Self> {
        let position = self.items_held.iter().position(|item| item.key == key)?;
        let mut next = self.clone();
        let item = next.items_held.remove(position);
        next.items_used.push(item.key);
        Some(next)
    }
}

/// The state an inventory action leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Inventory after the action.
    pub inventory: Inventory,
    /// Current room re-materialized against the new inventory.
    pub current_room: CurrentRoom,
}

/// Result of an inventory action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// What to tell the player.
    pub notification: Notification,
    /// `None` when the action was refused and nothing changed.
    pub change: Option<Change>,
}

impl Outcome {
    fn changed(notification: Notification, inventory: Inventory, current_room: CurrentRoom) -> Self {
        Self {
            notification,
            change: Some(Change {
                inventory,
                current_room,
            }),
        }
    }

    fn refused(message: impl Into<String>) -> Self {
        Self {
            notification: Notification::refusal(message),
            change: None,
        }
    }
}

/// The item lying in `room` that can still be picked up.
pub fn pickup_candidate<'a>(room: &Room, inventory: &Inventory, items: &'a Items) -> Option<&'a Item> {
    let key = room.item.as_deref()?;
    items.get(key).filter(|item| !inventory.has_picked_up(&item.key))
}

/// Examine `room`, picking up its item if it is still there.
pub fn examine(room: &Room, inventory: &Inventory, items: &Items, config: &EngineConfig) -> Outcome {
    match pickup_candidate(room, inventory, items) {
        Some(item) => {
            let inventory = inventory.with_picked_up(item);
            let current_room = CurrentRoom::materialize(room, &inventory, items);
            Outcome::changed(
                Notification::with_cue(config.pickup_message(&item.name), SoundCue::Success),
                inventory,
                current_room,
            )
        }
        None => Outcome::refused(room.description_when_examined.clone()),
    }
}

/// Whether any exit of `room` reacts to the item `key`.
pub fn can_use(key: &str, room: &Room) -> bool {
    room.available_directions.iter().any(|d| d.accepts(key))
}

/// Use the held `item` in `room`.
///
/// On success the item moves to the used list, the room switches to its
/// used surroundings, and every exit is re-annotated.
pub fn use_item(item: &Item, room: &Room, inventory: &Inventory, items: &Items) -> Outcome {
    let next = if can_use(&item.key, room) {
        inventory.with_used(&item.key)
    } else {
        None
    };

    match next {
        Some(inventory) => {
            let current_room = CurrentRoom::after_use(room, &inventory, items);
            Outcome::changed(
                Notification::with_cue(
                    item.message_when_used.clone(),
                    SoundCue::Item(item.sound_when_used.clone()),
                ),
                inventory,
                current_room,
            )
        }
        None => Outcome::refused(item.message_when_not_used.clone()),
    }
}
