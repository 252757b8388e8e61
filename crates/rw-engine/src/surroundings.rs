//! Picks which description variant of a room applies.
//!
//! Priority order:
//! 1. no item in the room and nothing used yet: the default text;
//! 2. the room has an item: the picked-up text once it is held or used;
//! 3. otherwise the used text, once any item one of the room's exits reacts
//!    to has been used.
//!
//! Whenever the chosen variant is absent the default text is returned.

use rw_core::{Items, Room};

use crate::inventory::Inventory;

/// Resolve the surroundings text for `room` given the player's inventory.
pub fn resolve<'a>(room: &'a Room, inventory: &Inventory, items: &Items) -> &'a str {
    let default = room.surroundings.as_str();

    match room.item.as_deref() {
        None if inventory.items_used().is_empty() => default,
        Some(item_key) => {
            let picked_up = items
                .get(item_key)
                .is_some_and(|item| inventory.has_picked_up(&item.key));
            if picked_up {
                room.surroundings_when_item_picked_up
                    .as_deref()
                    .unwrap_or(default)
            } else {
                default
            }
        }
        None => {
            let used_here = room.usable_item_keys().any(|key| inventory.has_used(key));
            match room.surroundings_when_item_used.as_deref() {
                Some(text) if used_here => text,
                _ => default,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rw_core::{Direction, Item};

    fn items() -> Items {
        vec![Item::new("key", "Key"), Item::new("lamp", "Lamp")]
            .into_iter()
            .collect()
    }

    fn dusty_room() -> Room {
        Room::new("R", "A dusty room.").with_item("key", "An empty dusty room.")
    }

    fn door_room() -> Room {
        Room::new("DOOR", "A locked door.")
            .with_used_surroundings("The door stands open.")
            .with_direction(Direction::new("north", "HALL").requires("key"))
    }

    #[test]
    fn default_when_nothing_happened() {
        let room = Room::new("START", "A hallway.");
        assert_eq!(resolve(&room, &Inventory::new(), &items()), "A hallway.");
    }

    #[test]
    fn item_not_taken_shows_default() {
        assert_eq!(
            resolve(&dusty_room(), &Inventory::new(), &items()),
            "A dusty room."
        );
    }

    #[test]
    fn item_held_shows_picked_up_variant() {
        let inventory = Inventory::new().with_picked_up(&Item::new("key", "Key"));
        assert_eq!(
            resolve(&dusty_room(), &inventory, &items()),
            "An empty dusty room."
        );
    }

    #[test]
    fn item_used_still_counts_as_picked_up() {
        let inventory = Inventory::new()
            .with_picked_up(&Item::new("key", "Key"))
            .with_used("key")
            .unwrap();
        assert_eq!(
            resolve(&dusty_room(), &inventory, &items()),
            "An empty dusty room."
        );
    }

    #[test]
    fn unknown_room_item_counts_as_not_taken() {
        let room = Room::new("R", "A dusty room.").with_item("ghost", "Gone.");
        let inventory = Inventory::new().with_picked_up(&Item::new("ghost", "Ghost"));
        assert_eq!(resolve(&room, &inventory, &items()), "A dusty room.");
    }

    #[test]
    fn picked_up_without_variant_falls_back() {
        let mut room = dusty_room();
        room.surroundings_when_item_picked_up = None;
        let inventory = Inventory::new().with_picked_up(&Item::new("key", "Key"));
        assert_eq!(resolve(&room, &inventory, &items()), "A dusty room.");
    }

    #[test]
    fn used_variant_after_relevant_item_used() {
        let inventory = Inventory::new()
            .with_picked_up(&Item::new("key", "Key"))
            .with_used("key")
            .unwrap();
        assert_eq!(
            resolve(&door_room(), &inventory, &items()),
            "The door stands open."
        );
    }

    #[test]
    fn used_variant_ignores_unrelated_items() {
        let inventory = Inventory::new()
            .with_picked_up(&Item::new("lamp", "Lamp"))
            .with_used("lamp")
            .unwrap();
        assert_eq!(resolve(&door_room(), &inventory, &items()), "A locked door.");
    }

    #[test]
    fn used_without_variant_falls_back() {
        let mut room = door_room();
        room.surroundings_when_item_used = None;
        let inventory = Inventory::new()
            .with_picked_up(&Item::new("key", "Key"))
            .with_used("key")
            .unwrap();
        assert_eq!(resolve(&room, &inventory, &items()), "A locked door.");
    }

    proptest! {
        #[test]
        fn itemless_room_with_nothing_used_is_default(
            surroundings in ".{0,40}",
            held in prop::collection::vec("[a-e]", 0..4),
        ) {
            let room = Room::new("R", surroundings.clone())
                .with_used_surroundings("used")
                .with_direction(Direction::new("north", "HALL").requires("a"));
            let inventory = held
                .iter()
                .fold(Inventory::new(), |inv, key| inv.with_picked_up(&Item::new(key.clone(), key.clone())));

            prop_assert_eq!(resolve(&room, &inventory, &items()), surroundings.as_str());
        }
    }
}
