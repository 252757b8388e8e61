use serde::{Deserialize, Serialize};

/// An exit from a room towards another room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Direction {
    /// Identifier the player selects, e.g. "north".
    #[serde(alias = "direction")]
    pub name: String,
    /// Key of the room this direction leads to.
    #[serde(alias = "roomKey")]
    pub target_room_key: String,
    /// Item keys that must all have been used before this exit opens.
    #[serde(default)]
    pub items_that_can_be_used: Vec<String>,
    /// Derived unlock status. Never authored; recomputed by the engine.
    #[serde(default)]
    pub is_unlocked: bool,
}

impl Direction {
    /// Create a direction with no requirements.
    pub fn new(name: impl Into<String>, target_room_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_room_key: target_room_key.into(),
            items_that_can_be_used: Vec::new(),
            is_unlocked: false,
        }
    }

    /// Require an item to have been used before this direction opens.
    pub fn requires(mut self, item_key: impl Into<String>) -> Self {
        self.items_that_can_be_used.push(item_key.into());
        self
    }

    /// Whether `item_key` is one of the items this direction reacts to.
    pub fn accepts(&self, item_key: &str) -> bool {
        self.items_that_can_be_used.iter().any(|k| k == item_key)
    }
}

/// A room in the world graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Identity of the room. Filled from the catalog key when omitted.
    #[serde(default)]
    pub key: String,
    /// Key of the item lying in this room, if any.
    #[serde(default)]
    pub item: Option<String>,
    /// Default description.
    pub surroundings: String,
    /// Description once this room's item has been picked up.
    #[serde(default)]
    pub surroundings_when_item_picked_up: Option<String>,
    /// Description once an item has been used on one of this room's exits.
    #[serde(default)]
    pub surroundings_when_item_used: Option<String>,
    /// Text shown when examining the room yields nothing.
    #[serde(default)]
    pub description_when_examined: String,
    /// Exits, in authored order.
    #[serde(default)]
    pub available_directions: Vec<Direction>,
}

impl Room {
    /// Create a room with the given key and default surroundings.
    pub fn new(key: impl Into<String>, surroundings: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            item: None,
            surroundings: surroundings.into(),
            surroundings_when_item_picked_up: None,
            surroundings_when_item_used: None,
            description_when_examined: String::new(),
            available_directions: Vec::new(),
        }
    }

    /// Place an item in the room with the text shown once it is taken.
    pub fn with_item(mut self, item_key: impl Into<String>, picked_up: impl Into<String>) -> Self {
        self.item = Some(item_key.into());
        self.surroundings_when_item_picked_up = Some(picked_up.into());
        self
    }

    /// Set the text shown once an item has been used here.
    pub fn with_used_surroundings(mut self, text: impl Into<String>) -> Self {
        self.surroundings_when_item_used = Some(text.into());
        self
    }

    /// Set the text shown when examining finds nothing.
    pub fn with_examine_text(mut self, text: impl Into<String>) -> Self {
        self.description_when_examined = text.into();
        self
    }

    /// Append an exit.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.available_directions.push(direction);
        self
    }

    /// Find an exit by its identifier.
    pub fn direction(&self, name: &str) -> Option<&Direction> {
        self.available_directions.iter().find(|d| d.name == name)
    }

    /// Every item key referenced by any exit of this room, in authored order.
    pub fn usable_item_keys(&self) -> impl Iterator<Item = &str> {
        self.available_directions
            .iter()
            .flat_map(|d| d.items_that_can_be_used.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_defaults_when_fields_missing() {
        let json = r#"{ "name": "north", "targetRoomKey": "HALL" }"#;
        let dir: Direction = serde_json::from_str(json).unwrap();
        assert!(dir.items_that_can_be_used.is_empty());
        assert!(!dir.is_unlocked);
    }

    #[test]
    fn direction_accepts_legacy_field_names() {
        let json = r#"{ "direction": "west", "roomKey": "CELLAR", "itemsThatCanBeUsed": ["key"] }"#;
        let dir: Direction = serde_json::from_str(json).unwrap();
        assert_eq!(dir.name, "west");
        assert_eq!(dir.target_room_key, "CELLAR");
        assert!(dir.accepts("key"));
        assert!(!dir.accepts("lamp"));
    }

    #[test]
    fn room_deserializes_optional_variants() {
        let json = r#"{
            "surroundings": "A dusty room.",
            "item": "key",
            "surroundingsWhenItemPickedUp": "An empty dusty room.",
            "descriptionWhenExamined": "Nothing else here.",
            "availableDirections": [
                { "name": "north", "targetRoomKey": "HALL", "itemsThatCanBeUsed": [] }
            ]
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.item.as_deref(), Some("key"));
        assert!(room.surroundings_when_item_used.is_none());
        assert_eq!(room.available_directions.len(), 1);
    }

    #[test]
    fn direction_lookup_by_name() {
        let room = Room::new("START", "A hallway.")
            .with_direction(Direction::new("north", "HALL"))
            .with_direction(Direction::new("south", "YARD").requires("key"));

        assert_eq!(room.direction("south").unwrap().target_room_key, "YARD");
        assert!(room.direction("up").is_none());
    }

    #[test]
    fn usable_item_keys_flattens_all_exits() {
        let room = Room::new("START", "A hallway.")
            .with_direction(Direction::new("north", "HALL").requires("key"))
            .with_direction(Direction::new("south", "YARD").requires("lamp").requires("rope"));

        let keys: Vec<&str> = room.usable_item_keys().collect();
        assert_eq!(keys, vec!["key", "lamp", "rope"]);
    }
}
