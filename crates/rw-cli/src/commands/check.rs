use colored::Colorize;

use rw_engine::{SilentAudio, StateName};

use super::Sources;

pub fn run(sources: &Sources<'_>) -> Result<(), String> {
    let game = sources.load(Box::new(SilentAudio))?;
    let state = game.state();

    if state.name() == StateName::Error {
        return Err(state.message().to_string());
    }

    let data = state.data();
    let rooms = data.rooms.as_ref().map_or(0, |r| r.len());
    let items = data.items.as_ref().map_or(0, |i| i.len());

    let warnings = dangling_references(state);
    for warning in &warnings {
        eprintln!("  {} {warning}", "warning:".yellow());
    }

    match warnings.len() {
        0 => println!("  All checks passed."),
        1 => println!("  Checks passed with 1 warning."),
        n => println!("  Checks passed with {n} warnings."),
    }
    println!("  {rooms} rooms, {items} items");
    println!("  state: {}", state.name());

    Ok(())
}

/// Exits and items that point at nothing. They do not stop play until the
/// player reaches them.
fn dangling_references(state: &rw_engine::SessionState) -> Vec<String> {
    let data = state.data();
    let (Some(rooms), Some(items)) = (&data.rooms, &data.items) else {
        return Vec::new();
    };

    let mut warnings = Vec::new();
    for room in rooms.iter() {
        if let Some(item) = room.item.as_deref().filter(|k| !items.contains_key(k)) {
            warnings.push(format!("room '{}' holds unknown item '{item}'", room.key));
        }
        for direction in &room.available_directions {
            if !rooms.contains_key(&direction.target_room_key) {
                warnings.push(format!(
                    "exit '{}' of room '{}' leads to unknown room '{}'",
                    direction.name, room.key, direction.target_room_key
                ));
            }
            for key in direction
                .items_that_can_be_used
                .iter()
                .filter(|k| !items.contains_key(k))
            {
                warnings.push(format!(
                    "exit '{}' of room '{}' reacts to unknown item '{key}'",
                    direction.name, room.key
                ));
            }
        }
    }
    warnings
}
