use std::path::Path;

use colored::Colorize;

use crate::save::SaveFile;

pub fn run(file: &Path) -> Result<(), String> {
    let save = SaveFile::read(file)?;
    let snapshot = &save.snapshot;
    let data = &snapshot.data;

    println!("  {}", "Save file".bold());
    println!("  saved at: {}", save.saved_at.to_rfc3339());
    println!("  state: {}", snapshot.name);

    if let Some(room) = &data.current_room {
        println!("  room: {}", room.key());
    }
    if !data.last_selected_direction.is_empty() {
        println!("  last direction: {}", data.last_selected_direction);
    }

    let held: Vec<&str> = data
        .inventory
        .items_held()
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    let used: Vec<&str> = data.inventory.items_used().iter().map(String::as_str).collect();
    println!("  holding: {}", list_or_none(&held));
    println!("  used: {}", list_or_none(&used));
    println!("  sound: {}", if data.sound_enabled { "on" } else { "off" });

    if !data.message.is_empty() {
        println!("  message: {}", data.message);
    }

    Ok(())
}

fn list_or_none(entries: &[&str]) -> String {
    if entries.is_empty() {
        "nothing".to_string()
    } else {
        entries.join(", ")
    }
}
