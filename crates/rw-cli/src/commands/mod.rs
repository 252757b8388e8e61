pub mod check;
pub mod inspect;
pub mod play;

use std::fs;
use std::path::Path;

use colored::Colorize;

use rw_engine::{
    AudioBackend, EngineConfig, Game, LoadContext, Notification, SessionState, SoundCue,
    StateName,
};

/// Where an adventure's files live.
pub struct Sources<'a> {
    pub rooms: &'a Path,
    pub items: &'a Path,
    pub config: Option<&'a Path>,
}

impl<'a> Sources<'a> {
    pub fn new(rooms: &'a Path, items: &'a Path, config: Option<&'a Path>) -> Self {
        Self {
            rooms,
            items,
            config,
        }
    }

    /// Read the engine config, or the defaults when none was given.
    pub fn config(&self) -> Result<EngineConfig, String> {
        let Some(path) = self.config else {
            return Ok(EngineConfig::default());
        };
        let content = fs::read_to_string(path)
            .map_err(|e| format!("cannot read config '{}': {e}", path.display()))?;
        EngineConfig::from_json(&content).map_err(|e| format!("'{}': {e}", path.display()))
    }

    /// Build a game and feed it both files.
    ///
    /// Read and parse failures are reported to the engine as load errors, so
    /// the returned game may be in the error state.
    pub fn load(&self, audio: Box<dyn AudioBackend>) -> Result<Game, String> {
        let mut game = Game::new(self.config()?, audio);

        let loaded = match read(self.rooms).and_then(|s| parse(rw_core::parse_rooms(&s))) {
            Ok(rooms) => game.on_rooms_loaded(rooms),
            Err(e) => game.on_load_error(LoadContext::Rooms, e),
        };
        loaded.map_err(|e| e.to_string())?;

        if game.state().name() == StateName::Error {
            return Ok(game);
        }

        let loaded = match read(self.items).and_then(|s| parse(rw_core::parse_items(&s))) {
            Ok(items) => game.on_items_loaded(items),
            Err(e) => game.on_load_error(LoadContext::Items, e),
        };
        loaded.map_err(|e| e.to_string())?;

        Ok(game)
    }
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))
}

fn parse<T>(result: rw_core::CoreResult<T>) -> Result<T, String> {
    result.map_err(|e| e.to_string())
}

/// Print a notification, colored by its cue.
pub fn print_notification(notification: &Notification) {
    if notification.message.is_empty() {
        return;
    }
    let text = match notification.sound_cue {
        Some(SoundCue::Failure) => notification.message.yellow(),
        Some(_) => notification.message.green(),
        None => notification.message.normal(),
    };
    println!("{text}\n");
}

/// Print what the player currently sees.
pub fn print_view(state: &SessionState) {
    match state.name() {
        StateName::DisplayingDirections => print_room(state),
        StateName::DisplayingInventory => print_inventory(state),
        StateName::InitialLoad => println!("  Still loading...\n"),
        StateName::Error => println!("{}\n", state.message().red()),
    }
}

fn print_room(state: &SessionState) {
    let Some(room) = state.current_room() else {
        return;
    };
    println!("{}", room.surroundings());

    let exits: Vec<String> = room
        .directions()
        .iter()
        .map(|d| {
            if d.is_unlocked {
                d.name.bold().to_string()
            } else {
                format!("{} (locked)", d.name).dimmed().to_string()
            }
        })
        .collect();
    if exits.is_empty() {
        println!("  There is no way out.\n");
    } else {
        println!("  Exits: {}\n", exits.join(", "));
    }
}

fn print_inventory(state: &SessionState) {
    println!("  {}", "Inventory".bold());
    for item in state.inventory().items_held() {
        println!("  - {} ({})", item.name, item.key);
    }
    println!();
}
