use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use rw_engine::{EngineResult, Game, Notification, StateName};

use super::{Sources, print_notification, print_view};
use crate::audio::LoggingAudio;
use crate::save::SaveFile;

const HELP: &str = "\
  go <direction>   take an exit
  examine          look closely at the room (picks up items)
  inventory        show what you carry
  close            put the inventory away
  use <item>       use a carried item, by key or name
  sound            turn sound on or off
  look             describe the room again
  save             write the game to the save file
  load             restore the game from the save file
  help             show this help
  quit             leave the game";

/// A line of player input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Go(&'a str),
    Examine,
    Inventory,
    Close,
    Use(&'a str),
    Sound,
    Look,
    Save,
    Load,
    Help,
    Quit,
}

fn parse_input(line: &str) -> Result<Input<'_>, String> {
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let argument = |what: &str| {
        if rest.is_empty() {
            Err(format!("{verb} what? ({what} required)"))
        } else {
            Ok(rest)
        }
    };

    match verb.to_ascii_lowercase().as_str() {
        "go" | "g" => argument("direction").map(Input::Go),
        "examine" | "x" => Ok(Input::Examine),
        "inventory" | "i" => Ok(Input::Inventory),
        "close" | "c" => Ok(Input::Close),
        "use" | "u" => argument("item").map(Input::Use),
        "sound" => Ok(Input::Sound),
        "look" | "l" => Ok(Input::Look),
        "save" => Ok(Input::Save),
        "load" => Ok(Input::Load),
        "help" | "h" | "?" => Ok(Input::Help),
        "quit" | "q" | "exit" => Ok(Input::Quit),
        _ => Err(format!("unknown command '{verb}'. Type 'help' for commands.")),
    }
}

/// Map what the player typed to a held item key, matching names loosely.
fn item_key(game: &Game, typed: &str) -> String {
    game.state()
        .inventory()
        .items_held()
        .iter()
        .find(|item| item.key == typed || item.name.eq_ignore_ascii_case(typed))
        .map_or_else(|| typed.to_string(), |item| item.key.clone())
}

pub fn run(sources: &Sources<'_>, sound: bool, save: Option<&Path>) -> Result<(), String> {
    let mut game = sources.load(Box::new(LoggingAudio))?;
    if game.state().name() == StateName::Error {
        return Err(game.state().message().to_string());
    }
    if sound {
        game.toggle_sound().map_err(|e| e.to_string())?;
    }

    println!("  {} Roomwright", "Starting".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    print_view(game.state());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let input = match parse_input(input) {
            Ok(input) => input,
            Err(e) => {
                println!("{}\n", e.yellow());
                continue;
            }
        };

        match input {
            Input::Quit => break,
            Input::Help => println!("{HELP}\n"),
            Input::Look => print_view(game.state()),
            Input::Save => match save_game(&game, save) {
                Ok(path) => println!("  Saved to {path}.\n"),
                Err(e) => println!("{}\n", e.yellow()),
            },
            Input::Load => match load_game(&mut game, save) {
                Ok(()) => print_view(game.state()),
                Err(e) => println!("{}\n", e.yellow()),
            },
            command => report(&game_command(&mut game, command), &game),
        }
    }

    Ok(())
}

fn game_command(game: &mut Game, input: Input<'_>) -> EngineResult<Notification> {
    match input {
        Input::Go(direction) => game.select_direction(direction),
        Input::Examine => game.examine_room(),
        Input::Inventory => game.open_inventory(),
        Input::Close => game.close_inventory(),
        Input::Use(typed) => {
            let key = item_key(game, typed);
            game.use_item(&key)
        }
        Input::Sound => {
            game.toggle_sound()?;
            let state = if game.state().sound_enabled() { "on" } else { "off" };
            Ok(Notification::silent(format!("Sound is {state}.")))
        }
        Input::Look | Input::Save | Input::Load | Input::Help | Input::Quit => {
            Ok(Notification::silent(""))
        }
    }
}

fn report(result: &EngineResult<Notification>, game: &Game) {
    match result {
        Ok(notification) => {
            print_notification(notification);
            print_view(game.state());
        }
        Err(e) => println!("{}\n", e.to_string().yellow()),
    }
}

fn save_game(game: &Game, path: Option<&Path>) -> Result<String, String> {
    let path = path.ok_or("no save file given (start with --save <file>)")?;
    SaveFile::new(game.export_snapshot()).write(path)?;
    Ok(path.display().to_string())
}

fn load_game(game: &mut Game, path: Option<&Path>) -> Result<(), String> {
    let path = path.ok_or("no save file given (start with --save <file>)")?;
    let save = SaveFile::read(path)?;
    game.import_snapshot(save.snapshot)
        .map_err(|e| e.to_string())
        .map(|_| ())
}
