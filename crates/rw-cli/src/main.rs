//! CLI frontend for the Roomwright room-exploration engine.

mod audio;
mod commands;
mod save;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "rw",
    about = "Roomwright: explore rooms, pick up items, unlock doors",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an adventure interactively
    Play {
        /// JSON file with the rooms
        #[arg(short, long)]
        rooms: PathBuf,

        /// JSON file with the items
        #[arg(short, long)]
        items: PathBuf,

        /// JSON file with engine settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Start with sound on
        #[arg(long)]
        sound: bool,

        /// File used by the `save` and `load` commands
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Load an adventure and report whether it is playable
    Check {
        /// JSON file with the rooms
        #[arg(short, long)]
        rooms: PathBuf,

        /// JSON file with the items
        #[arg(short, long)]
        items: PathBuf,

        /// JSON file with engine settings
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Summarize a save file
    Inspect {
        /// Save file written by `play`
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rw=info,rw_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            rooms,
            items,
            config,
            sound,
            save,
        } => {
            let sources = commands::Sources::new(&rooms, &items, config.as_deref());
            commands::play::run(&sources, sound, save.as_deref())
        }
        Commands::Check {
            rooms,
            items,
            config,
        } => commands::check::run(&commands::Sources::new(&rooms, &items, config.as_deref())),
        Commands::Inspect { file } => commands::inspect::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
