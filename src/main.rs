use anyhow::Result;
use clap::{Parser, Subcommand};

use divvy::cli::{handle_category_command, CategoryCommands};
use divvy::config::{DivvyPaths, Settings};
use divvy::storage;

#[derive(Parser)]
#[command(
    name = "divvy",
    version,
    about = "Terminal-based budget-splitting calculator",
    long_about = "divvy splits a periodic income across user-defined percentage \
                  categories, with totals recomputed live. Run without arguments \
                  to launch the interactive interface."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DivvyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let mut store = storage::open_store(&paths);

    match cli.command {
        Some(Commands::Tui) | None => {
            divvy::tui::run_tui(store, settings)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut store, cmd)?;
        }
        Some(Commands::Config) => {
            println!("divvy configuration");
            println!("===================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Categories file:  {}", paths.categories_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
    }

    Ok(())
}
