use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use gastos::cli::{
    handle_add, handle_clear, handle_config, handle_export_command, handle_import, handle_list,
    handle_remove, handle_show, handle_snapshot_command, handle_summary, AddArgs, ConfigArgs,
    ExportCommands, RangeArgs, SnapshotCommands,
};
use gastos::config::{GastosPaths, Settings};
use gastos::logging;
use gastos::services::Ledger;
use gastos::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "gastos",
    version,
    about = "Personal expense tracker",
    long_about = "gastos records everyday expenses by category, shows totals for \
                  any date range and keeps month snapshots you can reload later."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an expense
    Add(AddArgs),

    /// Remove an expense by id (or id prefix)
    #[command(alias = "rm")]
    Remove {
        /// Expense id as shown by `list`
        id: String,
    },

    /// Show one expense in full
    Show {
        /// Expense id as shown by `list`
        id: String,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Show totals for a date range
    Summary {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Delete every expense (snapshots are kept)
    Clear {
        /// Confirm deleting the live list
        #[arg(long)]
        yes: bool,
    },

    /// Month snapshot commands
    #[command(subcommand)]
    Snapshot(SnapshotCommands),

    /// Export commands
    #[command(subcommand)]
    Export(ExportCommands),

    /// Replace the expense list with a JSON export
    Import {
        /// Path to a file written by `export json`
        file: PathBuf,
        /// Confirm replacing the live list
        #[arg(long)]
        yes: bool,
    },

    /// Show configuration and paths; options update and save settings
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = GastosPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    logging::init(&settings.log_filter);

    // Open the ledger on the file backend
    paths.ensure_directories()?;
    let mut ledger = Ledger::open(Rc::new(FileStore::from_paths(&paths)))?;
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&mut ledger, &settings, args, today)?,
        Some(Commands::Remove { id }) => handle_remove(&mut ledger, &settings, &id)?,
        Some(Commands::Show { id }) => handle_show(&ledger, &settings, &id)?,
        Some(Commands::List { range }) => handle_list(&ledger, &settings, &range, today)?,
        Some(Commands::Summary { range }) => handle_summary(&ledger, &settings, &range, today)?,
        Some(Commands::Clear { yes }) => handle_clear(&mut ledger, yes)?,
        Some(Commands::Snapshot(cmd)) => handle_snapshot_command(&mut ledger, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&ledger, &paths, cmd, today)?,
        Some(Commands::Import { file, yes }) => handle_import(&mut ledger, &file, yes)?,
        Some(Commands::Config(args)) => handle_config(&paths, &mut settings, args)?,
        None => {
            println!("gastos - personal expense tracker");
            println!();
            println!("Run 'gastos --help' for usage information.");
        }
    }

    Ok(())
}
