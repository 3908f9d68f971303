//! Snapshot CLI commands
//!
//! Save the live list under a month name, list saved months and load one
//! back in place of the live list.

use clap::Subcommand;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{confirm_replace, plural, report_persistence};
use crate::config::Settings;
use crate::error::GastosResult;
use crate::reports::total;
use crate::services::Ledger;

/// Snapshot subcommands
#[derive(Subcommand, Debug)]
pub enum SnapshotCommands {
    /// Save the live list under a name (overwrites an existing one)
    Save {
        /// Snapshot name, e.g. "Enero 2026"
        name: String,
    },
    /// Replace the live list with a saved snapshot
    Load {
        /// Snapshot name
        name: String,
        /// Confirm replacing the live list
        #[arg(long)]
        yes: bool,
    },
    /// List saved snapshots
    List,
}

#[derive(Tabled)]
struct SnapshotRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Expenses")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
}

/// Handle a snapshot command
pub fn handle_snapshot_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: SnapshotCommands,
) -> GastosResult<()> {
    match cmd {
        SnapshotCommands::Save { name } => {
            let count = ledger.expenses().len();
            let replaced = report_persistence(ledger.save_snapshot(&name)?);
            println!(
                "{} snapshot \"{}\" with {} expense{}.",
                if replaced { "Replaced" } else { "Saved" },
                name,
                count,
                plural(count)
            );
        }

        SnapshotCommands::Load { name, yes } => {
            let pending = ledger.prepare_load(&name)?;
            if !confirm_replace(&pending, yes) {
                return Ok(());
            }
            let count = report_persistence(ledger.apply(pending));
            println!("Loaded snapshot \"{}\" ({} expense{}).", name, count, plural(count));
        }

        SnapshotCommands::List => {
            let snapshots = ledger.snapshots();
            if snapshots.is_empty() {
                println!("No snapshots saved.");
                return Ok(());
            }

            let mut rows = Vec::with_capacity(snapshots.len());
            for name in snapshots.list_names() {
                let records = snapshots.load(name)?;
                rows.push(SnapshotRow {
                    name: name.to_string(),
                    count: records.len(),
                    total: total(&records).format_with_symbol(&settings.currency_symbol),
                });
            }

            let mut table = Table::new(rows);
            table.with(Style::psql());
            println!("{}", table);
        }
    }

    Ok(())
}
