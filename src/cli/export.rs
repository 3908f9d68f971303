//! CLI commands for data export
//!
//! Provides commands for exporting the expense list and range summaries.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Subcommand;

use super::{plural, RangeArgs};
use crate::config::GastosPaths;
use crate::error::GastosResult;
use crate::services::Ledger;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export every expense to CSV
    Csv {
        /// Output directory (default: the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export every expense to JSON (importable)
    Json {
        /// Output directory (default: the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a range summary as a workbook, one CSV file per sheet
    Summary {
        #[command(flatten)]
        range: RangeArgs,

        /// Output directory (default: the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(
    ledger: &Ledger,
    paths: &GastosPaths,
    cmd: ExportCommands,
    today: NaiveDate,
) -> GastosResult<()> {
    let count = ledger.expenses().len();

    match cmd {
        ExportCommands::Csv { output } => {
            let file = ledger.export_csv()?;
            let path = file.write_to_dir(&output_dir(paths, output.as_deref()))?;
            println!(
                "Exported {} expense{} to: {}",
                count,
                plural(count),
                path.display()
            );
        }

        ExportCommands::Json { output } => {
            let file = ledger.export_json()?;
            let path = file.write_to_dir(&output_dir(paths, output.as_deref()))?;
            println!(
                "Exported {} expense{} to: {}",
                count,
                plural(count),
                path.display()
            );
        }

        ExportCommands::Summary { range, output } => {
            let export = ledger.export_summary(range.resolve(today));
            let written = export
                .workbook
                .write_csv_sheets(&output_dir(paths, output.as_deref()), export.stem())?;

            println!("Summary {} exported:", export.filename);
            for path in written {
                println!("  {}", path.display());
            }
        }
    }

    Ok(())
}

fn output_dir(paths: &GastosPaths, output: Option<&Path>) -> PathBuf {
    output.map_or_else(|| paths.exports_dir(), Path::to_path_buf)
}
