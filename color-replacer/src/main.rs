use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use utils::{init_logging, read_string, write_string};

use crate::palette_table::{PaletteTable, RowSelection};
use crate::remap::{Outcome, RemapReport, Strategy, remap};

mod error;
mod palette_table;
mod remap;

fn main() -> Result<()> {
    init_logging();
    let args = Cli::parse();

    // Checked before any file is touched
    let rows = RowSelection::from_one_based(args.prev_row, args.future_row)?;

    let table = PaletteTable::from_file(&args.tsv_file).context("Failed to read palette table")?;
    let prev = table.row(rows.prev)?;
    let future = table.row(rows.future)?;
    info!(
        "Replacing {} color(s) of row {} with row {} ({} rows in {})",
        prev.len().min(future.len()),
        args.prev_row,
        args.future_row,
        table.len(),
        args.tsv_file.display()
    );

    let document = read_string(&args.json_file).context("Failed to read document")?;
    let (document, report) = remap(args.strategy, &document, prev, future)
        .with_context(|| format!("Failed to replace colors in \"{}\"", args.json_file.display()))?;

    print_report(&report, &args.json_file);
    let missing = report.not_found().len();
    if missing > 0 {
        warn!("{} color(s) of row {} were not found", missing, args.prev_row);
    }

    write_string(&args.json_file, &document).context("Failed to write document")?;
    Ok(())
}

fn print_report(report: &RemapReport, json_file: &PathBuf) {
    for outcome in &report.outcomes {
        match outcome {
            Outcome::Replaced { old, new, count } => {
                debug!("{} -> {} ({} occurrence(s))", old, new, count)
            }
            Outcome::NotFound { old } => println!("{} not replaced in {}", old, json_file.display()),
            Outcome::Unchanged { old } => println!("{} equal to {}, no replacement needed", old, old),
            Outcome::Shadowed { old, new } => {
                println!("{} already replaced earlier in the row, ignoring {}", old, new)
            }
        }
    }

    println!("New color(s) to use: {:?}", report.unused);
}

#[derive(Parser, Debug)]
struct Cli {
    /// Tab separated file with one color scheme per line
    #[clap(long, default_value = "src/color_schemes.tsv")]
    tsv_file: PathBuf,

    /// JSON file with strings to replace
    #[clap(long, default_value = "src/clades.json")]
    json_file: PathBuf,

    /// Line number (1-based) of the colors currently used in the JSON file
    #[clap(long)]
    prev_row: usize,

    /// Line number (1-based) of the colors to use instead, after prev_row
    #[clap(long)]
    future_row: usize,

    /// How replacements are applied to the JSON file. The default `structured`
    /// only accepts valid JSON and rewrites it pretty-printed; use `sequential`
    /// for plain text replacement
    #[clap(long, value_enum, default_value_t = Strategy::Structured)]
    strategy: Strategy,
}
