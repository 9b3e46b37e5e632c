//! stego_history - inspect, export or clear the analysis history

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use stego_witness::{recent, render_table, HistoryExport, HistoryStore, ScanConfig, SqliteHistoryStore};

#[path = "../ui.rs"]
mod ui;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Override the history database path.
    #[arg(long, env = "STEGO_DB_PATH")]
    db_path: Option<String>,
    /// UI mode for stderr progress.
    #[arg(long, value_enum, default_value_t = ui::UiMode::Auto, value_name = "MODE")]
    ui: ui::UiMode,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the most recent analyses as a table.
    List {
        /// Number of rows (defaults to the configured list limit).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Write the full history as a JSON bundle.
    Export {
        #[arg(long, default_value = "stego_history.json")]
        output: PathBuf,
    },
    /// Delete every history record.
    Clear,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(stego_witness::DEFAULT_LOG_FILTER),
    )
    .init();

    let args = Args::parse();
    let ui = ui::Ui::new(
        args.ui,
        std::io::stderr().is_terminal(),
        !std::io::stdout().is_terminal(),
    );

    let mut cfg = ScanConfig::load()?;
    if let Some(db_path) = args.db_path {
        cfg.db_path = db_path;
    }

    let mut store = {
        let _stage = ui.stage("Open history");
        SqliteHistoryStore::open(&cfg.db_path)?
    };

    match args.command {
        Command::List { limit } => {
            let limit = limit.unwrap_or(cfg.history.list_limit);
            let records = recent(&mut store, limit)?;
            if records.is_empty() {
                println!("no analyses recorded in {}", cfg.db_path);
            } else {
                print!("{}", render_table(&records));
            }
        }
        Command::Export { output } => {
            let export = {
                let _stage = ui.stage("Collect history");
                HistoryExport::from_store(&mut store)?
            };
            {
                let _stage = ui.stage("Write export bundle");
                export.write_json(&output)?;
            }
            println!(
                "{} records written to {}",
                export.record_count,
                output.display()
            );
        }
        Command::Clear => {
            let removed = store.clear()?;
            log::info!("cleared {} history records from {}", removed, cfg.db_path);
            println!("{removed} records removed");
        }
    }
    Ok(())
}
