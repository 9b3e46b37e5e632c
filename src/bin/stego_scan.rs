//! stego_scan - analyze images for LSB steganography
//!
//! Each image is decoded to 8-bit luma, scored by the detector and, unless
//! disabled, appended to the local analysis history.

use anyhow::{anyhow, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use stego_witness::{ScanConfig, Scanner, SqliteHistoryStore};

#[path = "../ui.rs"]
mod ui;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Image files to analyze.
    #[arg(required = true, value_name = "IMAGE")]
    images: Vec<PathBuf>,
    /// Emit one JSON object per image (includes the histogram).
    #[arg(long)]
    json: bool,
    /// Do not append results to the history database.
    #[arg(long)]
    no_history: bool,
    /// Override the history database path.
    #[arg(long, env = "STEGO_DB_PATH")]
    db_path: Option<String>,
    /// UI mode for stderr progress.
    #[arg(long, value_enum, default_value_t = ui::UiMode::Auto, value_name = "MODE")]
    ui: ui::UiMode,
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
        args.json || !std::io::stdout().is_terminal(),
    );

    let mut cfg = ScanConfig::load()?;
    if let Some(db_path) = args.db_path {
        cfg.db_path = db_path;
    }

    let mut scanner = Scanner::default();
    log::info!("using detector {}", scanner.detector_name());
    if cfg.history.record && !args.no_history {
        let store = {
            let _stage = ui.stage("Open history");
            SqliteHistoryStore::open(&cfg.db_path)?
        };
        scanner = scanner.with_history(Box::new(store));
        log::info!("recording history to {}", cfg.db_path);
    }

    let progress = ui.batch(args.images.len() as u64);
    let mut failures = 0usize;
    for path in &args.images {
        progress.set_message(path.display().to_string());
        match scanner.scan_path(path) {
            Ok(report) => {
                let line = if args.json {
                    serde_json::to_string(&report)?
                } else {
                    format!(
                        "{}  detector={}  chi_square={:.3}  entropy={:.3}  suspicion={}",
                        report.filename,
                        report.detector,
                        report.result.chi_square_score(),
                        report.result.entropy(),
                        report.result.suspicion_level()
                    )
                };
                progress.suspend(|| println!("{line}"));
            }
            Err(e) => {
                failures += 1;
                progress.suspend(|| eprintln!("{}: {:#}", path.display(), e));
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    if failures > 0 {
        return Err(anyhow!(
            "{} of {} images could not be analyzed",
            failures,
            args.images.len()
        ));
    }
    Ok(())
}
