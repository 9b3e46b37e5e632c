//! make_sample - write a grayscale gradient test image

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use stego_witness::ingest::synthetic;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output PNG path.
    #[arg(long, default_value = "sample.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 256)]
    width: u32,
    #[arg(long, default_value_t = 256)]
    height: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(stego_witness::DEFAULT_LOG_FILTER),
    )
    .init();

    let args = Args::parse();
    let frame = synthetic::gradient(args.width, args.height);
    let (width, height) = (frame.width, frame.height);
    let image = image::GrayImage::from_raw(width, height, frame.into_samples())
        .context("gradient buffer does not match its dimensions")?;
    image
        .save(&args.output)
        .with_context(|| format!("write {}", args.output.display()))?;
    log::info!("{}x{} gradient written to {}", width, height, args.output.display());
    println!("sample image created at {}", args.output.display());
    Ok(())
}
