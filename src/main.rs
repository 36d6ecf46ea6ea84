//! fsbconv - FSB sound-bank batch converter
//!
//! Walks a source tree for FSB sound banks, runs vgmstream-cli on each
//! one, and writes the converted Ogg Vorbis files into a mirrored
//! directory structure under the output root.

mod conversion;
mod core;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::conversion::{OutputLayout, VgmstreamCli, locate_converter, run_batch};
use crate::core::{BatchSettings, format_size};

/// Convert a tree of FSB sound banks to Ogg Vorbis via vgmstream-cli.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Directory to scan for .fsb files
    source_root: PathBuf,

    /// Directory that receives the mirrored .ogg tree
    output_root: PathBuf,

    /// Path to the vgmstream-cli executable (default: search PATH)
    #[arg(long)]
    converter: Option<PathBuf>,

    /// Keep existing files in the output root instead of wiping it
    #[arg(long)]
    keep_output: bool,

    /// Show debug detail in the terminal as well as the log file
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let settings = BatchSettings::load();

    // CLI flags win over persisted settings.
    let clean_output = !cli.keep_output && settings.clean_output;
    let converter_override = cli.converter.or(settings.converter);

    if !cli.source_root.is_dir() {
        return Err(format!(
            "Source root is not a directory: {}",
            cli.source_root.display()
        ));
    }

    let converter_path = locate_converter(converter_override.as_deref())?;
    log::info!("Using converter: {}", converter_path.display());

    let converter = VgmstreamCli::new(converter_path);
    let layout = OutputLayout::new(cli.source_root, cli.output_root);

    let summary = run_batch(&layout, &converter, clean_output)?;

    log::info!(
        "Batch finished: {} converted, {} failed, {} written",
        summary.converted,
        summary.failed,
        format_size(summary.output_bytes)
    );

    Ok(())
}
