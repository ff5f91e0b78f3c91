//! Barcode board - Entry Point

use barboard::symbology::MAX_BAR_HEIGHT;
use barboard::view::{BoardOptions, ColorConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Barcode board - generate and browse Code 128 barcodes in the terminal
#[derive(Parser, Debug)]
#[command(name = "barboard")]
#[command(version)]
#[command(about = "TUI application for generating, paginating and inspecting barcodes")]
pub struct Args {
    /// File to pre-fill the barcode data with, one value per line ("-" reads piped stdin)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bar height of grid cards, in terminal rows
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=i64::from(MAX_BAR_HEIGHT)))]
    pub grid_height: Option<u16>,

    /// Bar height of the details modal, in terminal rows
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=i64::from(MAX_BAR_HEIGHT)))]
    pub modal_height: Option<u16>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = barboard::config::load_config_with_precedence(args.config.clone())?;
        let merged = barboard::config::merge_config(config_file);
        let with_env = barboard::config::apply_env_overrides(merged);
        barboard::config::apply_cli_overrides(with_env, args.grid_height, args.modal_height)
    };

    barboard::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let colors = ColorConfig::from_env_and_args(args.no_color);
    let options = BoardOptions::from_config(&config, colors);

    barboard::view::run_with_file(args.file.clone(), options)?;

    Ok(())
}
