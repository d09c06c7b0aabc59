//! brandkit - generate raster brand assets from SVG sources.

mod cli;
mod config;
mod generator;
mod image;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::BrandConfig;
use generator::{GenerateError, source::SourceResolver};
use utils::{fs::normalize_path, plural::plural_count};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = BrandConfig::load(&cli)?;
    let resolver = SourceResolver::from_current_exe();

    match generator::generate(&config, &resolver) {
        Ok(generated) => {
            log!(
                "generate";
                "generated {} in {}",
                plural_count(generated.files.len(), "file"),
                normalize_path(&generated.out_dir).display()
            );
            Ok(())
        }
        // Render failures keep their own context chain
        Err(GenerateError::Render(err)) => Err(err),
        Err(err) => {
            err.report();
            std::process::exit(err.exit_code());
        }
    }
}
