//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

use crate::image::backend::SvgConverter;

/// Generate brand icon assets from SVG sources
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the contracted (avatar) SVG.
    /// Defaults to logo_thumbnail.svg next to the executable or brand-assets/logo_thumbnail.svg
    #[arg(long, value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub avatar_svg: Option<PathBuf>,

    /// Path to the extended light SVG.
    /// Defaults to logo.svg next to the executable or brand-assets/logo.svg
    #[arg(long, value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub extended_light: Option<PathBuf>,

    /// Path to the extended dark SVG.
    /// Defaults to logo_dark.svg next to the executable or brand-assets/logo_dark.svg
    #[arg(long, value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub extended_dark: Option<PathBuf>,

    /// Output directory for generated files (default: current directory)
    #[arg(long, value_name = "PATH", value_hint = clap::ValueHint::DirPath)]
    pub out_dir: Option<PathBuf>,

    /// Do not write favicon.svg (copy of avatar SVG)
    #[arg(long)]
    pub skip_favicon_svg: bool,

    /// Rasterization backend
    #[arg(long, value_enum)]
    pub converter: Option<SvgConverter>,

    /// Config file path (default: brand.toml, if present)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}
