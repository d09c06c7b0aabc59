//! Brand asset generation.
//!
//! One run, strictly in order:
//!
//! ```text
//! resolve sources ─► avatar exists? ─► warn on missing extended SVGs
//!        ─► probe backend ─► PNG table ─► favicon.ico ─► favicon.svg
//! ```
//!
//! Validation failures stop the run before anything is written. A render
//! failure stops it where it happened; files already written stay on disk.

pub mod source;
pub mod table;

use std::path::PathBuf;

use thiserror::Error;

use crate::{
    config::BrandConfig,
    debug,
    image::{
        backend::{Capability, probe},
        ico::render_ico,
        raster::render_png,
        svg::{FAVICON_SVG_SIZE, write_favicon_svg},
    },
    log,
    logger::ProgressLine,
};
use source::{SourceResolver, Sources};
use table::{png_count, png_targets};

pub const FAVICON_ICO_NAME: &str = "favicon.ico";
pub const FAVICON_SVG_NAME: &str = "favicon.svg";

/// Reasons a run stops.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("missing avatar SVG: {}", .0.display())]
    MissingAvatar(PathBuf),

    #[error("missing dependency: {name}")]
    MissingDependency {
        name: &'static str,
        hint: &'static str,
    },

    #[error(transparent)]
    Render(#[from] anyhow::Error),
}

impl GenerateError {
    /// Every stopped run exits 1, including render failures returned from `main`.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingAvatar(_) | Self::MissingDependency { .. } | Self::Render(_) => 1,
        }
    }

    /// Print the diagnostic block for validation failures, all on stderr.
    pub fn report(&self) {
        match self {
            Self::MissingAvatar(path) => {
                log!("error"; "missing avatar SVG:");
                eprintln!(" - {}", path.display());
            }
            Self::MissingDependency { name, hint } => {
                log!("error"; "missing dependency: {name}");
                eprintln!("{hint}");
            }
            Self::Render(err) => log!("error"; "{err:#}"),
        }
    }
}

/// Files written by one run, in write order.
#[derive(Debug, Clone, Default)]
pub struct Generated {
    pub out_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

impl Generated {
    fn push(&mut self, path: PathBuf) {
        debug!("generate"; "wrote {}", path.display());
        self.files.push(path);
    }
}

/// Run the whole pipeline for `config`.
pub fn generate(config: &BrandConfig, resolver: &SourceResolver) -> Result<Generated, GenerateError> {
    let sources = resolver.resolve_sources(&config.sources);
    debug!("generate"; "avatar: {}", sources.avatar.display());

    if !sources.avatar.exists() {
        return Err(GenerateError::MissingAvatar(sources.avatar));
    }

    warn_missing_extended(&sources);

    let converter = config.render.converter;
    if let Capability::Missing { name, hint } = probe(converter) {
        return Err(GenerateError::MissingDependency { name, hint });
    }
    debug!("generate"; "rendering with {converter}");

    let out_dir = config.output.dir.as_path();
    let avatar = sources.avatar.as_path();
    let mut generated = Generated {
        out_dir: out_dir.to_path_buf(),
        files: Vec::new(),
    };

    let progress = ProgressLine::new(&[
        ("png", png_count()),
        ("ico", 1),
        ("svg", usize::from(config.output.favicon_svg)),
    ]);

    for (file_name, size) in png_targets() {
        let dest = out_dir.join(file_name);
        render_png(avatar, &dest, size, converter)?;
        generated.push(dest);
        progress.inc("png");
    }

    let ico = out_dir.join(FAVICON_ICO_NAME);
    render_ico(avatar, &ico, converter)?;
    generated.push(ico);
    progress.inc("ico");

    if config.output.favicon_svg {
        let svg = out_dir.join(FAVICON_SVG_NAME);
        write_favicon_svg(avatar, &svg, FAVICON_SVG_SIZE)?;
        generated.push(svg);
        progress.inc("svg");
    }

    progress.finish();
    Ok(generated)
}

/// Extended SVGs are optional: report the missing ones and keep going.
fn warn_missing_extended(sources: &Sources) {
    let missing = sources.missing_extended();
    if missing.is_empty() {
        return;
    }

    log!("warning"; "extended SVGs not found (will not block icon generation):");
    for path in missing {
        eprintln!(" - {}", path.display());
    }
}

#[cfg(test)]
mod tests;
