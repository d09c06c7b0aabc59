//! Rasterization backends and the startup capability probe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// SVG rasterization backend
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SvgConverter {
    /// Render in-process with resvg.
    #[default]
    Builtin,
    /// Use ImageMagick (`magick` command).
    Magick,
}

impl SvgConverter {
    /// Name shown in logs and `--converter` values.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Magick => "magick",
        }
    }
}

impl fmt::Display for SvgConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of probing a backend before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    Available,
    Missing {
        /// Missing program or component.
        name: &'static str,
        /// Install guidance.
        hint: &'static str,
    },
}

/// Check that everything `converter` needs is present.
pub fn probe(converter: SvgConverter) -> Capability {
    match converter {
        SvgConverter::Builtin => Capability::Available,
        SvgConverter::Magick => probe_program(
            "magick",
            "install ImageMagick 7 (https://imagemagick.org) or use `--converter builtin`",
        ),
    }
}

fn probe_program(name: &'static str, hint: &'static str) -> Capability {
    if which::which(name).is_ok() {
        Capability::Available
    } else {
        Capability::Missing { name, hint }
    }
}
