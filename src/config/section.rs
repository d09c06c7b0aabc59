//! `brand.toml` sections.
//!
//! ```toml
//! [sources]
//! avatar = "art/logo_thumbnail.svg"
//! extended_light = "art/logo.svg"
//! extended_dark = "art/logo_dark.svg"
//!
//! [output]
//! dir = "public"
//! favicon_svg = true
//!
//! [render]
//! converter = "builtin"   # builtin | magick
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::image::backend::SvgConverter;

/// `[sources]` explicit source paths. Unset entries use the conventional lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub avatar: Option<PathBuf>,
    pub extended_light: Option<PathBuf>,
    pub extended_dark: Option<PathBuf>,
}

impl SourcesConfig {
    /// Anchor relative entries at `base`.
    pub fn rebase(&mut self, base: &Path) {
        for path in [
            &mut self.avatar,
            &mut self.extended_light,
            &mut self.extended_dark,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() && !path.as_os_str().is_empty() {
                *path = base.join(&*path);
            }
        }
    }
}

/// `[output]` where and what to write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for generated files.
    pub dir: PathBuf,

    /// Write `favicon.svg` next to the raster assets.
    pub favicon_svg: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            favicon_svg: true,
        }
    }
}

/// `[render]` rasterization settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub converter: SvgConverter,
}
