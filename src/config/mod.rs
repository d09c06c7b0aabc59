//! Generator configuration from `brand.toml` and CLI flags.
//!
//! # Sections
//!
//! | Section     | Purpose                                   |
//! |-------------|-------------------------------------------|
//! | `[sources]` | Explicit avatar / extended SVG paths      |
//! | `[output]`  | Output directory, `favicon.svg` toggle    |
//! | `[render]`  | Rasterization backend                     |
//!
//! Precedence is CLI flag, then config file, then built-in default.
//! The config file is optional unless given explicitly with `--config`.

mod error;
mod section;

pub use error::ConfigError;
pub use section::SourcesConfig;
use section::{OutputConfig, RenderConfig};

use crate::{cli::Cli, debug, log};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "brand.toml";

/// Root configuration structure representing brand.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandConfig {
    /// Path of the loaded config file, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

impl BrandConfig {
    /// Load configuration and apply CLI overrides.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match Self::resolve_config_path(cli)? {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        if let Some(path) = &config.config_path {
            debug!("config"; "loaded {}", path.display());
        }
        Ok(config)
    }

    /// Explicit `--config` must exist; the default file is optional.
    fn resolve_config_path(cli: &Cli) -> Result<Option<PathBuf>, ConfigError> {
        match &cli.config {
            Some(path) if path.exists() => Ok(Some(path.clone())),
            Some(path) => Err(ConfigError::NotFound(path.clone())),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                Ok(path.exists().then_some(path))
            }
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored);
        }
        Ok(config)
    }

    /// Load configuration from file path.
    ///
    /// Relative source paths and the output dir are anchored at the file's directory.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let mut config = Self::from_str(&content)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.sources.rebase(base);
        if config.output.dir.is_relative() {
            config.output.dir = base.join(&config.output.dir);
        }
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String]) {
        log!("warning"; "unknown config fields, ignoring:");
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Apply CLI flags on top of file values.
    fn apply_cli(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        Self::update_option(&mut self.sources.avatar, cli.avatar_svg.as_ref());
        Self::update_option(&mut self.sources.extended_light, cli.extended_light.as_ref());
        Self::update_option(&mut self.sources.extended_dark, cli.extended_dark.as_ref());

        if let Some(dir) = &cli.out_dir {
            self.output.dir = dir.clone();
        }
        if cli.skip_favicon_svg {
            self.output.favicon_svg = false;
        }
        if let Some(converter) = cli.converter {
            self.render.converter = converter;
        }
    }

    /// Overwrite an optional path with a CLI value, when one was given.
    fn update_option(target: &mut Option<PathBuf>, value: Option<&PathBuf>) {
        if let Some(v) = value {
            *target = Some(v.clone());
        }
    }
}
