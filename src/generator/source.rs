//! Source SVG lookup.
//!
//! Each source is found by, in order:
//! 1. an explicit path (CLI flag or config), used verbatim
//! 2. the conventional file name next to the executable, if it exists
//! 3. the conventional file name under `brand-assets/`, existing or not
//!
//! Existence is checked later by the generator.

use std::path::{Path, PathBuf};

use crate::config::SourcesConfig;

/// Conventional subdirectory holding brand sources.
pub const SOURCE_SUBDIR: &str = "brand-assets";

/// The three source images a run knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRole {
    /// Contracted logo, the input for every generated asset.
    Avatar,
    ExtendedLight,
    ExtendedDark,
}

impl SourceRole {
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Avatar => "logo_thumbnail.svg",
            Self::ExtendedLight => "logo.svg",
            Self::ExtendedDark => "logo_dark.svg",
        }
    }
}

/// Resolved source paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub avatar: PathBuf,
    pub extended_light: PathBuf,
    pub extended_dark: PathBuf,
}

impl Sources {
    /// Extended sources that do not exist on disk.
    pub fn missing_extended(&self) -> Vec<&Path> {
        [&self.extended_light, &self.extended_dark]
            .into_iter()
            .filter(|path| !path.exists())
            .map(PathBuf::as_path)
            .collect()
    }
}

/// Path resolver anchored at the tool's own directory.
#[derive(Debug, Clone, Default)]
pub struct SourceResolver {
    tool_dir: Option<PathBuf>,
}

impl SourceResolver {
    #[cfg(test)]
    pub fn new(tool_dir: Option<PathBuf>) -> Self {
        Self { tool_dir }
    }

    /// Anchor at the directory of the running executable.
    pub fn from_current_exe() -> Self {
        let tool_dir = std::env::current_exe()
            .ok()
            .map(|exe| exe.canonicalize().unwrap_or(exe))
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        Self { tool_dir }
    }

    /// Resolve one source path.
    pub fn resolve(&self, explicit: Option<&Path>, file_name: &str, subdir: &str) -> PathBuf {
        if let Some(path) = explicit
            && !path.as_os_str().is_empty()
        {
            return path.to_path_buf();
        }

        if let Some(dir) = &self.tool_dir {
            let local = dir.join(file_name);
            if local.exists() {
                return local;
            }
        }

        Path::new(subdir).join(file_name)
    }

    pub fn resolve_role(&self, role: SourceRole, explicit: Option<&Path>) -> PathBuf {
        self.resolve(explicit, role.file_name(), SOURCE_SUBDIR)
    }

    pub fn resolve_sources(&self, config: &SourcesConfig) -> Sources {
        Sources {
            avatar: self.resolve_role(SourceRole::Avatar, config.avatar.as_deref()),
            extended_light: self
                .resolve_role(SourceRole::ExtendedLight, config.extended_light.as_deref()),
            extended_dark: self
                .resolve_role(SourceRole::ExtendedDark, config.extended_dark.as_deref()),
        }
    }
}
