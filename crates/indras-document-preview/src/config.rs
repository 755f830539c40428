//! Preview configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PreviewError, Result};
use crate::icon::IconSet;
use crate::overlay::DrawerDirection;

/// Environment variable naming an icon override directory.
pub const ICON_DIR_ENV: &str = "INDRAS_PREVIEW_ICON_DIR";
/// Environment variable selecting the drawer edge.
pub const DRAWER_ENV: &str = "INDRAS_PREVIEW_DRAWER";

/// Display settings shared by every preview in a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Directory holding `sheet.svg`, `pdf.svg`, `docx.svg` and `txt.svg`.
    /// Bundled icons are used when unset.
    pub icon_dir: Option<PathBuf>,

    /// Edge the raw content drawer slides in from.
    pub drawer_direction: DrawerDirection,

    /// Show the "PDF File" line under the filename.
    pub show_type_line: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            icon_dir: None,
            drawer_direction: DrawerDirection::Left,
            show_type_line: true,
        }
    }
}

impl PreviewConfig {
    /// Defaults overridden by `INDRAS_PREVIEW_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Load from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| PreviewError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Resolve the icon set this config points at.
    pub fn icon_set(&self) -> IconSet {
        match &self.icon_dir {
            Some(dir) => IconSet::from_dir(dir),
            None => IconSet::embedded(),
        }
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(ICON_DIR_ENV).filter(|v| !v.is_empty()) {
            self.icon_dir = Some(PathBuf::from(dir));
        }
        if let Some(raw) = lookup(DRAWER_ENV) {
            match raw.parse() {
                Ok(direction) => self.drawer_direction = direction,
                Err(err) => tracing::warn!(%err, "ignoring {}", DRAWER_ENV),
            }
        }
        self
    }
}
