//! Application configuration, persisted as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cheatsheet::CheatSheet;
use crate::core::StyleOptions;
use crate::error::{SheetError, SheetResult};
use crate::template::TemplateConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5006;

/// Listen address for the serving facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
}

impl ServeConfig {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

/// Everything the `cheatsheet` binary reads from `--config`.
///
/// Missing fields fall back to the cheat-sheet defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub template: TemplateConfig,
    pub server: ServeConfig,
    /// Installed as the default style of every element kind.
    pub thumbnail: StyleOptions,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            template: TemplateConfig::default(),
            server: ServeConfig::default(),
            thumbnail: CheatSheet::default_thumbnail(),
        }
    }
}

impl SheetConfig {
    pub fn to_json_pretty(&self) -> SheetResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SheetError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> SheetResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| SheetError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.template.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> SheetResult<Self> {
        let input = fs::read_to_string(path)?;
        let config = Self::from_json_str(&input)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Writes the config as pretty JSON, creating parent directories and
    /// overwriting any existing file.
    pub fn save(&self, path: &Path) -> SheetResult<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json_pretty()?)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}
