//! Startup configuration read from the environment and an optional JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;
use crate::state::columns::{ControlStyle, EnumeratedColumns};
use crate::state::i18n::Language;

/// Path of a workbook to open at startup.
pub const OPEN_ENV: &str = "XLSHEET_OPEN";
/// Path of the JSON config file.
pub const CONFIG_ENV: &str = "XLSHEET_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EnumeratedColumnConfig {
    pub name: String,
    #[serde(default)]
    pub control: ControlStyle,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub language: Language,
    pub enumerated_columns: Vec<EnumeratedColumnConfig>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            enumerated_columns: EnumeratedColumns::default()
                .iter()
                .map(|(name, control)| EnumeratedColumnConfig {
                    name: name.to_string(),
                    control,
                })
                .collect(),
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Reads the file named by `XLSHEET_CONFIG`, falling back to defaults
    /// when unset or unreadable.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV) else {
            return Self::default();
        };
        match Self::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path, error = %err, "ignoring config file");
                Self::default()
            }
        }
    }

    pub fn enumerated_columns(&self) -> EnumeratedColumns {
        EnumeratedColumns::new(
            self.enumerated_columns
                .iter()
                .map(|column| (column.name.clone(), column.control)),
        )
    }
}

pub fn startup_workbook() -> Option<PathBuf> {
    std::env::var_os(OPEN_ENV).map(PathBuf::from)
}
