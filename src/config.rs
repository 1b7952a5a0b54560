//! Configuration loading.
//!
//! ```toml
//! [compiler]
//! legacy_trim_end = false
//!
//! [schema]
//! default_schema = "dbo"
//!
//! [schema.entities.Product]
//! table = "Products"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::schema::Catalog;

/// Default file name looked up in the working directory.
pub const CONFIG_FILE: &str = "sqlexpress.toml";

/// Translation switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Emit `LTRIM` for `TrimEnd`, as older releases did.
    #[serde(default)]
    pub legacy_trim_end: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub compiler: CompileOptions,
    #[serde(default)]
    pub schema: Catalog,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.schema.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load `./sqlexpress.toml`, then the user config file, else defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        for path in Self::search_paths() {
            if path.is_file() {
                tracing::debug!(path = %path.display(), "loading configuration");
                return Self::load(&path);
            }
        }
        Ok(Self::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("sqlexpress").join("config.toml"));
        }
        paths
    }
}
