//! Named sort specifications loaded from TOML
//!
//! ```toml
//! [sorter]
//! check_homogeneous = true
//!
//! [specs]
//! by_city = [
//!     { key = "Address.City", direction = "desc" },
//!     { key = "Name" },
//! ]
//! ```

use super::runtime::SorterConfig;
use crate::types::{SortError, SortSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortSpecFile {
    #[serde(default)]
    pub sorter: SorterConfig,

    #[serde(default)]
    pub specs: BTreeMap<String, SortSpec>,
}

impl SortSpecFile {
    /// Load from a TOML file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SortError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            log_error!(
                crate::logging::codes::config::CONFIG_LOAD_FAILURE,
                "Failed to read sort spec file",
                "path" => display,
                "error" => e
            );
            SortError::config(&display, e.to_string())
        })?;

        let file = Self::parse(&contents, &display)?;
        log_debug!("Loaded sort spec file", "path" => display, "specs" => file.specs.len());
        Ok(file)
    }

    /// Parse from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, SortError> {
        Self::parse(contents, "<inline>")
    }

    fn parse(contents: &str, origin: &str) -> Result<Self, SortError> {
        toml::from_str(contents).map_err(|e| {
            log_error!(
                crate::logging::codes::config::CONFIG_LOAD_FAILURE,
                "Failed to parse sort spec file",
                "path" => origin,
                "error" => e
            );
            SortError::config(origin, e.to_string())
        })
    }

    /// Look up a named spec
    pub fn get(&self, name: &str) -> Option<&SortSpec> {
        self.specs.get(name)
    }

    /// Names of all specs in the file
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }
}
