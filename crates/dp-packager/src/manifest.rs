//! Project manifest loading and the production transform.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PackagerError, PackagerResult};

/// Project manifest (`manifest.json`): name, version, dependency tables,
/// scripts. Fields this tool doesn't know about are preserved verbatim
/// through the load/store round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub dependencies: Map<String, Value>,
    #[serde(
        rename = "devDependencies",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub dev_dependencies: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub scripts: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manifest {
    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> PackagerResult<Self> {
        let data = fs::read_to_string(path).map_err(|source| PackagerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| PackagerError::Manifest {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Strip development-only dependencies and pin `scripts` to the single
    /// production start command.
    pub fn into_production(mut self, start_command: &str) -> Self {
        self.dev_dependencies = None;
        let mut scripts = Map::new();
        scripts.insert(
            "start".to_string(),
            Value::String(start_command.to_string()),
        );
        self.scripts = scripts;
        self
    }

    /// Write the manifest as pretty-printed JSON.
    pub fn store(&self, path: &Path) -> PackagerResult<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| PackagerError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json + "\n").map_err(|source| PackagerError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
