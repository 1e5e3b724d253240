//! Build record — metadata describing one packaging run.

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{PackagerError, PackagerResult};
use crate::manifest::Manifest;
use crate::options::BuildOptions;

/// Written once per invocation as `build-info.json`, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRecord {
    /// Build timestamp, RFC 3339 / UTC.
    pub build_time: String,
    /// Version copied from the manifest.
    pub version: String,
    pub build_tag: String,
    pub environment: String,
    pub release_note: String,
    pub git_commit: String,
}

impl BuildRecord {
    pub fn new(manifest: &Manifest, options: &BuildOptions) -> Self {
        Self {
            build_time: Utc::now().to_rfc3339(),
            version: manifest.version.clone(),
            build_tag: options.build_tag.clone(),
            environment: options.environment.clone(),
            release_note: options.release_note.clone(),
            git_commit: options.git_commit.clone(),
        }
    }

    /// Write the record as pretty-printed JSON.
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
