//! Deployment archive creation via an external archiving tool.

use std::path::Path;
use std::process::Command;

use crate::error::{PackagerError, PackagerResult};

/// One blocking invocation of the external archiver. Output is captured so
/// a failure can be reported with the tool's own message.
pub struct Archiver {
    program: String,
}

impl Archiver {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Create `archive` from the contents of `dir`.
    pub fn create(&self, dir: &Path, archive: &Path) -> PackagerResult<()> {
        let output = Command::new(&self.program)
            .arg("-czf")
            .arg(archive)
            .arg("-C")
            .arg(dir)
            .arg(".")
            .output()
            .map_err(|source| PackagerError::ArchiverLaunch {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(PackagerError::ArchiverFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
