//! The packaging pipeline: one linear sequence, no branching.

use std::path::PathBuf;

use crate::archive::Archiver;
use crate::error::PackagerResult;
use crate::fsops;
use crate::manifest::Manifest;
use crate::options::BuildOptions;
use crate::record::BuildRecord;

/// Build output directory, fully regenerated on every run.
pub const BUILD_DIR: &str = "build";
/// Distribution directory holding the final archive.
pub const DIST_DIR: &str = "dist";
/// Source tree copied into the package.
pub const SOURCE_DIR: &str = "src";
/// Manifest file name, at the project root and inside the package.
pub const MANIFEST_FILE: &str = "manifest.json";
/// Build record file name inside the package.
pub const BUILD_INFO_FILE: &str = "build-info.json";
/// Production start command injected into the packaged manifest.
pub const START_COMMAND: &str = "dp-server";

/// What the final summary reports.
#[derive(Debug)]
pub struct BuildSummary {
    pub build_dir: PathBuf,
    pub archive: PathBuf,
    pub build_tag: String,
    pub release_note: String,
}

pub struct Pipeline {
    root: PathBuf,
    options: BuildOptions,
}

impl Pipeline {
    pub fn new(root: impl Into<PathBuf>, options: BuildOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }

    /// Run the whole pipeline: clean, initialize, copy sources, transform
    /// the manifest, emit the build record, archive. Reruns are safe — the
    /// clean step always removes prior output first.
    pub fn run(&self) -> PackagerResult<BuildSummary> {
        let build_dir = self.root.join(BUILD_DIR);
        let dist_dir = self.root.join(DIST_DIR);

        // Clean previous builds
        if fsops::remove_dir_if_exists(&build_dir)? {
            tracing::info!("Cleaned previous build directory");
        }
        if fsops::remove_dir_if_exists(&dist_dir)? {
            tracing::info!("Cleaned previous dist directory");
        }

        // Create build directories
        fsops::create_dir(&build_dir)?;
        fsops::create_dir(&dist_dir)?;
        tracing::info!("Created build directories");

        // Copy source tree and the raw manifest
        let copied = fsops::copy_dir_recursive(
            &self.root.join(SOURCE_DIR),
            &build_dir.join(SOURCE_DIR),
        )?;
        fsops::copy_file(&self.root.join(MANIFEST_FILE), &build_dir.join(MANIFEST_FILE))?;
        tracing::info!("Copied source files ({copied} files)");

        // Production manifest: drop dev dependencies, pin the start script,
        // overwrite the raw copy
        let manifest =
            Manifest::load(&self.root.join(MANIFEST_FILE))?.into_production(START_COMMAND);
        manifest.store(&build_dir.join(MANIFEST_FILE))?;
        tracing::info!("Created production manifest");

        // Build record
        let record = BuildRecord::new(&manifest, &self.options);
        record.store(&build_dir.join(BUILD_INFO_FILE))?;
        tracing::info!("Created build info");

        // Deployment archive
        let archive = dist_dir.join(archive_name(&manifest));
        Archiver::new(&self.options.archive_tool).create(&build_dir, &archive)?;
        tracing::info!("Created deployment package: {}", archive.display());

        Ok(BuildSummary {
            build_dir,
            archive,
            build_tag: record.build_tag,
            release_note: record.release_note,
        })
    }
}

fn archive_name(manifest: &Manifest) -> String {
    format!("{}-{}.tar.gz", manifest.name, manifest.version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn options() -> BuildOptions {
        BuildOptions {
            build_tag: "test-tag".to_string(),
            environment: "test".to_string(),
            release_note: "Test build".to_string(),
            git_commit: "unknown".to_string(),
            // `true` exits 0 without touching the archive path, so these
            // tests exercise steps 1-5 without needing tar.
            archive_tool: "true".to_string(),
        }
    }

    fn scaffold(root: &Path) {
        fs::create_dir_all(root.join("src").join("routes")).unwrap();
        fs::write(root.join("src").join("main.txt"), "main").unwrap();
        fs::write(root.join("src").join("routes").join("a.txt"), "a").unwrap();
        fs::write(
            root.join("manifest.json"),
            serde_json::json!({
                "name": "demo-app",
                "version": "1.2.3",
                "devDependencies": { "jest": "^29.0.0" },
                "scripts": { "test": "jest" }
            })
            .to_string(),
        )
        .unwrap();
    }

    #[test]
    fn run_produces_a_complete_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path());

        let summary = Pipeline::new(dir.path(), options()).run().unwrap();

        assert_eq!(summary.build_tag, "test-tag");
        let build = dir.path().join(BUILD_DIR);
        assert!(build.join("src").join("main.txt").exists());
        assert!(build.join("src").join("routes").join("a.txt").exists());
        assert!(build.join(MANIFEST_FILE).exists());
        assert!(build.join(BUILD_INFO_FILE).exists());
        assert!(dir.path().join(DIST_DIR).is_dir());
    }

    #[test]
    fn run_replaces_stale_output() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path());

        // Leftovers from an older, differently-shaped build
        fs::create_dir_all(dir.path().join(BUILD_DIR).join("stale")).unwrap();
        fs::write(dir.path().join(BUILD_DIR).join("stale").join("junk"), "x").unwrap();
        fs::create_dir_all(dir.path().join(DIST_DIR)).unwrap();
        fs::write(dir.path().join(DIST_DIR).join("old.tar.gz"), "x").unwrap();

        Pipeline::new(dir.path(), options()).run().unwrap();

        assert!(!dir.path().join(BUILD_DIR).join("stale").exists());
        assert!(!dir.path().join(DIST_DIR).join("old.tar.gz").exists());
    }

    #[test]
    fn packaged_manifest_has_no_dev_dependencies() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path());

        Pipeline::new(dir.path(), options()).run().unwrap();

        let manifest: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join(BUILD_DIR).join(MANIFEST_FILE)).unwrap(),
        )
        .unwrap();
        assert!(manifest.get("devDependencies").is_none());
        assert_eq!(manifest["scripts"], serde_json::json!({ "start": "dp-server" }));
    }

    #[test]
    fn missing_source_tree_propagates() {
        let dir = tempfile::tempdir().unwrap();
        // manifest but no src/
        fs::write(
            dir.path().join("manifest.json"),
            serde_json::json!({ "name": "demo-app", "version": "1.2.3" }).to_string(),
        )
        .unwrap();

        let err = Pipeline::new(dir.path(), options()).run().unwrap_err();
        assert!(!err.is_archive_failure());
        assert!(err.to_string().contains("src"));
    }

    #[test]
    fn archiver_failure_leaves_build_output_intact() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path());

        let mut opts = options();
        opts.archive_tool = "false".to_string();

        let err = Pipeline::new(dir.path(), opts).run().unwrap_err();
        assert!(err.is_archive_failure());

        // Steps 1-5 completed before the archiver ran
        let build = dir.path().join(BUILD_DIR);
        assert!(build.join(MANIFEST_FILE).exists());
        assert!(build.join(BUILD_INFO_FILE).exists());
        assert!(fs::read_dir(dir.path().join(DIST_DIR)).unwrap().next().is_none());
    }
}
