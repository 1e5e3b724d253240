//! Build options resolved once at pipeline start.

use chrono::Utc;

/// Everything the pipeline reads from the environment, resolved up front and
/// passed by value. Keeps environment lookups out of the pipeline steps and
/// lets tests inject values without touching the process environment.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Build tag stamped by CI (`BUILD_TAG`)
    pub build_tag: String,
    /// Target environment name (`APP_ENV`)
    pub environment: String,
    /// Human-readable release note (`RELEASE_NOTE`)
    pub release_note: String,
    /// Source revision, set by GitHub Actions (`GITHUB_SHA`)
    pub git_commit: String,
    /// Archiver program (`TAR_BIN`); overridable so tests can simulate
    /// archiver failure.
    pub archive_tool: String,
}

impl BuildOptions {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary lookup function.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            build_tag: lookup("BUILD_TAG").unwrap_or_else(default_build_tag),
            environment: lookup("APP_ENV").unwrap_or_else(|| "production".to_string()),
            release_note: lookup("RELEASE_NOTE")
                .unwrap_or_else(|| "Production build".to_string()),
            git_commit: lookup("GITHUB_SHA").unwrap_or_else(|| "unknown".to_string()),
            archive_tool: lookup("TAR_BIN").unwrap_or_else(|| "tar".to_string()),
        }
    }
}

/// Time-based tag used when CI did not provide one.
fn default_build_tag() -> String {
    format!("build-{}", Utc::now().timestamp_millis())
}
