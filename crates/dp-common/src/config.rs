use serde::Deserialize;

/// Top-level application configuration.
/// Loaded from environment variables and/or config files.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    #[serde(default = "default_host")]
    pub host: String,
    /// HTTP API port (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,
    /// Log level (default: info)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Load config from environment variables and optional config file.
    pub fn load() -> Result<Self, config::ConfigError> {
        let cfg = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        cfg.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_log_level() -> String {
    "info".to_string()
}

/// Release metadata injected by the CI pipeline.
///
/// These are plain (unprefixed) variables because CI systems set them
/// directly: `BUILD_TAG` and `RELEASE_NOTE` come from the deploy workflow,
/// `APP_ENV` from the target environment.
#[derive(Debug, Clone)]
pub struct ReleaseInfo {
    /// Deployment environment name (`APP_ENV`, default: development)
    pub environment: String,
    /// Application version (`APP_VERSION`, default: crate version)
    pub version: String,
    /// Build tag stamped by CI (`BUILD_TAG`, default: local-build)
    pub build_tag: String,
    /// Human-readable release note (`RELEASE_NOTE`)
    pub release_note: String,
}

impl ReleaseInfo {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary lookup function. Tests pass a map-backed
    /// closure instead of mutating the process environment.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            environment: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            version: lookup("APP_VERSION")
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            build_tag: lookup("BUILD_TAG").unwrap_or_else(|| "local-build".to_string()),
            release_note: lookup("RELEASE_NOTE")
                .unwrap_or_else(|| "Local development build".to_string()),
        }
    }
}
