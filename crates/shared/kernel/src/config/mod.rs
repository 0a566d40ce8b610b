use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Default configuration file, looked up in the current working directory.
pub const DEFAULT_CONFIG_FILE: &str = "vio.toml";

/// Prefix for environment overrides (`VIO__COVERAGE__OUTPUT_DIR`, ...).
pub const ENV_PREFIX: &str = "VIO";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

trait ConfigResultExt<T> {
    fn context(self, context: &'static str) -> Result<T, ConfigError>;
}

impl<T> ConfigResultExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: &'static str) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

/// Loads the tooling configuration from an optional TOML file plus environment overrides.
///
/// Layers, lowest priority first:
/// 1. **File**: the explicit `path` (must exist) or, when `None`, [`DEFAULT_CONFIG_FILE`]
///    in the current directory (optional).
/// 2. **Environment**: variables prefixed with `VIO__`, nested keys separated by `__`
///    (e.g. `VIO__INSTALL__PROGRAM` maps to `install.program`).
///
/// Target types are expected to carry `#[serde(default)]`, so an empty configuration
/// yields the built-in defaults.
///
/// # Errors
/// Returns an error if an explicit file is missing, a file cannot be parsed, or the
/// merged values do not match `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(p) => {
            debug!("Loading config from {}", p.as_ref().display());
            File::from(p.as_ref()).required(true)
        },
        None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
    };

    Config::builder()
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
