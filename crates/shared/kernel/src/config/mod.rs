use crate::error::{ConfigErrorExt, Result};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "showcase";
/// Prefix of environment overrides (`SHOWCASE__WINDOW__WIDTH=1440`).
pub const ENV_PREFIX: &str = "SHOWCASE";
const ENV_SEPARATOR: &str = "__";

/// Layered configuration loader: an optional file overlaid with environment variables.
///
/// The file layer accepts any format the `config` crate recognises by extension; a path
/// without extension (the default `showcase`) is resolved against the known extensions.
/// A missing file is not an error, every model field is expected to carry a default.
///
/// # Example
/// ```rust
/// use showcase_kernel::config::ConfigLoader;
/// use showcase_kernel::domain::config::ShowcaseConfig;
/// use std::collections::HashMap;
///
/// let env = HashMap::from([("SHOWCASE__DEMO".to_owned(), "catalog".to_owned())]);
/// let cfg: ShowcaseConfig = ConfigLoader::new()
///     .file("does-not-exist")
///     .env_source(env)
///     .load()
///     .unwrap();
/// assert_eq!(cfg.demo.to_string(), "catalog");
/// ```
#[derive(Debug, Default)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    env: Option<HashMap<String, String>>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration file. Defaults to [`DEFAULT_CONFIG_FILE`].
    #[must_use = "The loader does nothing until `load()` is called"]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replaces the process environment with an explicit variable map.
    #[must_use = "The loader does nothing until `load()` is called"]
    pub fn env_source(mut self, vars: HashMap<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    /// Builds the layered configuration and deserializes it into `T`.
    ///
    /// # Errors
    /// Returns [`crate::ConfigError`] if the file exists but cannot be parsed, or if a
    /// file or environment value does not match the structure of `T`.
    pub fn load<T>(self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let path = self.path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let environment = Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(self.env.map(|vars| vars.into_iter().collect()));

        info!("Loading config from {}", path.display());

        Config::builder()
            .add_source(File::from(path.as_path()).required(false))
            .add_source(environment)
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")
    }
}

/// Loads `T` from an optional file (default [`DEFAULT_CONFIG_FILE`]) and `SHOWCASE__*` variables.
///
/// # Errors
/// See [`ConfigLoader::load`].
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T>
where
    T: DeserializeOwned,
{
    let loader = ConfigLoader::new();
    match path {
        Some(path) => loader.file(path).load(),
        None => loader.load(),
    }
}
