/// Application configuration
use anyhow::Context;
use serde::{Deserialize, Serialize};
use sonora_library::LibraryConfig;
use sonora_playback::PlaybackConfig;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "sonora.toml";

/// Everything the terminal player can be configured with
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub library: LibraryConfig,
    pub playback: PlaybackConfig,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "sonora=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Precedence, lowest first: built-in defaults, the config file
    /// (`path`, or `sonora.toml` if present), `SONORA_*` environment
    /// variables with `__` between nested keys
    /// (`SONORA_LIBRARY__STORAGE_DIR=/music`).
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut settings = config::Config::builder();

        settings = match path {
            Some(path) => settings.add_source(config::File::from(path.to_path_buf())),
            None => settings.add_source(
                config::File::from(PathBuf::from(DEFAULT_CONFIG_FILE)).required(false),
            ),
        };

        // Override with environment variables (prefixed with SONORA_)
        settings = settings.add_source(
            config::Environment::with_prefix("SONORA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, storage_dir: Option<PathBuf>, bundled_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = storage_dir {
            self.library.storage_dir = dir;
        }
        if let Some(dir) = bundled_dir {
            self.library.bundled_dir = Some(dir);
        }
        self
    }
}
