// Configuration loading and parsing (config/stratos.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::theme::{ThemeOptions, ThemePreference};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Config sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub ui: UiConfig,
    pub theme: ThemeConfig,
    pub toast: ToastConfig,
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Render tick period in milliseconds.
    pub tick_ms: u64,
    /// Dashboard telemetry refresh period in seconds.
    pub telemetry_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    /// `light`, `dark`, or `system`.
    pub default: String,
    pub enable_system_detection: bool,
    pub storage_key: String,
}

impl ThemeConfig {
    /// Parsed default preference. Only meaningful after `validate` passed.
    pub fn default_preference(&self) -> ThemePreference {
        ThemePreference::parse(&self.default).unwrap_or(ThemePreference::System)
    }

    pub fn options(&self) -> ThemeOptions {
        ThemeOptions {
            default_theme: self.default_preference(),
            enable_system_detection: self.enable_system_detection,
            storage_key: self.storage_key.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToastConfig {
    pub default_duration_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Simulated launch delay before navigating to the dashboard.
    pub launch_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    /// Path to the preference database. Empty means "use the per-user data
    /// directory".
    #[serde(default)]
    pub prefs_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ui: UiConfig {
                tick_ms: 33,
                telemetry_interval_secs: 5,
            },
            theme: ThemeConfig {
                default: "system".into(),
                enable_system_detection: true,
                storage_key: "theme".into(),
            },
            toast: ToastConfig {
                default_duration_ms: 3000,
            },
            analysis: AnalysisConfig {
                launch_delay_ms: 1200,
            },
            storage: StorageConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/stratos.toml` relative to
/// the given `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy
/// defaults. Prefer `load_config()` which handles default initialization
/// automatically.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let config_path = base_dir.join("config").join("stratos.toml");
    let text = read_file(&config_path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: config_path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Ensure all config files exist by copying missing ones from `defaults/`.
/// Returns the list of files that were copied. Skips `.example` files.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let mut copied = Vec::new();

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };

        if file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
            continue;
        }
        let target = config_dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut dest) => {
                let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
                    message: format!("failed to read {}: {e}", path.display()),
                })?;
                std::io::Write::write_all(&mut dest, &content).map_err(|e| {
                    ConfigError::DefaultsCopyError {
                        message: format!("failed to write {}: {e}", target.display()),
                    }
                })?;
                copied.push(target);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                // Already customized, leave it alone.
            }
            Err(e) => {
                return Err(ConfigError::DefaultsCopyError {
                    message: format!("failed to create {}: {e}", target.display()),
                });
            }
        }
    }

    Ok(copied)
}

/// Convenience wrapper: loads config relative to the current working
/// directory, copying defaults first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.ui.tick_ms == 0 {
        return Err(ConfigError::ValidationError {
            field: "ui.tick_ms".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.ui.telemetry_interval_secs == 0 {
        return Err(ConfigError::ValidationError {
            field: "ui.telemetry_interval_secs".into(),
            message: "must be greater than 0".into(),
        });
    }

    if ThemePreference::parse(&config.theme.default).is_none() {
        return Err(ConfigError::ValidationError {
            field: "theme.default".into(),
            message: format!(
                "must be one of `light`, `dark`, `system`, got `{}`",
                config.theme.default
            ),
        });
    }

    if config.theme.storage_key.is_empty() {
        return Err(ConfigError::ValidationError {
            field: "theme.storage_key".into(),
            message: "must not be empty".into(),
        });
    }

    if config.toast.default_duration_ms == 0 {
        return Err(ConfigError::ValidationError {
            field: "toast.default_duration_ms".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.analysis.launch_delay_ms == 0 {
        return Err(ConfigError::ValidationError {
            field: "analysis.launch_delay_ms".into(),
            message: "must be greater than 0".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
