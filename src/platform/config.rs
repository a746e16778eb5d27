// Folio - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Folio configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/folio/ or %APPDATA%\Folio\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();

            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");

            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Path of the user portfolio-content override file.
    pub fn user_content_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONTENT_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[content]` section.
    pub content: ContentSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Starting theme: "dark" or "light". Runtime toggles are never
    /// written back; this only selects the mode at launch.
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[content]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ContentSection {
    /// Path to a portfolio.toml overriding the built-in content.
    pub file: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// All values are validated against named constants at load time.
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Start in dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,
    /// Portfolio content override path.
    pub content_file: Option<PathBuf>,
    /// Logging level string (read before tracing is initialised).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // The page opens light, matching the portfolio's default look.
            dark_mode: false,
            font_size: constants::DEFAULT_FONT_SIZE,
            content_file: None,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal,
/// per-field `ConfigError`s. If the file does not exist, returns defaults
/// with no errors (first-run). If the file is unreadable or unparseable,
/// returns defaults with a single error -- the application still starts
/// but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<ConfigError>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut errors: Vec<ConfigError> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), errors);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(source) => {
            errors.push(ConfigError::Io {
                path: config_path,
                source,
            });
            return (AppConfig::default(), errors);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(source) => {
            errors.push(ConfigError::TomlParse {
                path: config_path,
                source,
            });
            return (AppConfig::default(), errors);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    // Validate each field against named constants, accumulating all errors.
    let mut config = AppConfig::default();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                errors.push(ConfigError::ValueOutOfRange {
                    field: "ui.theme".to_string(),
                    value: other.to_string(),
                    expected: "\"dark\" or \"light\"".to_string(),
                });
            }
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            errors.push(ConfigError::ValueOutOfRange {
                field: "ui.font_size".to_string(),
                value: size.to_string(),
                expected: format!(
                    "{} to {} points",
                    constants::MIN_FONT_SIZE,
                    constants::MAX_FONT_SIZE
                ),
            });
        }
    }

    // -- Content: file --
    if let Some(ref file) = raw.content.file {
        if file.is_empty() {
            errors.push(ConfigError::ValueOutOfRange {
                field: "content.file".to_string(),
                value: String::new(),
                expected: "a non-empty path".to_string(),
            });
        } else {
            config.content_file = Some(PathBuf::from(file));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            errors.push(ConfigError::ValueOutOfRange {
                field: "logging.level".to_string(),
                value: level.clone(),
                expected: "error, warn, info, debug, or trace".to_string(),
            });
        }
    }

    if !errors.is_empty() {
        tracing::warn!(count = errors.len(), "Config validation produced warnings");
    }

    (config, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_content_file_lives_in_config_dir() {
        let paths = PlatformPaths {
            config_dir: PathBuf::from("/tmp/folio-config"),
        };
        assert_eq!(
            paths.user_content_file(),
            PathBuf::from("/tmp/folio-config").join(constants::CONTENT_FILE_NAME)
        );
    }
}
