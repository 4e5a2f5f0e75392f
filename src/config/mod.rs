// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast duration, placement and interaction settings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.notifications.default_duration_ms = Some(8000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::notifications::{Expiry, Position};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Auto-dismiss delay in milliseconds; `<= 0` makes toasts sticky.
    #[serde(
        default = "default_notification_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<i64>,

    /// Screen corner the toasts stack in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Pause the countdown while the pointer is over a toast.
    #[serde(
        default = "default_pause_on_hover",
        skip_serializing_if = "Option::is_none"
    )]
    pub pause_on_hover: Option<bool>,

    /// Close the newest toast with Escape.
    #[serde(
        default = "default_escape_dismisses",
        skip_serializing_if = "Option::is_none"
    )]
    pub escape_dismisses: Option<bool>,

    /// How often countdowns are checked (milliseconds).
    #[serde(
        default = "default_tick_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_notification_duration_ms(),
            position: Some(Position::default()),
            pause_on_hover: default_pause_on_hover(),
            escape_dismisses: default_escape_dismisses(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl NotificationsConfig {
    /// Expiry applied to notifications that don't set their own duration.
    #[must_use]
    pub fn default_expiry(&self) -> Expiry {
        Expiry::from_millis(
            self.default_duration_ms
                .unwrap_or(DEFAULT_NOTIFICATION_DURATION_MS),
        )
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position.unwrap_or_default()
    }

    #[must_use]
    pub fn pause_on_hover(&self) -> bool {
        self.pause_on_hover.unwrap_or(DEFAULT_PAUSE_ON_HOVER)
    }

    #[must_use]
    pub fn escape_dismisses(&self) -> bool {
        self.escape_dismisses.unwrap_or(DEFAULT_ESCAPE_DISMISSES)
    }

    /// Tick interval, clamped so a hand-edited file cannot spin or stall the loop.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let millis = self
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        Duration::from_millis(millis)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Toast notification settings.
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_notification_duration_ms() -> Option<i64> {
    Some(DEFAULT_NOTIFICATION_DURATION_MS)
}

fn default_pause_on_hover() -> Option<bool> {
    Some(DEFAULT_PAUSE_ON_HOVER)
}

fn default_escape_dismisses() -> Option<bool> {
    Some(DEFAULT_ESCAPE_DISMISSES)
}

fn default_tick_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            notifications: NotificationsConfig {
                default_duration_ms: Some(0),
                position: Some(Position::TopLeft),
                pause_on_hover: Some(false),
                escape_dismisses: Some(false),
                tick_interval_ms: Some(250),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_on_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[notifications\n")
            .expect("failed to write broken toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [notifications]
            position = "top-right"
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.notifications.position(), Position::TopRight);
        assert_eq!(
            config.notifications.default_duration_ms,
            Some(DEFAULT_NOTIFICATION_DURATION_MS)
        );
        assert!(config.notifications.pause_on_hover());
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str(
            r#"
            [general]
            theme_mode = "DARK"
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn non_positive_default_duration_is_sticky() {
        let section = NotificationsConfig {
            default_duration_ms: Some(-1),
            ..NotificationsConfig::default()
        };
        assert_eq!(section.default_expiry(), Expiry::Never);
    }

    #[test]
    fn default_expiry_is_five_seconds() {
        assert_eq!(
            NotificationsConfig::default().default_expiry(),
            Expiry::After(Duration::from_millis(5000))
        );
    }

    #[test]
    fn tick_interval_is_clamped() {
        let fast = NotificationsConfig {
            tick_interval_ms: Some(1),
            ..NotificationsConfig::default()
        };
        let slow = NotificationsConfig {
            tick_interval_ms: Some(60_000),
            ..NotificationsConfig::default()
        };

        assert_eq!(
            fast.tick_interval(),
            Duration::from_millis(MIN_TICK_INTERVAL_MS)
        );
        assert_eq!(
            slow.tick_interval(),
            Duration::from_millis(MAX_TICK_INTERVAL_MS)
        );
    }
}
