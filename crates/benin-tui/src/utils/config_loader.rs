/// Configuration management for benin-tui
///
/// Wraps config-rs so the dashboard can be pointed at another data folder,
/// forced into ASCII mode or given a log directory without recompiling.
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ui::ThemeMode;

/// Application configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: ThemeMode,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: Option<String>,
    #[serde(default = "default_file_logging")]
    pub enable_file_logging: bool,
}

/// Initial viewport, used until the terminal reports its real size.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_width")]
    pub width: u16,
    #[serde(default = "default_height")]
    pub height: u16,
    /// Plot rows in the chart views.
    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
}

// Default values
fn default_data_dir() -> String {
    benin_io::DEFAULT_DATA_DIR.to_string()
}

fn default_assets_dir() -> String {
    "assets/projets".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> Option<String> {
    Some("logs".to_string())
}

// The screen belongs to the dashboard, so logs go to a file unless disabled.
fn default_file_logging() -> bool {
    true
}

fn default_width() -> u16 {
    110
}

fn default_height() -> u16 {
    40
}

fn default_chart_height() -> usize {
    12
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: default_log_dir(),
            enable_file_logging: default_file_logging(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            chart_height: default_chart_height(),
        }
    }
}

impl DataConfig {
    pub fn dir_path(&self) -> PathBuf {
        PathBuf::from(&self.dir)
    }

    pub fn assets_path(&self) -> PathBuf {
        PathBuf::from(&self.assets_dir)
    }
}

/// Configuration manager for loading and managing app config
#[derive(Debug, Default)]
pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    /// Load configuration from default locations
    ///
    /// Sources, later ones winning:
    /// 1. Built-in defaults
    /// 2. ./benin-tui.toml (working directory)
    /// 3. ~/.config/benin-tui/config.toml (user home)
    /// 4. Environment, e.g. `BENIN_TUI_DATA__DIR`, `BENIN_TUI_THEME__MODE`
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name("benin-tui").required(false))
            .add_source(File::from(Self::default_config_path()).required(false))
            .add_source(
                Environment::with_prefix("BENIN_TUI")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<AppConfig>()?;

        Ok(ConfigManager { config })
    }

    /// Load configuration from a specific file on top of the defaults
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?
            .try_deserialize::<AppConfig>()?;

        Ok(ConfigManager { config })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    /// Standard on-disk config path used by benin-tui.
    pub fn default_config_path() -> PathBuf {
        PathBuf::from(std::env::var("HOME").unwrap_or_default())
            .join(".config/benin-tui/config.toml")
    }

    /// Save configuration to a file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let toml_string = toml::to_string_pretty(&self.config)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
