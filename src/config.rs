use crate::error::ConfigError;
use crate::model::{default_games, default_platforms, Catalog, Game, Platform};
use crate::style::{self, Theme};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub navigation: NavigationConfig,
    pub catalog: CatalogConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: Theme,
}

/// Initial window size
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Inner width (in pixels)
    pub width: f32,
    /// Inner height (in pixels)
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: style::WINDOW_WIDTH_DEFAULT,
            height: style::WINDOW_HEIGHT_DEFAULT,
        }
    }
}

/// Navigation behavior
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Seed for the random picks; unset means a fresh seed every run
    pub seed: Option<u64>,
}

/// Lists shown on the root screen
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub platforms: Vec<Platform>,
    pub games: Vec<Game>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            platforms: default_platforms(),
            games: default_games(),
        }
    }
}

impl CatalogConfig {
    /// Build the catalog, falling back to the built-in lists if this one is
    /// empty or has duplicate names.
    pub fn build(&self) -> Catalog {
        match Catalog::new(self.platforms.clone(), self.games.clone()) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Invalid catalog in config: {}", e);
                log::error!("Using built-in catalog");
                Catalog::default()
            }
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        directories::ProjectDirs::from("", "", "gamenav")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<Config>(contents)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("{}, using defaults", e);
                return Config::default();
            }
        };
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Failed to load config file {}: {}", path.display(), e);
                log::warn!("Using default configuration");
                Config::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Record `theme` in the config file at `path`, keeping the other
    /// settings already stored there. A file that exists but does not load
    /// is left untouched and its error is returned.
    pub fn save_theme(path: &Path, theme: Theme) -> Result<(), ConfigError> {
        let mut config = if path.exists() {
            Self::load_from(path)?
        } else {
            Config::default()
        };
        config.theme.mode = theme;
        config.save_to(path)
    }
}
