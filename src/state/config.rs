//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for the share menu's
//! behavior flags and the default article snapshot, with automatic
//! load/save to disk.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/sharecard/config.json`
//! - macOS: `~/Library/Application Support/sharecard/config.json`
//! - Windows: `%APPDATA%/sharecard/config.json`

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ShareContext;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
const APP_NAME: &str = "sharecard";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// Menu Behavior
// ============================================================================

/// Behavior flags for the share menu.
///
/// The control historically shipped in two variants; each divergent feature
/// is a flag here rather than a hard-coded choice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuBehavior {
    /// Tabbing past the last link (or shift-tabbing before the first)
    /// closes the menu and returns focus to the share button.
    #[serde(default = "default_true")]
    pub tab_wrap_closes: bool,
    /// Opening the menu defers the focus move to the first link, letting
    /// the opening layout settle first.
    #[serde(default = "default_true")]
    pub defer_focus_on_open: bool,
    /// Emit a log event for every dispatched share.
    #[serde(default)]
    pub track_shares: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for MenuBehavior {
    fn default() -> Self {
        Self {
            tab_wrap_closes: true,
            defer_focus_on_open: true,
            track_shares: false,
        }
    }
}

// ============================================================================
// Article Defaults
// ============================================================================

/// Default article snapshot, overridable from the command line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleDefaults {
    /// Canonical URL of the article page.
    pub url: String,
    /// Article title.
    pub title: String,
    /// Article description text.
    pub description: String,
    /// URL of the article's lead image, if any.
    pub image: Option<String>,
}

impl Default for ArticleDefaults {
    fn default() -> Self {
        Self {
            url: "https://example.com/article".to_string(),
            title: ShareContext::DEFAULT_TITLE.to_string(),
            description: String::new(),
            image: None,
        }
    }
}

impl ArticleDefaults {
    /// Builds the immutable share context from these defaults.
    #[must_use]
    pub fn to_context(&self) -> ShareContext {
        ShareContext::new(
            self.url.clone(),
            self.title.clone(),
            self.description.clone(),
            self.image.clone(),
        )
    }
}

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// Serialized to JSON and stored in the user's configuration directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Share menu behavior flags.
    #[serde(default)]
    pub behavior: MenuBehavior,
    /// Default article snapshot.
    #[serde(default)]
    pub article: ArticleDefaults,
}

impl AppConfig {
    /// Loads the configuration from disk, falling back to defaults when the
    /// file is malformed. A missing file is created with the defaults so
    /// there is always a file to edit.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Malformed config at {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => {
                let config = Self::default();
                if let Err(e) = config.save_to(path) {
                    tracing::warn!("Could not write default config to {}: {e}", path.display());
                }
                config
            }
        }
    }

    /// Writes the configuration to `path`, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the
    /// file cannot be written.
    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

// ============================================================================
// Tests
// ============================================================================
