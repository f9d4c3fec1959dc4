//! Persisted application settings.

use crate::app::style::Theme;
use crate::i18n::LanguagePreference;
use anyhow::{Context, Result};
use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const MIN_THUMB_SIZE: u32 = 48;
pub const MAX_THUMB_SIZE: u32 = 200;
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub language: LanguagePreference,
    pub theme: Theme,
    pub sidebar_open: bool,
    pub thumbnail_size: u32,
    /// Folder holding `sample_top.jpg` and friends for the recommend button.
    pub samples_dir: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: LanguagePreference::System,
            theme: Theme::Dark,
            sidebar_open: true,
            thumbnail_size: 100,
            samples_dir: None,
        }
    }
}

impl AppSettings {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("kr", "wardrobe", "Wardrobe")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read settings: {}", path.display()))?;
        let mut settings: AppSettings =
            serde_json::from_str(&raw).context("settings file is not valid JSON")?;
        settings.thumbnail_size = clamp_thumb_size(settings.thumbnail_size);
        Ok(settings)
    }

    /// Loads from the platform config dir, falling back to defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(settings) => {
                tracing::info!("settings loaded from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("using default settings: {e:#}");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?;
        tracing::info!("settings saved to {}", path.display());
        Ok(())
    }

    pub fn save_default(&self) -> Result<()> {
        let path = Self::default_path().context("no config directory on this platform")?;
        self.save(&path)
    }

    /// Samples folder, or `images/` next to the working directory.
    pub fn samples_dir(&self) -> PathBuf {
        self.samples_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("images"))
    }
}

pub fn clamp_thumb_size(size: u32) -> u32 {
    size.clamp(MIN_THUMB_SIZE, MAX_THUMB_SIZE)
}
