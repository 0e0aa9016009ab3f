//! This module handles the gallery's configuration, including loading and
//! saving the slide list to a `gallery.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_carousel::config::{self, GalleryConfig};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.master_spinner = Some(false);
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "gallery.toml";
const APP_NAME: &str = "IcedCarousel";

/// Default diagnostics buffer capacity when the file does not set one.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Slide source strings (paths or URLs), in display order.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Defer per-slide spinners to one carousel-wide overlay.
    #[serde(default)]
    pub master_spinner: Option<bool>,
    /// Render slides as background fills instead of inline images.
    #[serde(default)]
    pub bg_slides: Option<bool>,
    /// How many diagnostic events to retain.
    #[serde(default)]
    pub diagnostics_capacity: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            master_spinner: Some(true),
            bg_slides: Some(false),
            diagnostics_capacity: Some(DEFAULT_DIAGNOSTICS_CAPACITY),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<GalleryConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(GalleryConfig::default())
}

pub fn save(config: &GalleryConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a configuration from an explicit path.
///
/// # Errors
///
/// Returns an error when the file cannot be read or does not parse. A
/// malformed slide list is surfaced rather than silently replaced, since
/// the config is the gallery's entire content.
pub fn load_from_path(path: &Path) -> Result<GalleryConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &GalleryConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
