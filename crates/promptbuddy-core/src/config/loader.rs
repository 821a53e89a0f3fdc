//! Settings loader — reads `~/.promptbuddy/settings.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Settings::default()`)
//! 2. JSON file at `~/.promptbuddy/settings.json`
//! 3. Environment variables `PROMPTBUDDY_<FIELD>` (override the file)
//!
//! A missing or unreadable file is not an error: the caller gets defaults
//! and a warning in the log. There is no schema versioning or migration.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::schema::Settings;
use crate::types::Mode;

/// Default settings file path.
pub fn get_settings_path() -> PathBuf {
    crate::utils::get_data_path().join("settings.json")
}

/// Load settings from the default path + env vars.
///
/// Falls back to `Settings::default()` if the file doesn't exist or can't
/// be parsed.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let settings_path = path.map(PathBuf::from).unwrap_or_else(get_settings_path);
    load_settings_from_path(&settings_path)
}

/// Load settings from a specific file path.
fn load_settings_from_path(path: &Path) -> Settings {
    if !path.exists() {
        info!("No settings file found at {}, using defaults", path.display());
        return apply_env_overrides(Settings::default());
    }

    debug!("Loading settings from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read settings file {}: {}", path.display(), e);
            return apply_env_overrides(Settings::default());
        }
    };

    let settings: Settings = match serde_json::from_str(&content) {
        Ok(s) => s,
        Err(e) => {
            warn!("Failed to parse settings JSON: {}", e);
            return apply_env_overrides(Settings::default());
        }
    };

    apply_env_overrides(settings)
}

/// Save settings to disk (pretty-printed JSON with camelCase keys).
pub fn save_settings(settings: &Settings, path: Option<&Path>) -> std::io::Result<()> {
    let settings_path = path.map(PathBuf::from).unwrap_or_else(get_settings_path);

    // Ensure parent directory exists
    if let Some(parent) = settings_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    std::fs::write(&settings_path, json)?;
    debug!("Settings saved to {}", settings_path.display());
    Ok(())
}

/// Apply environment variable overrides on top of loaded settings.
///
/// Supported overrides:
/// - `PROMPTBUDDY_MODEL` → `model`
/// - `PROMPTBUDDY_API_KEY` → `api_key`
/// - `PROMPTBUDDY_TONE` → `tone`
/// - `PROMPTBUDDY_MAX_WORDS` → `max_words`
/// - `PROMPTBUDDY_MODE` → `mode` (ignored with a warning if unparseable)
/// - `PROMPTBUDDY_API_BASE` → `api_base`
fn apply_env_overrides(mut settings: Settings) -> Settings {
    if let Ok(val) = std::env::var("PROMPTBUDDY_MODEL") {
        settings.model = val;
    }
    if let Ok(val) = std::env::var("PROMPTBUDDY_API_KEY") {
        settings.api_key = val;
    }
    if let Ok(val) = std::env::var("PROMPTBUDDY_TONE") {
        settings.tone = val;
    }
    if let Ok(val) = std::env::var("PROMPTBUDDY_MAX_WORDS") {
        if let Ok(n) = val.parse::<u32>() {
            settings.max_words = n;
        }
    }
    if let Ok(val) = std::env::var("PROMPTBUDDY_MODE") {
        match val.parse::<Mode>() {
            Ok(mode) => settings.mode = Some(mode),
            Err(e) => warn!("Ignoring PROMPTBUDDY_MODE: {}", e),
        }
    }
    if let Ok(val) = std::env::var("PROMPTBUDDY_API_BASE") {
        settings.api_base = Some(val);
    }

    settings
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
