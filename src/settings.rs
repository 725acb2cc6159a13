//! Persisted demo settings
//!
//! Small JSON file holding the startup state both demos read. A missing or
//! malformed file falls back to defaults; saving is on demand.

use crate::audio::TONE_HZ;
use crate::display::ScaleFilter;
use crate::effects::DEFAULT_ALPHA;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scanline_alpha: u8,
    pub filter: ScaleFilter,
    pub tone_hz: f32,
}

impl Settings {
    pub const FILE: &'static str = "settings.json";

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }

    /// Load settings, falling back to defaults when the file is absent or
    /// unreadable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scanline_alpha: DEFAULT_ALPHA,
            filter: ScaleFilter::default(),
            tone_hz: TONE_HZ,
        }
    }
}
