//! Game settings and preferences
//!
//! Persisted separately from the high score, as JSON under its own key.

use serde::{Deserialize, Serialize};

use crate::platform::storage::{KeyValueStore, StorageError};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    /// Background clouds drawn at this preset
    pub fn cloud_count(&self) -> usize {
        match self {
            QualityPreset::Low => 0,
            QualityPreset::Medium => 2,
            QualityPreset::High => 4,
        }
    }

    /// Triangle fan segments per circle
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 8,
            QualityPreset::Medium => 16,
            QualityPreset::High => 24,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Scrolling clouds in the background
    pub clouds: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Accessibility ===
    /// Reduced motion (static clouds, no wing flapping)
    pub reduced_motion: bool,
    /// High contrast mode
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            clouds: true,

            // HUD
            show_fps: false,

            // Audio
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            // Accessibility
            reduced_motion: false,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    pub const STORAGE_KEY: &'static str = "flappy_bird_settings";

    /// Create settings from a quality preset (applies preset defaults)
    pub fn from_preset(preset: QualityPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a quality preset (updates quality-dependent settings)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;

        // Low preset disables some effects for performance
        if preset == QualityPreset::Low {
            self.clouds = false;
        }
    }

    /// Number of clouds to draw (respects reduced_motion)
    pub fn effective_clouds(&self) -> usize {
        if !self.clouds || self.reduced_motion {
            0
        } else {
            self.quality.cloud_count()
        }
    }

    /// Effective wing animation (respects reduced_motion)
    pub fn effective_wing_animation(&self) -> bool {
        !self.reduced_motion
    }

    /// Gain applied to sound effects
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        log::info!("Audio {}", if self.muted { "muted" } else { "unmuted" });
    }

    /// Load settings, falling back to defaults
    pub fn load(store: &impl KeyValueStore) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from storage");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(self).map_err(|e| StorageError::Write {
            key: Self::STORAGE_KEY.to_string(),
            reason: e.to_string(),
        })?;
        store.set(Self::STORAGE_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::MemoryStore;

    #[test]
    fn test_low_preset_disables_clouds() {
        let settings = Settings::from_preset(QualityPreset::Low);
        assert!(!settings.clouds);
        assert_eq!(settings.effective_clouds(), 0);

        let settings = Settings::from_preset(QualityPreset::High);
        assert_eq!(settings.effective_clouds(), 4);
    }

    #[test]
    fn test_reduced_motion() {
        let mut settings = Settings::default();
        assert!(settings.effective_clouds() > 0);
        assert!(settings.effective_wing_animation());

        settings.reduced_motion = true;
        assert_eq!(settings.effective_clouds(), 0);
        assert!(!settings.effective_wing_animation());
    }

    #[test]
    fn test_volume_and_mute() {
        let mut settings = Settings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            ..Default::default()
        };
        assert!((settings.effective_volume() - 0.25).abs() < 1e-6);
        settings.toggle_mute();
        assert_eq!(settings.effective_volume(), 0.0);
        settings.toggle_mute();
        assert!(settings.effective_volume() > 0.0);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            show_fps: true,
            muted: true,
            quality: QualityPreset::High,
            ..Default::default()
        };
        settings.save(&mut store).expect("save succeeds");
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_partial_and_invalid_json() {
        let mut store = MemoryStore::new();
        store
            .set(Settings::STORAGE_KEY, r#"{"muted": true}"#)
            .expect("memory writes succeed");
        let settings = Settings::load(&store);
        assert!(settings.muted);
        assert_eq!(settings.quality, QualityPreset::Medium);

        store
            .set(Settings::STORAGE_KEY, "{not json")
            .expect("memory writes succeed");
        assert_eq!(Settings::load(&store), Settings::default());
    }
}
