//! User settings persisted across launches through `eframe::Storage`.

use serde::{Deserialize, Serialize};

pub const SETTINGS_STORAGE_KEY: &str = "reel_central.settings.v1";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Mirrors the platform reduced-motion preference; also set by the
    /// `--reduced-motion` flag.
    pub reduce_motion: bool,
    /// Last user-chosen playback volume, 0.0..=1.0.
    pub volume: f32,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            reduce_motion: false,
            volume: ui_core::media::DEFAULT_TARGET_VOLUME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_json() {
        let settings = UserSettings {
            reduce_motion: true,
            volume: 0.8,
        };
        let text = serde_json::to_string(&settings).expect("serialize");
        let back: UserSettings = serde_json::from_str(&text).expect("deserialize");
        assert!(back.reduce_motion);
        assert!((back.volume - 0.8).abs() < 1e-5);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let back: UserSettings = serde_json::from_str("{}").expect("deserialize");
        assert!(!back.reduce_motion);
        assert!((back.volume - ui_core::media::DEFAULT_TARGET_VOLUME).abs() < 1e-5);
    }
}
