//! Game settings and preferences
//!
//! Persisted separately from high scores in LocalStorage.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence everything
    pub muted: bool,

    // === Gameplay ===
    /// Let the autopilot play (attract/demo mode)
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_volume: 0.5,
            sfx_volume: 1.0,
            muted: false,
            autopilot: false,
        }
    }
}

impl Settings {
    /// Effective music volume (respects mute)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.music_volume.clamp(0.0, 1.0)
        }
    }

    /// Effective effects volume (respects mute)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.sfx_volume.clamp(0.0, 1.0)
        }
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "ring_dodge_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> crate::error::Result<()> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| crate::GameError::Storage("no LocalStorage".into()))?;

        let json = serde_json::to_string(self)?;
        storage
            .set_item(Self::STORAGE_KEY, &json)
            .map_err(|e| crate::GameError::Storage(format!("{:?}", e)))?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) -> crate::error::Result<()> {
        // No-op for native
        Ok(())
    }
}
