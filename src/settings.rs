use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::effects::ProjectionMode;
use crate::render::Rgb;
use crate::scene::SceneKind;
use crate::ViewerApp;

/// Returns the path to the settings file: `~/.config/dotrig/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("dotrig");
    path.push("settings.json");
    path
}

/// Persisted viewer settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    // Scene
    pub scene: SceneKind,
    pub show_settings: bool,
    pub last_svg: Option<PathBuf>,

    // Motion
    pub speed: f32,

    // Projection (None = preset's own mode)
    pub projection: Option<ProjectionMode>,

    // Modulation
    pub enable_flicker: bool,
    pub enable_scanline: bool,

    // Display
    pub enable_persistence: bool,
    pub persistence: f32,
    pub accent: Rgb,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            scene: SceneKind::Logo,
            show_settings: true,
            last_svg: None,

            speed: 1.0,

            projection: None,

            enable_flicker: true,
            enable_scanline: true,

            enable_persistence: false,
            persistence: 0.2,
            accent: Rgb::ACCENT,
        }
    }
}

impl ViewerSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        self.save_to(&settings_path());
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to write settings: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Extract current settings from the running viewer.
    pub fn from_app(app: &ViewerApp) -> Self {
        Self {
            scene: app.selected_scene,
            show_settings: app.show_settings,
            last_svg: app.last_svg.clone(),

            speed: app.speed,

            projection: app.projection_override,

            enable_flicker: app.enable_flicker,
            enable_scanline: app.enable_scanline,

            enable_persistence: app.enable_persistence,
            persistence: app.persistence,
            accent: app.accent,
        }
    }

    /// Apply loaded settings to the running viewer.
    pub fn apply(&self, app: &mut ViewerApp) {
        app.selected_scene = self.scene;
        app.show_settings = self.show_settings;
        app.last_svg = self.last_svg.clone();

        app.speed = self.speed;

        app.projection_override = self.projection;

        app.enable_flicker = self.enable_flicker;
        app.enable_scanline = self.enable_scanline;

        app.enable_persistence = self.enable_persistence;
        app.persistence = self.persistence;
        app.accent = self.accent;

        app.needs_restart = true;
    }
}
