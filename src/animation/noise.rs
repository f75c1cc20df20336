//! Noise field - a drifting film-grain overlay
//!
//! Every frame the surface is faded a little toward the background.
//! Every `refresh_interval_ms` a fresh tile of sparse dots is generated
//! and stamped across the whole surface, so the grain appears, lingers
//! for a few frames and dissolves.

use std::time::Duration;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::driver::AnimationState;
use super::visual::Visual;
use crate::render::{FrameStats, Rgb, Surface};

/// Grain settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Edge of the square tile that gets repeated (logical pixels)
    pub tile_size: f32,
    /// Grid step inside the tile, also the dot size
    pub cell_size: f32,
    /// Chance that a cell gets a dot
    pub density: f32,
    /// Dot alpha is uniform in [0, max_alpha)
    pub max_alpha: f32,
    /// Overall opacity of the layer
    pub opacity: f32,
    pub refresh_interval_ms: u64,
    /// Fade applied every frame
    pub fade_alpha: f32,
    pub color: Rgb,
    pub background: Rgb,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            tile_size: 256.0,
            cell_size: 4.0,
            density: 0.1,
            max_alpha: 0.3,
            opacity: 0.6,
            refresh_interval_ms: 100,
            fade_alpha: 0.05,
            color: Rgb::WHITE,
            background: Rgb::BLACK,
        }
    }
}

/// A dot inside the tile
#[derive(Clone, Copy, Debug, PartialEq)]
struct Grain {
    x: f32,
    y: f32,
    alpha: f32,
}

pub struct NoiseField {
    config: NoiseConfig,
    tile: Vec<Grain>,
    last_refresh: Option<Duration>,
    width: f32,
    height: f32,
}

impl NoiseField {
    pub fn new(config: NoiseConfig) -> Self {
        Self {
            config,
            tile: Vec::new(),
            last_refresh: None,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Dots in the current tile
    pub fn grain_count(&self) -> usize {
        self.tile.len()
    }

    fn due(&self, now: Duration) -> bool {
        match self.last_refresh {
            None => true,
            Some(last) => {
                now.saturating_sub(last) >= Duration::from_millis(self.config.refresh_interval_ms)
            }
        }
    }

    fn regenerate(&mut self, rng: &mut dyn RngCore) {
        self.tile.clear();
        if self.config.cell_size <= 0.0 || self.config.tile_size <= 0.0 {
            return;
        }

        let cells = (self.config.tile_size / self.config.cell_size).ceil() as usize;
        for row in 0..cells {
            for col in 0..cells {
                if rng.gen::<f32>() < self.config.density {
                    self.tile.push(Grain {
                        x: col as f32 * self.config.cell_size,
                        y: row as f32 * self.config.cell_size,
                        alpha: rng.gen::<f32>() * self.config.max_alpha,
                    });
                }
            }
        }
    }

    fn stamp(&self, surface: &mut dyn Surface) -> FrameStats {
        let mut stats = FrameStats::default();
        let step = self.config.tile_size;
        let size = self.config.cell_size;
        if step <= 0.0 || size <= 0.0 {
            return stats;
        }

        let mut oy = 0.0;
        while oy < self.height {
            let mut ox = 0.0;
            while ox < self.width {
                for grain in &self.tile {
                    let alpha = grain.alpha * self.config.opacity;
                    match surface.fill_rect(ox + grain.x, oy + grain.y, size, size, self.config.color, alpha) {
                        Ok(()) => stats.drawn += 1,
                        Err(_) => stats.skipped += 1,
                    }
                }
                ox += step;
            }
            oy += step;
        }

        stats
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new(NoiseConfig::default())
    }
}

impl Visual for NoiseField {
    fn name(&self) -> &str {
        "Noise"
    }

    fn prepare(&mut self, _rng: &mut dyn RngCore) {
        self.last_refresh = None;
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn render_frame(
        &mut self,
        state: &AnimationState,
        surface: &mut dyn Surface,
        rng: &mut dyn RngCore,
    ) -> FrameStats {
        surface.fade(self.config.background, self.config.fade_alpha);

        let now = state.last_frame_time.unwrap_or_default();
        if !self.due(now) {
            return FrameStats::default();
        }

        self.last_refresh = Some(now);
        self.regenerate(rng);
        log::debug!("Noise: {} grains per tile", self.grain_count());
        self.stamp(surface)
    }
}
