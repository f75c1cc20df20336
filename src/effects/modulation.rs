//! Alpha modulators - flicker and scanline banding
//!
//! Flicker dims a small random subset of points each frame, like a lossy
//! hologram. The scanline is a bright horizontal band that sweeps down the
//! surface; everything outside it is dimmed.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::projection::ProjectedPoint;
use super::traits::{Modulator, ModulationChain};

/// Random per-point dimming
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlickerConfig {
    /// Chance that a point flickers in a given frame
    pub probability: f32,
    /// Alpha multiplier for flickering points
    pub factor: f32,
}

impl Default for FlickerConfig {
    fn default() -> Self {
        Self {
            probability: 0.02,
            factor: 0.5,
        }
    }
}

/// Sweeping horizontal band
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanlineConfig {
    /// Band advance per frame
    pub speed: f32,
    /// Band position wraps at this value
    pub period: f32,
    /// Screen y is multiplied by this before comparing with the band
    pub y_factor: f32,
    pub band_height: f32,
    /// Alpha multiplier outside the band
    pub dim: f32,
}

impl Default for ScanlineConfig {
    fn default() -> Self {
        Self {
            speed: 0.2,
            period: 150.0,
            y_factor: 0.2,
            band_height: 5.0,
            dim: 0.6,
        }
    }
}

/// Which modulators a visual uses
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulationConfig {
    pub flicker: Option<FlickerConfig>,
    pub scanline: Option<ScanlineConfig>,
}

impl ModulationConfig {
    /// Build a chain from the configured modulators
    pub fn build_chain(&self) -> ModulationChain {
        let mut chain = ModulationChain::new();

        if let Some(scanline) = &self.scanline {
            chain.add(Scanline::new(scanline.clone()));
        }
        if let Some(flicker) = &self.flicker {
            chain.add(Flicker::new(flicker.clone()));
        }

        chain
    }
}

pub struct Flicker {
    pub config: FlickerConfig,
    pub enabled: bool,
}

impl Flicker {
    pub fn new(config: FlickerConfig) -> Self {
        Self {
            config,
            enabled: true,
        }
    }
}

impl Modulator for Flicker {
    fn modulate(&self, point: &mut ProjectedPoint, _frame: u64, rng: &mut dyn RngCore) {
        if rng.gen::<f32>() < self.config.probability {
            point.depth_alpha *= self.config.factor;
        }
    }

    fn name(&self) -> &str {
        "Flicker"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

pub struct Scanline {
    pub config: ScanlineConfig,
    pub enabled: bool,
}

impl Scanline {
    pub fn new(config: ScanlineConfig) -> Self {
        Self {
            config,
            enabled: true,
        }
    }

    /// Whether screen row `y` is lit at `frame`
    pub fn in_band(&self, y: f32, frame: u64) -> bool {
        let c = &self.config;
        let position = (frame as f32 * c.speed).rem_euclid(c.period.max(f32::EPSILON));
        let top = y * c.y_factor;
        position > top && position < top + c.band_height
    }
}

impl Modulator for Scanline {
    fn modulate(&self, point: &mut ProjectedPoint, frame: u64, _rng: &mut dyn RngCore) {
        if !self.in_band(point.screen_y, frame) {
            point.depth_alpha *= self.config.dim;
        }
    }

    fn name(&self) -> &str {
        "Scanline"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
