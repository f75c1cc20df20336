//! Dot rasterizer - draws one frame of projected points
//!
//! ## How it works
//!
//! - The previous frame is either cleared or faded toward the background
//!   (a short afterglow, like a CRT with persistence)
//! - Each point becomes a filled square centered on its screen position
//! - Square side comes from the projection, alpha from depth shading
//!
//! Filled rectangles are the cheapest primitive a surface offers, and a
//! frame can hold a few thousand of them.

use serde::{Deserialize, Serialize};

use super::surface::{Rgb, Surface};
use crate::effects::ProjectedPoint;

/// Display settings for the rasterizer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Dot color
    pub accent: Rgb,

    /// Color used for persistence fades
    pub background: Rgb,

    /// Fade alpha applied before each frame (None = clear every frame)
    pub persistence_alpha: Option<f32>,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            accent: Rgb::ACCENT,
            background: Rgb::BLACK,
            persistence_alpha: None,
        }
    }
}

/// What happened while drawing a frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Points drawn
    pub drawn: usize,
    /// Points whose draw call failed and were skipped
    pub skipped: usize,
    /// Points removed before drawing (behind the viewer)
    pub culled: usize,
}

/// Draws projected points onto a surface
#[derive(Clone, Debug, Default)]
pub struct Rasterizer {
    pub config: RasterConfig,
}

impl Rasterizer {
    pub fn new(config: RasterConfig) -> Self {
        Self { config }
    }

    /// Prepare the surface for a new frame
    pub fn begin_frame<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self.config.persistence_alpha {
            Some(alpha) => surface.fade(self.config.background, alpha),
            None => surface.clear(),
        }
    }

    /// Clear (or fade) the surface and draw every point
    pub fn draw_frame<S: Surface + ?Sized>(&self, surface: &mut S, points: &[ProjectedPoint]) -> FrameStats {
        self.begin_frame(surface);
        self.draw_points(surface, points)
    }

    /// Draw points without touching the previous contents
    ///
    /// A point that fails to draw is skipped; the rest of the frame goes on.
    pub fn draw_points<S: Surface + ?Sized>(&self, surface: &mut S, points: &[ProjectedPoint]) -> FrameStats {
        let mut stats = FrameStats::default();

        for point in points {
            let half = point.size / 2.0;
            match surface.fill_rect(
                point.screen_x - half,
                point.screen_y - half,
                point.size,
                point.size,
                self.config.accent,
                point.depth_alpha,
            ) {
                Ok(()) => stats.drawn += 1,
                Err(e) => {
                    log::trace!("Skipping dot at ({}, {}): {}", point.screen_x, point.screen_y, e);
                    stats.skipped += 1;
                }
            }
        }

        stats
    }
}
