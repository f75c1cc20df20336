//! Animation driver - owns the frame loop lifecycle
//!
//! The driver sits between a host (a window, a test, a headless export)
//! and a `Visual`. The host hands it a surface and a `FrameScheduler`;
//! the driver asks for frames, advances the rotation on every tick and
//! cancels its pending frame when stopped.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized --start()--> Running --stop()--> Stopped
//! ```
//!
//! `Stopped` is terminal. Calling `stop()` any number of times is fine,
//! including before `start()`.

use std::time::Duration;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::visual::Visual;
use crate::render::{FrameStats, Surface};

/// Opaque token for a requested frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Something that can call the driver back once per display refresh
pub trait FrameScheduler {
    /// Ask for one more `tick`
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a request. Cancelling an unknown or spent handle is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Per-instance frame state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationState {
    /// Rotation about the x axis (radians)
    pub angle_x: f32,
    /// Rotation about the y axis (radians)
    pub angle_y: f32,
    /// The frame we are waiting on, if any
    pub frame_handle: Option<FrameHandle>,
    /// Timestamp of the current (or most recent) frame
    pub last_frame_time: Option<Duration>,
    /// Frames rendered so far
    pub frame_count: u64,
}

/// Where a driver is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Running,
    Stopped,
}

/// Rotation settings for an animation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub initial_angle_x: f32,
    pub initial_angle_y: f32,
    /// Added to `angle_x` every frame
    pub delta_x: f32,
    /// Added to `angle_y` every frame
    pub delta_y: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            initial_angle_x: 0.0,
            initial_angle_y: 0.0,
            delta_x: 0.0,
            delta_y: 0.008,
        }
    }
}

/// Drives a visual frame by frame
pub struct AnimationDriver<V: Visual, S: Surface, F: FrameScheduler, R: RngCore> {
    visual: V,
    surface: Option<S>,
    scheduler: F,
    rng: R,
    motion: MotionConfig,
    state: AnimationState,
    driver_state: DriverState,
    pixel_ratio: f32,
    last_stats: FrameStats,

    /// Status message
    pub status: String,
}

impl<V: Visual, S: Surface, F: FrameScheduler, R: RngCore> AnimationDriver<V, S, F, R> {
    pub fn new(visual: V, scheduler: F, rng: R, motion: MotionConfig) -> Self {
        Self {
            visual,
            surface: None,
            scheduler,
            rng,
            motion,
            state: AnimationState::default(),
            driver_state: DriverState::Uninitialized,
            pixel_ratio: 1.0,
            last_stats: FrameStats::default(),
            status: "Ready".to_string(),
        }
    }

    /// Attach to a surface and request the first frame
    ///
    /// A missing surface or one that cannot be sized leaves the driver
    /// uninitialized; nothing is scheduled and no error escapes.
    pub fn start(&mut self, surface: Option<S>, width: f32, height: f32, pixel_ratio: f32) {
        if self.driver_state != DriverState::Uninitialized {
            log::debug!("{}: start ignored while {:?}", self.visual.name(), self.driver_state);
            return;
        }

        let Some(mut surface) = surface else {
            self.status = "No drawing surface".to_string();
            log::warn!("{}: no drawing surface, not starting", self.visual.name());
            return;
        };

        if let Err(e) = surface.resize(width, height, pixel_ratio) {
            self.status = format!("Error: {}", e);
            log::error!("{}: failed to size surface: {}", self.visual.name(), e);
            return;
        }

        log::info!("Starting {} at {}x{} (ratio {})", self.visual.name(), width, height, pixel_ratio);

        self.visual.prepare(&mut self.rng);
        self.visual.resize(width, height);

        self.surface = Some(surface);
        self.pixel_ratio = pixel_ratio;
        self.state = AnimationState {
            angle_x: self.motion.initial_angle_x,
            angle_y: self.motion.initial_angle_y,
            frame_handle: Some(self.scheduler.request_frame()),
            last_frame_time: None,
            frame_count: 0,
        };
        self.driver_state = DriverState::Running;
        self.status = format!("Running: {}", self.visual.name());
    }

    /// Render one frame, if one was requested
    ///
    /// Returns the stats of the frame drawn, or `None` when the driver is
    /// not running (a late callback after `stop()` lands here).
    pub fn tick(&mut self, now: Duration) -> Option<FrameStats> {
        if self.driver_state != DriverState::Running {
            return None;
        }
        self.state.frame_handle.take()?;
        let surface = self.surface.as_mut()?;

        self.state.angle_x += self.motion.delta_x;
        self.state.angle_y += self.motion.delta_y;
        self.state.frame_count += 1;
        self.state.last_frame_time = Some(now);

        let stats = self.visual.render_frame(&self.state, surface, &mut self.rng);
        if stats.skipped > 0 {
            log::debug!("Frame {}: skipped {} points", self.state.frame_count, stats.skipped);
        }
        self.last_stats = stats;

        self.state.frame_handle = Some(self.scheduler.request_frame());
        Some(stats)
    }

    /// The host's drawing area changed size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.resize_with_ratio(width, height, self.pixel_ratio);
    }

    /// The drawing area or its device pixel ratio changed
    ///
    /// The point cloud is not resampled; only the backing store and the
    /// projection center follow the new size.
    pub fn resize_with_ratio(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        if self.driver_state != DriverState::Running {
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        match surface.resize(width, height, pixel_ratio) {
            Ok(()) => {
                self.pixel_ratio = pixel_ratio;
                self.visual.resize(width, height);
                log::debug!("{}: resized to {}x{}", self.visual.name(), width, height);
            }
            Err(e) => log::warn!("{}: resize ignored: {}", self.visual.name(), e),
        }
    }

    /// Change rotation speed without touching the current angles
    pub fn set_motion(&mut self, motion: MotionConfig) {
        self.motion = motion;
    }

    /// Cancel any pending frame and stop for good
    pub fn stop(&mut self) {
        if let Some(handle) = self.state.frame_handle.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.driver_state == DriverState::Running {
            log::info!("Stopped {}", self.visual.name());
        }
        self.driver_state = DriverState::Stopped;
        self.status = "Stopped".to_string();
    }

    pub fn driver_state(&self) -> DriverState {
        self.driver_state
    }

    /// Check if frames are being produced
    pub fn is_running(&self) -> bool {
        self.driver_state == DriverState::Running
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn visual(&self) -> &V {
        &self.visual
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Stats of the most recent frame
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }
}

#[cfg(test)]
impl<V: Visual, S: Surface, F: FrameScheduler, R: RngCore> AnimationDriver<V, S, F, R> {
    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }
}

impl<V: Visual, S: Surface, F: FrameScheduler, R: RngCore> Drop for AnimationDriver<V, S, F, R> {
    fn drop(&mut self) {
        self.stop();
    }
}
