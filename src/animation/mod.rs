//! Animation module - the frame loop and the things it animates
//!
//! This module provides:
//! - `AnimationDriver` with its `FrameScheduler` seam and lifecycle
//! - `Visual` trait for per-frame content
//! - `DotMatrix` (rotating point cloud) and `NoiseField` (grain overlay)

mod driver;
mod noise;
mod visual;

pub use driver::{AnimationDriver, FrameHandle, FrameScheduler, MotionConfig};
pub use noise::{NoiseConfig, NoiseField};
pub use visual::{DotMatrix, DotMatrixConfig, Visual};
