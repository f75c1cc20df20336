//! Render module - drawing surfaces and the dot rasterizer
//!
//! This module provides:
//! - `Surface` trait for any resizable 2D raster target
//! - `PixelSurface`, an in-memory RGBA implementation
//! - `Rasterizer` for drawing projected points with optional persistence

mod rasterizer;
mod surface;

pub use rasterizer::{FrameStats, RasterConfig, Rasterizer};
pub use surface::{PixelSurface, Rgb, Surface};
