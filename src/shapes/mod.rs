//! Shapes module - vector paths and the point clouds sampled from them
//!
//! This module provides:
//! - `ShapePath` and `PathCommand` for the move/line/curve/close grammar
//! - `CoverageGrid` for filling a path onto a coarse grid
//! - `sample_point_cloud` / `PointCloud` for extruding the grid into 3D points
//! - The built-in logo asset

mod coverage;
mod logo;
mod path;
mod sampler;

pub use logo::{LOGO_PATH, LOGO_VIEW_BOX};
pub use path::{FillRule, ShapePath};
pub use sampler::{sample_point_cloud, PathSource, Point3D, PointCloud, SamplerConfig};
