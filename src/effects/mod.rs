//! Effects module - the per-frame transform pipeline
//!
//! This module provides:
//! - `FrameTransform` for rotating and projecting points (perspective or orthographic)
//! - Depth shading into `ProjectedPoint::depth_alpha`
//! - `Modulator` trait and the flicker / scanline modulators layered on top

mod modulation;
mod projection;
mod traits;

pub use modulation::{FlickerConfig, ModulationConfig, ScanlineConfig};
pub use projection::{
    FrameTransform, ProjectedPoint, ProjectionConfig, ProjectionMode, ShadingConfig,
};
pub use traits::ModulationChain;
