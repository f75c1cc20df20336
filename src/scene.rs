//! Scene presets - ready-made visuals with their settings
//!
//! Each preset bundles a path (or none, for the noise field) with the
//! sampler, projection, modulation and motion settings that make it look
//! right.

use std::f32::consts::FRAC_PI_4;

use serde::{Deserialize, Serialize};

use crate::animation::{DotMatrix, DotMatrixConfig, MotionConfig, NoiseConfig, NoiseField, Visual};
use crate::effects::{
    FlickerConfig, ModulationConfig, ProjectionConfig, ProjectionMode, ScanlineConfig,
    ShadingConfig,
};
use crate::shapes::{FillRule, PathSource, SamplerConfig, ShapePath, LOGO_PATH, LOGO_VIEW_BOX};

/// Cells along one edge of the cube face
const CUBE_CELLS: usize = 14;

/// Available scenes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum SceneKind {
    #[default]
    Logo,
    Cube,
    Noise,
}

impl SceneKind {
    pub fn all() -> &'static [SceneKind] {
        &[SceneKind::Logo, SceneKind::Cube, SceneKind::Noise]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SceneKind::Logo => "Logo",
            SceneKind::Cube => "Cube",
            SceneKind::Noise => "Noise",
        }
    }
}

/// Everything needed to build and drive one scene
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub kind: SceneKind,
    /// Path to sample; unused by the noise field
    pub source: Option<PathSource>,
    pub dot_matrix: DotMatrixConfig,
    pub noise: NoiseConfig,
    pub motion: MotionConfig,
    /// Preferred drawing size (logical pixels)
    pub width: f32,
    pub height: f32,
}

impl SceneConfig {
    pub fn preset(kind: SceneKind) -> Self {
        match kind {
            SceneKind::Logo => Self::logo(),
            SceneKind::Cube => Self::cube(),
            SceneKind::Noise => Self::noise(),
        }
    }

    /// The gear emblem: outer ring spins, inner letters stay put
    pub fn logo() -> Self {
        Self {
            kind: SceneKind::Logo,
            source: Some(logo_source()),
            dot_matrix: DotMatrixConfig {
                sampler: SamplerConfig::default(),
                projection: ProjectionConfig {
                    mode: ProjectionMode::Orthographic,
                    scale: 1.3,
                    dot_size: 2.0,
                    center_x: 200.0,
                    center_y: 200.0,
                    ..Default::default()
                },
                shading: ShadingConfig {
                    min_alpha: 0.2,
                    depth_range: 75.0,
                    ..Default::default()
                },
                modulation: ModulationConfig {
                    flicker: Some(FlickerConfig {
                        probability: 0.02,
                        factor: 0.3,
                    }),
                    scanline: Some(ScanlineConfig::default()),
                },
                ..Default::default()
            },
            noise: NoiseConfig::default(),
            motion: MotionConfig {
                initial_angle_x: 0.0,
                initial_angle_y: 0.0,
                delta_x: 0.0,
                delta_y: 0.008,
            },
            width: 400.0,
            height: 400.0,
        }
    }

    /// A hollow cube seen corner-on
    pub fn cube() -> Self {
        let edge = CUBE_CELLS as f32;
        Self {
            kind: SceneKind::Cube,
            source: Some(PathSource {
                data: format!("M0 0H{edge}V{edge}H0Z"),
                view_box: (edge, edge),
                fill_rule: FillRule::NonZero,
                secondary: None,
            }),
            dot_matrix: DotMatrixConfig {
                sampler: SamplerConfig {
                    grid_size: CUBE_CELLS,
                    pixel_stride: 1,
                    depth_layers: CUBE_CELLS,
                    z_spacing: 12.0,
                    coordinate_scale: 12.0,
                    outer_radius_threshold: None,
                    keep_inner: true,
                    interior_fill: 0.02,
                },
                projection: ProjectionConfig {
                    mode: ProjectionMode::Perspective,
                    field_of_view: 400.0,
                    viewer_distance: 300.0,
                    dot_size: 2.0,
                    center_x: 160.0,
                    center_y: 160.0,
                    ..Default::default()
                },
                shading: ShadingConfig::default(),
                modulation: ModulationConfig {
                    flicker: Some(FlickerConfig {
                        probability: 0.02,
                        factor: 0.5,
                    }),
                    scanline: None,
                },
                ..Default::default()
            },
            noise: NoiseConfig::default(),
            motion: MotionConfig {
                initial_angle_x: FRAC_PI_4,
                initial_angle_y: FRAC_PI_4,
                delta_x: 0.002,
                delta_y: 0.003,
            },
            width: 320.0,
            height: 320.0,
        }
    }

    /// Film grain on black
    pub fn noise() -> Self {
        Self {
            kind: SceneKind::Noise,
            source: None,
            dot_matrix: DotMatrixConfig::default(),
            noise: NoiseConfig::default(),
            motion: MotionConfig {
                delta_y: 0.0,
                ..Default::default()
            },
            width: 640.0,
            height: 360.0,
        }
    }

    /// Build the visual for this scene
    pub fn build_visual(&self) -> Box<dyn Visual> {
        match (self.kind, &self.source) {
            (SceneKind::Noise, _) => Box::new(NoiseField::new(self.noise.clone())),
            (kind, Some(source)) => Box::new(DotMatrix::new(kind.name(), source.clone(), self.dot_matrix.clone())),
            (kind, None) => {
                log::warn!("{} scene has no path, falling back to the logo", kind.name());
                Box::new(DotMatrix::new(kind.name(), logo_source(), self.dot_matrix.clone()))
            }
        }
    }

    /// Build a dot matrix for an imported shape, keeping this scene's look
    pub fn build_visual_for_shape(&self, name: &str, shape: ShapePath) -> Box<dyn Visual> {
        Box::new(DotMatrix::from_shape(name, shape, self.dot_matrix.clone()))
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::logo()
    }
}

fn logo_source() -> PathSource {
    PathSource {
        data: LOGO_PATH.to_string(),
        view_box: LOGO_VIEW_BOX,
        fill_rule: FillRule::NonZero,
        secondary: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::PointCloud;
    use crate::test_support::SequenceRng;

    #[test]
    fn test_cube_is_hollow() {
        let scene = SceneConfig::cube();
        let source = scene.source.as_ref().unwrap();
        // No stray interior points
        let mut rng = SequenceRng::constant(u32::MAX);
        let cloud = PointCloud::from_source(source, &scene.dot_matrix.sampler, &mut rng);

        // Surface of a 14x14x14 lattice
        assert_eq!(cloud.len(), 14 * 14 * 14 - 12 * 12 * 12);
        assert!(cloud.points().iter().all(|p| p.is_outer));

        let xs: Vec<f32> = cloud.points().iter().map(|p| p.x).collect();
        let zs: Vec<f32> = cloud.points().iter().map(|p| p.z).collect();
        let min = |v: &[f32]| v.iter().cloned().fold(f32::MAX, f32::min);
        let max = |v: &[f32]| v.iter().cloned().fold(f32::MIN, f32::max);
        assert_eq!((min(&xs), max(&xs)), (-84.0, 72.0));
        assert_eq!((min(&zs), max(&zs)), (-84.0, 72.0));
    }

    #[test]
    fn test_cube_interior_fill() {
        let scene = SceneConfig::cube();
        let source = scene.source.as_ref().unwrap();
        // Every roll succeeds
        let mut rng = SequenceRng::constant(0);
        let cloud = PointCloud::from_source(source, &scene.dot_matrix.sampler, &mut rng);
        assert_eq!(cloud.len(), 14 * 14 * 14);
    }

    #[test]
    fn test_logo_has_spinning_and_static_groups() {
        let scene = SceneConfig::logo();
        let source = scene.source.as_ref().unwrap();
        let mut rng = SequenceRng::constant(u32::MAX);
        let cloud = PointCloud::from_source(source, &scene.dot_matrix.sampler, &mut rng);

        assert!(!cloud.is_empty());
        assert!(cloud.points().iter().any(|p| p.is_outer));
        assert!(cloud.points().iter().any(|p| !p.is_outer));
        for p in cloud.points().iter().filter(|p| p.is_outer) {
            assert!((p.x * p.x + p.y * p.y).sqrt() > 45.0);
        }
    }

    #[test]
    fn test_presets_match_kind() {
        for kind in SceneKind::all() {
            let scene = SceneConfig::preset(*kind);
            assert_eq!(scene.kind, *kind);
            assert_eq!(scene.build_visual().name(), kind.name());
        }
        assert!(SceneConfig::noise().source.is_none());
        assert_eq!(SceneConfig::logo().dot_matrix.projection.mode, ProjectionMode::Orthographic);
        assert_eq!(SceneConfig::cube().dot_matrix.projection.mode, ProjectionMode::Perspective);
    }

    #[test]
    fn test_preset_serializes() {
        let scene = SceneConfig::cube();
        let json = serde_json::to_string(&scene).unwrap();
        let back: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scene);
    }
}
