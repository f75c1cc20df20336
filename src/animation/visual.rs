//! Visuals - what an animation driver draws each frame
//!
//! The `Visual` trait is the seam between the frame loop and the content.
//! `DotMatrix` is the rotating point cloud; other visuals (such as the
//! noise field) share the same lifecycle.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::driver::AnimationState;
use crate::effects::{
    FrameTransform, ModulationChain, ModulationConfig, ProjectedPoint, ProjectionConfig,
    ShadingConfig,
};
use crate::render::{FrameStats, RasterConfig, Rasterizer, Surface};
use crate::shapes::{sample_point_cloud, PathSource, PointCloud, SamplerConfig, ShapePath};

/// Something an `AnimationDriver` can animate
pub trait Visual {
    /// Get the name of this visual (for UI display)
    fn name(&self) -> &str;

    /// One-time setup, run when the driver starts
    fn prepare(&mut self, rng: &mut dyn RngCore);

    /// The drawing area changed size (logical pixels)
    fn resize(&mut self, width: f32, height: f32);

    /// Draw one frame
    fn render_frame(
        &mut self,
        state: &AnimationState,
        surface: &mut dyn Surface,
        rng: &mut dyn RngCore,
    ) -> FrameStats;
}

impl<V: Visual + ?Sized> Visual for Box<V> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn prepare(&mut self, rng: &mut dyn RngCore) {
        (**self).prepare(rng)
    }

    fn resize(&mut self, width: f32, height: f32) {
        (**self).resize(width, height)
    }

    fn render_frame(
        &mut self,
        state: &AnimationState,
        surface: &mut dyn Surface,
        rng: &mut dyn RngCore,
    ) -> FrameStats {
        (**self).render_frame(state, surface, rng)
    }
}

/// Everything needed to turn a path into an animated dot matrix
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotMatrixConfig {
    pub sampler: SamplerConfig,
    pub projection: ProjectionConfig,
    pub shading: ShadingConfig,
    pub modulation: ModulationConfig,
    pub raster: RasterConfig,
}

/// Where the point cloud comes from
#[derive(Clone, Debug)]
enum CloudSource {
    Data(PathSource),
    Shape(ShapePath),
}

/// A rotating, extruded dot-matrix rendition of a path
pub struct DotMatrix {
    name: String,
    source: CloudSource,
    sampler: SamplerConfig,
    projection: ProjectionConfig,
    shading: ShadingConfig,
    modulation: ModulationChain,
    rasterizer: Rasterizer,
    /// Sampled once in `prepare`
    cloud: Option<PointCloud>,
    /// Reused every frame
    projected: Vec<ProjectedPoint>,
}

impl DotMatrix {
    /// Build from SVG path data
    pub fn new(name: impl Into<String>, source: PathSource, config: DotMatrixConfig) -> Self {
        Self::with_source(name.into(), CloudSource::Data(source), config)
    }

    /// Build from an already parsed shape
    pub fn from_shape(name: impl Into<String>, shape: ShapePath, config: DotMatrixConfig) -> Self {
        Self::with_source(name.into(), CloudSource::Shape(shape), config)
    }

    fn with_source(name: String, source: CloudSource, config: DotMatrixConfig) -> Self {
        Self {
            name,
            source,
            sampler: config.sampler,
            projection: config.projection,
            shading: config.shading,
            modulation: config.modulation.build_chain(),
            rasterizer: Rasterizer::new(config.raster),
            cloud: None,
            projected: Vec::new(),
        }
    }
}

#[cfg(test)]
impl DotMatrix {
    /// The sampled cloud, once prepared
    pub fn cloud(&self) -> Option<&PointCloud> {
        self.cloud.as_ref()
    }

    pub fn projection(&self) -> &ProjectionConfig {
        &self.projection
    }

    /// Points produced by the last frame
    pub fn projected(&self) -> &[ProjectedPoint] {
        &self.projected
    }
}

impl Visual for DotMatrix {
    fn name(&self) -> &str {
        &self.name
    }

    fn prepare(&mut self, rng: &mut dyn RngCore) {
        if self.cloud.is_some() {
            return;
        }

        let cloud = match &self.source {
            CloudSource::Data(source) => PointCloud::from_source(source, &self.sampler, rng),
            CloudSource::Shape(shape) => {
                PointCloud::new(sample_point_cloud(shape, None, &self.sampler, rng))
            }
        };

        if cloud.is_empty() {
            log::warn!("{}: no filled area, nothing will be drawn", self.name);
        } else {
            log::info!(
                "{}: sampled {} points, {} modulators",
                self.name,
                cloud.len(),
                self.modulation.len()
            );
        }

        self.projected = Vec::with_capacity(cloud.len());
        self.cloud = Some(cloud);
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.projection.center_x = width / 2.0;
        self.projection.center_y = height / 2.0;
    }

    fn render_frame(
        &mut self,
        state: &AnimationState,
        surface: &mut dyn Surface,
        rng: &mut dyn RngCore,
    ) -> FrameStats {
        self.projected.clear();
        let mut culled = 0;

        if let Some(cloud) = &self.cloud {
            let frame = FrameTransform::new(&self.projection, &self.shading, state.angle_x, state.angle_y);
            for point in cloud.points() {
                match frame.project(point) {
                    Some(mut projected) => {
                        if !self.modulation.is_empty() {
                            self.modulation.apply(&mut projected, state.frame_count, rng);
                        }
                        self.projected.push(projected);
                    }
                    None => culled += 1,
                }
            }
        }

        let mut stats = self.rasterizer.draw_frame(surface, &self.projected);
        stats.culled = culled;
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::ProjectionMode;
    use crate::render::PixelSurface;
    use crate::shapes::FillRule;
    use crate::test_support::SequenceRng;

    fn square_source() -> PathSource {
        PathSource {
            data: "M0 0H100V100H0Z".to_string(),
            view_box: (100.0, 100.0),
            fill_rule: FillRule::NonZero,
            secondary: None,
        }
    }

    fn config() -> DotMatrixConfig {
        DotMatrixConfig {
            sampler: SamplerConfig {
                grid_size: 20,
                pixel_stride: 2,
                depth_layers: 4,
                z_spacing: 3.0,
                coordinate_scale: 2.0,
                outer_radius_threshold: None,
                keep_inner: true,
                interior_fill: 0.0,
            },
            ..Default::default()
        }
    }

    fn state(frame_count: u64) -> AnimationState {
        AnimationState {
            frame_count,
            ..Default::default()
        }
    }

    #[test]
    fn test_prepare_samples_once() {
        let mut visual = DotMatrix::new("square", square_source(), config());
        let mut rng = SequenceRng::constant(u32::MAX);
        assert!(visual.cloud().is_none());

        visual.prepare(&mut rng);
        let first = visual.cloud().unwrap().points().to_vec();
        assert!(!first.is_empty());

        visual.prepare(&mut rng);
        assert_eq!(visual.cloud().unwrap().points(), &first[..]);
    }

    #[test]
    fn test_render_projects_every_point() {
        let mut visual = DotMatrix::new("square", square_source(), config());
        let mut rng = SequenceRng::constant(u32::MAX);
        visual.prepare(&mut rng);
        visual.resize(200.0, 200.0);

        let mut surface = PixelSurface::new(200.0, 200.0, 1.0).unwrap();
        let stats = visual.render_frame(&state(1), &mut surface, &mut rng);

        let total = visual.cloud().unwrap().len();
        assert_eq!(stats.drawn + stats.culled, total);
        assert_eq!(stats.culled, 0);
        assert_eq!(visual.projected().len(), total);
        assert!(surface.image().pixels().any(|p| p.0[3] > 0));
    }

    #[test]
    fn test_resize_moves_center_only() {
        let mut visual = DotMatrix::new("square", square_source(), config());
        let mut rng = SequenceRng::constant(u32::MAX);
        visual.prepare(&mut rng);
        let before = visual.cloud().unwrap().points().to_vec();

        visual.resize(640.0, 480.0);
        assert_eq!(visual.projection().center_x, 320.0);
        assert_eq!(visual.projection().center_y, 240.0);
        assert_eq!(visual.cloud().unwrap().points(), &before[..]);
    }

    #[test]
    fn test_points_behind_viewer_are_culled() {
        let mut cfg = config();
        cfg.projection = ProjectionConfig {
            mode: ProjectionMode::Perspective,
            viewer_distance: 0.0,
            ..Default::default()
        };
        let mut visual = DotMatrix::new("square", square_source(), cfg);
        let mut rng = SequenceRng::constant(u32::MAX);
        visual.prepare(&mut rng);

        let mut surface = PixelSurface::new(100.0, 100.0, 1.0).unwrap();
        let stats = visual.render_frame(&state(1), &mut surface, &mut rng);

        // Layers at z = -6, -3 and 0 sit at or behind the viewer
        let cloud = visual.cloud().unwrap();
        let expected = cloud.points().iter().filter(|p| p.z <= 0.0).count();
        assert_eq!(stats.culled, expected);
        assert_eq!(stats.drawn, cloud.len() - expected);
    }

    #[test]
    fn test_empty_path_draws_nothing() {
        let source = PathSource {
            data: "M10 10".to_string(),
            ..square_source()
        };
        let mut visual = DotMatrix::new("empty", source, config());
        let mut rng = SequenceRng::constant(0);
        visual.prepare(&mut rng);
        assert!(visual.cloud().unwrap().is_empty());

        let mut surface = PixelSurface::new(50.0, 50.0, 1.0).unwrap();
        let stats = visual.render_frame(&state(1), &mut surface, &mut rng);
        assert_eq!(stats, FrameStats::default());
    }
}
