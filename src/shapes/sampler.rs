//! Shape sampler - extrude a filled path into a 3D point cloud
//!
//! The path is filled onto a coarse grid, the grid is walked with a fixed
//! stride, and each filled cell becomes a column of points along z:
//!
//! ```text
//!   edge cell      interior cell
//!   z0  o            z0  o
//!   z1  o            z1
//!   ..  o            ..
//!   zN  o            zN  o
//! ```
//!
//! Edge cells fill every layer and form the walls; interior cells only mark
//! the front and back caps, which gives a hollow extrusion.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::coverage::CoverageGrid;
use super::path::{FillRule, ShapePath};

/// A sampled point in shape-local space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// The source cell touches empty space or the grid border
    pub is_edge: bool,
    /// Part of the rotating group rather than the static one
    pub is_outer: bool,
}

/// Sampling parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Resolution of the square coverage grid
    pub grid_size: usize,
    /// Walk every Nth cell; also the distance used for edge tests
    pub pixel_stride: usize,
    /// Number of extrusion layers
    pub depth_layers: usize,
    /// Distance between consecutive layers
    pub z_spacing: f32,
    /// Multiplier applied to centered grid coordinates
    pub coordinate_scale: f32,
    /// Radius above which a point joins the rotating group (None = all rotate)
    pub outer_radius_threshold: Option<f32>,
    /// Keep points below the radius threshold as a static group
    pub keep_inner: bool,
    /// Chance of a stray point inside the hollow, per interior cell and middle layer
    pub interior_fill: f32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            grid_size: 100,
            pixel_stride: 2,
            depth_layers: 15,
            z_spacing: 3.0,
            coordinate_scale: 1.5,
            outer_radius_threshold: Some(45.0),
            keep_inner: true,
            interior_fill: 0.0,
        }
    }
}

impl SamplerConfig {
    /// z position of layer `index`, symmetric around zero
    pub fn layer_z(&self, index: usize) -> f32 {
        (index as f32 - self.depth_layers as f32 / 2.0) * self.z_spacing
    }
}

/// Sample a path (and an optional static secondary path) into points
///
/// `rng` is only consulted when `interior_fill > 0`.
pub fn sample_point_cloud(
    path: &ShapePath,
    secondary: Option<&ShapePath>,
    config: &SamplerConfig,
    rng: &mut dyn RngCore,
) -> Vec<Point3D> {
    let mut points = Vec::new();

    if config.grid_size == 0 || config.depth_layers == 0 {
        log::warn!(
            "Degenerate sampler config (grid {}, layers {}), no points",
            config.grid_size,
            config.depth_layers
        );
        return points;
    }

    let grid = CoverageGrid::fill(path, config.grid_size);
    sample_grid(&grid, config, false, rng, &mut points);

    if let Some(secondary) = secondary {
        let grid = CoverageGrid::fill(secondary, config.grid_size);
        sample_grid(&grid, config, true, rng, &mut points);
    }

    log::debug!(
        "Sampled {} points from {} filled cells",
        points.len(),
        grid.filled_count()
    );

    points
}

fn sample_grid(
    grid: &CoverageGrid,
    config: &SamplerConfig,
    force_inner: bool,
    rng: &mut dyn RngCore,
    points: &mut Vec<Point3D>,
) {
    let size = grid.size();
    let stride = config.pixel_stride.max(1);
    let half = size as f32 / 2.0;
    let last_layer = config.depth_layers - 1;

    for row in (0..size).step_by(stride) {
        for col in (0..size).step_by(stride) {
            let (c, r) = (col as isize, row as isize);
            if !grid.is_filled(c, r) {
                continue;
            }

            let x = (col as f32 - half) * config.coordinate_scale;
            let y = (row as f32 - half) * config.coordinate_scale;

            let is_outer = !force_inner
                && match config.outer_radius_threshold {
                    Some(threshold) => (x * x + y * y).sqrt() > threshold,
                    None => true,
                };
            if !is_outer && !force_inner && !config.keep_inner {
                continue;
            }

            let s = stride as isize;
            let is_edge = !grid.is_filled(c, r - s)
                || !grid.is_filled(c, r + s)
                || !grid.is_filled(c - s, r)
                || !grid.is_filled(c + s, r);

            for layer in 0..config.depth_layers {
                let cap = layer == 0 || layer == last_layer;
                let stray = !is_edge
                    && !cap
                    && config.interior_fill > 0.0
                    && rng.gen::<f32>() < config.interior_fill;

                if is_edge || cap || stray {
                    points.push(Point3D {
                        x,
                        y,
                        z: config.layer_z(layer),
                        is_edge,
                        is_outer,
                    });
                }
            }
        }
    }
}

/// Where a point cloud comes from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathSource {
    /// SVG path data
    pub data: String,
    /// Width and height of the path's coordinate space
    pub view_box: (f32, f32),
    pub fill_rule: FillRule,
    /// Optional second path sampled as the static group
    #[serde(default)]
    pub secondary: Option<String>,
}

/// An immutable, once-sampled set of points
#[derive(Clone, Debug, Default)]
pub struct PointCloud {
    points: Vec<Point3D>,
}

impl PointCloud {
    pub fn new(points: Vec<Point3D>) -> Self {
        Self { points }
    }

    /// Parse and sample a path source
    ///
    /// Unparsable input is logged and yields an empty cloud.
    pub fn from_source(source: &PathSource, config: &SamplerConfig, rng: &mut dyn RngCore) -> Self {
        let path = match ShapePath::parse(&source.data, source.view_box, source.fill_rule) {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Path could not be used ({}), drawing nothing", e);
                return Self::default();
            }
        };

        let secondary = source.secondary.as_deref().and_then(|data| {
            ShapePath::parse(data, source.view_box, source.fill_rule)
                .map_err(|e| log::warn!("Secondary path ignored ({})", e))
                .ok()
        });

        Self::new(sample_point_cloud(&path, secondary.as_ref(), config, rng))
    }

    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::path::PathCommand;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{BTreeSet, HashMap};

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<PathCommand> {
        vec![
            PathCommand::MoveTo(x0, y0),
            PathCommand::LineTo(x1, y0),
            PathCommand::LineTo(x1, y1),
            PathCommand::LineTo(x0, y1),
            PathCommand::Close,
        ]
    }

    /// 100x100 square outline two units thick
    fn square_outline() -> ShapePath {
        let mut commands = rect(0.0, 0.0, 100.0, 100.0);
        commands.extend(rect(2.0, 2.0, 98.0, 98.0));
        ShapePath::from_commands(commands, (100.0, 100.0), FillRule::EvenOdd)
    }

    fn solid_square() -> ShapePath {
        ShapePath::from_commands(rect(0.0, 0.0, 100.0, 100.0), (100.0, 100.0), FillRule::NonZero)
    }

    fn outline_config() -> SamplerConfig {
        SamplerConfig {
            grid_size: 100,
            pixel_stride: 2,
            depth_layers: 4,
            z_spacing: 3.0,
            coordinate_scale: 1.0,
            outer_radius_threshold: None,
            keep_inner: true,
            interior_fill: 0.0,
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    /// Key a point by its (x, y) column, in hundredths to make it hashable
    fn column(p: &Point3D) -> (i32, i32) {
        ((p.x * 100.0).round() as i32, (p.y * 100.0).round() as i32)
    }

    #[test]
    fn test_square_outline_scenario() {
        let points = sample_point_cloud(&square_outline(), None, &outline_config(), &mut rng());

        let zs: BTreeSet<i32> = points.iter().map(|p| p.z.round() as i32).collect();
        assert_eq!(zs, BTreeSet::from([-6, -3, 0, 3]));

        // Pure outline: every sampled cell is an edge on all four layers
        assert!(points.iter().all(|p| p.is_edge));
        let cells = 50 * 50 - 48 * 48;
        assert_eq!(points.len(), cells * 4);
    }

    #[test]
    fn test_layer_counts_edge_vs_interior() {
        let config = SamplerConfig {
            depth_layers: 6,
            ..outline_config()
        };
        let points = sample_point_cloud(&solid_square(), None, &config, &mut rng());

        let mut counts: HashMap<(i32, i32), (usize, bool)> = HashMap::new();
        for p in &points {
            let entry = counts.entry(column(p)).or_insert((0, p.is_edge));
            entry.0 += 1;
        }

        assert!(counts.values().any(|&(_, edge)| edge));
        assert!(counts.values().any(|&(_, edge)| !edge));
        for (count, edge) in counts.values() {
            if *edge {
                assert_eq!(*count, 6);
            } else {
                assert_eq!(*count, 2);
            }
        }
    }

    #[test]
    fn test_depth_symmetry_even_layers() {
        let config = SamplerConfig {
            depth_layers: 8,
            z_spacing: 2.5,
            ..outline_config()
        };
        let zs: Vec<f32> = (0..8).map(|i| config.layer_z(i)).collect();
        let min = zs.iter().cloned().fold(f32::MAX, f32::min);
        let max = zs.iter().cloned().fold(f32::MIN, f32::max);
        assert!((min + 10.0).abs() < 1e-4);
        assert!((max - 7.5).abs() < 1e-4);

        let points = sample_point_cloud(&solid_square(), None, &config, &mut rng());
        let distinct: BTreeSet<i32> = points.iter().map(|p| (p.z * 10.0).round() as i32).collect();
        let expected: BTreeSet<i32> = zs.iter().map(|z| (z * 10.0).round() as i32).collect();
        assert_eq!(distinct, expected);
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let config = SamplerConfig::default();
        let a = sample_point_cloud(&square_outline(), None, &config, &mut rng());
        let b = sample_point_cloud(&square_outline(), None, &config, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_path_gives_empty_cloud() {
        let empty = ShapePath::from_commands(Vec::new(), (100.0, 100.0), FillRule::NonZero);
        let points = sample_point_cloud(&empty, None, &SamplerConfig::default(), &mut rng());
        assert!(points.is_empty());
    }

    #[test]
    fn test_unparsable_source_gives_empty_cloud() {
        let source = PathSource {
            data: String::new(),
            view_box: (100.0, 100.0),
            fill_rule: FillRule::NonZero,
            secondary: None,
        };
        let cloud = PointCloud::from_source(&source, &SamplerConfig::default(), &mut rng());
        assert!(cloud.is_empty());
    }

    #[test]
    fn test_outer_threshold_split() {
        let config = SamplerConfig {
            coordinate_scale: 1.0,
            outer_radius_threshold: Some(20.0),
            ..outline_config()
        };
        let points = sample_point_cloud(&solid_square(), None, &config, &mut rng());
        assert!(points.iter().any(|p| p.is_outer));
        assert!(points.iter().any(|p| !p.is_outer));
        for p in &points {
            let radius = (p.x * p.x + p.y * p.y).sqrt();
            assert_eq!(p.is_outer, radius > 20.0);
        }

        let dropped = SamplerConfig {
            keep_inner: false,
            ..config
        };
        let outer_only = sample_point_cloud(&solid_square(), None, &dropped, &mut rng());
        assert!(!outer_only.is_empty());
        assert!(outer_only.iter().all(|p| p.is_outer));
    }

    #[test]
    fn test_secondary_path_is_static() {
        let secondary = ShapePath::from_commands(rect(40.0, 40.0, 60.0, 60.0), (100.0, 100.0), FillRule::NonZero);
        let primary = sample_point_cloud(&square_outline(), None, &outline_config(), &mut rng());
        let both = sample_point_cloud(&square_outline(), Some(&secondary), &outline_config(), &mut rng());

        assert!(both.len() > primary.len());
        assert!(both[..primary.len()].iter().all(|p| p.is_outer));
        assert!(both[primary.len()..].iter().all(|p| !p.is_outer));
    }

    #[test]
    fn test_interior_fill_adds_stray_points() {
        let hollow = sample_point_cloud(&solid_square(), None, &outline_config(), &mut rng());
        let config = SamplerConfig {
            interior_fill: 1.0,
            ..outline_config()
        };
        let packed = sample_point_cloud(&solid_square(), None, &config, &mut rng());

        // Every interior cell now appears on every layer
        let cells = 50 * 50;
        assert_eq!(packed.len(), cells * 4);
        assert!(hollow.len() < packed.len());
    }

    #[test]
    fn test_coordinates_are_centered() {
        let points = sample_point_cloud(&solid_square(), None, &outline_config(), &mut rng());
        let min_x = points.iter().map(|p| p.x).fold(f32::MAX, f32::min);
        let max_x = points.iter().map(|p| p.x).fold(f32::MIN, f32::max);
        assert!((min_x + 50.0).abs() < 1e-4);
        assert!((max_x - 48.0).abs() < 1e-4);
    }
}
