//! Projection - rotate a point and map it to screen space
//!
//! Two modes are supported:
//! - Perspective: rotate around X then Y, divide by depth, cull behind viewer
//! - Orthographic: rotate around Y only, constant scale, depth only shades
//!
//! A `FrameTransform` is built once per frame so the trig and the rotation
//! matrix are shared by every point in the cloud.

use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::shapes::Point3D;

/// How rotated points are mapped onto the surface
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    /// Flat projection that still reads as 3D thanks to depth shading
    Orthographic,
}

impl ProjectionMode {
    pub fn all() -> &'static [ProjectionMode] {
        &[ProjectionMode::Perspective, ProjectionMode::Orthographic]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProjectionMode::Perspective => "Perspective",
            ProjectionMode::Orthographic => "Orthographic",
        }
    }
}

/// Projection parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub mode: ProjectionMode,
    /// Perspective numerator (pixels at unit distance)
    pub field_of_view: f32,
    /// Distance pushed onto z before dividing
    pub viewer_distance: f32,
    /// Constant scale for orthographic mode
    pub scale: f32,
    /// Dot side length before projection scaling
    pub dot_size: f32,
    /// Screen position of the shape origin (logical pixels)
    pub center_x: f32,
    pub center_y: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::Perspective,
            field_of_view: 400.0,
            viewer_distance: 300.0,
            scale: 1.3,
            dot_size: 2.0,
            center_x: 160.0,
            center_y: 160.0,
        }
    }
}

/// Depth shading parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    /// Perspective: alpha = clamp(scale * gain - bias, min_alpha, max_alpha)
    pub gain: f32,
    pub bias: f32,
    pub min_alpha: f32,
    pub max_alpha: f32,
    /// Orthographic: z is normalized over [-depth_range, depth_range]
    pub depth_range: f32,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            gain: 1.5,
            bias: 0.5,
            min_alpha: 0.1,
            max_alpha: 0.9,
            depth_range: 75.0,
        }
    }
}

/// A point mapped to the surface for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub screen_x: f32,
    pub screen_y: f32,
    pub depth_alpha: f32,
    /// Side length of the dot (logical pixels)
    pub size: f32,
}

/// Per-frame projection state shared by every point
pub struct FrameTransform<'a> {
    projection: &'a ProjectionConfig,
    shading: &'a ShadingConfig,
    rotation: Rotation3<f32>,
}

impl<'a> FrameTransform<'a> {
    pub fn new(
        projection: &'a ProjectionConfig,
        shading: &'a ShadingConfig,
        angle_x: f32,
        angle_y: f32,
    ) -> Self {
        let rotation = match projection.mode {
            ProjectionMode::Perspective => {
                Rotation3::from_axis_angle(&Vector3::y_axis(), angle_y)
                    * Rotation3::from_axis_angle(&Vector3::x_axis(), angle_x)
            }
            ProjectionMode::Orthographic => Rotation3::from_axis_angle(&Vector3::y_axis(), angle_y),
        };

        Self {
            projection,
            shading,
            rotation,
        }
    }

    /// Rotate a point; inner points stay where they are
    pub fn rotate(&self, point: &Point3D) -> Vector3<f32> {
        let v = Vector3::new(point.x, point.y, point.z);
        if point.is_outer {
            self.rotation * v
        } else {
            v
        }
    }

    /// Project a point, or `None` when it sits behind the viewer
    pub fn project(&self, point: &Point3D) -> Option<ProjectedPoint> {
        let r = self.rotate(point);
        let p = self.projection;
        let s = self.shading;

        match p.mode {
            ProjectionMode::Perspective => {
                let distance = r.z + p.viewer_distance;
                if distance <= 0.0 {
                    return None;
                }
                let scale = p.field_of_view / distance;

                Some(ProjectedPoint {
                    screen_x: r.x * scale + p.center_x,
                    screen_y: r.y * scale + p.center_y,
                    depth_alpha: (scale * s.gain - s.bias).clamp(s.min_alpha, s.max_alpha),
                    size: p.dot_size * scale,
                })
            }
            ProjectionMode::Orthographic => {
                let range = s.depth_range.max(f32::EPSILON);
                let normalized = ((r.z + range) / (2.0 * range)).clamp(0.0, 1.0);

                Some(ProjectedPoint {
                    screen_x: r.x * p.scale + p.center_x,
                    screen_y: r.y * p.scale + p.center_y,
                    depth_alpha: s.min_alpha + normalized * (1.0 - s.min_alpha),
                    size: p.dot_size * p.scale,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn point(x: f32, y: f32, z: f32) -> Point3D {
        Point3D {
            x,
            y,
            z,
            is_edge: true,
            is_outer: true,
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let shading = ShadingConfig::default();
        for mode in ProjectionMode::all() {
            let projection = ProjectionConfig {
                mode: *mode,
                ..Default::default()
            };
            let frame = FrameTransform::new(&projection, &shading, 0.0, 0.0);
            let p = point(12.5, -3.0, 7.0);
            let r = frame.rotate(&p);
            assert!(close(r.x, p.x) && close(r.y, p.y) && close(r.z, p.z));
        }
    }

    #[test]
    fn test_perspective_rotation_order() {
        let projection = ProjectionConfig::default();
        let shading = ShadingConfig::default();

        // X rotation by 90 degrees takes +y to +z
        let frame = FrameTransform::new(&projection, &shading, FRAC_PI_2, 0.0);
        let r = frame.rotate(&point(0.0, 1.0, 0.0));
        assert!(close(r.x, 0.0) && close(r.y, 0.0) && close(r.z, 1.0));

        // Then Y rotation by 90 degrees takes +z to +x
        let frame = FrameTransform::new(&projection, &shading, FRAC_PI_2, FRAC_PI_2);
        let r = frame.rotate(&point(0.0, 1.0, 0.0));
        assert!(close(r.x, 1.0) && close(r.y, 0.0) && close(r.z, 0.0));
    }

    #[test]
    fn test_orthographic_ignores_angle_x() {
        let projection = ProjectionConfig {
            mode: ProjectionMode::Orthographic,
            ..Default::default()
        };
        let shading = ShadingConfig::default();
        let frame = FrameTransform::new(&projection, &shading, 1.0, 0.0);
        let r = frame.rotate(&point(1.0, 2.0, 3.0));
        assert!(close(r.x, 1.0) && close(r.y, 2.0) && close(r.z, 3.0));
    }

    #[test]
    fn test_inner_points_are_not_rotated() {
        let projection = ProjectionConfig::default();
        let shading = ShadingConfig::default();
        let frame = FrameTransform::new(&projection, &shading, 0.7, PI / 3.0);
        let mut p = point(4.0, 5.0, 6.0);
        p.is_outer = false;
        let r = frame.rotate(&p);
        assert_eq!((r.x, r.y, r.z), (4.0, 5.0, 6.0));
    }

    #[test]
    fn test_perspective_culling() {
        let projection = ProjectionConfig {
            viewer_distance: 10.0,
            ..Default::default()
        };
        let shading = ShadingConfig::default();
        let frame = FrameTransform::new(&projection, &shading, 0.0, 0.0);

        assert!(frame.project(&point(0.0, 0.0, -10.0)).is_none());
        assert!(frame.project(&point(0.0, 0.0, -25.0)).is_none());
        assert!(frame.project(&point(0.0, 0.0, -9.5)).is_some());

        let points: Vec<Point3D> = (-30..30).map(|z| point(1.0, 1.0, z as f32)).collect();
        let visible = points.iter().filter_map(|p| frame.project(p)).count();
        let expected = points.iter().filter(|p| p.z + 10.0 > 0.0).count();
        assert_eq!(visible, expected);
    }

    #[test]
    fn test_perspective_projection_values() {
        let projection = ProjectionConfig {
            field_of_view: 400.0,
            viewer_distance: 300.0,
            dot_size: 2.0,
            center_x: 160.0,
            center_y: 160.0,
            ..Default::default()
        };
        let shading = ShadingConfig::default();
        let frame = FrameTransform::new(&projection, &shading, 0.0, 0.0);

        let projected = frame.project(&point(30.0, -15.0, 100.0)).unwrap();
        // scale = 400 / 400 = 1
        assert!(close(projected.screen_x, 190.0));
        assert!(close(projected.screen_y, 145.0));
        assert!(close(projected.size, 2.0));
        assert!(close(projected.depth_alpha, 0.9));

        // Far away points are dimmed to the floor
        let far = frame.project(&point(0.0, 0.0, 5000.0)).unwrap();
        assert!(close(far.depth_alpha, 0.1));
    }

    #[test]
    fn test_orthographic_depth_shading() {
        let projection = ProjectionConfig {
            mode: ProjectionMode::Orthographic,
            scale: 1.3,
            center_x: 200.0,
            center_y: 200.0,
            ..Default::default()
        };
        let shading = ShadingConfig {
            min_alpha: 0.2,
            ..Default::default()
        };
        let frame = FrameTransform::new(&projection, &shading, 0.0, 0.0);

        let back = frame.project(&point(10.0, 10.0, -75.0)).unwrap();
        let front = frame.project(&point(10.0, 10.0, 75.0)).unwrap();
        assert!(close(back.depth_alpha, 0.2));
        assert!(close(front.depth_alpha, 1.0));

        // Position does not depend on depth
        assert!(close(back.screen_x, front.screen_x));
        assert!(close(back.screen_x, 213.0));
        assert!(close(front.size, 2.6));
    }

    #[test]
    fn test_orthographic_never_culls() {
        let projection = ProjectionConfig {
            mode: ProjectionMode::Orthographic,
            viewer_distance: 1.0,
            ..Default::default()
        };
        let shading = ShadingConfig::default();
        let frame = FrameTransform::new(&projection, &shading, 0.0, 0.0);
        assert!(frame.project(&point(0.0, 0.0, -500.0)).is_some());
    }
}
