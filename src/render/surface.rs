//! Drawing surfaces - where the rasterizer puts its dots
//!
//! ## Coordinate System
//!
//! Surfaces are addressed in logical pixels with (0, 0) at the top-left
//! and y growing downward. A surface with a device pixel ratio of 2 keeps
//! a backing store twice as large in each direction, so logical
//! coordinates stay the same on high density displays.

use std::path::Path as FilePath;

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest backing store edge we are willing to allocate
const MAX_DEVICE_EDGE: f32 = 8192.0;

/// Errors reported by a surface
#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("Invalid surface size {width}x{height} at ratio {ratio}")]
    InvalidSize { width: f32, height: f32, ratio: f32 },

    #[error("Rectangle has non-finite geometry")]
    NonFinite,

    #[error("Failed to write image: {0}")]
    ImageError(#[from] image::ImageError),
}

/// An opaque RGB color
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The default accent orange
    pub const ACCENT: Rgb = Rgb::new(249, 115, 22);

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
}

/// A resizable 2D raster target
pub trait Surface {
    /// Size in logical pixels
    fn logical_size(&self) -> (f32, f32);

    /// Resize the surface; contents are discarded
    fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) -> Result<(), SurfaceError>;

    /// Make every pixel transparent
    fn clear(&mut self);

    /// Composite an axis-aligned rectangle (logical pixels) with source-over blending
    fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
        alpha: f32,
    ) -> Result<(), SurfaceError>;

    /// Composite `color` at `alpha` over the whole surface
    fn fade(&mut self, color: Rgb, alpha: f32) {
        let (width, height) = self.logical_size();
        if let Err(e) = self.fill_rect(0.0, 0.0, width, height, color, alpha) {
            log::debug!("Fade skipped: {}", e);
        }
    }
}

/// A CPU surface backed by an RGBA image
pub struct PixelSurface {
    image: RgbaImage,
    width: f32,
    height: f32,
    pixel_ratio: f32,
}

impl PixelSurface {
    /// Create a transparent surface
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Result<Self, SurfaceError> {
        let (device_w, device_h) = device_size(width, height, pixel_ratio)?;
        Ok(Self {
            image: RgbaImage::new(device_w, device_h),
            width,
            height,
            pixel_ratio,
        })
    }

    /// The backing store (device pixels)
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Size of the backing store in device pixels
    pub fn device_size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Write the current contents as a PNG file
    pub fn save_png(&self, path: impl AsRef<FilePath>) -> Result<(), SurfaceError> {
        self.image
            .save_with_format(path.as_ref(), image::ImageFormat::Png)?;
        log::info!("Saved frame to {}", path.as_ref().display());
        Ok(())
    }

    /// Map a logical span to a device pixel range, at least one pixel wide
    fn device_span(&self, start: f32, length: f32, limit: u32) -> (u32, u32) {
        let lo = (start * self.pixel_ratio).round();
        let hi = ((start + length) * self.pixel_ratio).round().max(lo + 1.0);
        let clamp = |v: f32| v.clamp(0.0, limit as f32) as u32;
        (clamp(lo), clamp(hi))
    }
}

impl Surface for PixelSurface {
    fn logical_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) -> Result<(), SurfaceError> {
        let (device_w, device_h) = device_size(width, height, pixel_ratio)?;
        self.image = RgbaImage::new(device_w, device_h);
        self.width = width;
        self.height = height;
        self.pixel_ratio = pixel_ratio;
        Ok(())
    }

    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
        alpha: f32,
    ) -> Result<(), SurfaceError> {
        if !(x.is_finite() && y.is_finite() && width.is_finite() && height.is_finite() && alpha.is_finite()) {
            return Err(SurfaceError::NonFinite);
        }
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha == 0.0 || width <= 0.0 || height <= 0.0 {
            return Ok(());
        }

        let (device_w, device_h) = self.image.dimensions();
        let (x0, x1) = self.device_span(x, width, device_w);
        let (y0, y1) = self.device_span(y, height, device_h);

        for py in y0..y1 {
            for px in x0..x1 {
                let pixel = self.image.get_pixel_mut(px, py);
                *pixel = blend_over(*pixel, color, alpha);
            }
        }

        Ok(())
    }
}

fn device_size(width: f32, height: f32, pixel_ratio: f32) -> Result<(u32, u32), SurfaceError> {
    let device_w = (width * pixel_ratio).ceil();
    let device_h = (height * pixel_ratio).ceil();
    let valid = |v: f32| v.is_finite() && v >= 1.0 && v <= MAX_DEVICE_EDGE;

    if !(pixel_ratio > 0.0) || !valid(device_w) || !valid(device_h) {
        return Err(SurfaceError::InvalidSize {
            width,
            height,
            ratio: pixel_ratio,
        });
    }

    Ok((device_w as u32, device_h as u32))
}

/// Source-over composite of a straight-alpha color onto a straight-alpha pixel
fn blend_over(dst: Rgba<u8>, src: Rgb, alpha: f32) -> Rgba<u8> {
    let dst_a = dst.0[3] as f32 / 255.0;
    let out_a = alpha + dst_a * (1.0 - alpha);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: u8, d: u8| -> u8 {
        let v = (s as f32 * alpha + d as f32 * dst_a * (1.0 - alpha)) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        channel(src.r, dst.0[0]),
        channel(src.g, dst.0[1]),
        channel(src.b, dst.0[2]),
        (out_a * 255.0).round() as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_transparent() {
        let surface = PixelSurface::new(10.0, 8.0, 1.0).unwrap();
        assert_eq!(surface.device_size(), (10, 8));
        assert!(surface.image().pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_pixel_ratio_scales_backing_store() {
        let surface = PixelSurface::new(320.0, 320.0, 2.0).unwrap();
        assert_eq!(surface.device_size(), (640, 640));
        assert_eq!(surface.logical_size(), (320.0, 320.0));
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(PixelSurface::new(0.0, 10.0, 1.0).is_err());
        assert!(PixelSurface::new(10.0, 10.0, 0.0).is_err());
        assert!(PixelSurface::new(f32::NAN, 10.0, 1.0).is_err());
    }

    #[test]
    fn test_fill_rect_opaque() {
        let mut surface = PixelSurface::new(10.0, 10.0, 1.0).unwrap();
        surface.fill_rect(2.0, 3.0, 2.0, 2.0, Rgb::ACCENT, 1.0).unwrap();

        assert_eq!(*surface.image().get_pixel(2, 3), Rgba([249, 115, 22, 255]));
        assert_eq!(*surface.image().get_pixel(3, 4), Rgba([249, 115, 22, 255]));
        assert_eq!(surface.image().get_pixel(4, 4).0[3], 0);
    }

    #[test]
    fn test_fill_rect_with_ratio_uses_logical_units() {
        let mut surface = PixelSurface::new(10.0, 10.0, 2.0).unwrap();
        surface.fill_rect(1.0, 1.0, 1.0, 1.0, Rgb::WHITE, 1.0).unwrap();

        let lit = surface.image().pixels().filter(|p| p.0[3] > 0).count();
        assert_eq!(lit, 4);
        assert_eq!(surface.image().get_pixel(2, 2).0[3], 255);
    }

    #[test]
    fn test_fill_rect_clips_and_rejects_nan() {
        let mut surface = PixelSurface::new(4.0, 4.0, 1.0).unwrap();
        assert!(surface.fill_rect(-10.0, -10.0, 100.0, 100.0, Rgb::WHITE, 0.5).is_ok());
        assert!(matches!(
            surface.fill_rect(f32::NAN, 0.0, 1.0, 1.0, Rgb::WHITE, 1.0),
            Err(SurfaceError::NonFinite)
        ));
    }

    #[test]
    fn test_tiny_rect_still_marks_a_pixel() {
        let mut surface = PixelSurface::new(4.0, 4.0, 1.0).unwrap();
        surface.fill_rect(1.1, 1.1, 0.2, 0.2, Rgb::WHITE, 1.0).unwrap();
        assert_eq!(surface.image().pixels().filter(|p| p.0[3] > 0).count(), 1);
    }

    #[test]
    fn test_fade_darkens_towards_background() {
        let mut surface = PixelSurface::new(2.0, 2.0, 1.0).unwrap();
        surface.fill_rect(0.0, 0.0, 2.0, 2.0, Rgb::WHITE, 1.0).unwrap();
        surface.fade(Rgb::BLACK, 0.5);

        let p = surface.image().get_pixel(0, 0);
        assert_eq!(p.0[3], 255);
        assert!(p.0[0] > 120 && p.0[0] < 135);
    }

    #[test]
    fn test_clear() {
        let mut surface = PixelSurface::new(2.0, 2.0, 1.0).unwrap();
        surface.fill_rect(0.0, 0.0, 2.0, 2.0, Rgb::WHITE, 1.0).unwrap();
        surface.clear();
        assert!(surface.image().pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_resize() {
        let mut surface = PixelSurface::new(2.0, 2.0, 1.0).unwrap();
        surface.resize(5.0, 3.0, 1.5).unwrap();
        assert_eq!(surface.logical_size(), (5.0, 3.0));
        assert_eq!(surface.device_size(), (8, 5));
        assert!(surface.resize(0.0, 3.0, 1.0).is_err());
    }
}
