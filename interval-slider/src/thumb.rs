//! Thumb bitmaps.
//!
//! The default thumb is a white disc: a rounded rectangle whose corner radius
//! is half its width, rendered into a coverage mask and composited with a
//! solid fill, so everything outside the rounded shape is transparent.

use std::sync::Arc;

use image::{GrayImage, Luma, Rgba, RgbaImage};

use crate::{
    color::Color,
    dp::Dp,
    px::{Px, PxSize},
};

/// Diameter of the default round thumb.
pub const DEFAULT_THUMB_DIAMETER: Dp = Dp(20.0);

// Samples per axis when computing mask coverage.
const SUPERSAMPLE: u32 = 4;

/// A shared, immutable RGBA thumb bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbImage {
    pixels: Arc<RgbaImage>,
}

impl ThumbImage {
    /// Wraps an existing bitmap.
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Decodes an encoded image (PNG).
    pub fn load_from_memory(bytes: &[u8]) -> Result<Self, image::ImageError> {
        Ok(Self::from_rgba(image::load_from_memory(bytes)?.to_rgba8()))
    }

    /// The white round thumb used when no thumb image is configured.
    pub fn default_round() -> Self {
        Self::round(DEFAULT_THUMB_DIAMETER, Color::WHITE)
    }

    /// A filled disc of the given diameter.
    pub fn round(diameter: Dp, fill: Color) -> Self {
        let side = diameter.to_px().0.max(1) as u32;
        Self::rounded_rect(side, side, side as f32 * 0.5, fill)
    }

    /// A filled rounded rectangle, clipped to its rounded outline.
    pub fn rounded_rect(width: u32, height: u32, corner_radius: f32, fill: Color) -> Self {
        let mask = rounded_rect_mask(width, height, corner_radius);
        let layer = RgbaImage::from_pixel(width, height, Rgba(fill.to_rgba_u8()));
        Self::from_rgba(clip_to_mask(&layer, &mask))
    }

    /// The bitmap size in physical pixels.
    pub fn size(&self) -> PxSize {
        PxSize::new(
            Px(self.pixels.width() as i32),
            Px(self.pixels.height() as i32),
        )
    }

    /// The bitmap.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

fn inside_rounded_rect(x: f32, y: f32, width: f32, height: f32, radius: f32) -> bool {
    let radius = radius.min(width * 0.5).min(height * 0.5).max(0.0);
    let nearest_x = x.clamp(radius, width - radius);
    let nearest_y = y.clamp(radius, height - radius);
    let (dx, dy) = (x - nearest_x, y - nearest_y);
    dx * dx + dy * dy <= radius * radius
}

/// Coverage of a rounded rectangle filling a `width` x `height` canvas.
fn rounded_rect_mask(width: u32, height: u32, corner_radius: f32) -> GrayImage {
    let (w, h) = (width as f32, height as f32);
    let samples = (SUPERSAMPLE * SUPERSAMPLE) as f32;
    GrayImage::from_fn(width, height, |px, py| {
        let mut covered = 0u32;
        for sy in 0..SUPERSAMPLE {
            for sx in 0..SUPERSAMPLE {
                let x = px as f32 + (sx as f32 + 0.5) / SUPERSAMPLE as f32;
                let y = py as f32 + (sy as f32 + 0.5) / SUPERSAMPLE as f32;
                if inside_rounded_rect(x, y, w, h, corner_radius) {
                    covered += 1;
                }
            }
        }
        Luma([(covered as f32 / samples * 255.0).round() as u8])
    })
}

/// Multiplies the layer's alpha by the mask coverage.
fn clip_to_mask(layer: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    RgbaImage::from_fn(layer.width(), layer.height(), |x, y| {
        let Rgba([r, g, b, a]) = *layer.get_pixel(x, y);
        let coverage = mask.get_pixel(x, y).0[0] as u32;
        Rgba([r, g, b, ((a as u32 * coverage + 127) / 255) as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thumb_is_a_white_disc() {
        let thumb = ThumbImage::default_round();
        assert_eq!(thumb.size(), PxSize::new(Px(20), Px(20)));

        let pixels = thumb.pixels();
        assert_eq!(*pixels.get_pixel(10, 10), Rgba([255, 255, 255, 255]));
        assert_eq!(pixels.get_pixel(0, 0).0[3], 0);
        assert_eq!(pixels.get_pixel(19, 19).0[3], 0);
        assert_eq!(pixels.get_pixel(0, 10).0[3], 255);
    }

    #[test]
    fn square_corners_are_kept_without_radius() {
        let thumb = ThumbImage::rounded_rect(6, 4, 0.0, Color::BLACK);
        assert!(thumb.pixels().pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn mask_alpha_scales_translucent_fill() {
        let thumb = ThumbImage::rounded_rect(2, 2, 0.0, Color::WHITE.scale_alpha(0.5));
        assert_eq!(thumb.pixels().get_pixel(1, 1).0[3], 128);
    }

    #[test]
    fn encoded_images_decode() {
        let mut bytes = Vec::new();
        ThumbImage::round(Dp(8.0), Color::BLUE)
            .pixels()
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        let decoded = ThumbImage::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.size(), PxSize::new(Px(8), Px(8)));
    }
}
