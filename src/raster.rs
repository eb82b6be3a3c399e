//! Rasterizer capability consumed by the scorer.
//!
//! The scorer never creates drawing surfaces itself; it asks a [`Rasterizer`]
//! for two same-sized bitmaps. The browser build supplies one backed by
//! off-screen canvases (`web::CanvasRasterizer`); [`SoftwareRasterizer`] does
//! the same work in memory for headless use and tests.

use crate::bitmap::{self, Bitmap};
use crate::geometry::Point;
use crate::stroke_font;
use crate::surface::ConfigError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RasterError {
    #[error("2d rendering is unavailable: {0}")]
    Unavailable(String),
    #[error("pixel readback failed: {0}")]
    Readback(String),
    #[error("rasterizer produced a {got_w}x{got_h} bitmap, expected {want}x{want}")]
    SizeMismatch { want: u32, got_w: u32, got_h: u32 },
    #[error("cannot allocate a {0}x{0} bitmap")]
    TooLarge(u32),
    #[error(transparent)]
    Options(#[from] ConfigError),
}

/// Blank light `size x size` canvas shared by both rasterizer outputs.
fn white(size: u32) -> Result<Bitmap, RasterError> {
    Bitmap::new(size, size, bitmap::WHITE).ok_or(RasterError::TooLarge(size))
}

pub trait Rasterizer {
    /// What a drawing surface looks like to this rasterizer.
    type Surface: ?Sized;

    /// `size × size` light background with the surface's current pixels
    /// stretched over it (no aspect correction).
    fn rasterize_surface(&self, surface: &Self::Surface, size: u32)
    -> Result<Bitmap, RasterError>;

    /// `size × size` light background with `glyph` drawn dark, centered, at
    /// `glyph_scale × size` pixels.
    fn rasterize_glyph(
        &self,
        glyph: &str,
        size: u32,
        glyph_scale: f64,
    ) -> Result<Bitmap, RasterError>;
}

/// In-memory rasterizer; reference glyphs come from the built-in stroke font.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftwareRasterizer;

impl Rasterizer for SoftwareRasterizer {
    type Surface = Bitmap;

    fn rasterize_surface(&self, surface: &Bitmap, size: u32) -> Result<Bitmap, RasterError> {
        let mut out = white(size)?;
        out.draw_scaled(surface);
        Ok(out)
    }

    fn rasterize_glyph(
        &self,
        glyph: &str,
        size: u32,
        glyph_scale: f64,
    ) -> Result<Bitmap, RasterError> {
        let mut out = white(size)?;
        let em = (size as f64 * glyph_scale).floor();
        let center = Point::new(size as f64 / 2.0, size as f64 / 2.0);
        let count = glyph.chars().count();
        // Multi-character text is laid out left to right around the center.
        for (i, c) in glyph.chars().enumerate() {
            let offset = (i as f64 - (count as f64 - 1.0) / 2.0) * em;
            let at = Point::new(center.x + offset, center.y);
            if !stroke_font::draw_glyph(&mut out, c, at, em, bitmap::BLACK) {
                tracing::warn!(glyph = %c, "no built-in stroke shape; reference renders blank");
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::{ForegroundTest, INK, WHITE};
    use crate::kana::Script;

    #[test]
    fn surface_is_stretched_onto_white() {
        let mut src = Bitmap::transparent(64, 32).unwrap();
        src.stroke_polyline(&[Point::new(0.0, 16.0), Point::new(64.0, 16.0)], 6.0, INK);
        let out = SoftwareRasterizer.rasterize_surface(&src, 16).unwrap();
        assert_eq!((out.width(), out.height()), (16, 16));
        assert_eq!(out.pixel(8, 0), Some(WHITE));
        let t = ForegroundTest::default();
        let on = |y| t.is_foreground(out.pixel(8, y).unwrap());
        assert!(on(8) || on(7));
    }

    #[test]
    fn empty_surface_stays_white() {
        let src = Bitmap::transparent(0, 0).unwrap();
        let out = SoftwareRasterizer.rasterize_surface(&src, 8).unwrap();
        assert_eq!(out, Bitmap::new(8, 8, WHITE).unwrap());
    }

    #[test]
    fn oversized_output_is_refused() {
        let src = Bitmap::transparent(4, 4).unwrap();
        let err = SoftwareRasterizer.rasterize_surface(&src, 1 << 20).unwrap_err();
        assert_eq!(err, RasterError::TooLarge(1 << 20));
    }

    #[test]
    fn every_practice_target_has_a_reference() {
        let t = ForegroundTest::default();
        for script in [Script::Hiragana, Script::Katakana] {
            for entry in script.testable() {
                let out = SoftwareRasterizer.rasterize_glyph(entry.glyph, 64, 0.78).unwrap();
                assert!(out.foreground_count(&t) > 0, "blank reference for '{}'", entry.glyph);
            }
        }
    }

    #[test]
    fn glyph_bitmap_has_ink() {
        let out = SoftwareRasterizer.rasterize_glyph("回", 64, 0.78).unwrap();
        assert!(out.foreground_count(&ForegroundTest::default()) > 0);
        let blank = SoftwareRasterizer.rasterize_glyph("?", 64, 0.78).unwrap();
        assert_eq!(blank, Bitmap::new(64, 64, WHITE).unwrap());
    }
}
