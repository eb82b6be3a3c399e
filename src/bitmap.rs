//! RGBA bitmap used both as a headless drawing surface and as the transient
//! comparison grid of the scorer.
//!
//! Backed by an [`image::RgbaImage`]: row-major, four bytes per pixel,
//! non-premultiplied, the same layout `CanvasRenderingContext2d::get_image_data`
//! hands back, so browser readbacks can be wrapped without conversion.

use image::imageops::{self, FilterType};
use image::{Pixel, RgbaImage};
use kurbo::{Line, ParamCurveNearest, Point, Rect, Shape};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use image::Rgba;

/// Largest pixel buffer a [`Bitmap`] will allocate (64 Mi pixels).
pub(crate) const MAX_PIXELS: usize = 1 << 26;

// --- Colors -----------------------------------------------------------------

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Pen color of the capture surface (slate-900).
pub const INK: Rgba<u8> = Rgba([0x11, 0x18, 0x27, 255]);

/// CSS hex form, e.g. `#111827`. Alpha is not encoded.
pub fn css_hex(color: Rgba<u8>) -> String {
    let [r, g, b, _] = color.0;
    format!("#{r:02x}{g:02x}{b:02x}")
}

// --- Foreground classification ------------------------------------------------

/// Decides whether a pixel counts as ink.
///
/// A pixel is foreground when its alpha is above `alpha_cutoff` **and** at least
/// one color channel is below `channel_cutoff`. Both values are heuristics and
/// are exposed so callers can tune them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ForegroundTest {
    pub alpha_cutoff: u8,
    pub channel_cutoff: u8,
}

impl Default for ForegroundTest {
    fn default() -> Self {
        Self {
            alpha_cutoff: 20,
            channel_cutoff: 200,
        }
    }
}

impl ForegroundTest {
    pub fn is_foreground(&self, px: Rgba<u8>) -> bool {
        let [r, g, b, a] = px.0;
        a > self.alpha_cutoff && [r, g, b].iter().any(|&c| c < self.channel_cutoff)
    }
}

// --- Bitmap -------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    image: RgbaImage,
}

impl Bitmap {
    /// A bitmap uniformly filled with `color`.
    ///
    /// `None` when the pixel count overflows or exceeds the allocation cap.
    pub fn new(width: u32, height: u32, color: Rgba<u8>) -> Option<Self> {
        (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n <= MAX_PIXELS)?;
        Some(Self {
            image: RgbaImage::from_pixel(width, height, color),
        })
    }

    pub fn transparent(width: u32, height: u32) -> Option<Self> {
        Self::new(width, height, TRANSPARENT)
    }

    /// Wrap raw RGBA bytes. `None` if the length does not match the dimensions.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        let want = (width as usize).checked_mul(height as usize)?.checked_mul(4)?;
        if data.len() != want {
            return None;
        }
        RgbaImage::from_raw(width, height, data).map(|image| Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixels(&self) -> impl Iterator<Item = Rgba<u8>> + '_ {
        self.image.pixels().copied()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    pub fn fill(&mut self, color: Rgba<u8>) {
        for px in self.image.pixels_mut() {
            *px = color;
        }
    }

    /// Source-over composite of `color`, with its alpha further scaled by `coverage` (0..=1).
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>, coverage: f64) {
        let Some(px) = self.image.get_pixel_mut_checked(x, y) else {
            return;
        };
        let alpha = (color[3] as f64 * coverage.clamp(0.0, 1.0)).round() as u8;
        if alpha == 0 {
            return;
        }
        let mut src = color;
        src[3] = alpha;
        px.blend(&src);
    }

    /// Stroke a connected polyline with round joins and caps.
    ///
    /// Coverage is the distance from each pixel center to the nearest segment,
    /// so joins and caps come out round without extra geometry. Polylines with
    /// fewer than two points draw nothing.
    pub fn stroke_polyline(&mut self, points: &[Point], line_width: f64, color: Rgba<u8>) {
        if points.len() < 2 || !(line_width > 0.0) || self.width() == 0 || self.height() == 0 {
            return;
        }
        let half = line_width / 2.0;
        let pad = half + 1.0;
        let segments: Vec<Line> = points.windows(2).map(|w| Line::new(w[0], w[1])).collect();

        let bounds = segments
            .iter()
            .map(|l| l.bounding_box())
            .reduce(|a, b| a.union(b))
            .map(|r| r.inflate(pad, pad));
        let Some((x0, y0, x1, y1)) = bounds.and_then(|r| self.pixel_rect(r)) else {
            return;
        };
        let span_w = (x1 - x0) as usize;

        // Max coverage per pixel across all segments so overlapping joins are
        // composited once.
        let mut coverage = vec![0.0f64; span_w * (y1 - y0) as usize];
        for line in &segments {
            let Some((sx0, sy0, sx1, sy1)) = self.pixel_rect(line.bounding_box().inflate(pad, pad))
            else {
                continue;
            };
            for y in sy0..sy1 {
                for x in sx0..sx1 {
                    let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                    let d_sq = if line.p0 == line.p1 {
                        (center - line.p0).hypot2()
                    } else {
                        line.nearest(center, 1e-9).distance_sq
                    };
                    let d = d_sq.sqrt();
                    let c = (half + 0.5 - d).clamp(0.0, 1.0);
                    let slot = &mut coverage[(y - y0) as usize * span_w + (x - x0) as usize];
                    if c > *slot {
                        *slot = c;
                    }
                }
            }
        }

        for y in y0..y1 {
            for x in x0..x1 {
                let c = coverage[(y - y0) as usize * span_w + (x - x0) as usize];
                if c > 0.0 {
                    self.blend_pixel(x, y, color, c);
                }
            }
        }
    }

    /// Whole pixel indices `[x0, x1) x [y0, y1)` of `rect`, clipped to the bitmap.
    fn pixel_rect(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        if !rect.is_finite() {
            return None;
        }
        let clip = |lo: f64, hi: f64, limit: u32| {
            let start = lo.floor().max(0.0) as u32;
            let end = (hi.ceil().max(0.0) as u32).min(limit);
            (start < end).then_some((start, end))
        };
        let (x0, x1) = clip(rect.x0, rect.x1, self.width())?;
        let (y0, y1) = clip(rect.y0, rect.y1, self.height())?;
        Some((x0, y0, x1, y1))
    }

    /// Composite `src` stretched to cover this whole bitmap (like `drawImage(src, 0, 0, w, h)`).
    ///
    /// The resize filter widens with the scale factor, so downscaling keeps
    /// thin ink visible as partial coverage.
    pub fn draw_scaled(&mut self, src: &Bitmap) {
        if src.width() == 0 || src.height() == 0 || self.width() == 0 || self.height() == 0 {
            return;
        }
        let (width, height) = (self.width(), self.height());
        let scaled = imageops::resize(&src.image, width, height, FilterType::Triangle);
        imageops::overlay(&mut self.image, &scaled, 0, 0);
    }

    pub fn foreground_count(&self, test: &ForegroundTest) -> usize {
        self.pixels().filter(|px| test.is_foreground(*px)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreground_needs_alpha_and_darkness() {
        let t = ForegroundTest::default();
        assert!(t.is_foreground(INK));
        assert!(!t.is_foreground(WHITE));
        // dark but nearly transparent
        assert!(!t.is_foreground(Rgba([0, 0, 0, 20])));
        assert!(t.is_foreground(Rgba([0, 0, 0, 21])));
        // one dark channel is enough
        assert!(t.is_foreground(Rgba([255, 255, 199, 255])));
        assert!(!t.is_foreground(Rgba([200, 200, 200, 255])));
    }

    #[test]
    fn css_hex_drops_alpha() {
        assert_eq!(css_hex(INK), "#111827");
        assert_eq!(css_hex(Rgba([255, 0, 16, 7])), "#ff0010");
    }

    #[test]
    fn from_rgba_checks_length() {
        assert!(Bitmap::from_rgba(2, 2, vec![0; 16]).is_some());
        assert!(Bitmap::from_rgba(2, 2, vec![0; 15]).is_none());
        assert!(Bitmap::from_rgba(2, 2, vec![0; 17]).is_none());
    }

    #[test]
    fn oversized_bitmap_is_refused() {
        assert!(Bitmap::new(u32::MAX, u32::MAX, WHITE).is_none());
        assert!(Bitmap::transparent(1 << 14, 1 << 14).is_none());
        assert!(Bitmap::transparent(0, 0).is_some());
    }

    #[test]
    fn single_point_polyline_draws_nothing() {
        let mut bmp = Bitmap::transparent(16, 16).unwrap();
        bmp.stroke_polyline(&[Point::new(8.0, 8.0)], 6.0, INK);
        assert_eq!(bmp, Bitmap::transparent(16, 16).unwrap());
    }

    #[test]
    fn horizontal_line_covers_its_band() {
        let mut bmp = Bitmap::transparent(32, 32).unwrap();
        bmp.stroke_polyline(&[Point::new(4.0, 16.0), Point::new(28.0, 16.0)], 4.0, INK);
        let t = ForegroundTest::default();
        assert!(t.is_foreground(bmp.pixel(16, 15).unwrap()));
        assert!(t.is_foreground(bmp.pixel(16, 16).unwrap()));
        assert!(!t.is_foreground(bmp.pixel(16, 4).unwrap()));
        // round cap extends past the end point
        assert!(t.is_foreground(bmp.pixel(28, 16).unwrap()));
        assert!(!t.is_foreground(bmp.pixel(31, 16).unwrap()));
    }

    #[test]
    fn zero_length_segment_draws_a_dot() {
        let mut bmp = Bitmap::transparent(16, 16).unwrap();
        let p = Point::new(8.0, 8.0);
        bmp.stroke_polyline(&[p, p], 6.0, INK);
        let t = ForegroundTest::default();
        assert!(t.is_foreground(bmp.pixel(8, 8).unwrap()));
        assert!(!t.is_foreground(bmp.pixel(8, 13).unwrap()));
    }

    #[test]
    fn blend_over_white_darkens() {
        let mut bmp = Bitmap::new(1, 1, WHITE).unwrap();
        bmp.blend_pixel(0, 0, BLACK, 0.5);
        let px = bmp.pixel(0, 0).unwrap();
        assert_eq!(px[3], 255);
        assert!((126..=128).contains(&px[0]));
    }

    #[test]
    fn draw_scaled_keeps_ink_position() {
        let mut src = Bitmap::transparent(40, 40).unwrap();
        src.stroke_polyline(&[Point::new(0.0, 20.0), Point::new(40.0, 20.0)], 8.0, INK);
        let mut dst = Bitmap::new(10, 10, WHITE).unwrap();
        dst.draw_scaled(&src);
        let t = ForegroundTest::default();
        let on = |y| t.is_foreground(dst.pixel(5, y).unwrap());
        assert!(on(4) || on(5));
        assert!(!on(0));
        assert!(!on(9));
    }
}
