//! Similarity scoring of a rendered drawing against a target glyph.
//!
//! Both sides are rasterized to `size × size`, each pixel is classified as
//! foreground or background, and the score is the Intersection-over-Union of
//! the two foreground sets. This is a coarse overlap heuristic, not a
//! recognizer: look-alike characters may pass, and correct characters drawn
//! small or off-center may fail.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bitmap::{Bitmap, ForegroundTest};
use crate::raster::{RasterError, Rasterizer};
use crate::surface::ConfigError;

/// Font size of the reference glyph relative to the bitmap size.
pub const GLYPH_SCALE: f64 = 0.78;

/// Largest comparison grid accepted by [`ScoreOptions::validate`].
pub const MAX_SCORE_SIZE: u32 = 4096;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ScoreOptions {
    pub size: u32,
    pub threshold: f64,
    pub glyph_scale: f64,
    pub foreground: ForegroundTest,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            size: 128,
            threshold: 0.15,
            glyph_scale: GLYPH_SCALE,
            foreground: ForegroundTest::default(),
        }
    }
}

impl ScoreOptions {
    /// Settings the write-practice flow submits with.
    pub const WRITE_PRACTICE: ScoreOptions = ScoreOptions {
        size: 128,
        threshold: 0.18,
        glyph_scale: GLYPH_SCALE,
        foreground: ForegroundTest {
            alpha_cutoff: 20,
            channel_cutoff: 200,
        },
    };

    pub fn with_threshold(self, threshold: f64) -> Self {
        Self { threshold, ..self }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_SCORE_SIZE {
            return Err(ConfigError::ScoreSize {
                got: self.size,
                max: MAX_SCORE_SIZE,
            });
        }
        if !self.threshold.is_finite() {
            return Err(ConfigError::Threshold(self.threshold));
        }
        if !(self.glyph_scale.is_finite() && self.glyph_scale > 0.0) {
            return Err(ConfigError::GlyphScale(self.glyph_scale));
        }
        Ok(())
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let opts: Self = serde_json::from_str(json)?;
        opts.validate()?;
        Ok(opts)
    }
}

/// Verdict of one scoring call.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimilarityResult {
    pub passed: bool,
    pub score: f64,
}

impl SimilarityResult {
    pub fn from_score(score: f64, threshold: f64) -> Self {
        Self {
            passed: score >= threshold,
            score,
        }
    }
}

/// Intersection-over-Union of the foreground pixel sets of `a` and `b`.
///
/// `0.0` when neither bitmap has any foreground. Bitmaps must have equal
/// dimensions; pixels past the shorter buffer are ignored.
pub fn iou(a: &Bitmap, b: &Bitmap, test: &ForegroundTest) -> f64 {
    let mut intersection = 0usize;
    let mut union = 0usize;
    for (pa, pb) in a.pixels().zip(b.pixels()) {
        let on_a = test.is_foreground(pa);
        let on_b = test.is_foreground(pb);
        if on_a && on_b {
            intersection += 1;
        }
        if on_a || on_b {
            union += 1;
        }
    }
    if union == 0 { 0.0 } else { intersection as f64 / union as f64 }
}

/// Score the current pixels of `surface` against `target`.
///
/// The surface must already be rendered; scoring reads pixels, not strokes.
/// Options are validated first, so a bad grid size is an error, not an
/// oversized allocation.
pub fn score<R: Rasterizer>(
    rasterizer: &R,
    surface: &R::Surface,
    target: &str,
    options: &ScoreOptions,
) -> Result<SimilarityResult, RasterError> {
    options.validate()?;
    let size = options.size;
    let drawn = rasterizer.rasterize_surface(surface, size)?;
    let reference = rasterizer.rasterize_glyph(target, size, options.glyph_scale)?;
    for bmp in [&drawn, &reference] {
        if bmp.width() != size || bmp.height() != size {
            return Err(RasterError::SizeMismatch {
                want: size,
                got_w: bmp.width(),
                got_h: bmp.height(),
            });
        }
    }

    let overlap = iou(&drawn, &reference, &options.foreground);
    let result = SimilarityResult::from_score(overlap, options.threshold);
    tracing::debug!(
        glyph = target,
        score = result.score,
        threshold = options.threshold,
        passed = result.passed,
        "scored drawing"
    );
    Ok(result)
}
