//! Stroke capture surface.
//!
//! Turns a pointer / touch input stream into a [`Drawing`] (committed strokes
//! plus at most one in-progress stroke) and keeps an [`InkSurface`] in sync by
//! doing a full redraw after every mutation. The surface owns the drawing for
//! one practice attempt; scorers only ever see the rendered pixels.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use kurbo::Affine;

use crate::bitmap::{self, Bitmap, Rgba};
use crate::geometry::{Point, ScreenPoint, SurfaceOrigin};

// --- Configuration ------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("surface dimensions must be non-zero (got {width}x{height})")]
    EmptySurface { width: u32, height: u32 },
    #[error("surface backing store of {width}x{height} device pixels is too large")]
    SurfaceTooLarge { width: u32, height: u32 },
    #[error("stroke thickness must be a positive number (got {0})")]
    StrokeThickness(f64),
    #[error("device scale must be a positive number (got {0})")]
    DeviceScale(f64),
    #[error("score bitmap size must be between 1 and {max} (got {got})")]
    ScoreSize { got: u32, max: u32 },
    #[error("score threshold must be a finite number (got {0})")]
    Threshold(f64),
    #[error("glyph scale must be a positive number (got {0})")]
    GlyphScale(f64),
    #[cfg(feature = "serde_json")]
    #[error("invalid configuration json: {0}")]
    Json(String),
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}

/// Surface dimensions (logical pixels), pen width and device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
    pub stroke_thickness: f64,
    pub device_scale: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 320,
            stroke_thickness: 14.0,
            device_scale: 1.0,
        }
    }
}

impl SurfaceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptySurface {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.stroke_thickness.is_finite() && self.stroke_thickness > 0.0) {
            return Err(ConfigError::StrokeThickness(self.stroke_thickness));
        }
        if !(self.device_scale.is_finite() && self.device_scale > 0.0) {
            return Err(ConfigError::DeviceScale(self.device_scale));
        }
        let (width, height) = self.backing_size();
        if u64::from(width) * u64::from(height) > bitmap::MAX_PIXELS as u64 {
            return Err(ConfigError::SurfaceTooLarge { width, height });
        }
        Ok(())
    }

    /// Backing-store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width as f64 * self.device_scale).floor() as u32,
            (self.height as f64 * self.device_scale).floor() as u32,
        )
    }

    fn contains(&self, p: Point) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width as f64 && p.y <= self.height as f64
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

// --- Drawing model --------------------------------------------------------------

/// One pointer-down to pointer-up gesture.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Strokes with fewer than two points have no line segment to draw.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Committed strokes in arrival order plus the in-progress one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Drawing {
    committed: Vec<Stroke>,
    current: Stroke,
}

impl Drawing {
    pub fn committed(&self) -> &[Stroke] {
        &self.committed
    }

    pub fn in_progress(&self) -> &Stroke {
        &self.current
    }

    pub fn is_blank(&self) -> bool {
        self.committed.is_empty() && self.current.is_empty()
    }

    /// All strokes in draw order: committed first, then the in-progress one.
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.committed.iter().chain(std::iter::once(&self.current))
    }
}

// --- Render target ----------------------------------------------------------------

/// Anything a drawing can be painted onto.
///
/// Coordinates handed to `polyline` are logical; implementors apply
/// `device_scale` to both positions and line width.
pub trait InkSurface {
    /// Erase everything (transparent).
    fn clear(&mut self);
    /// Stroke a connected polyline with round joins and caps. Only called with two or more points.
    fn polyline(&mut self, points: &[Point], line_width: f64, device_scale: f64, color: Rgba<u8>);
}

impl InkSurface for Bitmap {
    fn clear(&mut self) {
        self.fill(bitmap::TRANSPARENT);
    }

    fn polyline(&mut self, points: &[Point], line_width: f64, device_scale: f64, color: Rgba<u8>) {
        if device_scale == 1.0 {
            self.stroke_polyline(points, line_width, color);
        } else {
            let to_device = Affine::scale(device_scale);
            let scaled: Vec<Point> = points.iter().map(|&p| to_device * p).collect();
            self.stroke_polyline(&scaled, line_width * device_scale, color);
        }
    }
}

// --- Input ------------------------------------------------------------------------

/// Engagement lifecycle of a pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Leave,
}

/// One raw input event in screen space. `position` is `None` when the event
/// carried no resolvable coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenSample {
    pub phase: PointerPhase,
    pub position: Option<ScreenPoint>,
}

impl ScreenSample {
    pub fn new(phase: PointerPhase, position: Option<ScreenPoint>) -> Self {
        Self { phase, position }
    }

    /// Multi-contact input: only the first contact is used.
    pub fn from_contacts(phase: PointerPhase, contacts: &[ScreenPoint]) -> Self {
        Self {
            phase,
            position: contacts.first().copied(),
        }
    }
}

// --- Capture surface ------------------------------------------------------------------

pub struct CaptureSurface<T: InkSurface> {
    config: SurfaceConfig,
    drawing: Drawing,
    engaged: bool,
    target: T,
}

impl CaptureSurface<Bitmap> {
    /// A surface backed by an in-memory bitmap sized for the configured device scale.
    pub fn headless(config: SurfaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (width, height) = config.backing_size();
        let target = Bitmap::transparent(width, height)
            .ok_or(ConfigError::SurfaceTooLarge { width, height })?;
        Self::new(config, target)
    }
}

impl<T: InkSurface> CaptureSurface<T> {
    pub fn new(config: SurfaceConfig, target: T) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut surface = Self {
            config,
            drawing: Drawing::default(),
            engaged: false,
            target,
        };
        surface.render();
        Ok(surface)
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// The rendered output. Always reflects the current drawing.
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn set_stroke_thickness(&mut self, thickness: f64) -> Result<(), ConfigError> {
        let next = SurfaceConfig {
            stroke_thickness: thickness,
            ..self.config
        };
        next.validate()?;
        self.config = next;
        self.render();
        Ok(())
    }

    /// Start a stroke at `point`. A stroke still in progress is discarded.
    pub fn begin_stroke(&mut self, point: Point) {
        if self.engaged && !self.drawing.current.is_empty() {
            tracing::debug!(
                points = self.drawing.current.len(),
                "begin while engaged; discarding in-progress stroke"
            );
        }
        self.drawing.current = Stroke { points: vec![point] };
        self.engaged = true;
        self.render();
    }

    pub fn extend_stroke(&mut self, point: Point) {
        if !self.engaged {
            return;
        }
        self.drawing.current.points.push(point);
        self.render();
    }

    /// Seal the in-progress stroke. Pointer-up and pointer-leave both land here.
    pub fn end_stroke(&mut self) {
        if !self.engaged {
            return;
        }
        self.engaged = false;
        if self.drawing.current.is_empty() {
            return;
        }
        let stroke = std::mem::take(&mut self.drawing.current);
        tracing::trace!(
            points = stroke.len(),
            committed = self.drawing.committed.len() + 1,
            "stroke committed"
        );
        self.drawing.committed.push(stroke);
        self.render();
    }

    /// Remove the most recently committed stroke. The in-progress stroke is untouched.
    pub fn undo(&mut self) {
        if self.drawing.committed.pop().is_some() {
            tracing::trace!(committed = self.drawing.committed.len(), "undo");
        }
        self.render();
    }

    pub fn clear(&mut self) {
        self.drawing = Drawing::default();
        self.render();
    }

    /// Full redraw: clear, then every committed stroke, then the in-progress one.
    pub fn render(&mut self) {
        let SurfaceConfig {
            stroke_thickness,
            device_scale,
            ..
        } = self.config;
        self.target.clear();
        for stroke in self.drawing.strokes() {
            if stroke.is_degenerate() {
                continue;
            }
            self.target
                .polyline(stroke.points(), stroke_thickness, device_scale, bitmap::INK);
        }
    }

    /// Feed one raw input event, translating it by the surface's on-screen `origin`.
    pub fn handle(&mut self, sample: ScreenSample, origin: SurfaceOrigin) {
        match sample.phase {
            PointerPhase::Down => match self.resolve(sample, origin) {
                Some(p) => self.begin_stroke(p),
                None => {
                    self.drawing.current = Stroke::default();
                    self.engaged = true;
                    self.render();
                }
            },
            PointerPhase::Move => {
                if !self.engaged {
                    return;
                }
                if let Some(p) = self.resolve(sample, origin) {
                    if self.drawing.current.is_empty() {
                        self.drawing.current.points.push(p);
                        self.render();
                    } else {
                        self.extend_stroke(p);
                    }
                }
            }
            PointerPhase::Up | PointerPhase::Leave => self.end_stroke(),
        }
    }

    fn resolve(&self, sample: ScreenSample, origin: SurfaceOrigin) -> Option<Point> {
        let local = sample.position.and_then(|pos| origin.to_local(pos));
        match local {
            Some(p) if self.config.contains(p) => Some(p),
            _ => {
                tracing::debug!(
                    phase = ?sample.phase,
                    position = ?sample.position,
                    "dropping invalid input sample"
                );
                None
            }
        }
    }
}
