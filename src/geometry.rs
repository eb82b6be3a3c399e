//! Coordinate spaces shared by the capture surface and the rasterizers.
//!
//! Input arrives in screen (viewport) space; everything the core stores is in
//! surface-local logical pixels. Device-pixel scaling only happens when ink is
//! written to a backing store.

pub use kurbo::Point;

/// A raw position as reported by the input device (viewport space).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl ScreenPoint {
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// On-screen top-left corner of the drawing surface (e.g. `getBoundingClientRect()`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceOrigin {
    pub left: f64,
    pub top: f64,
}

impl SurfaceOrigin {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Translate a screen position into surface-local coordinates.
    /// Returns `None` when either coordinate is not a real number.
    pub fn to_local(&self, screen: ScreenPoint) -> Option<Point> {
        let p = Point::new(screen.client_x - self.left, screen.client_y - self.top);
        p.is_finite().then_some(p)
    }
}
