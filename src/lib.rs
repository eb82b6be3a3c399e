//! Kana Write core crate.
//!
//! Freehand practice for Hiragana / Katakana: a stroke capture surface turns
//! pointer input into a rendered drawing, and the scorer compares that drawing
//! against the target glyph with a bitmap Intersection-over-Union heuristic.
//! The browser build wires both to a `<canvas>` through [`web`]; everything
//! else is plain Rust and runs headless (see [`raster::SoftwareRasterizer`]).

use wasm_bindgen::prelude::*;

pub mod bitmap;
pub mod geometry;
pub mod kana;
pub mod raster;
pub mod scorer;
pub mod session;
pub mod stroke_font;
pub mod surface;
pub mod web;

pub use bitmap::{Bitmap, ForegroundTest, Rgba};
pub use geometry::{Point, ScreenPoint, SurfaceOrigin};
pub use kana::{HIRAGANA, KATAKANA, KanaEntry, KanaKind, Script};
pub use raster::{RasterError, Rasterizer, SoftwareRasterizer};
pub use scorer::{ScoreOptions, SimilarityResult, iou, score};
pub use session::{Feedback, Picker, WriteSession};
pub use surface::{
    CaptureSurface, ConfigError, Drawing, InkSurface, PointerPhase, ScreenSample, Stroke,
    SurfaceConfig,
};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Logging is optional; a second init (or a host that already set one) is fine.
    #[cfg(target_arch = "wasm32")]
    let _ = tracing_wasm::try_set_as_global_default();
}
