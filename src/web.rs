//! Browser wiring for the write-practice mode.
//!
//! `start_write_practice()` binds a `<canvas>` to a [`CaptureSurface`] and a
//! [`WriteSession`]; the remaining exports drive the round from page buttons.
//! Everything lives in one thread-local slot because the page's event loop is
//! the only caller.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, MouseEvent, TouchEvent, window,
};

use crate::bitmap::{self, Bitmap, Rgba};
use crate::geometry::{Point, ScreenPoint, SurfaceOrigin};
use crate::kana::Script;
use crate::raster::{RasterError, Rasterizer};
use crate::scorer::{self, ScoreOptions};
use crate::session::{Feedback, Picker, WriteSession};
use crate::surface::{CaptureSurface, InkSurface, PointerPhase, ScreenSample, SurfaceConfig};

/// Font stack for reference glyphs; Japanese-capable faces before generic fallbacks.
const GLYPH_FONT_STACK: &str = concat!(
    "system-ui, -apple-system, Segoe UI, Roboto, Noto Sans JP, ",
    "Meiryo, Helvetica, Arial, sans-serif"
);

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, RasterError> {
    canvas
        .get_context("2d")
        .map_err(|e| RasterError::Unavailable(js_error(e)))?
        .ok_or_else(|| RasterError::Unavailable("canvas has no 2d context".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| RasterError::Unavailable("2d context has unexpected type".into()))
}

// --- Visible ink surface ------------------------------------------------------

/// The on-page canvas as a render target. The backing store is sized in device
/// pixels; draw calls are scaled per frame.
pub struct CanvasInk {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasInk {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, RasterError> {
        Ok(Self {
            canvas: canvas.clone(),
            ctx: context_2d(canvas)?,
        })
    }
}

impl InkSurface for CanvasInk {
    fn clear(&mut self) {
        // Current backing size; the page may have resized the canvas since binding.
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn polyline(&mut self, points: &[Point], line_width: f64, device_scale: f64, color: Rgba<u8>) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let ctx = &self.ctx;
        ctx.save();
        if let Err(err) = ctx.scale(device_scale, device_scale) {
            tracing::warn!(
                error = %js_error(err),
                device_scale,
                "canvas scale failed; stroke skipped"
            );
            ctx.restore();
            return;
        }
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        ctx.set_stroke_style(&JsValue::from_str(&bitmap::css_hex(color)));
        ctx.set_line_width(line_width);
        ctx.begin_path();
        ctx.move_to(first.x, first.y);
        for p in rest {
            ctx.line_to(p.x, p.y);
        }
        ctx.stroke();
        ctx.restore();
    }
}

// --- Off-screen rasterizer ----------------------------------------------------------

/// Rasterizer backed by off-screen canvases of the page's document.
pub struct CanvasRasterizer {
    document: Document,
}

impl CanvasRasterizer {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Result<Self, RasterError> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| RasterError::Unavailable("no document".into()))?;
        Ok(Self::new(document))
    }

    fn blank(
        &self,
        size: u32,
    ) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), RasterError> {
        let canvas: HtmlCanvasElement = self
            .document
            .create_element("canvas")
            .map_err(|e| RasterError::Unavailable(js_error(e)))?
            .dyn_into()
            .map_err(|_| RasterError::Unavailable("created element is not a canvas".into()))?;
        canvas.set_width(size);
        canvas.set_height(size);
        let ctx = context_2d(&canvas)?;
        ctx.set_fill_style(&JsValue::from_str(&bitmap::css_hex(bitmap::WHITE)));
        ctx.fill_rect(0.0, 0.0, size as f64, size as f64);
        Ok((canvas, ctx))
    }

    fn read_back(ctx: &CanvasRenderingContext2d, size: u32) -> Result<Bitmap, RasterError> {
        let image = ctx
            .get_image_data(0.0, 0.0, size as f64, size as f64)
            .map_err(|e| RasterError::Readback(js_error(e)))?;
        let (w, h) = (image.width(), image.height());
        Bitmap::from_rgba(w, h, image.data().0)
            .ok_or_else(|| RasterError::Readback(format!("image data does not match {w}x{h}")))
    }
}

impl Rasterizer for CanvasRasterizer {
    type Surface = HtmlCanvasElement;

    fn rasterize_surface(
        &self,
        surface: &HtmlCanvasElement,
        size: u32,
    ) -> Result<Bitmap, RasterError> {
        let (_canvas, ctx) = self.blank(size)?;
        let side = size as f64;
        ctx.draw_image_with_html_canvas_element_and_dw_and_dh(surface, 0.0, 0.0, side, side)
            .map_err(|e| RasterError::Unavailable(js_error(e)))?;
        Self::read_back(&ctx, size)
    }

    fn rasterize_glyph(
        &self,
        glyph: &str,
        size: u32,
        glyph_scale: f64,
    ) -> Result<Bitmap, RasterError> {
        let (_canvas, ctx) = self.blank(size)?;
        let half = size as f64 / 2.0;
        let font_px = (size as f64 * glyph_scale).floor();
        ctx.set_fill_style(&JsValue::from_str(&bitmap::css_hex(bitmap::BLACK)));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_font(&format!("{font_px}px {GLYPH_FONT_STACK}"));
        ctx.fill_text(glyph, half, half)
            .map_err(|e| RasterError::Unavailable(js_error(e)))?;
        Self::read_back(&ctx, size)
    }
}

// --- Randomness -----------------------------------------------------------------------

/// Linear congruential picker seeded from the page clock.
#[cfg_attr(feature = "rng", allow(dead_code))]
struct ClockPicker {
    state: u64,
}

#[cfg_attr(feature = "rng", allow(dead_code))]
impl ClockPicker {
    fn new() -> Self {
        let now = window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        Self { state: now.to_bits() }
    }
}

impl Picker for ClockPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.state >> 33) % len as u64) as usize
    }
}

#[cfg(feature = "rng")]
fn picker() -> impl Picker {
    crate::session::EntropyPicker
}

#[cfg(not(feature = "rng"))]
fn picker() -> impl Picker {
    ClockPicker::new()
}

// --- Page state ---------------------------------------------------------------------------

struct WriteState {
    canvas: HtmlCanvasElement,
    surface: CaptureSurface<CanvasInk>,
    session: WriteSession,
    options: ScoreOptions,
}

thread_local! {
    static WRITE_STATE: RefCell<Option<WriteState>> = const { RefCell::new(None) };
}

fn with_state<R>(f: impl FnOnce(&mut WriteState) -> R) -> Option<R> {
    WRITE_STATE.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Result of a submission as seen from JS.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct Verdict {
    pub passed: bool,
    pub score: f64,
    /// `false` when auto-check is off and the learner judges the answer.
    pub auto_checked: bool,
}

#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct Stats {
    pub score: u32,
    pub attempts: u32,
    pub streak: u32,
    pub accuracy_percent: u32,
}

fn screen_sample(phase: PointerPhase, evt: &Event) -> ScreenSample {
    if let Some(touch) = evt.dyn_ref::<TouchEvent>() {
        let list = touch.touches();
        let contacts: Vec<ScreenPoint> = (0..list.length())
            .filter_map(|i| list.get(i))
            .map(|t| ScreenPoint::new(t.client_x() as f64, t.client_y() as f64))
            .collect();
        return ScreenSample::from_contacts(phase, &contacts);
    }
    let position = evt
        .dyn_ref::<MouseEvent>()
        .map(|m| ScreenPoint::new(m.client_x() as f64, m.client_y() as f64));
    ScreenSample::new(phase, position)
}

#[wasm_bindgen]
pub fn start_write_practice(canvas_id: &str, script: &str) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let script = Script::from_name(script)
        .ok_or_else(|| JsValue::from_str(&format!("unknown script '{script}'")))?;

    let config = SurfaceConfig {
        device_scale: win.device_pixel_ratio().max(1.0),
        ..SurfaceConfig::default()
    };
    let (backing_w, backing_h) = config.backing_size();

    // Create / reuse the drawing canvas
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(canvas_id) {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id(canvas_id);
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    canvas.set_width(backing_w);
    canvas.set_height(backing_h);
    canvas
        .set_attribute(
            "style",
            &format!(
                "width:{}px; height:{}px; touch-action:none; background:#fff; \
                 border:1px solid #d1d5db; border-radius:8px;",
                config.width, config.height
            ),
        )
        .ok();

    let ink = CanvasInk::new(&canvas).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let surface = CaptureSurface::new(config, ink).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut session = WriteSession::new(script.testable(), &mut picker());
    session.set_pen_width(config.stroke_thickness);

    tracing::info!(
        script = script.label(),
        canvas_id,
        backing_w,
        backing_h,
        "write practice started"
    );
    WRITE_STATE.with(|cell| {
        *cell.borrow_mut() = Some(WriteState {
            canvas: canvas.clone(),
            surface,
            session,
            options: ScoreOptions::WRITE_PRACTICE,
        });
    });

    // Pointer listeners; leave behaves exactly like up.
    let phases = [
        ("pointerdown", PointerPhase::Down),
        ("pointermove", PointerPhase::Move),
        ("pointerup", PointerPhase::Up),
        ("pointerleave", PointerPhase::Leave),
    ];
    for (name, phase) in phases {
        let closure = Closure::wrap(Box::new(move |evt: Event| {
            if matches!(phase, PointerPhase::Down | PointerPhase::Move) {
                evt.prevent_default();
            }
            let sample = screen_sample(phase, &evt);
            with_state(|st| {
                let rect = st.canvas.get_bounding_client_rect();
                st.surface.handle(sample, SurfaceOrigin::new(rect.left(), rect.top()));
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

#[wasm_bindgen]
pub fn write_undo() {
    with_state(|st| st.surface.undo());
}

#[wasm_bindgen]
pub fn write_clear() {
    with_state(|st| st.surface.clear());
}

/// Returns the applied (clamped) width.
#[wasm_bindgen]
pub fn write_set_pen_width(width: f64) -> Option<f64> {
    with_state(|st| {
        let applied = st.session.set_pen_width(width);
        st.surface.set_stroke_thickness(applied).ok();
        applied
    })
}

#[wasm_bindgen]
pub fn write_set_auto_check(on: bool) {
    with_state(|st| st.session.set_auto_check(on));
}

#[wasm_bindgen]
pub fn write_toggle_hint() -> bool {
    with_state(|st| st.session.toggle_hint()).unwrap_or(false)
}

/// Score the current drawing against the current target.
#[wasm_bindgen]
pub fn write_submit() -> Result<Option<Verdict>, JsValue> {
    let outcome = with_state(|st| -> Result<Option<Feedback>, RasterError> {
        let rasterizer = CanvasRasterizer::from_window()?;
        let canvas = &st.canvas;
        let options = st.options;
        st.session
            .submit(|target| scorer::score(&rasterizer, canvas, target.glyph, &options))
    });
    let feedback = match outcome {
        None => return Ok(None),
        Some(res) => res.map_err(|e| JsValue::from_str(&e.to_string()))?,
    };
    Ok(feedback.map(|fb| match fb {
        Feedback::Scored(r) => Verdict { passed: r.passed, score: r.score, auto_checked: true },
        Feedback::SelfCheck => Verdict { passed: false, score: 0.0, auto_checked: false },
    }))
}

/// Close the round (crediting it if `mark_correct` or it passed), clear the
/// drawing and return the next target glyph.
#[wasm_bindgen]
pub fn write_next(mark_correct: bool) -> Option<String> {
    with_state(|st| {
        let next = st.session.next(mark_correct, &mut picker());
        st.surface.clear();
        next.map(|e| e.glyph.to_string())
    })
    .flatten()
}

#[wasm_bindgen]
pub fn write_current_glyph() -> Option<String> {
    with_state(|st| st.session.current().map(|e| e.glyph.to_string())).flatten()
}

#[wasm_bindgen]
pub fn write_current_romaji() -> Option<String> {
    with_state(|st| st.session.current().map(|e| e.romaji.to_string())).flatten()
}

#[wasm_bindgen]
pub fn write_stats() -> Option<Stats> {
    with_state(|st| Stats {
        score: st.session.score(),
        attempts: st.session.attempts(),
        streak: st.session.streak(),
        accuracy_percent: st.session.accuracy_percent(),
    })
}

/// Replace the scoring options from a JSON object (missing keys keep defaults),
/// e.g. `{"threshold": 0.2, "foreground": {"alphaCutoff": 10}}`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn write_configure(json: &str) -> Result<(), JsValue> {
    let options = ScoreOptions::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    with_state(|st| st.options = options);
    Ok(())
}
