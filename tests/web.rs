// Browser tests: `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

use kana_write::web::{CanvasInk, CanvasRasterizer};
use kana_write::{
    CaptureSurface, ForegroundTest, Point, Rasterizer, ScoreOptions, SurfaceConfig, score,
};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(config: &SurfaceConfig) -> HtmlCanvasElement {
    let doc = web_sys::window().unwrap().document().unwrap();
    let c: HtmlCanvasElement = doc.create_element("canvas").unwrap().dyn_into().unwrap();
    let (w, h) = config.backing_size();
    c.set_width(w);
    c.set_height(h);
    c
}

#[wasm_bindgen_test]
fn reference_glyph_has_ink() {
    let r = CanvasRasterizer::from_window().unwrap();
    let glyph = r.rasterize_glyph("一", 128, 0.78).unwrap();
    assert_eq!((glyph.width(), glyph.height()), (128, 128));
    assert!(glyph.foreground_count(&ForegroundTest::default()) > 0);
}

#[wasm_bindgen_test]
fn blank_canvas_scores_zero() {
    let config = SurfaceConfig::default();
    let el = canvas(&config);
    let r = CanvasRasterizer::from_window().unwrap();
    let res = score(&r, &el, "あ", &ScoreOptions::default()).unwrap();
    assert_eq!(res.score, 0.0);
    assert!(!res.passed);
}

#[wasm_bindgen_test]
fn captured_stroke_reaches_the_scorer() {
    let config = SurfaceConfig::default();
    let el = canvas(&config);
    let mut surface = CaptureSurface::new(config, CanvasInk::new(&el).unwrap()).unwrap();
    surface.begin_stroke(Point::new(30.0, 160.0));
    surface.extend_stroke(Point::new(290.0, 160.0));
    surface.end_stroke();

    let r = CanvasRasterizer::from_window().unwrap();
    let drawn = r.rasterize_surface(&el, 128).unwrap();
    assert!(drawn.foreground_count(&ForegroundTest::default()) > 0);

    let res = score(&r, &el, "一", &ScoreOptions::default()).unwrap();
    assert!(res.score > 0.0);
}
