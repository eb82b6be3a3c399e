// Integration tests (native) for the `kana-write` crate.
// Capture -> render -> score end to end on the headless rasterizer.

use kana_write::{
    Bitmap, CaptureSurface, Point, PointerPhase, ScoreOptions, ScreenPoint, ScreenSample,
    SoftwareRasterizer, SurfaceConfig, SurfaceOrigin, WriteSession, score, stroke_font,
};

fn surface() -> CaptureSurface<Bitmap> {
    CaptureSurface::headless(SurfaceConfig::default()).unwrap()
}

/// Feed one stroke as screen-space pointer events.
fn gesture(
    s: &mut CaptureSurface<Bitmap>,
    origin: SurfaceOrigin,
    pts: &[(f64, f64)],
    end: PointerPhase,
) {
    let at = |(x, y): (f64, f64)| Some(ScreenPoint::new(x + origin.left, y + origin.top));
    s.handle(ScreenSample::new(PointerPhase::Down, at(pts[0])), origin);
    for &p in &pts[1..] {
        s.handle(ScreenSample::new(PointerPhase::Move, at(p)), origin);
    }
    s.handle(ScreenSample::new(end, None), origin);
}

fn horizontal_line() -> Vec<(f64, f64)> {
    (0..=10).map(|i| (30.0 + i as f64 * 26.0, 160.0)).collect()
}

fn draw_box(s: &mut CaptureSurface<Bitmap>, origin: SurfaceOrigin) {
    gesture(s, origin, &[(80.0, 86.0), (80.0, 240.0)], PointerPhase::Up);
    gesture(s, origin, &[(80.0, 86.0), (240.0, 86.0), (240.0, 240.0)], PointerPhase::Up);
    gesture(s, origin, &[(80.0, 236.0), (240.0, 236.0)], PointerPhase::Up);
}

#[test]
fn horizontal_line_matches_ichi_but_not_kai() {
    let origin = SurfaceOrigin::new(24.0, 180.0);
    let mut s = surface();
    gesture(&mut s, origin, &horizontal_line(), PointerPhase::Up);
    assert_eq!(s.drawing().committed().len(), 1);

    let opts = ScoreOptions::default();
    let ichi = score(&SoftwareRasterizer, s.target(), "一", &opts).unwrap();
    let kai = score(&SoftwareRasterizer, s.target(), "回", &opts).unwrap();
    assert!(ichi.passed, "一 should pass, got {}", ichi.score);
    assert!(ichi.score > 0.3, "一 score too low: {}", ichi.score);
    assert!(!kai.passed, "回 should fail, got {}", kai.score);
    assert!(kai.score * 3.0 < ichi.score);
}

#[test]
fn box_matches_kuchi() {
    let origin = SurfaceOrigin::default();
    let mut s = surface();
    draw_box(&mut s, origin);
    let opts = ScoreOptions::WRITE_PRACTICE;
    let kuchi = score(&SoftwareRasterizer, s.target(), "口", &opts).unwrap();
    let ichi = score(&SoftwareRasterizer, s.target(), "一", &opts).unwrap();
    assert!(kuchi.passed, "口 should pass, got {}", kuchi.score);
    assert!(!ichi.passed, "一 should fail, got {}", ichi.score);
}

#[test]
fn leave_commits_like_up() {
    let origin = SurfaceOrigin::new(5.0, 5.0);
    let mut a = surface();
    let mut b = surface();
    gesture(&mut a, origin, &horizontal_line(), PointerPhase::Up);
    gesture(&mut b, origin, &horizontal_line(), PointerPhase::Leave);
    assert_eq!(a.drawing(), b.drawing());
    assert_eq!(a.target(), b.target());
}

#[test]
fn scoring_sees_undo_and_clear() {
    let origin = SurfaceOrigin::default();
    let mut s = surface();
    let opts = ScoreOptions::default();
    gesture(&mut s, origin, &horizontal_line(), PointerPhase::Up);
    draw_box(&mut s, origin);
    let cluttered = score(&SoftwareRasterizer, s.target(), "一", &opts).unwrap();

    // drop the three box strokes
    s.undo();
    s.undo();
    s.undo();
    let clean = score(&SoftwareRasterizer, s.target(), "一", &opts).unwrap();
    assert!(clean.score > cluttered.score);

    s.clear();
    let blank = score(&SoftwareRasterizer, s.target(), "一", &opts).unwrap();
    assert_eq!(blank.score, 0.0);
    assert!(!blank.passed);
}

#[test]
fn in_progress_stroke_is_scored() {
    let mut s = surface();
    s.begin_stroke(Point::new(30.0, 160.0));
    s.extend_stroke(Point::new(290.0, 160.0));
    assert!(s.is_engaged());
    let res = score(&SoftwareRasterizer, s.target(), "一", &ScoreOptions::default()).unwrap();
    assert!(res.passed);
}

#[test]
fn device_scale_does_not_change_verdict() {
    let hi_dpi = SurfaceConfig {
        device_scale: 2.0,
        ..SurfaceConfig::default()
    };
    let mut s = CaptureSurface::headless(hi_dpi).unwrap();
    gesture(&mut s, SurfaceOrigin::default(), &horizontal_line(), PointerPhase::Up);
    assert_eq!(s.target().width(), 640);
    let res = score(&SoftwareRasterizer, s.target(), "一", &ScoreOptions::default()).unwrap();
    assert!(res.passed, "score {}", res.score);
}

#[test]
fn write_round_end_to_end() {
    let pool = vec![kana_write::KATAKANA.iter().find(|e| e.glyph == "ニ").unwrap()];
    let mut pick_first = |_: usize| 0;
    let mut session = WriteSession::new(pool, &mut pick_first);
    let mut s = surface();
    gesture(&mut s, SurfaceOrigin::default(), &[(100.0, 105.0), (220.0, 105.0)], PointerPhase::Up);
    gesture(&mut s, SurfaceOrigin::default(), &[(70.0, 215.0), (250.0, 215.0)], PointerPhase::Up);

    let opts = ScoreOptions::WRITE_PRACTICE;
    let feedback = session
        .submit(|target| score(&SoftwareRasterizer, s.target(), target.glyph, &opts))
        .unwrap()
        .unwrap();
    assert!(feedback.passed(), "{feedback:?}");

    session.next(false, &mut pick_first);
    s.clear();
    assert_eq!((session.score(), session.attempts(), session.streak()), (1, 1, 1));
    assert!(s.drawing().is_blank());
}

/// Trace `glyph`'s reference strokes onto the surface at the reference's relative size.
fn trace(s: &mut CaptureSurface<Bitmap>, glyph: char) {
    let em = 320.0 * 0.78;
    let left = 160.0 - em / 2.0;
    for line in stroke_font::glyph_strokes(glyph).unwrap() {
        let pts: Vec<(f64, f64)> = line
            .iter()
            .map(|&(x, y)| (left + x as f64 * em / 100.0, left + y as f64 * em / 100.0))
            .collect();
        gesture(s, SurfaceOrigin::default(), &pts, PointerPhase::Up);
    }
}

#[test]
fn traced_hiragana_passes() {
    let mut s = surface();
    trace(&mut s, 'あ');
    let opts = ScoreOptions::WRITE_PRACTICE;
    let a = score(&SoftwareRasterizer, s.target(), "あ", &opts).unwrap();
    let o = score(&SoftwareRasterizer, s.target(), "お", &opts).unwrap();
    let ichi = score(&SoftwareRasterizer, s.target(), "一", &opts).unwrap();
    assert!(a.passed, "あ should pass, got {}", a.score);
    assert!(a.score > o.score);
    assert!(!ichi.passed, "一 should fail, got {}", ichi.score);
}
