// Dataset invariants for the kana tables.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use kana_write::{HIRAGANA, KATAKANA, KanaKind, Script, stroke_font};

#[test]
fn glyphs_are_unique_single_characters() {
    for table in [HIRAGANA, KATAKANA] {
        let mut seen = HashSet::new();
        for e in table {
            assert!(seen.insert(e.glyph), "duplicate glyph '{}'", e.glyph);
            assert_eq!(e.glyph.chars().count(), 1, "glyph '{}' is not one character", e.glyph);
        }
    }
}

#[test]
fn testable_romaji_is_lowercase_ascii() {
    for table in [HIRAGANA, KATAKANA] {
        for e in table.iter().filter(|e| e.testable) {
            for r in std::iter::once(e.romaji).chain(e.alt.iter().copied()) {
                assert!(!r.is_empty(), "empty romaji for '{}'", e.glyph);
                let valid = r.chars().all(|c| c.is_ascii_lowercase());
                assert!(valid, "invalid romaji '{}' for '{}'", r, e.glyph);
            }
            assert!(e.accepts(e.romaji), "'{}' should accept its own romaji", e.glyph);
        }
    }
}

#[test]
fn scripts_share_romanization_order() {
    let hira: Vec<&str> = Script::Hiragana.testable().iter().map(|e| e.romaji).collect();
    let kata: Vec<&str> = Script::Katakana.testable().iter().map(|e| e.romaji).collect();
    assert_eq!(hira, kata);
}

#[test]
fn table_sizes() {
    let count = |kind: KanaKind| KATAKANA.iter().filter(|e| e.kind == kind).count();
    assert_eq!(count(KanaKind::Base), 46);
    assert_eq!(count(KanaKind::Voiced), 25);
    assert_eq!(count(KanaKind::Small), 10);
    assert_eq!(count(KanaKind::Mark), 1);
    assert_eq!(HIRAGANA.len(), 81);
    assert!(
        HIRAGANA
            .iter()
            .chain(KATAKANA)
            .filter(|e| !e.testable)
            .all(|e| matches!(e.kind, KanaKind::Small | KanaKind::Mark))
    );
}

// Headless scoring needs a reference shape for every practice target.
#[test]
fn every_testable_kana_has_a_stroke_shape() {
    for script in [Script::Hiragana, Script::Katakana] {
        let missing: Vec<&str> = script
            .testable()
            .into_iter()
            .filter(|e| !e.glyph.chars().all(stroke_font::has_glyph))
            .map(|e| e.glyph)
            .collect();
        assert!(missing.is_empty(), "{} without stroke shapes: {:?}", script.label(), missing);
    }
}
