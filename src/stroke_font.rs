//! Built-in single-line vector glyphs for headless reference rendering.
//!
//! Each glyph is a list of polylines in a 0..100 em box (y grows downward).
//! The shapes are coarse: they only need to land ink where a system font
//! would, which is all the overlap score looks at. Voiced forms are composed
//! from their base glyph plus a dakuten / handakuten mark.

use crate::bitmap::{Bitmap, Rgba};
use crate::geometry::Point;

type Polyline = &'static [(u8, u8)];
type Glyph = &'static [Polyline];

/// Stroke weight relative to the em box.
pub const STROKE_WEIGHT: f64 = 0.09;

#[rustfmt::skip]
static GLYPHS: &[(char, Glyph)] = &[
    // --- CJK / marks ---
    ('一', &[&[(10, 50), (90, 50)]]),
    ('二', &[&[(22, 30), (78, 30)], &[(12, 74), (88, 74)]]),
    ('三', &[&[(20, 20), (80, 20)], &[(26, 50), (74, 50)], &[(12, 82), (88, 82)]]),
    ('十', &[&[(12, 45), (88, 45)], &[(50, 10), (50, 90)]]),
    ('口', &[&[(18, 20), (18, 84)], &[(18, 20), (82, 20), (82, 84)], &[(18, 80), (82, 80)]]),
    ('回', &[
        &[(12, 12), (12, 90)],
        &[(12, 12), (88, 12), (88, 90)],
        &[(12, 88), (88, 88)],
        &[(34, 30), (34, 68)],
        &[(34, 30), (66, 30), (66, 68)],
        &[(34, 68), (66, 68)],
    ]),
    ('ー', &[&[(10, 50), (90, 50)]]),
    // --- Katakana ---
    ('ア', &[&[(15, 22), (85, 22), (78, 38), (62, 52)], &[(50, 36), (50, 55), (42, 75), (25, 88)]]),
    ('イ', &[&[(70, 12), (50, 38), (20, 62)], &[(52, 40), (52, 90)]]),
    ('ウ', &[
        &[(50, 10), (50, 25)],
        &[(20, 25), (20, 42)],
        &[(20, 28), (80, 28), (75, 55), (60, 75), (35, 90)],
    ]),
    ('エ', &[&[(25, 25), (75, 25)], &[(50, 25), (50, 78)], &[(15, 78), (85, 78)]]),
    ('オ', &[
        &[(15, 35), (85, 35)],
        &[(60, 12), (60, 90), (50, 85)],
        &[(58, 38), (35, 65), (15, 80)],
    ]),
    ('カ', &[
        &[(20, 35), (78, 35), (76, 70), (68, 88), (58, 82)],
        &[(48, 12), (45, 50), (35, 72), (18, 88)],
    ]),
    ('キ', &[&[(20, 32), (78, 26)], &[(15, 58), (85, 50)], &[(42, 12), (55, 90)]]),
    ('ク', &[&[(45, 12), (35, 32), (18, 50)], &[(40, 26), (80, 26), (72, 52), (55, 75), (30, 90)]]),
    ('ケ', &[
        &[(38, 12), (28, 35), (12, 52)],
        &[(30, 35), (85, 35)],
        &[(60, 35), (58, 60), (45, 78), (30, 90)],
    ]),
    ('コ', &[&[(20, 28), (80, 28), (80, 80)], &[(20, 80), (80, 80)]]),
    ('サ', &[
        &[(12, 38), (88, 38)],
        &[(32, 18), (32, 62)],
        &[(68, 15), (68, 55), (60, 75), (42, 90)],
    ]),
    ('シ', &[&[(18, 20), (30, 30)], &[(14, 42), (28, 52)], &[(18, 85), (50, 70), (82, 30)]]),
    ('ス', &[&[(22, 22), (75, 22), (62, 48), (42, 70), (18, 88)], &[(55, 58), (85, 85)]]),
    ('セ', &[&[(12, 45), (85, 38), (65, 55)], &[(35, 15), (35, 78), (45, 85), (82, 85)]]),
    ('ソ', &[&[(20, 25), (35, 48)], &[(80, 18), (72, 50), (55, 72), (30, 90)]]),
    ('タ', &[
        &[(45, 12), (35, 32), (18, 50)],
        &[(40, 26), (80, 26), (72, 52), (55, 75), (30, 90)],
        &[(35, 48), (65, 62)],
    ]),
    ('チ', &[
        &[(72, 12), (30, 25)],
        &[(12, 45), (88, 45)],
        &[(50, 22), (50, 70), (42, 82), (28, 90)],
    ]),
    ('ツ', &[
        &[(18, 28), (28, 45)],
        &[(40, 22), (48, 40)],
        &[(82, 22), (72, 55), (55, 75), (30, 90)],
    ]),
    ('テ', &[&[(25, 18), (75, 18)], &[(12, 42), (88, 42)], &[(50, 42), (48, 65), (35, 88)]]),
    ('ト', &[&[(35, 10), (35, 90)], &[(35, 45), (72, 60)]]),
    ('ナ', &[&[(12, 38), (88, 38)], &[(55, 10), (55, 60), (45, 78), (28, 90)]]),
    ('ニ', &[&[(25, 30), (75, 30)], &[(15, 75), (85, 75)]]),
    ('ヌ', &[&[(22, 22), (75, 22), (62, 48), (42, 70), (18, 88)], &[(30, 45), (80, 85)]]),
    ('ネ', &[
        &[(50, 10), (50, 22)],
        &[(22, 25), (75, 25), (20, 68)],
        &[(50, 48), (50, 90)],
        &[(58, 55), (85, 70)],
    ]),
    ('ノ', &[&[(78, 15), (65, 50), (45, 75), (18, 90)]]),
    ('ハ', &[&[(38, 25), (28, 55), (12, 80)], &[(62, 25), (75, 55), (88, 80)]]),
    ('ヒ', &[&[(28, 15), (28, 82), (82, 82)], &[(28, 48), (75, 35)]]),
    ('フ', &[&[(18, 25), (80, 25), (72, 52), (55, 75), (30, 90)]]),
    ('ヘ', &[&[(12, 62), (35, 35), (88, 75)]]),
    ('ホ', &[
        &[(15, 32), (85, 32)],
        &[(50, 10), (50, 90), (42, 84)],
        &[(32, 50), (15, 75)],
        &[(68, 50), (85, 75)],
    ]),
    ('マ', &[&[(15, 25), (82, 25), (65, 52), (45, 68)], &[(38, 50), (62, 85)]]),
    ('ミ', &[&[(28, 15), (70, 25)], &[(25, 42), (65, 52)], &[(20, 72), (75, 85)]]),
    ('ム', &[&[(42, 15), (18, 80), (78, 72)], &[(62, 50), (82, 88)]]),
    ('メ', &[&[(72, 15), (55, 50), (35, 72), (15, 88)], &[(25, 35), (80, 80)]]),
    ('モ', &[
        &[(20, 20), (80, 20)],
        &[(12, 48), (88, 48)],
        &[(45, 20), (45, 80), (55, 88), (85, 88)],
    ]),
    ('ヤ', &[&[(12, 40), (85, 30), (65, 52)], &[(35, 12), (50, 90)]]),
    ('ユ', &[&[(22, 30), (72, 30), (70, 80)], &[(10, 80), (90, 80)]]),
    ('ヨ', &[&[(20, 20), (78, 20), (78, 85)], &[(22, 52), (78, 52)], &[(20, 85), (78, 85)]]),
    ('ラ', &[&[(25, 15), (75, 15)], &[(18, 38), (80, 38), (72, 60), (55, 78), (30, 90)]]),
    ('リ', &[&[(30, 15), (30, 62)], &[(70, 12), (70, 55), (60, 75), (40, 90)]]),
    ('ル', &[&[(35, 15), (35, 55), (25, 75), (12, 88)], &[(58, 12), (58, 85), (88, 62)]]),
    ('レ', &[&[(30, 12), (30, 85), (85, 55)]]),
    ('ロ', &[&[(20, 22), (20, 82)], &[(20, 22), (80, 22), (80, 82)], &[(20, 82), (80, 82)]]),
    ('ワ', &[&[(20, 22), (20, 42)], &[(20, 25), (80, 25), (75, 55), (58, 75), (32, 90)]]),
    ('ヲ', &[&[(20, 20), (78, 20), (72, 50), (55, 72), (30, 90)], &[(18, 45), (75, 45)]]),
    ('ン', &[&[(18, 25), (32, 38)], &[(15, 85), (50, 72), (85, 30)]]),
    // --- Hiragana ---
    ('あ', &[
        &[(20, 28), (75, 25)],
        &[(45, 10), (48, 60), (55, 88)],
        &[
            (65, 40), (55, 65), (40, 82), (25, 80), (22, 65), (40, 55), (65, 52), (80, 62),
            (78, 80), (60, 90),
        ],
    ]),
    ('い', &[&[(25, 25), (22, 60), (32, 80)], &[(72, 35), (80, 62)]]),
    ('う', &[&[(38, 10), (60, 18)], &[(25, 42), (55, 35), (75, 48), (65, 72), (40, 90)]]),
    ('え', &[&[(40, 12), (58, 20)], &[(25, 38), (68, 38), (22, 85), (48, 62), (58, 82), (85, 86)]]),
    ('お', &[
        &[(15, 32), (60, 30)],
        &[
            (40, 10), (40, 80), (30, 88), (18, 80), (22, 68), (45, 60), (70, 58), (82, 70),
            (75, 85), (55, 90),
        ],
        &[(72, 20), (85, 32)],
    ]),
    ('か', &[
        &[(15, 35), (62, 30), (65, 55), (58, 82), (48, 78)],
        &[(45, 12), (35, 55), (18, 88)],
        &[(78, 30), (88, 55)],
    ]),
    ('き', &[
        &[(25, 25), (72, 20)],
        &[(20, 45), (78, 40)],
        &[(42, 8), (65, 60)],
        &[(32, 70), (40, 85), (72, 88)],
    ]),
    ('く', &[&[(65, 12), (30, 50), (65, 88)]]),
    ('け', &[
        &[(20, 15), (18, 70), (25, 85)],
        &[(40, 38), (88, 35)],
        &[(68, 12), (70, 60), (60, 80), (45, 90)],
    ]),
    ('こ', &[&[(28, 28), (70, 25), (60, 35)], &[(22, 70), (30, 80), (78, 80)]]),
    ('さ', &[&[(18, 35), (82, 28)], &[(42, 10), (68, 58)], &[(30, 70), (40, 85), (72, 88)]]),
    ('し', &[&[(35, 12), (35, 70), (45, 85), (60, 85), (80, 65)]]),
    ('す', &[
        &[(10, 30), (90, 28)],
        &[(52, 10), (52, 55), (40, 62), (38, 50), (52, 45), (55, 60), (50, 75), (35, 90)],
    ]),
    ('せ', &[
        &[(10, 42), (90, 38)],
        &[(70, 15), (70, 55), (60, 62)],
        &[(32, 18), (30, 78), (40, 88), (82, 88)],
    ]),
    ('そ', &[&[(25, 15), (68, 12), (25, 42), (88, 38), (48, 55), (40, 72), (48, 85), (72, 90)]]),
    ('た', &[
        &[(12, 32), (55, 30)],
        &[(38, 10), (30, 50), (15, 85)],
        &[(58, 50), (85, 48)],
        &[(55, 72), (62, 82), (88, 82)],
    ]),
    ('ち', &[&[(15, 30), (80, 25)], &[(45, 10), (35, 60), (60, 48), (80, 58), (78, 78), (50, 90)]]),
    ('つ', &[&[(12, 40), (50, 30), (78, 35), (85, 50), (70, 68), (40, 80)]]),
    ('て', &[&[(15, 25), (85, 20), (50, 40), (38, 60), (45, 80), (65, 88)]]),
    ('と', &[&[(35, 12), (45, 45)], &[(75, 30), (30, 58), (28, 78), (45, 88), (82, 88)]]),
    ('な', &[
        &[(12, 30), (50, 28)],
        &[(35, 10), (20, 65)],
        &[(62, 28), (82, 40)],
        &[(60, 40), (60, 78), (45, 88), (35, 80), (50, 70), (75, 78), (88, 88)],
    ]),
    ('に', &[
        &[(20, 12), (18, 70), (25, 88)],
        &[(45, 28), (80, 25)],
        &[(45, 70), (52, 82), (85, 82)],
    ]),
    ('ぬ', &[
        &[(20, 25), (35, 70)],
        &[
            (60, 15), (35, 80), (20, 70), (35, 45), (65, 35), (85, 55), (80, 80), (60, 85),
            (60, 72), (75, 75), (90, 88),
        ],
    ]),
    ('ね', &[
        &[(30, 10), (30, 90)],
        &[
            (12, 35), (40, 30), (15, 75), (45, 45), (70, 40), (85, 60), (78, 82), (60, 85),
            (60, 72), (75, 75), (90, 88),
        ],
    ]),
    ('の', &[
        &[
            (50, 30), (40, 60), (30, 80), (18, 70), (15, 50), (30, 30), (55, 22), (78, 30),
            (88, 55), (75, 78), (55, 88),
        ],
    ]),
    ('は', &[
        &[(20, 12), (18, 70), (25, 88)],
        &[(42, 35), (85, 32)],
        &[(65, 12), (65, 78), (50, 88), (40, 80), (50, 70), (75, 75), (90, 88)],
    ]),
    ('ひ', &[
        &[(15, 25), (40, 22), (25, 55), (30, 80), (50, 85), (68, 65), (72, 25), (75, 50), (90, 60)],
    ]),
    ('ふ', &[
        &[(45, 12), (58, 25)],
        &[(50, 30), (40, 50), (55, 72), (45, 85), (35, 82)],
        &[(12, 75), (25, 60)],
        &[(72, 55), (90, 78)],
    ]),
    ('へ', &[&[(12, 62), (35, 35), (88, 75)]]),
    ('ほ', &[
        &[(20, 12), (18, 70), (25, 88)],
        &[(42, 22), (85, 20)],
        &[(45, 45), (82, 42)],
        &[(65, 20), (65, 78), (50, 88), (40, 80), (50, 70), (75, 75), (90, 88)],
    ]),
    ('ま', &[
        &[(18, 25), (80, 22)],
        &[(22, 48), (75, 45)],
        &[(50, 10), (50, 78), (35, 88), (28, 78), (40, 70), (70, 78), (85, 88)],
    ]),
    ('み', &[
        &[(25, 20), (55, 18), (35, 65), (20, 80), (15, 68), (30, 55), (60, 60), (85, 78)],
        &[(70, 38), (68, 65), (55, 90)],
    ]),
    ('む', &[
        &[(15, 32), (55, 30)],
        &[(35, 12), (35, 65), (25, 72), (20, 62), (35, 55), (40, 80), (60, 88), (78, 80), (80, 60)],
        &[(78, 22), (90, 38)],
    ]),
    ('め', &[
        &[(25, 25), (35, 70)],
        &[(65, 12), (35, 80), (20, 70), (35, 45), (65, 35), (85, 55), (80, 80), (55, 90)],
    ]),
    ('も', &[
        &[(40, 10), (30, 60), (35, 82), (55, 90), (72, 80), (75, 55)],
        &[(20, 32), (62, 30)],
        &[(18, 55), (65, 52)],
    ]),
    ('や', &[
        &[(15, 45), (60, 30), (82, 40), (78, 58), (62, 60)],
        &[(35, 20), (45, 32)],
        &[(30, 10), (55, 90)],
    ]),
    ('ゆ', &[
        &[(20, 20), (15, 60), (25, 80)],
        &[(25, 50), (50, 30), (78, 35), (85, 55), (70, 72), (50, 70)],
        &[(52, 12), (55, 60), (45, 90)],
    ]),
    ('よ', &[
        &[(50, 10), (50, 80), (35, 88), (25, 78), (40, 70), (70, 78), (88, 88)],
        &[(50, 35), (78, 32)],
    ]),
    ('ら', &[
        &[(35, 10), (50, 20)],
        &[(25, 30), (20, 60), (45, 50), (70, 55), (75, 75), (60, 88), (35, 90)],
    ]),
    ('り', &[&[(32, 15), (28, 55), (35, 62)], &[(68, 12), (72, 45), (65, 70), (40, 90)]]),
    ('る', &[
        &[
            (25, 15), (70, 15), (20, 60), (50, 45), (75, 52), (80, 72), (65, 88), (45, 90),
            (38, 80), (50, 72), (62, 82),
        ],
    ]),
    ('れ', &[
        &[(30, 10), (30, 90)],
        &[(12, 35), (40, 30), (15, 75), (45, 45), (65, 38), (70, 75), (90, 85)],
    ]),
    ('ろ', &[&[(25, 15), (70, 15), (20, 60), (50, 45), (75, 52), (80, 72), (60, 88), (35, 88)]]),
    ('わ', &[
        &[(30, 10), (30, 90)],
        &[(12, 35), (40, 30), (15, 75), (45, 45), (70, 40), (85, 60), (75, 82), (55, 88)],
    ]),
    ('を', &[
        &[(18, 25), (70, 22)],
        &[(45, 10), (22, 55), (55, 42), (50, 62)],
        &[(85, 45), (45, 65), (38, 80), (50, 90), (82, 90)],
    ]),
    ('ん', &[&[(55, 10), (15, 88), (40, 50), (55, 55), (60, 80), (85, 75)]]),
];

const DAKUTEN: Glyph = &[&[(78, 6), (84, 18)], &[(88, 4), (94, 16)]];
const HANDAKUTEN: Glyph = &[&[
    (86, 4),
    (92, 7),
    (93, 13),
    (88, 18),
    (82, 16),
    (80, 10),
    (86, 4),
]];

/// `(voiced forms, base forms, mark)`; the two strings align by position.
static COMPOSED: &[(&str, &str, Glyph)] = &[
    (
        "がぎぐげござじずぜぞだぢづでどばびぶべぼ",
        "かきくけこさしすせそたちつてとはひふへほ",
        DAKUTEN,
    ),
    ("ぱぴぷぺぽ", "はひふへほ", HANDAKUTEN),
    (
        "ガギグゲゴザジズゼゾダヂヅデドバビブベボ",
        "カキクケコサシスセソタチツテトハヒフヘホ",
        DAKUTEN,
    ),
    ("パピプペポ", "ハヒフヘホ", HANDAKUTEN),
];

fn base_glyph(c: char) -> Option<Glyph> {
    GLYPHS.iter().find(|(g, _)| *g == c).map(|(_, strokes)| *strokes)
}

/// Polylines for `c` (base strokes followed by any voicing mark), or `None`
/// if the font has no shape for it.
pub fn glyph_strokes(c: char) -> Option<Vec<Polyline>> {
    if let Some(g) = base_glyph(c) {
        return Some(g.to_vec());
    }
    for (voiced, bases, mark) in COMPOSED {
        if let Some(i) = voiced.chars().position(|v| v == c) {
            let base = bases.chars().nth(i)?;
            let mut strokes = base_glyph(base)?.to_vec();
            strokes.extend_from_slice(mark);
            return Some(strokes);
        }
    }
    None
}

pub fn has_glyph(c: char) -> bool {
    glyph_strokes(c).is_some()
}

/// Paint `c` into `bitmap` with its em box (`em` pixels square) centered at `center`.
/// Returns `false` when the glyph is unknown and nothing was drawn.
pub fn draw_glyph(bitmap: &mut Bitmap, c: char, center: Point, em: f64, color: Rgba<u8>) -> bool {
    let Some(strokes) = glyph_strokes(c) else {
        return false;
    };
    let unit = em / 100.0;
    let (left, top) = (center.x - em / 2.0, center.y - em / 2.0);
    for line in strokes {
        let points: Vec<Point> = line
            .iter()
            .map(|&(x, y)| Point::new(left + x as f64 * unit, top + y as f64 * unit))
            .collect();
        bitmap.stroke_polyline(&points, em * STROKE_WEIGHT, color);
    }
    true
}
