// Hiragana table: base, voiced / half-voiced, then small forms.
use super::{KanaEntry, KanaKind::*};

pub static HIRAGANA: &[KanaEntry] = &[
    KanaEntry::new("あ", "a", Base),
    KanaEntry::new("い", "i", Base),
    KanaEntry::new("う", "u", Base),
    KanaEntry::new("え", "e", Base),
    KanaEntry::new("お", "o", Base),
    KanaEntry::new("か", "ka", Base),
    KanaEntry::new("き", "ki", Base),
    KanaEntry::new("く", "ku", Base),
    KanaEntry::new("け", "ke", Base),
    KanaEntry::new("こ", "ko", Base),
    KanaEntry::new("さ", "sa", Base),
    KanaEntry::new("し", "shi", Base).alt(&["si"]),
    KanaEntry::new("す", "su", Base),
    KanaEntry::new("せ", "se", Base),
    KanaEntry::new("そ", "so", Base),
    KanaEntry::new("た", "ta", Base),
    KanaEntry::new("ち", "chi", Base).alt(&["ti"]),
    KanaEntry::new("つ", "tsu", Base).alt(&["tu"]),
    KanaEntry::new("て", "te", Base),
    KanaEntry::new("と", "to", Base),
    KanaEntry::new("な", "na", Base),
    KanaEntry::new("に", "ni", Base),
    KanaEntry::new("ぬ", "nu", Base),
    KanaEntry::new("ね", "ne", Base),
    KanaEntry::new("の", "no", Base),
    KanaEntry::new("は", "ha", Base),
    KanaEntry::new("ひ", "hi", Base),
    KanaEntry::new("ふ", "fu", Base).alt(&["hu"]),
    KanaEntry::new("へ", "he", Base),
    KanaEntry::new("ほ", "ho", Base),
    KanaEntry::new("ま", "ma", Base),
    KanaEntry::new("み", "mi", Base),
    KanaEntry::new("む", "mu", Base),
    KanaEntry::new("め", "me", Base),
    KanaEntry::new("も", "mo", Base),
    KanaEntry::new("や", "ya", Base),
    KanaEntry::new("ゆ", "yu", Base),
    KanaEntry::new("よ", "yo", Base),
    KanaEntry::new("ら", "ra", Base),
    KanaEntry::new("り", "ri", Base),
    KanaEntry::new("る", "ru", Base),
    KanaEntry::new("れ", "re", Base),
    KanaEntry::new("ろ", "ro", Base),
    KanaEntry::new("わ", "wa", Base),
    KanaEntry::new("を", "wo", Base).alt(&["o"]),
    KanaEntry::new("ん", "n", Base).alt(&["nn"]),

    KanaEntry::new("が", "ga", Voiced),
    KanaEntry::new("ぎ", "gi", Voiced),
    KanaEntry::new("ぐ", "gu", Voiced),
    KanaEntry::new("げ", "ge", Voiced),
    KanaEntry::new("ご", "go", Voiced),
    KanaEntry::new("ざ", "za", Voiced),
    KanaEntry::new("じ", "ji", Voiced).alt(&["zi"]),
    KanaEntry::new("ず", "zu", Voiced),
    KanaEntry::new("ぜ", "ze", Voiced),
    KanaEntry::new("ぞ", "zo", Voiced),
    KanaEntry::new("だ", "da", Voiced),
    KanaEntry::new("ぢ", "ji", Voiced).alt(&["di"]),
    KanaEntry::new("づ", "zu", Voiced).alt(&["du"]),
    KanaEntry::new("で", "de", Voiced),
    KanaEntry::new("ど", "do", Voiced),
    KanaEntry::new("ば", "ba", Voiced),
    KanaEntry::new("び", "bi", Voiced),
    KanaEntry::new("ぶ", "bu", Voiced),
    KanaEntry::new("べ", "be", Voiced),
    KanaEntry::new("ぼ", "bo", Voiced),
    KanaEntry::new("ぱ", "pa", Voiced),
    KanaEntry::new("ぴ", "pi", Voiced),
    KanaEntry::new("ぷ", "pu", Voiced),
    KanaEntry::new("ぺ", "pe", Voiced),
    KanaEntry::new("ぽ", "po", Voiced),

    KanaEntry::untestable("ぁ", "a", Small),
    KanaEntry::untestable("ぃ", "i", Small),
    KanaEntry::untestable("ぅ", "u", Small),
    KanaEntry::untestable("ぇ", "e", Small),
    KanaEntry::untestable("ぉ", "o", Small),
    KanaEntry::untestable("ゃ", "ya", Small),
    KanaEntry::untestable("ゅ", "yu", Small),
    KanaEntry::untestable("ょ", "yo", Small),
    KanaEntry::untestable("ゎ", "wa", Small),
    KanaEntry::untestable("っ", "small tsu", Small),
];
