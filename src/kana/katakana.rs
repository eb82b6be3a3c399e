// Katakana table: base, voiced / half-voiced, then small forms.
use super::{KanaEntry, KanaKind::*};

pub static KATAKANA: &[KanaEntry] = &[
    KanaEntry::new("ア", "a", Base),
    KanaEntry::new("イ", "i", Base),
    KanaEntry::new("ウ", "u", Base),
    KanaEntry::new("エ", "e", Base),
    KanaEntry::new("オ", "o", Base),
    KanaEntry::new("カ", "ka", Base),
    KanaEntry::new("キ", "ki", Base),
    KanaEntry::new("ク", "ku", Base),
    KanaEntry::new("ケ", "ke", Base),
    KanaEntry::new("コ", "ko", Base),
    KanaEntry::new("サ", "sa", Base),
    KanaEntry::new("シ", "shi", Base).alt(&["si"]),
    KanaEntry::new("ス", "su", Base),
    KanaEntry::new("セ", "se", Base),
    KanaEntry::new("ソ", "so", Base),
    KanaEntry::new("タ", "ta", Base),
    KanaEntry::new("チ", "chi", Base).alt(&["ti"]),
    KanaEntry::new("ツ", "tsu", Base).alt(&["tu"]),
    KanaEntry::new("テ", "te", Base),
    KanaEntry::new("ト", "to", Base),
    KanaEntry::new("ナ", "na", Base),
    KanaEntry::new("ニ", "ni", Base),
    KanaEntry::new("ヌ", "nu", Base),
    KanaEntry::new("ネ", "ne", Base),
    KanaEntry::new("ノ", "no", Base),
    KanaEntry::new("ハ", "ha", Base),
    KanaEntry::new("ヒ", "hi", Base),
    KanaEntry::new("フ", "fu", Base).alt(&["hu"]),
    KanaEntry::new("ヘ", "he", Base),
    KanaEntry::new("ホ", "ho", Base),
    KanaEntry::new("マ", "ma", Base),
    KanaEntry::new("ミ", "mi", Base),
    KanaEntry::new("ム", "mu", Base),
    KanaEntry::new("メ", "me", Base),
    KanaEntry::new("モ", "mo", Base),
    KanaEntry::new("ヤ", "ya", Base),
    KanaEntry::new("ユ", "yu", Base),
    KanaEntry::new("ヨ", "yo", Base),
    KanaEntry::new("ラ", "ra", Base),
    KanaEntry::new("リ", "ri", Base),
    KanaEntry::new("ル", "ru", Base),
    KanaEntry::new("レ", "re", Base),
    KanaEntry::new("ロ", "ro", Base),
    KanaEntry::new("ワ", "wa", Base),
    KanaEntry::new("ヲ", "wo", Base).alt(&["o"]),
    KanaEntry::new("ン", "n", Base).alt(&["nn"]),

    KanaEntry::new("ガ", "ga", Voiced),
    KanaEntry::new("ギ", "gi", Voiced),
    KanaEntry::new("グ", "gu", Voiced),
    KanaEntry::new("ゲ", "ge", Voiced),
    KanaEntry::new("ゴ", "go", Voiced),
    KanaEntry::new("ザ", "za", Voiced),
    KanaEntry::new("ジ", "ji", Voiced).alt(&["zi"]),
    KanaEntry::new("ズ", "zu", Voiced),
    KanaEntry::new("ゼ", "ze", Voiced),
    KanaEntry::new("ゾ", "zo", Voiced),
    KanaEntry::new("ダ", "da", Voiced),
    KanaEntry::new("ヂ", "ji", Voiced).alt(&["di"]),
    KanaEntry::new("ヅ", "zu", Voiced).alt(&["du"]),
    KanaEntry::new("デ", "de", Voiced),
    KanaEntry::new("ド", "do", Voiced),
    KanaEntry::new("バ", "ba", Voiced),
    KanaEntry::new("ビ", "bi", Voiced),
    KanaEntry::new("ブ", "bu", Voiced),
    KanaEntry::new("ベ", "be", Voiced),
    KanaEntry::new("ボ", "bo", Voiced),
    KanaEntry::new("パ", "pa", Voiced),
    KanaEntry::new("ピ", "pi", Voiced),
    KanaEntry::new("プ", "pu", Voiced),
    KanaEntry::new("ペ", "pe", Voiced),
    KanaEntry::new("ポ", "po", Voiced),

    KanaEntry::untestable("ァ", "a", Small),
    KanaEntry::untestable("ィ", "i", Small),
    KanaEntry::untestable("ゥ", "u", Small),
    KanaEntry::untestable("ェ", "e", Small),
    KanaEntry::untestable("ォ", "o", Small),
    KanaEntry::untestable("ャ", "ya", Small),
    KanaEntry::untestable("ュ", "yu", Small),
    KanaEntry::untestable("ョ", "yo", Small),
    KanaEntry::untestable("ヮ", "wa", Small),
    KanaEntry::untestable("ッ", "small tsu", Small),

    KanaEntry::untestable("ー", "long vowel", Mark),
];
