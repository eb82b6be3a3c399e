//! Hiragana and Katakana tables.
//!
//! Every entry doubles as the target of a practice round: `glyph` is what the
//! learner is expected to write, `romaji` is the label shown to them.

#[cfg(feature = "serde")]
use serde::Serialize;

mod hiragana;
mod katakana;

pub use hiragana::HIRAGANA;
pub use katakana::KATAKANA;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum KanaKind {
    Base,
    /// Dakuten / handakuten forms.
    Voiced,
    Small,
    Mark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct KanaEntry {
    pub glyph: &'static str,
    pub romaji: &'static str,
    pub alt: &'static [&'static str],
    pub kind: KanaKind,
    pub testable: bool,
}

impl KanaEntry {
    pub const fn new(glyph: &'static str, romaji: &'static str, kind: KanaKind) -> Self {
        Self { glyph, romaji, alt: &[], kind, testable: true }
    }

    pub const fn untestable(glyph: &'static str, romaji: &'static str, kind: KanaKind) -> Self {
        Self { glyph, romaji, alt: &[], kind, testable: false }
    }

    pub const fn alt(self, alt: &'static [&'static str]) -> Self {
        Self { alt, ..self }
    }

    /// Whether a typed romanization names this kana (case and surrounding
    /// whitespace are ignored; alternative spellings count).
    pub fn accepts(&self, input: &str) -> bool {
        let typed = input.trim().to_lowercase();
        !typed.is_empty()
            && std::iter::once(self.romaji)
                .chain(self.alt.iter().copied())
                .any(|r| r == typed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Script {
    Hiragana,
    Katakana,
}

impl Script {
    pub fn all(self) -> &'static [KanaEntry] {
        match self {
            Script::Hiragana => HIRAGANA,
            Script::Katakana => KATAKANA,
        }
    }

    /// Entries eligible for practice rounds (small kana and marks excluded).
    pub fn testable(self) -> Vec<&'static KanaEntry> {
        self.all().iter().filter(|e| e.testable).collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Script::Hiragana => "Hiragana",
            Script::Katakana => "Katakana",
        }
    }

    /// Parse a script name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "hiragana" => Some(Script::Hiragana),
            "katakana" => Some(Script::Katakana),
            _ => None,
        }
    }
}
