//! Write-practice round controller.
//!
//! Picks targets from a pool, records submissions and keeps score / attempts /
//! streak counters. It holds no drawing state: callers clear their capture
//! surface when advancing with [`WriteSession::next`].

use crate::kana::KanaEntry;
use crate::scorer::SimilarityResult;

/// Pen widths offered to the learner.
pub const PEN_WIDTH_MIN: f64 = 6.0;
pub const PEN_WIDTH_MAX: f64 = 24.0;
pub const PEN_WIDTH_STEP: f64 = 2.0;
pub const PEN_WIDTH_DEFAULT: f64 = 14.0;

/// Source of randomness for target selection.
pub trait Picker {
    /// An index in `0..len`. Only called with `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<F: FnMut(usize) -> usize> Picker for F {
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Entropy-backed picker (browser `crypto.getRandomValues` / OS source).
#[cfg(feature = "rng")]
#[derive(Clone, Copy, Debug, Default)]
pub struct EntropyPicker;

#[cfg(feature = "rng")]
impl Picker for EntropyPicker {
    fn pick(&mut self, len: usize) -> usize {
        let mut buf = [0u8; 8];
        if getrandom::getrandom(&mut buf).is_err() {
            tracing::warn!("entropy source unavailable; picking first entry");
            return 0;
        }
        (u64::from_le_bytes(buf) % len as u64) as usize
    }
}

/// Outcome of the last submission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Feedback {
    /// Auto-check ran the scorer.
    Scored(SimilarityResult),
    /// Auto-check was off; the learner compares against the answer themselves.
    SelfCheck,
}

impl Feedback {
    pub fn passed(&self) -> bool {
        matches!(self, Feedback::Scored(r) if r.passed)
    }
}

pub struct WriteSession {
    pool: Vec<&'static KanaEntry>,
    current: Option<&'static KanaEntry>,
    score: u32,
    attempts: u32,
    streak: u32,
    feedback: Option<Feedback>,
    auto_check: bool,
    hint_visible: bool,
    pen_width: f64,
}

impl WriteSession {
    pub fn new(pool: Vec<&'static KanaEntry>, picker: &mut impl Picker) -> Self {
        let mut session = Self {
            pool,
            current: None,
            score: 0,
            attempts: 0,
            streak: 0,
            feedback: None,
            auto_check: true,
            hint_visible: false,
            pen_width: PEN_WIDTH_DEFAULT,
        };
        session.current = session.pick(picker);
        session
    }

    fn pick(&self, picker: &mut impl Picker) -> Option<&'static KanaEntry> {
        if self.pool.is_empty() {
            return None;
        }
        let idx = picker.pick(self.pool.len()).min(self.pool.len() - 1);
        Some(self.pool[idx])
    }

    /// Current target; `None` only for an empty pool.
    pub fn current(&self) -> Option<&'static KanaEntry> {
        self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn auto_check(&self) -> bool {
        self.auto_check
    }

    pub fn set_auto_check(&mut self, on: bool) {
        self.auto_check = on;
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn toggle_hint(&mut self) -> bool {
        self.hint_visible = !self.hint_visible;
        self.hint_visible
    }

    pub fn pen_width(&self) -> f64 {
        self.pen_width
    }

    /// Clamp to the offered range and snap to the slider step. Returns the applied width.
    pub fn set_pen_width(&mut self, width: f64) -> f64 {
        let w = if width.is_finite() { width } else { PEN_WIDTH_DEFAULT };
        let steps = ((w - PEN_WIDTH_MIN) / PEN_WIDTH_STEP).round();
        let snapped = PEN_WIDTH_MIN + steps * PEN_WIDTH_STEP;
        self.pen_width = snapped.clamp(PEN_WIDTH_MIN, PEN_WIDTH_MAX);
        self.pen_width
    }

    /// `round(score / attempts × 100)`, capped at 100; `0` before any attempt.
    pub fn accuracy_percent(&self) -> u32 {
        if self.attempts == 0 {
            return 0;
        }
        ((self.score as f64 / self.attempts as f64) * 100.0).round().min(100.0) as u32
    }

    /// Record a submission for the current target.
    ///
    /// `check` is only invoked when auto-check is on. A second submit before
    /// [`next`](Self::next) returns the existing feedback without counting.
    pub fn submit<E>(
        &mut self,
        check: impl FnOnce(&KanaEntry) -> Result<SimilarityResult, E>,
    ) -> Result<Option<Feedback>, E> {
        let Some(target) = self.current else {
            return Ok(None);
        };
        if let Some(existing) = self.feedback {
            return Ok(Some(existing));
        }
        let feedback = if self.auto_check {
            Feedback::Scored(check(target)?)
        } else {
            Feedback::SelfCheck
        };
        self.attempts += 1;
        self.feedback = Some(feedback);
        Ok(Some(feedback))
    }

    /// Close the round and move to a new target.
    ///
    /// The round is credited when `mark_correct` is set or the last scored
    /// feedback passed.
    pub fn next(
        &mut self,
        mark_correct: bool,
        picker: &mut impl Picker,
    ) -> Option<&'static KanaEntry> {
        let credited = mark_correct || self.feedback.is_some_and(|f| f.passed());
        if credited {
            self.score += 1;
            self.streak += 1;
        } else {
            self.streak = 0;
        }
        tracing::info!(
            glyph = self.current.map(|e| e.glyph),
            credited,
            score = self.score,
            attempts = self.attempts,
            "write round finished"
        );
        self.feedback = None;
        self.hint_visible = false;
        self.current = self.pick(picker);
        self.current
    }
}
