//! Sliding-window fuzzy substring search.
//!
//! Cost is roughly `len(text) × len(pattern)² × window_range` per call, so
//! this only runs as a fallback or over bounded context strings.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::similarity::similarity_chars;
use crate::text::to_chars;

/// Best-scoring window found by [`SearchWindow::find`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch {
    pub start: usize,
    pub end: usize,
    pub score: f64,
}

impl FuzzyMatch {
    pub fn position(&self) -> Position {
        Position::new(self.start, self.end)
    }
}

/// Window sizing and the stricter bar applied to short patterns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchWindow {
    /// Patterns shorter than this many chars use `short_pattern_floor`.
    pub short_pattern_len: usize,
    /// Minimum threshold for short patterns.
    pub short_pattern_floor: f64,
    /// Smallest window is `floor(shrink × len(pattern))`.
    pub shrink: f64,
    /// Largest window is `ceil(grow × len(pattern))`.
    pub grow: f64,
}

impl Default for SearchWindow {
    fn default() -> Self {
        Self {
            short_pattern_len: 10,
            short_pattern_floor: 0.85,
            shrink: 0.8,
            grow: 1.2,
        }
    }
}

impl SearchWindow {
    /// The threshold actually applied to a pattern of `pattern_len` chars.
    pub fn effective_threshold(&self, pattern_len: usize, threshold: f64) -> f64 {
        if pattern_len < self.short_pattern_len {
            threshold.max(self.short_pattern_floor)
        } else {
            threshold
        }
    }

    /// Inclusive range of window sizes tried for a pattern.
    pub fn sizes(&self, pattern_len: usize) -> (usize, usize) {
        let len = pattern_len as f64;
        ((len * self.shrink).floor() as usize, (len * self.grow).ceil() as usize)
    }

    /// Finds the window of `text` most similar to `pattern`.
    ///
    /// Windows are visited smallest size first, then left to right; a later
    /// window only replaces the current best if it scores strictly higher.
    /// Returns `None` if either input is empty or nothing reaches the
    /// effective threshold.
    pub fn find(&self, text: &[char], pattern: &[char], threshold: f64) -> Option<FuzzyMatch> {
        if text.is_empty() || pattern.is_empty() {
            return None;
        }

        let threshold = self.effective_threshold(pattern.len(), threshold);
        let (min_size, max_size) = self.sizes(pattern.len());
        let mut best: Option<FuzzyMatch> = None;

        for size in min_size.max(1)..=max_size.min(text.len()) {
            // Length difference alone caps what any window of this size can score.
            let ceiling =
                1.0 - size.abs_diff(pattern.len()) as f64 / size.max(pattern.len()) as f64;
            if ceiling < threshold || best.is_some_and(|b| ceiling <= b.score) {
                continue;
            }

            for start in 0..=text.len() - size {
                let score = similarity_chars(&text[start..start + size], pattern);
                if score >= threshold && best.is_none_or(|b| score > b.score) {
                    best = Some(FuzzyMatch {
                        start,
                        end: start + size,
                        score,
                    });
                }
            }
        }

        if let Some(m) = best {
            trace!(
                "fuzzy match for {} chars at {}..{} (score {:.3})",
                pattern.len(),
                m.start,
                m.end,
                m.score
            );
        }
        best
    }
}

/// [`SearchWindow::find`] with the default window policy over `&str` inputs.
pub fn fuzzy_find(text: &str, pattern: &str, threshold: f64) -> Option<FuzzyMatch> {
    SearchWindow::default().find(&to_chars(text), &to_chars(pattern), threshold)
}
