//! The individual resolution strategies, cheapest and most precise first.

use serde::Serialize;

use super::thresholds::Thresholds;
use crate::anchor::Anchor;
use crate::position::Position;
use crate::similarity::similarity_chars;
use crate::text::{TextBody, find_all, to_chars};

/// Outcome of running one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The anchor was found; stop.
    Resolved(Position),
    /// The anchor cannot be found and later strategies must not run.
    Abandon,
    /// This strategy did not apply; try the next one.
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    ExactFullPattern,
    ExactWithContext,
    FuzzyPrefixAnchored,
    FuzzyWholeText,
}

impl Strategy {
    /// Evaluation order of the cascade.
    pub const CASCADE: [Strategy; 4] = [
        Strategy::ExactFullPattern,
        Strategy::ExactWithContext,
        Strategy::FuzzyPrefixAnchored,
        Strategy::FuzzyWholeText,
    ];

    pub fn run(self, body: &TextBody, anchor: &Anchor, thresholds: &Thresholds) -> Step {
        let strategy: fn(&TextBody, &Anchor, &Thresholds) -> Step = match self {
            Strategy::ExactFullPattern => exact_full_pattern,
            Strategy::ExactWithContext => exact_with_context,
            Strategy::FuzzyPrefixAnchored => fuzzy_prefix_anchored,
            Strategy::FuzzyWholeText => fuzzy_whole_text,
        };
        strategy(body, anchor, thresholds)
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::ExactFullPattern => "exact full pattern",
            Strategy::ExactWithContext => "exact with context",
            Strategy::FuzzyPrefixAnchored => "fuzzy prefix anchored",
            Strategy::FuzzyWholeText => "fuzzy whole text",
        }
    }
}

/// Finds `prefix + text + suffix` verbatim and returns the `text` part of
/// the first occurrence.
pub fn exact_full_pattern(body: &TextBody, anchor: &Anchor, _thresholds: &Thresholds) -> Step {
    let prefix_len = anchor.prefix().chars().count();
    let text_len = anchor.text().chars().count();
    let full = to_chars(&format!(
        "{}{}{}",
        anchor.prefix(),
        anchor.text(),
        anchor.suffix()
    ));

    match find_all(body.chars(), &full).next() {
        Some(at) => {
            let start = at + prefix_len;
            Step::Resolved(Position::new(start, start + text_len))
        }
        None => Step::Next,
    }
}

/// Scores every verbatim occurrence of the anchor text by how closely its
/// surroundings match the stored prefix and suffix, and takes the best.
///
/// An empty stored side scores 1.0. The first occurrence wins ties.
pub fn exact_with_context(body: &TextBody, anchor: &Anchor, thresholds: &Thresholds) -> Step {
    let text = to_chars(anchor.text());
    let prefix = to_chars(anchor.prefix());
    let suffix = to_chars(anchor.suffix());

    let mut best: Option<(usize, f64)> = None;
    for at in find_all(body.chars(), &text) {
        let after = at + text.len();
        let before_score = context_score(&prefix, body.slice(at.saturating_sub(prefix.len()), at));
        let after_score = context_score(&suffix, body.slice(after, after + suffix.len()));
        let score = (before_score + after_score) / 2.0;
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((at, score));
        }
    }

    match best {
        Some((at, score)) if score >= thresholds.context_min => {
            Step::Resolved(Position::new(at, at + text.len()))
        }
        _ => Step::Next,
    }
}

fn context_score(stored: &[char], actual: &[char]) -> f64 {
    if stored.is_empty() {
        1.0
    } else {
        similarity_chars(stored, actual)
    }
}

/// Locates the prefix, then the suffix after it, and takes what lies
/// between as long as it still resembles the anchor text.
///
/// Without a locatable prefix there is nothing to bracket the span, so the
/// anchor text is searched for directly and that answer is final.
pub fn fuzzy_prefix_anchored(body: &TextBody, anchor: &Anchor, thresholds: &Thresholds) -> Step {
    let window = &thresholds.window;
    let text = to_chars(anchor.text());

    let Some(prefix_match) = window.find(body.chars(), &to_chars(anchor.prefix()), thresholds.prefix)
    else {
        return match window.find(body.chars(), &text, thresholds.text_without_prefix) {
            Some(m) => Step::Resolved(m.position()),
            None => Step::Abandon,
        };
    };

    let start = prefix_match.end;
    let rest = body.slice(start, body.len());
    let Some(suffix_match) = window.find(rest, &to_chars(anchor.suffix()), thresholds.suffix) else {
        return Step::Next;
    };

    let end = start + suffix_match.start;
    if similarity_chars(body.slice(start, end), &text) >= thresholds.span_min {
        Step::Resolved(Position::new(start, end))
    } else {
        Step::Next
    }
}

/// Last resort: fuzzy search for the anchor text alone.
pub fn fuzzy_whole_text(body: &TextBody, anchor: &Anchor, thresholds: &Thresholds) -> Step {
    match thresholds
        .window
        .find(body.chars(), &to_chars(anchor.text()), thresholds.text_fallback)
    {
        Some(m) => Step::Resolved(m.position()),
        None => Step::Abandon,
    }
}
