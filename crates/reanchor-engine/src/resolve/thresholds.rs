use serde::{Deserialize, Serialize};

use crate::fuzzy::SearchWindow;

/// Acceptance thresholds for the resolution cascade.
///
/// The defaults are empirically tuned; changing them changes which anchors
/// resolve, so stored highlights may move or disappear.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum mean prefix/suffix similarity for an exact text occurrence.
    pub context_min: f64,
    /// Fuzzy threshold for locating the stored prefix.
    pub prefix: f64,
    /// Fuzzy threshold for locating the stored suffix after the prefix.
    pub suffix: f64,
    /// Minimum similarity between the text bracketed by prefix and suffix
    /// and the anchor text.
    pub span_min: f64,
    /// Fuzzy threshold for the anchor text when the prefix cannot be found.
    pub text_without_prefix: f64,
    /// Fuzzy threshold for the anchor text as the last resort.
    pub text_fallback: f64,
    pub window: SearchWindow,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            context_min: 0.5,
            prefix: 0.7,
            suffix: 0.7,
            span_min: 0.6,
            text_without_prefix: 0.8,
            text_fallback: 0.75,
            window: SearchWindow::default(),
        }
    }
}
