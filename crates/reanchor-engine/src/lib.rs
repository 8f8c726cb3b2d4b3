/*!
 * # reanchor-engine
 *
 * Relocates highlighted spans of plain text after the document around them
 * has been lightly edited (typo fixes, reflowed paragraphs, whitespace churn).
 *
 * ## Pipeline
 *
 * 1. **Capture**: [`Anchor::capture`] records the selected text plus up to
 *    [`CONTEXT_CHARS`] characters of context on either side.
 * 2. **Resolve**: [`Resolver`] walks a cascade of exact and fuzzy strategies
 *    (see [`Strategy`]) to find the anchor's [`Position`] in the current text.
 * 3. **Merge**: [`merge`] collapses overlapping positions into [`Segment`]s,
 *    each tagged with every contributing anchor id.
 *
 * ```rust
 * use reanchor_engine::{Anchor, IdentifiedAnchor, Resolver, TextBody, CONTEXT_CHARS};
 *
 * let original = "The quick brown fox jumps over the lazy dog";
 * let capture = Anchor::capture(original, 4, 9, CONTEXT_CHARS).unwrap();
 *
 * let edited = "Then the quick brown fox jumps over the lazy dog";
 * let anchors = vec![IdentifiedAnchor::new("h1", capture.anchor)];
 * let segments = Resolver::default().resolve_segments(edited, &anchors);
 *
 * assert_eq!(segments.len(), 1);
 * let body = TextBody::new(edited);
 * assert_eq!(body.substring(segments[0].start, segments[0].end), "quick");
 * ```
 *
 * All offsets are character offsets (Unicode scalar values), not bytes.
 * Failing to resolve an anchor is never an error: the anchor is simply
 * absent from the result.
 */

pub mod anchor;
pub mod fuzzy;
pub mod position;
pub mod resolve;
pub mod segments;
pub mod similarity;
pub mod text;

// Re-export key types for easier usage
pub use anchor::{Anchor, AnchorError, CONTEXT_CHARS, Capture, IdentifiedAnchor};
pub use fuzzy::{FuzzyMatch, SearchWindow, fuzzy_find};
pub use position::Position;
pub use resolve::{
    Resolution, Resolver, Step, Strategy, Thresholds, resolve, resolve_all, unresolved,
};
pub use segments::{Segment, merge};
pub use similarity::{levenshtein, similarity, similarity_chars};
pub use text::TextBody;
