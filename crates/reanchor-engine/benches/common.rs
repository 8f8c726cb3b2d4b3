// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use reanchor_engine::{Anchor, CONTEXT_CHARS, IdentifiedAnchor};

#[allow(dead_code)]
pub fn generate_document(paragraphs: usize) -> String {
    let mut content = String::new();
    for i in 0..paragraphs {
        content.push_str(&format!(
            "Paragraph {i} opens with a topic sentence about item {i}. \
             Supporting detail number {i} follows, then a short example. \
             The paragraph closes by restating point {i} in other words.\n\n"
        ));
    }
    content
}

/// Captures one anchor per paragraph, on its supporting-detail sentence.
#[allow(dead_code)]
pub fn anchors_for(document: &str, paragraphs: usize) -> Vec<IdentifiedAnchor<usize>> {
    (0..paragraphs)
        .filter_map(|i| {
            let needle = format!("Supporting detail number {i} follows");
            let byte = document.find(&needle)?;
            let start = document[..byte].chars().count();
            let end = start + needle.chars().count();
            let capture = Anchor::capture(document, start, end, CONTEXT_CHARS).ok()?;
            Some(IdentifiedAnchor::new(i, capture.anchor))
        })
        .collect()
}

/// Applies a small edit to every paragraph so exact matching fails.
#[allow(dead_code)]
pub fn lightly_edit(document: &str) -> String {
    document
        .replace("follows, then", "follows and then")
        .replace("topic sentence", "topic-sentence")
}
