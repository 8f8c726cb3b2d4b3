//! Normalized edit-distance similarity.

use crate::text::to_chars;

/// Similarity of two strings in `[0, 1]`, measured over characters.
///
/// `1 - levenshtein(a, b) / max(len(a), len(b))`. Two empty strings are
/// identical (`1.0`); an empty string against a non-empty one scores `0.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_chars(&to_chars(a), &to_chars(b))
}

/// [`similarity`] over pre-decoded characters.
pub fn similarity_chars(a: &[char], b: &[char]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

/// Levenshtein distance with unit cost insertions, deletions and substitutions.
///
/// Keeps two rows of the DP table rather than the full matrix.
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
