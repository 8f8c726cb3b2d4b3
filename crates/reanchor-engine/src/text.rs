/// A text body decoded into characters once.
///
/// Every offset the engine reports is a char offset into this decoding, so
/// a position can never split a multi-byte character. Batch resolution
/// decodes the body a single time and shares it across anchors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBody {
    chars: Vec<char>,
}

impl TextBody {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns `chars[start..end]` with both bounds clamped to the body.
    pub fn slice(&self, start: usize, end: usize) -> &[char] {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        &self.chars[start..end]
    }

    /// Like [`TextBody::slice`] but collected into a `String`.
    pub fn substring(&self, start: usize, end: usize) -> String {
        self.slice(start, end).iter().collect()
    }
}

impl From<&str> for TextBody {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Offsets of every (possibly overlapping) occurrence of `needle` in
/// `haystack`, in ascending order. An empty needle matches nowhere.
pub fn find_all<'a>(haystack: &'a [char], needle: &'a [char]) -> impl Iterator<Item = usize> + 'a {
    haystack
        .windows(needle.len().max(1))
        .enumerate()
        .filter(move |(_, window)| !needle.is_empty() && *window == needle)
        .map(|(at, _)| at)
}

pub(crate) fn to_chars(s: &str) -> Vec<char> {
    s.chars().collect()
}
