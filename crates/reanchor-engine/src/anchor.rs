use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::position::Position;
use crate::text::TextBody;

/// Default number of context characters captured on each side of a selection.
pub const CONTEXT_CHARS: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnchorError {
    #[error("Selection {start}..{end} is outside a document of {len} chars")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("Selection contains only whitespace")]
    EmptySelection,

    #[error("Anchor text is empty after trimming")]
    EmptyText,
}

/// Durable record of a selected span: the text itself plus bounded context.
///
/// Anchors are immutable and independent of any document revision. The
/// prefix and suffix disambiguate repeated occurrences of `text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AnchorRecord")]
pub struct Anchor {
    text: String,
    prefix: String,
    suffix: String,
}

#[derive(Deserialize)]
struct AnchorRecord {
    text: String,
    #[serde(default)]
    prefix: String,
    #[serde(default)]
    suffix: String,
}

impl TryFrom<AnchorRecord> for Anchor {
    type Error = AnchorError;

    fn try_from(record: AnchorRecord) -> Result<Self, Self::Error> {
        Anchor::new(record.text, record.prefix, record.suffix)
    }
}

/// An anchor captured from a document, with the span it was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub anchor: Anchor,
    pub position: Position,
}

impl Anchor {
    /// Builds an anchor from stored parts. `text` must contain something
    /// other than whitespace.
    pub fn new(
        text: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Result<Self, AnchorError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(AnchorError::EmptyText);
        }
        Ok(Self {
            text,
            prefix: prefix.into(),
            suffix: suffix.into(),
        })
    }

    /// Captures the char range `start..end` of `document`.
    ///
    /// The selection is narrowed to drop leading and trailing whitespace,
    /// then up to `context_chars` characters on each side become the prefix
    /// and suffix (fewer at the document edges).
    pub fn capture(
        document: &str,
        start: usize,
        end: usize,
        context_chars: usize,
    ) -> Result<Capture, AnchorError> {
        Self::capture_in(&TextBody::new(document), start, end, context_chars)
    }

    /// [`Anchor::capture`] over an already decoded body.
    pub fn capture_in(
        body: &TextBody,
        start: usize,
        end: usize,
        context_chars: usize,
    ) -> Result<Capture, AnchorError> {
        if start > end || end > body.len() {
            return Err(AnchorError::OutOfBounds {
                start,
                end,
                len: body.len(),
            });
        }

        let chars = body.chars();
        let (mut start, mut end) = (start, end);
        while start < end && chars[start].is_whitespace() {
            start += 1;
        }
        while end > start && chars[end - 1].is_whitespace() {
            end -= 1;
        }
        if start == end {
            return Err(AnchorError::EmptySelection);
        }

        let anchor = Self {
            text: body.substring(start, end),
            prefix: body.substring(start.saturating_sub(context_chars), start),
            suffix: body.substring(end, end.saturating_add(context_chars)),
        };
        Ok(Capture {
            anchor,
            position: Position::new(start, end),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

/// An anchor paired with an opaque caller-chosen id.
///
/// Serializes flat, as `{id, text, prefix, suffix}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifiedAnchor<Id> {
    pub id: Id,
    #[serde(flatten)]
    pub anchor: Anchor,
}

impl<Id> IdentifiedAnchor<Id> {
    pub fn new(id: Id, anchor: Anchor) -> Self {
        Self { id, anchor }
    }
}
