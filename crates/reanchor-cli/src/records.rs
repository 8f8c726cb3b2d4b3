//! JSON records exchanged with callers: anchor files in, reports out.

use std::path::Path;

use anyhow::{Context, Result};
use reanchor_engine::{IdentifiedAnchor, Resolver, Strategy, TextBody};
use serde::{Deserialize, Serialize};

/// Opaque highlight id as stored by the caller: a string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

pub type AnchorRecord = IdentifiedAnchor<RecordId>;

#[derive(Debug, PartialEq, Serialize)]
pub struct ResolvedRecord {
    pub id: RecordId,
    pub start: usize,
    pub end: usize,
    pub strategy: Strategy,
}

/// Outcome of resolving an anchor file. Unresolved ids are listed so the
/// highlights stay visible to whoever manages them.
#[derive(Debug, PartialEq, Serialize)]
pub struct ResolveReport {
    pub resolved: Vec<ResolvedRecord>,
    pub unresolved: Vec<RecordId>,
}

pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document {}", path.display()))
}

pub fn load_anchors(path: &Path) -> Result<Vec<AnchorRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read anchors {}", path.display()))?;
    parse_anchors(&content).with_context(|| format!("Invalid anchors in {}", path.display()))
}

pub fn parse_anchors(json: &str) -> Result<Vec<AnchorRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Resolves every record, sorting the resolved ones by start then id.
pub fn build_report(resolver: &Resolver, document: &str, anchors: &[AnchorRecord]) -> ResolveReport {
    let body = TextBody::new(document);
    let mut resolved = Vec::new();
    let mut unresolved = Vec::new();

    for record in anchors {
        match resolver.resolve_traced(&body, &record.anchor) {
            Some(resolution) => resolved.push(ResolvedRecord {
                id: record.id.clone(),
                start: resolution.position.start(),
                end: resolution.position.end(),
                strategy: resolution.strategy,
            }),
            None => unresolved.push(record.id.clone()),
        }
    }

    resolved.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));
    ResolveReport {
        resolved,
        unresolved,
    }
}
