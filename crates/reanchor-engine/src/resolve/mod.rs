//! Relocating anchors in a (possibly edited) text body.
//!
//! [`Resolver`] runs the [`Strategy::CASCADE`] against one anchor and stops
//! at the first strategy that resolves or abandons it. Batch entry points
//! decode the body once and resolve every anchor independently.

pub mod strategies;
pub mod thresholds;

use std::collections::HashMap;
use std::hash::Hash;

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub use strategies::{Step, Strategy};
pub use thresholds::Thresholds;

use crate::anchor::{Anchor, IdentifiedAnchor};
use crate::position::Position;
use crate::segments::{Segment, merge};
use crate::text::TextBody;

/// A resolved position and the strategy that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub position: Position,
    pub strategy: Strategy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Resolver {
    thresholds: Thresholds,
}

impl Resolver {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Resolves `anchor` in `text`, or `None` if it is no longer present.
    pub fn resolve(&self, text: &str, anchor: &Anchor) -> Option<Position> {
        self.resolve_in(&TextBody::new(text), anchor)
    }

    pub fn resolve_in(&self, body: &TextBody, anchor: &Anchor) -> Option<Position> {
        self.resolve_traced(body, anchor).map(|r| r.position)
    }

    /// Like [`Resolver::resolve_in`], also reporting which strategy matched.
    pub fn resolve_traced(&self, body: &TextBody, anchor: &Anchor) -> Option<Resolution> {
        if body.is_empty() || anchor.text().is_empty() {
            return None;
        }

        for strategy in Strategy::CASCADE {
            match strategy.run(body, anchor, &self.thresholds) {
                Step::Resolved(position) => {
                    debug!(
                        "resolved {:?} at {}..{} via {}",
                        preview(anchor.text()),
                        position.start(),
                        position.end(),
                        strategy.name()
                    );
                    return Some(Resolution { position, strategy });
                }
                Step::Abandon => break,
                Step::Next => {}
            }
        }

        debug!("unresolved {:?}", preview(anchor.text()));
        None
    }

    /// Resolves every anchor against the same text. Unresolved anchors are
    /// absent from the map.
    pub fn resolve_all<Id>(&self, text: &str, anchors: &[IdentifiedAnchor<Id>]) -> HashMap<Id, Position>
    where
        Id: Clone + Eq + Hash,
    {
        let body = TextBody::new(text);
        self.resolve_each(&body, anchors)
            .map(|(id, position)| (id.clone(), position))
            .collect()
    }

    /// [`Resolver::resolve_all`] spread across the rayon thread pool.
    #[cfg(feature = "parallel")]
    pub fn resolve_all_par<Id>(
        &self,
        text: &str,
        anchors: &[IdentifiedAnchor<Id>],
    ) -> HashMap<Id, Position>
    where
        Id: Clone + Eq + Hash + Send + Sync,
    {
        let body = TextBody::new(text);
        anchors
            .par_iter()
            .filter_map(|a| {
                self.resolve_in(&body, &a.anchor)
                    .map(|position| (a.id.clone(), position))
            })
            .collect()
    }

    /// Resolves every anchor and merges the results into highlight segments.
    ///
    /// Positions reach the merger in anchor order, so ids sharing a start
    /// offset are listed in the order their anchors were given.
    pub fn resolve_segments<Id>(&self, text: &str, anchors: &[IdentifiedAnchor<Id>]) -> Vec<Segment<Id>>
    where
        Id: Clone,
    {
        let body = TextBody::new(text);
        merge(
            self.resolve_each(&body, anchors)
                .map(|(id, position)| (id.clone(), position)),
        )
    }

    fn resolve_each<'a, Id>(
        &'a self,
        body: &'a TextBody,
        anchors: &'a [IdentifiedAnchor<Id>],
    ) -> impl Iterator<Item = (&'a Id, Position)> + 'a {
        anchors
            .iter()
            .filter_map(|a| self.resolve_in(body, &a.anchor).map(|position| (&a.id, position)))
    }
}

/// [`Resolver::resolve`] with default thresholds.
pub fn resolve(text: &str, anchor: &Anchor) -> Option<Position> {
    Resolver::default().resolve(text, anchor)
}

/// [`Resolver::resolve_all`] with default thresholds.
pub fn resolve_all<Id>(text: &str, anchors: &[IdentifiedAnchor<Id>]) -> HashMap<Id, Position>
where
    Id: Clone + Eq + Hash,
{
    Resolver::default().resolve_all(text, anchors)
}

/// Ids of `anchors` that have no entry in `positions`, in anchor order.
pub fn unresolved<'a, Id>(
    anchors: &'a [IdentifiedAnchor<Id>],
    positions: &HashMap<Id, Position>,
) -> Vec<&'a Id>
where
    Id: Eq + Hash,
{
    anchors
        .iter()
        .map(|a| &a.id)
        .filter(|id| !positions.contains_key(*id))
        .collect()
}

fn preview(text: &str) -> String {
    const MAX: usize = 24;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        format!("{}…", text.chars().take(MAX).collect::<String>())
    }
}
