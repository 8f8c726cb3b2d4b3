//! Merging resolved positions into non-overlapping highlight segments.

use serde::Serialize;

use crate::position::Position;

/// A maximal range covered by one or more overlapping or touching positions.
///
/// `ids` lists the contributing anchors in the order their positions were
/// merged (ascending start; input order among equal starts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment<Id> {
    pub ids: Vec<Id>,
    pub start: usize,
    pub end: usize,
}

impl<Id> Segment<Id> {
    fn open(id: Id, position: Position) -> Self {
        Self {
            ids: vec![id],
            start: position.start(),
            end: position.end(),
        }
    }
}

/// Collapses positions into segments sorted by `start`.
///
/// A position that starts at or before the end of the open segment joins
/// it and may extend it; otherwise the open segment closes and a new one
/// begins. The sort is stable. Ids are appended as given, so callers pass
/// each id at most once.
pub fn merge<Id, I>(positions: I) -> Vec<Segment<Id>>
where
    I: IntoIterator<Item = (Id, Position)>,
{
    let mut sorted: Vec<(Id, Position)> = positions.into_iter().collect();
    sorted.sort_by_key(|(_, position)| position.start());

    let mut segments = Vec::new();
    let mut entries = sorted.into_iter();
    let Some((id, position)) = entries.next() else {
        return segments;
    };

    let mut current = Segment::open(id, position);
    for (id, position) in entries {
        if position.start() <= current.end {
            current.ids.push(id);
            current.end = current.end.max(position.end());
        } else {
            segments.push(std::mem::replace(&mut current, Segment::open(id, position)));
        }
    }
    segments.push(current);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_debug_snapshot;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn pos(start: usize, end: usize) -> Position {
        Position::new(start, end)
    }

    #[test]
    fn empty_input_gives_no_segments() {
        assert_eq!(merge(Vec::<(u32, Position)>::new()), vec![]);
    }

    #[test]
    fn overlapping_positions_share_a_segment() {
        let segments = merge(vec![("C", pos(20, 25)), ("B", pos(3, 8)), ("A", pos(0, 5))]);
        assert_debug_snapshot!(segments, @r#"
        [
            Segment {
                ids: [
                    "A",
                    "B",
                ],
                start: 0,
                end: 8,
            },
            Segment {
                ids: [
                    "C",
                ],
                start: 20,
                end: 25,
            },
        ]
        "#);
    }

    #[test]
    fn touching_positions_merge() {
        let segments = merge(vec![(1, pos(0, 5)), (2, pos(5, 9))]);
        assert_eq!(
            segments,
            vec![Segment {
                ids: vec![1, 2],
                start: 0,
                end: 9
            }]
        );
    }

    #[test]
    fn contained_position_does_not_shrink_segment() {
        let segments = merge(vec![(1, pos(0, 20)), (2, pos(4, 6)), (3, pos(18, 30))]);
        assert_eq!(
            segments,
            vec![Segment {
                ids: vec![1, 2, 3],
                start: 0,
                end: 30
            }]
        );
    }

    #[test]
    fn ids_follow_start_order_not_input_order() {
        let segments = merge(vec![("late", pos(6, 10)), ("early", pos(2, 7))]);
        assert_eq!(segments[0].ids, vec!["early", "late"]);
    }

    #[test]
    fn equal_starts_keep_input_order() {
        let segments = merge(vec![("x", pos(3, 4)), ("y", pos(3, 9)), ("z", pos(3, 5))]);
        assert_eq!(segments[0].ids, vec!["x", "y", "z"]);
        assert_eq!(segments[0].end, 9);
    }

    #[test]
    fn ids_are_appended_as_given() {
        let segments = merge(vec![("a", pos(0, 4)), ("a", pos(2, 6)), ("b", pos(5, 8))]);
        assert_eq!(
            segments,
            vec![Segment {
                ids: vec!["a", "a", "b"],
                start: 0,
                end: 8
            }]
        );
    }

    #[test]
    fn serializes_for_renderers() {
        let segments = merge(vec![("a", pos(1, 2))]);
        assert_eq!(
            serde_json::to_string(&segments).unwrap(),
            r#"[{"ids":["a"],"start":1,"end":2}]"#
        );
    }

    proptest! {
        #[test]
        fn segments_cover_every_id_once_without_overlap(
            ranges in prop::collection::vec((0usize..200, 0usize..40), 0..30)
        ) {
            let input: Vec<(usize, Position)> = ranges
                .iter()
                .enumerate()
                .map(|(id, &(start, len))| (id, pos(start, start + len)))
                .collect();
            let segments = merge(input.clone());

            let mut seen: Vec<usize> = segments.iter().flat_map(|s| s.ids.clone()).collect();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..input.len()).collect::<Vec<_>>());

            for pair in segments.windows(2) {
                prop_assert!(pair[0].end < pair[1].start);
            }

            for segment in &segments {
                let members: Vec<Position> = input
                    .iter()
                    .filter(|(id, _)| segment.ids.contains(id))
                    .map(|(_, p)| *p)
                    .collect();
                prop_assert_eq!(segment.start, members.iter().map(|p| p.start()).min().unwrap());
                prop_assert_eq!(segment.end, members.iter().map(|p| p.end()).max().unwrap());
            }
        }
    }
}
