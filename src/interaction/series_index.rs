use indexmap::IndexMap;

use crate::core::{NormalizedPoint, PointKey};

use super::PointerPayload;

/// Lookup table from rendering-surface payloads back to sequence positions.
///
/// Rebuilt whenever the normalized sequence changes. Identity lookups use
/// [`PointKey`] and only succeed for the revision the table was built from;
/// date lookups map each date to the first position that carries it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesIndex {
    revision: u64,
    len: usize,
    by_date: IndexMap<String, usize>,
}

impl SeriesIndex {
    #[must_use]
    pub fn build(revision: u64, points: &[NormalizedPoint]) -> Self {
        let mut by_date = IndexMap::with_capacity(points.len());
        for (idx, point) in points.iter().enumerate() {
            // Same-date points resolve to the earliest position.
            by_date.entry(point.date.clone()).or_insert(idx);
        }
        Self {
            revision,
            len: points.len(),
            by_date,
        }
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.len
    }

    #[must_use]
    pub fn key_for(&self, index: usize) -> Option<PointKey> {
        self.contains_index(index).then_some(PointKey {
            revision: self.revision,
            index,
        })
    }

    #[must_use]
    pub fn index_of_key(&self, key: PointKey) -> Option<usize> {
        (key.revision == self.revision && self.contains_index(key.index)).then_some(key.index)
    }

    #[must_use]
    pub fn index_of_date(&self, date: &str) -> Option<usize> {
        self.by_date.get(date).copied()
    }

    /// Identity match first, then date equality on the payload's point.
    #[must_use]
    pub fn resolve_payload(&self, payload: &PointerPayload) -> Option<usize> {
        payload
            .key
            .and_then(|key| self.index_of_key(key))
            .or_else(|| {
                payload
                    .point
                    .as_ref()
                    .and_then(|point| self.index_of_date(&point.date))
            })
    }
}
