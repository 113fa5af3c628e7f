use std::collections::BTreeMap;

use sigscan_core::errors::{ErrorInfo, ScanError};
use sigscan_core::ParticleRecord;

/// Lookup structure over one event's flat particle collection.
///
/// Records are held in their original collection order; `records()`
/// iterates that order, which matchers rely on as the first-fit
/// tie-break. The parent/child adjacency is derived once at build time
/// and queried lazily; a track with no recorded children simply yields
/// an empty daughter list.
///
/// The index is an arena scoped to one event: built fresh from the full
/// collection, never mutated afterwards, discarded at end of event.
#[derive(Debug, Clone)]
pub struct ParticleIndex {
    records: Vec<ParticleRecord>,
    by_track: BTreeMap<i32, usize>,
    children: BTreeMap<i32, Vec<i32>>,
}

impl ParticleIndex {
    /// Builds the index from the full per-event particle collection.
    ///
    /// A duplicate track identifier keeps the later record for direct
    /// lookup, matching map-insertion semantics of the upstream store.
    pub fn build(records: Vec<ParticleRecord>) -> Self {
        let mut by_track = BTreeMap::new();
        let mut children: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
        for (position, record) in records.iter().enumerate() {
            by_track.insert(record.track_id, position);
            if record.parent_track_id != 0 {
                children
                    .entry(record.parent_track_id)
                    .or_default()
                    .push(record.track_id);
            }
        }
        Self {
            records,
            by_track,
            children,
        }
    }

    /// Returns the record for a track identifier.
    pub fn get(&self, track_id: i32) -> Result<&ParticleRecord, ScanError> {
        self.by_track
            .get(&track_id)
            .map(|&position| &self.records[position])
            .ok_or_else(|| {
                ScanError::Index(
                    ErrorInfo::new("track-not-found", "no record for track identifier")
                        .with_context("track_id", track_id.to_string()),
                )
            })
    }

    /// Returns the direct daughters of a track, in collection order.
    ///
    /// Unknown tracks and tracks without recorded children both yield an
    /// empty list; absence is never an error.
    pub fn daughters_of(&self, track_id: i32) -> Vec<&ParticleRecord> {
        let Some(child_ids) = self.children.get(&track_id) else {
            return Vec::new();
        };
        child_ids
            .iter()
            .filter_map(|id| self.by_track.get(id))
            .map(|&position| &self.records[position])
            .collect()
    }

    /// Iterates all records in their original collection order.
    pub fn records(&self) -> impl Iterator<Item = &ParticleRecord> {
        self.records.iter()
    }

    /// Returns the number of indexed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
