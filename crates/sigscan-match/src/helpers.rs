use tracing::warn;

use sigscan_core::{ParticleRecord, ThresholdTable};
use sigscan_truth::ParticleIndex;

/// Direct daughters created by the parent's decay, in collection order.
pub(crate) fn decay_daughters<'a>(
    index: &'a ParticleIndex,
    track_id: i32,
) -> Vec<&'a ParticleRecord> {
    index
        .daughters_of(track_id)
        .into_iter()
        .filter(|daughter| daughter.creation_process == "Decay")
        .collect()
}

/// Compares found daughter species against an expected multiset.
///
/// Both sides are sorted before comparison, so the test is independent of
/// the order the daughters appear in the collection.
pub(crate) fn species_match(daughters: &[&ParticleRecord], expected: &[i32]) -> bool {
    let mut found: Vec<i32> = daughters.iter().map(|d| d.pdg_code).collect();
    let mut expected: Vec<i32> = expected.to_vec();
    found.sort_unstable();
    expected.sort_unstable();
    found == expected
}

/// Momentum threshold gate for one particle.
///
/// A species missing from the table fails the requirement; that is the
/// conservative default for an incomplete configuration.
pub(crate) fn above_threshold(record: &ParticleRecord, thresholds: &ThresholdTable) -> bool {
    match thresholds.threshold_for(record.pdg_code) {
        Some(threshold) => record.momentum.mag() > threshold,
        None => {
            warn!(
                pdg_code = record.pdg_code,
                track_id = record.track_id,
                "no momentum threshold configured for species, failing the requirement"
            );
            false
        }
    }
}

/// Threshold gate over a whole daughter set.
pub(crate) fn all_above_threshold(
    daughters: &[&ParticleRecord],
    thresholds: &ThresholdTable,
) -> bool {
    daughters
        .iter()
        .all(|daughter| above_threshold(daughter, thresholds))
}

#[cfg(test)]
mod tests {
    use sigscan_core::Vec3;

    use super::*;

    fn particle(pdg_code: i32, momentum: f64) -> ParticleRecord {
        ParticleRecord {
            track_id: 1,
            pdg_code,
            creation_process: "Decay".to_string(),
            end_process: "Decay".to_string(),
            start_position: Vec3::default(),
            end_position: Vec3::default(),
            momentum: Vec3::new(0.0, 0.0, momentum),
            end_momentum: Vec3::default(),
            parent_track_id: 0,
        }
    }

    #[test]
    fn unconfigured_species_fails_the_gate() {
        let thresholds = ThresholdTable::default();
        // Lambda has no threshold entry; any momentum fails.
        assert!(!above_threshold(&particle(3122, 5.0), &thresholds));
    }

    #[test]
    fn gate_is_strictly_above() {
        let thresholds = ThresholdTable::default();
        assert!(!above_threshold(&particle(211, 0.1), &thresholds));
        assert!(above_threshold(&particle(211, 0.100_1), &thresholds));
    }

    #[test]
    fn species_match_ignores_order() {
        let a = particle(-211, 0.5);
        let b = particle(2212, 0.5);
        assert!(species_match(&[&a, &b], &[2212, -211]));
        assert!(species_match(&[&b, &a], &[-211, 2212]));
        assert!(!species_match(&[&a, &a], &[-211, 2212]));
    }
}
