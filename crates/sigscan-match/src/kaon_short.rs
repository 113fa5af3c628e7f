use tracing::debug;

use sigscan_core::{pdg, ParticleRecord, Signature, SignatureKind, ThresholdTable, Vec3};
use sigscan_truth::{DecayVertexProvider, ParticleIndex, SignatureMatcher};

use crate::helpers::{all_above_threshold, species_match};

/// Matcher for a primary neutral kaon decaying through a K-short.
///
/// The topology is a two-level chain: the K0 must have the K-short as its
/// only daughter, and the K-short must decay to exactly {+211, -211}.
/// Only the two pions enter the signature; the parent kaons are excluded.
#[derive(Debug, Clone)]
pub struct KaonShortMatcher {
    thresholds: ThresholdTable,
}

impl KaonShortMatcher {
    /// Creates the matcher from the threshold table.
    pub fn new(thresholds: ThresholdTable) -> Self {
        Self { thresholds }
    }
}

/// Returns the K-short daughter when the record heads a K0 chain.
fn chain_short<'a>(
    index: &'a ParticleIndex,
    record: &ParticleRecord,
) -> Option<&'a ParticleRecord> {
    if record.pdg_code.abs() != pdg::NEUTRAL_KAON
        || !record.is_primary()
        || record.end_process != "Decay"
    {
        return None;
    }
    let daughters = index.daughters_of(record.track_id);
    if daughters.len() != 1 {
        return None;
    }
    let short = daughters[0];
    (short.pdg_code == pdg::KAON_SHORT
        && short.creation_process == "Decay"
        && short.end_process == "Decay")
        .then_some(short)
}

impl SignatureMatcher for KaonShortMatcher {
    fn kind(&self) -> SignatureKind {
        SignatureKind::KaonShort
    }

    fn find_signature(&self, index: &ParticleIndex) -> Option<Signature> {
        for record in index.records() {
            let Some(short) = chain_short(index, record) else {
                continue;
            };
            let pions = index.daughters_of(short.track_id);
            if pions.len() != 2 {
                continue;
            }
            if !species_match(&pions, &[-pdg::CHARGED_PION, pdg::CHARGED_PION]) {
                continue;
            }
            if !all_above_threshold(&pions, &self.thresholds) {
                continue;
            }

            debug!(track_id = short.track_id, "matched K-short topology");
            let mut signature = Signature::new(self.kind());
            for pion in pions {
                signature.push_particle(pion);
            }
            return Some(signature);
        }
        None
    }
}

impl DecayVertexProvider for KaonShortMatcher {
    /// Returns the K-short end position, where the pion pair originates.
    fn decay_vertex(&self, index: &ParticleIndex) -> Option<Vec3> {
        index
            .records()
            .find_map(|record| chain_short(index, record))
            .map(|short| short.end_position)
    }
}
