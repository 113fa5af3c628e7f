use tracing::debug;

use sigscan_core::{pdg, ParticleRecord, Signature, SignatureKind, ThresholdTable, Vec3};
use sigscan_truth::{DecayVertexProvider, ParticleIndex, SignatureMatcher};

use crate::helpers::{above_threshold, all_above_threshold, decay_daughters, species_match};

/// Matcher for a primary Lambda baryon decaying to a pion and a proton.
///
/// The emission rule follows each charged daughter through secondary
/// rescattering: descendants sharing the daughter's exact species code
/// that pass the threshold gate are appended depth-first, so a proton
/// that knocks out another proton contributes both to the signature.
#[derive(Debug, Clone)]
pub struct LambdaMatcher {
    thresholds: ThresholdTable,
}

impl LambdaMatcher {
    /// Creates the matcher from the threshold table.
    pub fn new(thresholds: ThresholdTable) -> Self {
        Self { thresholds }
    }

    /// Emits a charged daughter and its same-species descendant chain.
    ///
    /// The walk is an explicit depth-first worklist: children are pushed
    /// in reverse collection order so the first child is expanded first,
    /// and it stops along each branch as soon as a descendant changes
    /// species or fails the threshold gate.
    fn emit_with_rescatters(
        &self,
        index: &ParticleIndex,
        daughter: &ParticleRecord,
        signature: &mut Signature,
    ) {
        signature.push_particle(daughter);
        let mut pending: Vec<&ParticleRecord> = Vec::new();
        push_matching(index, daughter.track_id, daughter.pdg_code, &self.thresholds, &mut pending);
        while let Some(descendant) = pending.pop() {
            signature.push_particle(descendant);
            push_matching(
                index,
                descendant.track_id,
                daughter.pdg_code,
                &self.thresholds,
                &mut pending,
            );
        }
    }
}

fn push_matching<'a>(
    index: &'a ParticleIndex,
    parent: i32,
    species: i32,
    thresholds: &ThresholdTable,
    pending: &mut Vec<&'a ParticleRecord>,
) {
    let matching: Vec<&ParticleRecord> = index
        .daughters_of(parent)
        .into_iter()
        .filter(|child| child.pdg_code == species && above_threshold(child, thresholds))
        .collect();
    for child in matching.into_iter().rev() {
        pending.push(child);
    }
}

impl SignatureMatcher for LambdaMatcher {
    fn kind(&self) -> SignatureKind {
        SignatureKind::Lambda
    }

    fn find_signature(&self, index: &ParticleIndex) -> Option<Signature> {
        for record in index.records() {
            if record.pdg_code.abs() != pdg::LAMBDA
                || !record.is_primary()
                || record.end_process != "Decay"
            {
                continue;
            }

            let decay = decay_daughters(index, record.track_id);
            if decay.len() != 2 {
                continue;
            }
            if !species_match(&decay, &[-pdg::CHARGED_PION, pdg::PROTON]) {
                continue;
            }
            if !all_above_threshold(&decay, &self.thresholds) {
                continue;
            }

            debug!(track_id = record.track_id, "matched Lambda topology");
            let mut signature = Signature::new(self.kind());
            for daughter in decay {
                if !pdg::is_charged(daughter.pdg_code) {
                    continue;
                }
                self.emit_with_rescatters(index, daughter, &mut signature);
            }
            return Some(signature);
        }
        None
    }
}

impl DecayVertexProvider for LambdaMatcher {
    /// Returns the Lambda end position for a two-daughter primary decay.
    fn decay_vertex(&self, index: &ParticleIndex) -> Option<Vec3> {
        index
            .records()
            .find(|record| {
                record.pdg_code.abs() == pdg::LAMBDA
                    && record.is_primary()
                    && record.end_process == "Decay"
                    && index.daughters_of(record.track_id).len() == 2
            })
            .map(|record| record.end_position)
    }
}
