use tracing::debug;

use sigscan_core::{
    pdg, DecayMode, KaonConfig, ParticleRecord, Signature, SignatureKind, ThresholdTable,
};
use sigscan_truth::{ParticleIndex, SignatureMatcher};

use crate::helpers::{all_above_threshold, decay_daughters, species_match};

/// Matcher for a primary charged kaon decaying at rest or in flight.
///
/// The targeted final state is charge-correlated: muonic mode expects
/// {∓13, ±14}, pionic mode {±211, 111}. With `grab_electron` set and
/// muonic mode selected, the electron from a subsequent muon decay is
/// appended to the signature as well.
#[derive(Debug, Clone)]
pub struct ChargedKaonMatcher {
    thresholds: ThresholdTable,
    config: KaonConfig,
}

impl ChargedKaonMatcher {
    /// Creates the matcher from its configuration.
    pub fn new(thresholds: ThresholdTable, config: KaonConfig) -> Self {
        Self { thresholds, config }
    }

    fn expected_daughters(&self, kaon_pdg: i32) -> Vec<i32> {
        match self.config.decay_mode {
            DecayMode::Muonic => {
                if kaon_pdg == pdg::CHARGED_KAON {
                    vec![-pdg::MUON, pdg::MUON_NEUTRINO]
                } else {
                    vec![pdg::MUON, -pdg::MUON_NEUTRINO]
                }
            }
            DecayMode::Pionic => {
                if kaon_pdg == pdg::CHARGED_KAON {
                    vec![pdg::CHARGED_PION, pdg::NEUTRAL_PION]
                } else {
                    vec![-pdg::CHARGED_PION, pdg::NEUTRAL_PION]
                }
            }
        }
    }

    /// Appends electrons from the decay of matched muons.
    ///
    /// This optional emission is unconditional: the electron is not put
    /// through the threshold gate.
    fn grab_decay_electrons(
        &self,
        index: &ParticleIndex,
        daughters: &[&ParticleRecord],
        signature: &mut Signature,
    ) {
        for daughter in daughters {
            if daughter.pdg_code.abs() != pdg::MUON {
                continue;
            }
            if daughter.end_process != "Decay" && daughter.end_process != "FastScintillation" {
                continue;
            }
            for grand in decay_daughters(index, daughter.track_id) {
                if grand.pdg_code.abs() == pdg::ELECTRON {
                    signature.push_particle(grand);
                }
            }
        }
    }
}

impl SignatureMatcher for ChargedKaonMatcher {
    fn kind(&self) -> SignatureKind {
        SignatureKind::ChargedKaon
    }

    fn find_signature(&self, index: &ParticleIndex) -> Option<Signature> {
        for record in index.records() {
            if record.pdg_code.abs() != pdg::CHARGED_KAON
                || !record.is_primary()
                || (record.end_process != "Decay" && record.end_process != "FastScintillation")
                || record.end_momentum.mag() >= self.config.max_end_momentum
            {
                continue;
            }

            let daughters = decay_daughters(index, record.track_id);
            let expected = self.expected_daughters(record.pdg_code);
            if !species_match(&daughters, &expected) {
                continue;
            }
            if !all_above_threshold(&daughters, &self.thresholds) {
                continue;
            }

            debug!(track_id = record.track_id, "matched charged-kaon topology");
            let mut signature = Signature::new(self.kind());
            signature.push_particle(record);
            for daughter in &daughters {
                signature.push_particle(daughter);
            }
            if self.config.decay_mode == DecayMode::Muonic && self.config.grab_electron {
                self.grab_decay_electrons(index, &daughters, &mut signature);
            }
            return Some(signature);
        }
        None
    }
}
