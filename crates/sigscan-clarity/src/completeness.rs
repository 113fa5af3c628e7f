use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use sigscan_core::{ClarityConfig, Signature, View};

use crate::context::{ClarityContext, ClarityFilter};

/// Diagnostic breakdown of a completeness evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessReport {
    /// Fraction of the event's hits attributable to the signature.
    pub completeness: f64,
    /// Hit counts summed per particle; overlapping hits count per particle.
    pub total_signature_hits: usize,
    /// Hits counted for each signature member, keyed by track identifier.
    pub per_particle: BTreeMap<i32, usize>,
    /// Whether the signature passed both completeness gates.
    pub passed: bool,
}

/// Scores whether enough reconstructed hits trace back to the signature
/// for the pattern to be analyzable at all.
///
/// A hit counts toward a signature particle only when that particle is
/// the hit's dominant energy contributor; non-dominant contributions are
/// ignored.
#[derive(Debug, Clone)]
pub struct PatternCompleteness {
    signature_hit_threshold: usize,
    signature_completeness_threshold: f64,
}

impl PatternCompleteness {
    /// Creates the scorer from the clarity configuration.
    pub fn new(config: &ClarityConfig) -> Self {
        Self {
            signature_hit_threshold: config.signature_hit_threshold,
            signature_completeness_threshold: config.signature_completeness_threshold,
        }
    }

    /// Evaluates the completeness gates and returns the full breakdown.
    pub fn report(&self, context: &ClarityContext<'_>, signature: &Signature) -> CompletenessReport {
        let mut per_particle = BTreeMap::new();
        let mut signature_hits: BTreeSet<u64> = BTreeSet::new();
        let mut total_signature_hits = 0usize;

        for entry in signature.entries() {
            let mut counted = 0usize;
            for hit in context.hits {
                for contribution in context.associations.contributions(hit.hit_id) {
                    if contribution.track_id == entry.track_id && contribution.is_dominant {
                        signature_hits.insert(hit.hit_id);
                        counted += 1;
                    }
                }
            }
            *per_particle.entry(entry.track_id).or_insert(0) += counted;
            total_signature_hits += counted;
        }

        let completeness = if context.hits.is_empty() {
            0.0
        } else {
            signature_hits.len() as f64 / context.hits.len() as f64
        };
        let passed = !context.hits.is_empty()
            && !signature_hits.is_empty()
            && completeness >= self.signature_completeness_threshold
            && total_signature_hits >= self.signature_hit_threshold;

        debug!(
            completeness,
            total_signature_hits, passed, "evaluated pattern completeness"
        );
        CompletenessReport {
            completeness,
            total_signature_hits,
            per_particle,
            passed,
        }
    }
}

impl ClarityFilter for PatternCompleteness {
    fn filter(&self, context: &ClarityContext<'_>, signature: &Signature, _view: View) -> bool {
        self.report(context, signature).passed
    }
}
