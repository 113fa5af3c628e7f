use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use sigscan_core::{DetectorBounds, FiducialConfig, ParticleRecord, Signature, TruthInteraction};

use crate::fiducial::point_inside_fiducial;
use crate::index::ParticleIndex;
use crate::matcher::SignatureMatcher;

/// Truth-level inputs the host supplies for one event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventTruth {
    /// Full simulated particle collection, in production order.
    pub particles: Vec<ParticleRecord>,
    /// Truth interaction records; a well-formed event carries exactly one.
    pub interactions: Vec<TruthInteraction>,
}

impl EventTruth {
    /// Splits the event into its particle index and interaction records.
    ///
    /// The index is what matchers and clarity filters consume; the
    /// interactions feed the pre-checks in [`identify_signal_particles`].
    pub fn into_parts(self) -> (ParticleIndex, Vec<TruthInteraction>) {
        (ParticleIndex::build(self.particles), self.interactions)
    }
}

/// Runs the pre-checks and delegates to the matcher for one event.
///
/// Events with more than one interaction record, or whose vertex falls
/// outside the fiducial sub-volume, are reported as "no signature" rather
/// than as errors; both cases are logged at warn level.
pub fn identify_signal_particles(
    interactions: &[TruthInteraction],
    index: &ParticleIndex,
    bounds: &DetectorBounds,
    fiducial: &FiducialConfig,
    matcher: &dyn SignatureMatcher,
) -> Option<Signature> {
    if interactions.len() != 1 {
        warn!(
            count = interactions.len(),
            "skipping event with more than one truth interaction"
        );
        return None;
    }

    let vertex = &interactions[0].vertex;
    if !point_inside_fiducial(vertex, bounds, fiducial) {
        warn!(
            x = vertex.x,
            y = vertex.y,
            z = vertex.z,
            "interaction vertex outside the fiducial volume, skipping event"
        );
        return None;
    }

    debug!(kind = ?matcher.kind(), "searching for signature");
    matcher.find_signature(index)
}
