use sigscan_core::{Signature, SignatureKind, Vec3};

use crate::index::ParticleIndex;

/// Searches one event for a specific hypothesized decay topology.
///
/// A concrete matcher encodes a seed predicate over primary particles, a
/// topology test over the decay daughters, a per-species momentum
/// threshold gate, and an emission rule describing which particles enter
/// the signature. Matching terminates at the first satisfying primary in
/// collection order; `None` is the expected negative outcome for
/// background events, never an error.
pub trait SignatureMatcher: Send + Sync {
    /// Process hypothesis this matcher searches for.
    fn kind(&self) -> SignatureKind;

    /// Searches the index and returns the signature on a match.
    fn find_signature(&self, index: &ParticleIndex) -> Option<Signature>;
}

/// Exposes the decay vertex of a matched process for fiducial logic.
pub trait DecayVertexProvider {
    /// Returns the decay vertex of the targeted process, when present.
    fn decay_vertex(&self, index: &ParticleIndex) -> Option<Vec3>;
}
