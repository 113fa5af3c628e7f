use sigscan_core::{ChannelLookup, Hit, HitTruthAssociations, Signature, View};
use sigscan_truth::ParticleIndex;

use crate::mask::DetectorChannelMask;

/// External collaborators a clarity filter reads for one event.
///
/// Everything here is borrowed and read-only: the geometry service and
/// channel mask outlive the event, the index and hit collections are
/// owned by it.
pub struct ClarityContext<'a> {
    /// Geometry service mapping points to channels.
    pub geometry: &'a dyn ChannelLookup,
    /// Bad-channel mask for the current data-taking period.
    pub mask: &'a DetectorChannelMask,
    /// Per-event particle index used to resolve signature members.
    pub index: &'a ParticleIndex,
    /// Reconstructed hits, scoped by the host to the view under study.
    pub hits: &'a [Hit],
    /// Truth associations for the hit collection.
    pub associations: &'a HitTruthAssociations,
}

/// Pass/fail quality gate applied to a matched signature.
///
/// Filters are independent: each inspects the signature against one
/// aspect of detector reality and answers whether the signature is
/// analyzable. `false` is the expected outcome for marginal events, not
/// an error.
pub trait ClarityFilter {
    /// Judges the signature on the given view.
    fn filter(&self, context: &ClarityContext<'_>, signature: &Signature, view: View) -> bool;
}
