use tracing::{debug, warn};

use sigscan_core::{
    pdg, ChannelId, ClarityConfig, ParticleRecord, Signature, SignatureKind, Vec3, View,
};

use crate::context::{ClarityContext, ClarityFilter};

/// Checks that every signature particle starts and ends over healthy
/// readout channels.
///
/// A particle endpoint is "active" when its nearest channel and every
/// channel within the configured window are unflagged; a failed channel
/// mapping counts as inactive.
#[derive(Debug, Clone)]
pub struct SignatureIntegrity {
    channel_active_region: u32,
}

impl SignatureIntegrity {
    /// Creates the checker from the clarity configuration.
    pub fn new(config: &ClarityConfig) -> Self {
        Self {
            channel_active_region: config.channel_active_region,
        }
    }

    /// Returns whether the channel window around the point is healthy.
    pub fn is_region_active(&self, context: &ClarityContext<'_>, point: &Vec3, view: View) -> bool {
        let Some(central) = context.geometry.nearest_channel(point, view) else {
            return false;
        };
        let region = i64::from(self.channel_active_region);
        for offset in -region..=region {
            let channel = i64::from(central.as_raw()) + offset;
            let Ok(channel) = u32::try_from(channel) else {
                continue;
            };
            if context.mask.is_bad(view, ChannelId::from_raw(channel)) {
                return false;
            }
        }
        true
    }

    /// Applies the region test to the particle's start position.
    pub fn check_start(
        &self,
        context: &ClarityContext<'_>,
        record: &ParticleRecord,
        view: View,
    ) -> bool {
        self.is_region_active(context, &record.start_position, view)
    }

    /// Applies the region test to the particle's end position.
    pub fn check_end(
        &self,
        context: &ClarityContext<'_>,
        record: &ParticleRecord,
        view: View,
    ) -> bool {
        self.is_region_active(context, &record.end_position, view)
    }
}

fn resolve<'a>(
    context: &ClarityContext<'a>,
    track_id: i32,
) -> Option<&'a ParticleRecord> {
    match context.index.get(track_id) {
        Ok(record) => Some(record),
        Err(err) => {
            warn!(track_id, %err, "signature member missing from the index");
            None
        }
    }
}

impl ClarityFilter for SignatureIntegrity {
    fn filter(&self, context: &ClarityContext<'_>, signature: &Signature, view: View) -> bool {
        for entry in signature.entries() {
            let Some(record) = resolve(context, entry.track_id) else {
                return false;
            };
            if !self.check_start(context, record, view) || !self.check_end(context, record, view) {
                debug!(track_id = entry.track_id, "inactive channel region");
                return false;
            }
        }
        true
    }
}

/// Integrity variant specialized for the charged-kaon signature.
///
/// The kaon itself needs both endpoints over healthy channels, but the
/// decay muon or pion often ranges out of the instrumented volume, so
/// only its start is required. Signatures of any other kind pass
/// trivially.
#[derive(Debug, Clone)]
pub struct KPlusSignatureIntegrity {
    inner: SignatureIntegrity,
}

impl KPlusSignatureIntegrity {
    /// Creates the checker from the clarity configuration.
    pub fn new(config: &ClarityConfig) -> Self {
        Self {
            inner: SignatureIntegrity::new(config),
        }
    }
}

impl ClarityFilter for KPlusSignatureIntegrity {
    fn filter(&self, context: &ClarityContext<'_>, signature: &Signature, view: View) -> bool {
        if signature.kind != SignatureKind::ChargedKaon {
            return true;
        }
        for entry in signature.entries() {
            let Some(record) = resolve(context, entry.track_id) else {
                return false;
            };
            let species = entry.pdg_code.abs();
            if species == pdg::CHARGED_KAON {
                if !self.inner.check_start(context, record, view)
                    || !self.inner.check_end(context, record, view)
                {
                    return false;
                }
            } else if (species == pdg::MUON || species == pdg::CHARGED_PION)
                && !self.inner.check_start(context, record, view)
            {
                return false;
            }
        }
        true
    }
}
