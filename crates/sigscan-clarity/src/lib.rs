#![deny(missing_docs)]

//! Clarity validation of matched signatures.
//!
//! A truth-level signature is only worth studying if the detector could
//! plausibly have seen it. The filters here score a signature against
//! detector-channel health ([`SignatureIntegrity`],
//! [`KPlusSignatureIntegrity`]) and against hit-level reconstruction
//! provenance ([`PatternCompleteness`]). Each filter is an independent
//! pass/fail gate; failures are expected negatives, never errors.

mod completeness;
mod context;
mod integrity;
mod mask;

pub use completeness::{CompletenessReport, PatternCompleteness};
pub use context::{ClarityContext, ClarityFilter};
pub use integrity::{KPlusSignatureIntegrity, SignatureIntegrity};
pub use mask::DetectorChannelMask;
