#![deny(missing_docs)]

//! Core types and contracts for truth-level decay-signature scanning.
//!
//! Downstream crates build on these pieces: `sigscan-truth` owns the
//! per-event particle index and the matcher contract, `sigscan-match`
//! provides the concrete decay matchers, and `sigscan-clarity` scores a
//! matched signature against detector-channel health and hit provenance.

/// YAML-configurable parameters shared by the matchers and filters.
pub mod config;
pub mod errors;
pub mod geometry;
pub mod pdg;
/// Serialization helpers with deterministic error mapping.
pub mod serde;
mod types;

pub use config::{ClarityConfig, DecayMode, FiducialConfig, KaonConfig, ScanConfig, ThresholdTable};
pub use errors::{ErrorInfo, ScanError};
pub use geometry::{ChannelLookup, DetectorBounds};
pub use types::{
    ChannelId, Hit, HitContribution, HitTruthAssociations, ParticleRecord, Signature,
    SignatureEntry, SignatureKind, TruthInteraction, Vec3, View,
};
