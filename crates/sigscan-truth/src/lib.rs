#![deny(missing_docs)]

//! Per-event truth bookkeeping: the particle index, the fiducial-volume
//! gate, and the signature-matcher contract with its event driver.

/// Event bundle and the `identify_signal_particles` driver.
pub mod event;
/// Fiducial-volume predicate.
pub mod fiducial;
/// Per-event particle index.
pub mod index;
/// Matcher contracts.
pub mod matcher;

pub use event::{identify_signal_particles, EventTruth};
pub use fiducial::point_inside_fiducial;
pub use index::ParticleIndex;
pub use matcher::{DecayVertexProvider, SignatureMatcher};
