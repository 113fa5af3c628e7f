use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Three-component position or momentum vector in detector coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    /// Drift coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Beam coordinate.
    pub z: f64,
}

impl Vec3 {
    /// Creates a vector from its components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the Euclidean magnitude.
    pub fn mag(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns the distance to another point.
    pub fn distance(&self, other: &Vec3) -> f64 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z).mag()
    }
}

/// Readout wire-plane projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum View {
    /// First induction plane.
    U,
    /// Second induction plane.
    V,
    /// Collection plane.
    W,
}

/// Identifier for a readout channel within one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChannelId(u32);

impl ChannelId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u32 {
        self.0
    }
}

/// One simulated particle as produced by the upstream truth simulation.
///
/// Records are immutable once built and owned by the per-event particle
/// index for the duration of one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleRecord {
    /// Unique per-event track identifier.
    pub track_id: i32,
    /// Signed PDG species code.
    pub pdg_code: i32,
    /// Process that created the particle (e.g. "primary", "Decay").
    pub creation_process: String,
    /// Process that ended the particle (e.g. "Decay", "FastScintillation").
    pub end_process: String,
    /// Position where the particle was created.
    pub start_position: Vec3,
    /// Position where the particle stopped or decayed.
    pub end_position: Vec3,
    /// Momentum at creation.
    pub momentum: Vec3,
    /// Momentum at the end point.
    pub end_momentum: Vec3,
    /// Track identifier of the parent, 0 for primaries.
    pub parent_track_id: i32,
}

impl ParticleRecord {
    /// Returns whether the particle was produced by the primary interaction.
    pub fn is_primary(&self) -> bool {
        self.creation_process == "primary"
    }
}

/// Hypothesized decay process realized by a [`Signature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SignatureKind {
    /// Charged kaon decaying to a muonic or pionic final state.
    ChargedKaon,
    /// Neutral kaon decaying through a K-short to two charged pions.
    KaonShort,
    /// Lambda baryon decaying to a charged pion and a proton.
    Lambda,
}

/// One particle participating in a matched signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureEntry {
    /// Signed PDG species code of the participant.
    pub pdg_code: i32,
    /// Per-event track identifier of the participant.
    pub track_id: i32,
}

/// Ordered set of truth particles judged to realize one decay process.
///
/// At most one signature exists per event per requested process; a
/// signature carries no identity across events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Process hypothesis the signature realizes.
    pub kind: SignatureKind,
    entries: Vec<SignatureEntry>,
}

impl Signature {
    /// Creates an empty signature for the given process hypothesis.
    pub fn new(kind: SignatureKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// Appends a particle to the signature.
    pub fn push_particle(&mut self, record: &ParticleRecord) {
        self.entries.push(SignatureEntry {
            pdg_code: record.pdg_code,
            track_id: record.track_id,
        });
    }

    /// Returns the ordered participant entries.
    pub fn entries(&self) -> &[SignatureEntry] {
        &self.entries
    }

    /// Returns the number of participants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the signature has no participants.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One truth-level interaction record carrying the interaction vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruthInteraction {
    /// Three-dimensional interaction vertex.
    pub vertex: Vec3,
}

/// One reconstructed detector hit, already scoped to a view by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Unique per-event hit identifier.
    pub hit_id: u64,
    /// View the hit was reconstructed on.
    pub view: View,
}

/// One truth particle's contribution to a reconstructed hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitContribution {
    /// Track identifier of the contributing particle.
    pub track_id: i32,
    /// Whether this particle deposited the largest energy in the hit.
    pub is_dominant: bool,
}

/// Hit-to-particle truth associations for one event's hit collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitTruthAssociations {
    contributions: BTreeMap<u64, Vec<HitContribution>>,
}

impl HitTruthAssociations {
    /// Creates an empty association table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the contributor list for a hit.
    pub fn insert(&mut self, hit_id: u64, contributions: Vec<HitContribution>) {
        self.contributions.insert(hit_id, contributions);
    }

    /// Returns the contributors to a hit, empty when the hit is unknown.
    pub fn contributions(&self, hit_id: u64) -> &[HitContribution] {
        self.contributions
            .get(&hit_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the number of hits with recorded contributors.
    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    /// Returns whether no hit has recorded contributors.
    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }
}
