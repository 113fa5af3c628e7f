//! Detector-geometry contracts consumed by the clarity filters.

use serde::{Deserialize, Serialize};

use crate::types::{ChannelId, Vec3, View};

/// Extent of the instrumented detector volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectorBounds {
    /// Low corner of the instrumented box.
    pub min: Vec3,
    /// High corner of the instrumented box.
    pub max: Vec3,
}

impl DetectorBounds {
    /// Creates bounds from the two box corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Returns whether the point lies inside the instrumented box.
    pub fn contains(&self, point: &Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

/// Maps three-dimensional points onto readout channels, per view.
///
/// Implemented by the host's geometry service. A `None` result means the
/// point has no valid channel mapping (outside the instrumented volume);
/// callers treat it as an inactive region, never as a hard error.
pub trait ChannelLookup: Send + Sync {
    /// Returns the channel nearest to the point on the given view.
    fn nearest_channel(&self, point: &Vec3, view: View) -> Option<ChannelId>;
}
