use sigscan_core::{DetectorBounds, FiducialConfig, Vec3};

/// Returns whether the point lies inside the fiducial sub-volume.
///
/// The fiducial box is the instrumented volume shrunk inward by the six
/// configured half-widths, one per face.
pub fn point_inside_fiducial(
    point: &Vec3,
    bounds: &DetectorBounds,
    config: &FiducialConfig,
) -> bool {
    point.x >= bounds.min.x + config.x_start
        && point.x <= bounds.max.x - config.x_end
        && point.y >= bounds.min.y + config.y_start
        && point.y <= bounds.max.y - config.y_end
        && point.z >= bounds.min.z + config.z_start
        && point.z <= bounds.max.z - config.z_end
}
