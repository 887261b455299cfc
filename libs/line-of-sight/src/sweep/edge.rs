//! Edge resolver: fixed-depth bisection of an occlusion discontinuity.

use tracing::trace;

use super::view_cast::{ViewCastSample, ViewCaster};
use crate::host::RayIntersector;
use crate::vector::SweepVector;

/// Boundary points bracketing an occlusion edge.
///
/// A side is `None` when no bisection sample was ever classified to it. This
/// keeps a boundary that lies exactly on the local origin distinguishable
/// from "not resolved".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeBoundary<V> {
    /// Last sample that still looked like the low (earlier) ray.
    pub point_a: Option<V>,
    /// Last sample that looked different from the low ray.
    pub point_b: Option<V>,
}

impl<V: Copy> EdgeBoundary<V> {
    /// Resolved points in emission order (`point_a` first).
    pub fn points(&self) -> impl Iterator<Item = V> {
        self.point_a.into_iter().chain(self.point_b)
    }
}

/// Localizes the edge between `low` and `high` by bisecting their angular
/// interval exactly `edge_resolve_iterations` times.
///
/// A midpoint sample stays on the low side when its hit flag equals
/// `low.hit` and its distance is within `edge_distance_threshold` of
/// `low.distance`; otherwise it moves the high bound. The comparison is
/// always against the `low` sample passed in, not the narrowed bound.
pub fn resolve_edge<V, R>(
    caster: &ViewCaster<'_, V, R>,
    low: &ViewCastSample<V>,
    high: &ViewCastSample<V>,
) -> EdgeBoundary<V>
where
    V: SweepVector,
    R: RayIntersector<V> + ?Sized,
{
    let threshold = caster.config().edge_distance_threshold;
    let mut min_angle = low.angle;
    let mut max_angle = high.angle;
    let mut boundary = EdgeBoundary {
        point_a: None,
        point_b: None,
    };

    for _ in 0..caster.config().edge_resolve_iterations {
        let angle = (min_angle + max_angle) / 2.0;
        let sample = caster.view_cast(angle);

        let threshold_exceeded = (low.distance - sample.distance).abs() > threshold;
        if sample.hit == low.hit && !threshold_exceeded {
            min_angle = angle;
            boundary.point_a = Some(sample.point);
        } else {
            max_angle = angle;
            boundary.point_b = Some(sample.point);
        }
    }

    trace!(
        low = low.angle,
        high = high.angle,
        min_angle,
        max_angle,
        "resolved edge"
    );

    boundary
}
