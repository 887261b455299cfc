//! View cast sampler: one ray at one angle.

use config::LineOfSightConfig;

use crate::host::RayIntersector;
use crate::raycast::RaycastQuery;
use crate::vector::SweepVector;

/// Result of casting one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCastSample<V> {
    /// Whether the ray hit an obstacle.
    pub hit: bool,
    /// World point where the ray started.
    pub origin: V,
    /// Obstacle point, or the ray's far end when nothing was hit.
    pub point: V,
    /// Distance from `origin` to `point`; `radius` on a miss.
    pub distance: f64,
    /// Absolute angle of the ray in degrees.
    pub angle: f64,
}

/// Casts rays from a fixed observer position with a fixed configuration.
///
/// One caster lives for exactly one sweep, which is what makes the
/// configuration snapshot atomic from the sweep's point of view.
pub struct ViewCaster<'a, V, R: ?Sized> {
    config: LineOfSightConfig,
    position: V,
    rays: RaycastQuery<'a, V, R>,
}

impl<'a, V, R> ViewCaster<'a, V, R>
where
    V: SweepVector,
    R: RayIntersector<V> + ?Sized,
{
    /// Creates a caster for an observer at `position`.
    pub fn new(config: LineOfSightConfig, position: V, intersector: &'a R) -> Self {
        Self {
            config,
            position,
            rays: RaycastQuery::new(intersector),
        }
    }

    /// Configuration snapshot the caster works with.
    pub fn config(&self) -> &LineOfSightConfig {
        &self.config
    }

    /// Ray queries issued so far.
    pub fn query_count(&self) -> usize {
        self.rays.query_count()
    }

    /// Casts a ray at `angle` degrees from `distance_from_origin` out to
    /// `radius`.
    pub fn view_cast(&self, angle: f64) -> ViewCastSample<V> {
        let direction = V::from_heading(angle.to_radians());
        let from = self.position + direction * self.config.distance_from_origin;
        let to = self.position + direction * self.config.radius;

        match self.rays.cast(from, to) {
            Some(point) => ViewCastSample {
                hit: true,
                origin: from,
                point,
                distance: point.distance_to(from),
                angle,
            },
            None => ViewCastSample {
                hit: false,
                origin: from,
                point: to,
                distance: self.config.radius,
                angle,
            },
        }
    }
}
