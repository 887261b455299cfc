//! Sweep builder: drives the angular scan and accumulates the outline.

use config::LineOfSightConfig;
use tracing::debug;

use super::edge::resolve_edge;
use super::view_cast::{ViewCastSample, ViewCaster};
use crate::error::SightResult;
use crate::host::{PoseProvider, RayIntersector};
use crate::vector::SweepVector;

/// One outline entry in the node's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineVertex<V> {
    /// Start of the ray that produced this entry.
    pub origin: V,
    /// Visible boundary point.
    pub point: V,
}

/// Ordered boundary of one sweep plus the counters gathered while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepOutline<V> {
    /// Boundary in sweep order, edge points interleaved before the sample
    /// that revealed them.
    pub vertices: Vec<OutlineVertex<V>>,
    /// Angular steps of the sweep (`step_count + 1` rays were sampled).
    pub step_count: usize,
    /// Discontinuities handed to the edge resolver.
    pub discontinuities: usize,
    /// Ray queries issued, edge searches included.
    pub ray_queries: usize,
}

impl<V: Copy> SweepOutline<V> {
    /// Number of boundary points.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when the sweep produced no boundary points.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Boundary points in order.
    pub fn points(&self) -> impl Iterator<Item = V> + '_ {
        self.vertices.iter().map(|v| v.point)
    }
}

/// Whether two neighbouring samples straddle an occlusion edge.
pub fn is_discontinuity<V>(
    previous: &ViewCastSample<V>,
    current: &ViewCastSample<V>,
    edge_distance_threshold: f64,
) -> bool {
    let diff_hit = previous.hit != current.hit;
    let both_hit = previous.hit && current.hit;
    let exceeded = (previous.distance - current.distance).abs() > edge_distance_threshold;
    diff_hit || (both_hit && exceeded)
}

/// Sweeps the field of view of an observer and returns its outline.
///
/// The configuration is validated (and thereby snapshotted) before the first
/// ray is cast.
///
/// # Errors
///
/// Returns [`SightError::Config`](crate::SightError::Config) when the
/// configuration cannot produce at least one step.
///
/// # Example
///
/// ```rust
/// use config::LineOfSightConfig;
/// use glam::DVec2;
/// use line_of_sight::{build_sweep, Pose2D};
///
/// let open_field = |_: DVec2, _: DVec2| -> Option<DVec2> { None };
/// let cfg = LineOfSightConfig { angle: 10.0, ..LineOfSightConfig::planar() };
/// let outline = build_sweep(&cfg, &Pose2D::default(), &open_field)?;
/// assert_eq!(outline.len(), 11);
/// assert_eq!(outline.discontinuities, 0);
/// # Ok::<(), line_of_sight::SightError>(())
/// ```
pub fn build_sweep<V, P, R>(
    config: &LineOfSightConfig,
    pose: &P,
    intersector: &R,
) -> SightResult<SweepOutline<V>>
where
    V: SweepVector,
    P: PoseProvider<V> + ?Sized,
    R: RayIntersector<V> + ?Sized,
{
    let config = *config;
    let step_count = config.step_count()?;
    let step_size = config.angle / step_count as f64;
    let facing = pose.facing_degrees();
    let caster = ViewCaster::new(config, pose.global_position(), intersector);

    // Bounded by MAX_SWEEP_STEPS through validation.
    let mut vertices = Vec::with_capacity(step_count + 1);
    let mut discontinuities = 0;
    let mut previous: Option<ViewCastSample<V>> = None;

    for i in 0..=step_count {
        let angle = facing - config.angle / 2.0 + step_size * i as f64;
        let sample = caster.view_cast(angle);
        let origin = pose.to_local(sample.origin);

        if let Some(previous) = &previous {
            if is_discontinuity(previous, &sample, config.edge_distance_threshold) {
                discontinuities += 1;
                let edge = resolve_edge(&caster, previous, &sample);
                vertices.extend(edge.points().map(|point| OutlineVertex {
                    origin,
                    point: pose.to_local(point),
                }));
            }
        }

        vertices.push(OutlineVertex {
            origin,
            point: pose.to_local(sample.point),
        });
        previous = Some(sample);
    }

    let ray_queries = caster.query_count();
    debug!(
        step_count,
        discontinuities,
        ray_queries,
        points = vertices.len(),
        "swept field of view"
    );

    Ok(SweepOutline {
        vertices,
        step_count,
        discontinuities,
        ray_queries,
    })
}
