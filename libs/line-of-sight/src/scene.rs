//! Reference ray-intersection scenes.
//!
//! Hosts without a physics engine (tools, tests, headless simulations) can
//! describe obstacles as line segments and let these scenes answer ray
//! queries with nearest-hit semantics.

use glam::{DVec2, DVec3, Vec3Swizzles};

use crate::host::RayIntersector;

/// Parallel rays and segments closer to parallel than this never hit.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Fraction `t ∈ [0, 1]` along `from → to` where it crosses segment `a → b`.
fn segment_crossing(from: DVec2, to: DVec2, a: DVec2, b: DVec2) -> Option<f64> {
    let ray = to - from;
    let edge = b - a;
    let denom = ray.perp_dot(edge);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let offset = a - from;
    let t = offset.perp_dot(edge) / denom;
    let u = offset.perp_dot(ray) / denom;

    ((0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)).then_some(t)
}

fn nearest_crossing<'a>(
    from: DVec2,
    to: DVec2,
    segments: impl Iterator<Item = &'a (DVec2, DVec2)>,
) -> Option<f64> {
    segments
        .filter_map(|&(a, b)| segment_crossing(from, to, a, b))
        .min_by(f64::total_cmp)
}

/// Planar scene of line-segment obstacles.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use line_of_sight::{RayIntersector, SegmentScene2D};
///
/// let mut scene = SegmentScene2D::new();
/// scene.add_segment(DVec2::new(5.0, -1.0), DVec2::new(5.0, 1.0));
/// let hit = scene.intersect_ray(DVec2::ZERO, DVec2::new(10.0, 0.0));
/// assert_eq!(hit, Some(DVec2::new(5.0, 0.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SegmentScene2D {
    segments: Vec<(DVec2, DVec2)>,
}

impl SegmentScene2D {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an obstacle segment `a → b`.
    pub fn add_segment(&mut self, a: DVec2, b: DVec2) -> &mut Self {
        self.segments.push((a, b));
        self
    }

    /// Adds the four edges of an axis-aligned rectangle.
    pub fn add_rect(&mut self, min: DVec2, max: DVec2) -> &mut Self {
        let corners = [
            min,
            DVec2::new(max.x, min.y),
            max,
            DVec2::new(min.x, max.y),
        ];
        for i in 0..4 {
            self.add_segment(corners[i], corners[(i + 1) % 4]);
        }
        self
    }

    /// Number of obstacle segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True when the scene has no obstacles.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl RayIntersector<DVec2> for SegmentScene2D {
    fn intersect_ray(&self, from: DVec2, to: DVec2) -> Option<DVec2> {
        nearest_crossing(from, to, self.segments.iter()).map(|t| from.lerp(to, t))
    }
}

/// Spatial scene of infinitely tall walls standing on the XZ plane.
///
/// Walls are given by their footprint; a ray is blocked wherever its XZ
/// projection crosses a footprint, at whatever height it is travelling.
#[derive(Debug, Clone, Default)]
pub struct WallScene3D {
    footprints: Vec<(DVec2, DVec2)>,
}

impl WallScene3D {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a wall between `a` and `b`; the Y components are ignored.
    pub fn add_wall(&mut self, a: DVec3, b: DVec3) -> &mut Self {
        self.footprints.push((a.xz(), b.xz()));
        self
    }

    /// Number of walls.
    pub fn len(&self) -> usize {
        self.footprints.len()
    }

    /// True when the scene has no walls.
    pub fn is_empty(&self) -> bool {
        self.footprints.is_empty()
    }
}

impl RayIntersector<DVec3> for WallScene3D {
    fn intersect_ray(&self, from: DVec3, to: DVec3) -> Option<DVec3> {
        nearest_crossing(from.xz(), to.xz(), self.footprints.iter()).map(|t| from.lerp(to, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_crossing_midpoint() {
        let t = segment_crossing(
            DVec2::ZERO,
            DVec2::new(10.0, 0.0),
            DVec2::new(4.0, -1.0),
            DVec2::new(4.0, 1.0),
        );
        assert_relative_eq!(t.unwrap(), 0.4);
    }

    #[test]
    fn test_parallel_segment_misses() {
        let t = segment_crossing(
            DVec2::ZERO,
            DVec2::new(10.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(10.0, 1.0),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn test_short_ray_misses_distant_wall() {
        let mut scene = SegmentScene2D::new();
        scene.add_segment(DVec2::new(5.0, -1.0), DVec2::new(5.0, 1.0));
        assert_eq!(scene.intersect_ray(DVec2::ZERO, DVec2::new(4.0, 0.0)), None);
    }

    #[test]
    fn test_nearest_segment_wins() {
        let mut scene = SegmentScene2D::new();
        scene
            .add_segment(DVec2::new(8.0, -1.0), DVec2::new(8.0, 1.0))
            .add_segment(DVec2::new(3.0, -1.0), DVec2::new(3.0, 1.0));
        let hit = scene.intersect_ray(DVec2::ZERO, DVec2::new(10.0, 0.0)).unwrap();
        assert_relative_eq!(hit.x, 3.0);
    }

    #[test]
    fn test_rect_blocks_from_any_side() {
        let mut scene = SegmentScene2D::new();
        scene.add_rect(DVec2::new(-1.0, -1.0), DVec2::new(1.0, 1.0));
        assert_eq!(scene.len(), 4);
        let hit = scene
            .intersect_ray(DVec2::new(0.0, 5.0), DVec2::new(0.0, -5.0))
            .unwrap();
        assert_relative_eq!(hit.y, 1.0);
    }

    #[test]
    fn test_wall_scene_keeps_ray_height() {
        let mut scene = WallScene3D::new();
        scene.add_wall(DVec3::new(5.0, 0.0, -1.0), DVec3::new(5.0, 0.0, 1.0));
        let hit = scene
            .intersect_ray(DVec3::new(0.0, 2.0, 0.0), DVec3::new(10.0, 2.0, 0.0))
            .unwrap();
        assert_relative_eq!(hit.x, 5.0);
        assert_relative_eq!(hit.y, 2.0);
        assert_relative_eq!(hit.z, 0.0);
    }
}
