//! Vector-space capability the sweep is generic over.
//!
//! The planar sweep runs in the XY plane of a [`DVec2`] world and emits a
//! triangle fan. The spatial sweep runs in the horizontal XZ plane of a
//! [`DVec3`] world and emits a triangle strip.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use config::LineOfSightConfig;
use glam::{DVec2, DVec3};
use sight_mesh::Topology;

/// Operations a point type must offer to be swept.
pub trait SweepVector:
    Copy + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self>
{
    /// Triangulation used when the sweep is turned into a mesh.
    const TOPOLOGY: Topology;

    /// Whether the display node is detached from the observer and has to be
    /// moved to the observer's position after every sweep.
    const DETACHED_DISPLAY: bool;

    /// Unit direction on the sweep plane for a heading in radians.
    fn from_heading(radians: f64) -> Self;

    /// Euclidean distance between two points.
    fn distance_to(self, other: Self) -> f64;

    /// Embeds the point in mesh space.
    fn to_mesh_vertex(self) -> DVec3;

    /// Configuration a fresh node of this dimensionality starts with.
    fn default_config() -> LineOfSightConfig;
}

impl SweepVector for DVec2 {
    const TOPOLOGY: Topology = Topology::TriangleList;
    const DETACHED_DISPLAY: bool = false;

    fn from_heading(radians: f64) -> Self {
        DVec2::new(radians.cos(), radians.sin())
    }

    fn distance_to(self, other: Self) -> f64 {
        self.distance(other)
    }

    fn to_mesh_vertex(self) -> DVec3 {
        self.extend(0.0)
    }

    fn default_config() -> LineOfSightConfig {
        LineOfSightConfig::planar()
    }
}

impl SweepVector for DVec3 {
    const TOPOLOGY: Topology = Topology::TriangleStrip;
    const DETACHED_DISPLAY: bool = true;

    fn from_heading(radians: f64) -> Self {
        DVec3::new(radians.cos(), 0.0, radians.sin())
    }

    fn distance_to(self, other: Self) -> f64 {
        self.distance(other)
    }

    fn to_mesh_vertex(self) -> DVec3 {
        self
    }

    fn default_config() -> LineOfSightConfig {
        LineOfSightConfig::spatial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_planar_heading_lies_in_xy() {
        let d = DVec2::from_heading(FRAC_PI_2);
        assert_relative_eq!(d.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(d.y, 1.0);
    }

    #[test]
    fn test_spatial_heading_lies_in_xz() {
        let d = DVec3::from_heading(FRAC_PI_2);
        assert_relative_eq!(d.x, 0.0, epsilon = 1e-12);
        assert_eq!(d.y, 0.0);
        assert_relative_eq!(d.z, 1.0);
    }

    #[test]
    fn test_headings_are_unit_length() {
        for deg in [0.0_f64, 33.0, 90.0, 181.5, 359.0] {
            let r = deg.to_radians();
            assert_relative_eq!(DVec2::from_heading(r).length(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(DVec3::from_heading(r).length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_planar_mesh_vertex_is_flat() {
        assert_eq!(DVec2::new(3.0, 4.0).to_mesh_vertex(), DVec3::new(3.0, 4.0, 0.0));
        assert_relative_eq!(DVec2::ZERO.distance_to(DVec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_topologies() {
        assert_eq!(<DVec2 as SweepVector>::TOPOLOGY, Topology::TriangleList);
        assert_eq!(<DVec3 as SweepVector>::TOPOLOGY, Topology::TriangleStrip);
        assert_eq!(DVec3::default_config(), LineOfSightConfig::spatial());
    }
}
