//! # Line of Sight
//!
//! Field-of-view meshes for a single observer. A fan of rays is cast across
//! the configured sweep, occlusion edges between neighbouring rays are
//! refined by binary search, and the visible area is triangulated for a
//! display node.
//!
//! ## Architecture
//!
//! ```text
//! host (PoseProvider, RayIntersector)
//!       ↓
//! sweep::build_sweep → ViewCaster → RaycastQuery
//!       ↓ discontinuity
//! sweep::resolve_edge
//!       ↓
//! assemble::assemble_mesh → MeshConsumer (host)
//! ```
//!
//! The same generic sweep serves both dimensionalities through
//! [`SweepVector`]: `DVec2` sweeps the XY plane into a fan, `DVec3` sweeps the
//! XZ plane into a strip.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec2;
//! use line_of_sight::{LineOfSight2D, MeshSlot, Pose2D, SegmentScene2D};
//!
//! let mut scene = SegmentScene2D::new();
//! scene.add_segment(DVec2::new(50.0, -20.0), DVec2::new(50.0, 20.0));
//!
//! let mut node = LineOfSight2D::default();
//! let mut display = MeshSlot::new();
//! let pose = Pose2D::default();
//!
//! node.activate(&pose, &scene, &mut display)?;
//! let report = node.process(&pose, &scene, &mut display)?;
//! assert_eq!(report.discontinuities, 2);
//! # Ok::<(), line_of_sight::SightError>(())
//! ```

pub mod assemble;
pub mod error;
pub mod host;
pub mod node;
pub mod raycast;
pub mod scene;
pub mod sweep;
pub mod vector;

pub use assemble::assemble_mesh;
pub use config::{ConfigError, LineOfSightConfig};
pub use error::{SightError, SightResult};
pub use host::{
    MeshConsumer, MeshSlot, MetricRecorder, MetricSink, NoopMetrics, Pose2D, Pose3D,
    PoseProvider, RayIntersector,
};
pub use node::{LineOfSight, LineOfSight2D, LineOfSight3D, SweepReport};
pub use raycast::RaycastQuery;
pub use scene::{SegmentScene2D, WallScene3D};
pub use sight_mesh::{Mesh, Topology};
pub use sweep::{
    build_sweep, is_discontinuity, resolve_edge, EdgeBoundary, OutlineVertex, SweepOutline,
    ViewCastSample, ViewCaster,
};
pub use vector::SweepVector;
