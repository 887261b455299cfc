//! # Host Collaborators
//!
//! The sweep never talks to a scene graph or physics engine directly. A host
//! supplies a pose and a ray-intersection service, receives the finished
//! mesh, and optionally collects telemetry.
//!
//! ## Ownership
//!
//! The core produces a [`Mesh`] and moves it into the [`MeshConsumer`]. From
//! that point the host owns it and decides when it is freed.

use std::collections::HashMap;
use std::sync::Mutex;

use glam::{DVec2, DVec3};
use sight_mesh::Mesh;

// =============================================================================
// RAY INTERSECTION
// =============================================================================

/// Ray-intersection service of the host's physics world.
///
/// Returns the first obstacle point on the segment `from → to`, or `None`
/// when the segment is clear.
///
/// Any `Fn(V, V) -> Option<V>` closure is an intersector:
///
/// ```rust
/// use glam::DVec2;
/// use line_of_sight::RayIntersector;
///
/// let wall_at_x5 = |from: DVec2, to: DVec2| {
///     (to.x >= 5.0).then(|| from.lerp(to, (5.0 - from.x) / (to.x - from.x)))
/// };
/// let hit = wall_at_x5.intersect_ray(DVec2::ZERO, DVec2::new(10.0, 0.0));
/// assert_eq!(hit, Some(DVec2::new(5.0, 0.0)));
/// ```
pub trait RayIntersector<V> {
    /// Casts the segment `from → to`.
    fn intersect_ray(&self, from: V, to: V) -> Option<V>;
}

impl<V, F> RayIntersector<V> for F
where
    F: Fn(V, V) -> Option<V>,
{
    fn intersect_ray(&self, from: V, to: V) -> Option<V> {
        self(from, to)
    }
}

// =============================================================================
// POSE
// =============================================================================

/// World pose of the observing node, read fresh at the start of each sweep.
pub trait PoseProvider<V> {
    /// World position of the observer.
    fn global_position(&self) -> V;

    /// Facing direction in degrees; the sweep is centered on it.
    fn facing_degrees(&self) -> f64;

    /// Converts a world-space point into the node's local frame.
    fn to_local(&self, world: V) -> V;
}

/// Planar pose: position plus rotation about the Z axis.
///
/// The local frame follows both translation and rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose2D {
    /// World position.
    pub position: DVec2,
    /// Rotation in degrees, counter-clockwise.
    pub rotation_degrees: f64,
}

impl Pose2D {
    /// Creates a pose.
    pub fn new(position: DVec2, rotation_degrees: f64) -> Self {
        Self {
            position,
            rotation_degrees,
        }
    }
}

impl PoseProvider<DVec2> for Pose2D {
    fn global_position(&self) -> DVec2 {
        self.position
    }

    fn facing_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    fn to_local(&self, world: DVec2) -> DVec2 {
        let (sin, cos) = (-self.rotation_degrees.to_radians()).sin_cos();
        let d = world - self.position;
        DVec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
    }
}

/// Spatial pose: position plus heading on the horizontal plane.
///
/// The display mesh is detached from the observer's rotation, so the local
/// frame is translation only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose3D {
    /// World position.
    pub position: DVec3,
    /// Heading in degrees on the XZ plane: the host's yaw, i.e. the global
    /// rotation about the axis perpendicular to the sweep plane.
    pub heading_degrees: f64,
}

impl Pose3D {
    /// Creates a pose.
    pub fn new(position: DVec3, heading_degrees: f64) -> Self {
        Self {
            position,
            heading_degrees,
        }
    }
}

impl PoseProvider<DVec3> for Pose3D {
    fn global_position(&self) -> DVec3 {
        self.position
    }

    fn facing_degrees(&self) -> f64 {
        self.heading_degrees
    }

    fn to_local(&self, world: DVec3) -> DVec3 {
        world - self.position
    }
}

// =============================================================================
// DISPLAY
// =============================================================================

/// Display node that renders the field-of-view mesh.
pub trait MeshConsumer {
    /// Replaces whatever mesh was displayed before.
    fn replace_mesh(&mut self, mesh: Mesh);

    /// Drops the displayed mesh when the observer leaves the scene.
    fn release_mesh(&mut self);

    /// Moves a detached display node to the observer's world position.
    fn follow(&mut self, _position: DVec3) {}
}

/// Minimal display that simply holds on to the latest mesh.
#[derive(Debug, Clone, Default)]
pub struct MeshSlot {
    mesh: Option<Mesh>,
    position: Option<DVec3>,
    replacements: usize,
}

impl MeshSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently displayed mesh.
    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    /// Position last received through [`MeshConsumer::follow`].
    pub fn position(&self) -> Option<DVec3> {
        self.position
    }

    /// Number of meshes received so far.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl MeshConsumer for MeshSlot {
    fn replace_mesh(&mut self, mesh: Mesh) {
        self.mesh = Some(mesh);
        self.replacements += 1;
    }

    fn release_mesh(&mut self) {
        self.mesh = None;
    }

    fn follow(&mut self, position: DVec3) {
        self.position = Some(position);
    }
}

// =============================================================================
// TELEMETRY
// =============================================================================

/// Telemetry sink injected into a node at construction.
pub trait MetricSink: Send + Sync {
    /// Records the latest value of a named metric.
    fn record(&self, name: &str, value: f64);
}

/// Sink that discards every value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetrics;

impl MetricSink for NoopMetrics {
    fn record(&self, _name: &str, _value: f64) {}
}

/// In-memory sink keeping the latest value per metric name.
#[derive(Debug, Default)]
pub struct MetricRecorder {
    values: Mutex<HashMap<String, f64>>,
}

impl MetricRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest value recorded under `name`.
    pub fn latest(&self, name: &str) -> Option<f64> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(name).copied())
    }
}

impl MetricSink for MetricRecorder {
    fn record(&self, name: &str, value: f64) {
        // Entries are independent; a poisoned map is still usable.
        let mut values = match self.values.lock() {
            Ok(values) => values,
            Err(poisoned) => poisoned.into_inner(),
        };
        values.insert(name.to_owned(), value);
    }
}
