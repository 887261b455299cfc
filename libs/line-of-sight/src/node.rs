//! # Line-of-Sight Node
//!
//! The observer component a host attaches to its scene. It owns the
//! configuration, runs one sweep per tick, hands the mesh to the display
//! node and reports how long the sweep took.
//!
//! ## Lifecycle
//!
//! ```text
//! new → activate (initial mesh) → process … process → deactivate (mesh released)
//! ```

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;

use config::constants::DRAW_TIME_METRIC;
use config::LineOfSightConfig;
use glam::{DVec2, DVec3};
use sight_mesh::Mesh;
use tracing::{debug, warn};

use crate::assemble::assemble_mesh;
use crate::error::{SightError, SightResult};
use crate::host::{MeshConsumer, MetricSink, NoopMetrics, PoseProvider, RayIntersector};
use crate::sweep::build_sweep;
use crate::vector::SweepVector;

/// Planar observer sweeping the XY plane.
pub type LineOfSight2D = LineOfSight<DVec2>;

/// Spatial observer sweeping the horizontal XZ plane.
pub type LineOfSight3D = LineOfSight<DVec3>;

/// Summary of one processed tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepReport {
    /// Angular steps swept.
    pub step_count: usize,
    /// Occlusion edges found and refined.
    pub discontinuities: usize,
    /// Ray queries issued.
    pub ray_queries: usize,
    /// Vertices in the submitted mesh.
    pub vertex_count: usize,
    /// Triangles rendered by the submitted mesh.
    pub triangle_count: usize,
    /// Wall-clock seconds spent sweeping and assembling.
    pub seconds: f64,
}

/// Field-of-view observer over points of type `V`.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use line_of_sight::{LineOfSight2D, MeshSlot, Pose2D};
///
/// let open_field = |_: DVec2, _: DVec2| -> Option<DVec2> { None };
/// let mut node = LineOfSight2D::default();
/// let mut display = MeshSlot::new();
/// let pose = Pose2D::default();
///
/// node.activate(&pose, &open_field, &mut display)?;
/// let report = node.process(&pose, &open_field, &mut display)?;
/// assert_eq!(report.triangle_count, 90);
/// # Ok::<(), line_of_sight::SightError>(())
/// ```
pub struct LineOfSight<V> {
    config: LineOfSightConfig,
    metrics: Arc<dyn MetricSink>,
    last_sweep_seconds: f64,
    active: bool,
    _space: PhantomData<fn() -> V>,
}

impl<V: SweepVector> Default for LineOfSight<V> {
    fn default() -> Self {
        Self::with_defaults(Arc::new(NoopMetrics))
    }
}

impl<V: SweepVector> LineOfSight<V> {
    /// Creates an inactive node with an explicit configuration.
    pub fn new(config: LineOfSightConfig, metrics: Arc<dyn MetricSink>) -> Self {
        Self {
            config,
            metrics,
            last_sweep_seconds: 0.0,
            active: false,
            _space: PhantomData,
        }
    }

    /// Creates an inactive node with the defaults of its dimensionality.
    pub fn with_defaults(metrics: Arc<dyn MetricSink>) -> Self {
        Self::new(V::default_config(), metrics)
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Current configuration.
    pub fn config(&self) -> &LineOfSightConfig {
        &self.config
    }

    /// Replaces the whole configuration; takes effect at the next sweep.
    pub fn set_config(&mut self, config: LineOfSightConfig) {
        self.config = config;
    }

    /// Steps per degree of field of view.
    pub fn resolution(&self) -> f64 {
        self.config.resolution
    }

    /// Stored verbatim; validated at the next sweep.
    pub fn set_resolution(&mut self, resolution: f64) {
        self.config.resolution = resolution;
    }

    /// Bisection depth for each occlusion edge.
    pub fn edge_resolve_iterations(&self) -> u32 {
        self.config.edge_resolve_iterations
    }

    /// Stored verbatim; validated at the next sweep.
    pub fn set_edge_resolve_iterations(&mut self, iterations: u32) {
        self.config.edge_resolve_iterations = iterations;
    }

    /// Hit-distance delta that marks an occlusion edge.
    pub fn edge_distance_threshold(&self) -> f64 {
        self.config.edge_distance_threshold
    }

    /// Stored verbatim; validated at the next sweep.
    pub fn set_edge_distance_threshold(&mut self, threshold: f64) {
        self.config.edge_distance_threshold = threshold;
    }

    /// Radial offset of each ray's start point.
    pub fn distance_from_origin(&self) -> f64 {
        self.config.distance_from_origin
    }

    /// Stored verbatim; validated at the next sweep.
    pub fn set_distance_from_origin(&mut self, distance: f64) {
        self.config.distance_from_origin = distance;
    }

    /// Sweep width in degrees, centered on the facing.
    pub fn angle(&self) -> f64 {
        self.config.angle
    }

    /// Stored verbatim; validated at the next sweep.
    pub fn set_angle(&mut self, angle: f64) {
        self.config.angle = angle;
    }

    /// Maximum ray length.
    pub fn radius(&self) -> f64 {
        self.config.radius
    }

    /// Stored verbatim; validated at the next sweep.
    pub fn set_radius(&mut self, radius: f64) {
        self.config.radius = radius;
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Whether the host has activated the node.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds the last processed sweep took (sweep plus assembly).
    pub fn last_sweep_seconds(&self) -> f64 {
        self.last_sweep_seconds
    }

    /// Sweeps and assembles a mesh without touching any display.
    pub fn draw<P, R>(&self, pose: &P, intersector: &R) -> SightResult<Mesh>
    where
        P: PoseProvider<V> + ?Sized,
        R: RayIntersector<V> + ?Sized,
    {
        self.render(pose, intersector).map(|(mesh, _)| mesh)
    }

    /// Called by the host when the observer enters the scene. Draws the
    /// initial mesh into `display`.
    ///
    /// The node stays inactive if the initial sweep fails.
    pub fn activate<P, R, D>(
        &mut self,
        pose: &P,
        intersector: &R,
        display: &mut D,
    ) -> SightResult<()>
    where
        P: PoseProvider<V> + ?Sized,
        R: RayIntersector<V> + ?Sized,
        D: MeshConsumer + ?Sized,
    {
        if self.active {
            warn!("line-of-sight node activated twice; redrawing");
        }
        let mesh = self.draw(pose, intersector)?;
        display.replace_mesh(mesh);
        if V::DETACHED_DISPLAY {
            display.follow(pose.global_position().to_mesh_vertex());
        }
        self.active = true;
        Ok(())
    }

    /// One host tick: sweep, assemble, replace the displayed mesh and record
    /// the duration under [`DRAW_TIME_METRIC`].
    ///
    /// # Errors
    ///
    /// [`SightError::Inactive`] before [`activate`](Self::activate);
    /// [`SightError::Config`] when the configuration is degenerate. The
    /// displayed mesh is left untouched on error.
    pub fn process<P, R, D>(
        &mut self,
        pose: &P,
        intersector: &R,
        display: &mut D,
    ) -> SightResult<SweepReport>
    where
        P: PoseProvider<V> + ?Sized,
        R: RayIntersector<V> + ?Sized,
        D: MeshConsumer + ?Sized,
    {
        if !self.active {
            return Err(SightError::Inactive);
        }

        let start = Instant::now();
        let (mesh, mut report) = self.render(pose, intersector)?;
        report.seconds = start.elapsed().as_secs_f64();

        self.last_sweep_seconds = report.seconds;
        self.metrics.record(DRAW_TIME_METRIC, report.seconds);
        debug!(
            seconds = report.seconds,
            vertices = report.vertex_count,
            "line-of-sight mesh rebuilt"
        );

        display.replace_mesh(mesh);
        if V::DETACHED_DISPLAY {
            display.follow(pose.global_position().to_mesh_vertex());
        }
        Ok(report)
    }

    /// Called by the host when the observer leaves the scene.
    pub fn deactivate<D>(&mut self, display: &mut D)
    where
        D: MeshConsumer + ?Sized,
    {
        if !self.active {
            warn!("line-of-sight node deactivated while inactive");
            return;
        }
        display.release_mesh();
        self.active = false;
    }

    fn render<P, R>(&self, pose: &P, intersector: &R) -> SightResult<(Mesh, SweepReport)>
    where
        P: PoseProvider<V> + ?Sized,
        R: RayIntersector<V> + ?Sized,
    {
        let outline = build_sweep(&self.config, pose, intersector)?;
        let mesh = assemble_mesh(&outline)?;
        let report = SweepReport {
            step_count: outline.step_count,
            discontinuities: outline.discontinuities,
            ray_queries: outline.ray_queries,
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            seconds: 0.0,
        };
        Ok((mesh, report))
    }
}
