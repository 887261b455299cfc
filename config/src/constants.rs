//! # Configuration Constants
//!
//! Centralized constants for the line-of-sight pipeline. Sweep defaults,
//! advisory property ranges and telemetry names are defined here so the
//! sweep core and its hosts agree on a single source of truth.
//!
//! ## Categories
//!
//! - **Precision**: Geometric tolerances
//! - **Planar defaults**: Initial values for the 2D node
//! - **Spatial defaults**: Initial values for the 3D node
//! - **Property ranges**: Inspector hints (advisory, never enforced)
//! - **Telemetry**: Metric names
//! - **Display**: Colours applied to emitted meshes

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Area below which a rendered triangle counts as a degenerate sliver.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// PLANAR (2D) DEFAULTS
// =============================================================================

/// Angular sampling density of the 2D node (steps per degree).
pub const PLANAR_RESOLUTION: f64 = 1.0;

/// Binary-search depth used to localize occlusion edges in 2D.
pub const PLANAR_EDGE_RESOLVE_ITERATIONS: u32 = 5;

/// Minimum hit-distance delta treated as an occlusion edge in 2D.
pub const PLANAR_EDGE_DISTANCE_THRESHOLD: f64 = 0.5;

/// Radial offset of ray start points from the 2D node position.
pub const PLANAR_DISTANCE_FROM_ORIGIN: f64 = 10.0;

/// Field-of-view width of the 2D node in degrees.
pub const PLANAR_ANGLE: f64 = 90.0;

/// Maximum ray length of the 2D node.
pub const PLANAR_RADIUS: f64 = 100.0;

// =============================================================================
// SPATIAL (3D) DEFAULTS
// =============================================================================

/// Angular sampling density of the 3D node (steps per degree).
pub const SPATIAL_RESOLUTION: f64 = 1.0;

/// Binary-search depth used to localize occlusion edges in 3D.
///
/// The smallest depth that still performs a search.
pub const SPATIAL_EDGE_RESOLVE_ITERATIONS: u32 = 1;

/// Minimum hit-distance delta treated as an occlusion edge in 3D.
pub const SPATIAL_EDGE_DISTANCE_THRESHOLD: f64 = 0.1;

/// Radial offset of ray start points from the 3D node position.
pub const SPATIAL_DISTANCE_FROM_ORIGIN: f64 = 1.0;

/// Field-of-view width of the 3D node in degrees.
pub const SPATIAL_ANGLE: f64 = 90.0;

/// Maximum ray length of the 3D node.
pub const SPATIAL_RADIUS: f64 = 10.0;

// =============================================================================
// PROPERTY RANGES
// =============================================================================

/// Inspector hint for a numeric property: `min`, `max` and slider `step`.
///
/// Ranges are presentation hints. Values outside them are stored verbatim;
/// only the hard invariants checked by
/// [`LineOfSightConfig::validate`](crate::LineOfSightConfig::validate) are
/// enforced.
///
/// # Example
///
/// ```rust
/// use config::constants::ANGLE_RANGE;
///
/// assert!(ANGLE_RANGE.contains(90.0));
/// assert!(!ANGLE_RANGE.contains(400.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyRange {
    /// Lowest value offered by the inspector.
    pub min: f64,
    /// Highest value offered by the inspector.
    pub max: f64,
    /// Slider increment.
    pub step: f64,
}

impl PropertyRange {
    /// Returns true when `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Hint for `resolution`.
pub const RESOLUTION_RANGE: PropertyRange = PropertyRange { min: 0.0, max: 100.0, step: 0.1 };

/// Hint for `edge_resolve_iterations`.
pub const EDGE_RESOLVE_ITERATIONS_RANGE: PropertyRange =
    PropertyRange { min: 1.0, max: 100.0, step: 1.0 };

/// Hint for `edge_distance_threshold`.
pub const EDGE_DISTANCE_THRESHOLD_RANGE: PropertyRange =
    PropertyRange { min: 0.0, max: 9999.0, step: 0.1 };

/// Hint for `distance_from_origin`.
pub const DISTANCE_FROM_ORIGIN_RANGE: PropertyRange =
    PropertyRange { min: 0.0, max: 9999.0, step: 0.1 };

/// Hint for `angle`.
pub const ANGLE_RANGE: PropertyRange = PropertyRange { min: 0.0, max: 360.0, step: 0.1 };

/// Hint for `radius`.
pub const RADIUS_RANGE: PropertyRange = PropertyRange { min: 0.0, max: 9999.0, step: 0.1 };

/// Full turn in degrees; the widest sweep accepted by validation.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Most angular steps a single sweep may take.
///
/// A full turn at the highest hinted resolution needs 36 000 steps; anything
/// past this bound is rejected by validation before a ray is cast.
pub const MAX_SWEEP_STEPS: usize = 1_000_000;

// =============================================================================
// TELEMETRY
// =============================================================================

/// Metric name under which the last sweep duration (seconds) is recorded.
pub const DRAW_TIME_METRIC: &str = "draw_time";

// =============================================================================
// DISPLAY
// =============================================================================

/// Tint applied to planar field-of-view meshes (RGBA).
pub const FOV_TINT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
