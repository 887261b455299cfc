//! Sweep configuration shared between the line-of-sight core and its hosts.
//!
//! Values are stored exactly as they are set. Validation happens once per
//! sweep (or whenever a host asks for it) so a configuration that is being
//! edited field by field never has to pass through an invalid-but-rejected
//! intermediate state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Configuration block of a line-of-sight node.
///
/// # Examples
/// ```
/// use config::LineOfSightConfig;
/// let cfg = LineOfSightConfig::planar();
/// assert_eq!(cfg.step_count().unwrap(), 90);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineOfSightConfig {
    /// Steps per degree of field of view.
    pub resolution: f64,
    /// Binary-search depth for edge localization.
    pub edge_resolve_iterations: u32,
    /// Minimum distance delta between two hits treated as an occlusion edge.
    pub edge_distance_threshold: f64,
    /// Radial offset of each ray's start point from the node position.
    pub distance_from_origin: f64,
    /// Total sweep width in degrees, centered on the node's facing.
    pub angle: f64,
    /// Maximum ray length.
    pub radius: f64,
}

impl LineOfSightConfig {
    /// Defaults of the planar (2D) node.
    pub const fn planar() -> Self {
        Self {
            resolution: PLANAR_RESOLUTION,
            edge_resolve_iterations: PLANAR_EDGE_RESOLVE_ITERATIONS,
            edge_distance_threshold: PLANAR_EDGE_DISTANCE_THRESHOLD,
            distance_from_origin: PLANAR_DISTANCE_FROM_ORIGIN,
            angle: PLANAR_ANGLE,
            radius: PLANAR_RADIUS,
        }
    }

    /// Defaults of the spatial (3D) node.
    pub const fn spatial() -> Self {
        Self {
            resolution: SPATIAL_RESOLUTION,
            edge_resolve_iterations: SPATIAL_EDGE_RESOLVE_ITERATIONS,
            edge_distance_threshold: SPATIAL_EDGE_DISTANCE_THRESHOLD,
            distance_from_origin: SPATIAL_DISTANCE_FROM_ORIGIN,
            angle: SPATIAL_ANGLE,
            radius: SPATIAL_RADIUS,
        }
    }

    /// Checks the hard invariants a sweep relies on.
    ///
    /// The inspector ranges in [`constants`](crate::constants) are not
    /// consulted; a resolution of 250 or a radius of 20000 is accepted.
    ///
    /// # Examples
    /// ```
    /// use config::{ConfigError, LineOfSightConfig};
    /// let mut cfg = LineOfSightConfig::planar();
    /// cfg.resolution = 0.0;
    /// assert_eq!(cfg.validate(), Err(ConfigError::NonPositiveResolution(0.0)));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reals = [
            ("resolution", self.resolution),
            ("edge_distance_threshold", self.edge_distance_threshold),
            ("distance_from_origin", self.distance_from_origin),
            ("angle", self.angle),
            ("radius", self.radius),
        ];
        if let Some(&(field, _)) = reals.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }

        if self.resolution <= 0.0 {
            return Err(ConfigError::NonPositiveResolution(self.resolution));
        }
        if !(0.0..=FULL_TURN_DEGREES).contains(&self.angle) {
            return Err(ConfigError::AngleOutOfRange(self.angle));
        }
        if self.edge_resolve_iterations == 0 {
            return Err(ConfigError::InvalidEdgeIterations(self.edge_resolve_iterations));
        }

        let lengths = [
            ("edge_distance_threshold", self.edge_distance_threshold),
            ("distance_from_origin", self.distance_from_origin),
            ("radius", self.radius),
        ];
        if let Some(&(field, value)) = lengths.iter().find(|(_, value)| *value < 0.0) {
            return Err(ConfigError::NegativeLength { field, value });
        }

        let steps = (self.angle * self.resolution).floor();
        if steps < 1.0 {
            return Err(ConfigError::DegenerateSweep {
                angle: self.angle,
                resolution: self.resolution,
            });
        }
        if steps > MAX_SWEEP_STEPS as f64 {
            return Err(ConfigError::ExcessiveSteps {
                steps,
                max: MAX_SWEEP_STEPS,
            });
        }

        Ok(())
    }

    /// Number of angular steps of a sweep, `floor(angle * resolution)`.
    ///
    /// Never more than [`MAX_SWEEP_STEPS`] once validation has passed.
    ///
    /// # Examples
    /// ```
    /// use config::LineOfSightConfig;
    /// let cfg = LineOfSightConfig { resolution: 0.5, angle: 45.0, ..LineOfSightConfig::planar() };
    /// assert_eq!(cfg.step_count().unwrap(), 22);
    /// ```
    pub fn step_count(&self) -> Result<usize, ConfigError> {
        self.validate()?;
        Ok((self.angle * self.resolution).floor() as usize)
    }

    /// Angular width of one step in degrees.
    pub fn step_size(&self) -> Result<f64, ConfigError> {
        let steps = self.step_count()?;
        Ok(self.angle / steps as f64)
    }

    /// Upper bound on ray queries one sweep can issue:
    /// `(step_count + 1) + step_count * edge_resolve_iterations`.
    pub fn max_ray_queries(&self) -> Result<usize, ConfigError> {
        let steps = self.step_count()?;
        let iterations = self.edge_resolve_iterations;
        usize::try_from(iterations)
            .ok()
            .and_then(|per_edge| steps.checked_mul(per_edge))
            .and_then(|edges| edges.checked_add(steps))
            .and_then(|total| total.checked_add(1))
            .ok_or(ConfigError::RayBudgetOverflow { steps, iterations })
    }
}

impl Default for LineOfSightConfig {
    fn default() -> Self {
        Self::planar()
    }
}

/// Error returned when a configuration cannot drive a sweep.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `resolution` is zero or negative.
    #[error("resolution must be positive: {0}")]
    NonPositiveResolution(f64),

    /// `angle * resolution` yields fewer than one step.
    #[error("sweep of {angle} degrees at resolution {resolution} has no steps (angle * resolution must be >= 1)")]
    DegenerateSweep {
        /// Configured field of view.
        angle: f64,
        /// Configured resolution.
        resolution: f64,
    },

    /// `angle * resolution` yields more steps than a sweep may take.
    #[error("sweep would take {steps} steps; at most {max} are allowed")]
    ExcessiveSteps {
        /// Requested step count, `floor(angle * resolution)`.
        steps: f64,
        /// Largest step count accepted.
        max: usize,
    },

    /// The worst-case ray budget does not fit in `usize`.
    #[error("ray budget of {steps} steps with {iterations} edge iterations overflows")]
    RayBudgetOverflow {
        /// Validated step count.
        steps: usize,
        /// Configured edge iterations.
        iterations: u32,
    },

    /// `angle` is outside `[0, 360]`.
    #[error("angle must lie within [0, 360] degrees: {0}")]
    AngleOutOfRange(f64),

    /// `edge_resolve_iterations` is zero.
    #[error("edge_resolve_iterations must be >= 1: {0}")]
    InvalidEdgeIterations(u32),

    /// A length-like field is negative.
    #[error("{field} must not be negative: {value}")]
    NegativeLength {
        /// Name of the offending field.
        field: &'static str,
        /// Value that was supplied.
        value: f64,
    },

    /// A field is NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
}
