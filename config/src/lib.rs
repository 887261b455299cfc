//! # Config Crate
//!
//! Centralized configuration for the line-of-sight sweep pipeline.
//! Default profiles, inspector hints and telemetry names live here so the
//! sweep core and the hosts embedding it agree on the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::LineOfSightConfig;
//! use config::constants::DRAW_TIME_METRIC;
//!
//! let mut cfg = LineOfSightConfig::planar();
//! cfg.angle = 120.0;
//! assert!(cfg.validate().is_ok());
//! assert_eq!(cfg.step_count().unwrap(), 120);
//! assert_eq!(DRAW_TIME_METRIC, "draw_time");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Every default is defined once
//! - **Verbatim Storage**: Setting a field never rescales or clamps it
//! - **Fail Fast**: A sweep refuses configurations it cannot execute

pub mod constants;
pub mod sight;

pub use sight::{ConfigError, LineOfSightConfig};
