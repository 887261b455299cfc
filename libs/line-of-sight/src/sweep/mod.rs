//! # Visibility Sweep
//!
//! Casts a fan of rays across the field of view, detects occlusion
//! discontinuities between neighbouring rays, and refines each one with a
//! fixed-depth binary search.
//!
//! ## Algorithm
//!
//! 1. `step_count = floor(angle * resolution)` rays are spaced evenly from
//!    `facing - angle / 2` to `facing + angle / 2` (both ends included)
//! 2. Two neighbouring samples are discontinuous when their hit flags differ,
//!    or when both hit and their distances differ by more than
//!    `edge_distance_threshold`
//! 3. Each discontinuity is bisected `edge_resolve_iterations` times; the last
//!    sample on each side becomes a boundary point
//! 4. Boundary points precede the sample that revealed them, so the outline
//!    is in sweep order

mod builder;
mod edge;
mod view_cast;

pub use builder::{build_sweep, is_discontinuity, OutlineVertex, SweepOutline};
pub use edge::{resolve_edge, EdgeBoundary};
pub use view_cast::{ViewCastSample, ViewCaster};
