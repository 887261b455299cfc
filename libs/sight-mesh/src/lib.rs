//! # Sight Mesh
//!
//! Renderable geometry produced by a line-of-sight sweep and handed to a
//! display host. The sweep core builds a fresh [`Mesh`] every tick; the host
//! owns it from the moment it is submitted.
//!
//! ## Topologies
//!
//! - **Triangle list**: explicit index triples (planar fan)
//! - **Triangle strip**: vertex order alone defines the triangles (spatial band)

pub mod error;
pub mod mesh;

pub use error::{MeshError, MeshResult};
pub use mesh::{Mesh, Topology};
