//! # Mesh Assembler
//!
//! Turns a sweep outline into the mesh handed to the display node.
//!
//! - **Fan** (planar): vertex 0 is the local origin, vertices `1..=N` are the
//!   outline points, triangle `i` is `(0, i, i + 1)`. Normals are generated
//!   and the mesh carries the field-of-view tint.
//! - **Strip** (spatial): every outline entry emits its ray origin followed
//!   by its boundary point; consecutive pairs form the band.

use config::constants::FOV_TINT;
use glam::DVec3;
use sight_mesh::{Mesh, Topology};
use tracing::debug;

use crate::error::SightResult;
use crate::sweep::SweepOutline;
use crate::vector::SweepVector;

/// Builds the display mesh for an outline using the topology of `V`.
///
/// # Errors
///
/// Returns [`SightError::Mesh`](crate::SightError::Mesh) if the outline is
/// too short to form a triangle.
pub fn assemble_mesh<V: SweepVector>(outline: &SweepOutline<V>) -> SightResult<Mesh> {
    let mesh = match V::TOPOLOGY {
        Topology::TriangleList => assemble_fan(outline),
        Topology::TriangleStrip => assemble_strip(outline),
    };
    mesh.validate()?;

    let slivers = mesh.degenerate_triangle_count();
    if slivers > 0 {
        debug!(
            slivers,
            triangles = mesh.triangle_count(),
            "field-of-view mesh has degenerate triangles"
        );
    }
    Ok(mesh)
}

fn assemble_fan<V: SweepVector>(outline: &SweepOutline<V>) -> Mesh {
    let points = outline.len();
    let mut mesh = Mesh::with_capacity(
        Topology::TriangleList,
        points + 1,
        points.saturating_sub(1),
    );

    mesh.add_vertex(DVec3::ZERO);
    for point in outline.points() {
        let index = mesh.add_vertex(point.to_mesh_vertex());
        if index >= 2 {
            mesh.add_triangle(0, index - 1, index);
        }
    }

    mesh.compute_normals();
    mesh.set_uniform_color(FOV_TINT);
    mesh
}

fn assemble_strip<V: SweepVector>(outline: &SweepOutline<V>) -> Mesh {
    let mut mesh = Mesh::with_capacity(Topology::TriangleStrip, outline.len() * 2, 0);
    for vertex in &outline.vertices {
        mesh.add_vertex(vertex.origin.to_mesh_vertex());
        mesh.add_vertex(vertex.point.to_mesh_vertex());
    }
    mesh
}
