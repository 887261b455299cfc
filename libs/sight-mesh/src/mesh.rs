//! # Mesh Data Structure
//!
//! Field-of-view mesh representation with vertices, topology, and optional
//! normals and colors.

use config::constants::DEGENERATE_AREA_EPSILON;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// How the vertex buffer is turned into triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topology {
    /// Every triangle is listed explicitly by three vertex indices.
    TriangleList,
    /// Each vertex after the first two closes a triangle with its two
    /// predecessors; no index buffer is stored.
    TriangleStrip,
}

/// A renderable mesh with vertices and topology.
///
/// All geometry uses f64 internally. Export to f32 only happens when a
/// display host asks for GPU buffers.
///
/// # Example
///
/// ```rust
/// use sight_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    topology: Topology,
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices, only populated for [`Topology::TriangleList`]
    triangles: Vec<[u32; 3]>,
    /// Optional vertex colors (RGBA, f32 for GPU)
    colors: Option<Vec<[f32; 4]>>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty triangle-list mesh.
    pub fn new() -> Self {
        Self::with_topology(Topology::TriangleList)
    }

    /// Creates an empty triangle-strip mesh.
    pub fn strip() -> Self {
        Self::with_topology(Topology::TriangleStrip)
    }

    /// Creates an empty mesh with the given topology.
    pub fn with_topology(topology: Topology) -> Self {
        Self {
            topology,
            vertices: Vec::new(),
            triangles: Vec::new(),
            colors: None,
            normals: None,
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(topology: Topology, vertex_count: usize, triangle_count: usize) -> Self {
        let triangle_capacity = match topology {
            Topology::TriangleList => triangle_count,
            Topology::TriangleStrip => 0,
        };
        Self {
            topology,
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_capacity),
            colors: None,
            normals: None,
        }
    }

    /// Returns the topology of the mesh.
    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles the mesh renders.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        match self.topology {
            Topology::TriangleList => self.triangles.len(),
            Topology::TriangleStrip => self.vertices.len().saturating_sub(2),
        }
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    ///
    /// Strip meshes derive their triangles from vertex order, so the call is
    /// ignored for [`Topology::TriangleStrip`].
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        if self.topology == Topology::TriangleList {
            self.triangles.push([v0, v1, v2]);
        }
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the explicit triangle indices (empty for strips).
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns every rendered triangle as an index triple.
    ///
    /// Strip triangles alternate winding so that all faces keep the
    /// orientation of the first one: `(i, i+1, i+2)` for even `i` and
    /// `(i+1, i, i+2)` for odd `i`.
    pub fn resolved_triangles(&self) -> Vec<[u32; 3]> {
        match self.topology {
            Topology::TriangleList => self.triangles.clone(),
            Topology::TriangleStrip => (0..self.triangle_count() as u32)
                .map(|i| {
                    if i % 2 == 0 {
                        [i, i + 1, i + 2]
                    } else {
                        [i + 1, i, i + 2]
                    }
                })
                .collect(),
        }
    }

    /// Sets a uniform color for all vertices.
    pub fn set_uniform_color(&mut self, color: [f32; 4]) {
        let colors = vec![color; self.vertices.len()];
        self.colors = Some(colors);
    }

    /// Returns the vertex colors.
    pub fn colors(&self) -> Option<&[[f32; 4]]> {
        self.colors.as_deref()
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes area-weighted vertex normals from the rendered triangles.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in self.resolved_triangles() {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            }
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Counts rendered triangles whose area is numerically zero.
    ///
    /// Collinear samples along a flat wall legitimately produce such
    /// slivers, so they are reported rather than rejected.
    pub fn degenerate_triangle_count(&self) -> usize {
        self.resolved_triangles()
            .iter()
            .filter(|tri| {
                let v0 = self.vertices[tri[0] as usize];
                let v1 = self.vertices[tri[1] as usize];
                let v2 = self.vertices[tri[2] as usize];
                (v1 - v0).cross(v2 - v0).length() * 0.5 < DEGENERATE_AREA_EPSILON
            })
            .count()
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - At least one triangle can be formed
    /// - All triangle indices are in range and distinct
    /// - Optional attribute buffers match the vertex count
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();
        if vertex_count < 3 {
            return Err(MeshError::TooFewVertices {
                count: vertex_count,
                min: 3,
            });
        }

        for (triangle, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    triangle,
                    index,
                    vertex_count,
                });
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::validation(format!(
                    "triangle {triangle} repeats a vertex: {tri:?}"
                )));
            }
        }

        if let Some(normals) = &self.normals {
            if normals.len() != vertex_count {
                return Err(MeshError::validation(format!(
                    "{} normals for {vertex_count} vertices",
                    normals.len()
                )));
            }
        }
        if let Some(colors) = &self.colors {
            if colors.len() != vertex_count {
                return Err(MeshError::validation(format!(
                    "{} colors for {vertex_count} vertices",
                    colors.len()
                )));
            }
        }

        Ok(())
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Strips are expanded into an explicit list first.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.resolved_triangles().into_iter().flatten().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.topology(), Topology::TriangleList);
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_add_triangle() {
        let mesh = unit_triangle();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
    }

    #[test]
    fn test_strip_ignores_explicit_triangles() {
        let mut mesh = Mesh::strip();
        for x in 0..4 {
            mesh.add_vertex(DVec3::new(x as f64, 0.0, (x % 2) as f64));
        }
        mesh.add_triangle(0, 1, 2);
        assert!(mesh.triangles().is_empty());
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_strip_triangles_alternate_winding() {
        let mut mesh = Mesh::strip();
        for _ in 0..5 {
            mesh.add_vertex(DVec3::ZERO);
        }
        assert_eq!(
            mesh.resolved_triangles(),
            vec![[0, 1, 2], [2, 1, 3], [2, 3, 4]]
        );
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2, 2, 1, 3, 2, 3, 4]);
    }

    #[test]
    fn test_compute_normals_planar() {
        let mut mesh = unit_triangle();
        mesh.compute_normals();
        let normals = mesh.normals().unwrap();
        assert_eq!(normals.len(), 3);
        for n in normals {
            assert_relative_eq!(n.z, 1.0);
        }
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
        assert_eq!(Mesh::new().bounding_box(), (DVec3::ZERO, DVec3::ZERO));
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(unit_triangle().validate().is_ok());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = unit_triangle();
        mesh.add_triangle(0, 1, 7);
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexOutOfRange {
                triangle: 1,
                index: 7,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_mesh_validate_too_few_vertices() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::TooFewVertices { count: 1, .. })
        ));
    }

    #[test]
    fn test_mesh_validate_color_mismatch() {
        let mut mesh = unit_triangle();
        mesh.set_uniform_color([1.0, 0.0, 0.0, 1.0]);
        mesh.add_vertex(DVec3::Z);
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn test_degenerate_triangles_are_counted() {
        let mut mesh = unit_triangle();
        mesh.add_vertex(DVec3::new(2.0, 0.0, 0.0));
        mesh.add_triangle(0, 1, 3); // collinear
        assert_eq!(mesh.degenerate_triangle_count(), 1);
    }

    #[test]
    fn test_mesh_vertices_f32() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.vertices_f32(), vec![1.0f32, 2.0, 3.0]);
        assert!(mesh.normals_f32().is_none());
    }
}
