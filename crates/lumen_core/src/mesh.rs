//! Indexed triangle meshes.
//!
//! A mesh is a compact way to describe many triangles sharing vertices. It is
//! expanded into independent `Triangle`s before rendering, since the renderer
//! tests every primitive on its own.

use std::sync::Arc;

use lumen_math::{Point3, Vec3};

use crate::bsdf::Bsdf;
use crate::triangle::Triangle;

/// A mesh consisting of vertex positions, optional normals, and triangle indices.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Point3>,

    /// Vertex normals (optional - see `ensure_normals`)
    pub normals: Option<Vec<Vec3>>,

    /// Triangle indices (every 3 indices form a triangle, counter-clockwise
    /// when seen from the front)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new mesh from positions and indices, optionally with normals.
    ///
    /// Normals are NOT computed automatically. Call `ensure_normals()` if the
    /// mesh may lack them.
    pub fn new(positions: Vec<Point3>, indices: Vec<u32>, normals: Option<Vec<Vec3>>) -> Self {
        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Compute smooth vertex normals by averaging face normals.
    ///
    /// Face normals are accumulated unnormalized, so larger faces weigh more.
    /// Replaces any existing normals.
    pub fn compute_normals(&mut self) {
        let vertex_count = self.positions.len();
        let mut normals = vec![Vec3::ZERO; vertex_count];

        for face in self.indices.chunks_exact(3) {
            let [i0, i1, i2] = [face[0] as usize, face[1] as usize, face[2] as usize];

            if i0 >= vertex_count || i1 >= vertex_count || i2 >= vertex_count {
                continue;
            }

            let p0 = self.positions[i0];
            let face_normal = (self.positions[i1] - p0).cross(self.positions[i2] - p0);

            normals[i0] += face_normal;
            normals[i1] += face_normal;
            normals[i2] += face_normal;
        }

        let mut degenerate = 0;
        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            } else {
                *normal = Vec3::Z;
                degenerate += 1;
            }
        }

        if degenerate > 0 {
            log::warn!(
                "{} of {} vertices have no area-weighted normal, defaulting to +Z",
                degenerate,
                vertex_count
            );
        }

        self.normals = Some(normals);
    }

    /// Check if the mesh has normals.
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Ensure the mesh has one normal per vertex, computing them if necessary.
    pub fn ensure_normals(&mut self) {
        let should_compute = match &self.normals {
            None => true,
            Some(normals) => normals.len() != self.positions.len(),
        };

        if should_compute {
            if let Some(normals) = &self.normals {
                log::debug!(
                    "Normals array length ({}) doesn't match vertex count ({}), computing smooth normals",
                    normals.len(),
                    self.positions.len()
                );
            }
            self.compute_normals();
        }
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// First index that does not refer to a vertex, if any.
    pub fn first_invalid_index(&self) -> Option<u32> {
        let vertex_count = self.positions.len();
        self.indices
            .iter()
            .copied()
            .find(|&i| i as usize >= vertex_count)
    }

    /// Expand the mesh into independent triangles sharing one BSDF.
    ///
    /// Computes normals first if the mesh has none. Faces with out-of-range
    /// indices are skipped with a warning.
    pub fn to_triangles(&self, bsdf: Arc<dyn Bsdf>) -> Vec<Triangle> {
        let mut mesh = self.clone();
        mesh.ensure_normals();
        let normals = match &mesh.normals {
            Some(normals) => normals,
            None => return Vec::new(),
        };

        let mut triangles = Vec::with_capacity(mesh.triangle_count());
        for face in mesh.indices.chunks_exact(3) {
            let [i0, i1, i2] = [face[0] as usize, face[1] as usize, face[2] as usize];

            if i0 >= mesh.positions.len() || i1 >= mesh.positions.len() || i2 >= mesh.positions.len() {
                log::warn!(
                    "Invalid triangle indices: [{}, {}, {}], vertex count: {}",
                    i0,
                    i1,
                    i2,
                    mesh.positions.len()
                );
                continue;
            }

            triangles.push(Triangle::new(
                [mesh.positions[i0], mesh.positions[i1], mesh.positions[i2]],
                [normals[i0], normals[i1], normals[i2]],
                bsdf.clone(),
            ));
        }

        triangles
    }
}
