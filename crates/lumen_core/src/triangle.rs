//! Triangle primitive with per-vertex normals.

use std::sync::Arc;

use lumen_math::{Point3, Vec3};

use crate::bsdf::Bsdf;

/// A triangle with three vertex positions, three vertex normals and a BSDF.
///
/// Normals correspond to vertices by index. The winding order decides the
/// front face: rays see the triangle only when the geometric normal
/// `(v1 - v0) × (v2 - v0)` points back towards them. Shading uses the
/// interpolated vertex normals, never the geometric one.
#[derive(Debug, Clone)]
pub struct Triangle {
    vertices: [Point3; 3],
    normals: [Vec3; 3],
    bsdf: Arc<dyn Bsdf>,
}

impl Triangle {
    /// Create a triangle from vertices and matching vertex normals.
    pub fn new(vertices: [Point3; 3], normals: [Vec3; 3], bsdf: Arc<dyn Bsdf>) -> Self {
        Self {
            vertices,
            normals,
            bsdf,
        }
    }

    /// Create a flat-shaded triangle: every vertex gets the geometric normal.
    pub fn flat(v0: Point3, v1: Point3, v2: Point3, bsdf: Arc<dyn Bsdf>) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize();
        Self::new([v0, v1, v2], [normal; 3], bsdf)
    }

    /// Vertex position `i` (0..3).
    #[inline]
    pub fn vertex(&self, i: usize) -> Point3 {
        self.vertices[i]
    }

    /// Vertex normal `i` (0..3).
    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        self.normals[i]
    }

    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    pub fn normals(&self) -> &[Vec3; 3] {
        &self.normals
    }

    /// Reflectance function of the surface.
    #[inline]
    pub fn bsdf(&self) -> &dyn Bsdf {
        self.bsdf.as_ref()
    }

    /// Unnormalized geometric normal, `(v1 - v0) × (v2 - v0)`.
    ///
    /// Its length is twice the triangle's area.
    pub fn geometric_normal(&self) -> Vec3 {
        (self.vertices[1] - self.vertices[0]).cross(self.vertices[2] - self.vertices[0])
    }

    /// Surface area.
    pub fn area(&self) -> f32 {
        0.5 * self.geometric_normal().length()
    }

    /// Point with the given barycentric weights.
    pub fn point_at(&self, weights: &[f32; 3]) -> Point3 {
        self.vertices[0] * weights[0] + self.vertices[1] * weights[1] + self.vertices[2] * weights[2]
    }

    /// Smooth shading normal: barycentric blend of the vertex normals,
    /// re-normalized.
    ///
    /// Near silhouettes this can differ from the geometric normal. The blend
    /// must not cancel to zero (e.g. opposing vertex normals).
    pub fn shading_normal(&self, weights: &[f32; 3]) -> Vec3 {
        (self.normals[0] * weights[0] + self.normals[1] * weights[1] + self.normals[2] * weights[2])
            .normalize()
    }
}
