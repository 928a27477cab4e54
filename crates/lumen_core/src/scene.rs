//! Scene container.

use std::sync::Arc;

use crate::bsdf::Bsdf;
use crate::light::Light;
use crate::mesh::Mesh;
use crate::triangle::Triangle;

/// Unordered triangles and lights.
///
/// There is no hierarchy and no bounding volume: renderers test every
/// triangle. Built once, then shared read-only for the whole render.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub triangles: Vec<Triangle>,
    pub lights: Vec<Light>,

    /// Scene name (usually from filename)
    pub name: String,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Add every face of a mesh, all sharing `bsdf`.
    pub fn add_mesh(&mut self, mesh: &Mesh, bsdf: Arc<dyn Bsdf>) {
        self.triangles.extend(mesh.to_triangles(bsdf));
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
