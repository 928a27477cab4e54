//! JSON scene loading.
//!
//! A scene file names its materials once and refers to them by name from
//! triangles and meshes:
//!
//! ```json
//! {
//!   "name": "box",
//!   "camera": { "z_near": -0.1, "field_of_view_x_degrees": 90 },
//!   "materials": { "green": { "type": "lambertian", "albedo": [0.0, 0.8, 0.0] } },
//!   "triangles": [
//!     { "vertices": [[0, 1, -2], [-1.9, -1, -2], [1.6, -0.5, -2]], "material": "green" }
//!   ],
//!   "meshes": [],
//!   "lights": [ { "position": [1, 3, 1], "power": [10, 10, 10] } ]
//! }
//! ```
//!
//! Triangles without `normals` are flat shaded. Meshes without `normals` get
//! smooth normals computed from their faces.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use lumen_math::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::bsdf::{Bsdf, Lambertian};
use crate::camera::Camera;
use crate::light::Light;
use crate::mesh::Mesh;
use crate::scene::Scene;
use crate::triangle::Triangle;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown material '{0}'")]
    UnknownMaterial(String),

    #[error("Mesh {mesh}: index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        mesh: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("Mesh {mesh}: index count {count} is not a multiple of 3")]
    BadIndexCount { mesh: usize, count: usize },

    #[error("Mesh {mesh}: {normals} normals for {positions} positions")]
    NormalCountMismatch {
        mesh: usize,
        normals: usize,
        positions: usize,
    },

    #[error("{owner}: normal {index} has zero length")]
    ZeroNormal { owner: String, index: usize },

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// A loaded scene together with the camera it was authored for.
#[derive(Debug, Clone)]
pub struct LoadedScene {
    pub scene: Scene,
    pub camera: Camera,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneFile {
    name: Option<String>,
    camera: Option<CameraDesc>,
    #[serde(default)]
    materials: HashMap<String, MaterialDesc>,
    #[serde(default)]
    triangles: Vec<TriangleDesc>,
    #[serde(default)]
    meshes: Vec<MeshDesc>,
    #[serde(default)]
    lights: Vec<LightDesc>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CameraDesc {
    z_near: Option<f32>,
    z_far: Option<f32>,
    field_of_view_x: Option<f32>,
    field_of_view_x_degrees: Option<f32>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum MaterialDesc {
    Lambertian { albedo: [f32; 3] },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TriangleDesc {
    vertices: [[f32; 3]; 3],
    normals: Option<[[f32; 3]; 3]>,
    material: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MeshDesc {
    positions: Vec<[f32; 3]>,
    indices: Vec<u32>,
    normals: Option<Vec<[f32; 3]>>,
    material: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LightDesc {
    position: [f32; 3],
    power: [f32; 3],
}

impl MaterialDesc {
    fn build(&self) -> Arc<dyn Bsdf> {
        match self {
            MaterialDesc::Lambertian { albedo } => Arc::new(Lambertian::new(Vec3::from_array(*albedo))),
        }
    }
}

impl CameraDesc {
    fn build(&self) -> LoadResult<Camera> {
        let mut camera = Camera::default();

        if let Some(z_near) = self.z_near {
            camera = camera.with_near(z_near);
        }
        if let Some(z_far) = self.z_far {
            camera = camera.with_far(z_far);
        }
        match (self.field_of_view_x, self.field_of_view_x_degrees) {
            (Some(_), Some(_)) => {
                return Err(LoadError::InvalidCamera(
                    "give field_of_view_x or field_of_view_x_degrees, not both".to_string(),
                ))
            }
            (Some(radians), None) => camera = camera.with_field_of_view_x(radians),
            (None, Some(degrees)) => camera = camera.with_field_of_view_x(degrees.to_radians()),
            (None, None) => {}
        }

        validate_camera(&camera)?;
        Ok(camera)
    }
}

fn validate_camera(camera: &Camera) -> LoadResult<()> {
    if !(camera.z_near < 0.0) {
        return Err(LoadError::InvalidCamera(format!(
            "z_near must be negative (camera looks down -z), got {}",
            camera.z_near
        )));
    }
    if !(camera.z_far < camera.z_near) {
        return Err(LoadError::InvalidCamera(format!(
            "z_far ({}) must lie beyond z_near ({})",
            camera.z_far, camera.z_near
        )));
    }
    let fov = camera.field_of_view_x;
    if !(fov > 0.0 && fov < std::f32::consts::PI) {
        return Err(LoadError::InvalidCamera(format!(
            "field_of_view_x must be in (0, pi) radians, got {}",
            fov
        )));
    }
    Ok(())
}

/// Load a JSON scene file.
///
/// The scene name defaults to the file stem.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<LoadedScene> {
    let path = path.as_ref();
    log::info!("Loading scene {}", path.display());

    let contents = std::fs::read_to_string(path)?;
    let mut loaded = load_scene_from_str(&contents)?;

    if loaded.scene.name.is_empty() {
        loaded.scene.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();
    }

    Ok(loaded)
}

/// Load a scene from a JSON string.
pub fn load_scene_from_str(contents: &str) -> LoadResult<LoadedScene> {
    let file: SceneFile = serde_json::from_str(contents)?;

    let materials: HashMap<&str, Arc<dyn Bsdf>> = file
        .materials
        .iter()
        .map(|(name, desc)| (name.as_str(), desc.build()))
        .collect();
    let lookup = |name: &str| -> LoadResult<Arc<dyn Bsdf>> {
        materials
            .get(name)
            .cloned()
            .ok_or_else(|| LoadError::UnknownMaterial(name.to_string()))
    };

    let camera = match &file.camera {
        Some(desc) => desc.build()?,
        None => Camera::default(),
    };

    let mut scene = Scene::new(file.name.clone().unwrap_or_default());

    for (triangle_index, desc) in file.triangles.iter().enumerate() {
        let bsdf = lookup(&desc.material)?;
        let [v0, v1, v2] = desc.vertices.map(Vec3::from_array);
        let triangle = match desc.normals {
            Some([n0, n1, n2]) => {
                let owner = || format!("Triangle {}", triangle_index);
                let normals = [
                    unit_normal(n0, 0, owner)?,
                    unit_normal(n1, 1, owner)?,
                    unit_normal(n2, 2, owner)?,
                ];
                Triangle::new([v0, v1, v2], normals, bsdf)
            }
            None => Triangle::flat(v0, v1, v2, bsdf),
        };
        scene.add_triangle(triangle);
    }

    for (mesh_index, desc) in file.meshes.iter().enumerate() {
        let bsdf = lookup(&desc.material)?;
        let mesh = build_mesh(mesh_index, desc)?;
        log::debug!(
            "Mesh {}: {} vertices, {} triangles",
            mesh_index,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        scene.add_mesh(&mesh, bsdf);
    }

    for desc in &file.lights {
        scene.add_light(Light::new(
            Vec3::from_array(desc.position),
            Vec3::from_array(desc.power),
        ));
    }

    if scene.lights.is_empty() {
        log::warn!("Scene has no lights, every pixel will render black");
    }

    log::debug!(
        "Scene '{}': {} triangles, {} lights",
        scene.name,
        scene.triangle_count(),
        scene.light_count()
    );

    Ok(LoadedScene { scene, camera })
}

fn build_mesh(mesh_index: usize, desc: &MeshDesc) -> LoadResult<Mesh> {
    if desc.indices.len() % 3 != 0 {
        return Err(LoadError::BadIndexCount {
            mesh: mesh_index,
            count: desc.indices.len(),
        });
    }

    let positions: Vec<Vec3> = desc.positions.iter().copied().map(Vec3::from_array).collect();
    let normals = match &desc.normals {
        Some(normals) if normals.len() != positions.len() => {
            return Err(LoadError::NormalCountMismatch {
                mesh: mesh_index,
                normals: normals.len(),
                positions: positions.len(),
            })
        }
        Some(normals) => Some(
            normals
                .iter()
                .enumerate()
                .map(|(i, &n)| unit_normal(n, i, || format!("Mesh {}", mesh_index)))
                .collect::<LoadResult<Vec<_>>>()?,
        ),
        None => None,
    };

    let mesh = Mesh::new(positions, desc.indices.clone(), normals);
    if let Some(index) = mesh.first_invalid_index() {
        return Err(LoadError::IndexOutOfRange {
            mesh: mesh_index,
            index,
            vertex_count: mesh.vertex_count(),
        });
    }

    Ok(mesh)
}

/// Normalize an authored normal, rejecting ones with no direction.
fn unit_normal(n: [f32; 3], index: usize, owner: impl Fn() -> String) -> LoadResult<Vec3> {
    Vec3::from_array(n)
        .try_normalize()
        .ok_or_else(|| LoadError::ZeroNormal { owner: owner(), index })
}
