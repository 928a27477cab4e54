//! Lumen Core - scene description for the lumen renderer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Triangle`, `Light`, `Camera`, `Scene`, `Mesh`
//! - **Reflectance**: the `Bsdf` capability and its `Lambertian` variant
//! - **Scene files**: JSON scene loading
//!
//! A scene is built once and is read-only while rendering.
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let loaded = load_scene("scene.json")?;
//! println!("Loaded {} triangles, {} lights",
//!     loaded.scene.triangle_count(),
//!     loaded.scene.light_count());
//! ```

pub mod bsdf;
pub mod camera;
pub mod demo;
pub mod light;
pub mod loader;
pub mod mesh;
pub mod scene;
pub mod triangle;

// Re-export commonly used types
pub use bsdf::{Bsdf, Lambertian};
pub use camera::Camera;
pub use demo::demo_scene;
pub use light::Light;
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult, LoadedScene};
pub use mesh::Mesh;
pub use scene::Scene;
pub use triangle::Triangle;
