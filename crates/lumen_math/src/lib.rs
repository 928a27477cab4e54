//! Geometry kernel for lumen.
//!
//! Points and vectors share `glam::Vec3`; the difference between a position
//! and a displacement is a naming discipline only (`Point3` vs `Vec3`).
//!
//! `Vec3::normalize` divides by the Euclidean norm. A zero-length input yields
//! non-finite components: callers must guarantee a non-degenerate vector.

// Re-export glam for convenience
pub use glam::*;

mod color;
mod ray;

pub use color::{Color, Power, Radiance};
pub use ray::Ray;

/// A position in world space.
pub type Point3 = Vec3;
