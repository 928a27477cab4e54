//! Reflectance functions.

use std::f32::consts::PI;
use std::fmt::Debug;

use lumen_math::{Color, Vec3};

/// Bidirectional scattering distribution function.
///
/// A pure function of two unit directions: it does not depend on the
/// position on the surface. New material models implement this trait; the
/// shading loop only ever calls `evaluate`.
pub trait Bsdf: Debug + Send + Sync {
    /// Finite scattering density for light arriving along `w_i` and leaving
    /// along `w_o`.
    ///
    /// Returns `f = L_o / (L_i * cos θ_i)`, assuming both directions lie in the
    /// positive hemisphere above the normal. Both directions point away from
    /// the surface.
    fn evaluate(&self, w_i: Vec3, w_o: Vec3) -> Color;
}

/// Ideal diffuse reflector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    /// Fraction of incident power reflected, per channel.
    pub fn albedo(&self) -> Color {
        self.albedo
    }
}

impl Bsdf for Lambertian {
    fn evaluate(&self, _w_i: Vec3, _w_o: Vec3) -> Color {
        self.albedo / PI
    }
}
