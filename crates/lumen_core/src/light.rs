use std::f32::consts::PI;

use lumen_math::{Point3, Power, Radiance};

/// Isotropic point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Point3,
    /// Total power, radiated uniformly over the entire sphere.
    pub power: Power,
}

impl Light {
    pub fn new(position: Point3, power: Power) -> Self {
        Self { position, power }
    }

    /// Incident radiance at `distance` from the light (inverse-square falloff).
    #[inline]
    pub fn radiance_at(&self, distance: f32) -> Radiance {
        self.power / (4.0 * PI * distance * distance)
    }
}
