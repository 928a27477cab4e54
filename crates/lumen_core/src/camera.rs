//! Pinhole camera.

use std::f32::consts::FRAC_PI_2;

/// Pinhole camera at the world origin, looking down -z.
///
/// Clip distances are signed z values, so both are negative. Only the near
/// plane and the horizontal field of view take part in ray generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub z_near: f32,
    pub z_far: f32,
    /// Horizontal field of view, left edge to right edge, in radians.
    pub field_of_view_x: f32,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            z_near: -0.1,
            z_far: -100.0,
            field_of_view_x: FRAC_PI_2,
        }
    }

    /// Set the near clip plane.
    pub fn with_near(mut self, z_near: f32) -> Self {
        self.z_near = z_near;
        self
    }

    /// Set the far clip plane.
    pub fn with_far(mut self, z_far: f32) -> Self {
        self.z_far = z_far;
        self
    }

    /// Set the horizontal field of view in radians.
    pub fn with_field_of_view_x(mut self, field_of_view_x: f32) -> Self {
        self.field_of_view_x = field_of_view_x;
        self
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_defaults() {
        let camera = Camera::default();

        assert_eq!(camera.z_near, -0.1);
        assert_eq!(camera.z_far, -100.0);
        assert_eq!(camera.field_of_view_x, FRAC_PI_2);
    }

    #[test]
    fn test_camera_builder() {
        let camera = Camera::new()
            .with_near(-1.0)
            .with_far(-50.0)
            .with_field_of_view_x(1.0);

        assert_eq!(camera.z_near, -1.0);
        assert_eq!(camera.z_far, -50.0);
        assert_eq!(camera.field_of_view_x, 1.0);
    }
}
