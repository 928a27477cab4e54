//! Camera ray generation.

use lumen_core::Camera;
use lumen_math::{Ray, Vec3};

/// Where inside a pixel the camera ray passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelSampling {
    /// Through the pixel center, (x + 0.5, y + 0.5).
    #[default]
    Center,
    /// Through the pixel's top-left corner, (x, y).
    Corner,
}

impl PixelSampling {
    /// Offset added to integer pixel coordinates.
    #[inline]
    pub fn offset(self) -> f32 {
        match self {
            PixelSampling::Center => 0.5,
            PixelSampling::Corner => 0.0,
        }
    }
}

/// Ray through image position (x, y), with (0, 0) the top-left corner of the
/// image and (width, height) the bottom-right.
///
/// The view plane sits at the camera's near distance, its width set by the
/// horizontal field of view and its height by the image aspect ratio. The ray
/// starts on that plane, on the line from the camera origin, and has a unit
/// direction, so hit distances are world-space distances beyond the near
/// plane.
pub fn primary_ray(camera: &Camera, x: f32, y: f32, width: u32, height: u32) -> Ray {
    let aspect = height as f32 / width as f32;

    // Side of a square at z = -1 spanning the field of view
    let s = -2.0 * (camera.field_of_view_x * 0.5).tan();

    let start = Vec3::new(
        (x / width as f32 - 0.5) * s,
        -(y / height as f32 - 0.5) * s * aspect,
        1.0,
    ) * camera.z_near;

    Ray::new(start, start.normalize())
}

/// Camera ray for pixel (x, y) under the given sampling convention.
#[inline]
pub fn pixel_ray(camera: &Camera, x: u32, y: u32, width: u32, height: u32, sampling: PixelSampling) -> Ray {
    let offset = sampling.offset();
    primary_ray(camera, x as f32 + offset, y as f32 + offset, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn camera() -> Camera {
        Camera::new().with_near(-1.0).with_field_of_view_x(FRAC_PI_2)
    }

    #[test]
    fn test_center_ray_looks_down_negative_z() {
        let ray = primary_ray(&camera(), 2.0, 2.0, 4, 4);

        assert!((ray.direction() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
        assert!((ray.origin() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_direction_is_unit_length() {
        for &(x, y) in &[(0.0, 0.0), (3.5, 0.5), (1.25, 3.75)] {
            let ray = primary_ray(&camera(), x, y, 4, 4);
            assert!((ray.direction().length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_image_corners_span_field_of_view() {
        // 90° horizontal fov at z = -1 spans x in [-1, 1]
        let top_left = primary_ray(&camera(), 0.0, 0.0, 4, 4);
        let bottom_right = primary_ray(&camera(), 4.0, 4.0, 4, 4);

        assert!((top_left.origin() - Vec3::new(-1.0, 1.0, -1.0)).length() < 1e-5);
        assert!((bottom_right.origin() - Vec3::new(1.0, -1.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_aspect_ratio_scales_vertical_extent() {
        // 8x4 image: half as tall as it is wide
        let top = primary_ray(&camera(), 4.0, 0.0, 8, 4);
        assert!((top.origin() - Vec3::new(0.0, 0.5, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_origin_on_near_plane() {
        let near = Camera::new().with_near(-0.1);
        let ray = primary_ray(&near, 1.0, 3.0, 4, 4);

        assert!((ray.origin().z + 0.1).abs() < 1e-7);
        // Origin lies on the line from the camera through the plane point
        assert!(ray.origin().normalize().dot(ray.direction()) > 1.0 - 1e-6);
    }

    #[test]
    fn test_pixel_sampling_offsets() {
        let cam = camera();

        let center = pixel_ray(&cam, 1, 2, 4, 4, PixelSampling::Center);
        assert_eq!(center, primary_ray(&cam, 1.5, 2.5, 4, 4));

        let corner = pixel_ray(&cam, 1, 2, 4, 4, PixelSampling::Corner);
        assert_eq!(corner, primary_ray(&cam, 1.0, 2.0, 4, 4));
    }
}
