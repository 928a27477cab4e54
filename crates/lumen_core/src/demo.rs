//! Built-in scene used when no scene file is given.

use std::sync::Arc;

use lumen_math::{Color, Vec3};

use crate::bsdf::{Bsdf, Lambertian};
use crate::camera::Camera;
use crate::light::Light;
use crate::scene::Scene;
use crate::triangle::Triangle;

/// A single green triangle lit by one point light, seen by the default camera.
pub fn demo_scene() -> (Scene, Camera) {
    let mut scene = Scene::new("demo");

    let green: Arc<dyn Bsdf> = Arc::new(Lambertian::new(Color::new(0.0, 0.8, 0.0)));
    scene.add_triangle(Triangle::new(
        [
            Vec3::new(0.0, 1.0, -2.0),
            Vec3::new(-1.9, -1.0, -2.0),
            Vec3::new(1.6, -0.5, -2.0),
        ],
        [
            Vec3::new(0.0, 0.6, 1.0).normalize(),
            Vec3::new(-0.4, -0.4, 1.0).normalize(),
            Vec3::new(0.4, -0.4, 1.0).normalize(),
        ],
        green,
    ));

    scene.add_light(Light::new(Vec3::new(1.0, 3.0, 1.0), Color::splat(10.0)));

    (scene, Camera::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_faces_camera() {
        let (scene, camera) = demo_scene();

        assert_eq!(scene.triangle_count(), 1);
        assert_eq!(scene.light_count(), 1);
        assert!(camera.z_near < 0.0);

        // Front face points back towards the camera at the origin
        let tri = &scene.triangles[0];
        assert!(tri.geometric_normal().dot(-tri.vertex(0)) > 0.0);
    }
}
