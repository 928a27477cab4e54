//! Direct illumination from point lights with hard shadows.

use lumen_core::{Bsdf, Light, Scene};
use lumen_math::{Point3, Radiance, Ray, Vec3};

use crate::intersect::intersect;

/// Offset applied to shadow ray origins so a surface does not shadow itself.
pub const RAY_BUMP_EPSILON: f32 = 1e-4;

/// Hard shadow test: can `point` see a light `distance` away along the unit
/// vector `direction`?
///
/// Any triangle strictly closer than the light blocks it. Shadow rays use the
/// same front-face test as camera rays, so a triangle seen from behind does
/// not cast a shadow.
pub fn visible(point: Point3, direction: Vec3, distance: f32, scene: &Scene) -> bool {
    let shadow_ray = Ray::new(point + direction * RAY_BUMP_EPSILON, direction);
    let distance = distance - RAY_BUMP_EPSILON;

    !scene
        .triangles
        .iter()
        .any(|triangle| intersect(&shadow_ray, triangle).distance < distance)
}

/// Radiance scattered from `point` towards `w_o`.
///
/// `normal` is the unit shading normal and `w_o` the unit direction back
/// towards the viewer. `is_visible(point, w_i, distance)` decides whether a
/// light is unoccluded; lights it rejects contribute nothing. Light arriving
/// from below the normal is ignored, as is a light sitting exactly on the
/// shading point.
pub fn shade<V>(
    point: Point3,
    normal: Vec3,
    w_o: Vec3,
    bsdf: &dyn Bsdf,
    lights: &[Light],
    is_visible: V,
) -> Radiance
where
    V: Fn(Point3, Vec3, f32) -> bool,
{
    let mut radiance = Radiance::ZERO;

    for light in lights {
        let offset = light.position - point;
        let distance_to_light = offset.length();
        if distance_to_light <= 0.0 {
            continue;
        }
        let w_i = offset / distance_to_light;

        if !is_visible(point, w_i, distance_to_light) {
            continue;
        }

        let cos_theta = w_i.dot(normal).max(0.0);
        radiance += light.radiance_at(distance_to_light) * bsdf.evaluate(w_i, w_o) * cos_theta;
    }

    radiance
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{Lambertian, Triangle};
    use lumen_math::Color;
    use std::f32::consts::PI;
    use std::sync::Arc;

    fn always_visible(_: Point3, _: Vec3, _: f32) -> bool {
        true
    }

    fn white() -> Arc<dyn Bsdf> {
        Arc::new(Lambertian::new(Color::ONE))
    }

    #[test]
    fn test_no_lights_is_black() {
        let bsdf = Lambertian::new(Color::ONE);
        let radiance = shade(Vec3::new(0.3, -2.0, 1.0), Vec3::Y, Vec3::Y, &bsdf, &[], always_visible);

        assert_eq!(radiance, Radiance::ZERO);
    }

    #[test]
    fn test_single_light_overhead() {
        let albedo = Color::new(0.5, 0.25, 1.0);
        let bsdf = Lambertian::new(albedo);
        let power = Color::new(1.0, 2.0, 3.0);
        let lights = [Light::new(Vec3::new(0.0, 0.0, 2.0), power)];

        let radiance = shade(Vec3::ZERO, Vec3::Z, Vec3::Z, &bsdf, &lights, always_visible);

        // d = 2, cos = 1
        let expected = power / (4.0 * PI * 4.0) * albedo / PI;
        assert!((radiance - expected).length() < 1e-7);
    }

    #[test]
    fn test_single_light_at_angle() {
        let albedo = Color::ONE;
        let bsdf = Lambertian::new(albedo);
        let power = Color::splat(10.0);
        let lights = [Light::new(Vec3::new(0.0, 2.0, 2.0), power)];

        let radiance = shade(Vec3::ZERO, Vec3::Z, Vec3::Z, &bsdf, &lights, always_visible);

        // d² = 8, cos θ = 1/√2
        let expected = power / (4.0 * PI * 8.0) * albedo / PI * std::f32::consts::FRAC_1_SQRT_2;
        assert!((radiance - expected).length() < 1e-6);
    }

    #[test]
    fn test_light_below_surface_contributes_nothing() {
        let bsdf = Lambertian::new(Color::ONE);
        let lights = [Light::new(Vec3::new(0.0, 0.0, -1.0), Color::splat(100.0))];

        let radiance = shade(Vec3::ZERO, Vec3::Z, Vec3::Z, &bsdf, &lights, always_visible);
        assert_eq!(radiance, Radiance::ZERO);
    }

    #[test]
    fn test_lights_accumulate() {
        let bsdf = Lambertian::new(Color::ONE);
        let light = Light::new(Vec3::new(0.0, 0.0, 1.0), Color::ONE);

        let one = shade(Vec3::ZERO, Vec3::Z, Vec3::Z, &bsdf, &[light], always_visible);
        let two = shade(Vec3::ZERO, Vec3::Z, Vec3::Z, &bsdf, &[light, light], always_visible);
        assert!((two - one * 2.0).length() < 1e-7);
    }

    #[test]
    fn test_rejected_light_contributes_nothing() {
        let bsdf = Lambertian::new(Color::ONE);
        let lights = [Light::new(Vec3::new(0.0, 0.0, 1.0), Color::ONE)];

        let radiance = shade(Vec3::ZERO, Vec3::Z, Vec3::Z, &bsdf, &lights, |_, _, _| false);
        assert_eq!(radiance, Radiance::ZERO);
    }

    #[test]
    fn test_light_on_point_is_skipped() {
        let bsdf = Lambertian::new(Color::ONE);
        let lights = [Light::new(Vec3::ZERO, Color::ONE)];

        let radiance = shade(Vec3::ZERO, Vec3::Z, Vec3::Z, &bsdf, &lights, always_visible);
        assert_eq!(radiance, Radiance::ZERO);
    }

    #[test]
    fn test_occluder_blocks_light() {
        let mut scene = Scene::new("shadow");
        let light = Light::new(Vec3::new(0.0, 0.0, 10.0), Color::splat(50.0));
        scene.add_light(light);
        // Between point and light, front face towards the point
        scene.add_triangle(Triangle::flat(
            Vec3::new(-1.0, -1.0, 5.0),
            Vec3::new(0.0, 1.0, 5.0),
            Vec3::new(1.0, -1.0, 5.0),
            white(),
        ));

        assert!(!visible(Vec3::ZERO, Vec3::Z, 10.0, &scene));

        let bsdf = Lambertian::new(Color::ONE);
        let unblocked = shade(Vec3::ZERO, Vec3::Z, Vec3::Z, &bsdf, &scene.lights, always_visible);
        let blocked = shade(Vec3::ZERO, Vec3::Z, Vec3::Z, &bsdf, &scene.lights, |p, w, d| {
            visible(p, w, d, &scene)
        });

        assert!(unblocked.x > 0.0);
        assert_eq!(blocked, Radiance::ZERO);
    }

    #[test]
    fn test_occluder_beyond_light_does_not_block() {
        let mut scene = Scene::new("beyond");
        scene.add_triangle(Triangle::flat(
            Vec3::new(-1.0, -1.0, 5.0),
            Vec3::new(0.0, 1.0, 5.0),
            Vec3::new(1.0, -1.0, 5.0),
            white(),
        ));

        assert!(visible(Vec3::ZERO, Vec3::Z, 4.0, &scene));
    }

    #[test]
    fn test_back_facing_occluder_does_not_block() {
        let mut scene = Scene::new("backface");
        // Same triangle with reversed winding: seen from behind by the shadow ray
        scene.add_triangle(Triangle::flat(
            Vec3::new(-1.0, -1.0, 5.0),
            Vec3::new(1.0, -1.0, 5.0),
            Vec3::new(0.0, 1.0, 5.0),
            white(),
        ));

        assert!(visible(Vec3::ZERO, Vec3::Z, 10.0, &scene));
    }

    #[test]
    fn test_surface_does_not_shadow_itself() {
        let mut scene = Scene::new("self");
        let floor = Triangle::flat(
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            white(),
        );
        scene.add_triangle(floor);

        let w_i = Vec3::new(0.0, 1.0, 1.0).normalize();
        assert!(visible(Vec3::ZERO, w_i, 3.0, &scene));
    }
}
