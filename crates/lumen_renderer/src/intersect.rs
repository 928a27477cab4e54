//! Ray-triangle intersection.
//!
//! Uses the Möller-Trumbore algorithm, working from the triangle edges and
//! the ray direction rather than the plane equation.

use lumen_core::Triangle;
use lumen_math::Ray;

/// Smallest accepted determinant. Rejects rays parallel to the triangle and,
/// by sign, hits on the back face.
pub const DETERMINANT_EPSILON: f32 = 1e-7;

/// Tolerance on barycentric weights, so hits on shared edges are not lost.
pub const BARYCENTRIC_EPSILON: f32 = 1e-10;

/// Result of a ray-triangle test.
///
/// A miss is reported as `distance == f32::INFINITY`, so the result can be
/// compared directly against the nearest distance found so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Distance along the ray, in units of the ray direction's length.
    pub distance: f32,
    /// Barycentric weights of the hit point for vertices 0, 1 and 2.
    pub weights: [f32; 3],
}

impl Intersection {
    /// No valid intersection.
    pub const MISS: Intersection = Intersection {
        distance: f32::INFINITY,
        weights: [0.0; 3],
    };

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.distance < f32::INFINITY
    }
}

/// Intersect a ray with the front face of a triangle.
///
/// Returns `Intersection::MISS` when the ray is (nearly) parallel to the
/// triangle, hits its back face, passes outside it, or meets it at or behind
/// the ray origin. Degenerate triangles are misses.
pub fn intersect(ray: &Ray, triangle: &Triangle) -> Intersection {
    let v0 = triangle.vertex(0);
    let e1 = triangle.vertex(1) - v0;
    let e2 = triangle.vertex(2) - v0;

    let q = ray.direction().cross(e2);
    let a = e1.dot(q);

    if a <= DETERMINANT_EPSILON {
        return Intersection::MISS;
    }

    let s = ray.origin() - v0;
    let r = s.cross(e1);

    let w1 = s.dot(q) / a;
    let w2 = ray.direction().dot(r) / a;
    let w0 = 1.0 - (w1 + w2);

    if w0 < -BARYCENTRIC_EPSILON || w1 < -BARYCENTRIC_EPSILON || w2 < -BARYCENTRIC_EPSILON {
        return Intersection::MISS;
    }

    let distance = e2.dot(r) / a;
    if distance <= 0.0 {
        return Intersection::MISS;
    }

    Intersection {
        distance,
        weights: [w0, w1, w2],
    }
}
