//! Pixel drivers.
//!
//! Two loop orders over the same per-(pixel, triangle) step:
//!
//! - **Rasterize**: for each triangle, for each pixel in its screen bounds,
//!   keeping the nearest distance per pixel in a `DepthBuffer`.
//! - **Ray cast**: for each pixel, for each triangle, keeping the nearest
//!   distance in a local.
//!
//! Both reduce to the minimum hit distance over all triangles per pixel and,
//! given the same `PixelSampling`, produce identical images.

use std::time::Instant;

use lumen_core::{Camera, Scene, Triangle};
use lumen_math::{Color, Radiance, Ray};

use crate::buffer::{DepthBuffer, Image};
use crate::camera::{pixel_ray, PixelSampling};
use crate::intersect::intersect;
use crate::shading::{shade, visible};

/// Loop order used to drive a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Outer loop over triangles, inner loop over pixels.
    Rasterize,
    /// Outer loop over pixels, inner loop over triangles.
    #[default]
    RayCast,
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub strategy: Strategy,
    /// Applied identically by both strategies
    pub sampling: PixelSampling,
    /// Initial color of every pixel; kept where no triangle is hit
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            sampling: PixelSampling::default(),
            background: Color::ZERO,
        }
    }
}

/// Counters gathered while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Camera-ray triangle tests (shadow rays not included)
    pub intersection_tests: u64,
    /// Hits nearer than anything seen before at their pixel; each one is shaded
    pub surface_hits: u64,
}

/// Half-open pixel rectangle `[x0, x1) × [y0, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: u32,
    pub x1: u32,
    pub y0: u32,
    pub y1: u32,
}

impl PixelRect {
    pub fn new(x0: u32, x1: u32, y0: u32, y1: u32) -> Self {
        Self { x0, x1, y0, y1 }
    }

    /// The whole image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, width, 0, height)
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.x1.saturating_sub(self.x0)) * u64::from(self.y1.saturating_sub(self.y0))
    }
}

/// Pixels a triangle may cover.
///
/// Always the whole screen for now.
// TODO: project the vertices through the camera and clip to their 2D bounding box.
pub fn screen_bounds(_triangle: &Triangle, width: u32, height: u32) -> PixelRect {
    PixelRect::full(width, height)
}

/// Result of a full render.
#[derive(Debug, Clone)]
pub struct Frame {
    pub image: Image,
    /// Nearest hit distance per pixel. Only the rasterizer keeps one.
    pub depth: Option<DepthBuffer>,
    pub stats: RenderStats,
}

/// Test one camera ray against one triangle and shade the hit if it is
/// nearer than `distance`.
///
/// On a nearer hit, `distance` is updated and the radiance towards the camera
/// is returned.
fn cast_ray_triangle(scene: &Scene, ray: &Ray, triangle: &Triangle, distance: &mut f32) -> Option<Radiance> {
    let hit = intersect(ray, triangle);
    if hit.distance >= *distance {
        return None;
    }

    *distance = hit.distance;

    let point = ray.at(hit.distance);
    let normal = triangle.shading_normal(&hit.weights);
    let w_o = -ray.direction();

    Some(shade(
        point,
        normal,
        w_o,
        triangle.bsdf(),
        &scene.lights,
        |p, w_i, d| visible(p, w_i, d, scene),
    ))
}

/// Rasterization by testing: every triangle against every pixel in its
/// screen bounds, resolving visibility through `depth`.
///
/// `image` and `depth` must have the same dimensions. Pixels are only written
/// where a triangle is nearer than the depth already stored.
pub fn rasterize(
    image: &mut Image,
    depth: &mut DepthBuffer,
    scene: &Scene,
    camera: &Camera,
    sampling: PixelSampling,
) -> RenderStats {
    let (width, height) = (image.width, image.height);
    let mut stats = RenderStats::default();

    for triangle in &scene.triangles {
        let bounds = screen_bounds(triangle, width, height);

        for y in bounds.y0..bounds.y1 {
            for x in bounds.x0..bounds.x1 {
                let ray = pixel_ray(camera, x, y, width, height, sampling);
                let mut distance = depth.get(x, y);

                stats.intersection_tests += 1;
                if let Some(radiance) = cast_ray_triangle(scene, &ray, triangle, &mut distance) {
                    image.set(x, y, radiance);
                    depth.set(x, y, distance);
                    stats.surface_hits += 1;
                }
            }
        }
    }

    stats
}

/// Ray casting: one camera ray per pixel in `region`, tested against every
/// triangle. Pixels outside `region` are left untouched.
pub fn ray_cast(
    image: &mut Image,
    scene: &Scene,
    camera: &Camera,
    sampling: PixelSampling,
    region: PixelRect,
) -> RenderStats {
    let (width, height) = (image.width, image.height);
    let mut stats = RenderStats::default();

    for y in region.y0..region.y1 {
        for x in region.x0..region.x1 {
            let ray = pixel_ray(camera, x, y, width, height, sampling);
            let mut distance = f32::INFINITY;

            for triangle in &scene.triangles {
                stats.intersection_tests += 1;
                if let Some(radiance) = cast_ray_triangle(scene, &ray, triangle, &mut distance) {
                    image.set(x, y, radiance);
                    stats.surface_hits += 1;
                }
            }
        }
    }

    stats
}

/// Render `scene` into a new `width` × `height` image.
pub fn render(scene: &Scene, camera: &Camera, width: u32, height: u32, config: &RenderConfig) -> Frame {
    log::info!(
        "Rendering '{}' at {}x{} ({:?}, {:?} sampling): {} triangles, {} lights",
        scene.name,
        width,
        height,
        config.strategy,
        config.sampling,
        scene.triangle_count(),
        scene.light_count()
    );

    let start = Instant::now();
    let mut image = Image::filled(width, height, config.background);

    let (depth, stats) = match config.strategy {
        Strategy::Rasterize => {
            let mut depth = DepthBuffer::infinite(width, height);
            let stats = rasterize(&mut image, &mut depth, scene, camera, config.sampling);
            (Some(depth), stats)
        }
        Strategy::RayCast => {
            let region = PixelRect::full(width, height);
            let stats = ray_cast(&mut image, scene, camera, config.sampling, region);
            (None, stats)
        }
    };

    log::info!(
        "Rendered in {:.2?}: {} intersection tests, {} surface hits",
        start.elapsed(),
        stats.intersection_tests,
        stats.surface_hits
    );

    Frame { image, depth, stats }
}
