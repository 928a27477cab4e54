//! Lumen Renderer - CPU ray casting and rasterization-by-testing.
//!
//! Every pixel re-tests every triangle: there is no acceleration structure,
//! no indirect light and one sample per pixel. The pieces, leaves first:
//!
//! - `intersect`: Möller-Trumbore ray-triangle test with barycentric weights
//! - `shading`: point-light direct illumination with hard shadows
//! - `camera`: camera ray per pixel
//! - `renderer`: the rasterize and ray-cast drivers
//! - `output`: tone mapping and PPM/PNG encoding

mod buffer;
mod camera;
mod intersect;
mod output;
mod renderer;
mod shading;

pub use buffer::{DepthBuffer, Image};
pub use camera::{pixel_ray, primary_ray, PixelSampling};
pub use intersect::{intersect, Intersection, BARYCENTRIC_EPSILON, DETERMINANT_EPSILON};
pub use output::{gamma_encode, save_image, save_png, save_ppm, to_rgb8, write_ppm, OutputError, OutputResult};
pub use renderer::{
    rasterize, ray_cast, render, screen_bounds, Frame, PixelRect, RenderConfig, RenderStats, Strategy,
};
pub use shading::{shade, visible, RAY_BUMP_EPSILON};

/// Re-export common math types from lumen_math
pub use lumen_math::{Color, Point3, Radiance, Ray, Vec3};
