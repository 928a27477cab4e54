//! Render the demo scene with both strategies and check they agree.
//!
//! Saves the ray-cast result to `demo.ppm`.

use lumen_core::demo_scene;
use lumen_renderer::{render, save_ppm, OutputResult, PixelSampling, RenderConfig, Strategy};

fn main() -> OutputResult<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let (scene, camera) = demo_scene();
    let (width, height) = (320, 240);

    let mut frames = Vec::new();
    for strategy in [Strategy::Rasterize, Strategy::RayCast] {
        let config = RenderConfig {
            strategy,
            sampling: PixelSampling::Center,
            ..Default::default()
        };
        frames.push(render(&scene, &camera, width, height, &config));
    }

    let (raster, cast) = (&frames[0], &frames[1]);
    let differing = raster
        .image
        .pixels
        .iter()
        .zip(cast.image.pixels.iter())
        .filter(|(a, b)| a != b)
        .count();
    println!("{} of {} pixels differ between strategies", differing, width * height);

    save_ppm(&cast.image, "demo.ppm", 1.0)?;
    println!("Saved to demo.ppm");
    Ok(())
}
