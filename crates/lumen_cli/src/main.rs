use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use lumen_core::{demo_scene, load_scene, LoadedScene};
use lumen_renderer::{render, save_image, RenderConfig};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let LoadedScene { scene, camera } = match &args.scene {
        Some(path) => load_scene(path).with_context(|| format!("failed to load scene {}", path.display()))?,
        None => {
            info!("No scene file given, rendering the demo scene");
            let (scene, camera) = demo_scene();
            LoadedScene { scene, camera }
        }
    };

    let config = RenderConfig {
        strategy: args.strategy.into(),
        sampling: args.sampling.into(),
        ..Default::default()
    };

    let frame = render(&scene, &camera, args.width, args.height, &config);

    save_image(&frame.image, &args.output, args.display_constant)
        .with_context(|| format!("failed to save {}", args.output.display()))?;

    Ok(())
}
