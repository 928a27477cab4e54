use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::{PixelSampling, Strategy};

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// Triangles outside, pixels inside, with a depth buffer
    Rasterize,
    /// Pixels outside, triangles inside
    RayCast,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Rasterize => Strategy::Rasterize,
            StrategyArg::RayCast => Strategy::RayCast,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SamplingArg {
    Center,
    Corner,
}

impl From<SamplingArg> for PixelSampling {
    fn from(arg: SamplingArg) -> Self {
        match arg {
            SamplingArg::Center => PixelSampling::Center,
            SamplingArg::Corner => PixelSampling::Corner,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "Render a triangle scene by ray casting or rasterization")]
pub struct Args {
    /// JSON scene file (renders the built-in demo scene when omitted)
    pub scene: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = 160, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    #[arg(long, value_enum, default_value = "ray-cast")]
    pub strategy: StrategyArg,

    /// Where camera rays pass through each pixel
    #[arg(long, value_enum, default_value = "center")]
    pub sampling: SamplingArg,

    /// Output file path (.ppm or .png)
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Multiplier applied to radiance before clamping and gamma encoding
    #[arg(long, default_value_t = 1.0)]
    pub display_constant: f32,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["lumen"]).unwrap();

        assert!(args.scene.is_none());
        assert_eq!((args.width, args.height), (160, 120));
        assert_eq!(Strategy::from(args.strategy), Strategy::RayCast);
        assert_eq!(PixelSampling::from(args.sampling), PixelSampling::Center);
        assert_eq!(args.output, PathBuf::from("render.png"));
        assert_eq!(args.display_constant, 1.0);
    }

    #[test]
    fn test_full_command_line() {
        let args = Args::try_parse_from([
            "lumen",
            "scene.json",
            "--width",
            "4",
            "--height",
            "3",
            "--strategy",
            "rasterize",
            "--sampling",
            "corner",
            "-o",
            "out.ppm",
            "--display-constant",
            "2.5",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.scene, Some(PathBuf::from("scene.json")));
        assert_eq!((args.width, args.height), (4, 3));
        assert_eq!(Strategy::from(args.strategy), Strategy::Rasterize);
        assert_eq!(PixelSampling::from(args.sampling), PixelSampling::Corner);
        assert_eq!(args.output, PathBuf::from("out.ppm"));
        assert_eq!(args.display_constant, 2.5);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(Args::try_parse_from(["lumen", "--width", "0"]).is_err());
        assert!(Args::try_parse_from(["lumen", "--height", "0"]).is_err());
    }
}
