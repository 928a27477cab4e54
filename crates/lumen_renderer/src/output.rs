//! Image output: tone mapping and file encoding.
//!
//! Rendered images hold unclamped linear radiance. Saving scales by a display
//! constant, clamps to [0, 1] and gamma-encodes (γ = 2.2) to 8 bits.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::buffer::Image;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format '{0}' (expected .ppm or .png)")]
    UnsupportedFormat(String),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Convert linear radiance to an 8-bit display value.
#[inline]
pub fn gamma_encode(radiance: f32, display_constant: f32) -> u8 {
    let scaled = (radiance * display_constant).clamp(0.0, 1.0);
    (scaled.powf(1.0 / 2.2) * 255.0) as u8
}

/// Convert every pixel to gamma-encoded RGB bytes, row-major.
pub fn to_rgb8(image: &Image, display_constant: f32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(image.pixels.len() * 3);
    for color in &image.pixels {
        bytes.push(gamma_encode(color.x, display_constant));
        bytes.push(gamma_encode(color.y, display_constant));
        bytes.push(gamma_encode(color.z, display_constant));
    }
    bytes
}

/// Write an ASCII PPM (P3), one pixel per line with a comment before each row.
pub fn write_ppm<W: Write>(image: &Image, writer: &mut W, display_constant: f32) -> std::io::Result<()> {
    writeln!(writer, "P3 {} {} 255", image.width, image.height)?;

    for y in 0..image.height {
        writeln!(writer, "\n# y = {}", y)?;
        for x in 0..image.width {
            let c = image.get(x, y);
            writeln!(
                writer,
                "{} {} {}",
                gamma_encode(c.x, display_constant),
                gamma_encode(c.y, display_constant),
                gamma_encode(c.z, display_constant)
            )?;
        }
    }

    Ok(())
}

pub fn save_ppm<P: AsRef<Path>>(image: &Image, path: P, display_constant: f32) -> OutputResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(image, &mut writer, display_constant)?;
    writer.flush()?;
    Ok(())
}

pub fn save_png<P: AsRef<Path>>(image: &Image, path: P, display_constant: f32) -> OutputResult<()> {
    let buffer = image::RgbImage::from_raw(image.width, image.height, to_rgb8(image, display_constant))
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, "pixel count does not match dimensions")
        })?;
    buffer.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Save an image, choosing the format from the file extension.
pub fn save_image<P: AsRef<Path>>(image: &Image, path: P, display_constant: f32) -> OutputResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => save_ppm(image, path, display_constant)?,
        "png" => save_png(image, path, display_constant)?,
        _ => return Err(OutputError::UnsupportedFormat(extension)),
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
