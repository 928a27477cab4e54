//! Per-pixel buffers owned by a render.
//!
//! Both buffers are row-major with the origin at the top-left. Coordinates
//! outside the buffer panic.

use lumen_math::Radiance;

/// Linear radiance per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Radiance>,
}

impl Image {
    /// Create a new image filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Radiance::ZERO)
    }

    /// Create a new image with every pixel set to `value`.
    pub fn filled(width: u32, height: u32, value: Radiance) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Radiance {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: Radiance) {
        let idx = self.index(x, y);
        self.pixels[idx] = value;
    }
}

/// Nearest hit distance per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    pub width: u32,
    pub height: u32,
    data: Vec<f32>,
}

impl DepthBuffer {
    /// Create a depth buffer with every entry set to `initial`.
    pub fn new(width: u32, height: u32, initial: f32) -> Self {
        Self {
            width,
            height,
            data: vec![initial; width as usize * height as usize],
        }
    }

    /// A depth buffer where nothing has been hit yet.
    pub fn infinite(width: u32, height: u32) -> Self {
        Self::new(width, height, f32::INFINITY)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.data[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, depth: f32) {
        let idx = self.index(x, y);
        self.data[idx] = depth;
    }

    /// Distances in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_row_major() {
        let mut image = Image::new(3, 2);
        image.set(2, 1, Radiance::ONE);

        assert_eq!(image.pixels[5], Radiance::ONE);
        assert_eq!(image.get(2, 1), Radiance::ONE);
        assert_eq!(image.get(1, 1), Radiance::ZERO);
    }

    #[test]
    fn test_image_filled() {
        let image = Image::filled(2, 2, Radiance::new(0.1, 0.2, 0.3));
        assert!(image.pixels.iter().all(|&p| p == Radiance::new(0.1, 0.2, 0.3)));
    }

    #[test]
    fn test_depth_buffer_starts_infinite() {
        let mut depth = DepthBuffer::infinite(4, 3);
        assert!(depth.as_slice().iter().all(|d| *d == f32::INFINITY));

        depth.set(3, 2, 1.5);
        assert_eq!(depth.get(3, 2), 1.5);
        assert_eq!(depth.as_slice()[11], 1.5);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_index_past_u32_range() {
        // Sizes whose pixel count does not fit in u32; the buffers stay
        // empty so nothing is allocated.
        let image = Image {
            width: 70_000,
            height: 70_000,
            pixels: Vec::new(),
        };
        assert_eq!(image.index(69_999, 69_999), 70_000 * 70_000 - 1);

        let depth = DepthBuffer {
            width: 70_000,
            height: 70_000,
            data: Vec::new(),
        };
        assert_eq!(depth.index(1, 65_536), 65_536 * 70_000 + 1);
    }
}
