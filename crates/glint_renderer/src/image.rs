//! In-memory frame buffer handed to callers after a render.

use glint_math::Vec4;

/// One rendered pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
    pub color: Vec4,
}

/// A dense `width * height` grid of pixels in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Create a new image with every pixel's coordinates filled in and its
    /// color zeroed.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(size);
        for y in 0..height {
            for x in 0..width {
                pixels.push(Pixel {
                    x,
                    y,
                    color: Vec4::ZERO,
                });
            }
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, indexed by `y * width + x`.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Option<&Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize)
    }

    /// Color at (x, y), if in bounds.
    pub fn color(&self, x: u32, y: u32) -> Option<Vec4> {
        self.get(x, y).map(|pixel| pixel.color)
    }
}
