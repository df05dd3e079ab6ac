use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::coords::{PixelRect, SurfaceSize};
use crate::paint::Color;

use super::{Screen, Surface, SurfaceError};

/// Allocates [`CpuSurface`]s up to a fixed pixel budget.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CpuScreen {
    pixel_budget: u64,
}

impl CpuScreen {
    /// 4096 x 4096.
    pub const DEFAULT_PIXEL_BUDGET: u64 = 4096 * 4096;

    pub fn new() -> Self {
        Self::with_pixel_budget(Self::DEFAULT_PIXEL_BUDGET)
    }

    pub fn with_pixel_budget(pixel_budget: u64) -> Self {
        Self { pixel_budget }
    }
}

impl Default for CpuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for CpuScreen {
    type Surface = CpuSurface;

    fn new_surface(&self, size: SurfaceSize) -> Result<CpuSurface, SurfaceError> {
        if size.is_empty() {
            return Err(SurfaceError::Empty(size));
        }
        if size.pixel_count() > self.pixel_budget {
            return Err(SurfaceError::TooLarge { size, budget: self.pixel_budget });
        }
        Ok(CpuSurface { image: RgbaImage::new(size.width, size.height) })
    }
}

/// RGBA8 surface in main memory. Starts fully transparent.
#[derive(Debug, Clone)]
pub struct CpuSurface {
    image: RgbaImage,
}

impl CpuSurface {
    /// Color at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|&Rgba([r, g, b, a])| Color::from_srgb_u8(r, g, b, a))
    }

    /// Encodes the surface as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut out = Cursor::new(Vec::new());
        self.image.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }
}

impl Surface for CpuSurface {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.image.width(), self.image.height())
    }

    fn fill(&mut self, rect: PixelRect, color: Color) {
        let Some(clipped) = rect.intersect(self.bounds()) else {
            return;
        };
        let px = Rgba(color.to_array());
        // Clipped to bounds, so every coordinate is non-negative.
        for y in clipped.min.y as u32..clipped.max.y as u32 {
            for x in clipped.min.x as u32..clipped.max.x as u32 {
                self.image.put_pixel(x, y, px);
            }
        }
    }
}
