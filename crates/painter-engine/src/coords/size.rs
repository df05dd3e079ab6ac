use super::{Point, PixelRect};

/// Render surface size in pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn pixel_count(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// The full-surface rectangle anchored at the origin.
    #[inline]
    pub fn bounds(self) -> PixelRect {
        let w = i32::try_from(self.width).unwrap_or(i32::MAX);
        let h = i32::try_from(self.height).unwrap_or(i32::MAX);
        PixelRect::new(Point::zero(), Point::new(w, h))
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(800, 800)
    }
}
