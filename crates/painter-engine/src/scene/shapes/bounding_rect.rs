use crate::coords::{NormRect, PixelRect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawList, ZIndex};

/// Bounding rectangle payload in normalized coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingRect {
    pub bounds: NormRect,
    pub color: Color,
}

impl BoundingRect {
    /// Builds the rectangle from two corners in any order; each axis is sorted
    /// so that `bounds.min <= bounds.max`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            bounds: NormRect::from_corners(Vec2::new(x1, y1), Vec2::new(x2, y2)),
            color: Color::BLACK,
        }
    }

    /// Pixel rectangle covered on a surface bound to `frame`.
    #[inline]
    pub fn area(&self, frame: PixelRect) -> PixelRect {
        self.bounds.resolve(frame)
    }
}

impl DrawList {
    /// Records a bounding rectangle resolved against `frame`.
    #[inline]
    pub fn push_bounding_rect(&mut self, rect: &BoundingRect, frame: PixelRect) {
        self.push_solid_rect(ZIndex::BOUNDING_RECT, rect.area(frame), rect.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_corners_are_sorted() {
        let r = BoundingRect::new(0.75, 0.75, 0.25, 0.25);
        assert_eq!(r.bounds.min, Vec2::new(0.25, 0.25));
        assert_eq!(r.bounds.max, Vec2::new(0.75, 0.75));
        assert_eq!(r, BoundingRect::new(0.25, 0.25, 0.75, 0.75));
    }

    #[test]
    fn area_resolves_against_frame() {
        let r = BoundingRect::new(0.25, 0.25, 0.75, 0.75);
        let frame = PixelRect::from_coords(0, 0, 800, 800);
        assert_eq!(r.area(frame), PixelRect::from_coords(200, 200, 600, 600));
    }
}
