use crate::coords::{PixelRect, Point, Vec2};
use crate::paint::Color;
use crate::scene::{DrawList, ZIndex};

/// Cross-shaped marker payload.
///
/// `center` and `size` are normalized against the frame the figure is bound
/// to. The shape is a horizontal bar covering the upper half of the marker
/// and a narrower vertical bar spanning its full height, both sharing the
/// center column.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Figure {
    pub center: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl Figure {
    pub const DEFAULT_SIZE: Vec2 = Vec2::new(0.25, 0.25);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            center: Vec2::new(x, y),
            size: Self::DEFAULT_SIZE,
            color: Color::FIGURE,
        }
    }

    /// Returns the `(horizontal, vertical)` bars in pixels for `frame`.
    ///
    /// Far off-surface (or non-finite) centers saturate at the `i32` range,
    /// so the bars may be empty or lie outside the surface.
    pub fn cross(&self, frame: PixelRect) -> (PixelRect, PixelRect) {
        let c = frame.resolve(self.center);
        let s = frame.scale(self.size);

        let half = Point::new(s.x / 2, s.y / 2);
        let quarter_w = s.x / 4;

        // Point arithmetic saturates.
        let horizontal = PixelRect::new(c - half, c + Point::new(half.x, 0));
        let vertical = PixelRect::new(
            c - Point::new(quarter_w, half.y),
            c + Point::new(quarter_w, half.y),
        );

        (horizontal, vertical)
    }

    /// True when `p` falls inside either bar.
    #[inline]
    pub fn contains(&self, frame: PixelRect, p: Point) -> bool {
        let (horizontal, vertical) = self.cross(frame);
        horizontal.contains(p) || vertical.contains(p)
    }
}

impl DrawList {
    /// Records both bars of a figure resolved against `frame`.
    #[inline]
    pub fn push_figure(&mut self, figure: &Figure, frame: PixelRect) {
        let (horizontal, vertical) = figure.cross(frame);
        self.push_solid_rect(ZIndex::FIGURES, horizontal, figure.color);
        self.push_solid_rect(ZIndex::FIGURES, vertical, figure.color);
    }
}
