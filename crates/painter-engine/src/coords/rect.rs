use super::{Point, Vec2};

/// Axis-aligned pixel rectangle, half-open: `[min, max)`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct PixelRect {
    pub min: Point,
    pub max: Point,
}

impl PixelRect {
    #[inline]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    #[inline]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.x < self.max.x && p.y < self.max.y
    }

    #[inline]
    pub fn translated(self, by: Point) -> Self {
        Self::new(self.min + by, self.max + by)
    }

    #[inline]
    pub fn intersect(self, other: PixelRect) -> Option<PixelRect> {
        let r = PixelRect::from_coords(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
        );
        if r.is_empty() { None } else { Some(r) }
    }

    /// Maps a normalized point onto this rectangle.
    ///
    /// The scaled extent is truncated toward zero before being offset by `min`.
    #[inline]
    pub fn resolve(self, p: Vec2) -> Point {
        Point::new(
            self.min.x.saturating_add((f64::from(self.width()) * p.x) as i32),
            self.min.y.saturating_add((f64::from(self.height()) * p.y) as i32),
        )
    }

    /// Scales a normalized extent by this rectangle's size (no offset).
    #[inline]
    pub fn scale(self, v: Vec2) -> Point {
        Point::new(
            (f64::from(self.width()) * v.x) as i32,
            (f64::from(self.height()) * v.y) as i32,
        )
    }
}

/// Rectangle in normalized scene space with `min <= max` on both axes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct NormRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl NormRect {
    /// Builds a rectangle from two opposite corners given in any order.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Resolves both corners against a pixel frame.
    #[inline]
    pub fn resolve(self, frame: PixelRect) -> PixelRect {
        PixelRect::new(frame.resolve(self.min), frame.resolve(self.max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x0: i32, y0: i32, x1: i32, y1: i32) -> PixelRect { PixelRect::from_coords(x0, y0, x1, y1) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0, 0, 10, 10).contains(Point::new(5, 5)));
    }

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0, 0, 10, 10).contains(Point::new(0, 0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0, 0, 10, 10).contains(Point::new(10, 10)));
        assert!(!r(0, 0, 10, 10).contains(Point::new(9, 10)));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0, 0, 10, 10).contains(Point::new(-1, 5)));
        assert!(!r(0, 0, 10, 10).contains(Point::new(5, -1)));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        assert_eq!(r(0, 0, 10, 10).intersect(r(5, 5, 15, 15)), Some(r(5, 5, 10, 10)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        assert!(r(0, 0, 10, 10).intersect(r(10, 0, 20, 10)).is_none());
    }

    #[test]
    fn intersect_clips_to_surface() {
        let surface = r(0, 0, 100, 100);
        assert_eq!(r(-20, 90, 30, 140).intersect(surface), Some(r(0, 90, 30, 100)));
    }

    // ── resolve ───────────────────────────────────────────────────────────

    #[test]
    fn resolve_truncates_toward_zero() {
        let frame = r(0, 0, 799, 799);
        assert_eq!(frame.resolve(Vec2::new(0.5, 0.25)), Point::new(399, 199));
    }

    #[test]
    fn resolve_is_offset_by_min() {
        let frame = r(10, 20, 110, 220);
        assert_eq!(frame.resolve(Vec2::new(0.5, 0.5)), Point::new(60, 120));
    }

    #[test]
    fn translated_moves_both_corners() {
        assert_eq!(r(0, 0, 10, 10).translated(Point::new(3, -2)), r(3, -2, 13, 8));
    }

    // ── NormRect ──────────────────────────────────────────────────────────

    #[test]
    fn from_corners_sorts_each_axis() {
        let n = NormRect::from_corners(Vec2::new(0.75, 0.75), Vec2::new(0.25, 0.25));
        assert_eq!(n.min, Vec2::new(0.25, 0.25));
        assert_eq!(n.max, Vec2::new(0.75, 0.75));
    }

    #[test]
    fn from_corners_mixed_order() {
        let n = NormRect::from_corners(Vec2::new(0.1, 0.9), Vec2::new(0.6, 0.2));
        assert_eq!(n.min, Vec2::new(0.1, 0.2));
        assert_eq!(n.max, Vec2::new(0.6, 0.9));
    }
}
