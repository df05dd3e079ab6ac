/// Point or offset in normalized scene space, where (0, 0) and (1, 1) are
/// opposite corners of the surface. Values outside that range are allowed.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
