use crate::paint::Color;
use crate::scene::{DrawList, ZIndex};

/// Background fill payload: replaces the whole surface with one color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fill {
    pub color: Color,
}

impl Fill {
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(Color::WHITE)
    }

    #[inline]
    pub const fn green() -> Self {
        Self::new(Color::GREEN)
    }
}

impl DrawList {
    /// Records a background fill on the background layer.
    #[inline]
    pub fn push_fill(&mut self, fill: &Fill) {
        self.push_clear(ZIndex::BACKGROUND, fill.color);
    }
}
