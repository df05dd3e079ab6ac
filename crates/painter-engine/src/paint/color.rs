/// Straight-alpha sRGB color, one byte per channel.
///
/// Surfaces write these values as-is (source-copy, no blending).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_srgb_u8(0xff, 0xff, 0xff, 0xff);
    pub const GREEN: Color = Color::from_srgb_u8(151, 208, 119, 0xff);
    pub const BLACK: Color = Color::from_srgb_u8(0, 0, 0, 0xff);
    /// Fill of the cross-shaped figure marker.
    pub const FIGURE: Color = Color::from_srgb_u8(255, 102, 102, 0xff);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }

    #[inline]
    pub const fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
