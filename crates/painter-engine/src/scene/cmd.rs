use crate::coords::PixelRect;
use crate::paint::Color;

/// Surface-level draw command, already resolved to pixels.
///
/// Every drawable scene element lowers to one or more of these while the
/// store lock is held; painting them happens after the lock is released.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawCmd {
    /// Source-copy fill of the whole surface.
    Clear(Color),
    /// Source-copy fill of a pixel rectangle (clipped by the surface).
    Rect(PixelRect, Color),
}
