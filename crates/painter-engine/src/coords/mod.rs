//! Coordinate and geometry types shared by the scene store, surfaces and input.
//!
//! Two spaces are in play:
//! - normalized scene space: `Vec2` components in `[0, 1]` relative to a frame
//! - pixel space: `Point` / `PixelRect`, origin top-left, +X right, +Y down
//!
//! Normalized values are turned into pixels only when an element is bound to
//! a surface (see `PixelRect::resolve`).

mod point;
mod rect;
mod size;
mod vec2;

pub use point::Point;
pub use rect::{NormRect, PixelRect};
pub use size::SurfaceSize;
pub use vec2::Vec2;
