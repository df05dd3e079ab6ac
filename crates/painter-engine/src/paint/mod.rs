//! Colors used by scene elements and surfaces.

mod color;

pub use color::Color;
