//! Render surface port.
//!
//! The scene generator draws into whatever surface a [`Screen`] hands out.
//! The window/compositor collaborator supplies its own implementation; this
//! crate ships a CPU-backed one ([`CpuScreen`]) used headless and in tests.

mod cpu;
mod error;

pub use cpu::{CpuScreen, CpuSurface};
pub use error::SurfaceError;

use crate::coords::{PixelRect, SurfaceSize};
use crate::paint::Color;

/// A drawable pixel target.
pub trait Surface {
    fn size(&self) -> SurfaceSize;

    /// Full-surface rectangle anchored at the origin.
    fn bounds(&self) -> PixelRect {
        self.size().bounds()
    }

    /// Source-copy fill of `rect`, clipped to the surface.
    fn fill(&mut self, rect: PixelRect, color: Color);
}

/// Allocator of render surfaces.
pub trait Screen: Send + Sync {
    type Surface: Surface + Send;

    fn new_surface(&self, size: SurfaceSize) -> Result<Self::Surface, SurfaceError>;
}
