use thiserror::Error;

use crate::coords::SurfaceSize;

/// Failure to allocate a render surface.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("surface size {}x{} has no area", .0.width, .0.height)]
    Empty(SurfaceSize),

    #[error("surface size {}x{} exceeds the budget of {budget} pixels", .size.width, .size.height)]
    TooLarge { size: SurfaceSize, budget: u64 },
}
