use crate::coords::Vec2;

use super::shapes::{BoundingRect, Figure, Fill};

/// Relative displacement of the figures present when the move is applied.
///
/// `offset` is normalized; it is resolved against the surface the move is
/// drained on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Move {
    pub offset: Vec2,
}

impl Move {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { offset: Vec2::new(x, y) }
    }
}

/// One scene mutation request, or the batch-boundary control token.
///
/// Extending the scene:
/// - add a payload type under `scene::shapes::*`
/// - add a variant here and a keyword in `scene::table`
/// - handle it in `SceneStore::apply`
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Fill(Fill),
    Figure(Figure),
    BoundingRect(BoundingRect),
    Move(Move),
    /// Clears every accumulated element.
    Reset,
    /// Delimits an atomic batch; never reaches the store.
    UpdateMarker,
}

impl Operation {
    /// Short human-readable name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Fill(_) => "fill",
            Operation::Figure(_) => "figure",
            Operation::BoundingRect(_) => "brect",
            Operation::Move(_) => "move",
            Operation::Reset => "reset",
            Operation::UpdateMarker => "update",
        }
    }
}
