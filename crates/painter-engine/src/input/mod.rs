//! Pointer input and figure dragging.
//!
//! The window collaborator converts its native events into [`PointerEvent`]s
//! and feeds them to a [`DragHandler`] together with the shared store.

mod drag;
mod types;

pub use drag::{figure_under, DragHandler, DragResponse};
pub use types::{ButtonState, MouseButton, PointerEvent};
