use crate::coords::Point;
use crate::scene::{FigureId, FigureRef, SceneStore};

use super::types::{ButtonState, MouseButton, PointerEvent};

/// Outcome of feeding one event to a [`DragHandler`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DragResponse {
    /// Nothing grabbed, or the event is irrelevant.
    Ignored,
    Grabbed(FigureId),
    /// The grabbed figure was shifted by `by` pixels.
    Moved { id: FigureId, by: Point },
    /// The grab ended, by button release or because the figure disappeared.
    Released,
}

impl DragResponse {
    #[inline]
    pub fn needs_redraw(self) -> bool {
        matches!(self, DragResponse::Moved { by, .. } if !by.is_zero())
    }
}

#[derive(Debug, Copy, Clone)]
struct Grab {
    id: FigureId,
    last: Point,
}

/// Turns pointer events into relative moves of a grabbed figure.
///
/// Deltas are incremental: each step moves the figure from the previously
/// recorded pointer position, not from the original grab point.
#[derive(Debug)]
pub struct DragHandler {
    button: MouseButton,
    grab: Option<Grab>,
}

impl DragHandler {
    /// Grabs with the left (primary) button.
    pub fn new() -> Self {
        Self::with_button(MouseButton::Left)
    }

    pub fn with_button(button: MouseButton) -> Self {
        Self { button, grab: None }
    }

    pub fn grabbed(&self) -> Option<FigureId> {
        self.grab.map(|g| g.id)
    }

    pub fn handle(&mut self, ev: &PointerEvent, store: &SceneStore) -> DragResponse {
        match *ev {
            PointerEvent::Button { button, state, x, y } if button == self.button => {
                let at = Point::from_logical(x, y);
                match state {
                    ButtonState::Pressed => self.press(at, store),
                    ButtonState::Released => self.release(at, store),
                }
            }
            PointerEvent::Moved { x, y } => self.drag_to(Point::from_logical(x, y), store),
            PointerEvent::Button { .. } | PointerEvent::Left => DragResponse::Ignored,
        }
    }

    /// Grabs the topmost figure under `at`, if any.
    pub fn press(&mut self, at: Point, store: &SceneStore) -> DragResponse {
        let figures = store.figures();
        self.grab = figure_under(&figures, at).map(|f| Grab { id: f.id, last: at });

        match self.grab {
            Some(g) => {
                log::debug!("grabbed figure {:?} at ({}, {})", g.id, at.x, at.y);
                DragResponse::Grabbed(g.id)
            }
            None => DragResponse::Ignored,
        }
    }

    /// Moves the grabbed figure by the delta since the last recorded position.
    pub fn drag_to(&mut self, at: Point, store: &SceneStore) -> DragResponse {
        let Some(grab) = self.grab.as_mut() else {
            return DragResponse::Ignored;
        };

        let by = at - grab.last;
        if !store.nudge_figure(grab.id, by) {
            log::debug!("grabbed figure {:?} is gone; releasing", grab.id);
            self.grab = None;
            return DragResponse::Released;
        }

        grab.last = at;
        DragResponse::Moved { id: grab.id, by }
    }

    /// Applies the final step up to `at`, then drops the grab.
    pub fn release(&mut self, at: Point, store: &SceneStore) -> DragResponse {
        if self.grab.is_none() {
            return DragResponse::Ignored;
        }
        self.drag_to(at, store);
        self.grab = None;
        DragResponse::Released
    }
}

impl Default for DragHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Topmost figure containing `p`; later figures are drawn on top.
pub fn figure_under(figures: &[FigureRef], p: Point) -> Option<&FigureRef> {
    figures.iter().rev().find(|f| f.contains(p))
}
