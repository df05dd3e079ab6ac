use std::sync::Mutex;

use crate::coords::{PixelRect, Point};
use crate::sync::lock;

use super::op::{Move, Operation};
use super::shapes::{BoundingRect, Figure, Fill};
use super::DrawList;

/// Stable identity of a figure inside one store.
///
/// Ids are never reused, so an id captured before a reset never matches a
/// figure added afterwards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FigureId(u64);

/// Read-only copy of a figure handed out for hit-testing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FigureRef {
    pub id: FigureId,
    pub figure: Figure,
    /// Pixel frame the figure is bound to; `None` until it is first drawn.
    pub frame: Option<PixelRect>,
}

impl FigureRef {
    /// Cross-shape containment; an unbound figure contains nothing.
    pub fn contains(&self, p: Point) -> bool {
        self.frame.is_some_and(|frame| self.figure.contains(frame, p))
    }
}

/// Element counts, for diagnostics and tests.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SceneStats {
    pub backgrounds: usize,
    pub figures: usize,
    pub has_bounding_rect: bool,
    pub pending_moves: usize,
}

#[derive(Debug)]
struct FigureEntry {
    id: FigureId,
    figure: Figure,
    frame: Option<PixelRect>,
}

#[derive(Debug)]
struct RectEntry {
    rect: BoundingRect,
    frame: Option<PixelRect>,
}

#[derive(Debug)]
struct PendingMove {
    mv: Move,
    /// Figures present when the move was applied, in ascending id order.
    targets: Vec<FigureId>,
}

#[derive(Debug, Default)]
struct SceneState {
    backgrounds: Vec<Fill>,
    bounding_rect: Option<RectEntry>,
    figures: Vec<FigureEntry>,
    moves: Vec<PendingMove>,
    next_id: u64,
}

/// Mutable document of drawable elements.
///
/// One lock guards all element collections, so a reset is atomic with
/// respect to every reader.
///
/// Elements bind lazily: the first snapshot that draws an element fixes its
/// pixel frame, and later snapshots (and moves) keep using that frame even
/// if the surface size changes. Old elements therefore do not reflow on
/// resize.
#[derive(Debug, Default)]
pub struct SceneStore {
    state: Mutex<SceneState>,
}

impl SceneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one operation. The update marker is a no-op.
    pub fn apply(&self, op: Operation) {
        let mut state = lock(&self.state);
        match op {
            Operation::Fill(fill) => state.backgrounds.push(fill),
            Operation::Figure(figure) => {
                let id = FigureId(state.next_id);
                state.next_id += 1;
                state.figures.push(FigureEntry { id, figure, frame: None });
            }
            Operation::BoundingRect(rect) => {
                state.bounding_rect = Some(RectEntry { rect, frame: None });
            }
            Operation::Move(mv) => {
                let targets = state.figures.iter().map(|f| f.id).collect();
                state.moves.push(PendingMove { mv, targets });
            }
            Operation::Reset => {
                state.backgrounds.clear();
                state.bounding_rect = None;
                state.figures.clear();
                state.moves.clear();
            }
            Operation::UpdateMarker => {}
        }
    }

    /// Copy of the current figures, in insertion order.
    pub fn figures(&self) -> Vec<FigureRef> {
        lock(&self.state)
            .figures
            .iter()
            .map(|f| FigureRef { id: f.id, figure: f.figure, frame: f.frame })
            .collect()
    }

    pub fn contains_figure(&self, id: FigureId) -> bool {
        lock(&self.state).figures.iter().any(|f| f.id == id)
    }

    /// Shifts a single figure's bound frame by a pixel offset.
    ///
    /// Returns `false` if the figure is gone. A figure that was never drawn
    /// stays where it is but still counts as present.
    pub fn nudge_figure(&self, id: FigureId, by: Point) -> bool {
        let mut state = lock(&self.state);
        match state.figures.iter_mut().find(|f| f.id == id) {
            Some(entry) => {
                if let Some(frame) = entry.frame.as_mut() {
                    *frame = frame.translated(by);
                }
                true
            }
            None => false,
        }
    }

    pub fn stats(&self) -> SceneStats {
        let state = lock(&self.state);
        SceneStats {
            backgrounds: state.backgrounds.len(),
            figures: state.figures.len(),
            has_bounding_rect: state.bounding_rect.is_some(),
            pending_moves: state.moves.len(),
        }
    }

    /// Binds unbound elements to `bounds`, drains pending moves against the
    /// current figures, and records the resulting draw stream.
    ///
    /// This is the only part of a snapshot that runs under the lock.
    pub(crate) fn record_frame(&self, bounds: PixelRect) -> DrawList {
        let mut state = lock(&self.state);
        let state = &mut *state;

        for entry in &mut state.figures {
            entry.frame.get_or_insert(bounds);
        }
        if let Some(entry) = state.bounding_rect.as_mut() {
            entry.frame.get_or_insert(bounds);
        }

        for pending in state.moves.drain(..) {
            let by = bounds.scale(pending.mv.offset);
            for entry in &mut state.figures {
                if pending.targets.binary_search(&entry.id).is_err() {
                    continue;
                }
                if let Some(frame) = entry.frame.as_mut() {
                    *frame = frame.translated(by);
                }
            }
        }

        let mut list = DrawList::new();
        for fill in &state.backgrounds {
            list.push_fill(fill);
        }
        if let Some(RectEntry { rect, frame: Some(frame) }) = &state.bounding_rect {
            list.push_bounding_rect(rect, *frame);
        }
        for entry in &state.figures {
            if let Some(frame) = entry.frame {
                list.push_figure(&entry.figure, frame);
            }
        }
        list
    }
}
