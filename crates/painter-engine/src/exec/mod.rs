//! Execution side of the pipeline.
//!
//! Producers push operations into an [`OpQueue`]; a single [`Loop`] worker
//! pulls them in order, applies each to a [`SceneSink`], and notifies the
//! [`Receiver`] before pulling the next one.

mod queue;
mod worker;

pub use queue::OpQueue;
pub use worker::{Loop, LoopError, LoopState};

use crate::scene::{Generator, Operation, SceneStore};
use crate::surface::Screen;

/// Renderer-side collaborator notified after every applied operation.
///
/// The call is synchronous: the loop does not pull the next operation until
/// it returns, so a slow receiver throttles command application.
pub trait Receiver: Send + Sync {
    fn update(&self);
}

/// Write side of the scene, owned by the execution loop.
pub trait SceneSink: Send + Sync {
    fn apply(&self, op: Operation);
}

impl SceneSink for SceneStore {
    fn apply(&self, op: Operation) {
        SceneStore::apply(self, op);
    }
}

impl<S: Screen> SceneSink for Generator<S> {
    fn apply(&self, op: Operation) {
        self.update(op);
    }
}
