use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, PoisonError};

use crate::scene::Operation;
use crate::sync::lock;

#[derive(Debug, Default)]
struct QueueState {
    items: VecDeque<Operation>,
    terminated: bool,
}

/// Unbounded FIFO of operations with blocking pull and cooperative shutdown.
///
/// Any number of producers may `push`; exactly one consumer is expected to
/// `pull`. Termination wins over queued work: once terminated, `pull`
/// returns `None` even if operations remain.
#[derive(Debug, Default)]
pub struct OpQueue {
    state: Mutex<QueueState>,
    available: Condvar,
}

impl OpQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends at the tail and wakes a parked puller, if any.
    pub fn push(&self, op: Operation) {
        let mut state = lock(&self.state);
        state.items.push_back(op);
        drop(state);
        self.available.notify_one();
    }

    /// Appends every operation under one lock acquisition.
    pub fn extend(&self, ops: impl IntoIterator<Item = Operation>) {
        let mut state = lock(&self.state);
        state.items.extend(ops);
        drop(state);
        self.available.notify_one();
    }

    /// Removes the head, blocking while the queue is empty.
    ///
    /// Returns `None` once the queue has been terminated.
    pub fn pull(&self) -> Option<Operation> {
        let mut state = lock(&self.state);
        loop {
            if state.terminated {
                return None;
            }
            if let Some(op) = state.items.pop_front() {
                return Some(op);
            }
            state = self
                .available
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Marks the queue terminated and wakes any parked puller. Idempotent.
    pub fn terminate(&self) {
        lock(&self.state).terminated = true;
        self.available.notify_all();
    }

    /// Clears the terminated flag so the queue can feed a restarted consumer.
    ///
    /// Operations queued before the restart are kept.
    pub fn revive(&self) {
        lock(&self.state).terminated = false;
    }

    pub fn len(&self) -> usize {
        lock(&self.state).items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
