use std::io;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle, ThreadId};

use thiserror::Error;

use crate::scene::Operation;
use crate::sync::lock;

use super::{OpQueue, Receiver, SceneSink};

/// Lifecycle of the execution loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    /// Constructed, never started.
    Idle,
    Running,
    Terminated,
}

#[derive(Debug, Error)]
pub enum LoopError {
    #[error("execution loop is already running")]
    AlreadyRunning,

    #[error("failed to spawn the execution thread")]
    Spawn(#[source] io::Error),
}

struct Worker {
    handle: JoinHandle<()>,
    thread: ThreadId,
}

/// Single-consumer executor of queued operations.
///
/// Operations may be posted at any time, including before [`start`]; they
/// are applied in queue order once the worker runs. [`terminate`] drops
/// whatever is still queued and returns only after the worker has exited,
/// so no scene mutation happens after it returns.
///
/// [`start`]: Loop::start
/// [`terminate`]: Loop::terminate
pub struct Loop {
    queue: Arc<OpQueue>,
    state: Arc<Mutex<LoopState>>,
    worker: Mutex<Option<Worker>>,
    /// Set by the worker itself before it pulls anything.
    worker_thread: Arc<Mutex<Option<ThreadId>>>,
}

impl Loop {
    pub fn new() -> Self {
        Self {
            queue: Arc::new(OpQueue::new()),
            state: Arc::new(Mutex::new(LoopState::Idle)),
            worker: Mutex::new(None),
            worker_thread: Arc::new(Mutex::new(None)),
        }
    }

    pub fn state(&self) -> LoopState {
        *lock(&self.state)
    }

    /// Number of operations waiting to be applied.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn post(&self, op: Operation) {
        self.queue.push(op);
    }

    /// Posts a batch contiguously; no other producer's operations interleave.
    #[inline]
    pub fn post_all(&self, ops: impl IntoIterator<Item = Operation>) {
        self.queue.extend(ops);
    }

    /// Spawns the worker thread.
    ///
    /// A worker that already exited (e.g. terminated from inside its own
    /// receiver) is joined here first. Fails with `AlreadyRunning` while the
    /// previous worker is still alive.
    pub fn start(&self, sink: Arc<dyn SceneSink>, receiver: Arc<dyn Receiver>) -> Result<(), LoopError> {
        let mut worker = lock(&self.worker);
        if worker.as_ref().is_some_and(|w| !w.handle.is_finished()) {
            return Err(LoopError::AlreadyRunning);
        }
        if let Some(Worker { handle, thread }) = worker.take() {
            if handle.join().is_err() {
                log::error!("execution thread {thread:?} panicked");
            }
            *lock(&self.worker_thread) = None;
        }

        self.queue.revive();
        *lock(&self.state) = LoopState::Running;

        let queue = Arc::clone(&self.queue);
        let state = Arc::clone(&self.state);
        let worker_thread = Arc::clone(&self.worker_thread);
        let spawned = thread::Builder::new()
            .name("painter-exec".to_string())
            .spawn(move || {
                *lock(&worker_thread) = Some(thread::current().id());
                run(&queue, sink.as_ref(), receiver.as_ref(), &state);
            });

        let handle = match spawned {
            Ok(h) => h,
            Err(err) => {
                *lock(&self.state) = LoopState::Terminated;
                return Err(LoopError::Spawn(err));
            }
        };

        let thread = handle.thread().id();
        *worker = Some(Worker { handle, thread });

        log::info!("execution loop started");
        Ok(())
    }

    /// Stops the worker and waits for it to exit.
    ///
    /// Idempotent and safe to call concurrently; every caller returns only
    /// once the worker is gone. When called from the worker itself (e.g. by
    /// the receiver) it only signals: the worker exits after the current
    /// notification returns.
    pub fn terminate(&self) {
        self.queue.terminate();

        let on_worker = *lock(&self.worker_thread) == Some(thread::current().id());
        if on_worker {
            return;
        }

        let mut worker = lock(&self.worker);
        if let Some(Worker { handle, thread }) = worker.take() {
            if handle.join().is_err() {
                log::error!("execution thread {thread:?} panicked");
            }
            *lock(&self.worker_thread) = None;
            *lock(&self.state) = LoopState::Terminated;
            log::info!("execution loop terminated");
        }
    }
}

impl Default for Loop {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Loop {
    fn drop(&mut self) {
        self.terminate();
    }
}

fn run(queue: &OpQueue, sink: &dyn SceneSink, receiver: &dyn Receiver, state: &Mutex<LoopState>) {
    while let Some(op) = queue.pull() {
        log::trace!("applying {}", op.name());
        sink.apply(op);
        receiver.update();
    }
    *lock(state) = LoopState::Terminated;
}
