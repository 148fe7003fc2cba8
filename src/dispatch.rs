//! Transition execution: the UI-affinity executor seam and the dedicated
//! FIFO background queue for animated transitions.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// A unit of transition work destined for the UI-affinity thread.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Something that can run jobs on the single UI-affinity thread.
///
/// Submission must not block, and jobs submitted by a single caller must run
/// in submission order. In a toolkit host this is the main run loop; tests
/// use [`UiRunLoop`] and pump it by hand.
pub trait UiExecutor: Send + Sync {
    fn submit(&self, job: Job);
}

/// Minimal single-thread run loop usable as the UI-affinity executor in
/// hosts without a toolkit-provided main loop, and in tests.
pub struct UiRunLoop {
    rx: Receiver<Job>,
}

/// Cloneable submission handle for a [`UiRunLoop`].
#[derive(Clone)]
pub struct UiHandle {
    tx: Sender<Job>,
}

impl UiExecutor for UiHandle {
    fn submit(&self, job: Job) {
        // A closed receiver means the loop shut down; late transitions are
        // dropped rather than surfaced, matching process-teardown semantics.
        if self.tx.send(job).is_err() {
            tracing::warn!("ui run loop gone; transition dropped");
        }
    }
}

impl UiRunLoop {
    pub fn new() -> (Self, UiHandle) {
        let (tx, rx) = mpsc::channel();
        (Self { rx }, UiHandle { tx })
    }

    /// Run jobs until every handle is dropped.
    pub fn run(self) {
        while let Ok(job) = self.rx.recv() {
            job();
        }
    }

    /// Block up to `timeout` for one job and run it. Returns whether a job
    /// ran.
    pub fn run_one(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(job) => {
                job();
                true
            }
            Err(_) => false,
        }
    }

    /// Run whatever is queued right now without blocking. Returns the number
    /// of jobs run.
    pub fn run_until_idle(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.rx.try_recv() {
            job();
            ran += 1;
        }
        ran
    }
}

/// Dedicated FIFO background sequence for animated transitions.
///
/// The worker thread does nothing beyond re-dispatching each job to the UI
/// executor, so submission order is preserved end-to-end. It is not shared
/// with unrelated background work. Non-animated transitions bypass this
/// queue entirely and run inline at the call site.
pub struct TransitionQueue {
    tx: Sender<Job>,
}

impl TransitionQueue {
    /// Spawn the worker. It exits once the queue is dropped and the channel
    /// drains.
    pub fn new(ui: Arc<dyn UiExecutor>) -> Self {
        let (tx, rx) = mpsc::channel::<Job>();
        thread::spawn(move || {
            while let Ok(job) = rx.recv() {
                ui.submit(job);
            }
            tracing::trace!("transition queue worker exited");
        });
        Self { tx }
    }

    pub fn enqueue(&self, job: Job) {
        if self.tx.send(job).is_err() {
            tracing::warn!("transition queue worker gone; animated transition dropped");
        }
    }
}
