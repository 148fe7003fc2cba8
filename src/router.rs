//! Router-side signals the coordinator consumes.
//!
//! The routing engine owns both signals: it raises [`ProcessingFlag`] while
//! dispatching a route, and it engages the [`RouterGate`] before initiating a
//! router-driven push/present, blocking until the appearance handshake
//! releases it. The coordinator only reads the flag and releases the gate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::error::NavigationError;

/// True while the router is actively dispatching a route.
///
/// Read-only from the coordinator's perspective.
#[derive(Clone, Default)]
pub struct ProcessingFlag {
    processing: Arc<AtomicBool>,
}

impl ProcessingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::SeqCst)
    }

    /// Mark route dispatch as in progress for the guard's lifetime.
    pub fn enter(&self) -> ProcessingGuard {
        self.processing.store(true, Ordering::SeqCst);
        ProcessingGuard { flag: self.clone() }
    }
}

/// Clears the flag on drop, so a dispatch that panics or returns early
/// cannot leave the flag stuck and wedge all manual navigation.
pub struct ProcessingGuard {
    flag: ProcessingFlag,
}

impl Drop for ProcessingGuard {
    fn drop(&mut self) {
        self.flag.processing.store(false, Ordering::SeqCst);
    }
}

/// Single-slot signal coupling router progress to transition visual
/// completion.
///
/// The router engages the gate before a router-driven push/present, then
/// blocks on [`RouterGate::wait`] until the appearance handshake releases it.
/// The wait must run off the UI-affinity thread: the release happens on that
/// thread, so waiting there would deadlock.
#[derive(Clone, Default)]
pub struct RouterGate {
    inner: Arc<GateInner>,
}

#[derive(Default)]
struct GateInner {
    engaged: Mutex<bool>,
    released: Condvar,
}

impl RouterGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engage the gate ahead of a router-driven transition.
    pub fn engage(&self) {
        *self.inner.engaged.lock() = true;
        tracing::trace!("router gate engaged");
    }

    /// Whether an engage is currently outstanding.
    pub fn is_engaged(&self) -> bool {
        *self.inner.engaged.lock()
    }

    /// Block until the appearance handshake releases the gate. Returns
    /// immediately if the gate is not engaged.
    ///
    /// There is no timeout: an appearance event that never fires (for
    /// example a transition swallowed by the dedup guard) blocks the caller
    /// indefinitely. Use [`RouterGate::wait_timeout`] for a bounded wait.
    pub fn wait(&self) {
        let mut engaged = self.inner.engaged.lock();
        while *engaged {
            self.inner.released.wait(&mut engaged);
        }
    }

    /// Bounded variant of [`RouterGate::wait`].
    pub fn wait_timeout(&self, timeout: Duration) -> Result<(), NavigationError> {
        let deadline = Instant::now() + timeout;
        let mut engaged = self.inner.engaged.lock();
        while *engaged {
            if self
                .inner
                .released
                .wait_until(&mut engaged, deadline)
                .timed_out()
            {
                return Err(NavigationError::HandshakeTimeout { timeout });
            }
        }
        Ok(())
    }

    /// Release the gate and wake its waiters. No-op when not engaged; a
    /// single engage is released at most once.
    pub fn release(&self) {
        let mut engaged = self.inner.engaged.lock();
        if *engaged {
            *engaged = false;
            self.inner.released.notify_all();
            tracing::trace!("router gate released");
        }
    }
}

/// The router-owned signals injected into the coordinator at construction.
#[derive(Clone, Default)]
pub struct RouterSignals {
    pub processing: ProcessingFlag,
    pub gate: RouterGate,
}

impl RouterSignals {
    pub fn new() -> Self {
        Self::default()
    }
}
