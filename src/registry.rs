//! In-flight transition registry (dedup guard).
//!
//! Prevents the classic double-tap failure: two transitions for the same
//! screen scheduled concurrently, which the underlying navigation primitives
//! do not defend against and which can corrupt their internal state.

use std::collections::HashSet;

use parking_lot::Mutex;

use crate::screen::ScreenId;

/// Set of screens with a transition currently in flight.
///
/// Membership check and insert happen as a single test-and-set under one
/// lock, so two racing callers cannot both observe "not present" and both
/// proceed. An id is a member at most once at any instant.
#[derive(Default)]
pub struct InFlightRegistry {
    scheduled: Mutex<HashSet<ScreenId>>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` as in flight. Returns false, and changes nothing, if a
    /// transition for the screen is already scheduled.
    pub fn try_begin(&self, id: ScreenId) -> bool {
        self.scheduled.lock().insert(id)
    }

    /// Unregister `id`. Idempotent; removing an absent id is a no-op.
    pub fn end(&self, id: ScreenId) {
        self.scheduled.lock().remove(&id);
    }

    /// Explicit disposal event: the screen was destroyed by its owning
    /// container. A stale in-flight entry must not survive the screen, or a
    /// dropped transition would block the handle forever.
    pub fn screen_disposed(&self, id: ScreenId) {
        if self.scheduled.lock().remove(&id) {
            tracing::debug!(screen = %id, "dropped in-flight entry for disposed screen");
        }
    }

    /// Whether a transition for `id` is currently in flight.
    pub fn is_in_flight(&self, id: ScreenId) -> bool {
        self.scheduled.lock().contains(&id)
    }
}
