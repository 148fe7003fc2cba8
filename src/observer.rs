//! Cross-cutting event observer, weakly held.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::screen::ScreenId;

/// Receives appear/push/present events for telemetry.
///
/// At most one observer is registered at a time. The coordinator holds it
/// weakly and never keeps it alive; absence, or an observer the application
/// has since dropped, is a silent no-op.
pub trait EventObserver: Send + Sync {
    fn appeared(&self, screen: ScreenId) {
        let _ = screen;
    }

    fn pushed(&self, screen: ScreenId) {
        let _ = screen;
    }

    fn presented(&self, screen: ScreenId) {
        let _ = screen;
    }
}

/// Weak registration slot for the single observer.
#[derive(Default)]
pub(crate) struct ObserverSlot {
    slot: Mutex<Option<Weak<dyn EventObserver>>>,
}

impl ObserverSlot {
    pub fn set(&self, observer: &Arc<dyn EventObserver>) {
        *self.slot.lock() = Some(Arc::downgrade(observer));
    }

    pub fn clear(&self) {
        *self.slot.lock() = None;
    }

    /// Run `f` against the live observer, if any. The slot lock is not held
    /// while `f` runs.
    pub fn notify(&self, f: impl FnOnce(&dyn EventObserver)) {
        let live = self.slot.lock().as_ref().and_then(Weak::upgrade);
        if let Some(observer) = live {
            f(&*observer);
        }
    }
}
