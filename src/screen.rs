//! Screen identity and the navigation primitives the coordinator decorates.

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_SCREEN_ID: AtomicU64 = AtomicU64::new(1);

/// Stable handle identifying a navigable screen.
///
/// Assigned once at screen creation; not tied to a memory address, so it
/// survives moves and cannot be recycled by the allocator while a transition
/// is in flight. Disposal is reported explicitly via
/// `NavSync::screen_disposed` rather than inferred from weak references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(u64);

impl ScreenId {
    /// Allocate the next process-unique id.
    pub fn next() -> Self {
        ScreenId(NEXT_SCREEN_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Build an id from a raw value, for hosts that already assign stable
    /// screen handles of their own.
    pub const fn from_raw(raw: u64) -> Self {
        ScreenId(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "screen#{}", self.0)
    }
}

/// Completion callback forwarded to the presenter for `present`.
pub type Completion = Box<dyn FnOnce() + Send + 'static>;

/// A navigable unit of UI.
///
/// `did_appear` is the real appearance handling that the interception layer
/// wrapped; the coordinator invokes it from the appearance handshake so
/// normal lifecycle semantics are preserved.
pub trait Screen: Send + Sync {
    fn id(&self) -> ScreenId;

    fn did_appear(&self, animated: bool) {
        let _ = animated;
    }
}

/// The push primitive of a navigation container.
pub trait NavigationStack: Send + Sync {
    fn push(&self, screen: Arc<dyn Screen>, animated: bool);
}

/// The present / segue primitives of a presenting screen.
pub trait Presenter: Send + Sync {
    /// Identity of the presenting screen, when it has one (the root
    /// container typically does not).
    fn id(&self) -> Option<ScreenId> {
        None
    }

    fn present(&self, screen: Arc<dyn Screen>, animated: bool, completion: Option<Completion>);

    /// `sender` is the toolkit-opaque object that triggered the segue, if
    /// any; segues run inline on the caller's thread, so it need not be
    /// `Send`.
    fn perform_segue(&self, identifier: &str, sender: Option<&dyn Any>);
}
