//! Navigation-synchronization coordinator.
//!
//! Funnels every screen transition, router-driven or manual, through one
//! coordination point: per-screen dedup of in-flight transitions, FIFO
//! serialization of animated transitions onto the UI-affinity thread,
//! collision detection against in-progress router dispatch, and an
//! appearance handshake that lets the router block until the screen it
//! navigated to is actually visible.

pub mod coordinator;
pub mod dispatch;
pub mod error;
pub mod intent;
pub mod observer;
pub mod registry;
pub mod router;
pub mod screen;

pub use coordinator::{CollisionPolicy, CoordinatorConfig, NavSync};
pub use dispatch::{Job, TransitionQueue, UiExecutor, UiHandle, UiRunLoop};
pub use error::NavigationError;
pub use intent::{Dispatch, NavigationIntent, Origin, TransitionKind};
pub use observer::EventObserver;
pub use registry::InFlightRegistry;
pub use router::{ProcessingFlag, ProcessingGuard, RouterGate, RouterSignals};
pub use screen::{Completion, NavigationStack, Presenter, Screen, ScreenId};
