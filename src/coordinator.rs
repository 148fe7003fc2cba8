//! Composition root: the navigation-synchronization coordinator.
//!
//! Every intercepted navigation call lands here before the real operation
//! executes. Each entry point runs the same pipeline: collision guard,
//! in-flight dedup, observer notification, then dispatch per the animated
//! policy. The appearance handshake closes the loop by releasing the router
//! gate once the screen is actually visible.

use std::any::Any;
use std::sync::Arc;

use crate::dispatch::{Job, TransitionQueue, UiExecutor};
use crate::error::NavigationError;
use crate::intent::{Dispatch, NavigationIntent, Origin, TransitionKind};
use crate::observer::{EventObserver, ObserverSlot};
use crate::registry::InFlightRegistry;
use crate::router::RouterSignals;
use crate::screen::{Completion, NavigationStack, Presenter, Screen, ScreenId};

/// What happens when a manual transition collides with router dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Fail fast: panic with the collision message. A collision is a
    /// programming error, not a recoverable runtime condition.
    #[default]
    Fatal,
    /// Return [`NavigationError::Collision`] to the caller instead, for
    /// hosts and test harnesses that want to catch it.
    Report,
}

/// Coordinator configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinatorConfig {
    pub collision_policy: CollisionPolicy,
}

/// The coordinator.
///
/// One instance per process by convention, constructed explicitly and
/// injected into the router and the interception layer; tests build a fresh
/// one each. State lives for the life of the instance; there is no teardown.
pub struct NavSync {
    registry: Arc<InFlightRegistry>,
    observer: ObserverSlot,
    queue: TransitionQueue,
    router: RouterSignals,
    config: CoordinatorConfig,
}

impl NavSync {
    pub fn new(ui: Arc<dyn UiExecutor>, router: RouterSignals) -> Self {
        Self::with_config(ui, router, CoordinatorConfig::default())
    }

    pub fn with_config(
        ui: Arc<dyn UiExecutor>,
        router: RouterSignals,
        config: CoordinatorConfig,
    ) -> Self {
        Self {
            registry: Arc::new(InFlightRegistry::new()),
            observer: ObserverSlot::default(),
            queue: TransitionQueue::new(ui),
            router,
            config,
        }
    }

    /// The router-owned signals this coordinator was built with.
    pub fn signals(&self) -> &RouterSignals {
        &self.router
    }

    /// Register the process-wide event observer. Held weakly; replaces any
    /// previous registration.
    pub fn set_observer(&self, observer: &Arc<dyn EventObserver>) {
        self.observer.set(observer);
    }

    pub fn clear_observer(&self) {
        self.observer.clear();
    }

    /// Whether a transition for `id` is currently in flight.
    pub fn is_in_flight(&self, id: ScreenId) -> bool {
        self.registry.is_in_flight(id)
    }

    /// Explicit disposal notification: the screen was destroyed by its
    /// owning container, so any stale in-flight entry is dropped.
    pub fn screen_disposed(&self, id: ScreenId) {
        self.registry.screen_disposed(id);
    }

    /// Intercepted push.
    ///
    /// Duplicate requests for a screen already in flight are silently
    /// dropped; the double-tap that causes them is a UI artifact, not a bug.
    pub fn on_push(
        &self,
        screen: Arc<dyn Screen>,
        animated: bool,
        stack: Arc<dyn NavigationStack>,
        origin: Origin,
    ) -> Result<Dispatch, NavigationError> {
        let id = screen.id();
        let intent = NavigationIntent {
            screen: Some(id),
            kind: TransitionKind::Push,
            animated,
            origin,
            presenter: None,
        };
        self.guard_collision(&intent)?;

        if !self.registry.try_begin(id) {
            tracing::debug!(screen = %id, "push already in flight; dropping duplicate");
            return Ok(Dispatch::DroppedDuplicate);
        }
        self.observer.notify(|o| o.pushed(id));
        tracing::debug!(screen = %id, animated, origin = ?origin, "push dispatched");

        let registry = Arc::clone(&self.registry);
        let body: Job = Box::new(move || {
            let _clear = scopeguard::guard((), move |()| registry.end(id));
            stack.push(screen, animated);
        });
        Ok(self.dispatch(animated, body))
    }

    /// Intercepted present.
    pub fn on_present(
        &self,
        screen: Arc<dyn Screen>,
        animated: bool,
        completion: Option<Completion>,
        presenter: Arc<dyn Presenter>,
        origin: Origin,
    ) -> Result<Dispatch, NavigationError> {
        let id = screen.id();
        let intent = NavigationIntent {
            screen: Some(id),
            kind: TransitionKind::Present,
            animated,
            origin,
            presenter: presenter.id(),
        };
        self.guard_collision(&intent)?;

        if !self.registry.try_begin(id) {
            tracing::debug!(screen = %id, "present already in flight; dropping duplicate");
            return Ok(Dispatch::DroppedDuplicate);
        }
        self.observer.notify(|o| o.presented(id));
        tracing::debug!(screen = %id, animated, origin = ?origin, "present dispatched");

        let registry = Arc::clone(&self.registry);
        let body: Job = Box::new(move || {
            let _clear = scopeguard::guard((), move |()| registry.end(id));
            presenter.present(screen, animated, completion);
        });
        Ok(self.dispatch(animated, body))
    }

    /// Intercepted segue.
    ///
    /// Segues are identified by string, not by screen instance, so they pass
    /// the collision guard but never touch the in-flight registry; the real
    /// operation runs inline on the caller's thread.
    pub fn on_perform_segue(
        &self,
        identifier: &str,
        sender: Option<&dyn Any>,
        presenter: Arc<dyn Presenter>,
        origin: Origin,
    ) -> Result<Dispatch, NavigationError> {
        let intent = NavigationIntent {
            screen: None,
            kind: TransitionKind::Segue(identifier.to_string()),
            animated: false,
            origin,
            presenter: presenter.id(),
        };
        self.guard_collision(&intent)?;

        tracing::debug!(identifier, origin = ?origin, "segue performed");
        presenter.perform_segue(identifier, sender);
        Ok(Dispatch::Executed)
    }

    /// Appearance handshake, invoked on the UI-affinity thread when a screen
    /// reports it has become visible.
    ///
    /// Order matters: observer first, then the wrapped appearance handling,
    /// then the gate release that unblocks router dispatch. The registry end
    /// is an idempotent backstop; the dispatcher already cleared the entry
    /// when the transition body ran.
    pub fn on_appeared(&self, screen: &dyn Screen, animated: bool) {
        let id = screen.id();
        self.observer.notify(|o| o.appeared(id));
        screen.did_appear(animated);
        self.router.gate.release();
        self.registry.end(id);
        tracing::trace!(screen = %id, animated, "appearance handshake complete");
    }

    fn guard_collision(&self, intent: &NavigationIntent) -> Result<(), NavigationError> {
        if intent.origin == Origin::Manual && self.router.processing.is_processing() {
            let err = NavigationError::Collision {
                kind: intent.kind.clone(),
            };
            match self.config.collision_policy {
                CollisionPolicy::Fatal => panic!("{err}"),
                CollisionPolicy::Report => {
                    tracing::error!(%err, "navigation collision");
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    fn dispatch(&self, animated: bool, body: Job) -> Dispatch {
        if animated {
            self.queue.enqueue(body);
            Dispatch::Enqueued
        } else {
            body();
            Dispatch::Executed
        }
    }
}
