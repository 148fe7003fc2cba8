//! Error types for the coordinator.
//!
//! Only two failure kinds exist: a navigation collision (a programming
//! error, fail-fast by default) and an expired bounded wait on the router
//! gate. Duplicate in-flight transitions are not errors; they are dropped
//! silently at the entry points.

use std::time::Duration;

use thiserror::Error;

use crate::intent::TransitionKind;

/// Errors surfaced by the coordinator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavigationError {
    /// Manual navigation attempted while the router was dispatching routes.
    ///
    /// The router's state machine assumes exclusive control of the
    /// navigation stack while resolving a route; a concurrent manual
    /// transition would leave the stack inconsistent with what the router
    /// believes it pushed.
    #[error("attempted manual {kind} while routes were being processed")]
    Collision { kind: TransitionKind },

    /// Bounded wait on the router gate expired before an appearance event
    /// released it.
    #[error("router gate not released within {timeout:?}")]
    HandshakeTimeout { timeout: Duration },
}

impl NavigationError {
    pub fn is_collision(&self) -> bool {
        matches!(self, NavigationError::Collision { .. })
    }
}
