//! Transition intents and dispatch outcomes.

use std::fmt;

use crate::screen::ScreenId;

/// Where a transition request originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Initiated by the routing engine's own dispatch logic.
    Router,
    /// Initiated by application code calling a navigation primitive directly.
    Manual,
}

/// The kind of transition an intent requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionKind {
    Push,
    Present,
    /// Segues are identified by string, not by screen instance.
    Segue(String),
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionKind::Push => f.write_str("push"),
            TransitionKind::Present => f.write_str("present"),
            TransitionKind::Segue(identifier) => write!(f, "segue '{}'", identifier),
        }
    }
}

/// One requested transition, built at interception time and consumed once.
///
/// The completion callback travels alongside the intent (it is consumed by
/// the presenter, not the coordinator), which keeps this record `Clone` for
/// logging and guard checks.
#[derive(Debug, Clone)]
pub struct NavigationIntent {
    /// Target screen. `None` for segues, which have no tracked identity.
    pub screen: Option<ScreenId>,
    pub kind: TransitionKind,
    pub animated: bool,
    pub origin: Origin,
    /// Originating screen, for `present`.
    pub presenter: Option<ScreenId>,
}

/// How an accepted entry-point call was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Ran inline on the caller's thread before the call returned.
    Executed,
    /// Queued behind earlier animated transitions for the UI thread.
    Enqueued,
    /// A transition for the same screen is already in flight; the request
    /// was silently dropped.
    DroppedDuplicate,
}
