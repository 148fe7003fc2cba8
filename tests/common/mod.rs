//! Shared test fixtures: recording screens, containers, and observers.

#![allow(dead_code)]

use std::any::Any;
use std::sync::{Arc, Once};

use parking_lot::Mutex;

use navsync::{
    CollisionPolicy, Completion, CoordinatorConfig, EventObserver, NavSync, NavigationStack,
    Presenter, RouterSignals, Screen, ScreenId, UiRunLoop,
};

static TRACING: Once = Once::new();

/// Opt-in log capture (`RUST_LOG=navsync=trace cargo test`).
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Observer events in the order they were delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Pushed(ScreenId),
    Presented(ScreenId),
    Appeared(ScreenId),
}

pub type EventLog = Arc<Mutex<Vec<Event>>>;

pub struct RecordingObserver {
    pub events: EventLog,
}

impl EventObserver for RecordingObserver {
    fn appeared(&self, screen: ScreenId) {
        self.events.lock().push(Event::Appeared(screen));
    }

    fn pushed(&self, screen: ScreenId) {
        self.events.lock().push(Event::Pushed(screen));
    }

    fn presented(&self, screen: ScreenId) {
        self.events.lock().push(Event::Presented(screen));
    }
}

/// Navigation-primitive calls in the order they executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Push(ScreenId, bool),
    Present(ScreenId, bool),
    Segue(String),
}

pub type OpLog = Arc<Mutex<Vec<Op>>>;

pub fn op_log() -> OpLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub struct TestScreen {
    id: ScreenId,
    /// Animated flags from `did_appear`, in call order.
    pub appearances: Mutex<Vec<bool>>,
}

impl TestScreen {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            id: ScreenId::next(),
            appearances: Mutex::new(Vec::new()),
        })
    }
}

impl Screen for TestScreen {
    fn id(&self) -> ScreenId {
        self.id
    }

    fn did_appear(&self, animated: bool) {
        self.appearances.lock().push(animated);
    }
}

pub struct RecordingStack {
    pub ops: OpLog,
}

impl RecordingStack {
    pub fn new() -> Arc<Self> {
        Self::with_log(op_log())
    }

    /// Share one log across containers to observe interleaved ordering.
    pub fn with_log(ops: OpLog) -> Arc<Self> {
        Arc::new(Self { ops })
    }
}

impl NavigationStack for RecordingStack {
    fn push(&self, screen: Arc<dyn Screen>, animated: bool) {
        self.ops.lock().push(Op::Push(screen.id(), animated));
    }
}

pub struct RecordingPresenter {
    pub ops: OpLog,
}

impl RecordingPresenter {
    pub fn new() -> Arc<Self> {
        Self::with_log(op_log())
    }

    pub fn with_log(ops: OpLog) -> Arc<Self> {
        Arc::new(Self { ops })
    }
}

impl Presenter for RecordingPresenter {
    fn present(&self, screen: Arc<dyn Screen>, animated: bool, completion: Option<Completion>) {
        self.ops.lock().push(Op::Present(screen.id(), animated));
        if let Some(done) = completion {
            done();
        }
    }

    fn perform_segue(&self, identifier: &str, _sender: Option<&dyn Any>) {
        self.ops.lock().push(Op::Segue(identifier.to_string()));
    }
}

/// A fresh coordinator wired to a manually pumped UI run loop, with the
/// `Report` collision policy so tests can assert on the error.
pub struct Fixture {
    pub nav: NavSync,
    pub ui: UiRunLoop,
    pub signals: RouterSignals,
    pub observer: Arc<RecordingObserver>,
    pub events: EventLog,
}

pub fn fixture() -> Fixture {
    init_tracing();
    let (ui, handle) = UiRunLoop::new();
    let signals = RouterSignals::new();
    let nav = NavSync::with_config(
        Arc::new(handle),
        signals.clone(),
        CoordinatorConfig {
            collision_policy: CollisionPolicy::Report,
        },
    );

    let events: EventLog = Arc::new(Mutex::new(Vec::new()));
    let observer = Arc::new(RecordingObserver {
        events: Arc::clone(&events),
    });
    let registered: Arc<dyn EventObserver> = observer.clone();
    nav.set_observer(&registered);

    Fixture {
        nav,
        ui,
        signals,
        observer,
        events,
    }
}
