//! Scripted fakes shared by the session flow tests
#![allow(dead_code)]

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use smew_core::{AuthError, AuthResult, Claims, Credential, LoginOutcome, RefreshOutcome};
use smew_session::{
    AppEntry, Bootstrapper, BrowserSurface, IdentityProvider, InitOptions, LocalSpawner,
    SessionConfig, SessionContext,
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Build a credential carrying an optional locale claim
pub fn credential(token: &str, locale: Option<&str>) -> Credential {
    let claims = Claims {
        locale: locale.map(str::to_owned),
        ..Claims::default()
    };
    Credential::new(token, Some(1_700_000_300), claims)
}

/// Identity provider with scripted outcomes
pub struct FakeProvider {
    login: RefCell<Option<LoginOutcome>>,
    refresh_outcomes: RefCell<VecDeque<RefreshOutcome>>,
    pending_refreshes: RefCell<VecDeque<oneshot::Receiver<RefreshOutcome>>>,
    pub init_options: RefCell<Vec<InitOptions>>,
    pub refresh_calls: Cell<usize>,
    pub min_validities: RefCell<Vec<Duration>>,
    pub handler: RefCell<Option<Rc<dyn Fn()>>>,
}

impl FakeProvider {
    pub fn with_login(outcome: LoginOutcome) -> Rc<Self> {
        Rc::new(Self {
            login: RefCell::new(Some(outcome)),
            refresh_outcomes: RefCell::new(VecDeque::new()),
            pending_refreshes: RefCell::new(VecDeque::new()),
            init_options: RefCell::new(Vec::new()),
            refresh_calls: Cell::new(0),
            min_validities: RefCell::new(Vec::new()),
            handler: RefCell::new(None),
        })
    }

    /// Script an immediately-resolving refresh outcome
    pub fn push_refresh(&self, outcome: RefreshOutcome) {
        self.refresh_outcomes.borrow_mut().push_back(outcome);
    }

    /// Script a refresh attempt whose completion the test controls
    pub fn push_pending_refresh(&self) -> oneshot::Sender<RefreshOutcome> {
        let (tx, rx) = oneshot::channel();
        self.pending_refreshes.borrow_mut().push_back(rx);
        tx
    }

    /// Fire the expiry notification, as the provider would near expiry
    pub fn fire_expiry(&self) {
        let handler = self
            .handler
            .borrow()
            .clone()
            .expect("no expiry handler installed");
        handler();
    }

    pub fn has_handler(&self) -> bool {
        self.handler.borrow().is_some()
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FakeProvider {
    async fn initialize(&self, options: InitOptions) -> LoginOutcome {
        self.init_options.borrow_mut().push(options);
        self.login
            .borrow_mut()
            .take()
            .expect("initialize called more than once")
    }

    async fn refresh(&self, min_validity: Duration) -> RefreshOutcome {
        self.refresh_calls.set(self.refresh_calls.get() + 1);
        self.min_validities.borrow_mut().push(min_validity);
        if let Some(outcome) = self.refresh_outcomes.borrow_mut().pop_front() {
            return outcome;
        }
        let pending = self.pending_refreshes.borrow_mut().pop_front();
        match pending {
            Some(rx) => rx.await.expect("refresh outcome sender dropped"),
            None => Err(AuthError::refresh_failed("no scripted outcome")),
        }
    }

    fn set_expiry_handler(&self, handler: Rc<dyn Fn()>) {
        *self.handler.borrow_mut() = Some(handler);
    }
}

/// Browser surface over an in-memory URL
///
/// Only in-place replacement exists, so a history entry can never be pushed
/// through this surface.
pub struct FakeBrowser {
    pub url: RefCell<Url>,
    pub replace_calls: Cell<usize>,
    pub fail_reads: Cell<bool>,
}

impl FakeBrowser {
    pub fn at(url: &str) -> Rc<Self> {
        Rc::new(Self {
            url: RefCell::new(Url::parse(url).expect("test URL must parse")),
            replace_calls: Cell::new(0),
            fail_reads: Cell::new(false),
        })
    }

    pub fn current(&self) -> String {
        self.url.borrow().to_string()
    }
}

impl BrowserSurface for FakeBrowser {
    fn current_url(&self) -> AuthResult<Url> {
        if self.fail_reads.get() {
            return Err(AuthError::browser_unavailable("location blocked"));
        }
        Ok(self.url.borrow().clone())
    }

    fn replace_url(&self, url: &Url) -> AuthResult<()> {
        self.replace_calls.set(self.replace_calls.get() + 1);
        *self.url.borrow_mut() = url.clone();
        Ok(())
    }
}

/// Application module that records its invocations
#[derive(Default)]
pub struct RecordingApp {
    pub calls: RefCell<Vec<&'static str>>,
}

impl RecordingApp {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }
}

impl AppEntry for RecordingApp {
    fn main(&self) {
        self.calls.borrow_mut().push("main");
    }

    fn start_network_thread(&self) {
        self.calls.borrow_mut().push("start_network_thread");
    }
}

/// Spawner that queues futures for the test to drive explicitly
#[derive(Default)]
pub struct QueueSpawner {
    queue: RefCell<VecDeque<LocalBoxFuture<'static, ()>>>,
}

impl QueueSpawner {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Run everything spawned so far in spawn order, including work spawned
    /// while draining
    pub async fn drain(&self) {
        loop {
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some(fut) => fut.await,
                None => break,
            }
        }
    }

    pub fn take_spawned(&self) -> Vec<LocalBoxFuture<'static, ()>> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn spawned_count(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl LocalSpawner for QueueSpawner {
    fn spawn_local(&self, fut: LocalBoxFuture<'static, ()>) {
        self.queue.borrow_mut().push_back(fut);
    }
}

/// Counts error and warning events so tests can assert "exactly one report"
#[derive(Clone, Default)]
pub struct ReportCounter {
    errors: Arc<AtomicUsize>,
    warnings: Arc<AtomicUsize>,
}

impl ReportCounter {
    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }

    pub fn warnings(&self) -> usize {
        self.warnings.load(Ordering::SeqCst)
    }
}

impl tracing::Subscriber for ReportCounter {
    fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
        tracing::span::Id::from_u64(1)
    }

    fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}

    fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}

    fn event(&self, event: &tracing::Event<'_>) {
        let level = *event.metadata().level();
        if level == tracing::Level::ERROR {
            self.errors.fetch_add(1, Ordering::SeqCst);
        } else if level == tracing::Level::WARN {
            self.warnings.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn enter(&self, _: &tracing::span::Id) {}

    fn exit(&self, _: &tracing::span::Id) {}
}

/// Everything a flow test needs, wired the way the web shell wires it
pub struct Harness {
    pub provider: Rc<FakeProvider>,
    pub browser: Rc<FakeBrowser>,
    pub app: Rc<RecordingApp>,
    pub spawner: Rc<QueueSpawner>,
    pub ctx: Rc<SessionContext>,
}

impl Harness {
    pub fn new(login: LoginOutcome, page_url: &str) -> Self {
        Self::with_config(SessionConfig::new("auth/client.json"), login, page_url)
    }

    pub fn with_config(config: SessionConfig, login: LoginOutcome, page_url: &str) -> Self {
        let provider = FakeProvider::with_login(login);
        let ctx = Rc::new(SessionContext::new(
            config,
            Rc::clone(&provider) as Rc<dyn IdentityProvider>,
        ));
        Self {
            provider,
            browser: FakeBrowser::at(page_url),
            app: RecordingApp::new(),
            spawner: QueueSpawner::new(),
            ctx,
        }
    }

    pub fn bootstrapper(&self) -> Bootstrapper {
        Bootstrapper::new(
            Rc::clone(&self.ctx),
            Rc::clone(&self.browser) as Rc<dyn BrowserSurface>,
            Rc::clone(&self.app) as Rc<dyn AppEntry>,
            Rc::clone(&self.spawner) as Rc<dyn LocalSpawner>,
        )
    }
}
