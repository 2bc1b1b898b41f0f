//! Shared test utilities for the screen workflow tests.
//!
//! Provides `FakeApi`, a scripted stand-in for the Mind-Bloom API that
//! counts calls and can hold a call in flight, and `Harness`, which owns
//! everything a screen borrows through `ScreenContext`.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::runtime::Handle;
use tokio::sync::Notify;

use mindbloom::api::{
    ApiError, Credentials, JournalDraft, JournalSaved, MindBloomApi, RegistrationInput,
};
use mindbloom::config::Config;
use mindbloom::screens::ScreenContext;
use mindbloom::widgets::{Toast, ToastManager};

/// Scripted responses, one per operation. Every call gets the same outcome.
#[derive(Debug, Clone)]
struct Script {
    login: Result<(), ApiError>,
    register: Result<(), ApiError>,
    journal: Result<JournalSaved, ApiError>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            login: Ok(()),
            register: Ok(()),
            journal: Ok(JournalSaved::default()),
        }
    }
}

/// A fake API with call counters and scripted outcomes.
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeApi {
    login_calls: AtomicUsize,
    register_calls: AtomicUsize,
    journal_calls: AtomicUsize,
    script: Mutex<Script>,
    last_journal: Mutex<Option<JournalDraft>>,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every call until `release` is called.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    /// Let one held call complete.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn failing_login(self, err: ApiError) -> Self {
        self.script.lock().unwrap().login = Err(err);
        self
    }

    pub fn failing_register(self, err: ApiError) -> Self {
        self.script.lock().unwrap().register = Err(err);
        self
    }

    pub fn journal_outcome(self, outcome: Result<JournalSaved, ApiError>) -> Self {
        self.script.lock().unwrap().journal = outcome;
        self
    }

    pub fn with_affirmation(self, text: &str) -> Self {
        self.journal_outcome(Ok(JournalSaved {
            affirmation: Some(text.to_string()),
        }))
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn journal_calls(&self) -> usize {
        self.journal_calls.load(Ordering::SeqCst)
    }

    pub fn last_journal(&self) -> Option<JournalDraft> {
        self.last_journal.lock().unwrap().clone()
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl MindBloomApi for FakeApi {
    async fn login(&self, _credentials: &Credentials) -> Result<(), ApiError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate().await;
        self.script.lock().unwrap().login.clone()
    }

    async fn register(&self, _input: &RegistrationInput) -> Result<(), ApiError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate().await;
        self.script.lock().unwrap().register.clone()
    }

    async fn save_journal_entry(&self, draft: &JournalDraft) -> Result<JournalSaved, ApiError> {
        self.journal_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_journal.lock().unwrap() = Some(draft.clone());
        self.wait_for_gate().await;
        self.script.lock().unwrap().journal.clone()
    }
}

/// What a screen borrows from the app, owned for the length of a test.
///
/// Must be created inside a tokio runtime.
#[allow(dead_code)]
pub struct Harness {
    pub config: Config,
    pub toasts: ToastManager,
    runtime: Handle,
}

#[allow(dead_code)]
impl Harness {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            toasts: ToastManager::new(),
            runtime: Handle::current(),
        }
    }

    pub fn ctx(&mut self) -> ScreenContext<'_> {
        ScreenContext::new(&self.config, &self.runtime, &mut self.toasts)
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toasts.current()
    }

    /// Message of the current toast, or an empty string.
    pub fn toast_message(&self) -> String {
        self.toast().map(|t| t.message.clone()).unwrap_or_default()
    }
}

/// Let spawned tasks run until they block.
#[allow(dead_code)]
pub async fn yield_a_few() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}
