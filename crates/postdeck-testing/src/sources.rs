//! `PostSource` doubles for controller and worker tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use postdeck_providers::{FetchError, PostSource};
use postdeck_types::Post;
use tokio::sync::oneshot;

const SCRIPTED_ENDPOINT: &str = "scripted://posts";

/// Answers each fetch with the next scripted outcome.
///
/// Once the script is exhausted every further fetch fails.
#[derive(Default)]
pub struct ScriptedPostSource {
    script: Mutex<VecDeque<Result<Vec<Post>, String>>>,
    calls: AtomicUsize,
}

impl ScriptedPostSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_ok(self, posts: Vec<Post>) -> Self {
        self.push(Ok(posts));
        self
    }

    pub fn then_err(self, message: impl Into<String>) -> Self {
        self.push(Err(message.into()));
        self
    }

    fn push(&self, outcome: Result<Vec<Post>, String>) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(outcome);
        }
    }

    /// Number of fetches performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PostSource for ScriptedPostSource {
    fn describe(&self) -> String {
        SCRIPTED_ENDPOINT.to_string()
    }

    fn fetch_posts(&self) -> BoxFuture<'_, postdeck_providers::Result<Vec<Post>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| Err("script exhausted".to_string()));

        future::ready(next.map_err(|msg| FetchError::new(SCRIPTED_ENDPOINT, msg))).boxed()
    }
}

/// Holds every fetch open until the test releases it.
///
/// Each call to `fetch_posts` takes the next gate opened with `open_gate`,
/// so tests control the order in which concurrent fetches resolve. A fetch
/// whose gate sender is dropped fails.
#[derive(Default)]
pub struct GatedPostSource {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<Vec<Post>, String>>>>,
    started: AtomicUsize,
}

impl GatedPostSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare the gate for the next fetch and return its release handle.
    pub fn open_gate(&self) -> oneshot::Sender<Result<Vec<Post>, String>> {
        let (tx, rx) = oneshot::channel();
        if let Ok(mut gates) = self.gates.lock() {
            gates.push_back(rx);
        }
        tx
    }

    /// Number of fetches that have claimed a gate.
    pub fn fetches_started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    /// Yield until `count` fetches have claimed their gates.
    pub async fn wait_for_fetches(&self, count: usize) {
        while self.fetches_started() < count {
            tokio::task::yield_now().await;
        }
    }
}

impl PostSource for GatedPostSource {
    fn describe(&self) -> String {
        "gated://posts".to_string()
    }

    fn fetch_posts(&self) -> BoxFuture<'_, postdeck_providers::Result<Vec<Post>>> {
        let gate = self.gates.lock().ok().and_then(|mut gates| gates.pop_front());
        self.started.fetch_add(1, Ordering::SeqCst);

        async move {
            let Some(gate) = gate else {
                return Err(FetchError::new("gated://posts", "no gate opened"));
            };
            match gate.await {
                Ok(outcome) => outcome.map_err(|msg| FetchError::new("gated://posts", msg)),
                Err(_) => Err(FetchError::new("gated://posts", "gate dropped")),
            }
        }
        .boxed()
    }
}
