use std::sync::Arc;

use postdeck_providers::{FetchError, PostSource};
use postdeck_types::Post;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::controller::RefreshTicket;

/// A resolved fetch, tagged with the request it answers
#[derive(Debug)]
pub struct RefreshOutcome {
    pub ticket: RefreshTicket,
    pub result: Result<Vec<Post>, FetchError>,
}

/// Runs fetches off the UI loop and posts their outcomes back over a channel.
///
/// The receiving side is the only liveness signal: once it is dropped,
/// finished fetches are discarded instead of delivered.
pub struct RefreshWorker {
    handle: Handle,
    source: Arc<dyn PostSource>,
    tx: UnboundedSender<RefreshOutcome>,
}

impl RefreshWorker {
    pub fn new(
        handle: Handle,
        source: Arc<dyn PostSource>,
    ) -> (Self, UnboundedReceiver<RefreshOutcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { handle, source, tx }, rx)
    }

    pub fn source_label(&self) -> String {
        self.source.describe()
    }

    /// Start the fetch for `ticket` in the background.
    ///
    /// The task resolves to `true` if its outcome was delivered, `false`
    /// if the receiver was already gone.
    pub fn spawn(&self, ticket: RefreshTicket) -> JoinHandle<bool> {
        let source = self.source.clone();
        let tx = self.tx.clone();

        self.handle.spawn(async move {
            let result = source.fetch_posts().await;

            if tx.is_closed() {
                tracing::debug!(
                    generation = ticket.generation(),
                    "list torn down before fetch resolved; dropping outcome"
                );
                return false;
            }
            tx.send(RefreshOutcome { ticket, result }).is_ok()
        })
    }
}
