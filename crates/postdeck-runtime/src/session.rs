use std::sync::Arc;

use postdeck_providers::PostSource;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TryRecvError;

use crate::controller::{PostListController, RefreshApplied, RefreshTicket};
use crate::worker::{RefreshOutcome, RefreshWorker};

/// A mounted post list: controller plus its background fetch plumbing.
///
/// The owner drives it from a single loop: `request_refresh` on user
/// intent, `pump` on every iteration to apply whatever fetches resolved.
/// Dropping the session closes the outcome channel, so fetches still in
/// flight are discarded when they finish.
pub struct ListSession {
    controller: PostListController,
    worker: RefreshWorker,
    outcomes: UnboundedReceiver<RefreshOutcome>,
}

impl ListSession {
    /// Create the session and start the initial load.
    pub fn mount(handle: Handle, source: Arc<dyn PostSource>) -> Self {
        let (worker, outcomes) = RefreshWorker::new(handle, source);
        let mut session = Self {
            controller: PostListController::new(),
            worker,
            outcomes,
        };
        session.request_refresh();
        session
    }

    pub fn controller(&self) -> &PostListController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PostListController {
        &mut self.controller
    }

    pub fn source_label(&self) -> String {
        self.worker.source_label()
    }

    /// Begin a refresh and start its fetch in the background.
    pub fn request_refresh(&mut self) -> RefreshTicket {
        let ticket = self.controller.begin_refresh();
        // Outcomes come back over the channel; the task handle is not needed
        drop(self.worker.spawn(ticket));
        ticket
    }

    /// Apply every outcome that has already arrived, without waiting.
    ///
    /// Returns how many outcomes were applied (stale ones excluded).
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.outcomes.try_recv() {
                Ok(outcome) => {
                    if self.apply(outcome) != RefreshApplied::Stale {
                        applied += 1;
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        applied
    }

    /// Wait for the next outcome and apply it.
    ///
    /// Returns `None` only if the channel closed, which cannot happen while
    /// the session holds its worker.
    pub async fn next_outcome(&mut self) -> Option<RefreshApplied> {
        let outcome = self.outcomes.recv().await?;
        Some(self.apply(outcome))
    }

    /// Wait until no refresh is in flight.
    pub async fn settle(&mut self) -> Option<RefreshApplied> {
        let mut last = None;
        while self.controller.is_loading() {
            last = Some(self.next_outcome().await?);
        }
        last
    }

    fn apply(&mut self, outcome: RefreshOutcome) -> RefreshApplied {
        self.controller
            .complete_refresh(outcome.ticket, outcome.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postdeck_testing::fixtures::{numbered_posts, two_posts};
    use postdeck_testing::sources::{GatedPostSource, ScriptedPostSource};

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_mount_triggers_initial_load() {
        let source = Arc::new(ScriptedPostSource::new().then_ok(two_posts()));
        let mut session = ListSession::mount(Handle::current(), source.clone());

        assert!(session.controller().is_loading());

        let applied = session.settle().await;
        assert_eq!(applied, Some(RefreshApplied::Loaded { count: 2 }));
        assert_eq!(session.controller().posts().len(), 2);
        assert_eq!(source.calls(), 1);
    }

    // Fetch [A, B], expand row 1, refresh with the same posts: expansion resets.
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_refresh_with_same_posts_resets_expansion() {
        let source = Arc::new(
            ScriptedPostSource::new()
                .then_ok(two_posts())
                .then_ok(two_posts()),
        );
        let mut session = ListSession::mount(Handle::current(), source);
        session.settle().await;

        assert_eq!(session.controller().posts().len(), 2);
        assert_eq!(session.controller().expanded_count(), 0);

        session.controller_mut().toggle(1);
        assert!(session.controller().is_expanded(1));
        assert!(!session.controller().is_expanded(2));
        let first = &session.controller().posts()[0];
        assert_eq!(first.body, "a");

        session.request_refresh();
        session.settle().await;

        assert_eq!(session.controller().posts(), two_posts().as_slice());
        assert_eq!(session.controller().expanded_count(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_failed_refresh_keeps_last_good_list() {
        let source = Arc::new(
            ScriptedPostSource::new()
                .then_ok(numbered_posts(3))
                .then_err("HTTP 503"),
        );
        let mut session = ListSession::mount(Handle::current(), source);
        session.settle().await;
        session.controller_mut().toggle(3);

        session.request_refresh();
        let applied = session.settle().await;

        assert_eq!(applied, Some(RefreshApplied::Failed));
        assert_eq!(session.controller().posts().len(), 3);
        assert!(session.controller().is_expanded(3));
        assert!(session.controller().last_error().unwrap().contains("HTTP 503"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_overlapping_refresh_last_request_wins() {
        let source = Arc::new(GatedPostSource::new());
        let initial_gate = source.open_gate();
        let mut session = ListSession::mount(Handle::current(), source.clone());
        source.wait_for_fetches(1).await;

        let second_gate = source.open_gate();
        session.request_refresh();
        source.wait_for_fetches(2).await;

        // Newer request resolves first
        second_gate.send(Ok(two_posts())).unwrap();
        assert_eq!(
            session.next_outcome().await,
            Some(RefreshApplied::Loaded { count: 2 })
        );

        // Older request resolves late and is ignored
        initial_gate.send(Ok(numbered_posts(10))).unwrap();
        assert_eq!(session.next_outcome().await, Some(RefreshApplied::Stale));
        assert_eq!(session.controller().posts().len(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_pump_is_non_blocking() {
        let source = Arc::new(GatedPostSource::new());
        let gate = source.open_gate();
        let mut session = ListSession::mount(Handle::current(), source.clone());

        assert_eq!(session.pump(), 0);
        assert!(session.controller().is_loading());

        gate.send(Ok(two_posts())).unwrap();
        session.settle().await;
        assert!(!session.controller().is_loading());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_dropped_session_discards_late_outcome() {
        let source = Arc::new(GatedPostSource::new());
        let gate = source.open_gate();
        let session = ListSession::mount(Handle::current(), source.clone());
        source.wait_for_fetches(1).await;

        drop(session);

        // The in-flight fetch still takes its result after teardown
        gate.send(Ok(two_posts()))
            .expect("fetch still waiting on its gate");
        assert_eq!(source.fetches_started(), 1);
    }
}
