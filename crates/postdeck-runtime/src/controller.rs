use std::collections::HashSet;

use chrono::{DateTime, Local};
use postdeck_providers::{FetchError, PostSource};
use postdeck_types::{Post, PostId, post_ids};

// NOTE: Expansion State Rules
//
// - Expansion is a set of expanded ids, independent of load state
// - Applying a fetch result replaces the list and empties the set
//   (ids from an older list must not leak onto a new one)
// - A failed fetch never touches the list or the set
// - Set operations are total: unknown ids may be toggled freely
// - Each refresh carries a generation; only the latest one may apply,
//   so overlapping refreshes resolve as "last request wins"

/// Progress of the most recent refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    LoadFailed,
}

/// Identifies one refresh request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    generation: u64,
}

impl RefreshTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What `complete_refresh` did with an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshApplied {
    Loaded { count: usize },
    Failed,
    /// A newer refresh was requested after this one; outcome dropped
    Stale,
}

/// Owner of the post list, the expansion set and the load state.
///
/// Single writer: every mutation goes through the methods below.
#[derive(Debug, Default)]
pub struct PostListController {
    posts: Vec<Post>,
    expanded: HashSet<PostId>,
    load_state: LoadState,
    generation: u64,
    last_error: Option<String>,
    last_loaded_at: Option<DateTime<Local>>,
}

impl PostListController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Loading` and hand out a ticket for the new request.
    ///
    /// Never rejects; gating repeated refreshes is the shell's job
    /// (see `can_refresh`).
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.load_state = LoadState::Loading;
        tracing::debug!(generation = self.generation, "refresh started");
        RefreshTicket {
            generation: self.generation,
        }
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Post>, FetchError>,
    ) -> RefreshApplied {
        if ticket.generation != self.generation {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.generation,
                "discarding stale refresh outcome"
            );
            return RefreshApplied::Stale;
        }

        match result {
            Ok(posts) => {
                let count = posts.len();
                self.posts = posts;
                self.expanded.clear();
                self.load_state = LoadState::Loaded;
                self.last_error = None;
                self.last_loaded_at = Some(Local::now());
                tracing::info!(count, "posts loaded");
                RefreshApplied::Loaded { count }
            }
            Err(err) => {
                tracing::error!(error = %err, "refresh failed; keeping previous list");
                self.load_state = LoadState::LoadFailed;
                self.last_error = Some(err.to_string());
                RefreshApplied::Failed
            }
        }
    }

    /// Refresh inline: begin, await the source, apply.
    pub async fn refresh(&mut self, source: &dyn PostSource) -> RefreshApplied {
        let ticket = self.begin_refresh();
        let result = source.fetch_posts().await;
        self.complete_refresh(ticket, result)
    }

    pub fn toggle(&mut self, id: PostId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn expand_all(&mut self) {
        self.expanded = post_ids(&self.posts);
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_expanded(&self, id: PostId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn last_loaded_at(&self) -> Option<DateTime<Local>> {
        self.last_loaded_at
    }

    pub fn can_refresh(&self) -> bool {
        !self.is_loading()
    }

    pub fn can_collapse_all(&self) -> bool {
        !self.expanded.is_empty()
    }

    pub fn can_expand_all(&self) -> bool {
        self.expanded.len() != self.posts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postdeck_testing::fixtures::{numbered_posts, two_posts};

    fn fetch_error(msg: &str) -> FetchError {
        FetchError::new("test://posts", msg)
    }

    fn loaded(posts: Vec<Post>) -> PostListController {
        let mut controller = PostListController::new();
        let ticket = controller.begin_refresh();
        controller.complete_refresh(ticket, Ok(posts));
        controller
    }

    #[test]
    fn test_initial_state() {
        let controller = PostListController::new();

        assert_eq!(controller.load_state(), LoadState::Idle);
        assert!(controller.posts().is_empty());
        assert_eq!(controller.expanded_count(), 0);
        assert!(controller.can_refresh());
        assert!(!controller.can_collapse_all());
        // 0 expanded == 0 posts
        assert!(!controller.can_expand_all());
    }

    #[test]
    fn test_loading_flag_spans_request() {
        let mut controller = PostListController::new();

        let ticket = controller.begin_refresh();
        assert!(controller.is_loading());
        assert!(!controller.can_refresh());

        controller.complete_refresh(ticket, Ok(two_posts()));
        assert!(!controller.is_loading());
        assert_eq!(controller.load_state(), LoadState::Loaded);
    }

    #[test]
    fn test_loading_ends_on_failure() {
        let mut controller = PostListController::new();

        let ticket = controller.begin_refresh();
        let applied = controller.complete_refresh(ticket, Err(fetch_error("HTTP 500")));

        assert_eq!(applied, RefreshApplied::Failed);
        assert!(!controller.is_loading());
        assert_eq!(controller.load_state(), LoadState::LoadFailed);
        assert!(controller.last_error().unwrap().contains("HTTP 500"));
    }

    #[test]
    fn test_successful_refresh_clears_expansion() {
        let mut controller = loaded(numbered_posts(5));
        controller.toggle(2);
        controller.toggle(4);
        assert_eq!(controller.expanded_count(), 2);

        let ticket = controller.begin_refresh();
        let applied = controller.complete_refresh(ticket, Ok(numbered_posts(3)));

        assert_eq!(applied, RefreshApplied::Loaded { count: 3 });
        assert_eq!(controller.expanded_count(), 0);
        assert_eq!(controller.posts().len(), 3);
        assert!(controller.last_loaded_at().is_some());
    }

    #[test]
    fn test_failed_refresh_keeps_list_and_expansion() {
        let mut controller = loaded(two_posts());
        controller.toggle(1);

        let ticket = controller.begin_refresh();
        controller.complete_refresh(ticket, Err(fetch_error("offline")));

        assert_eq!(controller.posts(), two_posts().as_slice());
        assert!(controller.is_expanded(1));
        assert!(!controller.is_expanded(2));
        assert_eq!(controller.expanded_count(), 1);
    }

    #[test]
    fn test_failed_first_load_leaves_empty_list() {
        let mut controller = PostListController::new();

        let ticket = controller.begin_refresh();
        controller.complete_refresh(ticket, Err(fetch_error("offline")));

        assert!(controller.posts().is_empty());
        assert!(controller.last_loaded_at().is_none());
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut controller = PostListController::new();
        let ticket = controller.begin_refresh();
        controller.complete_refresh(ticket, Err(fetch_error("offline")));
        assert!(controller.last_error().is_some());

        let ticket = controller.begin_refresh();
        controller.complete_refresh(ticket, Ok(two_posts()));
        assert!(controller.last_error().is_none());
    }

    #[test]
    fn test_toggle_parity() {
        let mut controller = loaded(numbered_posts(3));

        for n in 1..=7 {
            controller.toggle(2);
            assert_eq!(controller.is_expanded(2), n % 2 == 1, "after {} toggles", n);
        }
        assert!(!controller.is_expanded(1));
        assert!(!controller.is_expanded(3));
    }

    #[test]
    fn test_toggle_parity_restarts_after_bulk_operations() {
        let mut controller = loaded(numbered_posts(3));

        controller.toggle(1);
        controller.expand_all();
        controller.toggle(1);
        assert!(!controller.is_expanded(1));

        controller.toggle(3);
        controller.collapse_all();
        controller.toggle(3);
        assert!(controller.is_expanded(3));
    }

    #[test]
    fn test_toggle_unknown_id_is_legal() {
        let mut controller = loaded(two_posts());

        controller.toggle(99);
        assert!(controller.is_expanded(99));
        assert_eq!(controller.expanded_count(), 1);

        controller.toggle(99);
        assert!(!controller.is_expanded(99));
    }

    #[test]
    fn test_expand_all_disables_expand_all() {
        let mut controller = loaded(numbered_posts(4));

        assert!(controller.can_expand_all());
        controller.expand_all();

        assert_eq!(controller.expanded_count(), 4);
        assert!(!controller.can_expand_all());
        assert!(controller.can_collapse_all());
        assert!(controller.posts().iter().all(|p| controller.is_expanded(p.id)));
    }

    #[test]
    fn test_collapse_all_disables_collapse_all() {
        let mut controller = loaded(numbered_posts(4));
        controller.toggle(1);
        assert!(controller.can_collapse_all());

        controller.collapse_all();

        assert_eq!(controller.expanded_count(), 0);
        assert!(!controller.can_collapse_all());
    }

    #[test]
    fn test_expand_all_replaces_unknown_ids() {
        let mut controller = loaded(two_posts());
        controller.toggle(99);

        controller.expand_all();

        assert!(!controller.is_expanded(99));
        assert_eq!(controller.expanded_count(), 2);
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut controller = PostListController::new();

        let first = controller.begin_refresh();
        let second = controller.begin_refresh();

        // Older request resolves first: ignored, still loading
        let applied = controller.complete_refresh(first, Ok(numbered_posts(9)));
        assert_eq!(applied, RefreshApplied::Stale);
        assert!(controller.is_loading());
        assert!(controller.posts().is_empty());

        let applied = controller.complete_refresh(second, Ok(two_posts()));
        assert_eq!(applied, RefreshApplied::Loaded { count: 2 });
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_late_stale_outcome_does_not_overwrite() {
        let mut controller = PostListController::new();

        let first = controller.begin_refresh();
        let second = controller.begin_refresh();

        controller.complete_refresh(second, Ok(two_posts()));
        controller.toggle(2);

        let applied = controller.complete_refresh(first, Err(fetch_error("late")));
        assert_eq!(applied, RefreshApplied::Stale);
        assert_eq!(controller.posts().len(), 2);
        assert!(controller.is_expanded(2));
        assert!(controller.last_error().is_none());
        assert_eq!(controller.load_state(), LoadState::Loaded);
    }

    #[test]
    fn test_ticket_generations_increase() {
        let mut controller = PostListController::new();

        let a = controller.begin_refresh();
        let b = controller.begin_refresh();
        assert!(b.generation() > a.generation());
    }
}
