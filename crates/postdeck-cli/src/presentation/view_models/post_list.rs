use postdeck_types::PostId;
use serde::Serialize;

/// One row of the post list.
///
/// `details` is present only when the row is expanded.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PostRowViewModel {
    pub id: PostId,
    pub title: String,
    pub user_line: String,
    pub toggle_label: String,
    pub details: Option<PostDetailsViewModel>,
}

impl PostRowViewModel {
    pub fn is_expanded(&self) -> bool {
        self.details.is_some()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PostDetailsViewModel {
    pub full_title: String,
    pub body: String,
}

/// The whole list as printed by `postdeck list`
#[derive(Debug, Clone, Serialize)]
pub struct PostListViewModel {
    pub rows: Vec<PostRowViewModel>,
    pub total_count: usize,
    pub badge: super::StatusBadge,
}
