use postdeck_runtime::PostListController;
use postdeck_types::Post;

use crate::presentation::view_models::{
    PostDetailsViewModel, PostListViewModel, PostRowViewModel, StatusBadge,
};

/// Row renderer: a pure function of the post and its expansion flag.
pub fn present_post_row(post: &Post, is_expanded: bool) -> PostRowViewModel {
    let (toggle_label, details) = if is_expanded {
        (
            "Hide ▲".to_string(),
            Some(PostDetailsViewModel {
                full_title: post.title.clone(),
                body: post.body.clone(),
            }),
        )
    } else {
        ("View ▼".to_string(), None)
    };

    PostRowViewModel {
        id: post.id,
        title: post.title.clone(),
        user_line: format!("User ID: {}", post.user_id),
        toggle_label,
        details,
    }
}

/// "Loaded N posts", singular for one
pub fn loaded_label(count: usize) -> String {
    if count == 1 {
        "Loaded 1 post".to_string()
    } else {
        format!("Loaded {} posts", count)
    }
}

pub fn present_post_list(controller: &PostListController) -> PostListViewModel {
    let rows: Vec<PostRowViewModel> = controller
        .posts()
        .iter()
        .map(|post| present_post_row(post, controller.is_expanded(post.id)))
        .collect();
    let total_count = rows.len();

    let badge = match controller.last_error() {
        Some(err) => StatusBadge::error(err),
        None => StatusBadge::success(loaded_label(total_count)),
    };

    PostListViewModel {
        rows,
        total_count,
        badge,
    }
}
