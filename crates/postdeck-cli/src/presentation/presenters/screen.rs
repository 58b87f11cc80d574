use postdeck_runtime::PostListController;

use super::post_list::{loaded_label, present_post_row};
use crate::presentation::view_models::{
    ActionViewModel, HeaderViewModel, ListBodyViewModel, ScreenViewModel, StatusBarViewModel,
    StatusLevel,
};

pub const APP_TITLE: &str = "Expandable Posts";
pub const FOOTER_TEXT: &str = "Created with ❤️, Code & Curiosity";

/// Build the interactive screen from controller state.
///
/// While a refresh is in flight the rows are replaced by a loading
/// indicator; the header and status bar stay visible.
pub fn present_screen(controller: &PostListController, source_label: &str) -> ScreenViewModel {
    let loading = controller.is_loading();
    let post_count = controller.posts().len();

    let actions = vec![
        ActionViewModel {
            key: 'r',
            label: if loading {
                "Refreshing...".to_string()
            } else {
                "⟳ Refresh".to_string()
            },
            enabled: controller.can_refresh(),
        },
        ActionViewModel {
            key: 'c',
            label: "– Collapse All".to_string(),
            enabled: controller.can_collapse_all(),
        },
        ActionViewModel {
            key: 'e',
            label: "+ Expand All".to_string(),
            enabled: controller.can_expand_all(),
        },
    ];

    let body = if loading {
        ListBodyViewModel::Loading {
            message: format!("Fetching posts from {}...", source_label),
        }
    } else {
        ListBodyViewModel::Rows(
            controller
                .posts()
                .iter()
                .map(|post| present_post_row(post, controller.is_expanded(post.id)))
                .collect(),
        )
    };

    let (message, level) = if loading {
        ("Loading...".to_string(), StatusLevel::Info)
    } else if let Some(err) = controller.last_error() {
        (err.to_string(), StatusLevel::Error)
    } else if let Some(at) = controller.last_loaded_at() {
        (
            format!("Updated {} from {}", at.format("%H:%M:%S"), source_label),
            StatusLevel::Success,
        )
    } else {
        ("Ready".to_string(), StatusLevel::Info)
    };

    ScreenViewModel {
        header: HeaderViewModel {
            title: APP_TITLE.to_string(),
            actions,
            loaded_line: loaded_label(post_count),
        },
        body,
        status_bar: StatusBarViewModel {
            message,
            level,
            post_count,
            expanded_count: controller.expanded_count(),
        },
        footer: FOOTER_TEXT.to_string(),
    }
}
