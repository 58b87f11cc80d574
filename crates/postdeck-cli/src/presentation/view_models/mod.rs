pub mod common;
pub mod post_list;
pub mod screen;

pub use common::{StatusBadge, StatusLevel};
pub use post_list::{PostDetailsViewModel, PostListViewModel, PostRowViewModel};
pub use screen::{
    ActionViewModel, HeaderViewModel, ListBodyViewModel, ScreenAction, ScreenViewModel,
    StatusBarViewModel,
};
