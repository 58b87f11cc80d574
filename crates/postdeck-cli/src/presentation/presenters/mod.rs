pub mod post_list;
pub mod screen;

pub use post_list::{present_post_list, present_post_row};
pub use screen::{APP_TITLE, FOOTER_TEXT, present_screen};
