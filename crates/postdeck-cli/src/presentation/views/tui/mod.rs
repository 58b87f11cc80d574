//! TUI View Components
//!
//! Ratatui widgets for the browse screen. Each component is a thin
//! wrapper around a ViewModel.
//!
//! ## Design Principles:
//! - Views take a reference to ViewModel (no ownership)
//! - NO logic, calculations, or formatting (except UI-specific layout)
//! - Color mapping from StatusLevel to Ratatui colors happens here

pub mod header;
pub mod post_list;
pub mod post_row;
pub mod status_bar;

pub use header::HeaderView;
pub use post_list::{PostListState, PostListView};
pub use post_row::PostRowView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Greedy word wrap by character count.
///
/// Embedded newlines start new lines; words longer than `width` are split.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for raw in text.lines() {
        let mut line = String::new();
        for word in raw.split_whitespace() {
            let current = line.chars().count();
            let needed = if current == 0 {
                word.chars().count()
            } else {
                current + 1 + word.chars().count()
            };
            if needed > width && current > 0 {
                out.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);

            while line.chars().count() > width {
                let head: String = line.chars().take(width).collect();
                let tail: String = line.chars().skip(width).collect();
                out.push(head);
                line = tail;
            }
        }
        out.push(line);
    }

    if out.is_empty() {
        out.push(String::new());
    }
    out
}
