//! Post List View Component
//!
//! Renders the scrollable list body: either the loading indicator or the
//! rows, keeping the selected row in view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::presentation::view_models::ListBodyViewModel;

use super::PostRowView;

/// Selection and scroll position, owned by the renderer
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PostListState {
    pub selected: usize,
    /// First visible line of the laid-out list
    pub scroll: usize,
}

impl PostListState {
    pub fn select_next(&mut self, row_count: usize) {
        if row_count > 0 {
            self.selected = (self.selected + 1).min(row_count - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, row_count: usize) {
        self.selected = row_count.saturating_sub(1);
    }

    /// Keep `selected` inside the list after it shrank
    pub fn clamp(&mut self, row_count: usize) {
        if self.selected >= row_count {
            self.selected = row_count.saturating_sub(1);
        }
    }
}

pub struct PostListView<'a> {
    model: &'a ListBodyViewModel,
}

impl<'a> PostListView<'a> {
    pub fn new(model: &'a ListBodyViewModel) -> Self {
        Self { model }
    }
}

impl<'a> StatefulWidget for PostListView<'a> {
    type State = PostListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .title(" Posts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);

        let rows = match self.model {
            ListBodyViewModel::Loading { message } => {
                Paragraph::new(Line::from(vec![
                    Span::styled("⟳ ", Style::default().fg(Color::Cyan)),
                    Span::styled(
                        message.as_str(),
                        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                    ),
                ]))
                .block(block)
                .render(area, buf);
                return;
            }
            ListBodyViewModel::Rows(rows) => rows,
        };

        if rows.is_empty() {
            Paragraph::new(Span::styled(
                "No posts",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        state.clamp(rows.len());

        let mut lines: Vec<Line> = Vec::new();
        let mut selected_span = (0usize, 0usize);
        for (index, row) in rows.iter().enumerate() {
            let row_lines = PostRowView::new(row, index == state.selected).lines(inner.width);
            if index == state.selected {
                selected_span = (lines.len(), row_lines.len());
            }
            lines.extend(row_lines);
        }

        let viewport = inner.height as usize;
        state.scroll = scroll_to_show(state.scroll, selected_span, viewport);

        // Hand only the visible window to the paragraph; its own scroll
        // offset is a u16 and cannot address long lists.
        let start = state.scroll.min(lines.len());
        let end = start.saturating_add(viewport).min(lines.len());
        let visible: Vec<Line> = lines.drain(start..end).collect();

        Paragraph::new(visible).block(block).render(area, buf);
    }
}

/// Smallest change to `scroll` that brings `(top, height)` into a viewport
/// of `viewport` lines. Rows taller than the viewport are pinned at the top.
fn scroll_to_show(scroll: usize, (top, height): (usize, usize), viewport: usize) -> usize {
    let bottom = top.saturating_add(height);
    if top < scroll || height >= viewport {
        top
    } else if bottom > scroll.saturating_add(viewport) {
        bottom - viewport
    } else {
        scroll
    }
}
