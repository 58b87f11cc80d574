//! Post Row View Component
//!
//! Renders one post: summary always, full title and body when expanded.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::presentation::view_models::PostRowViewModel;

use super::{truncate_text, wrap_text};

const ID_WIDTH: usize = 6;
const INDENT: &str = "        ";

pub struct PostRowView<'a> {
    model: &'a PostRowViewModel,
    selected: bool,
}

impl<'a> PostRowView<'a> {
    pub fn new(model: &'a PostRowViewModel, selected: bool) -> Self {
        Self { model, selected }
    }

    /// Lay the row out for `width` columns.
    ///
    /// The row's height is the number of returned lines, including the
    /// trailing blank separator.
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = width as usize;
        let marker = if self.selected { "▸ " } else { "  " };
        let id = format!("#{:<width$}", self.model.id, width = ID_WIDTH - 1);
        let toggle = format!(" {}", self.model.toggle_label);

        let fixed = marker.chars().count() + ID_WIDTH + toggle.chars().count();
        let title_room = width.saturating_sub(fixed).max(4);
        let title = truncate_text(&self.model.title, title_room);
        let pad = title_room.saturating_sub(title.chars().count());

        let base = if self.selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(marker.to_string(), base.fg(Color::Yellow)),
                Span::styled(id, base.fg(Color::LightGreen).add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("{}{}", title, " ".repeat(pad)),
                    base.fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(toggle, base.fg(Color::LightGreen)),
            ]),
            Line::from(Span::styled(
                format!("{}{}", INDENT, self.model.user_line),
                Style::default().fg(Color::Gray),
            )),
        ];

        if let Some(details) = &self.model.details {
            let text_width = width.saturating_sub(INDENT.len() + 2);
            let label = Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD);
            let content = Style::default().fg(Color::Gray);

            lines.push(Line::from(Span::styled(
                format!("{}Full Title", INDENT),
                label,
            )));
            for chunk in wrap_text(&details.full_title, text_width) {
                lines.push(Line::from(Span::styled(
                    format!("{}  {}", INDENT, chunk),
                    content,
                )));
            }

            lines.push(Line::from(Span::styled(format!("{}Body", INDENT), label)));
            for chunk in wrap_text(&details.body, text_width) {
                lines.push(Line::from(Span::styled(
                    format!("{}  {}", INDENT, chunk),
                    content,
                )));
            }
        }

        lines.push(Line::default());
        lines
    }
}
