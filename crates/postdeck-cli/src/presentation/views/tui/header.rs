//! Header View Component
//!
//! Renders the title block with the list-level actions and the loaded count.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{ActionViewModel, HeaderViewModel};

/// Rows the header occupies, borders included
pub const HEADER_HEIGHT: u16 = 4;

pub struct HeaderView<'a> {
    model: &'a HeaderViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a HeaderViewModel) -> Self {
        Self { model }
    }

    fn action_spans(action: &ActionViewModel) -> [Span<'a>; 3] {
        let (key_style, label_style) = if action.enabled {
            (
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::White),
            )
        } else {
            let dim = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM);
            (dim, dim)
        };

        [
            Span::styled(format!("[{}] ", action.key), key_style),
            Span::styled(action.label.clone(), label_style),
            Span::raw("   "),
        ]
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.model.title),
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));

        let actions = Line::from(
            self.model
                .actions
                .iter()
                .flat_map(Self::action_spans)
                .collect::<Vec<_>>(),
        );
        let loaded = Line::from(Span::styled(
            self.model.loaded_line.clone(),
            Style::default().fg(Color::Gray),
        ));

        Paragraph::new(vec![actions, loaded])
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(refresh_enabled: bool) -> HeaderViewModel {
        HeaderViewModel {
            title: "Expandable Posts".to_string(),
            actions: vec![
                ActionViewModel {
                    key: 'r',
                    label: "⟳ Refresh".to_string(),
                    enabled: refresh_enabled,
                },
                ActionViewModel {
                    key: 'c',
                    label: "– Collapse All".to_string(),
                    enabled: false,
                },
            ],
            loaded_line: "Loaded 2 posts".to_string(),
        }
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_header_renders_title_actions_and_count() {
        let area = Rect::new(0, 0, 60, HEADER_HEIGHT);
        let mut buf = Buffer::empty(area);

        HeaderView::new(&model(true)).render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("Expandable Posts"));
        assert!(row_text(&buf, 1).contains("[r]"));
        assert!(row_text(&buf, 1).contains("Collapse All"));
        assert!(row_text(&buf, 2).contains("Loaded 2 posts"));
    }

    #[test]
    fn test_disabled_action_is_dimmed() {
        let area = Rect::new(0, 0, 60, HEADER_HEIGHT);
        let mut buf = Buffer::empty(area);

        HeaderView::new(&model(false)).render(area, &mut buf);

        // "[r]" starts right after the left border
        assert_eq!(buf[(1, 1)].symbol(), "[");
        assert_eq!(buf[(1, 1)].fg, Color::DarkGray);
    }
}
