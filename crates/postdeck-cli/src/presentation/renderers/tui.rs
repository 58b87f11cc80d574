//! TUI Renderer for the browse command
//!
//! Owns the terminal and the UI-only state (selection, scroll). It draws
//! whatever `ScreenViewModel` the handler hands it and translates key
//! presses into `ScreenAction`s; it never touches the list itself.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::presentation::view_models::{PostRowViewModel, ScreenAction, ScreenViewModel};
use crate::presentation::views::tui::{
    HeaderView, PostListState, PostListView, StatusBarView, header::HEADER_HEIGHT,
    status_bar::STATUS_BAR_HEIGHT,
};

/// Rows moved by PageUp/PageDown
const PAGE_ROWS: usize = 5;

pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    list_state: PostListState,
}

impl TuiRenderer {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Restore the terminal if a SIGINT slips past raw mode
        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        Ok(Self {
            terminal,
            list_state: PostListState::default(),
        })
    }

    pub fn draw(&mut self, screen: &ScreenViewModel) -> Result<()> {
        let state = &mut self.list_state;
        self.terminal.draw(|f| render(f, screen, state))?;
        Ok(())
    }

    /// Wait up to `timeout` for a key press and map it to an action.
    ///
    /// Navigation keys are consumed here and yield `None`.
    pub fn poll_action(
        &mut self,
        screen: &ScreenViewModel,
        timeout: Duration,
    ) -> Result<Option<ScreenAction>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(handle_key(key, &mut self.list_state, screen.rows())),
            _ => Ok(None),
        }
    }
}

impl Drop for TuiRenderer {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn render(f: &mut Frame, screen: &ScreenViewModel, state: &mut PostListState) {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(STATUS_BAR_HEIGHT),
        Constraint::Length(1),
    ])
    .split(f.area());

    f.render_widget(HeaderView::new(&screen.header), chunks[0]);
    f.render_stateful_widget(PostListView::new(&screen.body), chunks[1], state);
    f.render_widget(StatusBarView::new(&screen.status_bar), chunks[2]);
    f.render_widget(
        Paragraph::new(screen.footer.as_str())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[3],
    );
}

fn handle_key(
    key: KeyEvent,
    state: &mut PostListState,
    rows: &[PostRowViewModel],
) -> Option<ScreenAction> {
    // Only handle key press events, not release
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(ScreenAction::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(ScreenAction::Quit),
        KeyCode::Char('r') => Some(ScreenAction::Refresh),
        KeyCode::Char('c') => Some(ScreenAction::CollapseAll),
        KeyCode::Char('e') => Some(ScreenAction::ExpandAll),
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.clamp(rows.len());
            rows.get(state.selected)
                .map(|row| ScreenAction::Toggle(row.id))
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next(rows.len());
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_previous();
            None
        }
        KeyCode::PageDown => {
            for _ in 0..PAGE_ROWS {
                state.select_next(rows.len());
            }
            None
        }
        KeyCode::PageUp => {
            state.selected = state.selected.saturating_sub(PAGE_ROWS);
            None
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.select_first();
            None
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.select_last(rows.len());
            None
        }
        _ => None,
    }
}
