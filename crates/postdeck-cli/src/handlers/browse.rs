//! Browse Handler
//!
//! Owns the list session for the lifetime of the screen. Each iteration
//! applies finished fetches, redraws from a fresh ViewModel and feeds the
//! next key press back into the controller.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use postdeck_providers::PostSource;
use postdeck_runtime::ListSession;
use tokio::runtime::Runtime;

use crate::presentation::presenters::present_screen;
use crate::presentation::renderers::TuiRenderer;
use crate::presentation::view_models::ScreenAction;

/// Upper bound on how long a finished fetch waits to be drawn
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

pub fn handle(runtime: &Runtime, source: Arc<dyn PostSource>) -> Result<()> {
    let mut session = ListSession::mount(runtime.handle().clone(), source);
    let source_label = session.source_label();
    let mut renderer = TuiRenderer::new()?;

    loop {
        session.pump();

        let screen = present_screen(session.controller(), &source_label);
        renderer.draw(&screen)?;

        let Some(action) = renderer.poll_action(&screen, FRAME_INTERVAL)? else {
            continue;
        };

        if action == ScreenAction::Quit {
            break;
        }
        apply_action(&mut session, action);
    }

    tracing::info!("browse screen closed");
    Ok(())
}

/// Route a screen action to the session, honoring the disabled affordances.
fn apply_action(session: &mut ListSession, action: ScreenAction) {
    match action {
        ScreenAction::Refresh => {
            if session.controller().can_refresh() {
                session.request_refresh();
            }
        }
        ScreenAction::ExpandAll => {
            let controller = session.controller_mut();
            if controller.can_expand_all() {
                controller.expand_all();
            }
        }
        ScreenAction::CollapseAll => {
            let controller = session.controller_mut();
            if controller.can_collapse_all() {
                controller.collapse_all();
            }
        }
        ScreenAction::Toggle(id) => session.controller_mut().toggle(id),
        ScreenAction::Quit => {}
    }
}
