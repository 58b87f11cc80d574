use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use postdeck_providers::PostSource;
use postdeck_runtime::ListSession;
use tokio::runtime::Runtime;

use crate::presentation::presenters::present_post_list;
use crate::presentation::renderers::ConsoleRenderer;
use crate::types::OutputFormat;

/// Fetch once, wait for the result and print it.
pub fn handle(
    runtime: &Runtime,
    source: Arc<dyn PostSource>,
    expand: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut session = runtime.block_on(async {
        let mut session = ListSession::mount(tokio::runtime::Handle::current(), source);
        session.settle().await;
        session
    });

    let controller = session.controller_mut();
    if let Some(err) = controller.last_error() {
        bail!("{}", err);
    }
    if expand {
        controller.expand_all();
    }

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut out = stdout.lock();
    ConsoleRenderer::new(format, color).render_post_list(
        &mut out,
        &present_post_list(controller),
        controller.posts(),
    )?;
    out.flush()?;
    Ok(())
}
