//! Main TUI runner - entry point and event loop

use suitehub_app::config::Settings;
use suitehub_app::Engine;
use suitehub_core::prelude::*;
use suitehub_remote::RemoteApi;

use crate::{event, render, terminal};

/// Run the dashboard in the terminal until the user quits
pub async fn run<R>(remote: R, settings: Settings) -> Result<()>
where
    R: RemoteApi + Send + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut engine = Engine::new(remote, settings);
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    engine.boot();
    let result = run_loop(&mut term, &mut engine);

    engine.shutdown().await;
    ratatui::restore();

    if let Err(e) = &result {
        error!("TUI loop failed: {}", e);
    }
    result
}

fn run_loop<R>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<R>) -> Result<()>
where
    R: RemoteApi + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Procedure results and other queued messages
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Leaving dashboard");
    Ok(())
}
