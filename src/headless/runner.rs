//! Headless mode runner - main event loop without TUI
//!
//! Reads commands from stdin and emits every engine event as NDJSON on stdout.
//! The runner exits on `quit`, or once stdin is closed and no procedure is
//! in flight.

use tokio::sync::{broadcast, mpsc};

use suitehub_app::config::Settings;
use suitehub_app::{Engine, EngineEvent, Message};
use suitehub_core::prelude::*;
use suitehub_remote::RemoteApi;

use super::{command, HeadlessEvent};

/// A parsed stdin line, or the reason it could not be parsed
type Command = std::result::Result<Vec<Message>, String>;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless<R>(remote: R, base_url: &str, settings: Settings) -> Result<()>
where
    R: RemoteApi + Send + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("Suite Hub starting in HEADLESS mode");
    info!("Server: {}", base_url);
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(remote, settings);
    let mut events = engine.subscribe();

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(32);
    std::thread::spawn(move || spawn_stdin_reader_blocking(cmd_tx));

    HeadlessEvent::ready(base_url).emit();

    engine.boot();
    forward_events(&mut events, &engine);

    headless_event_loop(&mut engine, &mut events, cmd_rx).await;

    engine.shutdown().await;
    forward_events(&mut events, &engine);

    info!("Suite Hub headless mode exiting");
    Ok(())
}

async fn headless_event_loop<R>(
    engine: &mut Engine<R>,
    events: &mut broadcast::Receiver<EngineEvent>,
    mut cmd_rx: mpsc::Receiver<Command>,
) where
    R: RemoteApi + Send + Sync + 'static,
{
    let mut stdin_closed = false;

    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }
        if stdin_closed && !engine.state.is_busy() {
            info!("Stdin closed and no procedure in flight");
            break;
        }

        tokio::select! {
            msg = engine.msg_rx.recv() => match msg {
                Some(msg) => {
                    engine.process_message(msg);
                    forward_events(events, engine);
                }
                None => {
                    info!("Message channel closed");
                    break;
                }
            },
            cmd = cmd_rx.recv(), if !stdin_closed => match cmd {
                Some(Ok(messages)) => {
                    for msg in messages {
                        engine.process_message(msg);
                        forward_events(events, engine);
                    }
                }
                Some(Err(message)) => {
                    warn!("Rejected stdin command: {}", message);
                    HeadlessEvent::error(message, false).emit();
                }
                None => {
                    debug!("Stdin reader finished");
                    stdin_closed = true;
                }
            },
        }
    }
}

/// Emit every engine event queued since the last call.
///
/// Called right after each message so rendered view models match the state
/// that produced them.
fn forward_events<R>(events: &mut broadcast::Receiver<EngineEvent>, engine: &Engine<R>)
where
    R: RemoteApi + Send + Sync + 'static,
{
    loop {
        match events.try_recv() {
            Ok(event) => HeadlessEvent::from_engine(&event, &engine.state.surfaces).emit(),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output lagged, {} event(s) dropped", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Read stdin line by line, forwarding parsed commands
fn spawn_stdin_reader_blocking(cmd_tx: mpsc::Sender<Command>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Error reading stdin: {}", e);
                break;
            }
        };

        let parsed = command::parse(&line);
        if matches!(&parsed, Ok(messages) if messages.is_empty()) {
            continue;
        }
        debug!("Stdin command: {}", line.trim());
        if cmd_tx.blocking_send(parsed).is_err() {
            break;
        }
    }
    // Dropping the sender tells the event loop stdin is closed
}
