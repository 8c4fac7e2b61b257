//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel and the remote client.
//! Frontends feed it messages and either poll its state (TUI) or subscribe to
//! its events (headless).

use std::sync::{Arc, Mutex};

use tokio::sync::{broadcast, mpsc};

use suitehub_core::prelude::*;
use suitehub_remote::RemoteApi;

use crate::actions::ProcedureTasks;
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::procedures::ProcedureKind;
use crate::process;
use crate::state::{AppState, NoticeLevel};

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    in_flight: Vec<ProcedureKind>,
    render_seq: u64,
    completion_seq: u64,
    notice: Option<(NoticeLevel, String)>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            in_flight: state.ui.in_flight.clone(),
            render_seq: state.render_seq,
            completion_seq: state.completion_seq,
            notice: state
                .ui
                .notice
                .as_ref()
                .map(|n| (n.level, n.text.clone())),
        }
    }
}

/// Orchestration engine for the Suite Hub dashboard.
pub struct Engine<R> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    remote: Arc<R>,

    tasks: ProcedureTasks,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<R> Engine<R>
where
    R: RemoteApi + Send + Sync + 'static,
{
    /// Create an engine talking to `remote`.
    ///
    /// Nothing is fetched until [`Engine::boot`] is called.
    pub fn new(remote: R, settings: Settings) -> Self {
        Self::with_shared_remote(Arc::new(remote), settings)
    }

    pub fn with_shared_remote(remote: Arc<R>, settings: Settings) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            remote,
            tasks: Arc::new(Mutex::new(Vec::new())),
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind, older events are dropped.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    pub fn remote(&self) -> &Arc<R> {
        &self.remote
    }

    /// Start the boot sequence
    pub fn boot(&mut self) {
        info!("Booting dashboard");
        self.process_message(Message::Boot);
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.remote, &self.tasks);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for a message and process it.
    ///
    /// Returns `false` when the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Process messages until no procedure is in flight
    pub async fn settle(&mut self) {
        while self.state.is_busy() && !self.should_quit() {
            if !self.process_next().await {
                break;
            }
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Abort procedures still running and notify subscribers.
    pub async fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);

        let tasks: Vec<_> = {
            let mut tasks = self.tasks.lock().unwrap_or_else(|p| p.into_inner());
            tasks.drain(..).collect()
        };

        let mut aborted = 0;
        for handle in tasks {
            if !handle.is_finished() {
                handle.abort();
                aborted += 1;
            }
        }
        if aborted > 0 {
            info!("Aborted {} running procedure(s)", aborted);
        }
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if post.in_flight.len() > pre.in_flight.len() {
            for procedure in &post.in_flight[pre.in_flight.len()..] {
                self.emit(EngineEvent::ProcedureStarted {
                    procedure: *procedure,
                });
            }
        }

        if post.render_seq != pre.render_seq {
            self.emit(EngineEvent::Rendered {
                surfaces: self.state.last_rendered.clone(),
            });
        }

        if post.completion_seq != pre.completion_seq {
            if let Some(completion) = &self.state.last_completion {
                self.emit(EngineEvent::ProcedureCompleted {
                    procedure: completion.procedure,
                    error: completion.error.clone(),
                });
            }
        }

        if post.notice != pre.notice {
            if let Some((level, text)) = &post.notice {
                self.emit(EngineEvent::Notice {
                    level: *level,
                    text: text.clone(),
                });
            }
        }
    }

    fn emit(&self, event: EngineEvent) {
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}
