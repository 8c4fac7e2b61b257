//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use suitehub_core::prelude::*;
use suitehub_remote::RemoteApi;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::procedures::{self, Procedure};
use crate::tracker::TicketSet;

/// Handles of procedures still running in the background
pub type ProcedureTasks = Arc<Mutex<Vec<JoinHandle<()>>>>;

/// Execute an action by spawning a background task
pub fn handle_action<R>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    remote: Arc<R>,
    tasks: &ProcedureTasks,
) where
    R: RemoteApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::RunProcedure { procedure, tickets } => {
            let handle = tokio::spawn(async move {
                run_procedure(procedure, tickets, msg_tx, remote).await;
            });

            let mut tasks = tasks.lock().unwrap_or_else(|p| p.into_inner());
            tasks.retain(|t| !t.is_finished());
            tasks.push(handle);
        }
    }
}

async fn run_procedure<R>(
    procedure: Procedure,
    tickets: TicketSet,
    msg_tx: mpsc::Sender<Message>,
    remote: Arc<R>,
) where
    R: RemoteApi + Send + Sync + 'static,
{
    let kind = procedure.kind();
    debug!("Running {:?}", kind);

    let outcome = procedures::run(&*remote, &procedure)
        .await
        .map_err(|e| e.to_string());

    // Failures are reported once, when the result is committed
    if let Ok(refresh) = &outcome {
        if refresh.is_empty() {
            debug!("{:?} finished with nothing to commit", kind);
        } else {
            debug!("{:?} finished", kind);
        }
    }

    let msg = Message::ProcedureFinished {
        procedure,
        tickets,
        outcome,
    };
    if msg_tx.send(msg).await.is_err() {
        warn!("Event loop gone, dropping {:?} result", kind);
    }
}
