//! Message processing through the TEA update loop

use std::sync::Arc;

use tokio::sync::mpsc;

use suitehub_remote::RemoteApi;

use crate::actions::{handle_action, ProcedureTasks};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message and every follow-up it produces
pub fn process_message<R>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    remote: &Arc<R>,
    tasks: &ProcedureTasks,
) where
    R: RemoteApi + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(remote), tasks);
        }

        msg = result.message;
    }
}
