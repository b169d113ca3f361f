//! Command orchestration helpers from UI actions to the backend queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues a command toward the storage worker. Returns a user-facing
/// message when the queue cannot accept it.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), String> {
    let cmd_name = match &cmd {
        BackendCommand::LoadProfile => "load_profile",
        BackendCommand::SaveProfile(_) => "save_profile",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err("Storage is busy; please retry".to_string()),
        Err(TrySendError::Disconnected(_)) => {
            Err("Local storage worker is unavailable; restart the app".to_string())
        }
    }
}
