//! Storage worker: a dedicated thread owning a tokio runtime and the sqlite
//! store. The UI queues [`BackendCommand`]s and consumes [`UiEvent`]s; a
//! storage failure becomes a user-visible event, never a crash of the
//! worker loop.

use std::thread;

use client_core::ProfileStore;
use crossbeam_channel::{Receiver, Sender};
use storage::Storage;
use tracing::{error, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(database_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!(%err, "failed to build backend runtime");
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("Failed to start local storage worker: {err}"),
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let storage = match Storage::new(&database_url).await {
                Ok(storage) => storage,
                Err(err) => {
                    error!(%err, "failed to open local storage");
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("Could not open local storage: {err:#}"),
                    )));
                    return;
                }
            };
            info!(%database_url, "local storage ready");

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadProfile => match storage.load_profile().await {
                        Ok(record) => {
                            let _ = ui_tx.try_send(UiEvent::ProfileLoaded(record));
                        }
                        Err(err) => {
                            error!(%err, "profile load failed");
                            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                UiErrorContext::LoadProfile,
                                format!("Could not load profile data: {err:#}"),
                            )));
                        }
                    },
                    BackendCommand::SaveProfile(record) => {
                        match storage.save_profile(&record).await {
                            Ok(()) => {
                                let _ = ui_tx.try_send(UiEvent::ProfileSaved(record));
                            }
                            Err(err) => {
                                error!(%err, "profile save failed");
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::SaveProfile,
                                    format!("Could not save profile data: {err:#}"),
                                )));
                            }
                        }
                    }
                }
            }
            info!("backend command queue closed; storage worker exiting");
        });
    });
}
