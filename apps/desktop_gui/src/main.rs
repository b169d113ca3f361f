//! ProximityMatch desktop client.
//!
//! The UI runs on the eframe thread; storage lives on a worker thread with
//! its own tokio runtime, bridged by bounded channels in both directions.

mod backend_bridge;
mod controller;
mod media;
mod platform;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use tracing::info;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{AppPaths, DesktopGuiApp};

#[derive(Parser, Debug)]
#[command(name = "proximity-match", about = "ProximityMatch desktop client")]
struct Args {
    /// Override the local data directory (defaults to the platform app-data
    /// location).
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let paths = AppPaths::resolve(args.data_dir)?;
    info!(db = %paths.db_path.display(), "starting ProximityMatch");

    let (cmd_tx, cmd_rx) = crossbeam_channel::bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = crossbeam_channel::bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(paths.database_url(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ProximityMatch")
            .with_inner_size([480.0, 860.0])
            .with_min_inner_size([420.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "ProximityMatch",
        options,
        Box::new(move |_cc| Ok(Box::new(DesktopGuiApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("gui loop failed: {err}"))
}
