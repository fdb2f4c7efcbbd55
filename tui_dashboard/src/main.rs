use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};

use clap::Parser;
use color_eyre::Result;
use monitor_core::{load_dataset, DashboardState, TimeRange};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app;
mod chart;
mod ui;

use app::DashboardApp;

/// Routes subscriber output into the in-dashboard log pane. The terminal
/// itself is in raw mode, so nothing may print to stdout directly.
#[derive(Clone)]
struct ChannelWriter {
    sender: Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(text) = String::from_utf8(buf.to_vec()) {
            let _ = self.sender.send(text);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Demokratiemonitor terminal dashboard", long_about = None)]
struct Cli {
    /// Path to a dataset JSON file overriding the builtin demo data.
    #[arg(long)]
    data: Option<PathBuf>,
    /// Id of the MP selected at startup; defaults to the first in the dataset.
    #[arg(long)]
    select: Option<String>,
    /// Initial time range: "all" or a month count such as 12.
    #[arg(long, default_value = "all")]
    range: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let (log_tx, log_rx) = mpsc::channel::<String>();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .with_writer(move || ChannelWriter {
            sender: log_tx.clone(),
        })
        .init();

    let cli = Cli::parse();
    let (data, source) = load_dataset(cli.data.as_deref());
    let range = TimeRange::parse_or_all(&cli.range);

    let initial_mp = match cli.select {
        Some(id) if data.mp(&id).is_some() => id,
        Some(id) => {
            warn!(mp = %id, "select.unknown_mp");
            data.mps[0].id.clone()
        }
        None => data.mps[0].id.clone(),
    };
    info!(mp = %initial_mp, %range, mps = data.mps.len(), "dashboard.starting");

    let state = DashboardState::new(initial_mp, range);
    let app = DashboardApp::new(data, source, state, log_rx)?;
    app.run()
}
