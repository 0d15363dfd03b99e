//! StayScope - Hotel Dataset Analysis & Interactive Dashboard
//!
//! Entry point: CLI parsing, logging initialisation, eframe launch.

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use stayscope::gui::StayScopeApp;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "stayscope",
    version,
    about = "Hotel dataset analysis dashboard"
)]
struct Cli {
    /// Hotel dataset (CSV or JSON) to load at startup
    data_file: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(long)]
    debug: bool,
}

/// Priority: RUST_LOG env var > --debug flag > "info".
fn init_logging(debug: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    // Fail fast on a bad CLI path; browsing in-app reports via the status line
    let dataset = cli
        .data_file
        .map(|p| {
            p.canonicalize()
                .with_context(|| format!("dataset not found: {}", p.display()))
        })
        .transpose()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 850.0])
            .with_min_inner_size([1100.0, 650.0])
            .with_title("StayScope"),
        ..Default::default()
    };

    eframe::run_native(
        "StayScope",
        options,
        Box::new(move |cc| Ok(Box::new(StayScopeApp::new(cc, dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to launch UI: {e}"))
}
