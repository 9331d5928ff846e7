//! Tutor-Win: a small Win32 teaching application
//!
//! Two features behind two buttons: an area calculator for triangles and
//! squares, and a query listing every `rdfs:subClassOf` relation of a fixed
//! ontology file.

#![cfg_attr(not(windows), allow(dead_code, unused_imports))]

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod domain;
#[cfg(windows)]
mod platform;
mod ui;

use app::AppController;
use config::AppConfig;

fn main() -> ExitCode {
    init_tracing();

    let config = AppConfig::default();
    if let Err(err) = config.validate() {
        error!("Invalid configuration: {}", err);
        return ExitCode::FAILURE;
    }

    run(AppController::new(config))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(windows)]
fn run(controller: AppController) -> ExitCode {
    // Set DPI awareness before any window is created so controls get real
    // pixel coordinates instead of bitmap scaling
    if !platform::windows::enable_dpi_awareness() {
        tracing::warn!("Per-monitor DPI awareness unavailable; windows may be scaled");
    }

    match ui::MainWindow::run(controller) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Application failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(windows))]
fn run(_controller: AppController) -> ExitCode {
    error!("tutor-win uses Win32 windows and only runs on Windows");
    ExitCode::FAILURE
}
