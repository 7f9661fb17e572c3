#![windows_subsystem = "windows"]
//! Word Cloud Visualizer - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use tracing::info;
use word_cloud_visualizer::constants::{APP_VERSION, LOG_FILE_NAME};
use word_cloud_visualizer::settings::Settings;
use word_cloud_visualizer::{instance, launch, utils};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,word_cloud_visualizer=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Word Cloud Visualizer starting");

    let settings = Settings::load(&data_dir);

    // Producers embedding the visualizer keep the instance side; the
    // standalone binary only shows the window.
    let (publisher, _instance) = instance::slot();

    let result = launch(settings, data_dir, publisher);
    info!("Word Cloud Visualizer exited");
    result
}
