//! Word Cloud Visualizer
//!
//! A desktop window showing a single word cloud string. The window runs on
//! the main thread; any other thread updates it through a [`DisplayHandle`]
//! obtained from a [`VisualizerInstance`].
//!
//! ```no_run
//! use word_cloud_visualizer::{instance, launch, settings::Settings, utils};
//!
//! let (publisher, visualizer) = instance::slot();
//! std::thread::spawn(move || {
//!     if let Some(display) = visualizer.wait_blocking() {
//!         display.update_word_cloud("rust cargo crates");
//!     }
//! });
//! let data_dir = utils::data_dir();
//! launch(Settings::load(&data_dir), data_dir, publisher).ok();
//! ```

pub mod app;
pub mod constants;
pub mod display;
pub mod instance;
pub mod settings;
pub mod theme;
pub mod utils;

pub use display::{DisplayHandle, TextDisplay};
pub use instance::{InstancePublisher, VisualizerInstance};

use app::App;
use constants::*;
use eframe::egui;
use settings::Settings;
use std::path::PathBuf;
use tracing::{info, warn};

/// Open the visualizer window and run its event loop on the calling thread
/// until the window is closed. The display handle is published through
/// `publisher` once the window has started.
pub fn launch(
    settings: Settings,
    data_dir: PathBuf,
    publisher: InstancePublisher,
) -> eframe::Result<()> {
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
        .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
        .with_title(WINDOW_TITLE);

    // Set window/taskbar icon from the embedded SVG
    match utils::rasterize_icon(ICON_SIZE) {
        Some((rgba, width, height)) => {
            let icon = egui::IconData { rgba, width, height };
            viewport = viewport.with_icon(std::sync::Arc::new(icon));
        }
        None => warn!("Failed to rasterize window icon"),
    }

    if let Some((x, y)) = settings.window_position() {
        viewport = viewport.with_position(egui::pos2(x, y));
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    info!(width = WINDOW_WIDTH, height = WINDOW_HEIGHT, "Launching window");

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, settings, data_dir, publisher)))),
    )
}
