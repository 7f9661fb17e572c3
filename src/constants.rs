//! Application constants and configuration

pub const APP_NAME: &str = "Word Cloud Visualizer";
pub const WINDOW_TITLE: &str = APP_NAME;
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initial inner size of the window in logical points.
pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;
pub const WINDOW_MIN_WIDTH: f32 = 320.0;
pub const WINDOW_MIN_HEIGHT: f32 = 240.0;

pub const LOG_FILE_NAME: &str = "word-cloud-visualizer.log";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const ICON_SIZE: u32 = 64;

/// Point size of the word cloud text.
pub const TEXT_SIZE: f32 = 24.0;
