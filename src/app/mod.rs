//! App module - contains the window state and the eframe update loop

mod views;

use crate::display::{self, DisplayQueue, WordCloudText};
use crate::instance::InstancePublisher;
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, info};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) text: WordCloudText,
    pub(crate) queue: DisplayQueue,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) needs_center: bool,
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
        publisher: InstancePublisher,
    ) -> Self {
        Self::with_context(cc.egui_ctx.clone(), settings, data_dir, publisher)
    }

    /// Build the app against an existing context and publish its display
    /// handle. The text starts empty.
    pub(crate) fn with_context(
        ctx: egui::Context,
        settings: Settings,
        data_dir: PathBuf,
        publisher: InstancePublisher,
    ) -> Self {
        // Force dark theme
        ctx.set_theme(egui::Theme::Dark);
        theme::apply_visuals(&ctx);

        let needs_center = settings.window_position().is_none();
        let (handle, queue) = display::channel(ctx);
        publisher.publish(handle);
        info!("Visualizer window started");

        Self {
            text: WordCloudText::default(),
            queue,
            settings,
            data_dir,
            window_pos: None,
            needs_center,
        }
    }

    /// Drain queued updates into the displayed text.
    pub fn apply_pending_updates(&mut self) -> usize {
        let applied = self.queue.apply_pending(&mut self.text);
        if applied > 0 {
            debug!(applied, len = self.text.as_str().len(), "Word cloud updated");
        }
        applied
    }

    pub fn displayed_text(&self) -> &str {
        self.text.as_str()
    }

    pub fn save_settings(&mut self) {
        if let Some(pos) = self.window_pos {
            self.settings.window_x = Some(pos.x);
            self.settings.window_y = Some(pos.y);
        }
        self.settings.save(&self.data_dir);
    }

    /// One frame: apply updates, track geometry, draw.
    pub(crate) fn frame(&mut self, ctx: &egui::Context) {
        self.apply_pending_updates();

        // Track window position for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        self.render_word_cloud(ctx);
    }
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Visualizer window closing");
        self.save_settings();
    }
}
