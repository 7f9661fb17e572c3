//! Word cloud view

use super::App;
use crate::constants::TEXT_SIZE;
use crate::theme;
use eframe::egui;

impl App {
    /// Draw the current text centered in the window.
    pub(crate) fn render_word_cloud(&self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(theme::text_frame())
            .show(ctx, |ui| {
                let text = egui::RichText::new(self.text.as_str())
                    .size(TEXT_SIZE)
                    .color(theme::TEXT_PRIMARY);
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Label::new(text).wrap());
                });
            });
    }
}
