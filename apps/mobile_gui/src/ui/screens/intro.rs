//! Cinematic intro ident: black screen, brand mark, tap-to-skip.

use std::time::Instant;

use eframe::egui;
use ui_core::intro::SKIP_FADE;
use ui_core::IntroPhase;

use crate::ui::app::MobileGuiApp;

impl MobileGuiApp {
    pub(crate) fn show_intro(&mut self, ctx: &egui::Context, now: Instant) {
        let palette = self.palette;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                if ui.allocate_rect(rect, egui::Sense::click()).clicked() {
                    self.intro.skip(now);
                }
                // Fade the ident toward black as the hand-off approaches.
                let alpha = match self.intro.phase() {
                    IntroPhase::Ident => 1.0,
                    IntroPhase::FadeOut => self
                        .intro
                        .next_deadline()
                        .map(|at| {
                            at.saturating_duration_since(now).as_secs_f32()
                                / SKIP_FADE.as_secs_f32()
                        })
                        .unwrap_or(0.0)
                        .clamp(0.0, 1.0),
                    IntroPhase::Done => 0.0,
                };
                let painter = ui.painter();
                painter.circle_filled(
                    rect.center() - egui::vec2(0.0, 54.0),
                    34.0,
                    palette.accent.gamma_multiply(alpha),
                );
                painter.text(
                    rect.center() + egui::vec2(0.0, 14.0),
                    egui::Align2::CENTER_CENTER,
                    "REEL CENTRAL",
                    egui::FontId::proportional(30.0),
                    palette.text_primary.gamma_multiply(alpha),
                );
                painter.text(
                    egui::pos2(rect.center().x, rect.bottom() - 48.0),
                    egui::Align2::CENTER_CENTER,
                    "Tap to skip",
                    egui::FontId::proportional(13.0),
                    palette.text_dim.gamma_multiply(alpha),
                );
            });
    }
}
