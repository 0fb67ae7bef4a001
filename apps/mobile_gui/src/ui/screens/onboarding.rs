//! Onboarding: background trailer stand-in, sound controls, entry CTAs.

use std::time::Instant;

use eframe::egui;

use crate::ui::app::MobileGuiApp;
use crate::ui::widgets;

impl MobileGuiApp {
    pub(crate) fn show_onboarding(&mut self, ctx: &egui::Context, now: Instant) {
        let palette = self.palette;
        let state = self.onboarding_media.state();

        let mut sound_toggled = false;
        let mut volume_change: Option<f32> = None;
        let mut continue_as_guest = false;
        let mut sign_in = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.background))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                // Backdrop stands in for the background trailer; dimmer while
                // the platform keeps it paused.
                let backdrop = if state.playing {
                    palette.surface_high
                } else {
                    palette.surface
                };
                ui.painter()
                    .rect_filled(rect, egui::CornerRadius::ZERO, backdrop);
                let scrim = egui::Rect::from_min_max(
                    egui::pos2(rect.left(), rect.center().y - 60.0),
                    rect.max,
                );
                ui.painter().rect_filled(
                    scrim,
                    egui::CornerRadius::ZERO,
                    egui::Color32::from_black_alpha(170),
                );

                // Sound controls pinned top-right; the slider only shows
                // while unmuted.
                let controls = egui::Rect::from_min_size(
                    egui::pos2(rect.right() - 200.0, rect.top() + 14.0),
                    egui::vec2(186.0, 46.0),
                );
                widgets::ui_in_rect(ui, controls, |ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let glyph = if state.muted { "🔇" } else { "🔊" };
                        if widgets::circle_button(ui, glyph, 40.0, &palette).clicked() {
                            sound_toggled = true;
                        }
                        if state.show_volume {
                            let mut volume = state.volume;
                            let slider = egui::Slider::new(&mut volume, 0.0..=1.0)
                                .show_value(false);
                            if ui.add(slider).changed() {
                                volume_change = Some(volume);
                            }
                        }
                    });
                });

                // Brand, pitch, and the two entry paths along the bottom.
                let content = egui::Rect::from_min_max(
                    egui::pos2(rect.left() + 24.0, rect.bottom() - 270.0),
                    egui::pos2(rect.right() - 24.0, rect.bottom() - 28.0),
                );
                widgets::ui_in_rect(ui, content, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("REEL CENTRAL")
                                .size(14.0)
                                .strong()
                                .color(palette.accent),
                        );
                        ui.add_space(6.0);
                        ui.label(
                            egui::RichText::new("Movies, shorts and movie nights")
                                .size(25.0)
                                .strong()
                                .color(palette.text_primary),
                        );
                        ui.add_space(4.0);
                        ui.label(
                            egui::RichText::new(
                                "Trailers autoplay quietly. Unmute any time.",
                            )
                            .size(13.0)
                            .color(palette.text_dim),
                        );
                        ui.add_space(20.0);
                        if widgets::primary_button(ui, "Continue as Guest", &palette).clicked()
                        {
                            continue_as_guest = true;
                        }
                        ui.add_space(10.0);
                        if widgets::secondary_button(ui, "Sign In", &palette).clicked() {
                            sign_in = true;
                        }
                    });
                });
            });

        if sound_toggled {
            self.onboarding_media
                .toggle_sound(&mut self.onboarding_surface);
        }
        if let Some(volume) = volume_change {
            self.onboarding_media
                .set_volume(volume, &mut self.onboarding_surface);
            self.settings.volume = volume;
        }
        if continue_as_guest {
            self.continue_as_guest(now);
        } else if sign_in {
            self.sign_in(now);
        }
    }
}
