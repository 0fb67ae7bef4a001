//! Movie-night ticket page behind the Discover tab.

use eframe::egui;

use catalog::domain::MovieListing;

use crate::ui::app::MobileGuiApp;
use crate::ui::theme::Palette;

impl MobileGuiApp {
    pub(crate) fn show_tickets(&mut self, ctx: &egui::Context) {
        let palette = self.palette;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.background))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("tickets")
                    .auto_shrink([false, false])
                    .scroll_bar_visibility(
                        egui::scroll_area::ScrollBarVisibility::AlwaysHidden,
                    )
                    .show(ui, |ui| {
                        ui.add_space(28.0);
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new(&self.movie_night.headline)
                                    .size(26.0)
                                    .strong()
                                    .color(palette.accent),
                            );
                            ui.add_space(4.0);
                            ui.label(
                                egui::RichText::new(&self.movie_night.tagline)
                                    .size(14.0)
                                    .color(palette.text_dim),
                            );
                            ui.label(
                                egui::RichText::new(
                                    self.movie_night.date.format("%B %e, %Y").to_string(),
                                )
                                .size(13.0)
                                .color(palette.text_dim),
                            );
                        });
                        ui.add_space(16.0);
                        for listing in &self.movie_night.listings {
                            listing_card(ui, listing, &palette);
                            ui.add_space(8.0);
                        }
                        ui.add_space(96.0);
                    });
            });
    }
}

fn ticket_button(ui: &mut egui::Ui, text: &str, accent: bool, palette: &Palette) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(150.0, 38.0), egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let radius = egui::CornerRadius::same(19);
        if accent {
            ui.painter().rect_filled(rect, radius, palette.accent);
        } else {
            ui.painter().rect_stroke(
                rect,
                radius,
                egui::Stroke::new(1.0, palette.outline),
                egui::StrokeKind::Middle,
            );
        }
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(13.0),
            if accent {
                palette.accent_text
            } else {
                palette.text_primary
            },
        );
    }
    response
}

fn listing_card(ui: &mut egui::Ui, listing: &MovieListing, palette: &Palette) {
    egui::Frame::new()
        .fill(palette.surface)
        .corner_radius(egui::CornerRadius::same(14))
        .stroke(egui::Stroke::new(1.0, palette.outline))
        .inner_margin(egui::Margin::symmetric(14, 12))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&listing.title)
                        .size(17.0)
                        .strong()
                        .color(palette.text_primary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("★ {}", listing.rating))
                            .size(13.0)
                            .color(palette.accent),
                    );
                });
            });
            ui.label(
                egui::RichText::new(format!(
                    "{} · {} min",
                    listing.genre, listing.duration_min
                ))
                .size(12.0)
                .color(palette.text_dim),
            );
            ui.label(
                egui::RichText::new(&listing.showtime)
                    .size(12.0)
                    .color(palette.text_dim),
            );
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ticket_button(ui, "Single Ticket", true, palette).clicked() {
                    ui.ctx()
                        .open_url(egui::OpenUrl::new_tab(&listing.single_ticket_url));
                }
                if ticket_button(ui, "Double Date", false, palette).clicked() {
                    ui.ctx()
                        .open_url(egui::OpenUrl::new_tab(&listing.double_ticket_url));
                }
            });
        });
}
