//! Full-screen shorts feed overlay: one snap slide per clip, a position
//! indicator, and a close affordance back to home.

use eframe::egui;

use crate::ui::app::MobileGuiApp;
use crate::ui::widgets;

impl MobileGuiApp {
    pub(crate) fn show_shorts(&mut self, ctx: &egui::Context) {
        let palette = self.palette;
        let mut panel_width = 0.0;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let viewport = ui.max_rect();
                panel_width = viewport.width();
                self.ambient_backdrop(ui);
                let slide_size = egui::vec2(viewport.width(), viewport.height());
                let output = egui::ScrollArea::vertical()
                    .id_salt("shorts_feed")
                    .auto_shrink([false, false])
                    .scroll_bar_visibility(
                        egui::scroll_area::ScrollBarVisibility::AlwaysHidden,
                    )
                    .show(ui, |ui| {
                        for (index, clip) in self.shorts_feed.iter().enumerate() {
                            let (rect, _) =
                                ui.allocate_exact_size(slide_size, egui::Sense::hover());
                            short_slide(ui, rect, index, &clip.title, &clip.movie_title, &palette);
                        }
                    });
                self.overlay
                    .sync_feed_scroll(output.state.offset.y, slide_size.y);
            });

        self.shorts_chrome(ctx, panel_width);
    }

    /// Overlay chrome floated above the feed: close, title, "current / total".
    fn shorts_chrome(&mut self, ctx: &egui::Context, width: f32) {
        let palette = self.palette;
        let (current, total) = self.overlay.feed_indicator(self.shorts_feed.len());
        let mut close = false;

        egui::Area::new(egui::Id::new("shorts_chrome"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 10.0))
            .show(ctx, |ui| {
                ui.set_width(width - 28.0);
                ui.horizontal(|ui| {
                    if widgets::circle_button(ui, "✕", 36.0, &palette).clicked() {
                        close = true;
                    }
                    ui.label(
                        egui::RichText::new("Shorts")
                            .size(17.0)
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("{current} / {total}"))
                                .size(13.0)
                                .color(palette.text_dim),
                        );
                    });
                });
            });

        if close {
            self.overlay.close();
        }
    }
}

fn short_slide(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    index: usize,
    title: &str,
    movie_title: &str,
    palette: &crate::ui::theme::Palette,
) {
    let painter = ui.painter();
    // Translucent alternating tint: the shared backdrop stays visible
    // underneath, and swiping between slides still reads clearly.
    let tint = if index % 2 == 0 {
        egui::Color32::from_black_alpha(70)
    } else {
        egui::Color32::from_black_alpha(130)
    };
    painter.rect_filled(rect, egui::CornerRadius::ZERO, tint);
    let scrim = egui::Rect::from_min_max(
        egui::pos2(rect.left(), rect.bottom() - 180.0),
        rect.max,
    );
    painter.rect_filled(
        scrim,
        egui::CornerRadius::ZERO,
        egui::Color32::from_black_alpha(150),
    );
    painter.text(
        egui::pos2(rect.left() + 18.0, rect.bottom() - 150.0),
        egui::Align2::LEFT_TOP,
        title,
        egui::FontId::proportional(19.0),
        palette.text_primary,
    );
    painter.text(
        egui::pos2(rect.left() + 18.0, rect.bottom() - 122.0),
        egui::Align2::LEFT_TOP,
        format!("From: {movie_title}"),
        egui::FontId::proportional(13.0),
        palette.text_dim,
    );

    // Action rail down the right edge.
    for (slot, glyph) in ["❤", "💬", "⟳"].into_iter().enumerate() {
        let center = egui::pos2(
            rect.right() - 34.0,
            rect.bottom() - 320.0 + slot as f32 * 58.0,
        );
        let action = egui::Rect::from_center_size(center, egui::vec2(44.0, 44.0));
        let response = ui.interact(
            action,
            ui.id().with(("short_action", index, slot)),
            egui::Sense::click(),
        );
        ui.painter().circle_filled(
            center,
            22.0,
            if response.hovered() {
                palette.surface_high
            } else {
                egui::Color32::from_black_alpha(120)
            },
        );
        ui.painter().text(
            center,
            egui::Align2::CENTER_CENTER,
            glyph,
            egui::FontId::proportional(18.0),
            palette.text_primary,
        );
        if response.clicked() {
            tracing::info!(index, slot, "short action tapped");
        }
    }
}
