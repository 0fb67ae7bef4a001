//! Screen renderers, one `impl MobileGuiApp` block per surface.

mod home;
mod intro;
mod onboarding;
mod shorts;
mod tickets;

use eframe::egui;

use crate::ui::app::MobileGuiApp;

impl MobileGuiApp {
    /// Channels and Actors shelves are not built yet; the dock still routes
    /// to them so the highlight behaves.
    pub(crate) fn show_placeholder(&mut self, ctx: &egui::Context) {
        let palette = self.palette;
        let tab = self.overlay.active_tab();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.background))
            .show(ctx, |ui| {
                ui.add_space(ui.available_height() * 0.4);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(tab.label())
                            .size(24.0)
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new("This shelf is on its way.")
                            .size(14.0)
                            .color(palette.text_dim),
                    );
                });
            });
    }
}
