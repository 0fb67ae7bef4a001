//! Dark cinema palette shared by every screen.

use eframe::egui;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: egui::Color32,
    pub surface: egui::Color32,
    pub surface_high: egui::Color32,
    pub accent: egui::Color32,
    pub accent_text: egui::Color32,
    pub text_primary: egui::Color32,
    pub text_dim: egui::Color32,
    pub outline: egui::Color32,
    /// Translucent header fill once the feed has scrolled past the threshold.
    pub header_scrim: egui::Color32,
}

impl Palette {
    pub fn cinema_dark() -> Self {
        Self {
            background: egui::Color32::from_rgb(10, 10, 14),
            surface: egui::Color32::from_rgb(22, 22, 30),
            surface_high: egui::Color32::from_rgb(36, 36, 48),
            accent: egui::Color32::from_rgb(229, 9, 85),
            accent_text: egui::Color32::WHITE,
            text_primary: egui::Color32::from_rgb(240, 240, 245),
            text_dim: egui::Color32::from_rgb(150, 150, 165),
            outline: egui::Color32::from_rgb(52, 52, 66),
            header_scrim: egui::Color32::from_rgba_unmultiplied(10, 10, 14, 220),
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals = egui::Visuals::dark();
        style.visuals.panel_fill = self.background;
        style.visuals.window_fill = self.surface;
        style.visuals.override_text_color = Some(self.text_primary);
        style.visuals.widgets.inactive.bg_fill = self.surface_high;
        style.visuals.widgets.hovered.bg_fill = self.surface_high;
        style.visuals.selection.bg_fill = self.accent;
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        ctx.set_style(style);
    }
}
