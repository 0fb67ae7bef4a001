//! Small reusable drawing helpers: cards, pills, buttons, and the bottom dock.

use eframe::egui;
use egui::{Align2, CornerRadius, FontId, Sense};
use ui_core::DockTab;

use crate::ui::theme::Palette;

/// Lays a child UI into an exact rect with clipping.
pub fn ui_in_rect(ui: &mut egui::Ui, rect: egui::Rect, add: impl FnOnce(&mut egui::Ui)) {
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.set_clip_rect(rect);
    add(&mut child);
}

/// Filter chip. Accent-filled when selected.
pub fn pill(ui: &mut egui::Ui, text: &str, selected: bool, palette: &Palette) -> egui::Response {
    let font = FontId::proportional(13.0);
    let galley = ui.painter().layout_no_wrap(text.to_string(), font.clone(), palette.text_primary);
    let size = egui::vec2(galley.size().x + 28.0, 30.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if ui.is_rect_visible(rect) {
        let fill = if selected {
            palette.accent
        } else if response.hovered() {
            palette.surface_high
        } else {
            palette.surface
        };
        let text_color = if selected {
            palette.accent_text
        } else {
            palette.text_dim
        };
        ui.painter()
            .rect_filled(rect, CornerRadius::same(15), fill);
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            text,
            font,
            text_color,
        );
    }
    response
}

/// Round icon button, used for the sound toggle, carousel chevrons, and close.
pub fn circle_button(
    ui: &mut egui::Ui,
    glyph: &str,
    diameter: f32,
    palette: &Palette,
) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(diameter, diameter), Sense::click());
    if ui.is_rect_visible(rect) {
        let fill = if response.hovered() {
            palette.surface_high
        } else {
            palette.surface
        };
        ui.painter()
            .circle_filled(rect.center(), diameter / 2.0, fill);
        ui.painter().circle_stroke(
            rect.center(),
            diameter / 2.0,
            egui::Stroke::new(1.0, palette.outline),
        );
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(diameter * 0.45),
            palette.text_primary,
        );
    }
    response
}

fn cta_button(
    ui: &mut egui::Ui,
    text: &str,
    fill: egui::Color32,
    text_color: egui::Color32,
    stroke: Option<egui::Stroke>,
) -> egui::Response {
    let size = egui::vec2(ui.available_width().min(320.0), 46.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if ui.is_rect_visible(rect) {
        let radius = CornerRadius::same(23);
        ui.painter().rect_filled(rect, radius, fill);
        if let Some(stroke) = stroke {
            ui.painter()
                .rect_stroke(rect, radius, stroke, egui::StrokeKind::Middle);
        }
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(16.0),
            text_color,
        );
    }
    response
}

pub fn primary_button(ui: &mut egui::Ui, text: &str, palette: &Palette) -> egui::Response {
    cta_button(ui, text, palette.accent, palette.accent_text, None)
}

pub fn secondary_button(ui: &mut egui::Ui, text: &str, palette: &Palette) -> egui::Response {
    cta_button(
        ui,
        text,
        egui::Color32::TRANSPARENT,
        palette.text_primary,
        Some(egui::Stroke::new(1.0, palette.outline)),
    )
}

pub fn section_header(ui: &mut egui::Ui, title: &str, palette: &Palette) {
    ui.add_space(6.0);
    ui.label(
        egui::RichText::new(title)
            .size(17.0)
            .strong()
            .color(palette.text_primary),
    );
    ui.add_space(2.0);
}

/// Poster-style card: artwork placeholder, caption, optional accent badge.
pub fn poster_card(
    ui: &mut egui::Ui,
    title: &str,
    meta: &str,
    badge: Option<&str>,
    size: egui::Vec2,
    palette: &Palette,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if ui.is_rect_visible(rect) {
        let radius = CornerRadius::same(10);
        let fill = if response.hovered() {
            palette.surface_high
        } else {
            palette.surface
        };
        ui.painter().rect_filled(rect, radius, fill);
        ui.painter().rect_stroke(
            rect,
            radius,
            egui::Stroke::new(1.0, palette.outline),
            egui::StrokeKind::Middle,
        );
        // Caption strip along the bottom edge of the artwork.
        let caption_top = rect.bottom() - 44.0;
        ui.painter().text(
            egui::pos2(rect.left() + 10.0, caption_top),
            Align2::LEFT_TOP,
            title,
            FontId::proportional(14.0),
            palette.text_primary,
        );
        ui.painter().text(
            egui::pos2(rect.left() + 10.0, caption_top + 20.0),
            Align2::LEFT_TOP,
            meta,
            FontId::proportional(12.0),
            palette.text_dim,
        );
        if let Some(badge) = badge {
            let badge_rect = egui::Rect::from_min_size(
                rect.min + egui::vec2(8.0, 8.0),
                egui::vec2(42.0, 20.0),
            );
            ui.painter()
                .rect_filled(badge_rect, CornerRadius::same(10), palette.accent);
            ui.painter().text(
                badge_rect.center(),
                Align2::CENTER_CENTER,
                badge,
                FontId::proportional(11.0),
                palette.accent_text,
            );
        }
    }
    response
}

/// One dock item; the center action gets the accent treatment.
fn dock_item(
    ui: &mut egui::Ui,
    tab: DockTab,
    glyph: &str,
    active: bool,
    palette: &Palette,
) -> egui::Response {
    let is_center = tab == DockTab::Shorts;
    let size = if is_center {
        egui::vec2(54.0, 54.0)
    } else {
        egui::vec2(58.0, 50.0)
    };
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if ui.is_rect_visible(rect) {
        if is_center {
            let fill = if active { palette.accent } else { palette.surface_high };
            ui.painter()
                .circle_filled(rect.center(), 26.0, fill);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                glyph,
                FontId::proportional(20.0),
                palette.accent_text,
            );
        } else {
            let color = if active {
                palette.text_primary
            } else {
                palette.text_dim
            };
            ui.painter().text(
                rect.center() - egui::vec2(0.0, 8.0),
                Align2::CENTER_CENTER,
                glyph,
                FontId::proportional(17.0),
                color,
            );
            ui.painter().text(
                rect.center() + egui::vec2(0.0, 14.0),
                Align2::CENTER_CENTER,
                tab.label(),
                FontId::proportional(10.0),
                color,
            );
        }
    }
    response
}

fn dock_glyph(tab: DockTab) -> &'static str {
    match tab {
        DockTab::Home => "🏠",
        DockTab::Discover => "🔍",
        DockTab::Shorts => "▶",
        DockTab::Channels => "📺",
        DockTab::Actors => "★",
    }
}

/// Shared bottom dock. Returns the tab tapped this frame, if any.
pub fn dock(ctx: &egui::Context, active: DockTab, palette: &Palette) -> Option<DockTab> {
    let mut tapped = None;
    egui::Area::new(egui::Id::new("bottom_dock"))
        .anchor(Align2::CENTER_BOTTOM, egui::vec2(0.0, -10.0))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(palette.surface)
                .corner_radius(CornerRadius::same(27))
                .stroke(egui::Stroke::new(1.0, palette.outline))
                .inner_margin(egui::Margin::symmetric(14, 6))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for tab in DockTab::ALL {
                            let response =
                                dock_item(ui, tab, dock_glyph(tab), tab == active, palette);
                            if response.clicked() {
                                tapped = Some(tab);
                            }
                        }
                    });
                });
        });
    tapped
}
