//! Home feed: rotating hero spotlight, filter chips, the featured trailer
//! carousel, the shorts shelf, and the titled content rows.

use std::time::Instant;

use eframe::egui;

use catalog::domain::ContentFilter;

use crate::ui::app::{EntryMode, MobileGuiApp};
use crate::ui::widgets;

const HEADER_CLEARANCE: f32 = 58.0;
const DOCK_CLEARANCE: f32 = 96.0;

impl MobileGuiApp {
    pub(crate) fn show_home(&mut self, ctx: &egui::Context, now: Instant) {
        let palette = self.palette;
        let mut scroll_y = 0.0;
        let mut panel_width = 0.0;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                panel_width = ui.max_rect().width();
                self.ambient_backdrop(ui);
                let output = egui::ScrollArea::vertical()
                    .id_salt("home_feed")
                    .auto_shrink([false, false])
                    .scroll_bar_visibility(
                        egui::scroll_area::ScrollBarVisibility::AlwaysHidden,
                    )
                    .show(ui, |ui| {
                        ui.add_space(HEADER_CLEARANCE);
                        self.hero_spotlight(ui);
                        ui.add_space(4.0);
                        self.filter_chips(ui);
                        self.featured_section(ui, now);
                        self.shorts_shelf(ui);
                        self.content_rows(ui);
                        ui.add_space(DOCK_CLEARANCE);
                    });
                scroll_y = output.state.offset.y;
            });

        if self.header.on_scroll(scroll_y) {
            tracing::debug!(
                scrolled = self.header.is_scrolled(),
                "header treatment changed"
            );
        }
        self.home_header(ctx, panel_width);
    }

    /// Fixed header over the feed; picks up a scrim once scrolled.
    fn home_header(&mut self, ctx: &egui::Context, width: f32) {
        let palette = self.palette;
        egui::Area::new(egui::Id::new("home_header"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                let fill = if self.header.is_scrolled() {
                    palette.header_scrim
                } else {
                    egui::Color32::TRANSPARENT
                };
                egui::Frame::new()
                    .fill(fill)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.set_width(width - 32.0);
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new("REEL CENTRAL")
                                    .size(18.0)
                                    .strong()
                                    .color(palette.accent),
                            );
                            if self.entry == Some(EntryMode::Guest) {
                                ui.label(
                                    egui::RichText::new("Guest")
                                        .size(11.0)
                                        .color(palette.text_dim),
                                );
                            }
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if widgets::circle_button(ui, "🔍", 34.0, &palette).clicked()
                                    {
                                        tracing::info!("search opened");
                                    }
                                },
                            );
                        });
                    });
            });
    }

    /// Rotating spotlight with the inline preview play toggle.
    fn hero_spotlight(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette;
        let idx = self.hero_rotator.index().min(self.heroes.len() - 1);
        // Crossfade dip: the artwork dims while the rotator swaps entries.
        let alpha = if self.hero_rotator.is_visible() { 1.0 } else { 0.25 };

        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(ui.available_width(), 400.0), egui::Sense::hover());
        {
            let hero = &self.heroes[idx];
            let painter = ui.painter();
            painter.rect_filled(
                rect,
                egui::CornerRadius::same(18),
                palette.surface.gamma_multiply(alpha),
            );
            painter.rect_stroke(
                rect,
                egui::CornerRadius::same(18),
                egui::Stroke::new(1.0, palette.outline),
                egui::StrokeKind::Middle,
            );
            painter.text(
                egui::pos2(rect.left() + 20.0, rect.bottom() - 118.0),
                egui::Align2::LEFT_TOP,
                &hero.title,
                egui::FontId::proportional(28.0),
                palette.text_primary.gamma_multiply(alpha),
            );
            painter.text(
                egui::pos2(rect.left() + 20.0, rect.bottom() - 82.0),
                egui::Align2::LEFT_TOP,
                &hero.meta,
                egui::FontId::proportional(13.0),
                palette.text_dim.gamma_multiply(alpha),
            );
        }

        let mut play_toggled = false;
        let mut sound_toggled = false;
        let mut watch_now = false;
        let controls = egui::Rect::from_min_size(
            egui::pos2(rect.left() + 20.0, rect.bottom() - 62.0),
            egui::vec2(rect.width() - 40.0, 46.0),
        );
        let state = self.hero_media.state();
        widgets::ui_in_rect(ui, controls, |ui| {
            ui.horizontal(|ui| {
                if widgets::pill(ui, "Watch Now", true, &palette).clicked() {
                    watch_now = true;
                }
                let glyph = if state.playing { "⏸" } else { "▶" };
                if widgets::circle_button(ui, glyph, 38.0, &palette).clicked() {
                    play_toggled = true;
                }
                if state.playing {
                    let glyph = if state.muted { "🔇" } else { "🔊" };
                    if widgets::circle_button(ui, glyph, 38.0, &palette).clicked() {
                        sound_toggled = true;
                    }
                }
            });
        });
        if play_toggled {
            self.hero_media.toggle_play(&mut self.hero_surface);
        }
        if sound_toggled {
            self.hero_media.toggle_sound(&mut self.hero_surface);
        }
        if watch_now {
            tracing::info!(id = %self.heroes[idx].id, "spotlight title opened");
        }
    }

    fn filter_chips(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette;
        ui.horizontal(|ui| {
            ui.add_space(6.0);
            for option in ContentFilter::ALL {
                if widgets::pill(ui, option.label(), option == self.filter, &palette).clicked() {
                    self.filter = option;
                }
            }
        });
    }

    /// Auto-advancing trailer carousel with dots and chevrons.
    fn featured_section(&mut self, ui: &mut egui::Ui, now: Instant) {
        let palette = self.palette;
        widgets::section_header(ui, "Featured trailers", &palette);

        let card = egui::vec2(300.0, 168.0);
        let stride = card.x + ui.spacing().item_spacing.x;
        let mut area = egui::ScrollArea::horizontal()
            .id_salt("featured_carousel")
            .auto_shrink([false, true])
            .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden);
        // Programmatic change this frame: line the view up with the index.
        if self.featured_carousel.take_pending_scroll().is_some() {
            area = area.horizontal_scroll_offset(self.featured_carousel.target_offset(stride));
        }
        let output = area.show(ui, |ui| {
            ui.horizontal(|ui| {
                for item in &self.featured {
                    let response =
                        widgets::poster_card(ui, &item.title, &item.meta, None, card, &palette);
                    if response.clicked() {
                        tracing::info!(id = %item.id, "featured trailer opened");
                    }
                }
            });
        });

        if self
            .featured_carousel
            .sync_from_scroll(output.state.offset.x, stride, now)
        {
            tracing::debug!(
                index = self.featured_carousel.active_index(),
                "carousel snapped to manual scroll"
            );
        }
        let hovered = ui.rect_contains_pointer(output.inner_rect);
        if hovered != self.featured_carousel.is_pointer_over() {
            if hovered {
                self.featured_carousel.pointer_enter();
            } else {
                self.featured_carousel.pointer_leave(now);
            }
        }

        ui.horizontal(|ui| {
            if widgets::circle_button(ui, "◀", 28.0, &palette).clicked() {
                self.featured_carousel.previous(now);
            }
            for i in 0..self.featured_carousel.len() {
                let active = i == self.featured_carousel.active_index();
                let (dot, response) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::click());
                ui.painter().circle_filled(
                    dot.center(),
                    if active { 4.5 } else { 3.0 },
                    if active { palette.accent } else { palette.outline },
                );
                if response.clicked() {
                    self.featured_carousel.go_to(i, now);
                }
            }
            if widgets::circle_button(ui, "▶", 28.0, &palette).clicked() {
                self.featured_carousel.next(now);
            }
        });
    }

    /// Horizontal shorts teasers; tapping any of them opens the feed overlay.
    fn shorts_shelf(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette;
        widgets::section_header(ui, "Shorts", &palette);
        let mut open_feed = false;
        egui::ScrollArea::horizontal()
            .id_salt("shorts_shelf")
            .auto_shrink([false, true])
            .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for item in &self.shorts_row {
                        let response = widgets::poster_card(
                            ui,
                            &item.title,
                            &item.meta,
                            None,
                            egui::vec2(126.0, 210.0),
                            &palette,
                        );
                        if response.clicked() {
                            open_feed = true;
                        }
                    }
                });
            });
        if open_feed {
            self.overlay.open();
        }
    }

    fn content_rows(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette;
        for (row_index, row) in self.home_rows.iter().enumerate() {
            widgets::section_header(ui, &row.title, &palette);
            egui::ScrollArea::horizontal()
                .id_salt(("content_row", row_index))
                .auto_shrink([false, true])
                .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for item in &row.items {
                            let response = widgets::poster_card(
                                ui,
                                &item.title,
                                &item.meta,
                                item.badge.as_deref(),
                                egui::vec2(150.0, 220.0),
                                &palette,
                            );
                            if response.clicked() {
                                tracing::info!(id = %item.id, "title opened");
                            }
                        }
                    });
                });
        }
    }
}
