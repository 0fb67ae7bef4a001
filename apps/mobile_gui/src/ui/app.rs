use std::time::{Duration, Instant};

use eframe::egui;

use catalog::data;
use catalog::domain::{ContentFilter, ContentRow, HeroItem, MovieNight, PosterItem, ShortClip};
use ui_core::{
    CarouselController, DockTab, HeaderBlur, HeroRotator, IntroController, MediaController,
    OverlayController,
};

use crate::media::PlatformMedia;
use crate::settings::{UserSettings, SETTINGS_STORAGE_KEY};
use crate::ui::theme::Palette;
use crate::ui::widgets;

#[derive(Debug, Clone, Copy)]
pub struct StartupConfig {
    pub reduce_motion: bool,
    pub skip_intro: bool,
    pub block_autoplay: bool,
}

/// Which surface owns the frame. One-way until `Main`; the shorts overlay is
/// handled inside `Main` by the overlay controller, not as a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Launch,
    Onboarding,
    Main,
}

/// How the user entered the main experience from onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryMode {
    Guest,
    SignedIn,
}

pub struct MobileGuiApp {
    pub(crate) screen: Screen,
    pub(crate) entry: Option<EntryMode>,
    pub(crate) palette: Palette,
    pub(crate) settings: UserSettings,

    // Catalog snapshot, loaded once at startup.
    pub(crate) heroes: Vec<HeroItem>,
    pub(crate) featured: Vec<PosterItem>,
    pub(crate) home_rows: Vec<ContentRow>,
    pub(crate) shorts_row: Vec<PosterItem>,
    pub(crate) shorts_feed: Vec<ShortClip>,
    pub(crate) movie_night: MovieNight,

    // Presentation controllers plus the media surfaces they drive.
    pub(crate) intro: IntroController,
    pub(crate) onboarding_media: MediaController,
    pub(crate) onboarding_surface: PlatformMedia,
    pub(crate) hero_media: MediaController,
    pub(crate) hero_surface: PlatformMedia,
    pub(crate) featured_carousel: CarouselController,
    pub(crate) hero_rotator: HeroRotator,
    pub(crate) header: HeaderBlur,
    pub(crate) overlay: OverlayController,
    pub(crate) filter: ContentFilter,
}

impl MobileGuiApp {
    pub fn bootstrap(
        cc: &eframe::CreationContext<'_>,
        startup: StartupConfig,
        stored: Option<UserSettings>,
    ) -> Self {
        let app = Self::new(startup, stored, Instant::now());
        app.palette.apply(&cc.egui_ctx);
        app
    }

    fn new(startup: StartupConfig, stored: Option<UserSettings>, now: Instant) -> Self {
        let mut settings = stored.unwrap_or_default();
        if startup.reduce_motion {
            settings.reduce_motion = true;
        }
        let palette = Palette::cinema_dark();
        let heroes = data::heroes();
        let featured = data::featured_trailers();
        let autoplay_allowed = !startup.block_autoplay;

        let mut app = Self {
            screen: if startup.skip_intro {
                Screen::Main
            } else {
                Screen::Launch
            },
            entry: None,
            palette,
            settings,
            featured_carousel: CarouselController::new(featured.len(), now),
            hero_rotator: HeroRotator::new(heroes.len(), now),
            heroes,
            featured,
            home_rows: data::home_rows(),
            shorts_row: data::shorts_row(),
            shorts_feed: data::shorts_feed(),
            movie_night: data::movie_night(),
            intro: IntroController::new(now, settings.reduce_motion),
            onboarding_media: MediaController::with_volume(settings.volume),
            onboarding_surface: PlatformMedia::new("onboarding", autoplay_allowed),
            hero_media: MediaController::with_volume(settings.volume),
            hero_surface: PlatformMedia::new("home-hero", autoplay_allowed),
            header: HeaderBlur::default(),
            overlay: OverlayController::new(),
            filter: ContentFilter::Shows,
        };
        if startup.skip_intro {
            app.hero_media.start(now, &mut app.hero_surface);
        }
        app
    }

    /// Drives every pending deadline for the active screen.
    fn advance(&mut self, now: Instant) {
        match self.screen {
            Screen::Launch => {
                self.intro.tick(now);
                if self.intro.is_done() {
                    self.enter_onboarding(now);
                }
            }
            Screen::Onboarding => {
                self.onboarding_media.tick(now, &mut self.onboarding_surface);
            }
            Screen::Main => {
                self.hero_rotator.set_paused(self.overlay.is_open(), now);
                self.hero_rotator.tick(now);
                self.featured_carousel.tick(now);
                self.hero_media.tick(now, &mut self.hero_surface);
            }
        }
    }

    fn enter_onboarding(&mut self, now: Instant) {
        self.screen = Screen::Onboarding;
        self.onboarding_media.start(now, &mut self.onboarding_surface);
        tracing::info!("intro finished, onboarding mounted");
    }

    /// Onboarding's guest path: straight into the main experience.
    pub(crate) fn continue_as_guest(&mut self, now: Instant) {
        self.entry = Some(EntryMode::Guest);
        tracing::info!("continuing as guest");
        self.enter_main(now);
    }

    /// Onboarding's sign-in path. Authentication itself is out of scope; the
    /// handoff still lands in the main experience as a signed-in session.
    pub(crate) fn sign_in(&mut self, now: Instant) {
        self.entry = Some(EntryMode::SignedIn);
        tracing::info!("signing in");
        self.enter_main(now);
    }

    fn enter_main(&mut self, now: Instant) {
        if self.onboarding_media.state().playing {
            self.onboarding_media.toggle_play(&mut self.onboarding_surface);
        }
        self.screen = Screen::Main;
        self.hero_media.start(now, &mut self.hero_surface);
    }

    /// Spotlight entry the ambient backdrop is derived from, shared by home
    /// and the shorts overlay so the transition between them reads seamless.
    pub(crate) fn backdrop_hero(&self) -> &HeroItem {
        &self.heroes[self.hero_rotator.index().min(self.heroes.len() - 1)]
    }

    /// Dimmed stand-in for the current spotlight still, painted behind both
    /// main surfaces before any content.
    pub(crate) fn ambient_backdrop(&self, ui: &egui::Ui) {
        let rect = ui.max_rect();
        let painter = ui.painter();
        painter.rect_filled(rect, egui::CornerRadius::ZERO, self.palette.background);
        let still = egui::Rect::from_min_size(
            rect.min,
            egui::vec2(rect.width(), rect.height() * 0.55),
        );
        painter.rect_filled(
            still,
            egui::CornerRadius::ZERO,
            self.palette.surface.gamma_multiply(0.6),
        );
        painter.rect_filled(
            still,
            egui::CornerRadius::ZERO,
            egui::Color32::from_black_alpha(120),
        );
    }

    /// Earliest pending controller deadline, capped so slider drags and
    /// scrolls stay responsive even with nothing scheduled.
    fn repaint_delay(&self, now: Instant) -> Duration {
        let next = match self.screen {
            Screen::Launch => self.intro.next_deadline(),
            Screen::Onboarding => self.onboarding_media.next_deadline(),
            Screen::Main => [
                self.featured_carousel.next_deadline(),
                self.hero_rotator.next_deadline(),
                self.hero_media.next_deadline(),
            ]
            .into_iter()
            .flatten()
            .min(),
        };
        let cap = Duration::from_millis(100);
        match next {
            Some(at) => at.saturating_duration_since(now).min(cap),
            None => cap,
        }
    }
}

impl eframe::App for MobileGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.advance(now);

        match self.screen {
            Screen::Launch => self.show_intro(ctx, now),
            Screen::Onboarding => self.show_onboarding(ctx, now),
            Screen::Main => {
                if self.overlay.is_open() {
                    self.show_shorts(ctx);
                } else {
                    match self.overlay.active_tab() {
                        DockTab::Home => self.show_home(ctx, now),
                        DockTab::Discover => self.show_tickets(ctx),
                        DockTab::Shorts => self.show_shorts(ctx),
                        DockTab::Channels | DockTab::Actors => self.show_placeholder(ctx),
                    }
                }
                if let Some(tab) = widgets::dock(ctx, self.overlay.active_tab(), &self.palette) {
                    self.overlay.select_tab(tab);
                }
            }
        }

        ctx.request_repaint_after(self.repaint_delay(now));
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(serialized) = serde_json::to_string(&self.settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui_core::carousel::{HERO_CROSSFADE, HERO_ROTATE_EVERY};

    fn startup() -> StartupConfig {
        StartupConfig {
            reduce_motion: false,
            skip_intro: false,
            block_autoplay: false,
        }
    }

    #[test]
    fn onboarding_ctas_are_distinct_handoffs() {
        let t0 = Instant::now();

        let mut app = MobileGuiApp::new(startup(), None, t0);
        app.screen = Screen::Onboarding;
        app.continue_as_guest(t0);
        assert_eq!(app.screen, Screen::Main);
        assert_eq!(app.entry, Some(EntryMode::Guest));
        assert!(app.hero_surface.playing);

        let mut app = MobileGuiApp::new(startup(), None, t0);
        app.screen = Screen::Onboarding;
        app.sign_in(t0);
        assert_eq!(app.screen, Screen::Main);
        assert_eq!(app.entry, Some(EntryMode::SignedIn));
    }

    #[test]
    fn backdrop_stays_stable_while_overlay_is_open() {
        let t0 = Instant::now();
        let mut app = MobileGuiApp::new(
            StartupConfig {
                skip_intro: true,
                ..startup()
            },
            None,
            t0,
        );
        let before = app.backdrop_hero().id.clone();

        // Rotation is suspended under the overlay: the shared backdrop must
        // not change behind the shorts feed.
        app.overlay.open();
        app.advance(t0 + HERO_ROTATE_EVERY * 3);
        assert_eq!(app.backdrop_hero().id, before);

        // After closing, the rotation resumes a full interval later.
        let closed_at = t0 + HERO_ROTATE_EVERY * 4;
        app.overlay.close();
        app.advance(closed_at);
        assert_eq!(app.backdrop_hero().id, before);
        app.advance(closed_at + HERO_ROTATE_EVERY);
        app.advance(closed_at + HERO_ROTATE_EVERY + HERO_CROSSFADE);
        assert_ne!(app.backdrop_hero().id, before);
    }
}
