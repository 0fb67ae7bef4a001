//! Reel Central — portrait-styled streaming front end.
//!
//! Screens: cinematic intro ident, onboarding with background media, the home
//! feed with carousels, the full-screen shorts feed overlay, and the
//! movie-night ticket page, all sharing one bottom dock.

mod media;
mod settings;
mod ui;

use clap::Parser;
use eframe::egui;

use crate::settings::{UserSettings, SETTINGS_STORAGE_KEY};
use crate::ui::app::{MobileGuiApp, StartupConfig};

#[derive(Debug, Parser)]
#[command(name = "reel-central", about = "Mobile-styled streaming front end")]
struct Args {
    /// Honor the reduced-motion preference: bypass the intro sequence.
    #[arg(long)]
    reduced_motion: bool,
    /// Jump straight to the home screen.
    #[arg(long)]
    skip_intro: bool,
    /// Simulate the platform rejecting muted autoplay.
    #[arg(long)]
    block_autoplay: bool,
    /// Log filter, e.g. `info` or `ui_core=debug`.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter.as_str())
        .init();

    let startup = StartupConfig {
        reduce_motion: args.reduced_motion,
        skip_intro: args.skip_intro,
        block_autoplay: args.block_autoplay,
    };
    tracing::info!(?startup, "launching");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Reel Central")
            .with_inner_size([430.0, 932.0])
            .with_min_inner_size([360.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Reel Central",
        options,
        Box::new(move |cc| {
            let stored = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<UserSettings>(&text).ok())
            });
            Ok(Box::new(MobileGuiApp::bootstrap(cc, startup, stored)))
        }),
    )
}
