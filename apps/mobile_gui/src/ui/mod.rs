//! UI layer: app shell, screens, widgets, and the theme palette.

pub mod app;
pub mod screens;
pub mod theme;
pub mod widgets;

pub use app::{MobileGuiApp, StartupConfig};
