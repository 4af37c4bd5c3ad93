mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::manifest::ChapterManifest;
use crate::theme;
use iced::{Size, window};

/// Helper to launch the app with the loaded manifest.
pub fn run_app(manifest: ChapterManifest, config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Chapter Navigator", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| theme::app_theme(app.config.theme))
        .run_with(move || App::bootstrap(manifest, config))
}
