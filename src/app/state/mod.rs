mod overlay;

use crate::config::AppConfig;
use crate::manifest::ChapterManifest;
use crate::nav::NavigationController;
use crate::playback::PlaybackState;
use iced::Task;
use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

use super::messages::Message;

pub(in crate::app) use overlay::OverlayState;

/// Scrollable id of the horizontal chapter strip, targeted by auto-scroll.
pub(crate) static STRIP_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("chapter-strip"));

/// Horizontal padding around the overlay row.
pub(crate) const OVERLAY_MARGIN_PX: f32 = 16.0;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) manifest: ChapterManifest,
    pub(super) playback: PlaybackState,
    pub(super) nav: NavigationController,
    pub(super) overlay: OverlayState,
}

impl App {
    pub fn bootstrap(manifest: ChapterManifest, config: AppConfig) -> (Self, Task<Message>) {
        let playback = PlaybackState::new(manifest.duration, config.playback_rate);
        let mut nav = NavigationController::new(config.min_item_width);
        let overlay = OverlayState::new(config.window_width);

        let (viewport, inner) = overlay.geometry(config.arrow_width);
        nav.load_chapters(&manifest.chapters, manifest.duration, viewport, inner);

        let app = App {
            config,
            manifest,
            playback,
            nav,
            overlay,
        };
        (app, Task::none())
    }

    /// Current `(viewport, inner track)` widths for the horizontal strip.
    pub(super) fn overlay_geometry(&self) -> (f32, f32) {
        self.overlay.geometry(self.config.arrow_width)
    }
}
