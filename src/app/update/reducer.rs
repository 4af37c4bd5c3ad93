use super::Effect;
use super::super::messages::Message;
use super::super::state::App;
use crate::nav::NavEvent;
use iced::keyboard::{Key, key::Named};
use std::time::{Duration, Instant};
use tracing::{debug, info};

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Tick(now) => self.handle_tick(now, &mut effects),
            Message::TogglePlayPause => self.playback.toggle(),
            Message::SeekTo(position) => self.handle_seek(position, &mut effects),
            Message::ChapterClicked(number) => self.handle_chapter_clicked(number, &mut effects),
            Message::ScrollEarlier => {
                let event = self.nav.scroll_earlier();
                self.apply_nav_event(event, &mut effects);
            }
            Message::ScrollLater => {
                let event = self.nav.scroll_later();
                self.apply_nav_event(event, &mut effects);
            }
            Message::WindowResized { width, .. } => {
                self.handle_window_resized(width, &mut effects)
            }
            Message::ResizeSettled { generation } => {
                self.handle_resize_settled(generation, &mut effects)
            }
            Message::KeyPressed { key, .. } => self.handle_key_pressed(key, &mut effects),
        }

        effects
    }

    fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if self.playback.tick(now) {
            let event = self.nav.on_time_advance(self.playback.position());
            self.apply_nav_event(event, effects);
        }
    }

    fn handle_seek(&mut self, position: f64, effects: &mut Vec<Effect>) {
        self.playback.seek(position);
        info!(position = self.playback.position(), "Seeking");
        // Re-derive the highlight immediately instead of waiting for a tick.
        let event = self.nav.on_time_advance(self.playback.position());
        self.apply_nav_event(event, effects);
    }

    fn handle_chapter_clicked(&mut self, number: usize, effects: &mut Vec<Effect>) {
        let target = self.nav.index().get(number).map(|chapter| chapter.time);
        if let Some(time) = target {
            debug!(chapter = number, time, "Chapter clicked");
            self.handle_seek(time, effects);
        }
    }

    fn handle_window_resized(&mut self, width: f32, effects: &mut Vec<Effect>) {
        self.overlay.window_width = width;
        self.overlay.resize_generation = self.overlay.resize_generation.wrapping_add(1);
        debug!(
            width,
            generation = self.overlay.resize_generation,
            "Window resized, scheduling strip settle"
        );
        effects.push(Effect::SettleResize {
            generation: self.overlay.resize_generation,
            delay: Duration::from_millis(self.config.resize_settle_ms),
        });
    }

    fn handle_resize_settled(&mut self, generation: u64, effects: &mut Vec<Effect>) {
        if generation != self.overlay.resize_generation {
            debug!(generation, "Ignoring stale resize settle");
            return;
        }
        let (viewport, inner) = self.overlay_geometry();
        let event = self.nav.on_resize(viewport, inner);
        self.apply_nav_event(event, effects);
    }

    fn handle_key_pressed(&mut self, key: Key, effects: &mut Vec<Effect>) {
        match key.as_ref() {
            Key::Named(Named::Space) => self.playback.toggle(),
            Key::Named(Named::ArrowLeft) => {
                let event = self.nav.scroll_earlier();
                self.apply_nav_event(event, effects);
            }
            Key::Named(Named::ArrowRight) => {
                let event = self.nav.scroll_later();
                self.apply_nav_event(event, effects);
            }
            Key::Character("q") => effects.push(Effect::Quit),
            _ => {}
        }
    }

    /// Apply a controller notification to the view state and queue the
    /// matching side effect. `None` (no change) queues nothing, so unchanged
    /// ticks never disturb a manual scroll.
    fn apply_nav_event(&mut self, event: Option<NavEvent>, effects: &mut Vec<Effect>) {
        match event {
            Some(NavEvent::SelectionChanged { chapter, offset }) => {
                self.overlay.active_chapter = chapter;
                self.overlay.strip_offset = offset;
                effects.push(Effect::ScrollStrip(offset));
            }
            Some(NavEvent::OffsetChanged { offset }) => {
                self.overlay.strip_offset = offset;
                effects.push(Effect::ScrollStrip(offset));
            }
            None => {}
        }
    }
}
