mod reducer;
mod runtime;

use super::messages::Message;
use super::state::App;
use iced::time;
use iced::{Subscription, Task, event};
use std::time::Duration;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    /// Scroll the horizontal strip to the given core offset (`<= 0`).
    ScrollStrip(f32),
    /// Schedule the post-resize settle for this generation.
    SettleResize { generation: u64, delay: Duration },
    Quit,
}

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> =
            vec![event::listen_with(runtime::runtime_event_to_message)];

        if app.playback.is_playing() {
            let cadence = Duration::from_millis(app.config.tick_ms.max(16));
            subscriptions.push(time::every(cadence).map(Message::Tick));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
