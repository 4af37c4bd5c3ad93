use super::Effect;
use super::super::messages::Message;
use super::super::state::{App, STRIP_SCROLL_ID};
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollStrip(offset) => {
                // The core reports offsets as negative translations; the
                // scrollable wants the distance scrolled from the left edge.
                scrollable::scroll_to(
                    STRIP_SCROLL_ID.clone(),
                    AbsoluteOffset { x: -offset, y: 0.0 },
                )
            }
            Effect::SettleResize { generation, delay } => Task::perform(
                async move {
                    tokio::time::sleep(delay).await;
                    generation
                },
                |generation| Message::ResizeSettled { generation },
            ),
            Effect::Quit => iced::exit(),
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(iced::window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
