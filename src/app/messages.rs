use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    TogglePlayPause,
    /// Jump to a position in seconds and resume playback.
    SeekTo(f64),
    /// A chapter button was clicked (1-based chapter number).
    ChapterClicked(usize),
    /// "Show earlier chapters" arrow.
    ScrollEarlier,
    /// "Show later chapters" arrow.
    ScrollLater,
    WindowResized {
        width: f32,
        height: f32,
    },
    /// The resize settle delay elapsed for the given generation.
    ResizeSettled {
        generation: u64,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Tick(Instant),
}
