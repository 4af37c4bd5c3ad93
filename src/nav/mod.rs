//! The navigation core: pure time-to-chapter mapping and scroll windowing.
//!
//! Nothing in this module depends on the rendering layer or the iced runtime,
//! so the whole state machine is testable with plain unit tests.

mod chapter_index;
mod controller;
mod scroll_window;

pub use chapter_index::ChapterIndex;
pub use controller::{NavEvent, NavigationController};
pub use scroll_window::ScrollWindow;
