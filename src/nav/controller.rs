//! Navigation controller: composes the chapter index and the scroll window.
//!
//! The controller owns all navigation state and communicates with the
//! rendering layer exclusively through [`NavEvent`] values returned from its
//! methods; the view never reaches into the window or index to mutate them.
//! It is `Idle` until a non-empty chapter set loads, then `Tracking`.

use crate::manifest::Chapter;
use crate::nav::{ChapterIndex, ScrollWindow};
use tracing::{debug, info};

/// Notification for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    /// The active chapter changed. Carries the new 1-based chapter number
    /// (`None` while playback precedes the first chapter) and the strip
    /// translation to apply.
    SelectionChanged { chapter: Option<usize>, offset: f32 },
    /// The strip translation changed without a selection change (manual
    /// scroll or a resize re-settle).
    OffsetChanged { offset: f32 },
}

#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    index: ChapterIndex,
    window: ScrollWindow,
    current: Option<usize>,
    min_item_width: f32,
}

impl NavigationController {
    pub fn new(min_item_width: f32) -> Self {
        NavigationController {
            min_item_width,
            ..NavigationController::default()
        }
    }

    /// `true` once a non-empty chapter set is loaded. While idle the
    /// controller does no work and the owning UI stays hidden.
    pub fn is_tracking(&self) -> bool {
        !self.index.is_empty()
    }

    pub fn index(&self) -> &ChapterIndex {
        &self.index
    }

    pub fn window(&self) -> &ScrollWindow {
        &self.window
    }

    /// The 1-based number of the currently highlighted chapter, if any.
    pub fn active_chapter(&self) -> Option<usize> {
        self.current
    }

    /// Rebuild the index for a new chapter set and reset all derived state.
    pub fn load_chapters(
        &mut self,
        chapters: &[Chapter],
        duration: f64,
        viewport_width: f32,
        inner_width: f32,
    ) {
        self.index = ChapterIndex::build(chapters, duration);
        self.window = ScrollWindow::configure(
            viewport_width,
            inner_width,
            self.min_item_width,
            self.index.len(),
        );
        self.current = None;
        info!(
            chapters = self.index.len(),
            items_displayed = self.window.items_displayed(),
            has_overflow = self.window.has_overflow(),
            tracking = self.is_tracking(),
            "Chapter index rebuilt"
        );
    }

    /// Process a playback-time sample. Emits only when the active chapter
    /// actually changes; repeated samples inside one chapter are no-ops so a
    /// manual scroll is not jittered away by every tick.
    pub fn on_time_advance(&mut self, position: f64) -> Option<NavEvent> {
        if !self.is_tracking() {
            return None;
        }
        let Some(number) = self.index.active_chapter(position) else {
            // Before the first chapter: clear the highlight once, leave the
            // scroll offset untouched.
            if self.current.take().is_some() {
                return Some(NavEvent::SelectionChanged {
                    chapter: None,
                    offset: self.window.pixel_offset(),
                });
            }
            return None;
        };
        if self.current == Some(number) {
            return None;
        }
        let previous = self.current.unwrap_or(0);
        self.window.follow_chapter(number, previous);
        self.current = Some(number);
        debug!(
            chapter = number,
            previous,
            step = self.window.step_index(),
            "Active chapter changed"
        );
        Some(NavEvent::SelectionChanged {
            chapter: Some(number),
            offset: self.window.pixel_offset(),
        })
    }

    /// Show earlier chapters (user command). Independent of chapter tracking:
    /// the strip may temporarily show chapters other than the active one.
    pub fn scroll_earlier(&mut self) -> Option<NavEvent> {
        if !self.is_tracking() {
            return None;
        }
        self.window.step_left();
        Some(NavEvent::OffsetChanged {
            offset: self.window.pixel_offset(),
        })
    }

    /// Show later chapters (user command).
    pub fn scroll_later(&mut self) -> Option<NavEvent> {
        if !self.is_tracking() {
            return None;
        }
        self.window.step_right();
        Some(NavEvent::OffsetChanged {
            offset: self.window.pixel_offset(),
        })
    }

    /// Re-derive the window after the viewport geometry settled. The previous
    /// step index is invalid under the new geometry, so the offset for the
    /// active chapter is recomputed through the follow rule rather than
    /// carried over.
    pub fn on_resize(&mut self, viewport_width: f32, inner_width: f32) -> Option<NavEvent> {
        self.window = ScrollWindow::configure(
            viewport_width,
            inner_width,
            self.min_item_width,
            self.index.len(),
        );
        if !self.is_tracking() {
            return None;
        }
        if let Some(number) = self.current {
            self.window.follow_chapter(number, number);
        }
        Some(NavEvent::OffsetChanged {
            offset: self.window.pixel_offset(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapters(times: &[f64]) -> Vec<Chapter> {
        times
            .iter()
            .enumerate()
            .map(|(i, &time)| Chapter {
                time,
                label: format!("Chapter {}", i + 1),
            })
            .collect()
    }

    /// Ten chapters, four displayed: the geometry from the windowing tests.
    fn tracking_controller() -> NavigationController {
        let mut controller = NavigationController::new(220.0);
        let times: Vec<f64> = (0..10).map(|i| i as f64 * 30.0).collect();
        controller.load_chapters(&chapters(&times), 300.0, 900.0, 850.0);
        controller
    }

    #[test]
    fn idle_controller_emits_nothing() {
        let mut controller = NavigationController::new(220.0);
        assert!(!controller.is_tracking());
        assert_eq!(controller.on_time_advance(10.0), None);
        assert_eq!(controller.scroll_earlier(), None);
        assert_eq!(controller.scroll_later(), None);

        controller.load_chapters(&chapters(&[400.0]), 300.0, 900.0, 850.0);
        assert!(!controller.is_tracking(), "all-invalid input stays idle");
    }

    #[test]
    fn loading_chapters_starts_tracking() {
        let controller = tracking_controller();
        assert!(controller.is_tracking());
        assert_eq!(controller.active_chapter(), None);
        assert_eq!(controller.index().len(), 10);
    }

    #[test]
    fn selection_changes_emit_once_per_chapter() {
        let mut controller = tracking_controller();

        let event = controller.on_time_advance(0.0).unwrap();
        assert_eq!(
            event,
            NavEvent::SelectionChanged {
                chapter: Some(1),
                offset: 0.0
            }
        );

        // Further samples inside chapter 1 are no-ops.
        assert_eq!(controller.on_time_advance(5.0), None);
        assert_eq!(controller.on_time_advance(29.9), None);

        let event = controller.on_time_advance(30.0).unwrap();
        assert!(matches!(
            event,
            NavEvent::SelectionChanged {
                chapter: Some(2),
                ..
            }
        ));
    }

    #[test]
    fn playback_stair_steps_the_window_forward() {
        let mut controller = tracking_controller();
        let item_width = controller.window().item_width();

        let mut offsets = Vec::new();
        for position in [0.0, 30.0, 60.0, 90.0, 120.0] {
            if let Some(NavEvent::SelectionChanged { offset, .. }) =
                controller.on_time_advance(position)
            {
                offsets.push(offset);
            }
        }
        // 1 -> 2 resets, then each change advances one item width.
        assert_eq!(
            offsets,
            vec![0.0, 0.0, -item_width, -2.0 * item_width, -3.0 * item_width]
        );
    }

    #[test]
    fn scrubbing_back_to_the_first_chapter_resets_selection_and_window() {
        let mut controller = tracking_controller();
        for position in [0.0, 30.0, 60.0, 90.0, 120.0] {
            controller.on_time_advance(position);
        }
        assert_eq!(controller.active_chapter(), Some(5));

        let event = controller.on_time_advance(3.0).unwrap();
        assert_eq!(
            event,
            NavEvent::SelectionChanged {
                chapter: Some(1),
                offset: 0.0
            }
        );
        assert_eq!(controller.window().step_index(), 0);
    }

    #[test]
    fn entering_the_pre_chapter_region_clears_the_highlight_once() {
        let mut controller = NavigationController::new(220.0);
        controller.load_chapters(&chapters(&[10.0, 20.0]), 60.0, 900.0, 850.0);

        assert_eq!(controller.on_time_advance(5.0), None);
        controller.on_time_advance(15.0);
        assert_eq!(controller.active_chapter(), Some(1));

        let event = controller.on_time_advance(2.0).unwrap();
        assert!(matches!(
            event,
            NavEvent::SelectionChanged { chapter: None, .. }
        ));
        assert_eq!(controller.active_chapter(), None);
        // Only once; staying in the region is silent.
        assert_eq!(controller.on_time_advance(1.0), None);
    }

    #[test]
    fn manual_scroll_is_not_overridden_until_the_next_change() {
        let mut controller = tracking_controller();
        controller.on_time_advance(0.0);

        let event = controller.scroll_later().unwrap();
        let item_width = controller.window().item_width();
        assert_eq!(event, NavEvent::OffsetChanged { offset: -item_width });

        // Same chapter, no event, offset untouched.
        assert_eq!(controller.on_time_advance(10.0), None);
        assert_eq!(controller.window().pixel_offset(), -item_width);
    }

    #[test]
    fn resize_recomputes_the_offset_for_the_active_chapter() {
        let mut controller = tracking_controller();
        for position in [0.0, 30.0, 60.0, 90.0] {
            controller.on_time_advance(position);
        }
        assert_eq!(controller.window().step_index(), 2);

        let event = controller.on_resize(1400.0, 1350.0).unwrap();
        // Six slots now fit; the follow rule re-applies from a fresh window.
        assert_eq!(controller.window().items_displayed(), 6);
        let expected = -controller.window().item_width();
        assert_eq!(event, NavEvent::OffsetChanged { offset: expected });
        assert_eq!(controller.active_chapter(), Some(4));
    }

    #[test]
    fn reload_clears_selection_memory() {
        let mut controller = tracking_controller();
        controller.on_time_advance(45.0);
        assert_eq!(controller.active_chapter(), Some(2));

        controller.load_chapters(&chapters(&[5.0]), 60.0, 900.0, 850.0);
        assert_eq!(controller.active_chapter(), None);
        assert_eq!(controller.window().step_index(), 0);
        assert!(controller.is_tracking());
    }

    #[test]
    fn random_monotone_sweep_keeps_every_invariant() {
        let mut controller = tracking_controller();
        let right_stop = -(controller.window().total_items() as f32
            - controller.window().items_displayed() as f32)
            * controller.window().item_width();

        // Deterministic LCG; no external randomness in tests.
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut position = 0.0f64;
        let mut last_active = 0usize;

        for _ in 0..500 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            position += (seed >> 33) as f64 / u32::MAX as f64; // advance by [0, 2)
            controller.on_time_advance(position);

            let active = controller.active_chapter().unwrap_or(0);
            assert!(active >= last_active, "active chapter must be monotone");
            last_active = active;

            let offset = controller.window().pixel_offset();
            assert!(offset <= 0.0 && offset >= right_stop);
            assert!(controller.window().step_index() <= controller.window().max_step_index());
        }
    }
}
