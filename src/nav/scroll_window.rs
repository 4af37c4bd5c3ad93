//! Scroll-window arithmetic for the horizontal chapter strip.
//!
//! A `ScrollWindow` is the single system of record for how the fixed-width
//! chapter buttons sit inside the visible stage: how many fit, which step the
//! window is on, and the pixel translation the renderer should apply. Every
//! operation is total; out-of-range requests clamp instead of erroring, since
//! the inputs come from continuous and sometimes imprecise layout
//! measurements.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollWindow {
    item_width: f32,
    items_displayed: usize,
    total_items: usize,
    step_index: usize,
    max_step_index: usize,
    has_overflow: bool,
}

impl ScrollWindow {
    /// Derive the window geometry from the current layout.
    ///
    /// `viewport_width` is the overall control width used to decide how many
    /// items to show; `inner_width` is the scroll track itself, which is
    /// slightly narrower because of the arrow buttons. The step index resets
    /// to 0: a geometry change invalidates any previous position.
    pub fn configure(
        viewport_width: f32,
        inner_width: f32,
        min_item_width: f32,
        total_items: usize,
    ) -> Self {
        let viewport = if viewport_width.is_finite() { viewport_width.max(0.0) } else { 0.0 };
        let inner = if inner_width.is_finite() { inner_width.max(0.0) } else { 0.0 };
        let min_item = if min_item_width.is_finite() { min_item_width.max(1.0) } else { 1.0 };

        let items_displayed = ((viewport / min_item).floor() as usize).max(1);
        let item_width = (inner / items_displayed as f32).floor();
        let max_step_index = total_items.saturating_sub(items_displayed);
        let has_overflow = total_items as f32 * item_width > inner;

        ScrollWindow {
            item_width,
            items_displayed,
            total_items,
            step_index: 0,
            max_step_index,
            has_overflow,
        }
    }

    /// Width of one item in pixels. Meaningful only while `has_overflow`;
    /// without overflow items stretch to equal fractions of the track.
    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    pub fn items_displayed(&self) -> usize {
        self.items_displayed
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn max_step_index(&self) -> usize {
        self.max_step_index
    }

    /// Whether the full list is wider than the track and needs scrolling.
    pub fn has_overflow(&self) -> bool {
        self.has_overflow
    }

    /// Step one item toward the start. No-op at the lower bound.
    pub fn step_left(&mut self) -> usize {
        self.step_index = self.step_index.saturating_sub(1);
        self.step_index
    }

    /// Step one item toward the end. No-op at the upper bound.
    pub fn step_right(&mut self) -> usize {
        self.step_index = (self.step_index + 1).min(self.max_step_index);
        self.step_index
    }

    /// Nudge the window after the active chapter changed. Chapter numbers are
    /// 1-based, with 0 standing for "no chapter yet".
    ///
    /// The window moves at most one step per change event, stair-stepping
    /// toward the active item rather than centering it: when the new chapter
    /// is past the first and the chapter it replaced was too, advance one
    /// clamped step; in every other case snap back to the start, including
    /// when playback scrubs back to the first chapter.
    pub fn follow_chapter(&mut self, new_chapter: usize, previous_chapter: usize) -> usize {
        if new_chapter > 1 && previous_chapter > 1 {
            self.step_right()
        } else {
            self.step_index = 0;
            0
        }
    }

    /// The translation to apply to the item list, in pixels (always `<= 0`).
    ///
    /// Clamped so the list never scrolls past its right-hand stop. Without
    /// overflow the list is shown unscrolled and the offset is forced to 0.
    pub fn pixel_offset(&self) -> f32 {
        if !self.has_overflow {
            return 0.0;
        }
        let list_width = self.total_items as f32 * self.item_width;
        let visible_width = self.items_displayed as f32 * self.item_width;
        let right_stop = -(list_width - visible_width).max(0.0);
        (-(self.step_index as f32) * self.item_width).clamp(right_stop, 0.0)
    }
}
