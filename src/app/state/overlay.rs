use super::OVERLAY_MARGIN_PX;

/// View-facing navigation outputs plus window geometry.
///
/// `active_chapter` and `strip_offset` are snapshots of the controller's last
/// emitted events; the view renders from these instead of reaching into the
/// scroll window, keeping the rendering layer a pure downstream consumer.
#[derive(Debug, Clone)]
pub struct OverlayState {
    pub window_width: f32,
    pub active_chapter: Option<usize>,
    pub strip_offset: f32,
    /// Bumped on every resize; settle tasks carrying a stale generation are
    /// ignored, so only the latest resize re-settles the strip.
    pub resize_generation: u64,
}

impl OverlayState {
    pub fn new(window_width: f32) -> Self {
        OverlayState {
            window_width,
            active_chapter: None,
            strip_offset: 0.0,
            resize_generation: 0,
        }
    }

    /// `(viewport, inner track)` widths derived from the window width. The
    /// inner track is narrower than the viewport by the two arrow buttons.
    pub fn geometry(&self, arrow_width: f32) -> (f32, f32) {
        let viewport = (self.window_width - 2.0 * OVERLAY_MARGIN_PX).max(0.0);
        let inner = (viewport - 2.0 * arrow_width.max(0.0)).max(0.0);
        (viewport, inner)
    }
}
