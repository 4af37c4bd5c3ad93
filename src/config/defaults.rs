/// Minimum width of one chapter button; the viewport width divided by this
/// gives the number of chapters shown at once.
pub(crate) fn default_min_item_width() -> f32 {
    220.0
}

pub(crate) fn default_arrow_width() -> f32 {
    36.0
}

/// Delay before the strip re-settles on the active chapter after a resize.
pub(crate) fn default_resize_settle_ms() -> u64 {
    300
}

pub(crate) fn default_tick_ms() -> u64 {
    250
}

pub(crate) fn default_playback_rate() -> f64 {
    1.0
}

pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    480.0
}

pub(crate) fn default_skin_background() -> crate::config::SkinColor {
    crate::config::SkinColor {
        r: 0.10,
        g: 0.10,
        b: 0.10,
        a: 1.0,
    }
}

pub(crate) fn default_skin_text() -> crate::config::SkinColor {
    crate::config::SkinColor {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    }
}

pub(crate) fn default_skin_background_active() -> crate::config::SkinColor {
    crate::config::SkinColor {
        r: 0.15,
        g: 0.15,
        b: 0.15,
        a: 1.0,
    }
}

pub(crate) fn default_skin_text_active() -> crate::config::SkinColor {
    crate::config::SkinColor {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    }
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
