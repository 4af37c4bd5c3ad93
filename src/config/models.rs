use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default)]
    pub chapter_style: ChapterStyle,
    #[serde(default = "crate::config::defaults::default_min_item_width")]
    pub min_item_width: f32,
    #[serde(default = "crate::config::defaults::default_arrow_width")]
    pub arrow_width: f32,
    #[serde(default = "crate::config::defaults::default_resize_settle_ms")]
    pub resize_settle_ms: u64,
    #[serde(default = "crate::config::defaults::default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "crate::config::defaults::default_playback_rate")]
    pub playback_rate: f64,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_skin_background")]
    pub skin_background: SkinColor,
    #[serde(default = "crate::config::defaults::default_skin_text")]
    pub skin_text: SkinColor,
    #[serde(default = "crate::config::defaults::default_skin_background_active")]
    pub skin_background_active: SkinColor,
    #[serde(default = "crate::config::defaults::default_skin_text_active")]
    pub skin_text_active: SkinColor,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::default(),
            chapter_style: ChapterStyle::default(),
            min_item_width: crate::config::defaults::default_min_item_width(),
            arrow_width: crate::config::defaults::default_arrow_width(),
            resize_settle_ms: crate::config::defaults::default_resize_settle_ms(),
            tick_ms: crate::config::defaults::default_tick_ms(),
            playback_rate: crate::config::defaults::default_playback_rate(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            skin_background: crate::config::defaults::default_skin_background(),
            skin_text: crate::config::defaults::default_skin_text(),
            skin_background_active: crate::config::defaults::default_skin_background_active(),
            skin_text_active: crate::config::defaults::default_skin_text_active(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Night
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Which of the three chapter controls to render.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ChapterStyle {
    Horizontal,
    Dropdown,
    ProgressBar,
}

impl Default for ChapterStyle {
    fn default() -> Self {
        ChapterStyle::Horizontal
    }
}

impl std::fmt::Display for ChapterStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ChapterStyle::Horizontal => "Horizontal",
            ChapterStyle::Dropdown => "Dropdown",
            ChapterStyle::ProgressBar => "Progress bar",
        };
        write!(f, "{}", label)
    }
}

/// One skin color, rgba components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, serde::Deserialize, serde::Serialize)]
pub struct SkinColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
