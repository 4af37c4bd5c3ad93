use super::defaults;
use super::models::{AppConfig, ChapterStyle, LogLevel, SkinColor, ThemeMode};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    navigation: NavigationConfig,
    #[serde(default)]
    playback: PlaybackConfig,
    #[serde(default)]
    ui: UiConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            skin_background: tables.appearance.skin_background,
            skin_text: tables.appearance.skin_text,
            skin_background_active: tables.appearance.skin_background_active,
            skin_text_active: tables.appearance.skin_text_active,
            chapter_style: tables.navigation.chapter_style,
            min_item_width: tables.navigation.min_item_width,
            arrow_width: tables.navigation.arrow_width,
            resize_settle_ms: tables.navigation.resize_settle_ms,
            tick_ms: tables.playback.tick_ms,
            playback_rate: tables.playback.rate,
            window_width: tables.ui.window_width,
            window_height: tables.ui.window_height,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
                skin_background: config.skin_background,
                skin_text: config.skin_text,
                skin_background_active: config.skin_background_active,
                skin_text_active: config.skin_text_active,
            },
            navigation: NavigationConfig {
                chapter_style: config.chapter_style,
                min_item_width: config.min_item_width,
                arrow_width: config.arrow_width,
                resize_settle_ms: config.resize_settle_ms,
            },
            playback: PlaybackConfig {
                tick_ms: config.tick_ms,
                rate: config.playback_rate,
            },
            ui: UiConfig {
                window_width: config.window_width,
                window_height: config.window_height,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_skin_background")]
    skin_background: SkinColor,
    #[serde(default = "defaults::default_skin_text")]
    skin_text: SkinColor,
    #[serde(default = "defaults::default_skin_background_active")]
    skin_background_active: SkinColor,
    #[serde(default = "defaults::default_skin_text_active")]
    skin_text_active: SkinColor,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            skin_background: defaults::default_skin_background(),
            skin_text: defaults::default_skin_text(),
            skin_background_active: defaults::default_skin_background_active(),
            skin_text_active: defaults::default_skin_text_active(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct NavigationConfig {
    #[serde(default)]
    chapter_style: ChapterStyle,
    #[serde(default = "defaults::default_min_item_width")]
    min_item_width: f32,
    #[serde(default = "defaults::default_arrow_width")]
    arrow_width: f32,
    #[serde(default = "defaults::default_resize_settle_ms")]
    resize_settle_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            chapter_style: ChapterStyle::default(),
            min_item_width: defaults::default_min_item_width(),
            arrow_width: defaults::default_arrow_width(),
            resize_settle_ms: defaults::default_resize_settle_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct PlaybackConfig {
    #[serde(default = "defaults::default_tick_ms")]
    tick_ms: u64,
    #[serde(default = "defaults::default_playback_rate")]
    rate: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            tick_ms: defaults::default_tick_ms(),
            rate: defaults::default_playback_rate(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct UiConfig {
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
