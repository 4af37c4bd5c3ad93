use super::messages::Message;
use super::state::{App, OVERLAY_MARGIN_PX, STRIP_SCROLL_ID};
use crate::config::ChapterStyle;
use crate::manifest::Chapter;
use crate::theme;
use iced::alignment::Vertical;
use iced::widget::{
    Column, Row, button, column, container, horizontal_space, pick_list, row, scrollable, slider,
    text, tooltip,
};
use iced::{Element, Length};
use std::fmt;

/// One entry of the dropdown renderer. Carries the seek target so selecting
/// an entry can jump straight to the chapter start.
#[derive(Debug, Clone, PartialEq)]
struct ChapterChoice {
    number: usize,
    time: f64,
    label: String,
}

impl fmt::Display for ChapterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number, self.label)
    }
}

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let play_label = if self.playback.is_playing() {
            "Pause"
        } else {
            "Play"
        };
        let play_button = button(play_label).on_press(Message::TogglePlayPause);

        let time_label = format!(
            "{} / {}",
            format_timestamp(self.playback.position()),
            format_timestamp(self.playback.duration())
        );

        let header = row![
            text(self.manifest.title.as_str()).size(20.0),
            horizontal_space(),
            play_button,
            text(time_label),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let seek_bar = slider(
            0.0..=self.playback.duration().max(f64::EPSILON),
            self.playback.position(),
            Message::SeekTo,
        );

        let mut content: Column<'_, Message> = column![header, seek_bar]
            .padding(OVERLAY_MARGIN_PX)
            .spacing(12)
            .height(Length::Fill);

        // Without chapters the controller stays idle and no overlay renders.
        if self.nav.is_tracking() {
            let overlay = match self.config.chapter_style {
                ChapterStyle::Horizontal => self.horizontal_strip(),
                ChapterStyle::Dropdown => self.chapter_dropdown(),
                ChapterStyle::ProgressBar => self.progress_markers(),
            };
            content = content.push(
                container(overlay)
                    .style(theme::overlay_container(&self.config))
                    .padding(4)
                    .width(Length::Fill),
            );
        }

        content.into()
    }

    /// Fixed-width chapter buttons inside a hidden-scrollbar track, framed by
    /// the two step arrows. The track is never scrolled by the user directly;
    /// the update layer drives it to the window's pixel offset.
    fn horizontal_strip(&self) -> Element<'_, Message> {
        let window = self.nav.window();

        let earlier = if window.step_index() > 0 {
            button("<").on_press(Message::ScrollEarlier)
        } else {
            button("<")
        }
        .width(Length::Fixed(self.config.arrow_width))
        .style(theme::arrow_button(&self.config));

        let later = if window.step_index() < window.max_step_index() {
            button(">").on_press(Message::ScrollLater)
        } else {
            button(">")
        }
        .width(Length::Fixed(self.config.arrow_width))
        .style(theme::arrow_button(&self.config));

        let mut items: Row<'_, Message> = Row::new();
        for (idx, chapter) in self.nav.index().chapters().iter().enumerate() {
            let number = idx + 1;
            let is_active = self.overlay.active_chapter == Some(number);
            let item = button(
                text(chapter.label.as_str())
                    .width(Length::Fill)
                    .center(),
            )
            .on_press(Message::ChapterClicked(number))
            .style(theme::chapter_item(&self.config, is_active))
            .width(if window.has_overflow() {
                Length::Fixed(window.item_width())
            } else {
                Length::FillPortion(1)
            });
            items = items.push(item);
        }

        let track = scrollable(items)
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new().width(0).scroller_width(0),
            ))
            .id(STRIP_SCROLL_ID.clone())
            .width(Length::Fill);

        row![earlier, track, later]
            .spacing(0)
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .into()
    }

    fn chapter_dropdown(&self) -> Element<'_, Message> {
        let choices: Vec<ChapterChoice> = self
            .nav
            .index()
            .chapters()
            .iter()
            .enumerate()
            .map(|(idx, chapter)| ChapterChoice {
                number: idx + 1,
                time: chapter.time,
                label: chapter.label.clone(),
            })
            .collect();

        let selected = self
            .overlay
            .active_chapter
            .and_then(|number| choices.get(number - 1).cloned());

        let picker = pick_list(choices, selected, |choice: ChapterChoice| {
            Message::SeekTo(choice.time)
        })
        .placeholder("Chapters")
        .width(Length::Fill);

        row![picker].width(Length::Fill).into()
    }

    /// Tick markers spread along a timeline row proportionally to each
    /// chapter's start time, with per-mille gaps carried by fill portions.
    fn progress_markers(&self) -> Element<'_, Message> {
        let duration = self.playback.duration().max(f64::EPSILON);
        let chapters = self.nav.index().chapters();

        let mut timeline: Row<'_, Message> = Row::new();
        let mut cursor = 0u16;
        for (idx, chapter) in chapters.iter().enumerate() {
            let number = idx + 1;
            let at = ((chapter.time / duration) * 1000.0).round() as u16;
            let gap = at.saturating_sub(cursor);
            if gap > 0 {
                timeline = timeline.push(horizontal_space().width(Length::FillPortion(gap)));
            }
            cursor = at;

            timeline = timeline.push(self.marker_button(number, chapter));
        }
        let trailing = 1000u16.saturating_sub(cursor);
        if trailing > 0 {
            timeline = timeline.push(horizontal_space().width(Length::FillPortion(trailing)));
        }

        timeline
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .into()
    }

    fn marker_button<'a>(&'a self, number: usize, chapter: &'a Chapter) -> Element<'a, Message> {
        let tick = button("")
            .on_press(Message::SeekTo(chapter.time))
            .style(theme::marker(&self.config))
            .width(Length::Fixed(4.0))
            .height(Length::Fixed(16.0));

        tooltip(
            tick,
            container(text(format!(
                "{}. {} ({})",
                number,
                chapter.label,
                format_timestamp(chapter.time)
            )))
            .style(theme::overlay_container(&self.config))
            .padding(4),
            tooltip::Position::Top,
        )
        .into()
    }
}

fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3_600;
    let minutes = (total % 3_600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
