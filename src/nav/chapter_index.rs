//! Chapter start-time index.
//!
//! The leaf of the navigation core: an immutable list of chapters whose start
//! times lie inside the media duration, ordered ascending. It answers "which
//! chapter is active at time T" as a pure function so the lookup can be
//! exercised directly in tests, with no view or player state involved.

use crate::manifest::Chapter;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ChapterIndex {
    chapters: Vec<Chapter>,
}

impl ChapterIndex {
    /// Build an index from a chapter list and the media duration.
    ///
    /// Chapters outside `[0, duration]` are dropped silently; that is a data
    /// quality concern, not a fault. The remainder is stable-sorted by start
    /// time, so already-ordered input keeps its supplied order and chapters
    /// sharing a start time keep their relative order. Never fails: empty or
    /// all-invalid input yields an empty index and callers hide the UI.
    pub fn build(chapters: &[Chapter], duration: f64) -> Self {
        let mut valid: Vec<Chapter> = chapters
            .iter()
            .filter(|chapter| chapter.time >= 0.0 && chapter.time <= duration)
            .cloned()
            .collect();
        valid.sort_by(|a, b| a.time.total_cmp(&b.time));

        let dropped = chapters.len() - valid.len();
        if dropped > 0 {
            debug!(dropped, duration, "Excluded chapters outside the media duration");
        }

        ChapterIndex { chapters: valid }
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// All indexed chapters, ascending by start time.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Look up a chapter by its 1-based number.
    pub fn get(&self, number: usize) -> Option<&Chapter> {
        number.checked_sub(1).and_then(|idx| self.chapters.get(idx))
    }

    /// The 1-based number of the chapter active at `time`, or `None` when the
    /// index is empty or `time` precedes the first chapter.
    ///
    /// "Active" means the last chapter whose start time is `<= time`; a time
    /// exactly on a boundary belongs to the later chapter. Times past the
    /// last chapter resolve to the last chapter, so the lookup is total over
    /// all finite non-negative inputs.
    pub fn active_chapter(&self, time: f64) -> Option<usize> {
        let count = self.chapters.partition_point(|chapter| chapter.time <= time);
        if count == 0 { None } else { Some(count) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(time: f64, label: &str) -> Chapter {
        Chapter {
            time,
            label: label.to_string(),
        }
    }

    fn sample_index() -> ChapterIndex {
        ChapterIndex::build(
            &[chapter(0.0, "One"), chapter(30.0, "Two"), chapter(90.0, "Three")],
            120.0,
        )
    }

    #[test]
    fn build_filters_to_the_media_duration() {
        let chapters = [
            chapter(-5.0, "Before start"),
            chapter(0.0, "One"),
            chapter(45.0, "Two"),
            chapter(130.0, "Past the end"),
            chapter(120.0, "Exactly the end"),
        ];
        let index = ChapterIndex::build(&chapters, 120.0);
        let labels: Vec<&str> = index
            .chapters()
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(labels, ["One", "Two", "Exactly the end"]);
    }

    #[test]
    fn build_orders_unsorted_input_by_time() {
        let index = ChapterIndex::build(
            &[chapter(60.0, "Late"), chapter(10.0, "Early"), chapter(60.0, "Late twin")],
            120.0,
        );
        let labels: Vec<&str> = index
            .chapters()
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        // Stable sort: equal start times keep their supplied order.
        assert_eq!(labels, ["Early", "Late", "Late twin"]);
    }

    #[test]
    fn empty_or_all_invalid_input_yields_an_empty_index() {
        assert!(ChapterIndex::build(&[], 120.0).is_empty());
        let index = ChapterIndex::build(&[chapter(200.0, "Too late")], 120.0);
        assert!(index.is_empty());
        assert_eq!(index.active_chapter(50.0), None);
    }

    #[test]
    fn active_chapter_is_none_before_the_first_chapter() {
        let index = ChapterIndex::build(&[chapter(10.0, "One")], 120.0);
        assert_eq!(index.active_chapter(0.0), None);
        assert_eq!(index.active_chapter(9.999), None);
        assert_eq!(index.active_chapter(10.0), Some(1));
    }

    #[test]
    fn boundary_times_resolve_to_the_later_chapter() {
        let index = sample_index();
        assert_eq!(index.active_chapter(0.0), Some(1));
        assert_eq!(index.active_chapter(29.9), Some(1));
        assert_eq!(index.active_chapter(30.0), Some(2));
        assert_eq!(index.active_chapter(89.999), Some(2));
        assert_eq!(index.active_chapter(90.0), Some(3));
    }

    #[test]
    fn lookups_past_the_last_chapter_clamp_to_it() {
        let index = sample_index();
        assert_eq!(index.active_chapter(119.0), Some(3));
        // Defined for any t >= last start, even past the media duration.
        assert_eq!(index.active_chapter(200.0), Some(3));
    }

    #[test]
    fn get_uses_one_based_numbers() {
        let index = sample_index();
        assert_eq!(index.get(0), None);
        assert_eq!(index.get(1).unwrap().label, "One");
        assert_eq!(index.get(3).unwrap().label, "Three");
        assert_eq!(index.get(4), None);
    }
}
