//! Chapter manifest loading.
//!
//! A manifest is a small JSON document describing one media item:
//! `{ "title": ..., "duration": seconds, "chapters": [{ "time", "label" }] }`.
//! It stands in for the options object a hosting player would hand to the
//! overlay. Loading happens once at startup; the navigation core filters and
//! indexes the chapters itself, so no validation beyond basic shape checks
//! happens here.

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// A named point in playback time used as a navigation target.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Chapter {
    /// Start time in seconds from the beginning of the media.
    pub time: f64,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChapterManifest {
    #[serde(default)]
    pub title: String,
    /// Total media duration in seconds.
    pub duration: f64,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// Read and parse a chapter manifest from disk.
pub fn load_manifest(path: &Path) -> Result<ChapterManifest> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest at {}", path.display()))?;
    let manifest: ChapterManifest = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse manifest at {}", path.display()))?;
    ensure!(
        manifest.duration.is_finite() && manifest.duration >= 0.0,
        "Manifest duration must be a non-negative number, got {}",
        manifest.duration
    );
    info!(
        title = %manifest.title,
        duration = manifest.duration,
        chapters = manifest.chapters.len(),
        "Loaded chapter manifest"
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_manifest() {
        let json = r#"{
            "title": "Sintel",
            "duration": 888.0,
            "chapters": [
                { "time": 0, "label": "Opening" },
                { "time": 103.5, "label": "The Dragon" }
            ]
        }"#;
        let manifest: ChapterManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.title, "Sintel");
        assert_eq!(manifest.duration, 888.0);
        assert_eq!(manifest.chapters.len(), 2);
        assert_eq!(manifest.chapters[1].time, 103.5);
        assert_eq!(manifest.chapters[1].label, "The Dragon");
    }

    #[test]
    fn title_and_chapters_are_optional() {
        let manifest: ChapterManifest = serde_json::from_str(r#"{ "duration": 60 }"#).unwrap();
        assert!(manifest.title.is_empty());
        assert!(manifest.chapters.is_empty());
    }

    #[test]
    fn missing_duration_is_an_error() {
        let parsed = serde_json::from_str::<ChapterManifest>(r#"{ "chapters": [] }"#);
        assert!(parsed.is_err());
    }
}
