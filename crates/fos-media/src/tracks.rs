//! Media Tracks
//!
//! TextTrack and TextTrackList.

use serde::{Deserialize, Serialize};

/// Text track kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextTrackKind {
    #[default]
    Subtitles,
    Captions,
}

/// Text track mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTrackMode {
    #[default]
    Disabled,
    Hidden,
    Showing,
}

impl TextTrackMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Hidden => "hidden",
            Self::Showing => "showing",
        }
    }
}

/// Text track
///
/// An empty `language` stands for an undefined `srclang`.
#[derive(Debug, Clone)]
pub struct TextTrack {
    pub kind: TextTrackKind,
    pub label: String,
    pub language: String,
    pub mode: TextTrackMode,
}

impl TextTrack {
    pub fn new(kind: TextTrackKind, label: &str, language: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
            language: language.to_string(),
            mode: TextTrackMode::Disabled,
        }
    }

    /// Subtitles track, the common case for `<track kind="subtitles">`
    pub fn subtitles(label: &str, language: &str) -> Self {
        Self::new(TextTrackKind::Subtitles, label, language)
    }

    pub fn has_language(&self) -> bool {
        !self.language.is_empty()
    }
}

/// Track list, in document order
#[derive(Debug, Clone, Default)]
pub struct TextTrackList {
    tracks: Vec<TextTrack>,
}

impl TextTrackList {
    pub fn new() -> Self { Self::default() }
    pub fn length(&self) -> usize { self.tracks.len() }
    pub fn is_empty(&self) -> bool { self.tracks.is_empty() }
    pub fn get(&self, index: usize) -> Option<&TextTrack> { self.tracks.get(index) }
    pub fn get_mut(&mut self, index: usize) -> Option<&mut TextTrack> { self.tracks.get_mut(index) }
    pub fn as_slice(&self) -> &[TextTrack] { &self.tracks }

    pub fn add(&mut self, track: TextTrack) {
        self.tracks.push(track);
    }

    /// Number of tracks currently `showing`
    pub fn showing_count(&self) -> usize {
        self.tracks.iter().filter(|t| t.mode == TextTrackMode::Showing).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextTrack> {
        self.tracks.iter()
    }
}

impl FromIterator<TextTrack> for TextTrackList {
    fn from_iter<I: IntoIterator<Item = TextTrack>>(iter: I) -> Self {
        Self { tracks: iter.into_iter().collect() }
    }
}
