//! UI State Sink
//!
//! Everything the renderer draws the controls from. Written only by the
//! control surface's intent and notification handlers.

use serde::Serialize;

/// Progress bar state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgressState {
    /// `<progress value>`
    pub value: f64,
    /// `<progress max>`; `None` until a usable duration has been seen
    pub max: Option<f64>,
    /// Fallback bar width in whole percent
    pub percent: Option<u32>,
}

/// Subtitle menu key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "language", rename_all = "lowercase")]
pub enum SubtitleKey {
    /// Matches no track
    Off,
    Language(String),
}

impl SubtitleKey {
    /// Key for a track language; an undefined language maps to `Off`
    pub fn for_language(language: &str) -> Self {
        if language.is_empty() {
            Self::Off
        } else {
            Self::Language(language.to_string())
        }
    }

    /// Element id the renderer gives the menu button
    pub fn element_id(&self) -> String {
        match self {
            Self::Off => "subtitles-off".to_string(),
            Self::Language(lang) => format!("subtitles-{}", lang),
        }
    }

    pub fn matches(&self, language: &str) -> bool {
        matches!(self, Self::Language(lang) if lang == language)
    }
}

/// Subtitle menu entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub key: SubtitleKey,
    pub label: String,
    pub active: bool,
}

/// Subtitle menu, in display order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubtitleMenu {
    pub open: bool,
    pub entries: Vec<MenuEntry>,
}

impl SubtitleMenu {
    pub fn active_entry(&self) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.active)
    }

    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|e| e.active).count()
    }
}

/// UI state sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiState {
    pub progress: ProgressState,
    /// Last fullscreen state reported by a change notification
    pub fullscreen: bool,
    /// Whether the fullscreen control should be shown at all
    pub fullscreen_available: bool,
    /// Device volume rounded to the nearest 0.1
    pub volume: f64,
    pub muted: bool,
    pub paused: bool,
    pub subtitles: SubtitleMenu,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            progress: ProgressState::default(),
            fullscreen: false,
            fullscreen_available: false,
            volume: 1.0,
            muted: false,
            paused: true,
            subtitles: SubtitleMenu::default(),
        }
    }
}

impl UiState {
    /// `data-state` attribute for the play/pause button
    pub fn play_state(&self) -> &'static str {
        if self.paused { "play" } else { "pause" }
    }

    /// `data-state` attribute for the mute button
    pub fn mute_state(&self) -> &'static str {
        if self.muted { "unmute" } else { "mute" }
    }

    /// Serialize for a renderer bridge
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Round to the nearest tenth
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
