//! Subtitle Track Selection
//!
//! Builds an exclusive-choice menu from the device's text tracks and keeps
//! at most one track `showing`. The "off" entry is just a key that matches
//! no track language.

use fos_media::TextTrackMode;

use crate::device::MediaDevice;
use crate::ui::{MenuEntry, SubtitleKey, UiState};

/// Subtitle track selector
#[derive(Debug)]
pub struct SubtitleSelector {
    off_label: String,
    idle_mode: TextTrackMode,
    close_on_select: bool,
    built: bool,
}

impl SubtitleSelector {
    pub fn new(off_label: &str, idle_mode: TextTrackMode, close_on_select: bool) -> Self {
        Self {
            off_label: off_label.to_string(),
            idle_mode,
            close_on_select,
            built: false,
        }
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Build the menu and park every track in the idle mode. Runs once.
    pub fn build<D: MediaDevice + ?Sized>(&mut self, device: &mut D, ui: &mut UiState) {
        if self.built {
            return;
        }

        let mut entries = vec![MenuEntry {
            key: SubtitleKey::Off,
            label: self.off_label.clone(),
            active: false,
        }];
        entries.extend(device.text_tracks().iter().map(|track| MenuEntry {
            key: SubtitleKey::for_language(&track.language),
            label: track.label.clone(),
            active: false,
        }));

        let count = device.text_tracks().len();
        for index in 0..count {
            device.set_text_track_mode(index, self.idle_mode);
        }

        tracing::debug!(
            "Built subtitle menu with {} tracks ({})",
            count,
            self.idle_mode.as_str(),
        );
        ui.subtitles.entries = entries;
        self.built = true;
    }

    /// Select the menu entry at `index`
    pub fn select<D: MediaDevice + ?Sized>(&self, device: &mut D, ui: &mut UiState, index: usize) {
        let Some(key) = ui.subtitles.entries.get(index).map(|e| e.key.clone()) else {
            tracing::debug!("No subtitle menu entry {}", index);
            return;
        };

        for entry in &mut ui.subtitles.entries {
            entry.active = false;
        }

        let modes: Vec<TextTrackMode> = {
            let mut shown = false;
            device.text_tracks().iter().map(|track| {
                if !shown && key.matches(&track.language) {
                    shown = true;
                    TextTrackMode::Showing
                } else {
                    TextTrackMode::Hidden
                }
            }).collect()
        };
        let matched = modes.contains(&TextTrackMode::Showing);
        for (track, mode) in modes.into_iter().enumerate() {
            device.set_text_track_mode(track, mode);
        }

        if matched || key == SubtitleKey::Off {
            ui.subtitles.entries[index].active = true;
        }
        if self.close_on_select {
            ui.subtitles.open = false;
        }
    }

    /// Select the first entry carrying `key`
    pub fn select_track<D: MediaDevice + ?Sized>(&self, device: &mut D, ui: &mut UiState, key: &SubtitleKey) {
        match ui.subtitles.entries.iter().position(|e| &e.key == key) {
            Some(index) => self.select(device, ui, index),
            None => tracing::debug!("No subtitle menu entry for {:?}", key),
        }
    }

    /// Show or hide the menu
    pub fn toggle_menu(&self, ui: &mut UiState) {
        ui.subtitles.open = !ui.subtitles.open;
    }
}
