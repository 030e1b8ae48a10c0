//! Media Elements
//!
//! HTMLMediaElement playback state and the notifications it raises.
//!
//! Notifications are queued only for event kinds that have a registered
//! listener and are drained by the host's dispatch loop via [`HTMLMediaElement::take_events`].

use std::collections::HashSet;

use crate::tracks::{TextTrack, TextTrackList, TextTrackMode};
use crate::MediaError;

/// Ready state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyState {
    #[default]
    HaveNothing = 0,
    HaveMetadata = 1,
    HaveCurrentData = 2,
    HaveFutureData = 3,
    HaveEnoughData = 4,
}

/// Media notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    LoadedMetadata,
    TimeUpdate,
    Play,
    Pause,
    Ended,
    VolumeChange,
}

impl MediaEvent {
    pub const ALL: [MediaEvent; 6] = [
        MediaEvent::LoadedMetadata,
        MediaEvent::TimeUpdate,
        MediaEvent::Play,
        MediaEvent::Pause,
        MediaEvent::Ended,
        MediaEvent::VolumeChange,
    ];

    /// DOM event name
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadedMetadata => "loadedmetadata",
            Self::TimeUpdate => "timeupdate",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Ended => "ended",
            Self::VolumeChange => "volumechange",
        }
    }
}

/// Base media element
#[derive(Debug)]
pub struct HTMLMediaElement {
    // Source
    pub src: String,

    // State
    pub ready_state: ReadyState,

    // Playback
    pub current_time: f64,
    pub duration: f64,
    pub paused: bool,
    pub ended: bool,
    pub playback_rate: f64,

    // Volume
    pub volume: f64,
    pub muted: bool,

    // Tracks
    pub text_tracks: TextTrackList,

    listeners: HashSet<MediaEvent>,
    pending: Vec<MediaEvent>,
}

impl HTMLMediaElement {
    pub fn new() -> Self {
        Self {
            src: String::new(),
            ready_state: ReadyState::HaveNothing,
            current_time: 0.0,
            duration: f64::NAN,
            paused: true,
            ended: false,
            playback_rate: 1.0,
            volume: 1.0,
            muted: false,
            text_tracks: TextTrackList::new(),
            listeners: HashSet::new(),
            pending: Vec::new(),
        }
    }

    /// Create from URL
    pub fn from_url(src: &str) -> Self {
        let mut media = Self::new();
        media.src = src.to_string();
        media
    }

    /// Append a `<track>` child
    pub fn add_text_track(&mut self, track: TextTrack) {
        self.text_tracks.add(track);
    }

    pub fn add_event_listener(&mut self, event: MediaEvent) {
        self.listeners.insert(event);
    }

    pub fn has_listener(&self, event: MediaEvent) -> bool {
        self.listeners.contains(&event)
    }

    /// Drain queued notifications in dispatch order
    pub fn take_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.pending)
    }

    fn fire(&mut self, event: MediaEvent) {
        if self.listeners.contains(&event) {
            self.pending.push(event);
        }
    }

    /// Metadata arrived. `duration` may be NaN on constrained platforms.
    pub fn load_metadata(&mut self, duration: f64) {
        self.duration = duration;
        if self.ready_state < ReadyState::HaveMetadata {
            self.ready_state = ReadyState::HaveMetadata;
        }
        tracing::debug!("Metadata loaded for {} (duration {})", self.src, duration);
        self.fire(MediaEvent::LoadedMetadata);
    }

    /// Enough data buffered to start playback
    pub fn set_ready_state(&mut self, state: ReadyState) {
        self.ready_state = state;
    }

    /// Play media
    pub fn play(&mut self) -> Result<(), MediaError> {
        if self.ready_state < ReadyState::HaveFutureData {
            return Err(MediaError::InvalidState("Not enough data".into()));
        }
        if self.ended {
            self.current_time = 0.0;
            self.ended = false;
        }
        if self.paused {
            self.paused = false;
            self.fire(MediaEvent::Play);
        }
        Ok(())
    }

    /// Pause media
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.fire(MediaEvent::Pause);
        }
    }

    /// Seek to time
    pub fn seek(&mut self, time: f64) {
        let upper = if self.duration.is_finite() { self.duration } else { f64::MAX };
        self.current_time = time.clamp(0.0, upper);
        if self.current_time < upper {
            self.ended = false;
        }
        self.fire(MediaEvent::TimeUpdate);
    }

    /// Set volume; values outside `[0, 1]` are rejected
    pub fn set_volume(&mut self, volume: f64) -> Result<(), MediaError> {
        if !(0.0..=1.0).contains(&volume) {
            return Err(MediaError::IndexSize(volume));
        }
        if self.volume != volume {
            self.volume = volume;
            self.fire(MediaEvent::VolumeChange);
        }
        Ok(())
    }

    pub fn set_muted(&mut self, muted: bool) {
        if self.muted != muted {
            self.muted = muted;
            self.fire(MediaEvent::VolumeChange);
        }
    }

    pub fn set_text_track_mode(&mut self, index: usize, mode: TextTrackMode) {
        if let Some(track) = self.text_tracks.get_mut(index) {
            track.mode = mode;
        }
    }

    /// Advance the playback clock by `elapsed` seconds
    pub fn tick(&mut self, elapsed: f64) {
        if self.paused {
            return;
        }
        self.current_time += elapsed * self.playback_rate;
        if self.duration.is_finite() && self.current_time >= self.duration {
            self.current_time = self.duration;
            self.fire(MediaEvent::TimeUpdate);
            self.paused = true;
            self.ended = true;
            self.fire(MediaEvent::Pause);
            self.fire(MediaEvent::Ended);
        } else {
            self.fire(MediaEvent::TimeUpdate);
        }
    }
}

impl Default for HTMLMediaElement {
    fn default() -> Self {
        Self::new()
    }
}
