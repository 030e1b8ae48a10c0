//! Media Control Surface
//!
//! Owns the device handles, the resolved capability profile, the component
//! states and the UI sink for one control surface.

use fos_media::{ChangeChannel, MediaEvent};

use crate::capability::CapabilityProfile;
use crate::config::ControlsConfig;
use crate::device::{FullscreenHost, MediaDevice};
use crate::fullscreen::FullscreenNegotiator;
use crate::playback::{self, VolumeDirection};
use crate::progress::{PointerPosition, ProgressSync};
use crate::subtitles::SubtitleSelector;
use crate::ui::{round_tenth, SubtitleKey, UiState};

/// User intent forwarded by the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum ControlIntent {
    PlayPause,
    Stop,
    Mute,
    VolumeUp,
    VolumeDown,
    /// Fraction of the progress control
    Seek(f64),
    SeekPointer(PointerPosition),
    Fullscreen,
    SubtitleMenu,
    SelectSubtitle(usize),
}

/// Custom controls for a single media element
#[derive(Debug)]
pub struct MediaControls<D, F> {
    device: D,
    fullscreen_host: F,
    config: ControlsConfig,
    profile: CapabilityProfile,
    progress: ProgressSync,
    fullscreen: FullscreenNegotiator,
    subtitles: SubtitleSelector,
    ui: UiState,
}

impl<D: MediaDevice, F: FullscreenHost> MediaControls<D, F> {
    /// Detect capabilities, subscribe to every notification and build the
    /// subtitle menu
    pub fn new(mut device: D, mut fullscreen_host: F, config: ControlsConfig) -> Self {
        let profile = CapabilityProfile::detect(&fullscreen_host);
        let fullscreen = FullscreenNegotiator::new(profile.fullscreen().copied());
        fullscreen.register(&mut fullscreen_host);

        for event in MediaEvent::ALL {
            device.add_event_listener(event);
        }

        let mut ui = UiState {
            fullscreen_available: profile.fullscreen_supported(),
            volume: round_tenth(device.volume()),
            muted: device.muted(),
            paused: device.paused() || device.ended(),
            ..UiState::default()
        };

        let mut subtitles = SubtitleSelector::new(
            &config.off_label,
            config.idle_track_mode,
            config.close_menu_on_select,
        );
        subtitles.build(&mut device, &mut ui);

        tracing::info!(
            "Media controls ready (fullscreen: {}, subtitle tracks: {})",
            profile.fullscreen_supported(),
            device.text_tracks().len(),
        );

        Self {
            device,
            fullscreen_host,
            config,
            profile,
            progress: ProgressSync::new(),
            fullscreen,
            subtitles,
            ui,
        }
    }

    pub fn with_defaults(device: D, fullscreen_host: F) -> Self {
        Self::new(device, fullscreen_host, ControlsConfig::default())
    }

    // === Accessors ===

    pub fn ui(&self) -> &UiState { &self.ui }
    pub fn profile(&self) -> &CapabilityProfile { &self.profile }
    pub fn config(&self) -> &ControlsConfig { &self.config }
    pub fn progress(&self) -> &ProgressSync { &self.progress }
    pub fn device(&self) -> &D { &self.device }
    pub fn device_mut(&mut self) -> &mut D { &mut self.device }
    pub fn fullscreen_host(&self) -> &F { &self.fullscreen_host }
    pub fn fullscreen_host_mut(&mut self) -> &mut F { &mut self.fullscreen_host }

    // === Intents ===

    pub fn toggle_play_pause(&mut self) {
        playback::toggle_play_pause(&mut self.device);
    }

    pub fn stop(&mut self) {
        playback::stop(&mut self.device, &mut self.ui);
    }

    pub fn toggle_mute(&mut self) {
        playback::toggle_mute(&mut self.device);
    }

    pub fn change_volume(&mut self, direction: VolumeDirection) {
        playback::change_volume(&mut self.device, direction);
    }

    pub fn seek_to(&mut self, fraction: f64) {
        self.progress.seek_to(&mut self.device, fraction);
    }

    pub fn seek_to_pointer(&mut self, pointer: PointerPosition) {
        self.progress.seek_to_pointer(&mut self.device, pointer);
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen.toggle(&mut self.fullscreen_host);
    }

    pub fn toggle_subtitle_menu(&mut self) {
        self.subtitles.toggle_menu(&mut self.ui);
    }

    pub fn select_subtitle(&mut self, index: usize) {
        self.subtitles.select(&mut self.device, &mut self.ui, index);
    }

    pub fn select_track(&mut self, key: &SubtitleKey) {
        self.subtitles.select_track(&mut self.device, &mut self.ui, key);
    }

    pub fn handle_intent(&mut self, intent: ControlIntent) {
        tracing::trace!("Intent {:?}", intent);
        match intent {
            ControlIntent::PlayPause => self.toggle_play_pause(),
            ControlIntent::Stop => self.stop(),
            ControlIntent::Mute => self.toggle_mute(),
            ControlIntent::VolumeUp => self.change_volume(VolumeDirection::Increase),
            ControlIntent::VolumeDown => self.change_volume(VolumeDirection::Decrease),
            ControlIntent::Seek(fraction) => self.seek_to(fraction),
            ControlIntent::SeekPointer(pointer) => self.seek_to_pointer(pointer),
            ControlIntent::Fullscreen => self.toggle_fullscreen(),
            ControlIntent::SubtitleMenu => self.toggle_subtitle_menu(),
            ControlIntent::SelectSubtitle(index) => self.select_subtitle(index),
        }
    }

    // === Notifications ===

    pub fn handle_media_event(&mut self, event: MediaEvent) {
        tracing::trace!("Dispatching {}", event.name());
        match event {
            MediaEvent::LoadedMetadata => self.progress.on_loaded_metadata(&self.device, &mut self.ui),
            MediaEvent::TimeUpdate => self.progress.on_time_update(&self.device, &mut self.ui),
            MediaEvent::Play | MediaEvent::Pause | MediaEvent::Ended => {
                self.ui.paused = self.device.paused() || self.device.ended();
            }
            MediaEvent::VolumeChange => {
                self.ui.volume = round_tenth(self.device.volume());
                self.ui.muted = self.device.muted();
            }
        }
    }

    pub fn handle_fullscreen_change(&mut self, channel: ChangeChannel) {
        self.fullscreen.on_change(channel, &self.fullscreen_host, &mut self.ui);
    }

    /// Dispatch every queued host notification. Returns how many ran.
    pub fn pump(&mut self) -> usize {
        let events = self.device.take_events();
        let changes = self.fullscreen_host.take_changes();
        let count = events.len() + changes.len();

        for event in events {
            self.handle_media_event(event);
        }
        for channel in changes {
            self.handle_fullscreen_change(channel);
        }
        count
    }
}
