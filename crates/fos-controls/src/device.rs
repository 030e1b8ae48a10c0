//! Host collaborators
//!
//! The control surface talks to the media element and the document's
//! fullscreen surface only through these traits.

use fos_media::{
    ChangeChannel, EnabledFlag, ExitMethod, FullscreenDocument, FullscreenError,
    FullscreenTarget, HTMLMediaElement, MediaError, MediaEvent, RequestMethod,
    StatusField, TextTrack, TextTrackMode,
};

/// Media device for one media resource
pub trait MediaDevice {
    fn current_time(&self) -> f64;
    /// May be NaN or infinite while unknown
    fn duration(&self) -> f64;
    fn volume(&self) -> f64;
    fn muted(&self) -> bool;
    fn paused(&self) -> bool;
    fn ended(&self) -> bool;
    fn text_tracks(&self) -> &[TextTrack];

    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    fn set_current_time(&mut self, time: f64);
    fn set_volume(&mut self, volume: f64) -> Result<(), MediaError>;
    fn set_muted(&mut self, muted: bool);
    fn set_text_track_mode(&mut self, index: usize, mode: TextTrackMode);

    fn add_event_listener(&mut self, event: MediaEvent);
    fn take_events(&mut self) -> Vec<MediaEvent>;
}

/// Document fullscreen surface
pub trait FullscreenHost {
    fn enabled_flag(&self, flag: EnabledFlag) -> bool;
    fn status(&self, field: StatusField) -> bool;
    fn has_request(&self, method: RequestMethod) -> bool;
    fn has_exit(&self, method: ExitMethod) -> bool;

    fn request(&mut self, method: RequestMethod, target: FullscreenTarget) -> Result<(), FullscreenError>;
    fn exit(&mut self, method: ExitMethod) -> Result<(), FullscreenError>;

    fn add_change_listener(&mut self, channel: ChangeChannel);
    fn take_changes(&mut self) -> Vec<ChangeChannel>;
}

impl MediaDevice for HTMLMediaElement {
    fn current_time(&self) -> f64 { self.current_time }
    fn duration(&self) -> f64 { self.duration }
    fn volume(&self) -> f64 { self.volume }
    fn muted(&self) -> bool { self.muted }
    fn paused(&self) -> bool { self.paused }
    fn ended(&self) -> bool { self.ended }
    fn text_tracks(&self) -> &[TextTrack] { self.text_tracks.as_slice() }

    fn play(&mut self) -> Result<(), MediaError> { HTMLMediaElement::play(self) }
    fn pause(&mut self) { HTMLMediaElement::pause(self) }
    fn set_current_time(&mut self, time: f64) { self.seek(time) }
    fn set_volume(&mut self, volume: f64) -> Result<(), MediaError> { HTMLMediaElement::set_volume(self, volume) }
    fn set_muted(&mut self, muted: bool) { HTMLMediaElement::set_muted(self, muted) }
    fn set_text_track_mode(&mut self, index: usize, mode: TextTrackMode) {
        HTMLMediaElement::set_text_track_mode(self, index, mode)
    }

    fn add_event_listener(&mut self, event: MediaEvent) { HTMLMediaElement::add_event_listener(self, event) }
    fn take_events(&mut self) -> Vec<MediaEvent> { HTMLMediaElement::take_events(self) }
}

impl FullscreenHost for FullscreenDocument {
    fn enabled_flag(&self, flag: EnabledFlag) -> bool { FullscreenDocument::enabled_flag(self, flag) }
    fn status(&self, field: StatusField) -> bool { FullscreenDocument::status(self, field) }
    fn has_request(&self, method: RequestMethod) -> bool { FullscreenDocument::has_request(self, method) }
    fn has_exit(&self, method: ExitMethod) -> bool { FullscreenDocument::has_exit(self, method) }

    fn request(&mut self, method: RequestMethod, target: FullscreenTarget) -> Result<(), FullscreenError> {
        FullscreenDocument::request(self, method, target)
    }

    fn exit(&mut self, method: ExitMethod) -> Result<(), FullscreenError> {
        FullscreenDocument::exit(self, method)
    }

    fn add_change_listener(&mut self, channel: ChangeChannel) {
        FullscreenDocument::add_change_listener(self, channel)
    }

    fn take_changes(&mut self) -> Vec<ChangeChannel> { FullscreenDocument::take_changes(self) }
}
