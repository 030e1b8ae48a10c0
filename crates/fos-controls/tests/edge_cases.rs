//! Edge case tests for fos-controls
//!
//! Unusual hosts, odd track lists and out-of-order notifications.

use fos_controls::{ControlIntent, ControlsConfig, ControlsError, DurationState, MediaControls, SubtitleKey};
use fos_media::{
    ChangeChannel, FullscreenDocument, FullscreenVendor, HTMLMediaElement, ReadyState,
    TextTrack, TextTrackMode,
};

type Controls = MediaControls<HTMLMediaElement, FullscreenDocument>;

fn with_tracks(tracks: &[(&str, &str)]) -> Controls {
    let mut video = HTMLMediaElement::from_url("clip.mp4");
    for (label, lang) in tracks {
        video.add_text_track(TextTrack::subtitles(label, lang));
    }
    MediaControls::with_defaults(video, FullscreenDocument::unsupported())
}

// ============================================================================
// SUBTITLE EDGE CASES
// ============================================================================

#[test]
fn test_no_tracks() {
    let mut controls = with_tracks(&[]);
    assert_eq!(controls.ui().subtitles.entries.len(), 1);
    controls.select_subtitle(0);
    assert_eq!(controls.ui().subtitles.active_count(), 1);
}

#[test]
fn test_track_without_language_acts_as_off() {
    let mut controls = with_tracks(&[("English", "en"), ("Commentary", "")]);
    assert_eq!(controls.ui().subtitles.entries[2].key, SubtitleKey::Off);

    controls.select_subtitle(1);
    assert_eq!(controls.device().text_tracks.showing_count(), 1);

    controls.select_subtitle(2);
    assert_eq!(controls.device().text_tracks.showing_count(), 0);
    let active = controls.ui().subtitles.active_entry().unwrap();
    assert_eq!(active.label, "Commentary");
    assert_eq!(controls.ui().subtitles.active_count(), 1);
}

#[test]
fn test_duplicate_language_shows_first_only() {
    let mut controls = with_tracks(&[("English", "en"), ("English SDH", "en"), ("French", "fr")]);
    controls.select_subtitle(2);

    let modes: Vec<_> = controls.device().text_tracks.iter().map(|t| t.mode).collect();
    assert_eq!(modes, [TextTrackMode::Showing, TextTrackMode::Hidden, TextTrackMode::Hidden]);
    assert_eq!(controls.ui().subtitles.active_entry().unwrap().label, "English SDH");
}

#[test]
fn test_host_default_showing_is_overridden() {
    let mut video = HTMLMediaElement::new();
    let mut track = TextTrack::subtitles("English", "en");
    track.mode = TextTrackMode::Showing;
    video.add_text_track(track);

    let controls = MediaControls::with_defaults(video, FullscreenDocument::unsupported());
    assert_eq!(controls.device().text_tracks.showing_count(), 0);
}

#[test]
fn test_unknown_key_changes_nothing() {
    let mut controls = with_tracks(&[("English", "en")]);
    controls.select_subtitle(1);
    controls.select_track(&SubtitleKey::Language("de".into()));
    assert_eq!(controls.ui().subtitles.active_entry().unwrap().label, "English");
    assert_eq!(controls.device().text_tracks.showing_count(), 1);
}

// ============================================================================
// DURATION EDGE CASES
// ============================================================================

#[test]
fn test_live_stream_duration_stays_unknown() {
    let mut controls = with_tracks(&[]);
    controls.device_mut().load_metadata(f64::INFINITY);
    controls.device_mut().set_ready_state(ReadyState::HaveEnoughData);
    controls.toggle_play_pause();
    controls.device_mut().tick(5.0);
    controls.pump();

    assert_eq!(controls.progress().state(), DurationState::Unknown);
    assert_eq!(controls.ui().progress.value, 5.0);
    assert_eq!(controls.ui().progress.max, None);
    assert_eq!(controls.ui().progress.percent, None);

    controls.seek_to(0.5);
    assert_eq!(controls.device().current_time, 5.0);
}

#[test]
fn test_zero_duration_is_not_recorded() {
    let mut controls = with_tracks(&[]);
    controls.device_mut().load_metadata(0.0);
    controls.pump();
    assert_eq!(controls.ui().progress.max, None);

    controls.device_mut().duration = 8.0;
    controls.device_mut().seek(2.0);
    controls.pump();
    assert_eq!(controls.ui().progress.max, Some(8.0));
    assert_eq!(controls.ui().progress.percent, Some(25));
}

#[test]
fn test_non_finite_seek_fraction() {
    let mut controls = with_tracks(&[]);
    controls.device_mut().load_metadata(100.0);
    controls.pump();
    controls.handle_intent(ControlIntent::Seek(f64::NAN));
    assert_eq!(controls.device().current_time, 0.0);
    controls.handle_intent(ControlIntent::Seek(3.0));
    assert_eq!(controls.device().current_time, 100.0);
}

// ============================================================================
// PLAYBACK EDGE CASES
// ============================================================================

#[test]
fn test_play_rejected_without_data() {
    let mut controls = with_tracks(&[]);
    controls.toggle_play_pause();
    assert_eq!(controls.pump(), 0);
    assert!(controls.device().paused);
    assert!(controls.ui().paused);
}

#[test]
fn test_volume_down_to_silence() {
    let mut controls = with_tracks(&[]);
    for _ in 0..15 {
        controls.handle_intent(ControlIntent::VolumeDown);
    }
    controls.pump();
    assert_eq!(controls.device().volume, 0.0);
    assert_eq!(controls.ui().volume, 0.0);
}

// ============================================================================
// FULLSCREEN EDGE CASES
// ============================================================================

#[test]
fn test_unsupported_toggle_does_nothing() {
    let mut controls = with_tracks(&[]);
    controls.handle_intent(ControlIntent::Fullscreen);
    assert!(!controls.fullscreen_host().is_fullscreen());
    assert_eq!(controls.pump(), 0);
}

#[test]
fn test_disallowed_host_is_unsupported() {
    let mut doc = FullscreenDocument::new(Some(FullscreenVendor::Standard));
    doc.allowed = false;
    let controls = MediaControls::with_defaults(HTMLMediaElement::new(), doc);
    assert!(!controls.ui().fullscreen_available);
}

#[test]
fn test_duplicate_notifications_are_harmless() {
    let mut controls = MediaControls::with_defaults(
        HTMLMediaElement::new(),
        FullscreenDocument::new(Some(FullscreenVendor::Moz)),
    );
    controls.toggle_fullscreen();
    controls.pump();
    controls.handle_fullscreen_change(ChangeChannel::Moz);
    controls.handle_fullscreen_change(ChangeChannel::Moz);
    assert!(controls.ui().fullscreen);
}

#[test]
fn test_last_channel_wins() {
    let mut controls = MediaControls::with_defaults(
        HTMLMediaElement::new(),
        FullscreenDocument::new(Some(FullscreenVendor::Moz)),
    );
    controls.toggle_fullscreen();
    controls.pump();

    // A channel whose status fields are not live reports windowed
    controls.handle_fullscreen_change(ChangeChannel::Ms);
    assert!(!controls.ui().fullscreen);
    controls.handle_fullscreen_change(ChangeChannel::Moz);
    assert!(controls.ui().fullscreen);
}

#[test]
fn test_missed_notification_keeps_last_state() {
    let mut controls = MediaControls::with_defaults(
        HTMLMediaElement::new(),
        FullscreenDocument::new(Some(FullscreenVendor::Standard)),
    );
    controls.toggle_fullscreen();
    controls.pump();
    controls.toggle_fullscreen();
    // Exit notification dropped by the host
    controls.fullscreen_host_mut().take_changes();

    assert!(!controls.fullscreen_host().is_fullscreen());
    assert!(controls.ui().fullscreen);
}

// ============================================================================
// CONFIG & SERIALIZATION
// ============================================================================

#[test]
fn test_bad_config_json() {
    let err = ControlsConfig::from_json("not json").unwrap_err();
    assert!(matches!(err, ControlsError::Config(_)));
    assert!(err.to_string().starts_with("Config parse error"));
}

#[test]
fn test_ui_json_snapshot() {
    let mut controls = with_tracks(&[("English", "en")]);
    controls.select_subtitle(1);
    let json: serde_json::Value = serde_json::from_str(&controls.ui().to_json().unwrap()).unwrap();

    assert_eq!(json["fullscreen_available"], false);
    assert_eq!(json["paused"], true);
    assert_eq!(json["subtitles"]["entries"][0]["key"]["kind"], "off");
    assert_eq!(json["subtitles"]["entries"][1]["key"]["language"], "en");
    assert_eq!(json["subtitles"]["entries"][1]["active"], true);
}
