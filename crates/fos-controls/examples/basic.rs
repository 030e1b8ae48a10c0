//! Example: Drive a control surface against the fOS host model

use fos_controls::{ControlIntent, ControlsConfig, MediaControls, SubtitleKey};
use fos_media::{FullscreenDocument, FullscreenVendor, HTMLMediaElement, ReadyState, TextTrack};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut video = HTMLMediaElement::from_url("movie.webm");
    video.add_text_track(TextTrack::subtitles("English", "en"));
    video.add_text_track(TextTrack::subtitles("Deutsch", "de"));

    let document = FullscreenDocument::new(Some(FullscreenVendor::Webkit));
    let config = ControlsConfig::from_json(r#"{ "off_label": "Off" }"#)?;
    let mut controls = MediaControls::new(video, document, config);

    // Metadata arrives without a usable duration
    controls.device_mut().load_metadata(f64::NAN);
    controls.device_mut().set_ready_state(ReadyState::HaveEnoughData);
    controls.pump();

    controls.handle_intent(ControlIntent::PlayPause);
    controls.device_mut().duration = 120.0;
    controls.device_mut().tick(30.0);
    controls.handle_intent(ControlIntent::VolumeDown);
    controls.select_track(&SubtitleKey::Language("de".into()));
    controls.handle_intent(ControlIntent::Fullscreen);
    controls.pump();

    println!("fOS Controls v{}", fos_controls::VERSION);
    println!("{}", serde_json::to_string_pretty(controls.ui())?);
    Ok(())
}
