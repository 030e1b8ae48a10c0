//! Playback State Controller
//!
//! Play/pause, stop, mute and stepped volume. Every operation is a
//! read-then-command against the device; rejected commands are logged and
//! dropped.

use crate::device::MediaDevice;
use crate::ui::UiState;

/// Volume step direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeDirection {
    Increase,
    Decrease,
}

/// Play if paused or ended, pause otherwise
pub fn toggle_play_pause<D: MediaDevice + ?Sized>(device: &mut D) {
    if device.paused() || device.ended() {
        if let Err(err) = device.play() {
            tracing::debug!("play rejected: {}", err);
        }
    } else {
        device.pause();
    }
}

/// Pause, rewind and zero the displayed progress in one step
pub fn stop<D: MediaDevice + ?Sized>(device: &mut D, ui: &mut UiState) {
    device.pause();
    device.set_current_time(0.0);
    ui.paused = true;
    ui.progress.value = 0.0;
    if ui.progress.percent.is_some() {
        ui.progress.percent = Some(0);
    }
}

pub fn toggle_mute<D: MediaDevice + ?Sized>(device: &mut D) {
    let muted = device.muted();
    device.set_muted(!muted);
}

/// Step the volume by 0.1 from its truncated tenth. At either boundary the
/// call does nothing.
pub fn change_volume<D: MediaDevice + ?Sized>(device: &mut D, direction: VolumeDirection) {
    let tenths = (device.volume() * 10.0).floor() as i32;
    let target = match direction {
        VolumeDirection::Increase if tenths < 10 => tenths + 1,
        VolumeDirection::Decrease if tenths > 0 => tenths - 1,
        _ => return,
    };
    let volume = (f64::from(target) / 10.0).clamp(0.0, 1.0);
    if let Err(err) = device.set_volume(volume) {
        tracing::debug!("volume change rejected: {}", err);
    }
}
