//! Progress & Seek Synchronization
//!
//! Tracks whether a usable duration has been seen yet. `loadedmetadata`
//! may report NaN on constrained platforms, so every `timeupdate` retries
//! until a max is recorded; after that the recorded value is only read.

use crate::device::MediaDevice;
use crate::ui::UiState;

/// Duration knowledge
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DurationState {
    #[default]
    Unknown,
    Known(f64),
}

/// Click position on the progress control, in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub page_x: f64,
    pub offset_left: f64,
    pub offset_width: f64,
}

impl PointerPosition {
    /// Fraction of the control's extent, clamped to `[0, 1]`
    pub fn fraction(&self) -> Option<f64> {
        if !self.offset_width.is_finite() || self.offset_width <= 0.0 {
            return None;
        }
        let fraction = (self.page_x - self.offset_left) / self.offset_width;
        fraction.is_finite().then(|| fraction.clamp(0.0, 1.0))
    }
}

fn usable_duration(duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

/// Progress synchronizer
#[derive(Debug, Default)]
pub struct ProgressSync {
    state: DurationState,
}

impl ProgressSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DurationState {
        self.state
    }

    pub fn duration(&self) -> Option<f64> {
        match self.state {
            DurationState::Known(duration) => Some(duration),
            DurationState::Unknown => None,
        }
    }

    fn try_record_duration<D: MediaDevice + ?Sized>(&mut self, device: &D, ui: &mut UiState) {
        if let DurationState::Known(_) = self.state {
            return;
        }
        match usable_duration(device.duration()) {
            Some(duration) => {
                self.state = DurationState::Known(duration);
                ui.progress.max = Some(duration);
                tracing::debug!("Duration known: {}s", duration);
            }
            None => tracing::trace!("Duration not usable yet: {}", device.duration()),
        }
    }

    /// `loadedmetadata`
    pub fn on_loaded_metadata<D: MediaDevice + ?Sized>(&mut self, device: &D, ui: &mut UiState) {
        self.try_record_duration(device, ui);
    }

    /// `timeupdate`
    pub fn on_time_update<D: MediaDevice + ?Sized>(&mut self, device: &D, ui: &mut UiState) {
        self.try_record_duration(device, ui);

        let position = device.current_time().max(0.0);
        match self.state {
            DurationState::Known(duration) => {
                let value = position.min(duration);
                ui.progress.value = value;
                ui.progress.percent = Some((value / duration * 100.0).floor() as u32);
            }
            DurationState::Unknown => {
                ui.progress.value = position;
            }
        }
    }

    /// Seek to `fraction` of the duration. Ignored until the duration is known.
    pub fn seek_to<D: MediaDevice + ?Sized>(&self, device: &mut D, fraction: f64) {
        let Some(duration) = self.duration() else {
            tracing::debug!("Seek ignored: duration unknown");
            return;
        };
        if !fraction.is_finite() {
            return;
        }
        device.set_current_time(fraction.clamp(0.0, 1.0) * duration);
    }

    pub fn seek_to_pointer<D: MediaDevice + ?Sized>(&self, device: &mut D, pointer: PointerPosition) {
        if let Some(fraction) = pointer.fraction() {
            self.seek_to(device, fraction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fos_media::HTMLMediaElement;

    #[test]
    fn test_nan_metadata_then_time_update() {
        let mut media = HTMLMediaElement::new();
        let mut ui = UiState::default();
        let mut sync = ProgressSync::new();

        media.load_metadata(f64::NAN);
        sync.on_loaded_metadata(&media, &mut ui);
        assert_eq!(sync.state(), DurationState::Unknown);
        assert_eq!(ui.progress.max, None);

        media.duration = 120.0;
        media.current_time = 30.0;
        sync.on_time_update(&media, &mut ui);
        assert_eq!(ui.progress.value, 30.0);
        assert_eq!(ui.progress.max, Some(120.0));
        assert_eq!(ui.progress.percent, Some(25));
    }

    #[test]
    fn test_recorded_max_is_not_overwritten() {
        let mut media = HTMLMediaElement::new();
        let mut ui = UiState::default();
        let mut sync = ProgressSync::new();

        media.load_metadata(90.0);
        sync.on_loaded_metadata(&media, &mut ui);
        media.duration = f64::NAN;
        media.current_time = 10.0;
        sync.on_time_update(&media, &mut ui);
        assert_eq!(ui.progress.max, Some(90.0));
        assert_eq!(ui.progress.percent, Some(11));
    }

    #[test]
    fn test_percent_truncates() {
        let mut media = HTMLMediaElement::new();
        let mut ui = UiState::default();
        let mut sync = ProgressSync::new();

        media.load_metadata(3.0);
        sync.on_loaded_metadata(&media, &mut ui);
        media.current_time = 2.0;
        sync.on_time_update(&media, &mut ui);
        assert_eq!(ui.progress.percent, Some(66));
    }

    #[test]
    fn test_percent_held_while_unknown() {
        let mut media = HTMLMediaElement::new();
        let mut ui = UiState::default();
        let mut sync = ProgressSync::new();

        media.duration = 0.0;
        media.current_time = 4.0;
        sync.on_time_update(&media, &mut ui);
        assert_eq!(ui.progress.value, 4.0);
        assert_eq!(ui.progress.percent, None);
    }

    #[test]
    fn test_seek() {
        let mut media = HTMLMediaElement::new();
        let mut ui = UiState::default();
        let mut sync = ProgressSync::new();

        sync.seek_to(&mut media, 0.5);
        assert_eq!(media.current_time, 0.0);

        media.load_metadata(120.0);
        sync.on_loaded_metadata(&media, &mut ui);
        sync.seek_to(&mut media, 0.5);
        assert_eq!(media.current_time, 60.0);
    }

    #[test]
    fn test_pointer_fraction() {
        let pointer = PointerPosition { page_x: 150.0, offset_left: 50.0, offset_width: 400.0 };
        assert_eq!(pointer.fraction(), Some(0.25));

        let zero = PointerPosition { offset_width: 0.0, ..pointer };
        assert_eq!(zero.fraction(), None);

        let outside = PointerPosition { page_x: 10.0, ..pointer };
        assert_eq!(outside.fraction(), Some(0.0));
    }
}
