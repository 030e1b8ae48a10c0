//! Fullscreen Negotiation
//!
//! Issues the resolved request/exit variant and mirrors change
//! notifications into the UI flag. The flag is never set optimistically;
//! it follows whichever change channel fired last.

use fos_media::ChangeChannel;

use crate::capability::{FullscreenStrategy, STATUS_PRIORITY};
use crate::device::FullscreenHost;
use crate::ui::UiState;

/// Fullscreen negotiator
#[derive(Debug, Clone, Copy, Default)]
pub struct FullscreenNegotiator {
    strategy: Option<FullscreenStrategy>,
}

impl FullscreenNegotiator {
    pub fn new(strategy: Option<FullscreenStrategy>) -> Self {
        Self { strategy }
    }

    /// Listen on every vendor channel; only one is live per host
    pub fn register<F: FullscreenHost + ?Sized>(&self, host: &mut F) {
        for channel in ChangeChannel::ALL {
            host.add_change_listener(channel);
        }
    }

    /// Any status field truthy
    pub fn is_fullscreen<F: FullscreenHost + ?Sized>(host: &F) -> bool {
        STATUS_PRIORITY.iter().any(|field| host.status(*field))
    }

    /// Enter or leave fullscreen. Callers hide the control when
    /// unsupported; an unsupported toggle does nothing.
    pub fn toggle<F: FullscreenHost + ?Sized>(&self, host: &mut F) {
        let Some(strategy) = self.strategy else {
            tracing::debug!("Fullscreen toggle ignored: unsupported");
            return;
        };

        let result = if Self::is_fullscreen(&*host) {
            match strategy.exit {
                Some(method) => host.exit(method),
                None => return,
            }
        } else {
            match strategy.request {
                Some(method) => host.request(method, strategy.request_target()),
                None => return,
            }
        };

        if let Err(err) = result {
            tracing::debug!("Fullscreen command rejected: {}", err);
        }
    }

    /// Change notification on `channel`
    pub fn on_change<F: FullscreenHost + ?Sized>(&self, channel: ChangeChannel, host: &F, ui: &mut UiState) {
        let fullscreen = channel.status_fields().iter().any(|field| {
            let set = host.status(*field);
            tracing::trace!("{} = {}", field.name(), set);
            set
        });
        tracing::debug!("{} -> fullscreen={}", channel.event_name(), fullscreen);
        ui.fullscreen = fullscreen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::CapabilityProfile;
    use fos_media::{FullscreenDocument, FullscreenTarget, FullscreenVendor};

    fn negotiator_for(doc: &mut FullscreenDocument) -> FullscreenNegotiator {
        let profile = CapabilityProfile::detect(&*doc);
        let negotiator = FullscreenNegotiator::new(profile.fullscreen().copied());
        negotiator.register(doc);
        negotiator
    }

    #[test]
    fn test_registers_all_channels() {
        let mut doc = FullscreenDocument::new(Some(FullscreenVendor::Ms));
        negotiator_for(&mut doc);
        for channel in ChangeChannel::ALL {
            assert!(doc.has_listener(channel));
        }
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut doc = FullscreenDocument::new(Some(FullscreenVendor::Ms));
        let negotiator = negotiator_for(&mut doc);
        let mut ui = UiState::default();

        negotiator.toggle(&mut doc);
        assert_eq!(doc.fullscreen_element(), Some(FullscreenTarget::Container));
        assert!(!ui.fullscreen);
        for channel in doc.take_changes() {
            negotiator.on_change(channel, &doc, &mut ui);
        }
        assert!(ui.fullscreen);

        negotiator.toggle(&mut doc);
        assert!(!doc.is_fullscreen());
        for channel in doc.take_changes() {
            negotiator.on_change(channel, &doc, &mut ui);
        }
        assert!(!ui.fullscreen);
    }

    #[test]
    fn test_foreign_channel_reads_its_own_fields() {
        let mut doc = FullscreenDocument::new(Some(FullscreenVendor::Webkit));
        let negotiator = negotiator_for(&mut doc);
        let mut ui = UiState::default();

        negotiator.toggle(&mut doc);
        assert_eq!(doc.fullscreen_element(), Some(FullscreenTarget::MediaElement));

        // A stray standard notification sees no standard status field set
        negotiator.on_change(ChangeChannel::Standard, &doc, &mut ui);
        assert!(!ui.fullscreen);
        negotiator.on_change(ChangeChannel::Webkit, &doc, &mut ui);
        assert!(ui.fullscreen);
    }

    #[test]
    fn test_unsupported_toggle_is_noop() {
        let mut doc = FullscreenDocument::unsupported();
        let negotiator = negotiator_for(&mut doc);
        negotiator.toggle(&mut doc);
        assert!(!doc.is_fullscreen());
        assert!(doc.take_changes().is_empty());
    }
}
