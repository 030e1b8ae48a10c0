//! Capability Detection
//!
//! Resolves once, at startup, which fullscreen variant the host exposes.
//! The result is an immutable strategy record; nothing re-probes the host
//! per call.

use fos_media::{EnabledFlag, ExitMethod, FullscreenTarget, RequestMethod, StatusField};

use crate::device::FullscreenHost;

/// Enabled identifiers, highest priority first
pub const ENABLED_PRIORITY: [EnabledFlag; 6] = [
    EnabledFlag::FullscreenEnabled,
    EnabledFlag::MozFullScreenEnabled,
    EnabledFlag::MsFullscreenEnabled,
    EnabledFlag::WebkitSupportsFullscreen,
    EnabledFlag::WebkitFullscreenEnabled,
    EnabledFlag::VideoWebkitRequestFullScreen,
];

pub const REQUEST_PRIORITY: [RequestMethod; 4] = [
    RequestMethod::RequestFullscreen,
    RequestMethod::MozRequestFullScreen,
    RequestMethod::WebkitRequestFullScreen,
    RequestMethod::MsRequestFullscreen,
];

pub const EXIT_PRIORITY: [ExitMethod; 4] = [
    ExitMethod::ExitFullscreen,
    ExitMethod::MozCancelFullScreen,
    ExitMethod::WebkitCancelFullScreen,
    ExitMethod::MsExitFullscreen,
];

/// Status fields consulted to answer "is fullscreen right now"
pub const STATUS_PRIORITY: [StatusField; 5] = [
    StatusField::FullScreen,
    StatusField::WebkitIsFullScreen,
    StatusField::MozFullScreen,
    StatusField::MsFullscreenElement,
    StatusField::FullscreenElement,
];

/// Resolved fullscreen variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullscreenStrategy {
    /// Identifier that proved support
    pub enabled_by: EnabledFlag,
    pub request: Option<RequestMethod>,
    pub exit: Option<ExitMethod>,
}

impl FullscreenStrategy {
    /// Where the request goes. `webkitRequestFullScreen` is only honoured
    /// on the bare media element; everything else takes the container so
    /// the custom controls stay visible.
    pub fn request_target(&self) -> FullscreenTarget {
        match self.request {
            Some(RequestMethod::WebkitRequestFullScreen) => FullscreenTarget::MediaElement,
            _ => FullscreenTarget::Container,
        }
    }
}

/// Capability profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapabilityProfile {
    fullscreen: Option<FullscreenStrategy>,
}

impl CapabilityProfile {
    /// Probe the host. Absence of every variant yields an unsupported
    /// profile, never an error.
    pub fn detect<F: FullscreenHost + ?Sized>(host: &F) -> Self {
        let fullscreen = ENABLED_PRIORITY
            .iter()
            .copied()
            .find(|flag| host.enabled_flag(*flag))
            .map(|enabled_by| FullscreenStrategy {
                enabled_by,
                request: REQUEST_PRIORITY.iter().copied().find(|m| host.has_request(*m)),
                exit: EXIT_PRIORITY.iter().copied().find(|m| host.has_exit(*m)),
            });

        match &fullscreen {
            Some(strategy) => tracing::debug!(
                "Fullscreen supported via {} (request {:?}, exit {:?})",
                strategy.enabled_by.name(),
                strategy.request.map(|m| m.name()),
                strategy.exit.map(|m| m.name()),
            ),
            None => tracing::debug!("Fullscreen unsupported; control hidden"),
        }

        Self { fullscreen }
    }

    pub fn fullscreen_supported(&self) -> bool {
        self.fullscreen.is_some()
    }

    pub fn fullscreen(&self) -> Option<&FullscreenStrategy> {
        self.fullscreen.as_ref()
    }
}
