//! Fullscreen API
//!
//! Document-level fullscreen surface as exposed by the different engine
//! flavours. Each flavour publishes its own enabled flag, request/exit
//! methods, status fields and change event.

use std::collections::HashSet;

/// "Fullscreen enabled" identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnabledFlag {
    FullscreenEnabled,
    MozFullScreenEnabled,
    MsFullscreenEnabled,
    WebkitSupportsFullscreen,
    WebkitFullscreenEnabled,
    /// `webkitRequestFullScreen` present on a `<video>` element
    VideoWebkitRequestFullScreen,
}

impl EnabledFlag {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullscreenEnabled => "fullscreenEnabled",
            Self::MozFullScreenEnabled => "mozFullScreenEnabled",
            Self::MsFullscreenEnabled => "msFullscreenEnabled",
            Self::WebkitSupportsFullscreen => "webkitSupportsFullscreen",
            Self::WebkitFullscreenEnabled => "webkitFullscreenEnabled",
            Self::VideoWebkitRequestFullScreen => "video.webkitRequestFullScreen",
        }
    }
}

/// "Is fullscreen" status fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusField {
    FullScreen,
    WebkitIsFullScreen,
    MozFullScreen,
    MsFullscreenElement,
    FullscreenElement,
}

impl StatusField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullScreen => "fullScreen",
            Self::WebkitIsFullScreen => "webkitIsFullScreen",
            Self::MozFullScreen => "mozFullScreen",
            Self::MsFullscreenElement => "msFullscreenElement",
            Self::FullscreenElement => "fullscreenElement",
        }
    }
}

/// Request methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    RequestFullscreen,
    MozRequestFullScreen,
    WebkitRequestFullScreen,
    MsRequestFullscreen,
}

impl RequestMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RequestFullscreen => "requestFullscreen",
            Self::MozRequestFullScreen => "mozRequestFullScreen",
            Self::WebkitRequestFullScreen => "webkitRequestFullScreen",
            Self::MsRequestFullscreen => "msRequestFullscreen",
        }
    }
}

/// Exit methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitMethod {
    ExitFullscreen,
    MozCancelFullScreen,
    WebkitCancelFullScreen,
    MsExitFullscreen,
}

impl ExitMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ExitFullscreen => "exitFullscreen",
            Self::MozCancelFullScreen => "mozCancelFullScreen",
            Self::WebkitCancelFullScreen => "webkitCancelFullScreen",
            Self::MsExitFullscreen => "msExitFullscreen",
        }
    }
}

/// Fullscreen change notification channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeChannel {
    Standard,
    Webkit,
    Moz,
    Ms,
}

impl ChangeChannel {
    pub const ALL: [ChangeChannel; 4] = [
        ChangeChannel::Standard,
        ChangeChannel::Webkit,
        ChangeChannel::Moz,
        ChangeChannel::Ms,
    ];

    /// DOM event name
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Standard => "fullscreenchange",
            Self::Webkit => "webkitfullscreenchange",
            Self::Moz => "mozfullscreenchange",
            Self::Ms => "MSFullscreenChange",
        }
    }

    /// Status fields a listener on this channel consults
    pub fn status_fields(&self) -> &'static [StatusField] {
        match self {
            Self::Standard => &[StatusField::FullScreen, StatusField::FullscreenElement],
            Self::Webkit => &[StatusField::WebkitIsFullScreen],
            Self::Moz => &[StatusField::MozFullScreen],
            Self::Ms => &[StatusField::MsFullscreenElement],
        }
    }
}

/// What a fullscreen request is issued on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenTarget {
    /// Controls and media element together
    Container,
    /// The bare `<video>` element
    MediaElement,
}

/// Engine flavour of the fullscreen surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenVendor {
    Standard,
    Moz,
    Webkit,
    Ms,
}

impl FullscreenVendor {
    fn enabled_flags(&self) -> &'static [EnabledFlag] {
        match self {
            Self::Standard => &[EnabledFlag::FullscreenEnabled],
            Self::Moz => &[EnabledFlag::MozFullScreenEnabled],
            Self::Webkit => &[
                EnabledFlag::WebkitSupportsFullscreen,
                EnabledFlag::WebkitFullscreenEnabled,
            ],
            Self::Ms => &[EnabledFlag::MsFullscreenEnabled],
        }
    }

    fn request_method(&self) -> RequestMethod {
        match self {
            Self::Standard => RequestMethod::RequestFullscreen,
            Self::Moz => RequestMethod::MozRequestFullScreen,
            Self::Webkit => RequestMethod::WebkitRequestFullScreen,
            Self::Ms => RequestMethod::MsRequestFullscreen,
        }
    }

    fn exit_method(&self) -> ExitMethod {
        match self {
            Self::Standard => ExitMethod::ExitFullscreen,
            Self::Moz => ExitMethod::MozCancelFullScreen,
            Self::Webkit => ExitMethod::WebkitCancelFullScreen,
            Self::Ms => ExitMethod::MsExitFullscreen,
        }
    }

    fn status_fields(&self) -> &'static [StatusField] {
        match self {
            Self::Standard => &[StatusField::FullscreenElement],
            Self::Moz => &[StatusField::MozFullScreen, StatusField::FullScreen],
            Self::Webkit => &[StatusField::WebkitIsFullScreen],
            Self::Ms => &[StatusField::MsFullscreenElement],
        }
    }

    fn channel(&self) -> ChangeChannel {
        match self {
            Self::Standard => ChangeChannel::Standard,
            Self::Moz => ChangeChannel::Moz,
            Self::Webkit => ChangeChannel::Webkit,
            Self::Ms => ChangeChannel::Ms,
        }
    }
}

/// Fullscreen error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FullscreenError {
    #[error("Fullscreen not allowed")]
    NotAllowed,
    #[error("Fullscreen method not supported: {0}")]
    NotSupported(&'static str),
}

/// Document fullscreen state for one engine flavour
#[derive(Debug)]
pub struct FullscreenDocument {
    vendor: Option<FullscreenVendor>,
    /// Permission policy allows fullscreen
    pub allowed: bool,
    fullscreen_element: Option<FullscreenTarget>,
    listeners: HashSet<ChangeChannel>,
    pending: Vec<ChangeChannel>,
}

impl FullscreenDocument {
    pub fn new(vendor: Option<FullscreenVendor>) -> Self {
        Self {
            vendor,
            allowed: true,
            fullscreen_element: None,
            listeners: HashSet::new(),
            pending: Vec::new(),
        }
    }

    /// Document without any fullscreen surface
    pub fn unsupported() -> Self {
        Self::new(None)
    }

    pub fn fullscreen_element(&self) -> Option<FullscreenTarget> {
        self.fullscreen_element
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen_element.is_some()
    }

    /// Truthiness of an enabled identifier
    pub fn enabled_flag(&self, flag: EnabledFlag) -> bool {
        match self.vendor {
            Some(FullscreenVendor::Webkit) if flag == EnabledFlag::VideoWebkitRequestFullScreen => true,
            Some(vendor) => self.allowed && vendor.enabled_flags().contains(&flag),
            None => false,
        }
    }

    /// Truthiness of a status field
    pub fn status(&self, field: StatusField) -> bool {
        match self.vendor {
            Some(vendor) => self.is_fullscreen() && vendor.status_fields().contains(&field),
            None => false,
        }
    }

    pub fn has_request(&self, method: RequestMethod) -> bool {
        self.vendor.is_some_and(|v| v.request_method() == method)
    }

    pub fn has_exit(&self, method: ExitMethod) -> bool {
        self.vendor.is_some_and(|v| v.exit_method() == method)
    }

    /// Request fullscreen
    pub fn request(&mut self, method: RequestMethod, target: FullscreenTarget) -> Result<(), FullscreenError> {
        let vendor = self.vendor
            .filter(|v| v.request_method() == method)
            .ok_or(FullscreenError::NotSupported(method.name()))?;
        if !self.allowed {
            return Err(FullscreenError::NotAllowed);
        }
        // Legacy webkit only takes the request on the media element itself
        if vendor == FullscreenVendor::Webkit && target != FullscreenTarget::MediaElement {
            return Err(FullscreenError::NotAllowed);
        }

        self.fullscreen_element = Some(target);
        tracing::debug!("Entered fullscreen via {} on {:?}", method.name(), target);
        self.fire(vendor.channel());
        Ok(())
    }

    /// Exit fullscreen
    pub fn exit(&mut self, method: ExitMethod) -> Result<(), FullscreenError> {
        let vendor = self.vendor
            .filter(|v| v.exit_method() == method)
            .ok_or(FullscreenError::NotSupported(method.name()))?;
        if self.fullscreen_element.take().is_some() {
            tracing::debug!("Exited fullscreen via {}", method.name());
            self.fire(vendor.channel());
        }
        Ok(())
    }

    /// Process keyboard escape
    pub fn handle_escape(&mut self) -> bool {
        match (self.vendor, self.fullscreen_element.take()) {
            (Some(vendor), Some(_)) => {
                self.fire(vendor.channel());
                true
            }
            _ => false,
        }
    }

    pub fn add_change_listener(&mut self, channel: ChangeChannel) {
        self.listeners.insert(channel);
    }

    pub fn has_listener(&self, channel: ChangeChannel) -> bool {
        self.listeners.contains(&channel)
    }

    /// Drain queued change notifications
    pub fn take_changes(&mut self) -> Vec<ChangeChannel> {
        std::mem::take(&mut self.pending)
    }

    fn fire(&mut self, channel: ChangeChannel) {
        if self.listeners.contains(&channel) {
            self.pending.push(channel);
        }
    }
}
