//! fOS Media
//!
//! Host-side media APIs for the fOS browser engine.
//!
//! Features:
//! - HTMLMediaElement playback state with DOM-style notifications
//! - TextTrack / TextTrackList
//! - Vendor-flavoured Fullscreen API surface (standard, moz, webkit, ms)

pub mod element;
pub mod tracks;
pub mod fullscreen;

pub use element::{HTMLMediaElement, MediaEvent, ReadyState};
pub use tracks::{TextTrack, TextTrackKind, TextTrackList, TextTrackMode};
pub use fullscreen::{
    ChangeChannel, EnabledFlag, ExitMethod, FullscreenDocument, FullscreenError,
    FullscreenTarget, FullscreenVendor, RequestMethod, StatusField,
};

/// Media error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MediaError {
    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Index size: {0} is outside [0, 1]")]
    IndexSize(f64),
}
