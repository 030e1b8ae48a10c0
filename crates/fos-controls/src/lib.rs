//! fOS Controls
//!
//! Application-owned controls for a single media element, replacing the
//! native playback chrome.
//!
//! The crate normalizes the host's inconsistent capability surface and
//! keeps the UI state in step with host notifications:
//! - Capability detection for the vendor fullscreen variants, resolved once
//! - Play/pause, stop, mute and stepped volume
//! - Progress tracking that survives an unusable duration at load time
//! - Fullscreen requests on the controls container, with change tracking
//!   across every vendor channel
//! - Exclusive subtitle track selection with an "off" entry
//!
//! # Example
//! ```rust,ignore
//! use fos_controls::{ControlIntent, MediaControls};
//! use fos_media::{FullscreenDocument, FullscreenVendor, HTMLMediaElement};
//!
//! let video = HTMLMediaElement::from_url("movie.webm");
//! let document = FullscreenDocument::new(Some(FullscreenVendor::Standard));
//! let mut controls = MediaControls::with_defaults(video, document);
//! controls.handle_intent(ControlIntent::PlayPause);
//! controls.pump();
//! println!("{}", controls.ui().to_json()?);
//! ```

pub mod capability;
pub mod config;
pub mod controls;
pub mod device;
pub mod error;
pub mod fullscreen;
pub mod playback;
pub mod progress;
pub mod subtitles;
pub mod ui;

pub use capability::{CapabilityProfile, FullscreenStrategy};
pub use config::ControlsConfig;
pub use controls::{ControlIntent, MediaControls};
pub use device::{FullscreenHost, MediaDevice};
pub use error::{ControlsError, Result};
pub use fullscreen::FullscreenNegotiator;
pub use playback::VolumeDirection;
pub use progress::{DurationState, PointerPosition, ProgressSync};
pub use subtitles::SubtitleSelector;
pub use ui::{MenuEntry, ProgressState, SubtitleKey, SubtitleMenu, UiState};

/// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
