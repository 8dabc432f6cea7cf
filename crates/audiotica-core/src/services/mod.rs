//! # Audiotica Core Services
//!
//! Services resolved from the kernel and injected into view models:
//! page navigation, the music collection, the play queue and user settings.
pub mod collection;
pub mod navigation;
pub mod playback;
pub mod settings;

pub use collection::{Album, Artist, CollectionService, NewTrack, Track};
pub use navigation::{NavigationEntry, NavigationService, PageKey};
pub use playback::{PlaybackService, PlaybackState};
pub use settings::SettingsService;

#[cfg(test)]
mod tests;
