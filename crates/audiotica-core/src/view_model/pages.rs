use std::sync::Arc;
use std::time::Duration;

use crate::config::Theme;
use crate::services::{
    Album, Artist, CollectionService, PageKey, PlaybackService, PlaybackState, SettingsService, Track,
};
use crate::view_model::ViewModel;

/// Landing page: recently added albums and the artists behind them.
#[derive(Debug, Clone)]
pub struct ExplorePageViewModel {
    pub recent_albums: Vec<Album>,
    pub featured_artists: Vec<Artist>,
}

impl ExplorePageViewModel {
    pub fn new(collection: &CollectionService, settings: &SettingsService) -> Self {
        let recent_albums = collection.recent_albums(settings.get().explore_album_count);
        let featured_artists = collection
            .artists()
            .into_iter()
            .filter(|artist| recent_albums.iter().any(|album| album.artist == artist.name))
            .collect();
        Self { recent_albums, featured_artists }
    }
}

impl ViewModel for ExplorePageViewModel {
    fn page(&self) -> PageKey {
        PageKey::Explore
    }

    fn summary(&self) -> String {
        format!(
            "{} recent albums, {} featured artists",
            self.recent_albums.len(),
            self.featured_artists.len()
        )
    }
}

#[derive(Debug, Clone)]
pub struct AlbumsPageViewModel {
    pub albums: Vec<Album>,
}

impl AlbumsPageViewModel {
    pub fn new(collection: &CollectionService) -> Self {
        Self { albums: collection.albums() }
    }
}

impl ViewModel for AlbumsPageViewModel {
    fn page(&self) -> PageKey {
        PageKey::Albums
    }

    fn summary(&self) -> String {
        format!("{} albums", self.albums.len())
    }
}

#[derive(Debug, Clone)]
pub struct ArtistsPageViewModel {
    pub artists: Vec<Artist>,
}

impl ArtistsPageViewModel {
    pub fn new(collection: &CollectionService) -> Self {
        Self { artists: collection.artists() }
    }
}

impl ViewModel for ArtistsPageViewModel {
    fn page(&self) -> PageKey {
        PageKey::Artists
    }

    fn summary(&self) -> String {
        format!("{} artists", self.artists.len())
    }
}

#[derive(Debug, Clone)]
pub struct SongsPageViewModel {
    pub tracks: Vec<Track>,
    pub total_duration: Duration,
}

impl SongsPageViewModel {
    pub fn new(collection: &CollectionService) -> Self {
        let tracks = collection.tracks();
        let total_duration = tracks.iter().map(|t| t.duration).sum();
        Self { tracks, total_duration }
    }
}

impl ViewModel for SongsPageViewModel {
    fn page(&self) -> PageKey {
        PageKey::Songs
    }

    fn summary(&self) -> String {
        let minutes = self.total_duration.as_secs() / 60;
        format!("{} songs, {} min", self.tracks.len(), minutes)
    }
}

/// Live view over the player. Registered as a singleton so every surface
/// sees the same transport state.
#[derive(Debug, Clone)]
pub struct NowPlayingViewModel {
    playback: Arc<PlaybackService>,
}

impl NowPlayingViewModel {
    pub fn new(playback: Arc<PlaybackService>) -> Self {
        Self { playback }
    }

    pub fn current_track(&self) -> Option<Track> {
        self.playback.current_track()
    }

    pub fn up_next(&self) -> Vec<Track> {
        let queue = self.playback.queue();
        match self.current_track() {
            Some(current) => queue
                .into_iter()
                .skip_while(|t| t.id != current.id)
                .skip(1)
                .collect(),
            None => queue,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn play_pause(&self) -> PlaybackState {
        self.playback.toggle_pause()
    }

    pub fn skip_next(&self) -> Option<Track> {
        self.playback.next()
    }

    pub fn skip_previous(&self) -> Option<Track> {
        self.playback.previous()
    }
}

impl ViewModel for NowPlayingViewModel {
    fn page(&self) -> PageKey {
        PageKey::NowPlaying
    }

    fn summary(&self) -> String {
        match self.current_track() {
            Some(track) => format!("{:?}: {} - {}", self.state(), track.artist, track.title),
            None => "Nothing playing".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsPageViewModel {
    settings: Arc<SettingsService>,
}

impl SettingsPageViewModel {
    pub fn new(settings: Arc<SettingsService>) -> Self {
        Self { settings }
    }

    pub fn theme(&self) -> Theme {
        self.settings.get().theme
    }

    pub fn set_theme(&self, theme: Theme) {
        self.settings.update(|s| s.theme = theme);
    }

    pub fn initial_page(&self) -> PageKey {
        self.settings.get().initial_page
    }

    pub fn set_initial_page(&self, page: PageKey) {
        self.settings.update(|s| s.initial_page = page);
    }
}

impl ViewModel for SettingsPageViewModel {
    fn page(&self) -> PageKey {
        PageKey::Settings
    }

    fn summary(&self) -> String {
        let settings = self.settings.get();
        format!("theme {:?}, start on {}", settings.theme, settings.initial_page)
    }
}
