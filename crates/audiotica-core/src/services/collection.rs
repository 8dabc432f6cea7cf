use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};
use std::time::Duration;

/// A track in the local collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub track_number: u32,
    pub duration: Duration,
}

/// Input for [`CollectionService::add_track`]
#[derive(Debug, Clone)]
pub struct NewTrack {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub track_number: u32,
    pub duration: Duration,
}

impl NewTrack {
    pub fn new(title: &str, artist: &str, album: &str, track_number: u32, duration_secs: u64) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            track_number,
            duration: Duration::from_secs(duration_secs),
        }
    }
}

/// Album summary derived from the collection's tracks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub title: String,
    pub artist: String,
    pub track_count: usize,
    pub duration: Duration,
}

/// Artist summary derived from the collection's tracks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub name: String,
    pub album_count: usize,
    pub track_count: usize,
}

/// In-memory music library.
///
/// Albums and artists are derived from tracks; tracks are kept in insertion
/// order, which doubles as the "recently added" order.
#[derive(Debug, Default)]
pub struct CollectionService {
    tracks: RwLock<Vec<Track>>,
}

impl CollectionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A small fixed library used by design-time kernels.
    pub fn with_sample_library() -> Self {
        let collection = Self::new();
        for track in [
            NewTrack::new("Windowlicker", "Aphex Twin", "Windowlicker", 1, 367),
            NewTrack::new("Xtal", "Aphex Twin", "Selected Ambient Works 85-92", 1, 291),
            NewTrack::new("Ageispolis", "Aphex Twin", "Selected Ambient Works 85-92", 4, 321),
            NewTrack::new("Roygbiv", "Boards of Canada", "Music Has the Right to Children", 6, 151),
            NewTrack::new("Aquarius", "Boards of Canada", "Music Has the Right to Children", 10, 358),
            NewTrack::new("Teardrop", "Massive Attack", "Mezzanine", 3, 330),
        ] {
            collection.add_track(track);
        }
        collection
    }

    /// Add a track and return it with its assigned id.
    pub fn add_track(&self, track: NewTrack) -> Track {
        let mut tracks = self.tracks.write().unwrap_or_else(PoisonError::into_inner);
        let id = tracks.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        let track = Track {
            id,
            title: track.title,
            artist: track.artist,
            album: track.album,
            track_number: track.track_number,
            duration: track.duration,
        };
        log::debug!("Added track #{} '{}'", track.id, track.title);
        tracks.push(track.clone());
        track
    }

    /// All tracks, sorted by artist, album and track number.
    pub fn tracks(&self) -> Vec<Track> {
        let mut tracks = self.read().clone();
        tracks.sort_by(|a, b| {
            (&a.artist, &a.album, a.track_number).cmp(&(&b.artist, &b.album, b.track_number))
        });
        tracks
    }

    pub fn track(&self, id: u64) -> Option<Track> {
        self.read().iter().find(|t| t.id == id).cloned()
    }

    /// All albums, sorted by artist then title.
    pub fn albums(&self) -> Vec<Album> {
        let mut albums = self.albums_in_insert_order();
        albums.sort_by(|a, b| (&a.artist, &a.title).cmp(&(&b.artist, &b.title)));
        albums
    }

    /// Up to `limit` albums, most recently added first.
    pub fn recent_albums(&self, limit: usize) -> Vec<Album> {
        let mut albums = self.albums_in_insert_order();
        albums.reverse();
        albums.truncate(limit);
        albums
    }

    pub fn find_album(&self, artist: &str, title: &str) -> Option<Album> {
        self.albums_in_insert_order()
            .into_iter()
            .find(|album| album.artist == artist && album.title == title)
    }

    /// All artists, sorted by name.
    pub fn artists(&self) -> Vec<Artist> {
        let mut by_name: HashMap<String, (Vec<String>, usize)> = HashMap::new();
        for track in self.read().iter() {
            let entry = by_name.entry(track.artist.clone()).or_default();
            if !entry.0.contains(&track.album) {
                entry.0.push(track.album.clone());
            }
            entry.1 += 1;
        }
        let mut artists: Vec<Artist> = by_name
            .into_iter()
            .map(|(name, (albums, track_count))| Artist { name, album_count: albums.len(), track_count })
            .collect();
        artists.sort_by(|a, b| a.name.cmp(&b.name));
        artists
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Albums ordered by the position of their most recently added track
    fn albums_in_insert_order(&self) -> Vec<Album> {
        let mut albums: Vec<Album> = Vec::new();
        for track in self.read().iter() {
            match albums
                .iter()
                .position(|a| a.artist == track.artist && a.title == track.album)
            {
                Some(index) => {
                    let mut album = albums.remove(index);
                    album.track_count += 1;
                    album.duration += track.duration;
                    albums.push(album);
                }
                None => albums.push(Album {
                    title: track.album.clone(),
                    artist: track.artist.clone(),
                    track_count: 1,
                    duration: track.duration,
                }),
            }
        }
        albums
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Track>> {
        self.tracks.read().unwrap_or_else(PoisonError::into_inner)
    }
}
