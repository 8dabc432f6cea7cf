use std::time::Duration;

use crate::services::collection::{CollectionService, NewTrack};

#[test]
fn test_add_track_assigns_increasing_ids() {
    let collection = CollectionService::new();
    assert!(collection.is_empty());

    let first = collection.add_track(NewTrack::new("Angel", "Massive Attack", "Mezzanine", 1, 379));
    let second = collection.add_track(NewTrack::new("Risingson", "Massive Attack", "Mezzanine", 2, 298));

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.track(2).unwrap().title, "Risingson");
    assert!(collection.track(3).is_none());
}

#[test]
fn test_albums_and_artists_are_derived() {
    let collection = CollectionService::with_sample_library();

    let albums = collection.albums();
    assert_eq!(albums.len(), 4);
    assert_eq!(albums[0].artist, "Aphex Twin");

    let saw = collection.find_album("Aphex Twin", "Selected Ambient Works 85-92").unwrap();
    assert_eq!(saw.track_count, 2);
    assert_eq!(saw.duration, Duration::from_secs(291 + 321));

    let artists = collection.artists();
    let names: Vec<&str> = artists.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Aphex Twin", "Boards of Canada", "Massive Attack"]);
    assert_eq!(artists[0].album_count, 2);
    assert_eq!(artists[0].track_count, 3);
}

#[test]
fn test_recent_albums_most_recent_first() {
    let collection = CollectionService::with_sample_library();

    let recent = collection.recent_albums(2);

    let titles: Vec<&str> = recent.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Mezzanine", "Music Has the Right to Children"]);
}

#[test]
fn test_tracks_sorted_by_artist_album_number() {
    let collection = CollectionService::new();
    collection.add_track(NewTrack::new("B", "Zed", "One", 2, 10));
    collection.add_track(NewTrack::new("A", "Zed", "One", 1, 10));
    collection.add_track(NewTrack::new("C", "Abe", "Two", 5, 10));

    let titles: Vec<String> = collection.tracks().into_iter().map(|t| t.title).collect();

    assert_eq!(titles, vec!["C", "A", "B"]);
}
