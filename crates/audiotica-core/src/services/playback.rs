use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::kernel::component::KernelComponent;
use crate::kernel::error::{Error, Result};
use crate::services::collection::Track;

/// Transport state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

#[derive(Debug)]
struct PlayQueue {
    tracks: Vec<Track>,
    index: Option<usize>,
    state: PlaybackState,
}

/// Play queue and transport state. Audio output itself lives outside the core.
#[derive(Debug)]
pub struct PlaybackService {
    name: &'static str,
    queue: Mutex<PlayQueue>,
}

impl PlaybackService {
    pub fn new() -> Self {
        Self {
            name: "PlaybackService",
            queue: Mutex::new(PlayQueue {
                tracks: Vec::new(),
                index: None,
                state: PlaybackState::Stopped,
            }),
        }
    }

    /// Append tracks to the end of the queue.
    pub fn enqueue(&self, tracks: impl IntoIterator<Item = Track>) {
        let mut queue = self.lock_queue();
        queue.tracks.extend(tracks);
    }

    /// Start playing the queue entry at `index`.
    pub fn play_at(&self, index: usize) -> Result<Track> {
        let mut queue = self.lock_queue();
        let track = queue.tracks.get(index).cloned().ok_or_else(|| {
            Error::Other(format!("Queue position {} is out of range ({} queued)", index, queue.tracks.len()))
        })?;
        queue.index = Some(index);
        queue.state = PlaybackState::Playing;
        log::info!("Playing '{}' by {}", track.title, track.artist);
        Ok(track)
    }

    /// Advance to the next entry. Stops at the end of the queue.
    pub fn next(&self) -> Option<Track> {
        let mut queue = self.lock_queue();
        let next = queue.index.map_or(0, |i| i + 1);
        match queue.tracks.get(next).cloned() {
            Some(track) => {
                queue.index = Some(next);
                queue.state = PlaybackState::Playing;
                Some(track)
            }
            None => {
                queue.state = PlaybackState::Stopped;
                None
            }
        }
    }

    /// Step back one entry, staying on the first one.
    pub fn previous(&self) -> Option<Track> {
        let mut queue = self.lock_queue();
        let previous = queue.index?.saturating_sub(1);
        queue.index = Some(previous);
        queue.tracks.get(previous).cloned()
    }

    /// Toggle between playing and paused. A stopped player stays stopped.
    pub fn toggle_pause(&self) -> PlaybackState {
        let mut queue = self.lock_queue();
        queue.state = match queue.state {
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Playing,
            PlaybackState::Stopped => PlaybackState::Stopped,
        };
        queue.state
    }

    pub fn stop_playback(&self) {
        self.lock_queue().state = PlaybackState::Stopped;
    }

    pub fn current_track(&self) -> Option<Track> {
        let queue = self.lock_queue();
        queue.index.and_then(|i| queue.tracks.get(i).cloned())
    }

    pub fn queue(&self) -> Vec<Track> {
        self.lock_queue().tracks.clone()
    }

    pub fn state(&self) -> PlaybackState {
        self.lock_queue().state
    }

    pub fn clear(&self) {
        let mut queue = self.lock_queue();
        queue.tracks.clear();
        queue.index = None;
        queue.state = PlaybackState::Stopped;
    }

    fn lock_queue(&self) -> MutexGuard<'_, PlayQueue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PlaybackService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KernelComponent for PlaybackService {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn start(&self) -> Result<()> {
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        self.stop_playback();
        Ok(())
    }
}
