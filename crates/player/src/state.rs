//! Playback queue state machine
//!
//! `PlayerState` is the single source of truth for the queue and the
//! transport flags. Out-of-range navigation is a guarded no-op, never an
//! error; callers that need to know whether navigation is possible ask
//! `has_next`/`has_previous` first (presentation disables the
//! corresponding controls with the same queries).

use podstream_core::Episode;
use rand::Rng;

/// The playback queue and transport flags
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    episode_list: Vec<Episode>,
    current_episode_index: Option<usize>,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
}

impl PlayerState {
    /// Creates an empty, paused state
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the queue with a single episode and starts playing
    ///
    /// Calling this again with the same episode restarts it from the top.
    pub fn play(&mut self, episode: Episode) {
        log::debug!("Playing single episode {}", episode.id);
        self.episode_list = vec![episode];
        self.current_episode_index = Some(0);
        self.is_playing = true;
    }

    /// Replaces the queue with a list and starts playing at `start_index`
    ///
    /// An empty list or an out-of-range index leaves the state untouched.
    pub fn play_list(&mut self, list: Vec<Episode>, start_index: usize) {
        if start_index >= list.len() {
            log::warn!(
                "Rejecting play_list: start index {} out of range for {} episodes",
                start_index,
                list.len()
            );
            return;
        }

        log::debug!("Playing list of {} from index {}", list.len(), start_index);
        self.episode_list = list;
        self.current_episode_index = Some(start_index);
        self.is_playing = true;
    }

    /// Flips between playing and paused
    ///
    /// No-op while the queue is empty; there is nothing to transport.
    pub fn toggle_play(&mut self) {
        if self.episode_list.is_empty() {
            return;
        }
        self.is_playing = !self.is_playing;
    }

    /// Flips repeat-current-episode mode
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    /// Flips random episode selection for "next"
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    /// Records the transport status the media capability actually reports
    ///
    /// Native controls can start or stop playback without going through
    /// `toggle_play`; this keeps the flag consistent with reality.
    pub fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// Moves to the next episode
    ///
    /// While shuffling, picks uniformly over the whole queue; the pick
    /// may land on the current episode again. Otherwise advances by one.
    /// No-op at the end of the queue.
    pub fn play_next(&mut self) {
        let Some(index) = self.current_episode_index else {
            return;
        };

        if self.is_shuffling {
            let next = rand::thread_rng().gen_range(0..self.episode_list.len());
            self.current_episode_index = Some(next);
        } else if index + 1 < self.episode_list.len() {
            self.current_episode_index = Some(index + 1);
        }
    }

    /// Moves to the previous episode; no-op at the start of the queue
    pub fn play_previous(&mut self) {
        if let Some(index) = self.current_episode_index {
            if index > 0 {
                self.current_episode_index = Some(index - 1);
            }
        }
    }

    /// Empties the queue
    ///
    /// Invoked when playback naturally ends with nothing left to advance
    /// to; the state returns to how it started.
    pub fn clear(&mut self) {
        self.episode_list.clear();
        self.current_episode_index = None;
        self.is_playing = false;
    }

    /// True if "next" would change the current episode selection
    pub fn has_next(&self) -> bool {
        match self.current_episode_index {
            Some(index) => self.is_shuffling || index + 1 < self.episode_list.len(),
            None => false,
        }
    }

    /// True if "previous" would move back
    pub fn has_previous(&self) -> bool {
        matches!(self.current_episode_index, Some(index) if index > 0)
    }

    /// The episode the transport currently points at
    pub fn current_episode(&self) -> Option<&Episode> {
        self.current_episode_index
            .and_then(|index| self.episode_list.get(index))
    }

    /// The queued episodes in playback order
    pub fn episode_list(&self) -> &[Episode] {
        &self.episode_list
    }

    pub fn current_episode_index(&self) -> Option<usize> {
        self.current_episode_index
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    pub fn is_empty(&self) -> bool {
        self.episode_list.is_empty()
    }
}
