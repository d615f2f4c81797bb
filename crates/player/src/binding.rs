//! Bridge between the queue state and the media capability
//!
//! The binding is the only code that talks to the [`MediaElement`]. One
//! direction pushes state changes into the element (`sync`); the other
//! feeds element events back into the state (`pump`). Elapsed time lives
//! here, not in `PlayerState`: it belongs to the loaded media, and the
//! state machine's invariants never involve it.

use crate::{MediaElement, MediaEvent, PlayerState};
use crossbeam_channel::Receiver;
use podstream_core::{Duration, EpisodeId};

/// Drives a media element from a `PlayerState` and keeps the two
/// consistent
pub struct PlayerBinding {
    element: Box<dyn MediaElement>,
    events: Receiver<MediaEvent>,
    loaded: Option<EpisodeId>,
    was_playing: bool,
    was_looping: bool,
    progress: Duration,
}

impl PlayerBinding {
    pub fn new(element: Box<dyn MediaElement>) -> Self {
        let events = element.events();
        Self {
            element,
            events,
            loaded: None,
            was_playing: false,
            was_looping: false,
            progress: Duration::ZERO,
        }
    }

    /// Pushes state changes into the media element
    ///
    /// Call after every command that may have changed the current
    /// episode or a transport flag.
    pub fn sync(&mut self, state: &PlayerState) {
        let Some(episode) = state.current_episode() else {
            // Queue emptied out from under a loaded episode
            if self.loaded.take().is_some() {
                self.element.pause();
                self.was_playing = false;
                self.progress = Duration::ZERO;
            }
            return;
        };

        if self.loaded.as_ref() != Some(&episode.id) {
            self.element.load(&episode.url, episode.duration);
            self.loaded = Some(episode.id.clone());
            self.progress = Duration::ZERO;
            self.was_playing = false;
        }

        if state.is_looping() != self.was_looping {
            self.element.set_looping(state.is_looping());
            self.was_looping = state.is_looping();
        }

        if state.is_playing() != self.was_playing {
            if state.is_playing() {
                self.element.play();
            } else {
                self.element.pause();
            }
            self.was_playing = state.is_playing();
        }
    }

    /// Drains pending element events into the state, then re-syncs
    ///
    /// Re-syncing matters when an `Ended` event advanced the queue: the
    /// next episode must be loaded into the element in the same pass.
    pub fn pump(&mut self, state: &mut PlayerState) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(state, event);
        }
        self.sync(state);
    }

    /// Advances the element's clock and processes whatever it reported
    pub fn tick(&mut self, state: &mut PlayerState) {
        self.element.tick();
        self.pump(state);
    }

    fn handle_event(&mut self, state: &mut PlayerState, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate(position) => {
                self.progress = position;
            }
            MediaEvent::LoadedMetadata => {
                self.progress = Duration::ZERO;
            }
            MediaEvent::Play => {
                state.set_playing_state(true);
                self.was_playing = true;
            }
            MediaEvent::Pause => {
                state.set_playing_state(false);
                self.was_playing = false;
            }
            MediaEvent::Ended => {
                log::debug!("Episode ended, has_next = {}", state.has_next());
                if state.has_next() {
                    state.play_next();
                } else {
                    state.clear();
                }
            }
        }
    }

    /// Jumps the loaded media to the given elapsed time
    ///
    /// The only way elapsed time moves backward or jumps forward
    /// discontinuously. No-op when nothing is loaded.
    pub fn seek(&mut self, state: &PlayerState, position: Duration) {
        let Some(episode) = state.current_episode() else {
            return;
        };
        let clamped = position.min(episode.duration);
        self.element.seek(clamped);
        self.progress = clamped;
    }

    /// Elapsed time of the loaded media
    pub fn progress(&self) -> Duration {
        self.progress
    }
}
