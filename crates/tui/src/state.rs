//! UI application state
//!
//! Holds what the terminal shows: the fetched episode listing, the
//! active view and per-view selections. The playback queue itself lives
//! in `podstream_player::PlayerState`; this struct never duplicates it.

use podstream_core::Episode;
use std::collections::HashMap;

/// Available views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Episode listing (latest releases + all episodes)
    Home,
    /// Detail page for one episode
    Episode,
    Help,
}

impl Default for View {
    fn default() -> Self {
        Self::Home
    }
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current view
    pub view: View,
    /// Should quit
    pub should_quit: bool,
    /// Episodes fetched for the listing, newest first
    episodes: Vec<Episode>,
    /// How many of `episodes` are shown as latest releases
    latest_count: usize,
    /// Selected listing item
    pub selected_item: usize,
    /// Episode shown in the detail view (index into `episodes`)
    detail_index: Option<usize>,
    /// Status message
    pub status_message: Option<String>,
    /// Per-view selection states (preserves cursor position when
    /// switching views)
    view_selections: HashMap<View, usize>,
}

impl AppState {
    /// Creates state over a fetched listing
    pub fn new(episodes: Vec<Episode>, latest_count: usize) -> Self {
        Self {
            view: View::default(),
            should_quit: false,
            latest_count: latest_count.min(episodes.len()),
            episodes,
            selected_item: 0,
            detail_index: None,
            status_message: None,
            view_selections: HashMap::new(),
        }
    }

    /// The fetched listing
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// The newest episodes highlighted at the top of the home view
    pub fn latest_episodes(&self) -> &[Episode] {
        &self.episodes[..self.latest_count]
    }

    /// The remaining episodes below the latest section
    pub fn older_episodes(&self) -> &[Episode] {
        &self.episodes[self.latest_count..]
    }

    pub fn latest_count(&self) -> usize {
        self.latest_count
    }

    /// The episode under the listing cursor
    pub fn selected_episode(&self) -> Option<&Episode> {
        self.episodes.get(self.selected_item)
    }

    /// The episode the detail view shows
    pub fn detail_episode(&self) -> Option<&Episode> {
        self.detail_index.and_then(|i| self.episodes.get(i))
    }

    /// Opens the detail view for a listing index
    pub fn open_detail(&mut self, index: usize) {
        if index < self.episodes.len() {
            self.detail_index = Some(index);
            self.set_view(View::Episode);
        }
    }

    /// Sets the current view and preserves/restores selection state
    pub fn set_view(&mut self, view: View) {
        self.save_view_selection();
        self.view = view;
        self.restore_view_selection();
    }

    fn save_view_selection(&mut self) {
        self.view_selections.insert(self.view, self.selected_item);
    }

    fn restore_view_selection(&mut self) {
        self.selected_item = *self.view_selections.get(&self.view).unwrap_or(&0);
    }

    /// Requests quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Sets a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clears the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Selects the next item in the current view
    pub fn select_next(&mut self) {
        let max_item = self.max_items_for_view().saturating_sub(1);
        if self.selected_item < max_item {
            self.selected_item += 1;
            self.save_view_selection();
        }
    }

    /// Selects the previous item in the current view
    pub fn select_previous(&mut self) {
        if self.selected_item > 0 {
            self.selected_item -= 1;
            self.save_view_selection();
        }
    }

    /// Resets selection to the first item
    pub fn reset_selection(&mut self) {
        self.selected_item = 0;
        self.save_view_selection();
    }

    fn max_items_for_view(&self) -> usize {
        match self.view {
            View::Home => self.episodes.len(),
            _ => 0,
        }
    }
}
