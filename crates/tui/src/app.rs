//! Main application logic
//!
//! Owns the UI state, the playback queue and the media binding. All
//! mutation happens on this event loop, one event at a time: key
//! handlers issue queue commands and re-sync the binding; the tick
//! advances the media clock and drains capability events.

use crate::{
    error::TuiResult,
    events::{AppEvent, EventHandler},
    state::{AppState, View},
    theme::{Theme, ThemeType},
    ui,
};
use crossterm::event::{KeyCode, KeyModifiers};
use podstream_core::{Duration as CoreDuration, Episode};
use podstream_player::{MediaElement, PlayerBinding, PlayerState, SimulatedMediaElement};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

/// Tunables handed over from configuration
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// How many listed episodes count as latest releases
    pub latest_count: usize,
    /// Event-loop tick rate in milliseconds
    pub tick_rate_ms: u64,
    /// Seconds moved per seek key press
    pub seek_step_secs: u64,
    /// Start playback as soon as an episode is loaded
    pub autoplay: bool,
    /// Color theme
    pub theme: ThemeType,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            latest_count: 2,
            tick_rate_ms: 250,
            seek_step_secs: 10,
            autoplay: true,
            theme: ThemeType::Dark,
        }
    }
}

/// The main TUI application
pub struct App {
    state: AppState,
    player: PlayerState,
    binding: PlayerBinding,
    event_handler: EventHandler,
    theme: Theme,
    seek_step: CoreDuration,
    autoplay: bool,
}

impl App {
    /// Creates an application over a fetched episode listing
    pub fn new(episodes: Vec<Episode>, options: AppOptions) -> Self {
        Self::with_element(episodes, options, Box::new(SimulatedMediaElement::new()))
    }

    /// Creates an application driving a specific media element
    pub fn with_element(
        episodes: Vec<Episode>,
        options: AppOptions,
        element: Box<dyn MediaElement>,
    ) -> Self {
        Self {
            state: AppState::new(episodes, options.latest_count),
            player: PlayerState::new(),
            binding: PlayerBinding::new(element),
            event_handler: EventHandler::new(Duration::from_millis(options.tick_rate_ms)),
            theme: Theme::new(options.theme),
            seek_step: CoreDuration::from_seconds(options.seek_step_secs),
            autoplay: options.autoplay,
        }
    }

    /// Queues a single episode immediately (the `play <id>` entry path)
    pub fn play_now(&mut self, episode: Episode) {
        let title = episode.title.clone();
        self.player.play(episode);
        if !self.autoplay {
            self.player.set_playing_state(false);
        }
        self.binding.sync(&self.player);
        self.state.set_status(format!("Playing: {}", title));
    }

    /// Runs the application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> TuiResult<()> {
        while !self.state.should_quit {
            terminal.draw(|frame| {
                ui::render(
                    frame,
                    &self.state,
                    &self.player,
                    self.binding.progress(),
                    &self.theme,
                )
            })?;

            match self.event_handler.next()? {
                AppEvent::Key(key) => self.handle_key(key.code, key.modifiers)?,
                AppEvent::Quit => self.state.quit(),
                AppEvent::Tick => self.handle_tick()?,
                AppEvent::Resize(_, _) => {
                    // Terminal will handle resize automatically
                }
            }
        }

        Ok(())
    }

    /// Handles key events
    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> TuiResult<()> {
        // Global keys
        match code {
            KeyCode::Char('h') => {
                if self.state.view == View::Help {
                    self.state.set_view(View::Home);
                } else {
                    self.state.set_view(View::Help);
                }
                return Ok(());
            }
            KeyCode::Char('t') => {
                let next = match self.theme.theme_type {
                    ThemeType::Dark => ThemeType::Light,
                    ThemeType::Light => ThemeType::Dark,
                };
                self.theme = Theme::new(next);
                self.state.set_status(format!("Theme: {}", next.name()));
                return Ok(());
            }
            KeyCode::Esc => {
                self.state.set_view(View::Home);
                return Ok(());
            }
            _ => {}
        }

        if self.handle_transport_key(code) {
            return Ok(());
        }

        // View-specific keys
        match self.state.view {
            View::Home => self.handle_home_keys(code),
            View::Episode => self.handle_episode_keys(code),
            View::Help => {
                // Any key handled globally
            }
        }

        Ok(())
    }

    /// Transport keys work in every view but only while something is
    /// queued; with an empty queue they fall through ignored
    fn handle_transport_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(' ') => {
                if !self.player.is_empty() {
                    self.player.toggle_play();
                    self.binding.sync(&self.player);
                    self.state.set_status(if self.player.is_playing() {
                        "Playing"
                    } else {
                        "Paused"
                    });
                }
                true
            }
            KeyCode::Char('n') => {
                if self.player.has_next() {
                    self.player.play_next();
                    self.binding.sync(&self.player);
                    self.announce_current();
                }
                true
            }
            KeyCode::Char('b') => {
                if self.player.has_previous() {
                    self.player.play_previous();
                    self.binding.sync(&self.player);
                    self.announce_current();
                }
                true
            }
            KeyCode::Char('s') => {
                // Shuffling a single-episode queue is meaningless
                if self.player.episode_list().len() > 1 {
                    self.player.toggle_shuffle();
                    self.state.set_status(if self.player.is_shuffling() {
                        "Shuffle on"
                    } else {
                        "Shuffle off"
                    });
                }
                true
            }
            KeyCode::Char('l') => {
                if !self.player.is_empty() {
                    self.player.toggle_loop();
                    self.binding.sync(&self.player);
                    self.state.set_status(if self.player.is_looping() {
                        "Loop on"
                    } else {
                        "Loop off"
                    });
                }
                true
            }
            KeyCode::Left => {
                if !self.player.is_empty() {
                    let target = self.binding.progress().saturating_sub(self.seek_step);
                    self.binding.seek(&self.player, target);
                }
                true
            }
            KeyCode::Right => {
                if let Some(duration) = self.player.current_episode().map(|e| e.duration) {
                    let target = self
                        .binding
                        .progress()
                        .add_clamped(self.seek_step, duration);
                    self.binding.seek(&self.player, target);
                }
                true
            }
            _ => false,
        }
    }

    /// Handles home view keys
    fn handle_home_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.select_previous();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.select_next();
            }
            KeyCode::Enter => {
                if self.state.selected_episode().is_some() {
                    let list = self.state.episodes().to_vec();
                    self.player.play_list(list, self.state.selected_item);
                    if !self.autoplay {
                        self.player.set_playing_state(false);
                    }
                    self.binding.sync(&self.player);
                    self.announce_current();
                }
            }
            KeyCode::Char('o') => {
                self.state.open_detail(self.state.selected_item);
            }
            _ => {}
        }
    }

    /// Handles episode detail view keys
    fn handle_episode_keys(&mut self, code: KeyCode) {
        if code == KeyCode::Char('p') {
            if let Some(episode) = self.state.detail_episode().cloned() {
                self.play_now(episode);
            }
        }
    }

    /// Handles tick events
    fn handle_tick(&mut self) -> TuiResult<()> {
        self.binding.tick(&mut self.player);
        Ok(())
    }

    fn announce_current(&mut self) {
        if let Some(title) = self.player.current_episode().map(|e| e.title.clone()) {
            self.state.set_status(format!("Playing: {}", title));
        }
    }
}
