//! Media element adapter surface
//!
//! Playback itself is delegated to whatever capability the host supplies
//! (a native audio backend, a browser audio element behind FFI, a test
//! double). This module defines the seam and a wall-clock simulation of
//! it for environments without real audio output.

use crossbeam_channel::{unbounded, Receiver, Sender};
use podstream_core::Duration;
use std::time::Instant;

/// Events a media-playback capability reports back
///
/// `Play`/`Pause` may originate from native controls rather than our own
/// commands; consumers must treat them as the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Elapsed time moved
    TimeUpdate(Duration),
    /// A loaded resource is ready; elapsed time is back at zero
    LoadedMetadata,
    /// Playback started
    Play,
    /// Playback paused
    Pause,
    /// The media played to its end (not emitted while looping)
    Ended,
}

/// Abstraction over the host's media-playback capability
pub trait MediaElement {
    /// Loads a media resource and resets elapsed time
    ///
    /// `duration` is the known media length; a backend that probes the
    /// media itself is free to ignore the hint.
    fn load(&mut self, url: &str, duration: Duration);

    /// Starts playback of the loaded resource
    fn play(&mut self);

    /// Pauses playback
    fn pause(&mut self);

    /// Jumps to the given elapsed time
    fn seek(&mut self, position: Duration);

    /// Repeat the loaded media indefinitely instead of ending
    fn set_looping(&mut self, looping: bool);

    /// Current elapsed time
    fn position(&self) -> Duration;

    /// Event stream; the subscription lives as long as the element
    fn events(&self) -> Receiver<MediaEvent>;

    /// Advances internal clocks for poll-driven implementations
    fn tick(&mut self) {}
}

/// Wall-clock driven stand-in for a real audio backend
///
/// Advances elapsed time while "playing" and reports the same events a
/// real capability would. `tick` must be called periodically (the TUI
/// does so on its event-loop tick).
pub struct SimulatedMediaElement {
    tx: Sender<MediaEvent>,
    rx: Receiver<MediaEvent>,
    url: Option<String>,
    duration: Duration,
    looping: bool,
    playing: bool,
    elapsed_secs: f64,
    last_tick: Option<Instant>,
}

impl SimulatedMediaElement {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            tx,
            rx,
            url: None,
            duration: Duration::ZERO,
            looping: false,
            playing: false,
            elapsed_secs: 0.0,
            last_tick: None,
        }
    }

    /// The URL currently loaded, if any
    pub fn loaded_url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn emit(&self, event: MediaEvent) {
        // Send only fails when the receiver is gone, i.e. teardown
        let _ = self.tx.send(event);
    }

    fn advance_clock(&mut self) {
        let now = Instant::now();
        if self.playing {
            if let Some(last) = self.last_tick {
                self.elapsed_secs += now.duration_since(last).as_secs_f64();
            }
        }
        self.last_tick = Some(now);
    }
}

impl Default for SimulatedMediaElement {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaElement for SimulatedMediaElement {
    fn load(&mut self, url: &str, duration: Duration) {
        self.url = Some(url.to_string());
        self.duration = duration;
        self.playing = false;
        self.elapsed_secs = 0.0;
        self.last_tick = None;
        self.emit(MediaEvent::LoadedMetadata);
    }

    fn play(&mut self) {
        if self.url.is_none() {
            log::warn!("play() with no media loaded");
            return;
        }
        if !self.playing {
            self.playing = true;
            self.last_tick = Some(Instant::now());
            self.emit(MediaEvent::Play);
        }
    }

    fn pause(&mut self) {
        if self.playing {
            self.advance_clock();
            self.playing = false;
            self.emit(MediaEvent::Pause);
        }
    }

    fn seek(&mut self, position: Duration) {
        if self.url.is_none() {
            log::warn!("seek() with no media loaded");
            return;
        }
        let clamped = position.min(self.duration);
        self.elapsed_secs = clamped.as_seconds() as f64;
        self.last_tick = Some(Instant::now());
        self.emit(MediaEvent::TimeUpdate(clamped));
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn position(&self) -> Duration {
        Duration::from_seconds(self.elapsed_secs as u64)
    }

    fn events(&self) -> Receiver<MediaEvent> {
        self.rx.clone()
    }

    fn tick(&mut self) {
        if !self.playing {
            return;
        }

        self.advance_clock();

        let total = self.duration.as_seconds() as f64;
        if !self.duration.is_zero() && self.elapsed_secs >= total {
            if self.looping {
                self.elapsed_secs = 0.0;
                self.emit(MediaEvent::TimeUpdate(Duration::ZERO));
            } else {
                self.elapsed_secs = total;
                self.playing = false;
                self.emit(MediaEvent::Ended);
            }
        } else {
            self.emit(MediaEvent::TimeUpdate(self.position()));
        }
    }
}
