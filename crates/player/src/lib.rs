//! Playback engine for PodStream
//!
//! Three pieces, kept deliberately separate:
//!
//! - [`PlayerState`] owns what is queued and what is playing. All
//!   mutation goes through its named commands; presentation code only
//!   reads it.
//! - [`MediaElement`] is the seam to the host's media-playback
//!   capability. This crate never decodes audio; it drives whatever
//!   implements the trait and reacts to the events it reports.
//! - [`PlayerBinding`] bridges the two: it pushes state changes into the
//!   element and feeds element events (including ones originating from
//!   native controls) back into the state.

mod binding;
mod media;
mod state;

pub use binding::PlayerBinding;
pub use media::{MediaElement, MediaEvent, SimulatedMediaElement};
pub use state::PlayerState;
