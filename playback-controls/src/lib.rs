//! Playback control state machine for a media player.
//!
//! The media provider and the UI push [`Event`](event::Event)s into a [`Store`](store::Store) (or a shared
//! [`ControlsHandle`](store::ControlsHandle)), which applies them one at a time as pure transitions over a
//! [`ControlsState`](state::ControlsState) snapshot. Concurrent seek requests from the progress bar, drag
//! gestures and programmatic seeks are arbitrated in [`transition::seek`].

pub mod commandline;
pub mod configuration;
pub mod error;
pub mod event;
pub mod hash;
pub mod script;
pub mod state;
pub mod store;
pub mod transition;
