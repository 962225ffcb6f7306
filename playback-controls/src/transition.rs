//! Pure transitions of the controls state.
//!
//! [`reduce`] copies the snapshot and applies exactly one event to the copy. The functions in the
//! submodules only ever see that private copy, so no consumer can observe a half applied event.

use crate::event::{ControlRequest, Event, MediaEvent};
use crate::state::ControlsState;
use crate::transition::seek::SeekIntent;
use tracing::trace;

pub mod lifecycle;
pub mod link;
pub mod metadata;
pub mod seek;
pub mod volume;

/// Apply `event` to `state`, returning the new snapshot.
///
/// `initial` is the snapshot a [`ControlRequest::Reset`] returns to.
#[must_use = "returns the new snapshot, the old one is left untouched"]
pub fn reduce(initial: &ControlsState, state: &ControlsState, event: &Event) -> ControlsState {
	trace!("Applying {event:?}");
	let mut next = state.clone();
	match event {
		Event::Media(media_event) => apply_media_event(&mut next, media_event),
		Event::Control(request) => apply_control_request(initial, &mut next, request),
	}
	next
}

fn apply_media_event(state: &mut ControlsState, event: &MediaEvent) {
	use MediaEvent::*;
	match event {
		TimeUpdate { time } => metadata::time_update(state, *time),
		DurationChange { duration } => metadata::duration_change(state, *duration),
		RevertDuration { duration } => metadata::revert_duration(state, *duration),
		Progress { buffered, duration } => metadata::progress(state, *buffered, *duration),
		UpdateBasicInfo {
			seeking,
			duration,
			buffered,
		} => metadata::update_basic_info(state, *seeking, *duration, *buffered),
		Seeking => lifecycle::seeking(state),
		Seeked => lifecycle::seeked(state),
		Playing => lifecycle::playing(state),
		Paused => lifecycle::paused(state),
		RateChange { rate } => volume::set_playback_rate(state, *rate),
		VolumeChange { volume, muted } => volume::volume_change(state, *volume, *muted),
		FullscreenChange { fullscreen } => state.fullscreen = *fullscreen,
		Ended => lifecycle::ended(state),
		Waiting => lifecycle::waiting(state),
		Error { message, code } => lifecycle::error(state, message, *code),
	}
}

fn apply_control_request(initial: &ControlsState, state: &mut ControlsState, request: &ControlRequest) {
	use ControlRequest::*;
	match request {
		SetHash { hash, from_link } => link::set_hash(state, hash, *from_link),
		SetFragment { fragment } => link::set_fragment(state, *fragment),
		Reset => *state = initial.clone(),
		Play => state.paused = false,
		Pause => state.paused = true,
		TogglePlay => state.paused = !state.paused,
		SetFullscreen { fullscreen } => state.fullscreen = *fullscreen,
		ToggleFullscreen => state.fullscreen = !state.fullscreen,
		SetPlaybackRate { rate } => volume::set_playback_rate(state, *rate),
		SetMute { muted } => state.muted = *muted,
		ToggleMute => state.muted = !state.muted,
		SetVolume { volume } => volume::set_volume(state, *volume),
		SetVolumeUnmute { volume } => volume::set_volume_unmute(state, *volume),
		SetVolumeByOffset { offset } => volume::set_volume_by_offset(state, *offset),
		SetLoop { looping } => state.looping = *looping,
		SetAutoplay { autoplay } => state.autoplay = *autoplay,
		ProgressBarSeek { time } => seek::apply(state, SeekIntent::ProgressBar { time: *time }),
		ProgressBarSeekEnd => seek::apply(state, SeekIntent::ProgressBarEnd),
		DragSeek { delta } => seek::apply(state, SeekIntent::Drag { delta: *delta }),
		DragSeekEnd => seek::apply(state, SeekIntent::DragEnd),
		ManualSeek { time } => seek::apply(state, SeekIntent::Manual { time: *time }),
		ManualOffsetSeek { offset } => seek::apply(state, SeekIntent::ManualOffset { offset: *offset }),
		ManualSeekDone => seek::apply(state, SeekIntent::ManualDone),
	}
}
