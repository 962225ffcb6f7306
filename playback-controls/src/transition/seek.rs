//! Arbitration between concurrent attempts to move the playhead.
//!
//! Progress bar and drag seeks are two gestures for the same intent and may supersede each other.
//! A manual seek is programmatic or keyboard driven: it overrides everything and can only be
//! concluded by [`SeekIntent::ManualDone`].

use crate::state::{ControlsState, SeekSource, UserSeek, clamp_time};
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeekIntent {
	/// Absolute target picked on the progress bar.
	ProgressBar { time: f64 },
	ProgressBarEnd,
	/// Offset from where the drag started.
	Drag { delta: f64 },
	DragEnd,
	/// Absolute target.
	Manual { time: f64 },
	/// Offset from the current time.
	ManualOffset { offset: f64 },
	ManualDone,
}

impl SeekIntent {
	/// Targets, deltas and offsets must be finite to be clamped into the media.
	fn is_finite(&self) -> bool {
		match *self {
			Self::ProgressBar { time } | Self::Manual { time } => time.is_finite(),
			Self::Drag { delta } => delta.is_finite(),
			Self::ManualOffset { offset } => offset.is_finite(),
			Self::ProgressBarEnd | Self::DragEnd | Self::ManualDone => true,
		}
	}
}

/// What an incoming intent does to the active seek.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Verdict {
	/// Leave the state alone.
	Ignore,
	/// Start a new seek, replacing whatever seek was active.
	Begin(SeekStart),
	/// Move the target of the active seek.
	Extend(SeekMove),
	/// Apply the seek target and end the seek. Nothing happens without an active seek.
	Commit,
}

/// The intents that can start a seek.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeekStart {
	ProgressBar { time: f64 },
	/// Anchors at the current time, the delta of the starting tick is relative to nothing yet.
	Drag,
	Manual { time: f64 },
	ManualOffset { offset: f64 },
}

/// The intents that can move the target of a seek of the same source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeekMove {
	ProgressBar { time: f64 },
	Drag { delta: f64 },
}

/// The complete priority table, keyed by the source of the active seek and the incoming intent.
///
/// | active \ intent | progress bar | progress bar end | drag   | drag end | manual (offset) | manual done |
/// |-----------------|--------------|------------------|--------|----------|-----------------|-------------|
/// | none            | Begin        | Commit           | Begin  | Commit   | Begin           | Commit      |
/// | progress bar    | Extend       | Commit           | Ignore | Ignore   | Begin           | Commit      |
/// | drag            | Begin        | Commit           | Extend | Commit   | Begin           | Commit      |
/// | manual          | Ignore       | Ignore           | Ignore | Ignore   | Begin           | Commit      |
pub fn arbitrate(active: Option<SeekSource>, intent: &SeekIntent) -> Verdict {
	use SeekIntent as Intent;
	use SeekSource::*;
	match (active, *intent) {
		(Some(Manual), Intent::ProgressBar { .. } | Intent::ProgressBarEnd | Intent::Drag { .. } | Intent::DragEnd) => {
			Verdict::Ignore
		}
		(_, Intent::Manual { time }) => Verdict::Begin(SeekStart::Manual { time }),
		(_, Intent::ManualOffset { offset }) => Verdict::Begin(SeekStart::ManualOffset { offset }),
		(_, Intent::ManualDone) => Verdict::Commit,

		(Some(ProgressBar), Intent::ProgressBar { time }) => Verdict::Extend(SeekMove::ProgressBar { time }),
		(None | Some(Drag), Intent::ProgressBar { time }) => Verdict::Begin(SeekStart::ProgressBar { time }),
		(None | Some(ProgressBar) | Some(Drag), Intent::ProgressBarEnd) => Verdict::Commit,

		(Some(ProgressBar), Intent::Drag { .. } | Intent::DragEnd) => Verdict::Ignore,
		(None, Intent::Drag { .. }) => Verdict::Begin(SeekStart::Drag),
		(Some(Drag), Intent::Drag { delta }) => Verdict::Extend(SeekMove::Drag { delta }),
		(None | Some(Drag), Intent::DragEnd) => Verdict::Commit,
	}
}

/// Run `intent` through [`arbitrate`] and apply the verdict.
///
/// Intents carrying a non-finite time, delta or offset are rejected before arbitration.
pub fn apply(state: &mut ControlsState, intent: SeekIntent) {
	if !intent.is_finite() {
		warn!("Rejecting {intent:?}, its time is not finite.");
		return;
	}

	let active = state.active_seek_source();
	match arbitrate(active, &intent) {
		Verdict::Ignore => debug!("Ignoring {intent:?} during active {active:?} seek."),
		Verdict::Commit => commit(state),
		Verdict::Begin(SeekStart::ProgressBar { time }) => {
			let target = clamp_time(time, state.duration);
			begin(state, UserSeek::new(SeekSource::ProgressBar, target, target, None));
		}
		Verdict::Begin(SeekStart::Drag) => {
			let anchor = state.current_time;
			// a drag always pauses, and ending it keeps playback paused
			state.paused = true;
			let paused_before_seek = state.paused;
			begin(
				state,
				UserSeek::new(SeekSource::Drag, anchor, anchor, Some(paused_before_seek)),
			);
		}
		Verdict::Begin(SeekStart::Manual { time }) => {
			let target = clamp_time(time, state.duration);
			begin(state, UserSeek::new(SeekSource::Manual, target, target, None));
		}
		Verdict::Begin(SeekStart::ManualOffset { offset }) => {
			let target = clamp_time(state.current_time + offset, state.duration);
			let user_seek = UserSeek::new(SeekSource::Manual, state.current_time, target, None);
			begin(state, user_seek);
		}
		Verdict::Extend(SeekMove::ProgressBar { time }) => {
			let target = clamp_time(time, state.duration);
			extend(state, |_| target);
		}
		Verdict::Extend(SeekMove::Drag { delta }) => {
			let duration = state.duration;
			extend(state, |user_seek| clamp_time(user_seek.initial_time + delta, duration));
		}
	}
}

fn begin(state: &mut ControlsState, user_seek: UserSeek) {
	if let Some(replaced) = &state.user_seek {
		debug!("{} seek overrides active {} seek.", user_seek.source, replaced.source);
	}
	debug!(
		source = %user_seek.source,
		initial_time = user_seek.initial_time,
		target = user_seek.current_time,
		"Seek started."
	);
	state.user_seek = Some(user_seek);
}

fn extend(state: &mut ControlsState, target: impl FnOnce(&UserSeek) -> f64) {
	if let Some(user_seek) = state.user_seek.as_mut() {
		user_seek.current_time = target(user_seek);
	}
}

/// Write the seek target into the current time and end the seek.
fn commit(state: &mut ControlsState) {
	let Some(user_seek) = state.user_seek.take() else {
		return;
	};

	state.current_time = user_seek.current_time;
	if let Some(paused) = user_seek.paused_before_seek {
		state.paused = paused;
	}
	debug!(
		source = %user_seek.source,
		time = state.current_time,
		paused = state.paused,
		"Seek committed."
	);
}
