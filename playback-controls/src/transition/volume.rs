use crate::state::{ControlsState, clamp_volume, sanitize_playback_rate};
use tracing::{debug, warn};

/// A NaN volume keeps the previous one.
pub fn set_volume(state: &mut ControlsState, volume: f64) {
	if volume.is_nan() {
		warn!(previous = state.volume, "Ignoring NaN volume.");
		return;
	}
	state.volume = clamp_volume(volume);
}

pub fn set_volume_unmute(state: &mut ControlsState, volume: f64) {
	set_volume(state, volume);
	state.muted = false;
}

/// `offset` is given in percentage points.
pub fn set_volume_by_offset(state: &mut ControlsState, offset: f64) {
	set_volume(state, state.volume + offset / 100.0);
}

pub fn volume_change(state: &mut ControlsState, volume: f64, muted: bool) {
	set_volume(state, volume);
	state.muted = muted;
}

pub fn set_playback_rate(state: &mut ControlsState, rate: f64) {
	let sanitized = sanitize_playback_rate(rate);
	if sanitized.to_bits() != rate.to_bits() {
		debug!(rate, "Invalid playback rate, resetting to {sanitized}.");
	}
	state.playback_rate = sanitized;
}
