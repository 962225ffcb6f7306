use crate::state::ControlsState;
use tracing::warn;

pub fn playing(state: &mut ControlsState) {
	state.paused = false;
	state.ended = false;
	state.waiting = false;
	state.has_started = true;
}

pub fn paused(state: &mut ControlsState) {
	state.paused = true;
}

pub fn seeking(state: &mut ControlsState) {
	state.seeking = true;
}

pub fn seeked(state: &mut ControlsState) {
	state.seeking = false;
}

pub fn ended(state: &mut ControlsState) {
	state.ended = true;
}

pub fn waiting(state: &mut ControlsState) {
	state.waiting = true;
}

/// Record `"{message} ({code})"`. A missing code is rendered as `undefined`.
pub fn error(state: &mut ControlsState, message: &str, code: Option<i64>) {
	let code = code.map_or_else(|| "undefined".to_string(), |code| code.to_string());
	let error = format!("{message} ({code})");
	warn!("Media provider reported an error: {error}");
	state.error = Some(error);
}
