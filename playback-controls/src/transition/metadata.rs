use crate::state::{ControlsState, LARGE_CURRENT_TIME, check_duration};
use tracing::{debug, warn};

#[allow(clippy::float_cmp)]
pub fn time_update(state: &mut ControlsState, time: f64) {
	if time != LARGE_CURRENT_TIME {
		state.current_time = time;
	}
	if state.duration == Some(time) {
		state.ended = true;
	}
}

/// Rejected durations leave the previous duration in place.
pub fn duration_change(state: &mut ControlsState, duration: Option<f64>) {
	if !commit_duration(state, duration) {
		warn!(
			?duration,
			previous = ?state.duration,
			"Ignoring invalid duration, keeping the previous one."
		);
	}
}

/// Unconditionally restore a duration that is known to be good.
pub fn revert_duration(state: &mut ControlsState, duration: f64) {
	state.duration = Some(duration);
}

pub fn progress(state: &mut ControlsState, buffered: f64, duration: Option<f64>) {
	commit_buffered(state, buffered);
	merge_duration(state, duration);
}

pub fn update_basic_info(state: &mut ControlsState, seeking: bool, duration: Option<f64>, buffered: Option<f64>) {
	if let Some(buffered) = buffered {
		commit_buffered(state, buffered);
	}
	merge_duration(state, duration);
	state.seeking = seeking;
}

fn commit_buffered(state: &mut ControlsState, buffered: f64) {
	if buffered >= 0.0 {
		state.buffered = buffered;
	} else {
		warn!(buffered, "Ignoring invalid buffered value.");
	}
}

/// Providers report bogus durations until the metadata is loaded, so merging them is quiet.
fn merge_duration(state: &mut ControlsState, duration: Option<f64>) {
	if !commit_duration(state, duration) {
		debug!(?duration, "Not merging duration.");
	}
}

fn commit_duration(state: &mut ControlsState, duration: Option<f64>) -> bool {
	if check_duration(duration) {
		state.duration = duration;
		true
	} else {
		false
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn time_update_should_move_the_current_time() {
		let mut state = ControlsState::default();

		time_update(&mut state, 13.37);

		assert_eq!(state.current_time, 13.37);
		assert!(!state.ended);
	}

	#[test]
	fn time_update_should_ignore_the_sentinel_time() {
		let mut state = ControlsState::builder().current_time(5.0).build();

		time_update(&mut state, LARGE_CURRENT_TIME);

		assert_eq!(state.current_time, 5.0);
	}

	#[test]
	fn time_update_at_the_duration_should_end_playback() {
		let mut state = ControlsState::builder().duration(Some(42.0)).build();

		time_update(&mut state, 42.0);

		assert!(state.ended);
		assert_eq!(state.current_time, 42.0);
	}

	#[test]
	fn time_update_should_not_touch_an_active_user_seek() {
		use crate::state::{SeekSource, UserSeek};
		let user_seek = UserSeek::new(SeekSource::Drag, 1.0, 20.0, Some(true));
		let mut state = ControlsState::builder().user_seek(Some(user_seek.clone())).build();

		time_update(&mut state, 2.0);

		assert_eq!(state.current_time, 2.0);
		assert_eq!(state.user_seek, Some(user_seek));
	}

	#[test]
	fn duration_change_should_accept_positive_durations() {
		let mut state = ControlsState::default();

		duration_change(&mut state, Some(42.0));

		assert_eq!(state.duration, Some(42.0));
	}

	#[test]
	fn duration_change_should_keep_previous_duration_on_invalid_values() {
		let mut state = ControlsState::builder().duration(Some(42.0)).build();

		for invalid in [Some(0.0), Some(-1.0), Some(f64::NAN), Some(f64::INFINITY), None] {
			duration_change(&mut state, invalid);
			assert_eq!(state.duration, Some(42.0), "Duration was overwritten by {invalid:?}");
		}
	}

	#[test]
	fn revert_duration_should_not_validate() {
		let mut state = ControlsState::builder().duration(Some(42.0)).build();

		revert_duration(&mut state, 0.0);

		assert_eq!(state.duration, Some(0.0));
	}

	#[test]
	fn progress_should_merge_buffered_and_duration() {
		let mut state = ControlsState::default();

		progress(&mut state, 12.5, Some(60.0));

		assert_eq!(state.buffered, 12.5);
		assert_eq!(state.duration, Some(60.0));
	}

	#[test]
	fn progress_should_ignore_negative_buffered() {
		let mut state = ControlsState::builder().buffered(3.0).duration(Some(60.0)).build();

		progress(&mut state, -1.0, Some(f64::NAN));

		assert_eq!(state.buffered, 3.0);
		assert_eq!(state.duration, Some(60.0));
	}

	#[test]
	fn update_basic_info_should_commit_zero_buffered() {
		let mut state = ControlsState::builder().buffered(3.0).build();

		update_basic_info(&mut state, true, None, Some(0.0));

		assert_eq!(state.buffered, 0.0);
		assert!(state.seeking);
	}

	#[test]
	fn update_basic_info_should_leave_missing_or_negative_buffered_alone() {
		let mut state = ControlsState::builder().buffered(3.0).build();

		update_basic_info(&mut state, false, Some(30.0), None);
		assert_eq!(state.buffered, 3.0);

		update_basic_info(&mut state, false, Some(30.0), Some(-2.0));
		assert_eq!(state.buffered, 3.0);
		assert_eq!(state.duration, Some(30.0));
	}
}
