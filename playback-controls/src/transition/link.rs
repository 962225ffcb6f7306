use crate::hash::parse_hash;
use crate::state::{ControlsState, Fragment};
use tracing::debug;

const LOOP_FLAG: &str = "loop";
const AUTOPLAY_FLAG: &str = "autoplay";
const MUTED_FLAG: &str = "muted";

/// Apply the hash of a link: fragment plus `loop`, `autoplay` and `muted` flags.
///
/// A timestamp moves the current time to it. Only links actually followed by the user start playback.
pub fn set_hash(state: &mut ControlsState, hash: &str, from_link: bool) {
	let parsed = parse_hash(hash);
	let fragment = parsed.time_span.map(Fragment::from);
	debug!(hash, from_link, ?fragment, "Applying hash.");

	state.fragment = fragment;
	state.looping = parsed.query.is(LOOP_FLAG);
	state.autoplay = parsed.query.is(AUTOPLAY_FLAG);
	state.muted = parsed.query.is(MUTED_FLAG);

	if let Some(fragment) = fragment.filter(Fragment::is_timestamp) {
		if from_link {
			state.paused = false;
		}
		state.current_time = fragment.start;
	}
}

pub fn set_fragment(state: &mut ControlsState, fragment: Option<Fragment>) {
	state.fragment = fragment;
	if fragment.is_some_and(|fragment| fragment.is_timestamp()) {
		state.paused = false;
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn timestamp_from_link_should_start_playing_at_the_timestamp() {
		let mut state = ControlsState::default();

		set_hash(&mut state, "00:10-00:10", true);

		assert!(!state.paused);
		assert_eq!(state.current_time, 10.0);
		assert_eq!(state.fragment, Some(Fragment::timestamp(10.0)));
	}

	#[test]
	fn timestamp_not_from_link_should_only_move_the_current_time() {
		let mut state = ControlsState::default();

		set_hash(&mut state, "t=42", false);

		assert!(state.paused);
		assert_eq!(state.current_time, 42.0);
	}

	#[test]
	fn range_from_link_should_not_start_playing() {
		let mut state = ControlsState::default();

		set_hash(&mut state, "00:10-00:20", true);

		assert!(state.paused);
		assert_eq!(state.current_time, 0.0);
		assert_eq!(state.fragment, Some(Fragment::new(10.0, 20.0)));
	}

	#[test]
	fn hash_should_set_flags() {
		let mut state = ControlsState::default();

		set_hash(&mut state, "#t=5,10&loop&autoplay&muted=false", true);

		assert!(state.looping);
		assert!(state.autoplay);
		assert!(!state.muted);
	}

	#[test]
	fn hash_without_fragment_should_clear_fragment_and_flags() {
		let mut state = ControlsState::builder()
			.fragment(Some(Fragment::new(1.0, 2.0)))
			.looping(true)
			.muted(true)
			.build();

		set_hash(&mut state, "", true);

		assert_eq!(state.fragment, None);
		assert!(!state.looping);
		assert!(!state.muted);
		assert!(state.paused);
	}

	#[test]
	fn set_fragment_with_timestamp_should_start_playing() {
		let mut state = ControlsState::default();

		set_fragment(&mut state, Some(Fragment::timestamp(3.0)));

		assert!(!state.paused);
		assert_eq!(state.fragment, Some(Fragment::timestamp(3.0)));
	}

	#[test]
	fn set_fragment_with_range_should_not_start_playing() {
		let mut state = ControlsState::default();

		set_fragment(&mut state, Some(Fragment::new(3.0, 4.0)));

		assert!(state.paused);
	}

	#[test]
	fn fragment_should_not_restart_playback_retroactively() {
		let mut state = ControlsState::default();
		set_fragment(&mut state, Some(Fragment::timestamp(3.0)));
		state.paused = true;

		crate::transition::volume::set_volume(&mut state, 0.5);

		assert!(state.paused);
	}
}
