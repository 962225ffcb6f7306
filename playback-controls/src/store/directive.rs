use crate::state::ControlsState;
use serde::{Deserialize, Serialize};

/// Tells the provider adapter to imperatively set the clock of the media element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum SeekDirective {
	/// A user seek started or moved its target.
	Preview { time: f64 },
	/// A user seek ended, the current time was force-applied.
	Commit { time: f64 },
}

impl SeekDirective {
	/// Compare two consecutive snapshots.
	pub fn between(previous: &ControlsState, next: &ControlsState) -> Option<Self> {
		match (&previous.user_seek, &next.user_seek) {
			(_, Some(user_seek)) if previous.user_seek.as_ref() != Some(user_seek) => Some(SeekDirective::Preview {
				time: user_seek.current_time,
			}),
			(Some(_), None) => Some(SeekDirective::Commit {
				time: next.current_time,
			}),
			_ => None,
		}
	}
}
