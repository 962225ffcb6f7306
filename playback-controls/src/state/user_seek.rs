use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Input mechanism that started a user seek.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeekSource {
	/// Click or tap on the progress bar.
	ProgressBar,
	/// Pointer drag gesture over the video.
	Drag,
	/// Programmatic or keyboard driven seek. Never interrupted by the other sources.
	Manual,
}

impl Display for SeekSource {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			SeekSource::ProgressBar => "progress-bar",
			SeekSource::Drag => "drag",
			SeekSource::Manual => "manual",
		};
		formatter.write_str(name)
	}
}

/// An in-progress, user initiated seek.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSeek {
	/// Where the seek started. Drag deltas are relative to this.
	pub initial_time: f64,
	/// Current seek target.
	pub current_time: f64,
	/// Pause state to restore once the seek ends.
	/// `None` leaves the pause state alone, used by seeks that never paused playback.
	pub paused_before_seek: Option<bool>,
	pub source: SeekSource,
}

impl UserSeek {
	pub fn new(source: SeekSource, initial_time: f64, current_time: f64, paused_before_seek: Option<bool>) -> Self {
		Self {
			initial_time,
			current_time,
			paused_before_seek,
			source,
		}
	}
}
