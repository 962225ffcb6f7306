use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

pub use fragment::Fragment;
pub use user_seek::{SeekSource, UserSeek};

pub mod fragment;
pub mod user_seek;

/// Sentinel the media provider reports while it has no meaningful time yet.
/// No real media clock produces it, time updates carrying it are ignored.
pub const LARGE_CURRENT_TIME: f64 = 1e101;

pub const DEFAULT_VOLUME: f64 = 0.8;
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

/// Snapshot of everything the player controls know about playback.
///
/// All times are in seconds. A snapshot is only ever changed by dispatching an event
/// through a [`Store`](crate::store::Store), consumers receive clones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ControlsState {
	/// Last time reported by the provider (provider -> store only).
	/// While a [`UserSeek`] is active, the seek target lives in `user_seek.current_time` instead.
	#[builder(default)]
	pub current_time: f64,
	/// `None` while the duration is unknown.
	#[builder(default)]
	pub duration: Option<f64>,
	#[builder(default = true)]
	pub paused: bool,
	#[builder(default)]
	pub fullscreen: bool,
	#[builder(default)]
	pub muted: bool,
	#[builder(default)]
	pub autoplay: bool,
	#[serde(rename = "loop")]
	#[builder(default)]
	pub looping: bool,
	/// Playback window requested by a link.
	#[builder(default)]
	pub fragment: Option<Fragment>,
	#[builder(default = DEFAULT_PLAYBACK_RATE)]
	pub playback_rate: f64,
	#[builder(default = DEFAULT_VOLUME)]
	pub volume: f64,
	/// Seconds buffered, never negative.
	#[builder(default)]
	pub buffered: f64,
	/// The provider is loading a new position.
	#[builder(default)]
	pub seeking: bool,
	/// The user is moving the playhead (store -> provider).
	/// Going back to `None` ends the seek and revokes the binding.
	#[builder(default)]
	pub user_seek: Option<UserSeek>,
	#[builder(default)]
	pub waiting: bool,
	#[builder(default)]
	pub ended: bool,
	#[builder(default)]
	pub has_started: bool,
	#[builder(default)]
	pub error: Option<String>,
}

impl Default for ControlsState {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl ControlsState {
	/// The position the playhead should be shown at: the seek target while seeking, the provider time otherwise.
	pub fn playhead(&self) -> f64 {
		self.user_seek
			.as_ref()
			.map_or(self.current_time, |user_seek| user_seek.current_time)
	}

	pub fn active_seek_source(&self) -> Option<SeekSource> {
		self.user_seek.as_ref().map(|user_seek| user_seek.source)
	}
}

/// Clamp a seek target into `[0, duration]`.
///
/// An unknown (or zero) duration doesn't limit the upper end. NaN maps to the start.
pub fn clamp_time(time: f64, duration: Option<f64>) -> f64 {
	match duration {
		_ if time.is_nan() => 0.0,
		Some(duration) if duration != 0.0 && time > duration => duration,
		_ if time < 0.0 => 0.0,
		_ => time,
	}
}

/// Clamp into `[0, 1]`, NaN is silence.
pub fn clamp_volume(volume: f64) -> f64 {
	if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) }
}

/// Only finite, positive durations are meaningful.
pub fn check_duration(duration: Option<f64>) -> bool {
	duration.is_some_and(|duration| duration.is_finite() && duration > 0.0)
}

/// Rates that aren't strictly positive fall back to normal speed.
pub fn sanitize_playback_rate(rate: f64) -> f64 {
	if rate > 0.0 { rate } else { DEFAULT_PLAYBACK_RATE }
}
