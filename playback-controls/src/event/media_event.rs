use serde::{Deserialize, Serialize};

/// Read events pushed by the media provider adapter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum MediaEvent {
	/// The provider clock moved. [`LARGE_CURRENT_TIME`](crate::state::LARGE_CURRENT_TIME) means "no time yet".
	TimeUpdate { time: f64 },
	DurationChange {
		#[serde(default)]
		duration: Option<f64>,
	},
	/// Roll back to a known good duration after an upstream rejection. Not validated.
	RevertDuration { duration: f64 },
	Progress {
		buffered: f64,
		#[serde(default)]
		duration: Option<f64>,
	},
	UpdateBasicInfo {
		seeking: bool,
		#[serde(default)]
		duration: Option<f64>,
		#[serde(default)]
		buffered: Option<f64>,
	},
	Seeking,
	Seeked,
	Playing,
	Paused,
	RateChange { rate: f64 },
	VolumeChange { volume: f64, muted: bool },
	FullscreenChange { fullscreen: bool },
	Ended,
	Waiting,
	Error {
		message: String,
		#[serde(default)]
		code: Option<i64>,
	},
}
