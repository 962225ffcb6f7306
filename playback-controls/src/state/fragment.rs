use serde::{Deserialize, Serialize};

/// Playback window encoded in a link, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
	pub start: f64,
	pub end: f64,
}

impl Fragment {
	pub fn new(start: f64, end: f64) -> Self {
		Self { start, end }
	}

	/// A single point in time rather than a range.
	pub fn timestamp(time: f64) -> Self {
		Self { start: time, end: time }
	}

	#[allow(clippy::float_cmp)]
	pub fn is_timestamp(&self) -> bool {
		self.start == self.end
	}
}
