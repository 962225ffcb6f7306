use crate::state::Fragment;
use serde::{Deserialize, Serialize};

/// Write intents pushed by the UI or the link layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum ControlRequest {
	/// Apply the hash of an inbound link, e.g. `#t=10&loop`.
	SetHash {
		hash: String,
		from_link: bool,
	},
	SetFragment {
		#[serde(default)]
		fragment: Option<Fragment>,
	},
	/// Back to the initial snapshot.
	Reset,
	Play,
	Pause,
	TogglePlay,
	SetFullscreen {
		fullscreen: bool,
	},
	ToggleFullscreen,
	SetPlaybackRate {
		rate: f64,
	},
	SetMute {
		muted: bool,
	},
	ToggleMute,
	SetVolume {
		volume: f64,
	},
	SetVolumeUnmute {
		volume: f64,
	},
	/// Offset in percentage points.
	SetVolumeByOffset {
		offset: f64,
	},
	SetLoop {
		#[serde(rename = "loop")]
		looping: bool,
	},
	SetAutoplay {
		autoplay: bool,
	},
	ProgressBarSeek {
		time: f64,
	},
	ProgressBarSeekEnd,
	/// Seconds relative to where the drag started.
	DragSeek {
		delta: f64,
	},
	DragSeekEnd,
	ManualSeek {
		time: f64,
	},
	/// Seconds relative to the current time.
	ManualOffsetSeek {
		offset: f64,
	},
	ManualSeekDone,
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn set_hash_request_should_serialize_and_deserialize() {
		let request = ControlRequest::SetHash {
			hash: "#t=10&loop".to_string(),
			from_link: true,
		};
		let json = serde_json::to_string(&request).expect("Failed to serialize SetHash request to JSON");
		assert_eq!(r##"{"type":"set_hash","hash":"#t=10&loop","from_link":true}"##, json);

		let deserialized_request: ControlRequest =
			serde_json::from_str(&json).expect("Failed to deserialize SetHash request from JSON");
		assert_eq!(request, deserialized_request);
	}

	#[test]
	fn set_loop_request_should_use_loop_as_field_name() {
		let json = serde_json::to_string(&ControlRequest::SetLoop { looping: true })
			.expect("Failed to serialize SetLoop request to JSON");
		assert_eq!(r#"{"type":"set_loop","loop":true}"#, json);
	}

	#[test]
	fn set_fragment_request_should_deserialize_fragment() {
		let request: ControlRequest =
			serde_json::from_str(r#"{"type":"set_fragment","fragment":{"start":10.0,"end":20.0}}"#)
				.expect("Failed to deserialize SetFragment request from JSON");

		assert_eq!(
			ControlRequest::SetFragment {
				fragment: Some(Fragment::new(10.0, 20.0))
			},
			request
		);
	}
}
