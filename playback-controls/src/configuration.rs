use crate::state::{
	ControlsState, DEFAULT_PLAYBACK_RATE, DEFAULT_VOLUME, clamp_volume, sanitize_playback_rate,
};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Configuration {
	pub log_filters: String,
	pub initial: InitialControls,
}

impl Default for Configuration {
	fn default() -> Self {
		Self {
			log_filters: "info".to_string(),
			initial: InitialControls::default(),
		}
	}
}

/// Values a freshly created (or reset) player starts with.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct InitialControls {
	pub volume: f64,
	pub muted: bool,
	pub autoplay: bool,
	#[serde(rename = "loop")]
	pub looping: bool,
	pub playback_rate: f64,
}

impl Default for InitialControls {
	fn default() -> Self {
		Self {
			volume: DEFAULT_VOLUME,
			muted: false,
			autoplay: false,
			looping: false,
			playback_rate: DEFAULT_PLAYBACK_RATE,
		}
	}
}

impl InitialControls {
	/// Build the initial snapshot. Out of range values are corrected the same way the transitions correct them.
	pub fn state(&self) -> ControlsState {
		let volume = clamp_volume(self.volume);
		if volume.to_bits() != self.volume.to_bits() {
			warn!(configured = self.volume, "Initial volume out of range, using {volume}.");
		}
		let playback_rate = sanitize_playback_rate(self.playback_rate);
		if playback_rate.to_bits() != self.playback_rate.to_bits() {
			warn!(
				configured = self.playback_rate,
				"Initial playback rate invalid, using {playback_rate}."
			);
		}

		ControlsState::builder()
			.volume(volume)
			.muted(self.muted)
			.autoplay(self.autoplay)
			.looping(self.looping)
			.playback_rate(playback_rate)
			.build()
	}
}

impl Configuration {
	pub fn from_file(path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
		let text = read_to_string(path)?;

		Ok(Configuration::try_from(text.as_str())?)
	}
}

impl TryFrom<&str> for Configuration {
	type Error = toml::de::Error;

	fn try_from(text: &str) -> Result<Self, Self::Error> {
		toml::from_str(text)
	}
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
	#[error("Failed to deserialize with error: {0}")]
	DeserializationError(#[from] toml::de::Error),
	#[error("IO operation failed: {0}")]
	IoError(#[from] std::io::Error),
}
