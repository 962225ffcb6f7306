use crate::configuration::ConfigurationError;
use crate::script::ScriptError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControlsError {
	#[error("Failed to load configuration: {0}")]
	Configuration(#[from] ConfigurationError),
	#[error("Failed to parse commandline: {0}")]
	Commandline(#[from] clap::Error),
	#[error("Failed to replay event script: {0}")]
	Script(#[from] ScriptError),
	#[error("Failed to serialize snapshot: {0}")]
	SnapshotSerialization(#[from] serde_json::Error),
	#[error("Failed to serialize configuration: {0}")]
	ConfigurationSerialization(#[from] toml::ser::Error),
}
