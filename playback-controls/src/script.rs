//! Event scripts: one JSON encoded [`Event`] per line.

use crate::event::Event;
use crate::store::{ControlsHandle, Snapshot};
use std::fs::read_to_string;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const COMMENT_PREFIX: &str = "//";

#[derive(Error, Debug)]
pub enum ScriptError {
	#[error("IO operation failed: {0}")]
	IoError(#[from] std::io::Error),
	#[error("Invalid event in line {line}: {error}")]
	InvalidEvent {
		line: usize,
		#[source]
		error: serde_json::Error,
	},
}

/// Blank lines and lines starting with `//` are skipped.
pub fn parse_script(text: &str) -> Result<Vec<Event>, ScriptError> {
	text.lines()
		.enumerate()
		.map(|(index, line)| (index + 1, line.trim()))
		.filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
		.map(|(line, json)| serde_json::from_str(json).map_err(|error| ScriptError::InvalidEvent { line, error }))
		.collect()
}

pub fn read_script(path: impl AsRef<Path>) -> Result<Vec<Event>, ScriptError> {
	let text = read_to_string(path)?;
	parse_script(&text)
}

/// Dispatch all events in order, returning the snapshot after each of them.
pub fn replay(handle: &ControlsHandle, events: impl IntoIterator<Item = Event>) -> Vec<Snapshot> {
	events
		.into_iter()
		.map(|event| {
			debug!("Replaying {event:?}");
			handle.dispatch(event)
		})
		.collect()
}
