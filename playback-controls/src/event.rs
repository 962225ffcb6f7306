use derive_more::From;
use serde::{Deserialize, Serialize};

pub use control_request::ControlRequest;
pub use media_event::MediaEvent;

pub mod control_request;
pub mod media_event;

/// Everything that can be dispatched to the controls store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, From)]
#[serde(rename_all = "snake_case")]
pub enum Event {
	/// Reported by the media provider.
	Media(MediaEvent),
	/// Requested by the UI or link layer.
	Control(ControlRequest),
}
