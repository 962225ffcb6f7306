use crate::event::Event;
use crate::state::ControlsState;
use crate::transition::reduce;
use derive_more::Deref;
use serde::Serialize;

pub use directive::SeekDirective;
pub use handle::ControlsHandle;

pub mod directive;
pub mod handle;

/// Owner of the canonical [`ControlsState`] of one player instance.
///
/// Events are applied one at a time, every dispatch is a complete transition from one snapshot to the next.
#[derive(Clone, Debug, Default)]
pub struct Store {
	initial: ControlsState,
	state: ControlsState,
}

/// A snapshot together with what the provider adapter has to do about it.
#[derive(Clone, Debug, PartialEq, Serialize, Deref)]
pub struct Snapshot {
	#[deref]
	pub state: ControlsState,
	pub seek: Option<SeekDirective>,
}

impl From<ControlsState> for Snapshot {
	fn from(state: ControlsState) -> Self {
		Self { state, seek: None }
	}
}

impl Store {
	pub fn new(initial: ControlsState) -> Self {
		Self {
			state: initial.clone(),
			initial,
		}
	}

	pub fn state(&self) -> &ControlsState {
		&self.state
	}

	pub fn initial_state(&self) -> &ControlsState {
		&self.initial
	}

	pub fn dispatch(&mut self, event: impl Into<Event>) -> &ControlsState {
		self.state = reduce(&self.initial, &self.state, &event.into());
		&self.state
	}

	/// Like [`Store::dispatch`], but also derive the [`SeekDirective`] for the provider adapter.
	pub fn dispatch_observed(&mut self, event: impl Into<Event>) -> Snapshot {
		let next = reduce(&self.initial, &self.state, &event.into());
		let seek = SeekDirective::between(&self.state, &next);
		self.state = next;
		Snapshot {
			state: self.state.clone(),
			seek,
		}
	}
}
