use crate::event::Event;
use crate::state::ControlsState;
use crate::store::{Snapshot, Store};
use parking_lot::Mutex;
use static_assertions::assert_impl_all;
use std::sync::Arc;
use tokio::sync::watch;

/// Shared access to the [`Store`] of one player.
///
/// The provider adapter and the UI layer each hold a clone. Dispatches are serialized, every event is
/// applied completely before the next one is admitted, and each resulting snapshot is published to subscribers.
#[derive(Clone, Debug)]
pub struct ControlsHandle {
	inner: Arc<Mutex<Inner>>,
}

#[derive(Debug)]
struct Inner {
	store: Store,
	snapshot_sender: watch::Sender<Snapshot>,
}

assert_impl_all!(ControlsHandle: Send, Sync, Clone);

impl Default for ControlsHandle {
	fn default() -> Self {
		Self::new(ControlsState::default())
	}
}

impl ControlsHandle {
	pub fn new(initial: ControlsState) -> Self {
		let (snapshot_sender, _) = watch::channel(Snapshot::from(initial.clone()));
		Self {
			inner: Arc::new(Mutex::new(Inner {
				store: Store::new(initial),
				snapshot_sender,
			})),
		}
	}

	pub fn dispatch(&self, event: impl Into<Event>) -> Snapshot {
		let mut inner = self.inner.lock();
		let snapshot = inner.store.dispatch_observed(event);
		// publish while still holding the lock so subscribers see snapshots in dispatch order
		inner.snapshot_sender.send_replace(snapshot.clone());
		snapshot
	}

	pub fn state(&self) -> ControlsState {
		self.inner.lock().store.state().clone()
	}

	/// Receive every snapshot published after subscribing, starting with the current one.
	pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
		self.inner.lock().snapshot_sender.subscribe()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::event::{ControlRequest, MediaEvent};
	use crate::store::SeekDirective;
	use std::thread;

	#[test]
	fn clones_should_share_the_state() {
		let provider = ControlsHandle::default();
		let ui = provider.clone();

		provider.dispatch(MediaEvent::DurationChange { duration: Some(60.0) });
		ui.dispatch(ControlRequest::ManualSeek { time: 30.0 });

		assert_eq!(provider.state(), ui.state());
		assert_eq!(provider.state().playhead(), 30.0);
	}

	#[test]
	fn concurrent_dispatches_should_all_be_applied() {
		let handle = ControlsHandle::default();

		thread::scope(|scope| {
			for _ in 0..4 {
				let handle = handle.clone();
				scope.spawn(move || {
					for _ in 0..25 {
						handle.dispatch(ControlRequest::TogglePlay);
					}
				});
			}
		});

		// 100 toggles bring it back to where it started
		assert!(handle.state().paused);
	}

	#[tokio::test]
	async fn subscribers_should_receive_published_snapshots() {
		let handle = ControlsHandle::default();
		let mut receiver = handle.subscribe();
		assert!(receiver.borrow_and_update().paused);

		handle.dispatch(ControlRequest::ManualSeek { time: 12.0 });

		receiver.changed().await.expect("Snapshot sender dropped");
		let snapshot = receiver.borrow_and_update().clone();
		assert_eq!(snapshot.seek, Some(SeekDirective::Preview { time: 12.0 }));
		assert_eq!(snapshot.playhead(), 12.0);
	}

	#[test]
	fn dispatch_should_work_without_subscribers() {
		let handle = ControlsHandle::default();

		let snapshot = handle.dispatch(ControlRequest::Play);

		assert!(!snapshot.paused);
	}
}
