//! The result-callback contract.
//!
//! A [`TaskListener`] receives the outcome of an asynchronous location
//! operation: exactly one of [`on_success`](TaskListener::on_success) /
//! [`on_failure`](TaskListener::on_failure) per one-shot request, invoked
//! on whatever thread the vendor client completes on. For update
//! subscriptions the listener is invoked once per delivered fix.

use std::fmt;
use std::sync::Arc;

use async_channel::{Receiver, Sender, bounded};
use log::warn;

use crate::{LocationError, LocationResult};

/// Receiver side of an asynchronous location operation.
pub trait TaskListener<T>: Send + Sync {
    /// The operation completed with `data`.
    fn on_success(&self, data: T);

    /// The operation could not complete.
    fn on_failure(&self, error: LocationError);
}

/// A [`TaskListener`] that forwards outcomes into an async channel.
///
/// The channel buffers a single outcome; anything past that is dropped
/// with a warning. Create one with [`channel`].
pub struct ChannelListener<T> {
    sender: Sender<LocationResult<T>>,
}

impl<T> ChannelListener<T> {
    fn deliver(&self, outcome: LocationResult<T>) {
        if let Err(err) = self.sender.try_send(outcome) {
            warn!("dropping location outcome: {err}");
        }
    }
}

impl<T> fmt::Debug for ChannelListener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelListener").finish()
    }
}

impl<T: Send + 'static> TaskListener<T> for ChannelListener<T> {
    fn on_success(&self, data: T) {
        self.deliver(Ok(data));
    }

    fn on_failure(&self, error: LocationError) {
        self.deliver(Err(error));
    }
}

/// A listener/receiver pair for awaiting a one-shot outcome.
#[must_use]
pub fn channel<T: Send + 'static>() -> (Arc<ChannelListener<T>>, Receiver<LocationResult<T>>) {
    let (sender, receiver) = bounded(1);
    (Arc::new(ChannelListener { sender }), receiver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Location;

    #[tokio::test]
    async fn channel_listener_yields_the_outcome() {
        let (listener, receiver) = channel::<Option<Location>>();
        listener.on_success(None);
        assert_eq!(receiver.recv().await, Ok(Ok(None)));
    }

    #[tokio::test]
    async fn channel_listener_drops_past_single_outcome() {
        let (listener, receiver) = channel::<Option<Location>>();
        listener.on_failure(LocationError::PermissionDenied);
        listener.on_success(None);

        assert_eq!(
            receiver.recv().await,
            Ok(Err(LocationError::PermissionDenied))
        );
        assert!(receiver.try_recv().is_err());
    }
}
