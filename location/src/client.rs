//! The vendor-client abstraction.
//!
//! [`FusedLocationClient`] is the seam between this crate and the platform's
//! fused-location service. Hosts supply a real binding; [`crate::sim`]
//! supplies an in-memory one.

use std::sync::Arc;

use crate::{
    Location, LocationError, LocationRequest, LocationSettingsRequest, LocationSettingsStates,
};

/// One-shot completion invoked by the vendor client.
///
/// Invoked on a thread of the client's choosing; implementations must not
/// assume a particular context.
pub type Completion<T> = Box<dyn FnOnce(Result<T, LocationError>) + Send>;

/// Long-lived callback for an update subscription.
pub trait LocationCallback: Send + Sync {
    /// A new fix was produced for the subscription.
    fn on_location_result(&self, location: Location);

    /// The client's ability to produce fixes changed.
    fn on_location_availability(&self, available: bool);
}

/// Opaque handle identifying an update subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UpdateHandle(u64);

impl UpdateHandle {
    /// Wraps a raw client-assigned identifier.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw client-assigned identifier.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A fused-location service.
///
/// All operations are asynchronous: one-shot calls take a [`Completion`]
/// that the client invokes exactly once; subscriptions push into a
/// [`LocationCallback`] until removed. If a call never completes on the
/// vendor side, its completion is simply never invoked.
pub trait FusedLocationClient: Send + Sync {
    /// Requests the cached last known location.
    ///
    /// Completes with `None` when nothing is cached: location was recently
    /// disabled, no fix was ever obtained, or the service restarted.
    fn last_location(&self, on_complete: Completion<Option<Location>>);

    /// Requests a fresh fix matching `request`.
    ///
    /// Completes with `None` when the client gave up without a fix.
    fn current_location(&self, request: LocationRequest, on_complete: Completion<Option<Location>>);

    /// Asks whether the device's settings can satisfy `request`.
    fn check_settings(
        &self,
        request: LocationSettingsRequest,
        on_complete: Completion<LocationSettingsStates>,
    );

    /// Subscribes `callback` to continuous fixes matching `request`.
    ///
    /// The returned handle must be retained to unsubscribe.
    fn request_updates(
        &self,
        request: LocationRequest,
        callback: Arc<dyn LocationCallback>,
    ) -> UpdateHandle;

    /// Removes a subscription. Idempotent; unknown handles are ignored.
    fn remove_updates(&self, handle: UpdateHandle);
}
