//! An in-memory fused-location client.
//!
//! Stands in for the platform's fused-location service where none is
//! available: demos, tests, CI. Outcomes are scripted up front and
//! completions run inline on the caller's thread.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use log::debug;

use crate::client::{Completion, FusedLocationClient, LocationCallback, UpdateHandle};
use crate::{
    Location, LocationError, LocationRequest, LocationSettingsRequest, LocationSettingsStates,
};

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// A scriptable, in-memory [`FusedLocationClient`].
///
/// Defaults: empty last-location cache, no fresh fix, settings checks pass
/// with every facility usable.
pub struct SimulatedFusedClient {
    last_outcome: Mutex<Result<Option<Location>, LocationError>>,
    current_outcome: Mutex<Result<Option<Location>, LocationError>>,
    settings_outcome: Mutex<Result<LocationSettingsStates, LocationError>>,
    subscriptions: Mutex<HashMap<u64, Arc<dyn LocationCallback>>>,
}

impl Default for SimulatedFusedClient {
    fn default() -> Self {
        Self {
            last_outcome: Mutex::new(Ok(None)),
            current_outcome: Mutex::new(Ok(None)),
            settings_outcome: Mutex::new(Ok(LocationSettingsStates::all_usable())),
            subscriptions: Mutex::new(HashMap::new()),
        }
    }
}

impl fmt::Debug for SimulatedFusedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatedFusedClient")
            .field("active_subscriptions", &self.active_subscriptions())
            .finish()
    }
}

impl SimulatedFusedClient {
    /// A client with default (empty but healthy) state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the last-location cache. `None` models an empty cache.
    pub fn set_last_location(&self, location: Option<Location>) {
        *self.last_outcome.lock().expect("last outcome mutex poisoned") = Ok(location);
    }

    /// Makes the next last-location requests fail with `error`.
    pub fn fail_last_location(&self, error: LocationError) {
        *self.last_outcome.lock().expect("last outcome mutex poisoned") = Err(error);
    }

    /// Seeds the fresh fix served to current-location requests.
    pub fn set_current_location(&self, location: Option<Location>) {
        *self
            .current_outcome
            .lock()
            .expect("current outcome mutex poisoned") = Ok(location);
    }

    /// Makes the next current-location requests fail with `error`.
    pub fn fail_current_location(&self, error: LocationError) {
        *self
            .current_outcome
            .lock()
            .expect("current outcome mutex poisoned") = Err(error);
    }

    /// Makes settings checks pass, reporting `states`.
    pub fn accept_settings(&self, states: LocationSettingsStates) {
        *self
            .settings_outcome
            .lock()
            .expect("settings outcome mutex poisoned") = Ok(states);
    }

    /// Makes settings checks fail.
    pub fn reject_settings(&self) {
        *self
            .settings_outcome
            .lock()
            .expect("settings outcome mutex poisoned") = Err(LocationError::SettingsRejected);
    }

    /// Delivers a fix to every active subscription.
    pub fn emit_location(&self, location: Location) {
        for callback in self.snapshot_subscriptions() {
            callback.on_location_result(location.clone());
        }
    }

    /// Announces an availability change to every active subscription.
    pub fn set_availability(&self, available: bool) {
        for callback in self.snapshot_subscriptions() {
            callback.on_location_availability(available);
        }
    }

    /// Number of active update subscriptions.
    #[must_use]
    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions
            .lock()
            .expect("subscriptions mutex poisoned")
            .len()
    }

    fn snapshot_subscriptions(&self) -> Vec<Arc<dyn LocationCallback>> {
        self.subscriptions
            .lock()
            .expect("subscriptions mutex poisoned")
            .values()
            .cloned()
            .collect()
    }
}

impl FusedLocationClient for SimulatedFusedClient {
    fn last_location(&self, on_complete: Completion<Option<Location>>) {
        let outcome = self
            .last_outcome
            .lock()
            .expect("last outcome mutex poisoned")
            .clone();
        on_complete(outcome);
    }

    fn current_location(
        &self,
        _request: LocationRequest,
        on_complete: Completion<Option<Location>>,
    ) {
        let outcome = self
            .current_outcome
            .lock()
            .expect("current outcome mutex poisoned")
            .clone();
        on_complete(outcome);
    }

    fn check_settings(
        &self,
        _request: LocationSettingsRequest,
        on_complete: Completion<LocationSettingsStates>,
    ) {
        let outcome = self
            .settings_outcome
            .lock()
            .expect("settings outcome mutex poisoned")
            .clone();
        on_complete(outcome);
    }

    fn request_updates(
        &self,
        _request: LocationRequest,
        callback: Arc<dyn LocationCallback>,
    ) -> UpdateHandle {
        let handle = UpdateHandle::from_raw(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed));
        self.subscriptions
            .lock()
            .expect("subscriptions mutex poisoned")
            .insert(handle.raw(), callback);
        debug!("simulated subscription started (handle {})", handle.raw());
        handle
    }

    fn remove_updates(&self, handle: UpdateHandle) {
        let removed = self
            .subscriptions
            .lock()
            .expect("subscriptions mutex poisoned")
            .remove(&handle.raw());
        if removed.is_some() {
            debug!("simulated subscription removed (handle {})", handle.raw());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullCallback;

    impl LocationCallback for NullCallback {
        fn on_location_result(&self, _location: Location) {}
        fn on_location_availability(&self, _available: bool) {}
    }

    #[test]
    fn handles_are_unique() {
        let client = SimulatedFusedClient::new();
        let request = LocationRequest::new(crate::Priority::LowPower, 10_000);
        let first = client.request_updates(request.clone(), Arc::new(NullCallback));
        let second = client.request_updates(request, Arc::new(NullCallback));
        assert_ne!(first, second);
        assert_eq!(client.active_subscriptions(), 2);
    }

    #[test]
    fn removing_unknown_or_removed_handles_is_silent() {
        let client = SimulatedFusedClient::new();
        client.remove_updates(UpdateHandle::from_raw(999));

        let request = LocationRequest::new(crate::Priority::Passive, 60_000);
        let handle = client.request_updates(request, Arc::new(NullCallback));
        client.remove_updates(handle);
        client.remove_updates(handle);
        assert_eq!(client.active_subscriptions(), 0);
    }
}
