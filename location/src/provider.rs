//! The permission-gated provider adapter.

use std::fmt;
use std::sync::Arc;

use gpskit_permission::{Permission, PermissionSource};
use log::debug;

use crate::client::{FusedLocationClient, LocationCallback, UpdateHandle};
use crate::listener::TaskListener;
use crate::{Location, LocationError, LocationRequest, LocationResult, LocationSettingsRequest};

/// Adapter over a fused-location client.
///
/// Every operation checks that at least one of the fine/coarse location
/// permissions is granted before touching the client; a denied check never
/// reaches the vendor. The provider holds shared references only and keeps
/// no state across calls.
pub struct LocationProvider {
    client: Arc<dyn FusedLocationClient>,
    permissions: Arc<dyn PermissionSource>,
}

impl fmt::Debug for LocationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationProvider").finish()
    }
}

impl LocationProvider {
    /// A provider over the given client and permission source.
    pub fn new(client: Arc<dyn FusedLocationClient>, permissions: Arc<dyn PermissionSource>) -> Self {
        Self {
            client,
            permissions,
        }
    }

    /// Requests the cached last known location.
    ///
    /// `on_success(None)` is a legitimate outcome: the cache may be empty
    /// because location was recently disabled, no fix was ever obtained, or
    /// the vendor service restarted. Callers must treat it as "unknown",
    /// not as a failure.
    pub fn get_last_location(&self, listener: Arc<dyn TaskListener<Option<Location>>>) {
        if self.location_permission_missing() {
            listener.on_failure(LocationError::PermissionDenied);
            return;
        }

        self.client.last_location(Box::new(move |outcome| match outcome {
            Ok(location) => listener.on_success(location),
            Err(error) => listener.on_failure(error),
        }));
    }

    /// Requests a fresh fix matching `request`.
    ///
    /// The device's settings are verified against the request first; on
    /// rejection the listener fails with
    /// [`LocationError::SettingsRejected`] and no fix is requested.
    pub fn get_current_location(
        &self,
        request: LocationRequest,
        listener: Arc<dyn TaskListener<Option<Location>>>,
    ) {
        if self.location_permission_missing() {
            listener.on_failure(LocationError::PermissionDenied);
            return;
        }

        let settings_request = LocationSettingsRequest::builder()
            .add_location_request(request.clone())
            .build();

        let client = Arc::clone(&self.client);
        self.client.check_settings(
            settings_request,
            Box::new(move |verdict| match verdict {
                Ok(states) => {
                    debug!("location settings satisfied (location usable: {})", states.location_usable);
                    client.current_location(
                        request,
                        Box::new(move |outcome| match outcome {
                            Ok(location) => listener.on_success(location),
                            Err(error) => listener.on_failure(error),
                        }),
                    );
                }
                Err(_) => listener.on_failure(LocationError::SettingsRejected),
            }),
        );
    }

    /// Subscribes `listener` to continuous fixes matching `request`.
    ///
    /// Each fix is delivered through `on_success`; a loss of availability is
    /// reported through `on_failure` without ending the subscription. The
    /// returned handle must be retained to unsubscribe.
    ///
    /// # Errors
    ///
    /// [`LocationError::PermissionDenied`] when neither fine nor coarse
    /// permission is granted.
    pub fn start_location_updates(
        &self,
        request: LocationRequest,
        listener: Arc<dyn TaskListener<Location>>,
    ) -> LocationResult<UpdateHandle> {
        if self.location_permission_missing() {
            return Err(LocationError::PermissionDenied);
        }

        let handle = self
            .client
            .request_updates(request, Arc::new(ForwardingCallback { listener }));
        debug!("started location updates (handle {})", handle.raw());
        Ok(handle)
    }

    /// Removes a subscription. No-op for a handle never started or already
    /// stopped.
    pub fn stop_location_updates(&self, handle: UpdateHandle) {
        self.client.remove_updates(handle);
        debug!("stopped location updates (handle {})", handle.raw());
    }

    /// True when *neither* fine nor coarse permission is granted.
    fn location_permission_missing(&self) -> bool {
        !self.permissions.is_granted(Permission::FineLocation)
            && !self.permissions.is_granted(Permission::CoarseLocation)
    }
}

/// Bridges the client's update callback onto the listener contract.
struct ForwardingCallback {
    listener: Arc<dyn TaskListener<Location>>,
}

impl LocationCallback for ForwardingCallback {
    fn on_location_result(&self, location: Location) {
        self.listener.on_success(location);
    }

    fn on_location_availability(&self, available: bool) {
        if !available {
            self.listener.on_failure(LocationError::Vendor {
                message: Some("location temporarily unavailable".to_owned()),
            });
        }
    }
}
