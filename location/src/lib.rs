//! Device-location access behind an injectable fused-location client.
//!
//! The vendor's fused-location service is abstracted as the
//! [`FusedLocationClient`] trait; [`LocationProvider`] wraps it and gates
//! every call on a permission check. Results are delivered through the
//! [`TaskListener`] callback contract: exactly one of `on_success` /
//! `on_failure` fires per one-shot request, on whatever thread the client
//! chooses.

#![warn(missing_docs)]

use thiserror::Error;

/// Vendor-client abstraction and update-subscription types.
pub mod client;
/// The result-callback contract and adapters for it.
pub mod listener;
/// The permission-gated provider adapter.
pub mod provider;
/// An in-memory fused-location client for demos and tests.
pub mod sim;

pub use client::{Completion, FusedLocationClient, LocationCallback, UpdateHandle};
pub use gpskit_permission::{Permission, PermissionSource, PermissionStatus};
pub use listener::TaskListener;
pub use provider::LocationProvider;

/// A geographic location fix.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Latitude in degrees (-90 to 90).
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180).
    pub longitude: f64,
    /// Altitude in meters above sea level, if available.
    pub altitude: Option<f64>,
    /// Horizontal accuracy in meters, if available.
    pub horizontal_accuracy: Option<f64>,
    /// Timestamp as Unix epoch milliseconds.
    pub timestamp: u64,
}

/// Requested cadence and accuracy for location fixes.
///
/// Passed through to the vendor client as-is; the adapter does not validate
/// or arbitrate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRequest {
    /// Accuracy/power trade-off requested from the vendor.
    pub priority: Priority,
    /// Desired interval between fixes, in milliseconds.
    pub interval_ms: u64,
    /// Fastest interval the caller is willing to receive fixes at.
    pub min_update_interval_ms: Option<u64>,
}

impl LocationRequest {
    /// A request with the given priority and interval.
    #[must_use]
    pub const fn new(priority: Priority, interval_ms: u64) -> Self {
        Self {
            priority,
            interval_ms,
            min_update_interval_ms: None,
        }
    }

    /// Sets the fastest acceptable update interval.
    #[must_use]
    pub const fn min_update_interval_ms(mut self, interval_ms: u64) -> Self {
        self.min_update_interval_ms = Some(interval_ms);
        self
    }
}

/// Accuracy/power trade-off for a [`LocationRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Most accurate fixes the device can produce.
    HighAccuracy,
    /// Block-level accuracy at reduced power.
    BalancedPower,
    /// City-level accuracy, minimal power.
    LowPower,
    /// No active fixes; piggyback on other clients' requests.
    Passive,
}

/// A query asking whether the device's current configuration can satisfy
/// one or more location requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSettingsRequest {
    requests: Vec<LocationRequest>,
}

impl LocationSettingsRequest {
    /// Starts building a settings request.
    #[must_use]
    pub fn builder() -> LocationSettingsRequestBuilder {
        LocationSettingsRequestBuilder::default()
    }

    /// The location requests bundled into this query.
    #[must_use]
    pub fn requests(&self) -> &[LocationRequest] {
        &self.requests
    }
}

/// Builder for [`LocationSettingsRequest`].
#[derive(Debug, Clone, Default)]
pub struct LocationSettingsRequestBuilder {
    requests: Vec<LocationRequest>,
}

impl LocationSettingsRequestBuilder {
    /// Adds a location request to validate the settings against.
    #[must_use]
    pub fn add_location_request(mut self, request: LocationRequest) -> Self {
        self.requests.push(request);
        self
    }

    /// Finishes the request.
    #[must_use]
    pub fn build(self) -> LocationSettingsRequest {
        LocationSettingsRequest {
            requests: self.requests,
        }
    }
}

/// Which location facilities the device currently has enabled.
///
/// Reported by the vendor on a successful settings check; informational
/// only, the adapter takes no decisions from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocationSettingsStates {
    /// Whether any location facility is present on the device.
    pub location_present: bool,
    /// Whether location is enabled and usable.
    pub location_usable: bool,
    /// Whether a GPS provider is present.
    pub gps_present: bool,
    /// Whether the GPS provider is enabled and usable.
    pub gps_usable: bool,
    /// Whether a network location provider is present.
    pub network_location_present: bool,
    /// Whether the network location provider is enabled and usable.
    pub network_location_usable: bool,
    /// Whether BLE is present on the device.
    pub ble_present: bool,
    /// Whether BLE is enabled and usable.
    pub ble_usable: bool,
}

impl LocationSettingsStates {
    /// States with every facility present and usable.
    #[must_use]
    pub const fn all_usable() -> Self {
        Self {
            location_present: true,
            location_usable: true,
            gps_present: true,
            gps_usable: true,
            network_location_present: true,
            network_location_usable: true,
            ble_present: true,
            ble_usable: true,
        }
    }
}

/// Errors surfaced through the failure side of the callback contract.
///
/// An absent last or current location is not an error; it is delivered as
/// `on_success(None)`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocationError {
    /// Neither fine nor coarse location permission is granted.
    #[error("location permission denied")]
    PermissionDenied,
    /// The device's location settings cannot satisfy the request.
    #[error("location settings rejected the request")]
    SettingsRejected,
    /// Any other error reported by the vendor client; the cause may be
    /// absent.
    #[error("vendor error: {}", .message.as_deref().unwrap_or("cause unknown"))]
    Vendor {
        /// Vendor-reported cause, when one was given.
        message: Option<String>,
    },
}

/// Result alias for location operations.
pub type LocationResult<T> = Result<T, LocationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_request_bundles_location_requests() {
        let request = LocationRequest::new(Priority::HighAccuracy, 5_000)
            .min_update_interval_ms(1_000);
        let settings = LocationSettingsRequest::builder()
            .add_location_request(request.clone())
            .build();
        assert_eq!(settings.requests(), &[request]);
    }

    #[test]
    fn vendor_error_displays_absent_cause() {
        let error = LocationError::Vendor { message: None };
        assert_eq!(error.to_string(), "vendor error: cause unknown");

        let error = LocationError::Vendor {
            message: Some("fix timed out".to_owned()),
        };
        assert_eq!(error.to_string(), "vendor error: fix timed out");
    }
}
