//! One-shot last-location lookup.
//!
//! Seeds a simulated fused-location client with a fix, asks the provider
//! for the last known location once, and logs the outcome. Set
//! `GPSKIT_DENY_LOCATION=1` to walk the permission-denied path instead.
//!
//! Run with: cargo run -p gpskit-last-location-demo

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use gpskit_location::sim::SimulatedFusedClient;
use gpskit_location::{Location, LocationProvider, listener};
use gpskit_permission::{Permission, StaticPermissions};
use log::{error, info};

const TAG: &str = "last_location";

fn seeded_client() -> SimulatedFusedClient {
    let client = SimulatedFusedClient::new();
    client.set_last_location(Some(Location {
        latitude: 37.422,
        longitude: -122.084,
        altitude: Some(32.0),
        horizontal_accuracy: Some(12.5),
        timestamp: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0),
    }));
    client
}

fn permissions() -> StaticPermissions {
    if std::env::var_os("GPSKIT_DENY_LOCATION").is_some() {
        StaticPermissions::denying_all()
    } else {
        StaticPermissions::granting([Permission::FineLocation, Permission::CoarseLocation])
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let provider = LocationProvider::new(Arc::new(seeded_client()), Arc::new(permissions()));

    let (outcome_listener, outcome) = listener::channel();
    provider.get_last_location(outcome_listener);

    match outcome.recv().await {
        Ok(Ok(Some(location))) => info!(
            target: TAG,
            "location latitude = {}, longitude = {}", location.latitude, location.longitude
        ),
        Ok(Ok(None)) => info!(target: TAG, "no cached location available"),
        Ok(Err(err)) => error!(target: TAG, "location error msg = {err}"),
        Err(err) => error!(target: TAG, "outcome channel closed: {err}"),
    }
}
