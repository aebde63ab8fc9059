//! # Gpskit
//!
//! Device-location access behind an injectable fused-location client.
//!
//! Gpskit splits the concern into two crates, re-exported here behind
//! cargo features:
//!
//! - `permission`: the location-permission model and the `PermissionSource`
//!   capability trait.
//! - `location`: the data model, the `TaskListener` result-callback
//!   contract, the `FusedLocationClient` vendor trait, and the
//!   `LocationProvider` adapter that gates every vendor call on a
//!   permission check.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! gpskit = { version = "0.1", features = ["location"] }
//! ```
//!
//! ```rust,ignore
//! use gpskit::location::{listener, LocationProvider};
//!
//! async fn last_coords(provider: &LocationProvider) {
//!     let (listener, outcome) = listener::channel();
//!     provider.get_last_location(listener);
//!     if let Ok(Ok(Some(fix))) = outcome.recv().await {
//!         println!("latitude: {}, longitude: {}", fix.latitude, fix.longitude);
//!     }
//! }
//! ```

#[cfg(feature = "location")]
pub use gpskit_location as location;

#[cfg(feature = "permission")]
pub use gpskit_permission as permission;
