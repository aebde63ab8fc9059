//! Location permission model.
//!
//! This crate models the two device-location permissions and the capability
//! that answers whether they are currently granted. Actually prompting the
//! user is the surrounding platform's job; consumers inject a
//! [`PermissionSource`] that reflects whatever the platform has decided.

#![warn(missing_docs)]

use std::collections::HashSet;

/// Device-location permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Permission {
    /// Precise location (GPS-grade fixes).
    FineLocation,
    /// Approximate location (network-grade fixes).
    CoarseLocation,
}

/// The current status of a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionStatus {
    /// Permission has been granted by the user.
    Granted,
    /// Permission has been denied by the user.
    Denied,
    /// Permission is restricted by device policy.
    Restricted,
    /// Permission has not been requested yet.
    NotDetermined,
}

/// A source of truth for permission status.
///
/// Implementations are expected to be cheap to query; callers may ask on
/// every operation rather than caching the answer.
pub trait PermissionSource: Send + Sync {
    /// Current status of `permission`.
    fn status(&self, permission: Permission) -> PermissionStatus;

    /// Whether `permission` is currently granted.
    fn is_granted(&self, permission: Permission) -> bool {
        self.status(permission) == PermissionStatus::Granted
    }
}

/// A fixed grant table.
///
/// Useful wherever the set of granted permissions is known up front: demos,
/// tests, or hosts that resolve permissions once at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticPermissions {
    granted: HashSet<Permission>,
}

impl StaticPermissions {
    /// A table granting exactly the given permissions.
    pub fn granting(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            granted: permissions.into_iter().collect(),
        }
    }

    /// A table granting nothing.
    #[must_use]
    pub fn denying_all() -> Self {
        Self::default()
    }
}

impl PermissionSource for StaticPermissions {
    fn status(&self, permission: Permission) -> PermissionStatus {
        if self.granted.contains(&permission) {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granting_reports_granted_status() {
        let permissions = StaticPermissions::granting([Permission::CoarseLocation]);
        assert_eq!(
            permissions.status(Permission::CoarseLocation),
            PermissionStatus::Granted
        );
        assert!(permissions.is_granted(Permission::CoarseLocation));
        assert_eq!(
            permissions.status(Permission::FineLocation),
            PermissionStatus::Denied
        );
    }

    #[test]
    fn denying_all_grants_nothing() {
        let permissions = StaticPermissions::denying_all();
        assert!(!permissions.is_granted(Permission::FineLocation));
        assert!(!permissions.is_granted(Permission::CoarseLocation));
    }
}
