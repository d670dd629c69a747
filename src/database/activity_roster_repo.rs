use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::RosterError;
use crate::models::{Activity, ActivityCatalog};

/// In-memory activity rosters.
///
/// Signup and unregister check membership and mutate under one write guard,
/// so two concurrent signups of the same email cannot both succeed.
#[derive(Debug)]
pub struct ActivityRosterRepo {
    catalog: RwLock<ActivityCatalog>,
    enforce_capacity: bool,
}

impl ActivityRosterRepo {
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            enforce_capacity: false,
        }
    }

    pub fn with_capacity_enforced(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }

    pub fn enforces_capacity(&self) -> bool {
        self.enforce_capacity
    }

    pub fn list(&self) -> ActivityCatalog {
        self.read().clone()
    }

    pub fn get(&self, activity_name: &str) -> Result<Activity, RosterError> {
        self.read()
            .get(activity_name)
            .cloned()
            .ok_or_else(|| not_found(activity_name))
    }

    /// Adds `email` to the roster. Returns the new participant count.
    pub fn sign_up(&self, activity_name: &str, email: &str) -> Result<usize, RosterError> {
        let mut catalog = self.write();
        let activity = catalog
            .get_mut(activity_name)
            .ok_or_else(|| not_found(activity_name))?;

        if activity.has_participant(email) {
            return Err(RosterError::AlreadyRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }
        if self.enforce_capacity && activity.is_full() {
            return Err(RosterError::ActivityFull {
                activity: activity_name.to_string(),
                max_participants: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());
        Ok(activity.participants.len())
    }

    /// Removes `email` from the roster. Returns the new participant count.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<usize, RosterError> {
        let mut catalog = self.write();
        let activity = catalog
            .get_mut(activity_name)
            .ok_or_else(|| not_found(activity_name))?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(RosterError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        };

        activity.participants.remove(pos);
        Ok(activity.participants.len())
    }

    // Every mutation completes before its guard drops, so a poisoned lock
    // still holds a consistent catalog.
    fn read(&self) -> RwLockReadGuard<'_, ActivityCatalog> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ActivityCatalog> {
        self.catalog.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn not_found(activity_name: &str) -> RosterError {
    RosterError::NotFound {
        activity: activity_name.to_string(),
    }
}
