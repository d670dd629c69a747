use serde::Serialize;
use tracing::{info, warn};

use crate::database::activity_roster_repo::ActivityRosterRepo;
use crate::error::RosterError;
use crate::models::ActivityCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterConfirmation {
    pub message: String,
}

pub fn list_activities(repo: &ActivityRosterRepo) -> ActivityCatalog {
    repo.list()
}

pub fn sign_up(
    repo: &ActivityRosterRepo,
    activity_name: &str,
    email: &str,
) -> Result<RosterConfirmation, RosterError> {
    match repo.sign_up(activity_name, email) {
        Ok(participants) => {
            let max_participants = capacity_of(repo, activity_name);
            info!(
                activity = %activity_name,
                email = %email,
                participants,
                max_participants,
                "signup accepted"
            );
            Ok(RosterConfirmation {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

pub fn unregister(
    repo: &ActivityRosterRepo,
    activity_name: &str,
    email: &str,
) -> Result<RosterConfirmation, RosterError> {
    match repo.unregister(activity_name, email) {
        Ok(participants) => {
            let max_participants = capacity_of(repo, activity_name);
            info!(
                activity = %activity_name,
                email = %email,
                participants,
                max_participants,
                "unregister accepted"
            );
            Ok(RosterConfirmation {
                message: format!("Unregistered {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
            Err(e)
        }
    }
}

// Zero only if the activity vanished, which the fixed catalog rules out.
fn capacity_of(repo: &ActivityRosterRepo, activity_name: &str) -> u32 {
    repo.get(activity_name)
        .map(|a| a.max_participants)
        .unwrap_or_default()
}
