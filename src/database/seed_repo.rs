use std::path::Path;

use crate::error::StartupError;
use crate::models::{Activity, ActivityCatalog};

// name, description, schedule, max_participants, participants
const DEFAULT_SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["lucas@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        &["liam@mergington.edu", "ava@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Mondays, 3:30 PM - 5:00 PM",
        15,
        &["amelia@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Thursdays, 3:30 PM - 5:30 PM",
        20,
        &["ella@mergington.edu", "jack@mergington.edu"],
    ),
    (
        "Math Club",
        "Solve challenging problems and participate in math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        &["james@mergington.edu", "benjamin@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        &["charlotte@mergington.edu", "henry@mergington.edu"],
    ),
];

pub fn default_catalog() -> ActivityCatalog {
    let mut catalog = ActivityCatalog::new();
    for (name, description, schedule, max_participants, participants) in DEFAULT_SEED {
        catalog.insert(
            *name,
            Activity {
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: *max_participants,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            },
        );
    }
    catalog
}

/// Reads a catalog from a JSON file shaped like the `GET /activities` body.
pub fn load_catalog_file(path: &Path) -> Result<ActivityCatalog, StartupError> {
    let raw = std::fs::read_to_string(path).map_err(|source| StartupError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: ActivityCatalog =
        serde_json::from_str(&raw).map_err(|source| StartupError::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn validate_catalog(catalog: &ActivityCatalog) -> Result<(), StartupError> {
    for (name, activity) in catalog.iter() {
        if activity.max_participants == 0 {
            return Err(StartupError::SeedInvalid(format!(
                "activity '{}' has max_participants 0",
                name
            )));
        }
        for (i, email) in activity.participants.iter().enumerate() {
            if activity.participants[..i].contains(email) {
                return Err(StartupError::SeedInvalid(format!(
                    "activity '{}' lists {} more than once",
                    name, email
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "activity-signup-{}-{}.json",
            name,
            std::process::id()
        ));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn default_catalog_is_valid_and_ordered() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.names().next(), Some("Chess Club"));
        assert!(validate_catalog(&catalog).is_ok());
        assert!(catalog
            .get("Chess Club")
            .unwrap()
            .has_participant("daniel@mergington.edu"));
        assert!(catalog
            .get("Programming Class")
            .unwrap()
            .has_participant("emma@mergington.edu"));
    }

    #[test]
    fn loads_catalog_from_file() {
        let path = write_temp(
            "ok",
            r#"{"Robotics": {"description": "Build robots", "schedule": "Mondays", "max_participants": 8, "participants": ["r@mergington.edu"]}}"#,
        );
        let catalog = load_catalog_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Robotics").unwrap().max_participants, 8);
    }

    #[test]
    fn rejects_duplicate_participants() {
        let path = write_temp(
            "dup",
            r#"{"Robotics": {"description": "d", "schedule": "s", "max_participants": 8, "participants": ["r@x.edu", "r@x.edu"]}}"#,
        );
        let err = load_catalog_file(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(err, StartupError::SeedInvalid(_)));
    }

    #[test]
    fn rejects_zero_capacity() {
        let path = write_temp(
            "zero",
            r#"{"Robotics": {"description": "d", "schedule": "s", "max_participants": 0}}"#,
        );
        let err = load_catalog_file(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(err, StartupError::SeedInvalid(_)));
    }

    #[test]
    fn reports_missing_file_and_bad_json() {
        let missing = std::env::temp_dir().join("activity-signup-does-not-exist.json");
        assert!(matches!(
            load_catalog_file(&missing),
            Err(StartupError::SeedRead { .. })
        ));

        let path = write_temp("bad", "not json");
        let err = load_catalog_file(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, StartupError::SeedParse { .. }));
    }
}
