use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}

/// Activities keyed by name, kept in seed order.
///
/// Serializes as a JSON object so the wire shape matches a plain map while
/// the listing order stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    entries: Vec<(String, Activity)>,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an activity. Returns `false` (and leaves the catalog alone)
    /// when the name is already taken.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) -> bool {
        let name = name.into();
        if self.get(&name).is_some() {
            return false;
        }
        self.entries.push((name, activity));
        true
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(n, a)| (n, a)))
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = ActivityCatalog;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping activity names to activities")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
        let mut catalog = ActivityCatalog::new();
        while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
            if !catalog.insert(name.clone(), activity) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate activity '{}'",
                    name
                )));
            }
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(max: u32, participants: &[&str]) -> Activity {
        Activity {
            description: "d".to_string(),
            schedule: "s".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn catalog_serializes_in_insertion_order() {
        let mut catalog = ActivityCatalog::new();
        catalog.insert("Zebra Club", activity(3, &[]));
        catalog.insert("Art Club", activity(3, &["a@x.edu"]));

        let json = serde_json::to_string(&catalog).unwrap();
        let zebra = json.find("Zebra Club").unwrap();
        let art = json.find("Art Club").unwrap();
        assert!(zebra < art);
    }

    #[test]
    fn catalog_rejects_duplicate_names_on_insert() {
        let mut catalog = ActivityCatalog::new();
        assert!(catalog.insert("Chess Club", activity(3, &[])));
        assert!(!catalog.insert("Chess Club", activity(9, &[])));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Chess Club").unwrap().max_participants, 3);
    }

    #[test]
    fn catalog_deserializes_keeping_file_order() {
        let json = r#"{
            "B": {"description": "b", "schedule": "s", "max_participants": 2},
            "A": {"description": "a", "schedule": "s", "max_participants": 2, "participants": ["x@y.edu"]}
        }"#;
        let catalog: ActivityCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["B", "A"]);
        assert!(catalog.get("B").unwrap().participants.is_empty());
        assert!(catalog.get("A").unwrap().has_participant("x@y.edu"));
    }

    #[test]
    fn is_full_compares_against_max() {
        assert!(!activity(2, &["a@x.edu"]).is_full());
        assert!(activity(2, &["a@x.edu", "b@x.edu"]).is_full());
    }
}
