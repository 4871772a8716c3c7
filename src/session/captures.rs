//! Records captured from successful creating calls

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::common::{Error, Result};

/// Kind of record the scenario keeps for later phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Course,
    Enrollment,
    Quiz,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Course => "course",
            EntityKind::Enrollment => "enrollment",
            EntityKind::Quiz => "quiz",
        }
    }
}

/// Server-assigned identifier, rendered as a path segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityId(String);

impl EntityId {
    /// Read the `id` field of a record; numbers and strings are accepted
    pub fn from_record(record: &Value) -> Option<Self> {
        match record.get("id")? {
            Value::Number(n) => Some(Self(n.to_string())),
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Write-once store of captured records, keyed by kind and mnemonic
#[derive(Debug, Default)]
pub struct Captures {
    records: HashMap<(EntityKind, String), Value>,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record; returns false and keeps the first one if the key is taken
    pub fn insert(&mut self, kind: EntityKind, key: &str, record: Value) -> bool {
        use std::collections::hash_map::Entry;
        match self.records.entry((kind, key.to_string())) {
            Entry::Occupied(_) => {
                tracing::debug!(kind = kind.as_str(), key, "Capture already present, keeping first");
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    pub fn get(&self, kind: EntityKind, key: &str) -> Option<&Value> {
        self.records.get(&(kind, key.to_string()))
    }

    pub fn contains(&self, kind: EntityKind, key: &str) -> bool {
        self.get(kind, key).is_some()
    }

    /// ID of a captured record
    ///
    /// `Ok(None)` when nothing was captured under the key; an error when a
    /// record was captured but carries no usable `id`.
    pub fn id(&self, kind: EntityKind, key: &str) -> Result<Option<EntityId>> {
        match self.get(kind, key) {
            None => Ok(None),
            Some(record) => EntityId::from_record(record).map(Some).ok_or_else(|| {
                Error::unexpected_response(
                    &format!("captured {} '{}'", kind.as_str(), key),
                    "record has no 'id'",
                )
            }),
        }
    }

    /// Total number of captured records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entries_are_write_once() {
        let mut captures = Captures::new();
        assert!(captures.insert(EntityKind::Course, "python", json!({ "id": 1 })));
        assert!(!captures.insert(EntityKind::Course, "python", json!({ "id": 2 })));
        assert_eq!(
            captures.id(EntityKind::Course, "python").unwrap(),
            Some(EntityId("1".to_string()))
        );
        assert_eq!(captures.len(), 1);
    }

    #[test]
    fn test_kinds_do_not_collide() {
        let mut captures = Captures::new();
        captures.insert(EntityKind::Course, "python", json!({ "id": 1 }));
        captures.insert(EntityKind::Quiz, "python", json!({ "id": "q-9" }));
        assert_eq!(
            captures.id(EntityKind::Quiz, "python").unwrap().unwrap().as_str(),
            "q-9"
        );
        assert!(!captures.contains(EntityKind::Enrollment, "python"));
    }

    #[test]
    fn test_id_missing_vs_malformed() {
        let mut captures = Captures::new();
        assert_eq!(captures.id(EntityKind::Course, "python").unwrap(), None);

        captures.insert(EntityKind::Course, "python", json!({ "title": "no id" }));
        assert!(matches!(
            captures.id(EntityKind::Course, "python"),
            Err(Error::UnexpectedResponse { .. })
        ));
    }

    #[test]
    fn test_entity_id_from_record() {
        assert_eq!(
            EntityId::from_record(&json!({ "id": 42 })).unwrap().to_string(),
            "42"
        );
        assert!(EntityId::from_record(&json!({ "id": "" })).is_none());
        assert!(EntityId::from_record(&json!({ "id": null })).is_none());
        assert!(EntityId::from_record(&json!([1, 2])).is_none());
    }
}
