//! Example Domain Model
//!
//! Represents an Example record in the store. Identity and timestamps are
//! assigned by storage on insert, so entities are only ever restored from
//! persisted rows.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Newtype wrapper for Example ID providing type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExampleId(Uuid);

impl ExampleId {
    /// Create a new random ExampleId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ExampleId from an existing UUID
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ExampleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ExampleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ExampleId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl TryFrom<&str> for ExampleId {
    type Error = uuid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(Uuid::parse_str(value)?))
    }
}

/// Data required to create a new Example
#[derive(Debug, Clone)]
pub struct CreateExampleData {
    pub name: String,
    pub lucky_number: f64,
    pub is_premium: bool,
}

/// Data for a partial Example update
///
/// Each field is tri-state: `None` = leave the stored value unchanged,
/// `Some(v)` = write `v`. An all-`None` update is still a mutation (the
/// timestamp is bumped).
#[derive(Debug, Clone, Default)]
pub struct UpdateExampleData {
    pub name: Option<String>,
    pub lucky_number: Option<f64>,
    pub is_premium: Option<bool>,
}

/// Example domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    id: ExampleId,
    name: String,
    lucky_number: f64,
    is_premium: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Example {
    /// Restore an Example from persisted data
    #[must_use]
    pub fn restore(
        id: ExampleId,
        name: String,
        lucky_number: f64,
        is_premium: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            lucky_number,
            is_premium,
            created_at,
            updated_at,
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> &ExampleId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn lucky_number(&self) -> f64 {
        self.lucky_number
    }

    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.is_premium
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_id_new() {
        let id1 = ExampleId::new();
        let id2 = ExampleId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_example_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = ExampleId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_example_id_try_from_str() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = ExampleId::try_from(uuid_str).unwrap();
        assert_eq!(id.to_string(), uuid_str);

        assert!(ExampleId::try_from("not-a-uuid").is_err());
    }

    #[test]
    fn test_restore_preserves_fields() {
        let id = ExampleId::new();
        let now = Utc::now();
        let example = Example::restore(id.clone(), "Widget".to_string(), 7.5, true, now, now);

        assert_eq!(example.id(), &id);
        assert_eq!(example.name(), "Widget");
        assert_eq!(example.lucky_number(), 7.5);
        assert!(example.is_premium());
        assert_eq!(example.created_at(), example.updated_at());
    }

    #[test]
    fn test_update_data_defaults_to_all_absent() {
        let update = UpdateExampleData::default();
        assert!(update.name.is_none());
        assert!(update.lucky_number.is_none());
        assert!(update.is_premium.is_none());
    }
}
