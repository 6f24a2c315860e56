//! Jobs Data

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{
    domain::jobs::records::{JobField, UPDATED_AT_ATTRIBUTE},
    store::Item,
};

/// Caller-supplied values for allow-listed fields.
///
/// Keys outside the allow-list are dropped. Explicit `null` values are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFields(BTreeMap<JobField, Value>);

impl JobFields {
    #[must_use]
    pub fn from_candidates(candidates: Map<String, Value>) -> Self {
        Self(
            candidates
                .into_iter()
                .filter_map(|(name, value)| {
                    JobField::from_attribute(&name).map(|field| (field, value))
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn with(mut self, field: JobField, value: Value) -> Self {
        self.0.insert(field, value);
        self
    }

    #[must_use]
    pub fn get(&self, field: JobField) -> Option<&Value> {
        self.0.get(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (JobField, &Value)> {
        self.0.iter().map(|(field, value)| (*field, value))
    }
}

/// New Job Data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewJob {
    pub fields: JobFields,
}

/// Job Update Data
///
/// Exactly the staged fields are written; everything else is left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobUpdate {
    pub fields: JobFields,
}

impl JobUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The attributes to merge into the stored document, including `updatedAt`.
    #[must_use]
    pub fn into_attributes(self, updated_at: &str) -> Item {
        let mut item: Item = self
            .fields
            .0
            .into_iter()
            .map(|(field, value)| (field.attribute().to_string(), value))
            .collect();

        item.insert(UPDATED_AT_ATTRIBUTE.to_string(), Value::from(updated_at));

        item
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn candidates(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn from_candidates_keeps_only_allow_listed_fields() {
        let fields = JobFields::from_candidates(candidates(json!({
            "company": "Acme",
            "recordId": "forged",
            "createdAt": "1970-01-01T00:00:00.000Z",
            "salary": 100,
        })));

        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get(JobField::Company), Some(&json!("Acme")));
    }

    #[test]
    fn from_candidates_keeps_explicit_nulls() {
        let fields = JobFields::from_candidates(candidates(json!({ "notes": null })));

        assert_eq!(fields.get(JobField::Notes), Some(&Value::Null));
    }

    #[test]
    fn from_empty_candidates_is_empty() {
        assert!(JobFields::from_candidates(Map::new()).is_empty());
    }

    #[test]
    fn update_attributes_hold_staged_fields_and_updated_at() {
        let update = JobUpdate {
            fields: JobFields::default()
                .with(JobField::Status, json!("interviewing"))
                .with(JobField::FollowupDate, Value::Null),
        };

        let attributes = update.into_attributes("2026-10-14T10:00:00.000Z");

        assert_eq!(attributes.len(), 3);
        assert_eq!(attributes.get("status"), Some(&json!("interviewing")));
        assert_eq!(attributes.get("followupDate"), Some(&Value::Null));
        assert_eq!(
            attributes.get("updatedAt"),
            Some(&json!("2026-10-14T10:00:00.000Z"))
        );
    }
}
