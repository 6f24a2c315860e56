//! Job Records
//!
//! A job application is stored as a JSON document. Creation fills every
//! allow-listed field, so a created record is always fully populated. Records
//! returned by the store after an update are passed through verbatim.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    domain::jobs::data::JobFields,
    store::{Item, RECORD_ID_ATTRIBUTE, RecordKey},
};

/// Attribute set once when the record is created.
pub const CREATED_AT_ATTRIBUTE: &str = "createdAt";

/// Attribute refreshed on every accepted update.
pub const UPDATED_AT_ATTRIBUTE: &str = "updatedAt";

/// Fields a caller may supply on create and change on update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JobField {
    Company,
    Role,
    LocationType,
    Status,
    AppliedDate,
    FollowupDate,
    JobUrl,
    ContactName,
    Notes,
}

impl JobField {
    /// The full allow-list, in document order.
    pub const ALL: [Self; 9] = [
        Self::Company,
        Self::Role,
        Self::LocationType,
        Self::Status,
        Self::AppliedDate,
        Self::FollowupDate,
        Self::JobUrl,
        Self::ContactName,
        Self::Notes,
    ];

    /// Attribute name used in request bodies and stored documents.
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Role => "role",
            Self::LocationType => "locationType",
            Self::Status => "status",
            Self::AppliedDate => "appliedDate",
            Self::FollowupDate => "followupDate",
            Self::JobUrl => "jobUrl",
            Self::ContactName => "contactName",
            Self::Notes => "notes",
        }
    }

    #[must_use]
    pub fn from_attribute(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.attribute() == name)
    }

    /// Value given to the field when a new record does not supply one.
    #[must_use]
    pub fn default_value(self, created_at: &str) -> Value {
        match self {
            Self::Company | Self::Role | Self::JobUrl => Value::String(String::new()),
            Self::LocationType => Value::from("remote"),
            Self::Status => Value::from("applied"),
            Self::AppliedDate => Value::from(created_at),
            Self::FollowupDate | Self::ContactName | Self::Notes => Value::Null,
        }
    }
}

/// Formats an instant the way records store it: UTC with millisecond precision.
#[must_use]
pub fn format_timestamp(timestamp: Timestamp) -> String {
    format!("{timestamp:.3}")
}

/// Job Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobRecord(Item);

impl JobRecord {
    /// Builds a new, fully populated record.
    ///
    /// Supplied values, `null` and other falsy JSON included, are taken
    /// verbatim. Only absent fields receive the default. `createdAt` and `updatedAt` are both set to `created_at`.
    #[must_use]
    pub fn create(key: &RecordKey, fields: &JobFields, created_at: &str) -> Self {
        let mut item = key.attributes();

        for field in JobField::ALL {
            let value = fields
                .get(field)
                .cloned()
                .unwrap_or_else(|| field.default_value(created_at));

            item.insert(field.attribute().to_string(), value);
        }

        item.insert(CREATED_AT_ATTRIBUTE.to_string(), Value::from(created_at));
        item.insert(UPDATED_AT_ATTRIBUTE.to_string(), Value::from(created_at));

        Self(item)
    }

    #[must_use]
    pub fn as_item(&self) -> &Item {
        &self.0
    }

    #[must_use]
    pub fn into_item(self) -> Item {
        self.0
    }

    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.0.get(attribute)
    }

    #[must_use]
    pub fn field(&self, field: JobField) -> Option<&Value> {
        self.get(field.attribute())
    }

    #[must_use]
    pub fn record_id(&self) -> Option<&str> {
        self.get(RECORD_ID_ATTRIBUTE).and_then(Value::as_str)
    }

    #[must_use]
    pub fn created_at(&self) -> Option<&str> {
        self.get(CREATED_AT_ATTRIBUTE).and_then(Value::as_str)
    }

    #[must_use]
    pub fn updated_at(&self) -> Option<&str> {
        self.get(UPDATED_AT_ATTRIBUTE).and_then(Value::as_str)
    }
}

impl From<Item> for JobRecord {
    fn from(item: Item) -> Self {
        Self(item)
    }
}
