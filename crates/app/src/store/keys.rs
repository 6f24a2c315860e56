//! Record keys.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{identity::models::OwnerId, store::Item};

/// Attribute holding the partition key inside every stored document.
pub const OWNER_ID_ATTRIBUTE: &str = "ownerId";

/// Attribute holding the sort key inside every stored document.
pub const RECORD_ID_ATTRIBUTE: &str = "recordId";

/// Sort key of a job record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generates a fresh random (v4) identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Composite key addressing exactly one document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub owner: OwnerId,
    pub record: RecordId,
}

impl RecordKey {
    #[must_use]
    pub fn new(owner: OwnerId, record: RecordId) -> Self {
        Self { owner, record }
    }

    /// The key attributes as they appear inside a stored document.
    #[must_use]
    pub fn attributes(&self) -> Item {
        let mut item = Item::new();

        item.insert(
            OWNER_ID_ATTRIBUTE.to_string(),
            Value::String(self.owner.as_str().to_string()),
        );
        item.insert(
            RECORD_ID_ATTRIBUTE.to_string(),
            Value::String(self.record.as_str().to_string()),
        );

        item
    }
}
