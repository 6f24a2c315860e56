//! Job request and response bodies

use salvo::{Request, http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use jobtrack_app::domain::jobs::{
    data::{JobFields, JobUpdate, NewJob},
    records::JobRecord,
};

use crate::extensions::*;

/// Candidate field values for a job application
///
/// Any JSON object is accepted. Keys outside `company`, `role`,
/// `locationType`, `status`, `appliedDate`, `followupDate`, `jobUrl`,
/// `contactName` and `notes` are ignored.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub(crate) struct JobPayload(#[salvo(schema(value_type = Object))] pub(crate) Map<String, Value>);

impl JobPayload {
    /// Parses the request body as a JSON object, whatever content type the
    /// client declared.
    pub(crate) async fn from_request(req: &mut Request) -> Result<Self, StatusError> {
        let payload = req
            .payload()
            .await
            .or_400("Request body could not be read")?;

        serde_json::from_slice(payload).or_400("Request body must be a JSON object")
    }
}

impl From<JobPayload> for NewJob {
    fn from(payload: JobPayload) -> Self {
        NewJob {
            fields: JobFields::from_candidates(payload.0),
        }
    }
}

impl From<JobPayload> for JobUpdate {
    fn from(payload: JobPayload) -> Self {
        JobUpdate {
            fields: JobFields::from_candidates(payload.0),
        }
    }
}

/// A stored job application document, returned verbatim
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub(crate) struct JobResponse(#[salvo(schema(value_type = Object))] pub(crate) Map<String, Value>);

impl From<JobRecord> for JobResponse {
    fn from(record: JobRecord) -> Self {
        Self(record.into_item())
    }
}

#[cfg(test)]
impl JobResponse {
    pub(crate) fn get(&self, attribute: &str) -> Option<&Value> {
        self.0.get(attribute)
    }
}

/// Every job application of the caller
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct JobsResponse {
    /// Job application documents in store order
    pub jobs: Vec<JobResponse>,
}
