//! Job Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    jobs::{
        errors::{into_status_error, outcome},
        models::JobsResponse,
    },
    observability::observe_job_operation,
    state::State,
};

/// Job Index Handler
///
/// Returns every job of the caller, unordered and unpaginated.
#[endpoint(
    tags("jobs"),
    summary = "List Jobs",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Jobs of the caller"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Failed to get jobs"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<JobsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = depot.owner_id_or_401()?;

    let result = state.app.jobs.list_jobs(owner).await;

    observe_job_operation("list", outcome(&result));

    let records = result.map_err(|error| into_status_error(error, "Failed to get jobs"))?;

    Ok(Json(JobsResponse {
        jobs: records.into_iter().map(Into::into).collect(),
    }))
}
