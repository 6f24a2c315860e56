//! Get Job Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    jobs::{
        errors::{into_status_error, outcome},
        models::JobResponse,
    },
    observability::observe_job_operation,
    state::State,
};

/// Get Job Handler
///
/// Returns the stored job document.
#[endpoint(
    tags("jobs"),
    summary = "Get Job",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Job found"),
        (status_code = StatusCode::NOT_FOUND, description = "Job not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Failed to get job"),
    ),
)]
pub(crate) async fn handler(
    job: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<JobResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = depot.owner_id_or_401()?;

    let result = state
        .app
        .jobs
        .get_job(owner, job.into_inner().into())
        .await;

    observe_job_operation("get", outcome(&result));

    let record = result.map_err(|error| into_status_error(error, "Failed to get job"))?;

    Ok(Json(record.into()))
}
