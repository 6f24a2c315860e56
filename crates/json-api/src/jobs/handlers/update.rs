//! Update Job Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use jobtrack_app::domain::jobs::data::JobUpdate;

use crate::{
    extensions::*,
    jobs::{
        errors::{into_status_error, outcome},
        models::{JobPayload, JobResponse},
    },
    observability::observe_job_operation,
    state::State,
};

/// Job Update Handler
///
/// Writes only the supplied allow-listed fields and refreshes `updatedAt`.
#[endpoint(
    tags("jobs"),
    summary = "Update Job",
    security(("bearer_auth" = [])),
    request_body = JobPayload,
    responses(
        (status_code = StatusCode::OK, description = "Job updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed body or no valid fields to update"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Failed to update job"),
    ),
)]
#[tracing::instrument(
    name = "jobs.update",
    skip(job, req, depot),
    fields(
        owner_id = tracing::field::Empty,
        record_id = tracing::field::Empty,
        staged_fields = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    job: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<JobResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = depot.owner_id_or_401()?;
    let record = job.into_inner();
    let update = JobUpdate::from(JobPayload::from_request(req).await?);

    let span = tracing::Span::current();

    span.record("owner_id", tracing::field::display(&owner));
    span.record("record_id", tracing::field::display(&record));
    span.record("staged_fields", update.fields.len());

    let result = state
        .app
        .jobs
        .update_job(owner, record.as_str().into(), update)
        .await;

    observe_job_operation("update", outcome(&result));

    let updated = result.map_err(|error| into_status_error(error, "Failed to update job"))?;

    tracing::info!(record_id = %record, "updated job");

    Ok(Json(updated.into()))
}
