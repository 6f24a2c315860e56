//! Create Job Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use jobtrack_app::domain::jobs::data::NewJob;

use crate::{
    extensions::*,
    jobs::{
        errors::{into_status_error, outcome},
        models::{JobPayload, JobResponse},
    },
    observability::observe_job_operation,
    state::State,
};

/// Create Job Handler
///
/// Fields that are not supplied receive their defaults. The body is read as
/// JSON whatever content type the client declared.
#[endpoint(
    tags("jobs"),
    summary = "Create Job",
    security(("bearer_auth" = [])),
    request_body = JobPayload,
    responses(
        (status_code = StatusCode::CREATED, description = "Job created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed JSON body"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Failed to create job"),
    ),
)]
#[tracing::instrument(
    name = "jobs.create",
    skip(req, depot, res),
    fields(
        owner_id = tracing::field::Empty,
        record_id = tracing::field::Empty,
        supplied_fields = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<JobResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = depot.owner_id_or_401()?;
    let job = NewJob::from(JobPayload::from_request(req).await?);

    let span = tracing::Span::current();

    span.record("owner_id", tracing::field::display(&owner));
    span.record("supplied_fields", job.fields.len());

    let result = state.app.jobs.create_job(owner, job).await;

    observe_job_operation("create", outcome(&result));

    let record = result.map_err(|error| into_status_error(error, "Failed to create job"))?;

    let record_id = record.record_id().unwrap_or_default().to_owned();

    span.record("record_id", tracing::field::display(&record_id));

    res.add_header(LOCATION, format!("/jobs/{record_id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(record_id = %record_id, "created job");

    Ok(Json(record.into()))
}
