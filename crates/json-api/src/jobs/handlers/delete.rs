//! Delete Job Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    jobs::errors::{into_status_error, outcome},
    observability::observe_job_operation,
    state::State,
};

/// Delete Job Handler
///
/// Succeeds whether or not the job existed.
#[endpoint(
    tags("jobs"),
    summary = "Delete Job",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Job deleted"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Failed to delete job"),
    ),
)]
pub(crate) async fn handler(
    job: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = depot.owner_id_or_401()?;

    let result = state
        .app
        .jobs
        .delete_job(owner, job.into_inner().into())
        .await;

    observe_job_operation("delete", outcome(&result));

    result.map_err(|error| into_status_error(error, "Failed to delete job"))?;

    Ok(StatusCode::NO_CONTENT)
}
