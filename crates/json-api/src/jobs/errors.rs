//! Job Errors

use salvo::http::StatusError;
use tracing::error;

use jobtrack_app::domain::jobs::JobsServiceError;

use crate::observability::JobOutcome;

/// Maps a service error to its HTTP status. Store failures are logged and
/// answered with `failure` so no storage detail reaches the client.
pub(crate) fn into_status_error(error: JobsServiceError, failure: &'static str) -> StatusError {
    match error {
        JobsServiceError::NoValidFields => {
            StatusError::bad_request().brief("No valid fields to update")
        }
        JobsServiceError::NotFound => StatusError::not_found().brief("Job not found"),
        JobsServiceError::Store(source) => {
            error!("{failure}: {source}");

            StatusError::internal_server_error().brief(failure)
        }
    }
}

/// Metrics outcome label for a service result.
pub(crate) fn outcome<T>(result: &Result<T, JobsServiceError>) -> JobOutcome {
    match result {
        Ok(_) => JobOutcome::Ok,
        Err(JobsServiceError::NoValidFields) => JobOutcome::NoValidFields,
        Err(JobsServiceError::NotFound) => JobOutcome::NotFound,
        Err(JobsServiceError::Store(_)) => JobOutcome::StoreError,
    }
}

#[cfg(test)]
mod tests {
    use jobtrack_app::store::StoreError;
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn no_valid_fields_is_bad_request() {
        let error = into_status_error(JobsServiceError::NoValidFields, "Failed to update job");

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "No valid fields to update");
    }

    #[test]
    fn not_found_is_404() {
        let error = into_status_error(JobsServiceError::NotFound, "Failed to get job");

        assert_eq!(error.code, StatusCode::NOT_FOUND);
        assert_eq!(error.brief, "Job not found");
    }

    #[test]
    fn store_failure_uses_opaque_message() {
        let error = into_status_error(
            StoreError::from(sqlx::Error::PoolTimedOut).into(),
            "Failed to delete job",
        );

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.brief, "Failed to delete job");
    }

    #[test]
    fn outcomes_follow_the_service_result() {
        let store: Result<(), JobsServiceError> =
            Err(StoreError::from(sqlx::Error::PoolTimedOut).into());

        assert_eq!(outcome(&Ok::<_, JobsServiceError>(())), JobOutcome::Ok);
        assert_eq!(
            outcome::<()>(&Err(JobsServiceError::NoValidFields)),
            JobOutcome::NoValidFields
        );
        assert_eq!(
            outcome::<()>(&Err(JobsServiceError::NotFound)),
            JobOutcome::NotFound
        );
        assert_eq!(outcome(&store), JobOutcome::StoreError);
    }
}
