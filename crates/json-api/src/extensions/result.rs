//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::{debug, error};

/// Map errors to HTTP errors.
pub(crate) trait ResultExt<T> {
    /// A logged internal server error that hides the cause.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// A bad request carrying `brief` as its message.
    fn or_400(self, brief: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self, brief: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            debug!("{brief}: {error}");

            StatusError::bad_request().brief(brief)
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn or_500_hides_the_cause() {
        let result: Result<(), String> = Err("connection refused".to_string());

        let error = result.or_500("failed to reach store").err();

        assert_eq!(
            error.as_ref().map(|error| error.code),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
        assert!(
            error.is_some_and(|error| !error.brief.contains("connection refused")),
            "cause must not reach the client"
        );
    }

    #[test]
    fn or_400_uses_the_brief() {
        let result: Result<(), String> = Err("expected value at line 1".to_string());

        let error = result.or_400("Request body must be a JSON object").err();

        assert_eq!(
            error.as_ref().map(|error| error.code),
            Some(StatusCode::BAD_REQUEST)
        );
        assert_eq!(
            error.map(|error| error.brief),
            Some("Request body must be a JSON object".to_string())
        );
    }
}
