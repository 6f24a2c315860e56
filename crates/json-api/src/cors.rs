//! Cross-origin headers for browser clients.

use salvo::{
    cors::{AllowOrigin, Cors, CorsHandler},
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE, HeaderName, LOCATION},
    },
};

const REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Allows any origin and answers preflight requests. Hooped on the service so
/// it also covers unmatched routes.
pub(crate) fn handler() -> CorsHandler {
    Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(vec![AUTHORIZATION, CONTENT_TYPE, REQUEST_ID])
        .expose_headers(vec![LOCATION, REQUEST_ID])
        .into_handler()
}
