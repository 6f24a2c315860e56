//! JSON error bodies.

use salvo::{http::ResBody, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

/// Renders error responses as `{"error": "..."}` instead of salvo's default page.
#[handler]
pub(crate) async fn json_errors(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    ctrl.call_next(req, depot, res).await;

    let Some(status) = res.status_code.filter(|status| status.is_client_error() || status.is_server_error())
    else {
        return;
    };

    let message = match &res.body {
        ResBody::Error(error) if !error.brief.is_empty() => error.brief.clone(),
        ResBody::Error(_) | ResBody::None => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
        _ => return,
    };

    res.body(ResBody::None);
    res.status_code(status);
    res.render(Json(ErrorBody { error: message }));
}
