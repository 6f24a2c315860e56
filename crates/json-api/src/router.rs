//! Job routes

use salvo::Router;

use crate::{identity, jobs};

/// `/jobs` and `/jobs/{job}` behind the identity middleware. Expects `State`
/// to be injected by an outer router.
pub(crate) fn jobs_router() -> Router {
    Router::new().hoop(identity::middleware::handler).push(
        Router::with_path("jobs")
            .get(jobs::index::handler)
            .post(jobs::create::handler)
            .push(
                Router::with_path("{job}")
                    .get(jobs::get::handler)
                    .patch(jobs::update::handler)
                    .put(jobs::update::handler)
                    .delete(jobs::delete::handler),
            ),
    )
}
