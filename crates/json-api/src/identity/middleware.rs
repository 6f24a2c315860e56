//! Identity middleware.

use std::sync::Arc;

use jobtrack_app::identity::IdentityError;
use salvo::{http::header::AUTHORIZATION, prelude::*};

use crate::{extensions::*, state::State};

/// Resolves the owner of the request and stores it in the depot.
///
/// The bearer token is optional; whether its absence is acceptable is up to
/// the configured resolver.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let credentials = extract_bearer_token(req).map(ToOwned::to_owned);

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    let owner = match state.app.owners.resolve_owner(credentials).await {
        Ok(owner) => owner,
        Err(IdentityError::Unauthenticated) => {
            res.render(StatusError::unauthorized().brief("Caller could not be identified"));

            return;
        }
    };

    depot.insert_owner_id(owner);

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
