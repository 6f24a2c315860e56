//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use jobtrack_app::{
    context::AppContext,
    domain::jobs::{MockJobsService, data::JobFields, records::JobRecord},
    identity::{MockOwnerResolver, models::OwnerId},
    store::{RecordId, RecordKey},
};

use crate::{cors, errors::json_errors, extensions::*, state::State};

pub(crate) const TEST_OWNER_ID: &str = "test-owner";
pub(crate) const TEST_CREATED_AT: &str = "2026-10-14T09:30:00.000Z";

pub(crate) fn test_owner() -> OwnerId {
    OwnerId::from(TEST_OWNER_ID)
}

#[salvo::handler]
pub(crate) async fn inject_owner(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_owner_id(test_owner());
    ctrl.call_next(req, depot, res).await;
}

/// A fully defaulted record owned by the test owner.
pub(crate) fn make_job(record: &str) -> JobRecord {
    JobRecord::create(
        &RecordKey::new(test_owner(), RecordId::from(record)),
        &JobFields::default(),
        TEST_CREATED_AT,
    )
}

fn strict_owners_mock() -> MockOwnerResolver {
    let mut owners = MockOwnerResolver::new();

    owners.expect_resolve_owner().never();

    owners
}

fn strict_jobs_mock() -> MockJobsService {
    let mut jobs = MockJobsService::new();

    jobs.expect_create_job().never();
    jobs.expect_get_job().never();
    jobs.expect_list_jobs().never();
    jobs.expect_update_job().never();
    jobs.expect_delete_job().never();

    jobs
}

pub(crate) fn state_with_jobs(jobs: MockJobsService) -> Arc<State> {
    State::from_app_context(AppContext {
        jobs: Arc::new(jobs),
        owners: Arc::new(strict_owners_mock()),
    })
}

pub(crate) fn state_with_owners(owners: MockOwnerResolver) -> Arc<State> {
    State::from_app_context(AppContext {
        jobs: Arc::new(strict_jobs_mock()),
        owners: Arc::new(owners),
    })
}

pub(crate) fn jobs_service(jobs: MockJobsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_jobs(jobs)))
            .hoop(inject_owner)
            .push(route),
    )
    .hoop(cors::handler())
    .hoop(json_errors)
}
