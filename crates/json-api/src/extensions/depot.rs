//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use jobtrack_app::identity::models::OwnerId;

const OWNER_ID_DEPOT_KEY: &str = "owner_id";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_owner_id(&mut self, owner: OwnerId);

    /// The owner resolved by the identity middleware.
    fn owner_id_or_401(&self) -> Result<OwnerId, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_owner_id(&mut self, owner: OwnerId) {
        self.insert(OWNER_ID_DEPOT_KEY, owner);
    }

    fn owner_id_or_401(&self) -> Result<OwnerId, StatusError> {
        self.get::<OwnerId>(OWNER_ID_DEPOT_KEY)
            .cloned()
            .map_err(|_ignored| StatusError::unauthorized().brief("Caller could not be identified"))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn owner_id_round_trips_through_depot() -> TestResult {
        let mut depot = Depot::new();

        depot.insert_owner_id(OwnerId::from("owner-a"));

        assert_eq!(depot.owner_id_or_401()?, OwnerId::from("owner-a"));

        Ok(())
    }

    #[test]
    fn missing_owner_id_is_unauthorized() {
        let depot = Depot::new();

        let error = depot.owner_id_or_401().err();

        assert_eq!(
            error.map(|error| error.code),
            Some(salvo::http::StatusCode::UNAUTHORIZED)
        );
    }
}
