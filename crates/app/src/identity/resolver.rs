//! Owner resolution.

use async_trait::async_trait;
use mockall::automock;

use crate::identity::{
    errors::IdentityError,
    models::{OwnerId, PLACEHOLDER_OWNER_ID},
};

/// Resolves a fixed owner for every caller, ignoring any supplied credentials.
#[derive(Debug, Clone)]
pub struct PlaceholderOwnerResolver {
    owner: OwnerId,
}

impl PlaceholderOwnerResolver {
    #[must_use]
    pub fn new(owner: OwnerId) -> Self {
        Self { owner }
    }
}

impl Default for PlaceholderOwnerResolver {
    fn default() -> Self {
        Self::new(OwnerId::from(PLACEHOLDER_OWNER_ID))
    }
}

#[async_trait]
impl OwnerResolver for PlaceholderOwnerResolver {
    async fn resolve_owner(&self, _credentials: Option<String>) -> Result<OwnerId, IdentityError> {
        Ok(self.owner.clone())
    }
}

#[automock]
#[async_trait]
pub trait OwnerResolver: Send + Sync {
    /// Resolves the owner of the current request from its (optional) bearer credentials.
    async fn resolve_owner(&self, credentials: Option<String>) -> Result<OwnerId, IdentityError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn placeholder_defaults_to_temp_user() -> TestResult {
        let owner = PlaceholderOwnerResolver::default()
            .resolve_owner(None)
            .await?;

        assert_eq!(owner.as_str(), "temp-user-id");

        Ok(())
    }

    #[tokio::test]
    async fn placeholder_ignores_credentials() -> TestResult {
        let resolver = PlaceholderOwnerResolver::new(OwnerId::from("owner-a"));

        let owner = resolver.resolve_owner(Some("some-token".to_string())).await?;

        assert_eq!(owner, OwnerId::from("owner-a"));

        Ok(())
    }
}
