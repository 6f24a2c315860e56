//! Identity Config

use clap::Args;

use jobtrack_app::identity::models::PLACEHOLDER_OWNER_ID;

/// Caller identity settings.
#[derive(Debug, Args)]
pub struct IdentityConfig {
    /// Owner id assigned to every caller until authentication exists
    #[arg(long, env = "PLACEHOLDER_OWNER_ID", default_value = PLACEHOLDER_OWNER_ID)]
    pub placeholder_owner_id: String,
}
